/// Stores spacings between adjacent knots
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut h = Vec::with_capacity(n.saturating_sub(1));

    for i in 0..n.saturating_sub(1) {
        h.push(x[i+1] - x[i]);
    }

    h
}


/// Index `lo` of the interval `[x[lo], x[lo+1]]` holding `xq`.
///
/// A query equal to an interior knot lands in the interval to its right;
/// the last knot lands in the last interval.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}


/// Cubic Hermite basis on `[0, 1]`, ordered
/// `[h00, h10, h01, h11]` to pair with `[f(0), h f'(0), f(1), h f'(1)]`.
///
/// Every entry is exactly 0 or 1 at `t = 0` and `t = 1`.
#[inline]
pub(crate) fn hermite_basis(t: f64) -> [f64; 4] {
    let h00 = (2.0 * t - 3.0) * t * t + 1.0;
    let h10 = (t - 2.0) * t * t + t;
    let h01 = -((2.0 * t - 3.0) * t * t);
    let h11 = (t * t) * (t - 1.0);
    [h00, h10, h01, h11]
}


/// `d/dt` of [`hermite_basis`].
#[cfg(test)]
#[inline]
pub(crate) fn hermite_basis_derivative(t: f64) -> [f64; 4] {
    let d00 = 6.0 * t * t - 6.0 * t;
    let d10 = 3.0 * t * t - 4.0 * t + 1.0;
    let d01 = -d00;
    let d11 = 3.0 * t * t - 2.0 * t;
    [d00, d10, d01, d11]
}


/// Advances a row-major multi-index bounded by `extent`.
///
/// Returns `false` once every index has wrapped back to zero.
#[inline]
pub(crate) fn next_multi_index<const N: usize>(idx: &mut [usize; N], extent: &[usize; N]) -> bool {
    for a in (0..N).rev() {
        idx[a] += 1;
        if idx[a] < extent[a] {
            return true;
        }
        idx[a] = 0;
    }
    false
}


/// Row-major strides for `shape`.
pub(crate) fn row_major_strides<const N: usize>(shape: &[usize; N]) -> [usize; N] {
    let mut strides = [1usize; N];
    for a in (0..N.saturating_sub(1)).rev() {
        strides[a] = strides[a + 1] * shape[a + 1];
    }
    strides
}
