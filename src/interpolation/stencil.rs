//! Finite-difference stencils on unevenly spaced knots.
//!
//! Every derivative estimate at knot `i` is the analytic derivative, at
//! `x[i]`, of the quadratic through three neighbouring knots:
//! - interior knots use the centred triple `i-1, i, i+1`
//! - the first and last knots use the one-sided triple at their own edge
//!
//! Edge knots are never mirrored, so the edge estimate keeps second-order
//! accuracy instead of collapsing to a secant slope. Axes with only two
//! knots fall back to the secant slope and a zero second derivative.
//!
//! Mixed partials are tensor products of per-axis stencils, see
//! [`crate::interpolation::grid::Grid::mixed_derivative`].


/// Highest derivative order a stencil is built for.
pub(crate) const MAX_ORDER: usize = 2;


/// Sparse weights `w` such that `sum w[m] * f[start + m]` estimates a
/// derivative at one knot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Stencil {
    start:   usize,
    len:     usize,
    weights: [f64; 3],
}

impl Stencil {
    pub(crate) const fn identity(idx: usize) -> Self {
        Self { start: idx, len: 1, weights: [1.0, 0.0, 0.0] }
    }

    pub(crate) const fn zero() -> Self {
        Self { start: 0, len: 0, weights: [0.0; 3] }
    }

    #[inline] pub(crate) fn len(&self) -> usize { self.len }
    #[inline] pub(crate) fn is_empty(&self) -> bool { self.len == 0 }

    /// `m`-th `(knot index, weight)` pair.
    #[inline]
    pub(crate) fn term(&self, m: usize) -> (usize, f64) {
        (self.start + m, self.weights[m])
    }

    /// Applies the stencil to samples along one axis.
    #[cfg(test)]
    pub(crate) fn apply(&self, f: &[f64]) -> f64 {
        (0..self.len).map(|m| self.weights[m] * f[self.start + m]).sum()
    }
}


/// Builds `[order 0, order 1, order 2]` stencils for every knot of an axis.
///
/// Assumes `x` is validated: finite, strictly increasing, `len >= 2`.
pub(crate) fn axis_stencils(x: &[f64]) -> Vec<[Stencil; MAX_ORDER + 1]> {
    (0..x.len())
        .map(|i| [Stencil::identity(i), first_derivative(x, i), second_derivative(x, i)])
        .collect()
}


/// Start of the three-knot window used at knot `i`.
#[inline]
fn window_start(n: usize, i: usize) -> usize {
    if i == 0 { 0 } else if i == n - 1 { n - 3 } else { i - 1 }
}


fn first_derivative(x: &[f64], i: usize) -> Stencil {
    let n = x.len();
    if n == 2 {
        let inv_h = 1.0 / (x[1] - x[0]);
        return Stencil { start: 0, len: 2, weights: [-inv_h, inv_h, 0.0] };
    }

    // derivative of the Lagrange quadratic through x0, x1, x2 at xi
    let s  = window_start(n, i);
    let (x0, x1, x2) = (x[s], x[s + 1], x[s + 2]);
    let xi = x[i];

    let w0 = (2.0 * xi - x1 - x2) / ((x0 - x1) * (x0 - x2));
    let w1 = (2.0 * xi - x0 - x2) / ((x1 - x0) * (x1 - x2));
    let w2 = (2.0 * xi - x0 - x1) / ((x2 - x0) * (x2 - x1));

    Stencil { start: s, len: 3, weights: [w0, w1, w2] }
}


fn second_derivative(x: &[f64], i: usize) -> Stencil {
    let n = x.len();
    if n == 2 {
        return Stencil::zero();
    }

    let s  = window_start(n, i);
    let (x0, x1, x2) = (x[s], x[s + 1], x[s + 2]);

    let w0 = 2.0 / ((x0 - x1) * (x0 - x2));
    let w1 = 2.0 / ((x1 - x0) * (x1 - x2));
    let w2 = 2.0 / ((x2 - x0) * (x2 - x1));

    Stencil { start: s, len: 3, weights: [w0, w1, w2] }
}
