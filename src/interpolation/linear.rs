//! Linear Interpolation
//!
//! Implements tensor-product [linear interpolation](https://en.wikipedia.org/wiki/Trilinear_interpolation).
//!
//! Inside a cell the value is the weighted sum of its `2^N` corner samples,
//! each weight the product of per-axis blend factors `1 - t` (lower corner)
//! or `t` (upper corner). For `N = 3` this is trilinear interpolation, for
//! `N = 1` the familiar
//!
//! ```text
//! yq = y[i] + (y[i+1] - y[i]) * (xq - x[i]) / (x[i+1] - x[i])
//! ```

use crate::interpolation::grid::Grid;


/// Evaluates the linear kernel at per-axis `(cell, t)` positions.
///
/// Weights are exactly `0` or `1` when `t` is `0` or `1`, so knots return
/// their samples bit-for-bit.
pub(crate) fn evaluate<const N: usize>(grid: &Grid<N>, position: &[(usize, f64); N]) -> f64 {
    let mut total = 0.0;

    for corner in 0..(1usize << N) {
        let mut weight = 1.0;
        let mut node   = [0usize; N];
        for a in 0..N {
            let (cell, t) = position[a];
            let upper = (corner >> (N - 1 - a)) & 1 == 1;
            node[a] = cell + upper as usize;
            weight *= if upper { t } else { 1.0 - t };
        }
        total += weight * grid.value(&node);
    }

    total
}
