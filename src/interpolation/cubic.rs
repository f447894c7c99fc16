//! Cubic Interpolation
//!
//! Implements tensor-product [cubic Hermite interpolation](https://en.wikipedia.org/wiki/Cubic_Hermite_spline)
//! (tricubic for `N = 3`).
//!
//! Along each axis the local polynomial is fixed by the value and first
//! derivative at both cell ends; the `N`-dimensional kernel is the tensor
//! product of those 1D bases over the `4^N` Hermite data held by
//! [`CoefficientCache`]. Derivative estimates are shared by neighbouring
//! cells, so value and first derivative are continuous across cell faces.

use crate::interpolation::cache::CoefficientCache;
use crate::interpolation::grid::Grid;
use crate::interpolation::helpers::hermite_basis;


/// Evaluates the cubic kernel at per-axis `(cell, t)` positions.
pub(crate) fn evaluate<const N: usize>(
    grid: &Grid<N>,
    cache: &CoefficientCache<N>,
    position: &[(usize, f64); N],
) -> f64 {
    let cell: [usize; N] = std::array::from_fn(|a| position[a].0);
    let basis: [[f64; 4]; N] = std::array::from_fn(|a| hermite_basis(position[a].1));
    blend(cache.get(grid, &cell), &basis)
}


/// Contracts `4^N` Hermite data with one 4-term basis per axis.
///
/// Terms with a zero basis weight are skipped, so a knot returns its sample
/// even when a derivative entry of the cell is not finite.
#[inline]
fn blend<const N: usize>(data: &[f64], basis: &[[f64; 4]; N]) -> f64 {
    let mut total = 0.0;
    for (flat, &d) in data.iter().enumerate() {
        let mut weight = 1.0;
        let mut rest = flat;
        for a in (0..N).rev() {
            weight *= basis[a][rest % 4];
            rest /= 4;
        }
        if weight != 0.0 {
            total += weight * d;
        }
    }
    total
}


/// Partial derivative of the kernel along `axis` in physical units.
#[cfg(test)]
pub(crate) fn partial<const N: usize>(
    grid: &Grid<N>,
    cache: &CoefficientCache<N>,
    position: &[(usize, f64); N],
    axis: usize,
) -> f64 {
    use crate::interpolation::helpers::hermite_basis_derivative;

    let cell: [usize; N] = std::array::from_fn(|a| position[a].0);
    let basis: [[f64; 4]; N] = std::array::from_fn(|a| {
        if a == axis { hermite_basis_derivative(position[a].1) } else { hermite_basis(position[a].1) }
    });
    blend(cache.get(grid, &cell), &basis) / grid.axis(axis).width(cell[axis])
}
