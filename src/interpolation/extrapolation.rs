//! Extrapolation inside the margin.
//!
//! A point extrapolable on the axis set `E` is evaluated as
//!
//! ```text
//! f(p) = kernel(p_clamped)
//!      + sum_c W(c) sum_{o != 0} prod_{a in E} d_a^o_a / o_a! * D^o f(c)
//! ```
//!
//! - `p_clamped` is `p` clamped onto the domain, so the zeroth-order term
//!   is whatever the kernel returns on the boundary
//! - `c` runs over the corners of the clamped cell on the in-domain axes,
//!   with the boundary knot fixed on every axis of `E`; `W(c)` are the
//!   linear blend weights
//! - `o` runs over Taylor orders `0..=P` on each axis of `E`: `P = 0` for
//!   nearest, `1` for linear, `2` for quadratic
//! - `d_a` is the signed distance past the boundary, `D^o f` the stencil
//!   estimate of [`Grid::mixed_derivative`]
//!
//! Extrapolating on several axes at once therefore composes the per-axis
//! Taylor steps as a tensor product, and every policy meets the kernel
//! continuously at the boundary.

use crate::interpolation::axis::Region;
use crate::interpolation::grid::Grid;
use crate::interpolation::helpers::next_multi_index;


/// `d^o / o!` for the orders a stencil exists for.
#[inline]
fn taylor_factor(d: f64, order: usize) -> f64 {
    match order {
        0 => 1.0,
        1 => d,
        _ => 0.5 * d * d,
    }
}


/// Evaluates a margin point.
///
/// `kernel` evaluates the in-domain kernel at clamped `(cell, t)` positions;
/// `order` is the policy's Taylor order.
pub(crate) fn evaluate<const N: usize, K>(
    grid: &Grid<N>,
    regions: &[Region; N],
    order: usize,
    kernel: K,
) -> f64
where
    K: Fn(&[(usize, f64); N]) -> f64,
{
    let clamped: [(usize, f64); N] = std::array::from_fn(|a| grid.axis(a).clamped(regions[a]));
    let base = kernel(&clamped);
    if order == 0 {
        return base;
    }

    // corners: two per in-domain axis, the boundary knot on margin axes
    // taylor: orders 0..=order per margin axis, none on in-domain axes
    let mut corner_extent = [1usize; N];
    let mut taylor_extent = [1usize; N];
    for a in 0..N {
        match regions[a] {
            Region::Inside { .. } => corner_extent[a] = 2,
            Region::Margin { .. } => taylor_extent[a] = order + 1,
        }
    }

    let mut correction = 0.0;
    let mut corner = [0usize; N];
    loop {
        let mut weight = 1.0;
        let mut node   = [0usize; N];
        for a in 0..N {
            match regions[a] {
                Region::Inside { cell, t } => {
                    node[a] = cell + corner[a];
                    weight *= if corner[a] == 1 { t } else { 1.0 - t };
                }
                Region::Margin { knot, .. } => node[a] = knot,
            }
        }

        if weight != 0.0 {
            correction += weight * taylor_terms(grid, regions, &node, &taylor_extent);
        }

        if !next_multi_index(&mut corner, &corner_extent) {
            break;
        }
    }

    base + correction
}


/// Sum of every non-zero-order Taylor term at one boundary node.
fn taylor_terms<const N: usize>(
    grid: &Grid<N>,
    regions: &[Region; N],
    node: &[usize; N],
    extent: &[usize; N],
) -> f64 {
    let mut total = 0.0;
    let mut order = [0usize; N];

    // the all-zero order is the kernel's own term, skip it
    while next_multi_index(&mut order, extent) {
        let mut factor = 1.0;
        for a in 0..N {
            if let Region::Margin { distance, .. } = regions[a] {
                factor *= taylor_factor(distance, order[a]);
            }
        }
        total += factor * grid.mixed_derivative(node, &order);
    }

    total
}
