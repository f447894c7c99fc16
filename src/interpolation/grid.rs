//! Grid validation and sample storage.
//!
//! [`Grid::new`] is the only place input is checked. Once it returns, knots
//! are known to be finite and strictly increasing, every axis carries
//! enough knots for the kernel, and the copied sample block matches the
//! knot lengths in rank and extent.

use ndarray::{ArrayBase, Data, Dimension};

use crate::interpolation::algorithms::Kernel;
use crate::interpolation::axis::{Axis, AxisName};
use crate::interpolation::config::non_finite_idx;
use crate::interpolation::errors::DomainConfigurationError;
use crate::interpolation::helpers::{next_multi_index, row_major_strides};
use crate::interpolation::stencil::Stencil;


/// Checks one knot vector.
///
/// ┌ every knot finite
/// ├ at least `kernel.min_knots()` knots
/// ├ no adjacent pair equal, or closer than `min_spacing`
/// └ adjacent pairs strictly increasing
pub(crate) fn validate_knots(
    axis: AxisName,
    knots: &[f64],
    kernel: Kernel,
    min_spacing: f64,
) -> Result<(), DomainConfigurationError> {
    if let Some(idx) = non_finite_idx(knots) {
        return Err(DomainConfigurationError::NonFiniteKnot { axis, idx });
    }

    let need = kernel.min_knots();
    if knots.len() < need {
        return Err(DomainConfigurationError::InsufficientKnots {
            axis,
            kernel,
            got: knots.len(),
            need,
        });
    }

    for i in 1..knots.len() {
        let (prev, next) = (knots[i - 1], knots[i]);
        if prev == next || (next - prev).abs() < min_spacing {
            return Err(DomainConfigurationError::DuplicateKnot { axis, idx: i, value: next });
        }
        if next < prev {
            return Err(DomainConfigurationError::NonIncreasingKnots { axis, idx: i, prev, next });
        }
    }

    Ok(())
}


/// Validated knots plus a row-major copy of the samples.
#[derive(Debug, Clone)]
pub(crate) struct Grid<const N: usize> {
    axes:    [Axis; N],
    values:  Vec<f64>,
    strides: [usize; N],
}

impl<const N: usize> Grid<N> {
    pub(crate) fn new<S, D>(
        knots: [&[f64]; N],
        values: &ArrayBase<S, D>,
        margins: [f64; N],
        kernel: Kernel,
        min_spacing: f64,
    ) -> Result<Self, DomainConfigurationError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        const { assert!(N >= 1 && N <= 3, "grids are defined for one to three axes") };

        if values.ndim() != N {
            return Err(DomainConfigurationError::WrongRank { expected: N, got: values.ndim() });
        }

        for (a, knots) in knots.iter().enumerate() {
            validate_knots(AxisName::from_index(a), knots, kernel, min_spacing)?;
        }

        let shape = values.shape();
        for (a, knots) in knots.iter().enumerate() {
            if knots.len() != shape[a] {
                return Err(DomainConfigurationError::ShapeMismatch {
                    axis: AxisName::from_index(a),
                    knots: knots.len(),
                    extent: shape[a],
                });
            }
        }

        // logical iteration order is row-major whatever the memory layout
        let values: Vec<f64> = values.iter().copied().collect();
        if let Some(idx) = non_finite_idx(&values) {
            return Err(DomainConfigurationError::NonFiniteValue { idx });
        }

        let extents: [usize; N] = std::array::from_fn(|a| knots[a].len());
        let axes = std::array::from_fn(|a| {
            Axis::new(AxisName::from_index(a), knots[a].to_vec(), margins[a])
        });

        Ok(Self { axes, values, strides: row_major_strides(&extents) })
    }

    // getters
    #[inline] pub(crate) fn axis(&self, a: usize) -> &Axis { &self.axes[a] }
    #[inline] pub(crate) fn n_values(&self) -> usize { self.values.len() }

    pub(crate) fn bounds(&self) -> [(f64, f64); N] {
        std::array::from_fn(|a| self.axes[a].bounds())
    }

    pub(crate) fn extents(&self) -> [usize; N] {
        std::array::from_fn(|a| self.axes[a].len())
    }

    /// Smallest and largest stored sample.
    pub(crate) fn value_range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    #[inline]
    pub(crate) fn offset(&self, node: &[usize; N]) -> usize {
        node.iter().zip(self.strides.iter()).map(|(i, s)| i * s).sum()
    }

    #[inline]
    pub(crate) fn value(&self, node: &[usize; N]) -> f64 {
        self.values[self.offset(node)]
    }

    /// Finite-difference estimate of `d^order f` at `node`, the tensor
    /// product of the per-axis stencils. Order zero on every axis returns
    /// the sample itself.
    #[inline]
    pub(crate) fn mixed_derivative(&self, node: &[usize; N], order: &[usize; N]) -> f64 {
        self.scaled_derivative(node, order, &[1.0; N])
    }

    /// [`Grid::mixed_derivative`] with the weights along axis `a` multiplied
    /// by `scale[a]` before they meet the samples.
    ///
    /// With cell widths as scales every weight stays of order one and the
    /// unscaled derivative is never formed.
    pub(crate) fn scaled_derivative(&self, node: &[usize; N], order: &[usize; N], scale: &[f64; N]) -> f64 {
        let stencils: [&Stencil; N] = std::array::from_fn(|a| self.axes[a].stencil(node[a], order[a]));
        if stencils.iter().any(|s| s.is_empty()) {
            return 0.0;
        }

        let extent: [usize; N] = std::array::from_fn(|a| stencils[a].len());
        let mut term  = [0usize; N];
        let mut total = 0.0;
        loop {
            let mut weight = 1.0;
            let mut offset = 0;
            for a in 0..N {
                let (knot, w) = stencils[a].term(term[a]);
                weight *= w * scale[a];
                offset += knot * self.strides[a];
            }
            total += weight * self.values[offset];

            if !next_multi_index(&mut term, &extent) {
                break;
            }
        }

        total
    }
}
