//! Defines the struct returned by batch evaluation.
//!
//! Defines the [`InterpolationReport`] struct returned by
//! `Interpolator1D::report` and `Interpolator3D::report`.
//!
//! This report summarizes key metadata about the evaluation, including the
//! kernel and policy used, the number of samples and query points, how many
//! queries needed extrapolation, and the evaluated values.

use crate::interpolation::algorithms::{Extrapolation, Kernel};

/// Summary of a batch evaluation.
///
/// [`InterpolationReport`]
/// - `kernel_name`        : interpolation kernel (e.g. `"cubic"`)
/// - `extrapolation_name` : extrapolation policy (e.g. `"nearest"`)
/// - `n_provided`         : number of sampled values the interpolator holds
/// - `n_evaluated`        : number of query points
/// - `n_extrapolated`     : query points that fell inside a margin
/// - `evaluated`          : values at each query point, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationReport {
    pub kernel_name: &'static str,
    pub extrapolation_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub n_extrapolated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(kernel: Kernel, extrapolation: Extrapolation, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            kernel_name: kernel.algorithm_name(),
            extrapolation_name: extrapolation.algorithm_name(),
            n_provided,
            n_evaluated,
            n_extrapolated: 0,
            evaluated: Vec::new(),
        }
    }
}
