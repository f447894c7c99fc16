//! Univariate Interpolation
//!
//! The one-axis counterpart of [`crate::interpolation::Interpolator3D`]:
//! samples `values[i] = f(x[i])` with the same kernels, policies and
//! validation rules.


use ndarray::ArrayView1;

use crate::interpolation::algorithms::{Extrapolation, Kernel};
use crate::interpolation::axis::{AxisName, Classification};
use crate::interpolation::config::{impl_common_cfg, validate_margin, CommonCfg, DEFAULT_MARGIN};
use crate::interpolation::errors::{DomainConfigurationError, OutOfDomainError};
use crate::interpolation::field::Field;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Univariate interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `margin` : extrapolation margin, [`DEFAULT_MARGIN`] by default
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolator1DCfg {
    common: CommonCfg,
    margin: f64,
}

impl Interpolator1DCfg {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), margin: DEFAULT_MARGIN }
    }

    pub fn set_margin(mut self, v: f64) -> Result<Self, DomainConfigurationError> {
        self.margin = validate_margin(AxisName::X, v)?;
        Ok(self)
    }

    pub fn margin(&self) -> f64 { self.margin }
}

impl Default for Interpolator1DCfg {
    fn default() -> Self { Self::new() }
}

impl_common_cfg!(Interpolator1DCfg);


#[derive(Debug)]
pub struct Interpolator1D {
    field: Field<1>,
}

impl Interpolator1D {
    /// Validates `x` against `values` and builds the interpolator.
    ///
    /// # Errors
    /// As [`crate::interpolation::Interpolator3D::new`], always on axis `x`,
    /// except that a rank mismatch cannot occur.
    pub fn new(x: &[f64], values: &[f64], cfg: Interpolator1DCfg) -> Result<Self, DomainConfigurationError> {
        let field = Field::new([x], &ArrayView1::from(values), [cfg.margin], &cfg.common)?;
        Ok(Self { field })
    }

    /// Interpolated (or extrapolated) value at `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64, OutOfDomainError> {
        self.field.evaluate(&[x])
    }

    /// Evaluates `points` and summarizes the batch.
    pub fn report(&self, points: &[f64]) -> Result<InterpolationReport, OutOfDomainError> {
        let points: Vec<[f64; 1]> = points.iter().map(|&x| [x]).collect();
        self.field.report(&points)
    }

    pub fn classify(&self, x: f64) -> Classification {
        self.field.classify(&[x])
    }

    // getters
    pub fn domain(&self)        -> (f64, f64) { self.field.domain()[0] }
    pub fn kernel(&self)        -> Kernel { self.field.kernel() }
    pub fn extrapolation(&self) -> Extrapolation { self.field.extrapolation() }
    pub fn margin(&self)        -> f64 { self.field.margins()[0] }
    pub fn n_values(&self)      -> usize { self.field.n_values() }
    pub fn value_range(&self)   -> (f64, f64) { self.field.value_range() }
}

impl Interpolator<1> for Interpolator1D {
    fn eval(&self, point: [f64; 1]) -> Result<f64, OutOfDomainError> {
        self.field.evaluate(&point)
    }

    fn domain(&self) -> [(f64, f64); 1] { self.field.domain() }

    fn classify(&self, point: [f64; 1]) -> Classification {
        self.field.classify(&point)
    }
}
