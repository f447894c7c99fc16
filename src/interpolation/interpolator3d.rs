//! Trivariate Interpolation
//!
//! Interpolates a scalar field sampled on a rectilinear `x * y * z` grid,
//! with `values[[i, j, k]] = f(x[i], y[j], z[k])`.
//!
//! Inside the domain the selected [`Kernel`] is evaluated on the enclosing
//! cell. Points past the domain are accepted only within the per-axis margin
//! and only if an [`Extrapolation`] policy other than
//! [`Extrapolation::None`] is selected.


use ndarray::{ArrayBase, Data, Dimension};

use crate::interpolation::algorithms::{Extrapolation, Kernel};
use crate::interpolation::axis::{AxisName, Classification};
use crate::interpolation::config::{impl_common_cfg, validate_margin, CommonCfg, DEFAULT_MARGIN};
use crate::interpolation::errors::{DomainConfigurationError, OutOfDomainError};
use crate::interpolation::field::Field;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Trivariate interpolation configuration
///
/// # Fields
/// - `common`  : [`CommonCfg`]
/// - `margins` : extrapolation margin per axis, `[x, y, z]`
///
/// # Construction
/// - Use [`Interpolator3DCfg::new`] then optional setters.
///
/// # Defaults
/// - Every margin is [`DEFAULT_MARGIN`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolator3DCfg {
    common:  CommonCfg,
    margins: [f64; 3],
}

impl Interpolator3DCfg {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), margins: [DEFAULT_MARGIN; 3] }
    }

    pub fn set_margins(mut self, v: [f64; 3]) -> Result<Self, DomainConfigurationError> {
        for axis in AxisName::ALL {
            self.margins[axis.index()] = validate_margin(axis, v[axis.index()])?;
        }
        Ok(self)
    }

    pub fn set_margin(mut self, axis: AxisName, v: f64) -> Result<Self, DomainConfigurationError> {
        self.margins[axis.index()] = validate_margin(axis, v)?;
        Ok(self)
    }

    pub fn margins(&self) -> [f64; 3] { self.margins }
}

impl Default for Interpolator3DCfg {
    fn default() -> Self { Self::new() }
}

impl_common_cfg!(Interpolator3DCfg);


/// Interpolator over a validated 3D grid.
///
/// Holds its own row-major copy of the samples; the array passed to
/// [`Interpolator3D::new`] may be dropped or mutated afterwards. Evaluation
/// takes `&self` and the type is `Send + Sync`.
#[derive(Debug)]
pub struct Interpolator3D {
    field: Field<3>,
}

impl Interpolator3D {
    /// Validates the grid and builds the interpolator.
    ///
    /// `values` may be any `ndarray` array of `f64`; its rank is checked at
    /// run time and its extents must equal the knot counts.
    ///
    /// # Errors
    /// - [`DomainConfigurationError::WrongRank`] if `values` is not 3D.
    /// - [`DomainConfigurationError::NonFiniteKnot`],
    ///   [`DomainConfigurationError::InsufficientKnots`],
    ///   [`DomainConfigurationError::DuplicateKnot`] or
    ///   [`DomainConfigurationError::NonIncreasingKnots`] naming the first
    ///   offending axis.
    /// - [`DomainConfigurationError::ShapeMismatch`] if an extent differs
    ///   from that axis' knot count.
    /// - [`DomainConfigurationError::NonFiniteValue`] for NaN or infinite
    ///   samples.
    pub fn new<S, D>(
        x: &[f64],
        y: &[f64],
        z: &[f64],
        values: &ArrayBase<S, D>,
        cfg: Interpolator3DCfg,
    ) -> Result<Self, DomainConfigurationError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let field = Field::new([x, y, z], values, cfg.margins, &cfg.common)?;
        Ok(Self { field })
    }

    /// Interpolated (or extrapolated) value at `(x, y, z)`.
    ///
    /// # Errors
    /// - [`OutOfDomainError::NonFiniteQuery`] for NaN or infinite coordinates.
    /// - [`OutOfDomainError::ExtrapolationDisabled`] for a point outside the
    ///   domain under [`Extrapolation::None`].
    /// - [`OutOfDomainError::BeyondMargin`] for a point past `margin` on
    ///   some axis.
    pub fn evaluate(&self, x: f64, y: f64, z: f64) -> Result<f64, OutOfDomainError> {
        self.field.evaluate(&[x, y, z])
    }

    /// Evaluates `points` and summarizes the batch.
    ///
    /// # Errors
    /// The first [`OutOfDomainError`] among `points`.
    pub fn report(&self, points: &[[f64; 3]]) -> Result<InterpolationReport, OutOfDomainError> {
        self.field.report(points)
    }

    pub fn classify(&self, point: [f64; 3]) -> Classification {
        self.field.classify(&point)
    }

    // getters
    pub fn domain(&self)        -> [(f64, f64); 3] { self.field.domain() }
    pub fn kernel(&self)        -> Kernel { self.field.kernel() }
    pub fn extrapolation(&self) -> Extrapolation { self.field.extrapolation() }
    pub fn margins(&self)       -> [f64; 3] { self.field.margins() }
    pub fn shape(&self)         -> [usize; 3] { self.field.extents() }
    pub fn n_values(&self)      -> usize { self.field.n_values() }
    pub fn value_range(&self)   -> (f64, f64) { self.field.value_range() }
}

impl Interpolator<3> for Interpolator3D {
    fn eval(&self, point: [f64; 3]) -> Result<f64, OutOfDomainError> {
        self.field.evaluate(&point)
    }

    fn domain(&self) -> [(f64, f64); 3] { self.field.domain() }

    fn classify(&self, point: [f64; 3]) -> Classification {
        self.field.classify(&point)
    }
}
