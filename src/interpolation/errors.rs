//! Interpolation error types.
//!
//! ┌ [`DomainConfigurationError`] : construction-time defects
//! │   ├ knots non-finite, duplicated, or not strictly increasing
//! │   ├ too few knots for the requested kernel
//! │   ├ value array rank or extent disagreeing with the knots
//! │   └ invalid margins, spacing, or selector names
//! │
//! ├ [`OutOfDomainError`]         : query-time rejections
//! │   ├ non-finite query coordinate
//! │   ├ outside the domain with extrapolation disabled
//! │   └ beyond the extrapolation margin
//! │
//! └ [`InterpolationError`]       : either of the above, for callers that
//!                                  build and query in one place

use thiserror::Error;

use crate::interpolation::algorithms::Kernel;
use crate::interpolation::axis::AxisName;


/// Raised once, while configuring or constructing an interpolator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainConfigurationError {
    #[error("value array must have {expected} dimension(s), got {got}")]
    WrongRank { expected: usize, got: usize },

    #[error("axis {axis}: non-finite knot at index {idx}")]
    NonFiniteKnot { axis: AxisName, idx: usize },

    #[error("axis {axis}: {kernel} kernel needs at least {need} knots, got {got}")]
    InsufficientKnots { axis: AxisName, kernel: Kernel, got: usize, need: usize },

    #[error("axis {axis}: duplicate knot {value} at index {idx}")]
    DuplicateKnot { axis: AxisName, idx: usize, value: f64 },

    #[error("axis {axis}: knots must be strictly increasing, got {prev} then {next} at index {idx}")]
    NonIncreasingKnots { axis: AxisName, idx: usize, prev: f64, next: f64 },

    #[error("axis {axis}: {knots} knots but the value array extent is {extent}")]
    ShapeMismatch { axis: AxisName, knots: usize, extent: usize },

    #[error("non-finite sample value at row-major index {idx}")]
    NonFiniteValue { idx: usize },

    #[error("axis {axis}: extrapolation margin must be finite and >= 0, got {got}")]
    InvalidMargin { axis: AxisName, got: f64 },

    #[error("invalid minimum knot spacing {got}: must be finite and >= 0")]
    InvalidMinSpacing { got: f64 },

    #[error("unknown interpolation kernel `{name}`")]
    UnknownKernel { name: String },

    #[error("unknown extrapolation policy `{name}`")]
    UnknownExtrapolation { name: String },
}

impl DomainConfigurationError {
    /// Axis the defect was found on, if it is tied to one.
    pub fn axis(&self) -> Option<AxisName> {
        match self {
            DomainConfigurationError::NonFiniteKnot { axis, .. }
            | DomainConfigurationError::InsufficientKnots { axis, .. }
            | DomainConfigurationError::DuplicateKnot { axis, .. }
            | DomainConfigurationError::NonIncreasingKnots { axis, .. }
            | DomainConfigurationError::ShapeMismatch { axis, .. }
            | DomainConfigurationError::InvalidMargin { axis, .. } => Some(*axis),
            _ => None,
        }
    }
}


/// Raised by evaluation when a query cannot be answered.
///
/// Carries the offending axis and coordinate plus the bounds (and margin)
/// it was checked against.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum OutOfDomainError {
    #[error("axis {axis}: query coordinate {value} is not finite")]
    NonFiniteQuery { axis: AxisName, value: f64 },

    #[error("axis {axis}: query {value} outside [{min}, {max}] and extrapolation is disabled")]
    ExtrapolationDisabled { axis: AxisName, value: f64, min: f64, max: f64 },

    #[error("axis {axis}: query {value} beyond extrapolation margin {margin} of [{min}, {max}]")]
    BeyondMargin { axis: AxisName, value: f64, min: f64, max: f64, margin: f64 },
}

impl OutOfDomainError {
    pub fn axis(&self) -> AxisName {
        match *self {
            OutOfDomainError::NonFiniteQuery { axis, .. }
            | OutOfDomainError::ExtrapolationDisabled { axis, .. }
            | OutOfDomainError::BeyondMargin { axis, .. } => axis,
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            OutOfDomainError::NonFiniteQuery { value, .. }
            | OutOfDomainError::ExtrapolationDisabled { value, .. }
            | OutOfDomainError::BeyondMargin { value, .. } => value,
        }
    }
}


#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error(transparent)]
    Configuration(#[from] DomainConfigurationError),

    #[error(transparent)]
    OutOfDomain(#[from] OutOfDomainError),
}
