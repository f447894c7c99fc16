//! Shared configuration for interpolators.
//!
//! Provides [`CommonCfg`] with the settings every interpolator carries,
//! whatever its rank, and the `impl_common_cfg!` macro that gives each
//! interpolator configuration the same setters.
//!
//! [`CommonCfg`]: universal fields
//! - `kernel`        : interpolation kernel, [`Kernel::Linear`] by default
//! - `extrapolation` : extrapolation policy, [`Extrapolation::None`] by default
//! - `min_spacing`   : adjacent knots closer than this count as duplicates;
//!   [`DEFAULT_MIN_SPACING`] rejects exact duplicates only
//! - `precompute`    : populate cubic coefficients eagerly at construction
//!
//! Margins are per-rank and live on the interpolator configs themselves.

use crate::interpolation::algorithms::{Extrapolation, Kernel};
use crate::interpolation::axis::AxisName;
use crate::interpolation::errors::DomainConfigurationError;

pub const DEFAULT_MIN_SPACING: f64 = 0.0;
pub const DEFAULT_MARGIN: f64 = 0.0;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    pub(crate) kernel:        Kernel,
    pub(crate) extrapolation: Extrapolation,
    pub(crate) min_spacing:   f64,
    pub(crate) precompute:    bool,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            kernel:        Kernel::default(),
            extrapolation: Extrapolation::default(),
            min_spacing:   DEFAULT_MIN_SPACING,
            precompute:    false,
        }
    }

    // getters
    pub fn kernel(&self)        -> Kernel { self.kernel }
    pub fn extrapolation(&self) -> Extrapolation { self.extrapolation }
    pub fn min_spacing(&self)   -> f64 { self.min_spacing }
    pub fn precompute(&self)    -> bool { self.precompute }

    // setters
    pub(crate) fn with_kernel(&mut self, v: Kernel) { self.kernel = v; }
    pub(crate) fn with_extrapolation(&mut self, v: Extrapolation) { self.extrapolation = v; }
    pub(crate) fn with_min_spacing(&mut self, v: f64) { self.min_spacing = v; }
    pub(crate) fn with_precompute(&mut self, v: bool) { self.precompute = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}


pub(crate) fn validate_margin(axis: AxisName, v: f64) -> Result<f64, DomainConfigurationError> {
    if !v.is_finite() || v < 0.0 {
        return Err(DomainConfigurationError::InvalidMargin { axis, got: v });
    }
    Ok(v)
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_kernel(mut self, v: $crate::interpolation::algorithms::Kernel) -> Self {
                self.common.with_kernel(v);
                self
            }

            pub fn set_extrapolation(
                mut self,
                v: $crate::interpolation::algorithms::Extrapolation,
            ) -> Self {
                self.common.with_extrapolation(v);
                self
            }

            pub fn set_min_spacing(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::DomainConfigurationError> {
                use $crate::interpolation::errors::DomainConfigurationError;

                if !v.is_finite() || v < 0.0 {
                    return Err(DomainConfigurationError::InvalidMinSpacing { got: v });
                }

                self.common.with_min_spacing(v);
                Ok(self)
            }

            pub fn set_precompute(mut self, v: bool) -> Self {
                self.common.with_precompute(v);
                self
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg { &self.common }
            pub fn kernel(&self) -> $crate::interpolation::algorithms::Kernel { self.common.kernel() }
            pub fn extrapolation(&self) -> $crate::interpolation::algorithms::Extrapolation {
                self.common.extrapolation()
            }
        }
    };
}
pub(crate) use impl_common_cfg;
