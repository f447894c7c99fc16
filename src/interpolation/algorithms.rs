//! Defines the interpolation kernel and extrapolation policy variants.
//!
//! Provides the [`Kernel`] and [`Extrapolation`] enums, the two closed
//! selectors every interpolator is built from. Both parse from their
//! lowercase names (`"linear"`, `"cubic"`, `"none"`, `"nearest"`, ...).

use std::str::FromStr;

use crate::interpolation::errors::DomainConfigurationError;


/// Interpolation kernel variants.
/// - [`Kernel::Linear`]  tensor-product linear blend of the cell corners
/// - [`Kernel::Cubic`]   tensor-product cubic Hermite blend, derivatives
///   estimated by finite differences on the knots
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Kernel {
    #[default]
    Linear,
    Cubic,
}

impl Kernel {
    pub const ALL: [Kernel; 2] = [Kernel::Linear, Kernel::Cubic];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Kernel::Linear => "linear",
            Kernel::Cubic  => "cubic",
        }
    }

    /// Fewest knots an axis must carry for this kernel.
    ///
    /// The cubic kernel needs a neighbour on each side of every interior
    /// knot plus a one-sided triple at each edge.
    pub const fn min_knots(self) -> usize {
        match self {
            Kernel::Linear => 2,
            Kernel::Cubic  => 4,
        }
    }
}

impl std::fmt::Display for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

impl FromStr for Kernel {
    type Err = DomainConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kernel::ALL
            .into_iter()
            .find(|k| k.algorithm_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainConfigurationError::UnknownKernel { name: s.to_string() })
    }
}


/// Extrapolation policy variants.
/// - [`Extrapolation::None`]      every point outside the domain is an error
/// - [`Extrapolation::Nearest`]   value at the point clamped onto the domain
/// - [`Extrapolation::Linear`]    first-order Taylor step from the boundary
/// - [`Extrapolation::Quadratic`] second-order Taylor step from the boundary
///
/// Every policy other than `None` is bounded by the per-axis margin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Extrapolation {
    #[default]
    None,
    Nearest,
    Linear,
    Quadratic,
}

impl Extrapolation {
    pub const ALL: [Extrapolation; 4] = [
        Extrapolation::None,
        Extrapolation::Nearest,
        Extrapolation::Linear,
        Extrapolation::Quadratic,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Extrapolation::None      => "none",
            Extrapolation::Nearest   => "nearest",
            Extrapolation::Linear    => "linear",
            Extrapolation::Quadratic => "quadratic",
        }
    }

    /// Highest Taylor order applied past the boundary, `None` when
    /// extrapolation is disabled.
    pub const fn taylor_order(self) -> Option<usize> {
        match self {
            Extrapolation::None      => None,
            Extrapolation::Nearest   => Some(0),
            Extrapolation::Linear    => Some(1),
            Extrapolation::Quadratic => Some(2),
        }
    }

    pub const fn is_enabled(self) -> bool {
        !matches!(self, Extrapolation::None)
    }
}

impl std::fmt::Display for Extrapolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

impl FromStr for Extrapolation {
    type Err = DomainConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Extrapolation::ALL
            .into_iter()
            .find(|e| e.algorithm_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainConfigurationError::UnknownExtrapolation { name: s.to_string() })
    }
}
