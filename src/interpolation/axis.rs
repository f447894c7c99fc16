//! Knot axes and per-axis classification of query coordinates.
//!
//! An [`Axis`] owns one validated knot vector together with its margin, cell
//! widths and derivative stencils. [`Axis::classify`] decides, for a single
//! coordinate, whether it is inside `[lo, hi]`, inside the margin, or out of
//! range.

use crate::interpolation::algorithms::Extrapolation;
use crate::interpolation::errors::OutOfDomainError;
use crate::interpolation::helpers::{find_interval, spacings};
use crate::interpolation::stencil::{axis_stencils, Stencil, MAX_ORDER};


/// Axis label carried by errors and introspection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisName {
    X,
    Y,
    Z,
}

impl AxisName {
    pub const ALL: [AxisName; 3] = [AxisName::X, AxisName::Y, AxisName::Z];

    pub const fn index(self) -> usize {
        match self {
            AxisName::X => 0,
            AxisName::Y => 1,
            AxisName::Z => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AxisName::X => "x",
            AxisName::Y => "y",
            AxisName::Z => "z",
        }
    }

    /// Only called for ranks up to three.
    pub(crate) const fn from_index(i: usize) -> Self {
        match i {
            0 => AxisName::X,
            1 => AxisName::Y,
            _ => AxisName::Z,
        }
    }
}

impl std::fmt::Display for AxisName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}


/// Overall classification of a query point.
///
/// A point is `Inside` only if every coordinate is inside its axis range,
/// `OutOfRange` if any coordinate is beyond what the policy allows, and
/// `Extrapolable` otherwise. Under [`Extrapolation::None`] nothing outside
/// the domain is extrapolable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    Inside,
    Extrapolable,
    OutOfRange,
}


/// Where one coordinate falls along its axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Region {
    /// `x[cell] <= xq <= x[cell + 1]`, `t` the fraction across the cell.
    Inside { cell: usize, t: f64 },
    /// Within the margin past boundary knot `knot`, `distance` signed.
    Margin { knot: usize, distance: f64 },
}

impl Region {
    pub(crate) const ORIGIN: Region = Region::Inside { cell: 0, t: 0.0 };

    #[inline]
    pub(crate) fn is_margin(&self) -> bool {
        matches!(self, Region::Margin { .. })
    }
}


#[derive(Debug, Clone)]
pub(crate) struct Axis {
    name:     AxisName,
    knots:    Vec<f64>,
    widths:   Vec<f64>,
    margin:   f64,
    stencils: Vec<[Stencil; MAX_ORDER + 1]>,
}

impl Axis {
    /// Assumes `knots` already passed [`crate::interpolation::grid::validate_knots`].
    pub(crate) fn new(name: AxisName, knots: Vec<f64>, margin: f64) -> Self {
        let widths   = spacings(&knots);
        let stencils = axis_stencils(&knots);
        Self { name, knots, widths, margin, stencils }
    }

    // getters
    #[inline] pub(crate) fn len(&self)    -> usize { self.knots.len() }
    #[inline] pub(crate) fn margin(&self) -> f64 { self.margin }
    #[inline] pub(crate) fn lo(&self)     -> f64 { self.knots[0] }
    #[inline] pub(crate) fn hi(&self)     -> f64 { self.knots[self.knots.len() - 1] }
    #[inline] pub(crate) fn bounds(&self) -> (f64, f64) { (self.lo(), self.hi()) }
    #[inline] pub(crate) fn n_cells(&self) -> usize { self.widths.len() }
    #[inline] pub(crate) fn width(&self, cell: usize) -> f64 { self.widths[cell] }

    #[inline]
    pub(crate) fn stencil(&self, knot: usize, order: usize) -> &Stencil {
        &self.stencils[knot][order]
    }

    /// Locates `xq`, assumed inside `[lo, hi]`.
    #[inline]
    pub(crate) fn locate(&self, xq: f64) -> Region {
        let cell = find_interval(&self.knots, xq);
        let t = (xq - self.knots[cell]) / self.widths[cell];
        Region::Inside { cell, t }
    }

    /// Position of `xq` clamped onto `[lo, hi]`, as a cell and fraction.
    #[inline]
    pub(crate) fn clamped(&self, region: Region) -> (usize, f64) {
        match region {
            Region::Inside { cell, t } => (cell, t),
            Region::Margin { knot: 0, .. } => (0, 0.0),
            Region::Margin { .. } => (self.n_cells() - 1, 1.0),
        }
    }

    /// Classifies one coordinate.
    ///
    /// # Errors
    /// - [`OutOfDomainError::NonFiniteQuery`] for NaN or infinite `xq`
    /// - [`OutOfDomainError::ExtrapolationDisabled`] outside `[lo, hi]` under
    ///   [`Extrapolation::None`], whatever the margin
    /// - [`OutOfDomainError::BeyondMargin`] further than the margin from the
    ///   domain; the margin edge itself is accepted
    pub(crate) fn classify(&self, xq: f64, policy: Extrapolation) -> Result<Region, OutOfDomainError> {
        let (min, max) = self.bounds();

        if !xq.is_finite() {
            return Err(OutOfDomainError::NonFiniteQuery { axis: self.name, value: xq });
        }
        if xq >= min && xq <= max {
            return Ok(self.locate(xq));
        }
        if !policy.is_enabled() {
            return Err(OutOfDomainError::ExtrapolationDisabled { axis: self.name, value: xq, min, max });
        }
        if xq < min - self.margin || xq > max + self.margin {
            return Err(OutOfDomainError::BeyondMargin {
                axis: self.name,
                value: xq,
                min,
                max,
                margin: self.margin,
            });
        }

        let knot = if xq < min { 0 } else { self.len() - 1 };
        Ok(Region::Margin { knot, distance: xq - self.knots[knot] })
    }
}
