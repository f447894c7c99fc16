//! Rank-generic evaluator shared by the 1D and 3D interpolators.
//!
//! [`Field`] owns the validated [`Grid`], the kernel (with its coefficient
//! cache in cubic mode) and the extrapolation policy. Every query is
//! classified on all axes first; only then is it dispatched to the kernel
//! or to the extrapolation policy.

use ndarray::{ArrayBase, Data, Dimension};

use crate::interpolation::algorithms::{Extrapolation, Kernel};
use crate::interpolation::axis::{Classification, Region};
use crate::interpolation::cache::CoefficientCache;
use crate::interpolation::config::CommonCfg;
use crate::interpolation::errors::{DomainConfigurationError, OutOfDomainError};
use crate::interpolation::grid::Grid;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::{cubic, extrapolation, linear};


/// Kernel plus whatever state it precomputes.
#[derive(Debug)]
pub(crate) enum KernelState<const N: usize> {
    Linear,
    Cubic(CoefficientCache<N>),
}


#[derive(Debug)]
pub(crate) struct Field<const N: usize> {
    grid:          Grid<N>,
    kernel:        KernelState<N>,
    extrapolation: Extrapolation,
}

impl<const N: usize> Field<N> {
    pub(crate) fn new<S, D>(
        knots: [&[f64]; N],
        values: &ArrayBase<S, D>,
        margins: [f64; N],
        common: &CommonCfg,
    ) -> Result<Self, DomainConfigurationError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let grid = Grid::new(knots, values, margins, common.kernel(), common.min_spacing())?;

        let kernel = match common.kernel() {
            Kernel::Linear => KernelState::Linear,
            Kernel::Cubic  => {
                let cache = CoefficientCache::new(&grid);
                if common.precompute() {
                    cache.populate(&grid);
                }
                KernelState::Cubic(cache)
            }
        };

        log::debug!(
            "built {}D {} interpolator over {:?} knots, extrapolation {} with margins {:?}",
            N,
            common.kernel(),
            grid.extents(),
            common.extrapolation(),
            margins,
        );

        Ok(Self { grid, kernel, extrapolation: common.extrapolation() })
    }

    // getters
    pub(crate) fn kernel(&self) -> Kernel {
        match self.kernel {
            KernelState::Linear    => Kernel::Linear,
            KernelState::Cubic(..) => Kernel::Cubic,
        }
    }
    pub(crate) fn extrapolation(&self) -> Extrapolation { self.extrapolation }
    pub(crate) fn domain(&self) -> [(f64, f64); N] { self.grid.bounds() }
    pub(crate) fn extents(&self) -> [usize; N] { self.grid.extents() }
    pub(crate) fn n_values(&self) -> usize { self.grid.n_values() }
    pub(crate) fn value_range(&self) -> (f64, f64) { self.grid.value_range() }

    pub(crate) fn margins(&self) -> [f64; N] {
        std::array::from_fn(|a| self.grid.axis(a).margin())
    }

    /// Per-axis regions, failing on the first axis that rejects its coordinate.
    fn regions(&self, point: &[f64; N]) -> Result<[Region; N], OutOfDomainError> {
        let mut regions = [Region::ORIGIN; N];
        for (a, region) in regions.iter_mut().enumerate() {
            *region = self.grid.axis(a).classify(point[a], self.extrapolation)?;
        }
        Ok(regions)
    }

    pub(crate) fn classify(&self, point: &[f64; N]) -> Classification {
        match self.regions(point) {
            Err(_) => Classification::OutOfRange,
            Ok(r) if extrapolates(&r) => Classification::Extrapolable,
            Ok(_) => Classification::Inside,
        }
    }

    pub(crate) fn evaluate(&self, point: &[f64; N]) -> Result<f64, OutOfDomainError> {
        let regions = self.regions(point)?;
        Ok(self.dispatch(point, &regions))
    }

    /// Evaluates `points` in order, counting those that needed extrapolation.
    pub(crate) fn report(&self, points: &[[f64; N]]) -> Result<InterpolationReport, OutOfDomainError> {
        let mut report = InterpolationReport::new(
            self.kernel(),
            self.extrapolation,
            self.n_values(),
            points.len(),
        );
        report.evaluated.reserve(points.len());

        for point in points {
            let regions = self.regions(point)?;
            if extrapolates(&regions) {
                report.n_extrapolated += 1;
            }
            report.evaluated.push(self.dispatch(point, &regions));
        }

        Ok(report)
    }

    /// Kernel or extrapolation for a point whose axes all accepted it.
    fn dispatch(&self, point: &[f64; N], regions: &[Region; N]) -> f64 {
        if !extrapolates(regions) {
            let position = std::array::from_fn(|a| self.grid.axis(a).clamped(regions[a]));
            return self.interpolate(&position);
        }

        // classification only yields margins for enabled policies
        let order = self.extrapolation.taylor_order().unwrap_or(0);
        log::trace!("extrapolating {} at {:?} with order {}", self.extrapolation, point, order);

        extrapolation::evaluate(&self.grid, regions, order, |p| self.interpolate(p))
    }

    #[inline]
    fn interpolate(&self, position: &[(usize, f64); N]) -> f64 {
        match &self.kernel {
            KernelState::Linear       => linear::evaluate(&self.grid, position),
            KernelState::Cubic(cache) => cubic::evaluate(&self.grid, cache, position),
        }
    }

    #[cfg(test)]
    pub(crate) fn grid(&self) -> &Grid<N> { &self.grid }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> Option<&CoefficientCache<N>> {
        match &self.kernel {
            KernelState::Linear       => None,
            KernelState::Cubic(cache) => Some(cache),
        }
    }
}

#[inline]
fn extrapolates<const N: usize>(regions: &[Region; N]) -> bool {
    regions.iter().any(Region::is_margin)
}
