use rayon::prelude::*;

use crate::interpolation::axis::Classification;
use crate::interpolation::errors::OutOfDomainError;

/// Query contract shared by every interpolator, `N` being the number of
/// coordinates per point.
pub trait Interpolator<const N: usize> {
    /// evaluates single point
    /// defined separately in each interpolator
    fn eval(&self, point: [f64; N]) -> Result<f64, OutOfDomainError>;

    /// `(min, max)` per axis covered by the knots
    fn domain(&self) -> [(f64, f64); N];

    /// what [`Interpolator::eval`] would do with `point`
    fn classify(&self, point: [f64; N]) -> Classification;

    /// evaluates many points, stopping at the first rejection
    #[inline]
    fn eval_many(&self, points: &[[f64; N]]) -> Result<Vec<f64>, OutOfDomainError> {
        points.iter().map(|&p| self.eval(p)).collect()
    }

    /// evaluates many points on the rayon pool; preserves input order
    fn par_eval_many(&self, points: &[[f64; N]]) -> Result<Vec<f64>, OutOfDomainError>
    where
        Self: Sync,
    {
        points.par_iter().map(|&p| self.eval(p)).collect()
    }
}
