pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod interpolator1d;
pub mod interpolator3d;

mod axis;
mod cache;
mod cubic;
mod extrapolation;
mod field;
mod grid;
mod helpers;
mod linear;
mod stencil;

pub use algorithms::{Extrapolation, Kernel};
pub use axis::{AxisName, Classification};
pub use config::CommonCfg;
pub use errors::{DomainConfigurationError, InterpolationError, OutOfDomainError};
pub use interpolator1d::{Interpolator1D, Interpolator1DCfg};
pub use interpolator3d::{Interpolator3D, Interpolator3DCfg};
pub use report::InterpolationReport;
