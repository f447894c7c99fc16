//! Interpolation and bounded extrapolation of scalar fields sampled on
//! rectilinear, possibly unevenly spaced grids.
//!
//! [`interpolation::Interpolator3D`] is the core evaluator and
//! [`interpolation::Interpolator1D`] the same engine specialised to a single
//! axis. Both are built once from fixed knot and sample arrays and are
//! immutable afterwards.
//!
//! ```
//! use knotgrid::interpolation::{Extrapolation, Interpolator3D, Interpolator3DCfg, Kernel};
//! use ndarray::Array3;
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let f = Array3::from_shape_fn((4, 4, 4), |(i, j, k)| x[i] + x[j] + x[k]);
//!
//! let cfg = Interpolator3DCfg::new()
//!     .set_kernel(Kernel::Cubic)
//!     .set_extrapolation(Extrapolation::Nearest)
//!     .set_margins([1.0, 1.0, 1.0])
//!     .unwrap();
//! let interp = Interpolator3D::new(&x, &x, &x, &f, cfg).unwrap();
//!
//! assert!((interp.evaluate(1.5, 1.5, 1.5).unwrap() - 4.5).abs() < 1e-9);
//! assert_eq!(interp.evaluate(3.5, 1.0, 1.0).unwrap(), interp.evaluate(3.0, 1.0, 1.0).unwrap());
//! assert!(interp.evaluate(4.5, 1.0, 1.0).is_err());
//! ```

pub mod interpolation;
