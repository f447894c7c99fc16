use approx::{assert_abs_diff_eq, assert_relative_eq};
use knotgrid::interpolation::{InterpolationError, Interpolator3D, Interpolator3DCfg, Kernel};
use ndarray::Array3;

type KnotResult = Result<(), InterpolationError>;

fn cubic() -> Interpolator3DCfg {
    Interpolator3DCfg::new().set_kernel(Kernel::Cubic)
}

fn axes() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    (
        vec![0.0, 0.4, 1.0, 1.8, 2.0, 3.5],
        vec![-1.0, 0.0, 0.3, 1.1, 2.6],
        vec![10.0, 10.5, 12.0, 12.4],
    )
}

fn build<F: Fn(f64, f64, f64) -> f64>(f: F, cfg: Interpolator3DCfg) -> Result<Interpolator3D, InterpolationError> {
    let (x, y, z) = axes();
    let values = Array3::from_shape_fn((x.len(), y.len(), z.len()), |(i, j, k)| f(x[i], y[j], z[k]));
    Ok(Interpolator3D::new(&x, &y, &z, &values, cfg)?)
}

#[test]
fn sum_field_at_cell_centre() -> KnotResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let f = Array3::from_shape_fn((4, 4, 4), |(i, j, k)| x[i] + x[j] + x[k]);
    let interp = Interpolator3D::new(&x, &x, &x, &f, cubic())?;

    assert_abs_diff_eq!(interp.evaluate(1.5, 1.5, 1.5)?, 4.5, epsilon = 1e-9);
    Ok(())
}

#[test]
fn exact_at_every_knot() -> KnotResult {
    let (x, y, z) = axes();
    let f = |a: f64, b: f64, c: f64| (a * 1.7).sin() * (b - c).cos() + a * b;
    let interp = build(f, cubic())?;

    for &xi in &x {
        for &yj in &y {
            for &zk in &z {
                assert_eq!(interp.evaluate(xi, yj, zk)?, f(xi, yj, zk));
            }
        }
    }
    Ok(())
}

#[test]
fn per_axis_quadratic_fields_are_reproduced() -> KnotResult {
    let f = |a: f64, b: f64, c: f64| a * a * b - 2.0 * c * c * a + b * b * c + 3.0 * a * b * c - 1.0;
    let interp = build(f, cubic())?;

    for p in [[0.1, -0.9, 10.1], [1.9, 0.15, 11.0], [3.4, 2.5, 12.35], [0.7, 1.7, 10.7]] {
        assert_relative_eq!(interp.evaluate(p[0], p[1], p[2])?, f(p[0], p[1], p[2]), epsilon = 1e-9, max_relative = 1e-10);
    }
    Ok(())
}

#[test]
fn value_and_slope_continuous_across_faces() -> KnotResult {
    let interp = build(|a, b, c| (a * b).sin() + (0.3 * c).cos() * a, cubic())?;
    let h = 1e-6;

    // interior knot x = 1.0, y = 0.3, z = 12.0 approached from both cells
    let slope_x = |a: f64, dir: f64| -> Result<f64, InterpolationError> {
        Ok(dir * (interp.evaluate(a + dir * h, 0.8, 11.2)? - interp.evaluate(a, 0.8, 11.2)?) / h)
    };
    assert_abs_diff_eq!(slope_x(1.0, -1.0)?, slope_x(1.0, 1.0)?, epsilon = 1e-4);

    let slope_y = |b: f64, dir: f64| -> Result<f64, InterpolationError> {
        Ok(dir * (interp.evaluate(2.7, b + dir * h, 10.2)? - interp.evaluate(2.7, b, 10.2)?) / h)
    };
    assert_abs_diff_eq!(slope_y(0.3, -1.0)?, slope_y(0.3, 1.0)?, epsilon = 1e-4);

    let slope_z = |c: f64, dir: f64| -> Result<f64, InterpolationError> {
        Ok(dir * (interp.evaluate(0.2, -0.5, c + dir * h)? - interp.evaluate(0.2, -0.5, c)?) / h)
    };
    assert_abs_diff_eq!(slope_z(12.0, -1.0)?, slope_z(12.0, 1.0)?, epsilon = 1e-4);

    let at = interp.evaluate(1.0, 0.3, 12.0)?;
    assert_abs_diff_eq!(interp.evaluate(1.0 - 1e-10, 0.3, 12.0)?, at, epsilon = 1e-8);
    Ok(())
}

#[test]
fn edge_cell_uses_one_sided_derivative() -> KnotResult {
    // f = x^3: the one-sided estimate at x = 0 is -2, giving -0.25 at 0.5
    let x: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
    let f = Array3::from_shape_fn((4, 4, 4), |(i, _, _)| x[i].powi(3));
    let interp = Interpolator3D::new(&x, &x, &x, &f, cubic())?;

    assert_abs_diff_eq!(interp.evaluate(0.5, 1.2, 2.7)?, -0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(interp.evaluate(1.25, 0.0, 3.0)?, 2.046875, epsilon = 1e-12);
    Ok(())
}

#[test]
fn eager_and_lazy_caches_agree() -> KnotResult {
    let f = |a: f64, b: f64, c: f64| (a + 0.1 * b).exp() / c;
    let lazy = build(f, cubic())?;
    let eager = build(f, cubic().set_precompute(true))?;

    for p in [[0.05, -0.95, 10.05], [1.4, 1.5, 11.5], [3.5, 2.6, 12.4], [2.0, 0.0, 10.5]] {
        assert_eq!(lazy.evaluate(p[0], p[1], p[2])?, eager.evaluate(p[0], p[1], p[2])?);
    }
    Ok(())
}

#[test]
fn cubic_differs_from_linear_on_curved_fields() -> KnotResult {
    let f = |a: f64, _: f64, _: f64| a * a;
    let linear = build(f, Interpolator3DCfg::new())?;
    let smooth = build(f, cubic())?;

    // x = 2.75 sits mid-cell in [2.0, 3.5]
    assert_abs_diff_eq!(smooth.evaluate(2.75, 0.5, 11.0)?, 2.75 * 2.75, epsilon = 1e-10);
    assert_abs_diff_eq!(linear.evaluate(2.75, 0.5, 11.0)?, 0.5 * (4.0 + 12.25), epsilon = 1e-12);
    Ok(())
}

fn scaled_affine(scale: f64, kernel: Kernel) -> Result<(Vec<f64>, Array3<f64>, Interpolator3D), InterpolationError> {
    let x: Vec<f64> = (0..5).map(|i| i as f64 * 0.01).collect();
    let f = Array3::from_shape_fn((5, 5, 5), |(i, j, k)| scale * (1.0 + i as f64 + 2.0 * j as f64 + 3.0 * k as f64));
    let interp = Interpolator3D::new(&x, &x, &x, &f, Interpolator3DCfg::new().set_kernel(kernel))?;
    Ok((x, f, interp))
}

#[test]
fn big_values_are_exact_at_knots() -> KnotResult {
    for kernel in Kernel::ALL {
        let (x, f, interp) = scaled_affine(1e306, kernel)?;
        for i in 0..5 {
            for j in 0..5 {
                for k in 0..5 {
                    assert_eq!(interp.evaluate(x[i], x[j], x[k])?, f[[i, j, k]], "{kernel} at ({i}, {j}, {k})");
                }
            }
        }
    }
    Ok(())
}

#[test]
fn big_and_small_values_interpolate_relative_to_scale() -> KnotResult {
    for scale in [1e300, 1e20, 1e-20, 1e-300] {
        for kernel in Kernel::ALL {
            let (x, f, interp) = scaled_affine(scale, kernel)?;
            assert_eq!(interp.evaluate(x[2], x[1], x[3])?, f[[2, 1, 3]]);

            // (1.5, 0.5, 3.25) in index units
            let got = interp.evaluate(0.015, 0.005, 0.0325)?;
            assert_relative_eq!(got / scale, 1.0 + 1.5 + 1.0 + 9.75, max_relative = 1e-9);
        }
    }
    Ok(())
}
