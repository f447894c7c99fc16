use approx::assert_abs_diff_eq;
use knotgrid::interpolation::{
    Classification, Extrapolation, InterpolationError, Interpolator, Interpolator3D, Interpolator3DCfg, Kernel,
};
use ndarray::Array3;

type KnotResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

fn uneven() -> ([f64; 4], [f64; 5], [f64; 3]) {
    ([0.0, 0.25, 1.0, 3.0], [-2.0, -1.5, 0.0, 0.1, 2.0], [1.0, 4.0, 5.0])
}

fn build<F: Fn(f64, f64, f64) -> f64>(f: F, cfg: Interpolator3DCfg) -> Result<Interpolator3D, InterpolationError> {
    let (x, y, z) = uneven();
    let values = Array3::from_shape_fn((x.len(), y.len(), z.len()), |(i, j, k)| f(x[i], y[j], z[k]));
    Ok(Interpolator3D::new(&x, &y, &z, &values, cfg)?)
}

#[test]
fn sum_field_at_cell_centre() -> KnotResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let f = Array3::from_shape_fn((4, 4, 4), |(i, j, k)| x[i] + x[j] + x[k]);
    let interp = Interpolator3D::new(&x, &x, &x, &f, Interpolator3DCfg::new())?;

    assert_eq!(interp.evaluate(1.5, 1.5, 1.5)?, 4.5);
    Ok(())
}

#[test]
fn exact_at_every_knot() -> KnotResult {
    let (x, y, z) = uneven();
    let interp = build(|a, b, c| (a * 3.1).sin() * b.exp() - c * c, Interpolator3DCfg::new())?;

    for (i, &xi) in x.iter().enumerate() {
        for (j, &yj) in y.iter().enumerate() {
            for (k, &zk) in z.iter().enumerate() {
                let expected = (xi * 3.1).sin() * yj.exp() - zk * zk;
                assert_eq!(interp.evaluate(xi, yj, zk)?, expected, "knot ({i}, {j}, {k})");
            }
        }
    }
    Ok(())
}

#[test]
fn trilinear_fields_are_reproduced() -> KnotResult {
    let f = |a: f64, b: f64, c: f64| 1.0 + 2.0 * a - b + 0.5 * c + a * b - 0.25 * b * c + a * b * c;
    let interp = build(f, Interpolator3DCfg::new())?;

    for p in [[0.1, -1.9, 1.5], [2.2, 0.05, 4.9], [0.7, 1.3, 3.3], [3.0, 2.0, 5.0]] {
        assert_abs_diff_eq!(interp.evaluate(p[0], p[1], p[2])?, f(p[0], p[1], p[2]), epsilon = ATOL);
    }
    Ok(())
}

#[test]
fn blend_stays_within_corner_values() -> KnotResult {
    let interp = build(|a, b, c| (a - b).abs() + c.sqrt(), Interpolator3DCfg::new())?;

    // cell x in [0.25, 1], y in [0, 0.1], z in [1, 4]
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for a in [0.25, 1.0] {
        for b in [0.0, 0.1] {
            for c in [1.0, 4.0] {
                let v = interp.evaluate(a, b, c)?;
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    for t in [0.1, 0.4, 0.9] {
        let v = interp.evaluate(0.25 + 0.75 * t, 0.1 * t, 1.0 + 3.0 * t)?;
        assert!(v >= lo && v <= hi);
    }
    Ok(())
}

#[test]
fn continuous_across_cell_faces() -> KnotResult {
    let interp = build(|a, b, c| (a * b).cos() + c, Interpolator3DCfg::new())?;
    let eps = 1e-9;

    // interior knots on each axis
    for (a, b, c) in [(1.0, 0.7, 2.0), (0.5, 0.0, 3.0), (2.0, 1.0, 4.0)] {
        let at = interp.evaluate(a, b, c)?;
        assert_abs_diff_eq!(interp.evaluate(a - eps, b, c)?, at, epsilon = 1e-7);
        assert_abs_diff_eq!(interp.evaluate(a + eps, b, c)?, at, epsilon = 1e-7);
    }
    let at = interp.evaluate(0.5, 0.0, 4.0)?;
    assert_abs_diff_eq!(interp.evaluate(0.5, -eps, 4.0)?, at, epsilon = 1e-7);
    assert_abs_diff_eq!(interp.evaluate(0.5, 0.0, 4.0 + eps)?, at, epsilon = 1e-7);
    Ok(())
}

#[test]
fn outside_domain_fails_without_extrapolation() -> KnotResult {
    let cfg = Interpolator3DCfg::new().set_margins([1.0, 1.0, 1.0])?;
    let interp = build(|a, b, c| a + b + c, cfg)?;

    assert!(interp.evaluate(3.0 + 1e-12, 0.0, 2.0).is_err());
    assert_eq!(interp.classify([-0.1, 0.0, 2.0]), Classification::OutOfRange);
    assert_eq!(interp.classify([0.0, 0.0, 2.0]), Classification::Inside);
    Ok(())
}

#[test]
fn trait_evaluation_matches_inherent() -> KnotResult {
    let cfg = Interpolator3DCfg::new()
        .set_kernel(Kernel::Linear)
        .set_extrapolation(Extrapolation::Linear)
        .set_margins([0.5, 0.5, 0.5])?;
    let interp = build(|a, b, c| a * b - c, cfg)?;

    let points = [[0.3, 0.3, 1.2], [3.4, 0.3, 1.2], [2.9, -2.5, 5.5]];
    let batch = interp.eval_many(&points)?;
    for (p, v) in points.iter().zip(&batch) {
        assert_eq!(interp.evaluate(p[0], p[1], p[2])?, *v);
        assert_eq!(Interpolator::<3>::eval(&interp, *p)?, *v);
    }
    assert_eq!(Interpolator::<3>::domain(&interp), interp.domain());
    Ok(())
}
