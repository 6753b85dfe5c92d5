use crate::error::{GeometryError, Result};

use super::distance::euclidean;
use super::plane::PlaneMode;
use super::{Coordinates, Point3};

/// Degrees in one radian (`180 / π`).
pub const DEG_PER_RAD: f64 = 57.295_779_513_082_32;

/// Returns the number of degrees in one radian.
#[must_use]
pub fn deg_per_rad() -> f64 {
    DEG_PER_RAD
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * deg_per_rad()
}

/// Angle at which the path `p1 → p2 → p3` rises, in radians.
///
/// When `p3` is `None` it defaults to `(p2.x, p2.y, 0)`. The hypotenuse is
/// the aggregate path distance through all three points (see
/// [`super::euc_dist`]); the result is `asin((p2.y - p1.y) / hyp)`, or `0`
/// when the points coincide.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn angle(p1: &Point3, p2: &Point3, p3: Option<&Point3>) -> f64 {
    let p3 = p3.copied().unwrap_or_else(|| Point3::new(p2.x, p2.y, 0.0));
    let hyp = euclidean(3, &[*p1, *p2, p3]);

    if hyp == 0.0 {
        return 0.0;
    }
    ((p2.y - p1.y) / hyp).asin()
}

/// [`vert_angle_with`] in [`PlaneMode::Literal`].
///
/// # Errors
///
/// Returns an error if either argument is not a 2D point.
pub fn vert_angle<P, Q>(p1: &P, p2: &Q) -> Result<f64>
where
    P: Coordinates + ?Sized,
    Q: Coordinates + ?Sized,
{
    vert_angle_with(p1, p2, PlaneMode::Literal)
}

/// Angular relation between two 2D vertices.
///
/// If either vertex lies on the x axis the result is an arctangent;
/// otherwise it is the dot product divided by the magnitudes.
/// [`PlaneMode::Literal`] keeps the historical `dot / |p1| * |p2|` grouping
/// and divides `p1.y` by `p2.x` in the second branch;
/// [`PlaneMode::Corrected`] returns the true cosine `dot / (|p1| * |p2|)`
/// and uses `p1.y / p1.x`.
///
/// # Errors
///
/// Returns an error if either argument does not have exactly two coordinates.
#[allow(clippy::float_cmp)]
pub fn vert_angle_with<P, Q>(p1: &P, p2: &Q, mode: PlaneMode) -> Result<f64>
where
    P: Coordinates + ?Sized,
    Q: Coordinates + ?Sized,
{
    let (x1, y1) = planar("vert_angle", p1.as_coords())?;
    let (x2, y2) = planar("vert_angle", p2.as_coords())?;

    if y1 == 0.0 {
        return Ok((y2 / x2).atan());
    }
    if y2 == 0.0 {
        return Ok(match mode {
            PlaneMode::Literal => (y1 / x2).atan(),
            PlaneMode::Corrected => (y1 / x1).atan(),
        });
    }

    let dot = x1 * x2 + y1 * y2;
    let n1 = x1.hypot(y1);
    let n2 = x2.hypot(y2);
    Ok(match mode {
        PlaneMode::Literal => dot / n1 * n2,
        PlaneMode::Corrected => dot / (n1 * n2),
    })
}

fn planar(operation: &'static str, coords: &[f64]) -> Result<(f64, f64)> {
    match *coords {
        [x, y] => Ok((x, y)),
        _ => Err(GeometryError::DimensionMismatch {
            operation,
            expected: 2,
            found: coords.len(),
        }
        .into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, PI};

    #[test]
    fn half_turn_is_180_degrees() {
        assert_relative_eq!(rad_to_deg(PI), 180.0, epsilon = 1e-9);
        assert_relative_eq!(deg_per_rad(), 180.0 / PI, epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_have_zero_angle() {
        for p in [
            Point3::origin(),
            Point3::new(1.0, -2.0, 3.5),
            Point3::new(-1e6, 1e-6, 0.0),
        ] {
            assert_eq!(angle(&p, &p, Some(&p)), 0.0);
        }
    }

    #[test]
    fn missing_third_point_drops_to_z_zero() {
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(0.0, 1.0, 0.0);
        // p3 = (0, 1, 0) coincides with p2, so hyp = 1.
        assert_relative_eq!(angle(&p1, &p2, None), PI / 2.0, epsilon = 1e-12);

        let p2 = Point3::new(1.0, 1.0, 0.0);
        assert_relative_eq!(angle(&p1, &p2, None), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn explicit_third_point_extends_hypotenuse() {
        let p1 = Point3::new(0.0, 0.0, 0.0);
        let p2 = Point3::new(0.0, 1.0, 0.0);
        let p3 = Point3::new(0.0, 1.0, 1.0);
        // hyp = sqrt(1 + 1)
        assert_relative_eq!(angle(&p1, &p2, Some(&p3)), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn vert_angle_on_axis_branches() {
        let a = vert_angle(&[1.0, 0.0], &[1.0, 1.0]).unwrap();
        assert_relative_eq!(a, FRAC_PI_4, epsilon = 1e-12);

        let b = vert_angle(&[2.0, 1.0], &[1.0, 0.0]).unwrap();
        assert_relative_eq!(b, 1.0_f64.atan(), epsilon = 1e-12);

        let c = vert_angle_with(&[2.0, 1.0], &[1.0, 0.0], PlaneMode::Corrected).unwrap();
        assert_relative_eq!(c, 0.5_f64.atan(), epsilon = 1e-12);
    }

    #[test]
    fn vert_angle_ratio_grouping() {
        let p = Point2::new(1.0, 1.0);
        let literal = vert_angle(&p, &p).unwrap();
        let corrected = vert_angle_with(&p, &p, PlaneMode::Corrected).unwrap();
        assert_relative_eq!(literal, 2.0, epsilon = 1e-12);
        assert_relative_eq!(corrected, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn vert_angle_rejects_non_planar_points() {
        let err = vert_angle(&Point3::new(1.0, 1.0, 1.0), &[1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            crate::TrigonError::Geometry(GeometryError::DimensionMismatch { found: 3, .. })
        ));
        let short: &[f64] = &[1.0];
        assert!(vert_angle(&[1.0, 1.0], short).is_err());
    }
}
