use std::f64::consts::FRAC_PI_2;

use tracing::trace;

use crate::math::{Point2, Point3};

use super::Viewport;

/// Bearing of a world point as seen from the camera position, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BearingAngles {
    /// Angle in the xy plane, measured from the x axis.
    pub xy: f64,
    /// Angle in the xz plane, measured from the x axis.
    pub xz: f64,
}

impl Viewport {
    /// Bearing of `point` relative to the camera position.
    ///
    /// Independent of field of view and focal length. A point level with the
    /// camera on x falls back to `π/2 - atan(Δx / Δother)`; a point level on
    /// both axes of a plane gives `0`.
    #[must_use]
    pub fn point_angle(&self, point: &Point3) -> BearingAngles {
        let d = *point - self.position;
        BearingAngles {
            xy: bearing(d.x, d.y),
            xz: bearing(d.x, d.z),
        }
    }

    /// Projects a world point to screen coordinates in pixels.
    ///
    /// With `d` the offset from the camera and `f` the focal length:
    ///
    /// ```text
    /// a  = sqrt(dx² + dy² + (dz - f)²)
    /// hx = a + a·f / (dz - f)
    /// sx = asin(dx / hx) / hfov · width
    /// sy = acos(dy / hx) / vfov · height
    /// ```
    ///
    /// Degenerate input is not an error: `dz == f` divides by zero and
    /// `|dx / hx| > 1` leaves the trig domain. Both give non-finite
    /// coordinates.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn transform_point(&self, point: &Point3) -> Point2 {
        let d = *point - self.position;
        let f = self.focal_length;

        if d.z == f {
            trace!(?point, "point on the focal plane, projection is non-finite");
        }

        let a = (d.x.powi(2) + d.y.powi(2) + (d.z - f).powi(2)).sqrt();
        let hx = a + a * f / (d.z - f);

        Point2::new(
            (d.x / hx).asin() / self.hfov * f64::from(self.width),
            (d.y / hx).acos() / self.vfov * f64::from(self.height),
        )
    }

    /// Best-effort mapping from screen space back toward world space.
    ///
    /// Scales `x` and `y` by how far the point sits off the camera axis:
    ///
    /// ```text
    /// dx = x - position.x - f,  dy = y - position.y,  dz = z - position.z
    /// x' = x · (1 - asin(dx / sqrt(dz² + dx²)) / (π/2))
    /// y' = y · (1 - acos(dy / sqrt(dy² + dz²)) / (π/2))
    /// ```
    ///
    /// This uses a different normalization from [`Self::transform_point`]
    /// and does not undo it.
    #[must_use]
    pub fn inverse_transform_point(&self, point: &Point3) -> Point2 {
        let dx = point.x - self.position.x - self.focal_length;
        let dy = point.y - self.position.y;
        let dz = point.z - self.position.z;

        let xcoef = 1.0 - (dx / dz.hypot(dx)).asin() / FRAC_PI_2;
        let ycoef = 1.0 - (dy / dy.hypot(dz)).acos() / FRAC_PI_2;

        Point2::new(point.x * xcoef, point.y * ycoef)
    }

    /// Coarse visibility test.
    ///
    /// A point is hidden when it lies beyond the camera depth
    /// (`z > position.z`) or when `x` falls outside `[0, width)`. `y` is not
    /// checked.
    #[must_use]
    pub fn point_visible(&self, point: &Point3) -> bool {
        if point.z > self.position.z {
            return false;
        }
        (0.0..f64::from(self.width)).contains(&point.x)
    }
}

#[allow(clippy::float_cmp)]
fn bearing(run: f64, rise: f64) -> f64 {
    if run != 0.0 {
        (rise / run).atan()
    } else if rise != 0.0 {
        FRAC_PI_2 - (run / rise).atan()
    } else {
        0.0
    }
}
