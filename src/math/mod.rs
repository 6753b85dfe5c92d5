pub mod angle;
pub mod distance;
pub mod merge;
pub mod plane;

pub use angle::{angle, deg_per_rad, rad_to_deg, vert_angle, vert_angle_with, DEG_PER_RAD};
pub use distance::{abs_dist, euc_dist};
pub use merge::merge_points;
pub use plane::{plane_angles, plane_angles_with, plane_dists, plane_dists_with};
pub use plane::{PlaneAngles, PlaneDistances, PlaneMode};

use crate::error::{GeometryError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Anything that can be read as an ordered run of coordinates `(x, y[, z, ...])`.
///
/// Lets the distance primitives accept nalgebra points, fixed arrays and
/// plain slices alike.
pub trait Coordinates {
    /// Returns the coordinates in axis order.
    fn as_coords(&self) -> &[f64];
}

impl Coordinates for Point2 {
    fn as_coords(&self) -> &[f64] {
        self.coords.as_slice()
    }
}

impl Coordinates for Point3 {
    fn as_coords(&self) -> &[f64] {
        self.coords.as_slice()
    }
}

impl<const N: usize> Coordinates for [f64; N] {
    fn as_coords(&self) -> &[f64] {
        self.as_slice()
    }
}

impl Coordinates for [f64] {
    fn as_coords(&self) -> &[f64] {
        self
    }
}

impl Coordinates for Vec<f64> {
    fn as_coords(&self) -> &[f64] {
        self.as_slice()
    }
}

impl<T: Coordinates + ?Sized> Coordinates for &T {
    fn as_coords(&self) -> &[f64] {
        (**self).as_coords()
    }
}

/// Returns the coordinates of `point`, or a shape error naming `operation`
/// when it carries fewer than `expected` of them.
pub(crate) fn require_dim<'a, P: Coordinates + ?Sized>(
    operation: &'static str,
    expected: usize,
    point: &'a P,
) -> Result<&'a [f64]> {
    let coords = point.as_coords();
    if coords.len() < expected {
        return Err(GeometryError::DimensionMismatch {
            operation,
            expected,
            found: coords.len(),
        }
        .into());
    }
    Ok(coords)
}
