//! Per-plane distances and angles between two points in 3D space.
//!
//! Two coordinate-selection modes exist. [`PlaneMode::Literal`] keeps the
//! historical pairing, which mixes coordinates for the `xz` and `yz` planes:
//!
//! | field | point 1 | point 2 |
//! |-------|---------|---------|
//! | `xy`  | (x, y)  | (x, y)  |
//! | `xz`  | (x, z)  | (x, y)  |
//! | `yz`  | (y, z)  | (y, y)  |
//!
//! and derives the `yz` angle from the `xz` hypotenuse. [`PlaneMode::Corrected`]
//! pairs matching coordinates in every plane.

use std::f64::consts::FRAC_PI_2;

use super::distance::euclidean;
use super::Point3;

/// Coordinate-selection mode for the plane helpers and [`super::vert_angle_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaneMode {
    /// Bit-compatible with the historical results, quirks included.
    #[default]
    Literal,
    /// Matching coordinate pairs and properly grouped normalization.
    Corrected,
}

/// 2D distances between two points projected onto each plane pair.
///
/// Mirrored fields (`xy`/`yx`, `xz`/`zx`, `yz`/`zy`) always hold the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneDistances {
    pub xy: f64,
    pub yx: f64,
    pub xz: f64,
    pub zx: f64,
    pub yz: f64,
    pub zy: f64,
}

impl PlaneDistances {
    fn mirrored(xy: f64, xz: f64, yz: f64) -> Self {
        Self {
            xy,
            yx: xy,
            xz,
            zx: xz,
            yz,
            zy: yz,
        }
    }
}

/// Angles of the segment between two points in each plane pair, in radians.
///
/// `xy`, `xz` and `yz` are measured from the first axis; their mirrored
/// fields are the complements `π/2 - angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneAngles {
    pub xy: f64,
    pub yx: f64,
    pub xz: f64,
    pub zx: f64,
    pub yz: f64,
    pub zy: f64,
}

/// Per-plane distances between `p1` and `p2` in [`PlaneMode::Literal`].
#[must_use]
pub fn plane_dists(p1: &Point3, p2: &Point3) -> PlaneDistances {
    plane_dists_with(p1, p2, PlaneMode::Literal)
}

/// Per-plane distances between `p1` and `p2` using the given selection mode.
#[must_use]
pub fn plane_dists_with(p1: &Point3, p2: &Point3, mode: PlaneMode) -> PlaneDistances {
    let xy = euclidean(2, &[[p1.x, p1.y], [p2.x, p2.y]]);
    let (xz, yz) = match mode {
        PlaneMode::Literal => (
            euclidean(2, &[[p1.x, p1.z], [p2.x, p2.y]]),
            euclidean(2, &[[p1.y, p1.z], [p2.y, p2.y]]),
        ),
        PlaneMode::Corrected => (
            euclidean(2, &[[p1.x, p1.z], [p2.x, p2.z]]),
            euclidean(2, &[[p1.y, p1.z], [p2.y, p2.z]]),
        ),
    };
    PlaneDistances::mirrored(xy, xz, yz)
}

/// Per-plane angles between `p1` and `p2` in [`PlaneMode::Literal`].
///
/// A zero hypotenuse gives NaN or ±π/2 depending on the numerator; nothing
/// is clamped.
#[must_use]
pub fn plane_angles(p1: &Point3, p2: &Point3) -> PlaneAngles {
    plane_angles_with(p1, p2, PlaneMode::Literal)
}

/// Per-plane angles between `p1` and `p2` using the given selection mode.
#[must_use]
pub fn plane_angles_with(p1: &Point3, p2: &Point3, mode: PlaneMode) -> PlaneAngles {
    let hyp = plane_dists_with(p1, p2, mode);
    let dy = p2.y - p1.y;
    let dz = p2.z - p1.z;

    let xy = (dy / hyp.xy).asin();
    let xz = (dz / hyp.xz).asin();
    let yz = match mode {
        PlaneMode::Literal => (dz / hyp.xz).asin(),
        PlaneMode::Corrected => (dz / hyp.yz).asin(),
    };

    PlaneAngles {
        xy,
        yx: FRAC_PI_2 - xy,
        xz,
        zx: FRAC_PI_2 - xz,
        yz,
        zy: FRAC_PI_2 - yz,
    }
}
