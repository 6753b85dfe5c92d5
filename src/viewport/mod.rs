//! Pinhole-style camera projecting world points onto a pixel image plane.
//!
//! A [`Viewport`] holds a position, an image resolution, a horizontal and
//! vertical field of view and a focal length. The two fields of view are
//! derived together by [`Viewport::set_fov`]; assigning `width` or `height`
//! directly leaves them stale until `set_fov` runs again (or use
//! [`Viewport::resize`], which does both).
//!
//! Queries take `&self` and keep no per-call state, so one viewport can serve
//! any number of readers. Share a mutable viewport across threads behind a
//! lock, or hand readers cloned snapshots.

mod config;
mod projection;

pub use config::ViewportConfig;
pub use projection::BearingAngles;

use std::f64::consts::PI;

use tracing::debug;

use crate::error::Result;
use crate::math::{rad_to_deg, Point3};

/// Both fields of view in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FovDegrees {
    pub h: f64,
    pub v: f64,
}

/// A camera with a position, image dimensions, field of view and focal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Camera position in world space.
    pub position: Point3,
    /// Image-plane width in pixels.
    pub width: u32,
    /// Image-plane height in pixels.
    pub height: u32,
    /// Perspective scale used by the projection.
    pub focal_length: f64,
    hfov: f64,
    vfov: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport at the origin with a 1024x1024 image, 90° horizontal
    /// field of view and focal length 1.
    #[must_use]
    pub fn new() -> Self {
        let defaults = ViewportConfig::default();
        let mut viewport = Self {
            position: defaults.position,
            width: defaults.width,
            height: defaults.height,
            focal_length: defaults.focal_length,
            hfov: 0.0,
            vfov: 0.0,
        };
        viewport.set_fov(defaults.fov_degrees);
        viewport
    }

    /// Creates a viewport from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`ViewportConfig::validate`].
    pub fn from_config(config: &ViewportConfig) -> Result<Self> {
        config.validate()?;
        let mut viewport = Self {
            position: config.position,
            width: config.width,
            height: config.height,
            focal_length: config.focal_length,
            hfov: 0.0,
            vfov: 0.0,
        };
        viewport.set_fov(config.fov_degrees);
        debug!(
            width = viewport.width,
            height = viewport.height,
            focal_length = viewport.focal_length,
            "viewport built from config"
        );
        Ok(viewport)
    }

    /// Returns the current parameters as a configuration.
    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        ViewportConfig {
            position: self.position,
            width: self.width,
            height: self.height,
            fov_degrees: rad_to_deg(self.hfov),
            focal_length: self.focal_length,
        }
    }

    /// Sets the horizontal field of view in degrees and derives the vertical
    /// one from the current aspect ratio.
    ///
    /// `vfov = 2 * atan(tan(hfov / 2) / aspect_ratio)`.
    pub fn set_fov(&mut self, degrees: f64) {
        self.apply_hfov(PI * degrees / 180.0);
    }

    /// Changes the image dimensions and re-derives the vertical field of view,
    /// keeping the horizontal one.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.apply_hfov(self.hfov);
    }

    fn apply_hfov(&mut self, hfov: f64) {
        self.hfov = hfov;
        self.vfov = 2.0 * ((hfov / 2.0).tan() / self.aspect_ratio()).atan();
        debug!(hfov = self.hfov, vfov = self.vfov, "field of view updated");
    }

    /// Horizontal field of view in radians.
    #[must_use]
    pub fn hfov(&self) -> f64 {
        self.hfov
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn vfov(&self) -> f64 {
        self.vfov
    }

    #[must_use]
    pub fn fov_degrees(&self) -> FovDegrees {
        FovDegrees {
            h: rad_to_deg(self.hfov),
            v: rad_to_deg(self.vfov),
        }
    }

    /// `width / height`.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Length of the image diagonal in pixels, used as the sensor size.
    #[must_use]
    pub fn normal(&self) -> f64 {
        f64::from(self.width).hypot(f64::from(self.height))
    }
}
