use crate::error::{Result, ViewportError};
use crate::math::Point3;

/// Construction parameters for a [`super::Viewport`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Camera position in world space.
    pub position: Point3,
    /// Image-plane width in pixels.
    pub width: u32,
    /// Image-plane height in pixels.
    pub height: u32,
    /// Horizontal field of view in degrees.
    pub fov_degrees: f64,
    pub focal_length: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            width: 1024,
            height: 1024,
            fov_degrees: 90.0,
            focal_length: 1.0,
        }
    }
}

impl ViewportConfig {
    /// Sets the camera position.
    #[must_use]
    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    /// Sets the image-plane resolution.
    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the horizontal field of view in degrees.
    #[must_use]
    pub fn with_fov_degrees(mut self, fov_degrees: f64) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    /// Sets the focal length.
    #[must_use]
    pub fn with_focal_length(mut self, focal_length: f64) -> Self {
        self.focal_length = focal_length;
        self
    }

    /// Checks that every parameter describes a usable camera.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero width or height, a focal length that is
    /// not finite and positive, or a field of view outside `(0, 180)` degrees.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewportError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if !self.focal_length.is_finite() || self.focal_length <= 0.0 {
            return Err(ViewportError::InvalidFocalLength(self.focal_length).into());
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ViewportError::InvalidFov(self.fov_degrees).into());
        }
        Ok(())
    }
}
