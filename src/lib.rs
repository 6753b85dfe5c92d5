pub mod error;
pub mod math;
pub mod viewport;

pub use error::{GeometryError, Result, TrigonError, ViewportError};
pub use viewport::{BearingAngles, FovDegrees, Viewport, ViewportConfig};
