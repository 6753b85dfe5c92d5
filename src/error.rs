use thiserror::Error;

/// Top-level error type for the trigon crate.
#[derive(Debug, Error)]
pub enum TrigonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

/// Errors raised by the geometry primitives when an argument has the wrong shape.
///
/// Out-of-range numeric input is never an error here; it yields NaN or
/// infinity and propagates.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{operation}: point has {found} coordinates, needs {expected}")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("coordinate buffer of length {len} is not a sequence of xyz triples")]
    IncompleteTriple { len: usize },
}

/// Errors related to viewport configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("focal length must be finite and positive, got {0}")]
    InvalidFocalLength(f64),

    #[error("field of view {0} degrees is outside (0, 180)")]
    InvalidFov(f64),
}

/// Convenience type alias for results using [`TrigonError`].
pub type Result<T> = std::result::Result<T, TrigonError>;
