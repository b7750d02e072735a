//! Engine error type.
//!
//! Only construction and configuration parsing can fail. Everything that
//! happens inside a frame degrades instead of erroring.

use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    /// The host could not provide a 2D drawing surface.
    SurfaceUnavailable(String),
    /// Surface reported a non-positive or non-finite size.
    InvalidDimensions { width: f32, height: f32 },
    /// Options JSON did not parse.
    InvalidOptions(serde_json::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::SurfaceUnavailable(msg) => write!(f, "Drawing surface unavailable: {}", msg),
            EngineError::InvalidDimensions { width, height } => {
                write!(f, "Invalid surface dimensions {}x{}", width, height)
            }
            EngineError::InvalidOptions(e) => write!(f, "Invalid options JSON: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidOptions(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::InvalidOptions(e)
    }
}
