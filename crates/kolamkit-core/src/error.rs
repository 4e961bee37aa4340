//! Error handling for KolamKit
//!
//! Provides structured error types for the two failure classes of the
//! generator:
//! - Parameter errors (invalid caller input, detected before any work)
//! - Render errors (surface allocation and output encoding)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Parameter validation error type
///
/// Raised eagerly by the parameter normalizer before any lattice,
/// curve, or render work happens. Surfaced to callers as a
/// client-side failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// Grid dimensions must both be positive
    #[error("m and n must be positive integers")]
    NonPositiveDimensions {
        /// The supplied radius-index count.
        m: i32,
        /// The supplied angular division count.
        n: i32,
    },
}

/// Render error type
///
/// Represents failures while constructing a drawing surface or
/// encoding the raster/vector outputs. Surfaced to callers as a
/// server-side failure with the underlying message passed through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Drawing surface could not be allocated
    #[error("Failed to allocate {width}x{height} drawing surface")]
    SurfaceAllocation {
        /// The requested surface width in pixels.
        width: u32,
        /// The requested surface height in pixels.
        height: u32,
    },

    /// A resolved color string was not a #rrggbb value
    #[error("Invalid line color '{color}'")]
    InvalidColor {
        /// The color string that failed to parse.
        color: String,
    },

    /// Raster encoding failed
    #[error("PNG encoding failed: {reason}")]
    PngEncode {
        /// The underlying encoder message.
        reason: String,
    },
}

/// Main error type for KolamKit
///
/// A unified error type covering every failure the generation
/// pipeline can signal. This is the primary error type used in
/// public APIs.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Parameter validation error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error is the caller's fault (bad parameters)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }

    /// Check if this is a render error
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Render(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::NonPositiveDimensions { m: 0, n: 5 };
        assert_eq!(err.to_string(), "m and n must be positive integers");
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::SurfaceAllocation {
            width: 960,
            height: 960,
        };
        assert_eq!(err.to_string(), "Failed to allocate 960x960 drawing surface");

        let err = RenderError::InvalidColor {
            color: "#zz0000".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid line color '#zz0000'");
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::NonPositiveDimensions { m: -1, n: 4 };
        let err: Error = param_err.into();
        assert!(err.is_client_error());
        assert!(!err.is_render_error());

        let render_err = RenderError::PngEncode {
            reason: "buffer too small".to_string(),
        };
        let err: Error = render_err.into();
        assert!(err.is_render_error());
        assert_eq!(err.to_string(), "PNG encoding failed: buffer too small");
    }
}
