//! Error type for building a physics session.

/// Errors that prevent the logo from switching to live physics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogoError {
    /// The container has no usable size (zero, negative, or not finite).
    #[error("invalid viewport: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    /// There are no letters to simulate.
    #[error("no glyphs to simulate")]
    NoGlyphs,
}
