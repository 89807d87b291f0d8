/// Convenience result type used across arcdial.
pub type ArcDialResult<T> = Result<T, ArcDialError>;

/// Top-level error taxonomy for the crate's fallible boundary APIs.
///
/// The drawing core itself is infallible by contract: angles, radii and line
/// widths are assumed pre-validated by the caller. Errors only arise at the
/// edges (image decoding, surface construction, configuration validation).
#[derive(thiserror::Error, Debug)]
pub enum ArcDialError {
    /// Invalid user-provided configuration or geometry data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while preparing or reading back a raster surface.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArcDialError {
    /// Build an [`ArcDialError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArcDialError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
