use thiserror::Error;

/// Why the background could not get a drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no browser window available")]
    NoWindow,
    #[error("canvas element is not mounted")]
    NotMounted,
    #[error("2d rendering context is not supported")]
    ContextUnavailable,
    #[error("2d rendering context request failed: {0}")]
    ContextRejected(String),
}

#[derive(Debug, Error)]
#[error("failed to mount stylesheet: {0}")]
pub struct StyleError(#[from] pub stylist::Error);
