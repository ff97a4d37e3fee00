use thiserror::Error;

/// Fatal configuration errors.
///
/// Everything here is detectable before the tick loop starts, and there is no
/// meaningful degraded mode, so callers are expected to fail fast instead of
/// starting a stage they cannot drive.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("viewport dimensions must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("{what} population must be nonzero")]
    EmptyPopulation { what: &'static str },

    #[error("smoothing factor must lie in (0, 1), got {0}")]
    SmoothingOutOfRange(f32),

    #[error("invalid scene tuning: {0}")]
    BadTuning(#[from] serde_json::Error),
}
