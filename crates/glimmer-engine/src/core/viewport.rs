use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Current drawable size in logical pixels.
///
/// Injected at construction and swapped on resize notification; animators only
/// ever read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Validate and construct. Non-positive dimensions are a fatal
    /// configuration error, not a degraded mode.
    pub fn new(width: f32, height: f32) -> Result<Self, EngineError> {
        if width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(EngineError::InvalidViewport { width, height })
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
