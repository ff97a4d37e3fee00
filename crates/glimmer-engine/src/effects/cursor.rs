//! Exponential-decay cursor follower.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::animator::{Animator, TickContext};
use crate::error::EngineError;
use crate::render::color::Color;
use crate::render::surface::DrawSurface;

/// Tuning for the two cursor markers.
/// Fields omitted from a tuning blob fall back to the stock constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorStyle {
    /// Per-tick ease factor for the tight dot marker.
    pub dot_ease: f32,
    /// Per-tick ease factor for the trailing halo.
    pub halo_ease: f32,
    pub dot_radius: f32,
    pub halo_radius: f32,
    pub halo_alpha: f32,
    /// Radius multiplier while hovering an interactive element.
    pub emphasis_scale: f32,
    pub color: Color,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            dot_ease: 0.2,
            halo_ease: 0.1,
            dot_radius: 4.0,
            halo_radius: 16.0,
            halo_alpha: 0.25,
            emphasis_scale: 1.5,
            color: Color::ACCENT,
        }
    }
}

/// Two trackers chasing the latest pointer sample with independent ease
/// factors: `tracked += (target - tracked) * ease` once per tick, fixed step,
/// never delta-time based.
///
/// Both trackers start at the origin, so the first pointer sample produces a
/// visible snap-in. That matches the accepted edge-case behavior.
pub struct CursorGlide {
    style: CursorStyle,
    target: Vec2,
    dot: Vec2,
    halo: Vec2,
    emphasized: bool,
}

impl CursorGlide {
    pub fn new(style: CursorStyle) -> Result<Self, EngineError> {
        for ease in [style.dot_ease, style.halo_ease] {
            if !(ease > 0.0 && ease < 1.0) {
                return Err(EngineError::SmoothingOutOfRange(ease));
            }
        }
        Ok(Self {
            style,
            target: Vec2::ZERO,
            dot: Vec2::ZERO,
            halo: Vec2::ZERO,
            emphasized: false,
        })
    }

    /// Current position of the tight marker.
    pub fn dot(&self) -> Vec2 {
        self.dot
    }

    /// Current position of the trailing halo.
    pub fn halo(&self) -> Vec2 {
        self.halo
    }
}

impl Animator for CursorGlide {
    fn step(&mut self, ctx: &TickContext) {
        if let Some(p) = ctx.pointer {
            self.target = p;
        }
        self.emphasized = ctx.emphasis;
        self.dot += (self.target - self.dot) * self.style.dot_ease;
        self.halo += (self.target - self.halo) * self.style.halo_ease;
    }

    fn render(&mut self, surface: &mut dyn DrawSurface) {
        surface.clear();
        let scale = if self.emphasized {
            self.style.emphasis_scale
        } else {
            1.0
        };
        surface.fill_circle(
            self.halo,
            self.style.halo_radius * scale,
            self.style.color.with_alpha(self.style.halo_alpha),
        );
        surface.fill_circle(self.dot, self.style.dot_radius * scale, self.style.color);
    }
}
