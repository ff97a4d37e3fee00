//! Drifting particle field with proximity links.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::animator::{Animator, TickContext};
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::error::EngineError;
use crate::render::color::Color;
use crate::render::surface::DrawSurface;

/// Tuning for the particle field.
/// Fields omitted from a tuning blob fall back to the stock constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleFieldConfig {
    /// Mote population, constant for the life of the field.
    pub count: usize,
    /// Per-axis velocity components are drawn from [-max_speed, max_speed).
    pub max_speed: f32,
    /// Mote radius range.
    pub size_range: (f32, f32),
    /// Mote fill alpha range.
    pub opacity_range: (f32, f32),
    /// Two motes closer than this get a connecting line.
    pub link_distance: f32,
    /// Link alpha at zero distance; fades linearly to 0 at `link_distance`.
    pub link_alpha: f32,
    pub link_width: f32,
    pub color: Color,
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self {
            count: 100,
            max_speed: 0.25,
            size_range: (0.5, 2.5),
            opacity_range: (0.2, 0.7),
            link_distance: 100.0,
            link_alpha: 0.2,
            link_width: 0.5,
            color: Color::ACCENT,
        }
    }
}

/// A single drifting mote.
#[derive(Debug, Clone, Copy)]
pub struct Mote {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
}

/// Fixed-population 2D particle field on a toroidal viewport.
///
/// Motes are created once with randomized state, advanced by their own
/// velocity each tick, and wrapped at the bounds — never destroyed, never
/// bounced. `reset` replaces the population wholesale; `resize` only swaps
/// the wrap bounds used from then on, leaving mote positions untouched.
///
/// Rendering draws every mote plus a line between every pair closer than
/// `link_distance`. The pair scan is O(n²) per frame by design; it is the
/// dominant cost and stays exact for populations around 100.
pub struct ParticleField {
    config: ParticleFieldConfig,
    bounds: Viewport,
    rng: Rng,
    motes: Vec<Mote>,
}

impl ParticleField {
    pub fn new(
        config: ParticleFieldConfig,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, EngineError> {
        if config.count == 0 {
            return Err(EngineError::EmptyPopulation { what: "particle" });
        }
        let mut field = Self {
            config,
            bounds: viewport,
            rng: Rng::new(seed),
            motes: Vec::new(),
        };
        field.reset(viewport);
        Ok(field)
    }

    /// Replace every mote with a fresh randomized one over `viewport`.
    pub fn reset(&mut self, viewport: Viewport) {
        self.bounds = viewport;
        let cfg = self.config;
        let rng = &mut self.rng;
        self.motes = (0..cfg.count)
            .map(|_| Mote {
                pos: Vec2::new(
                    rng.range(0.0, viewport.width),
                    rng.range(0.0, viewport.height),
                ),
                vel: Vec2::new(
                    rng.range(-cfg.max_speed, cfg.max_speed),
                    rng.range(-cfg.max_speed, cfg.max_speed),
                ),
                size: rng.range(cfg.size_range.0, cfg.size_range.1),
                opacity: rng.range(cfg.opacity_range.0, cfg.opacity_range.1),
            })
            .collect();
    }

    pub fn motes(&self) -> &[Mote] {
        &self.motes
    }

    pub fn motes_mut(&mut self) -> &mut [Mote] {
        &mut self.motes
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    /// Toroidal wrap keeping the coordinate in [0, max).
    /// The shifted value is re-checked: a tiny negative overshoot plus `max`
    /// rounds to exactly `max` in f32, which would land on the excluded bound.
    fn wrap(v: f32, max: f32) -> f32 {
        let shifted = if v >= max {
            v - max
        } else if v < 0.0 {
            v + max
        } else {
            return v;
        };
        if shifted >= max {
            0.0
        } else {
            shifted
        }
    }
}

impl Animator for ParticleField {
    fn step(&mut self, _ctx: &TickContext) {
        for mote in &mut self.motes {
            mote.pos += mote.vel;
            mote.pos.x = Self::wrap(mote.pos.x, self.bounds.width);
            mote.pos.y = Self::wrap(mote.pos.y, self.bounds.height);
        }
    }

    fn render(&mut self, surface: &mut dyn DrawSurface) {
        surface.clear();

        let cfg = &self.config;
        for mote in &self.motes {
            surface.fill_circle(mote.pos, mote.size, cfg.color.with_alpha(mote.opacity));
        }

        // Every unordered pair within link_distance gets a line whose alpha
        // fades linearly with distance, reaching 0 at the threshold.
        for i in 0..self.motes.len() {
            for j in (i + 1)..self.motes.len() {
                let distance = self.motes[i].pos.distance(self.motes[j].pos);
                if distance < cfg.link_distance {
                    let alpha = cfg.link_alpha * (1.0 - distance / cfg.link_distance);
                    surface.stroke_line(
                        self.motes[i].pos,
                        self.motes[j].pos,
                        cfg.color.with_alpha(alpha),
                        cfg.link_width,
                    );
                }
            }
        }
    }

    /// Resize swaps the wrap bounds only; motes keep their positions.
    fn resize(&mut self, viewport: Viewport) {
        self.bounds = viewport;
    }
}
