use serde::{Deserialize, Serialize};

use crate::api::animator::{Animator, TickContext};
use crate::core::ticker::{CancelHandle, Ticker};
use crate::core::viewport::Viewport;
use crate::effects::cursor::{CursorGlide, CursorStyle};
use crate::effects::globe::{PointSphere, PointSphereConfig};
use crate::effects::particles::{ParticleField, ParticleFieldConfig};
use crate::error::EngineError;
use crate::input::pointer::PointerState;
use crate::render::surface::{DrawCommand, PrimitiveBuffer};

/// Identifier for a layer added to the stage, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerId(pub usize);

struct Layer {
    name: &'static str,
    animator: Box<dyn Animator>,
    surface: PrimitiveBuffer,
}

/// Owns the independent animation layers and drives them.
///
/// The host calls [`tick`](Stage::tick) once per display refresh. Each tick
/// runs `step` then `render` for every layer, synchronously and in insertion
/// order; layers share no state, so the order is unobservable. A cancelled
/// stage ignores further ticks.
pub struct Stage {
    viewport: Viewport,
    pointer: PointerState,
    ticker: Ticker,
    layers: Vec<Layer>,
}

impl Stage {
    pub fn new(viewport: Viewport) -> Self {
        log::info!(
            "stage created, viewport {}x{}",
            viewport.width,
            viewport.height
        );
        Self {
            viewport,
            pointer: PointerState::new(),
            ticker: Ticker::new(),
            layers: Vec::new(),
        }
    }

    /// Assemble the stock portfolio hero scene: the drifting particle field,
    /// the rotating point globe, and the cursor markers.
    pub fn hero_scene(viewport: Viewport, seed: u64) -> Result<Self, EngineError> {
        Self::hero_scene_tuned(viewport, seed, &SceneTuning::default())
    }

    /// Same as [`hero_scene`](Stage::hero_scene) with explicit tuning.
    pub fn hero_scene_tuned(
        viewport: Viewport,
        seed: u64,
        tuning: &SceneTuning,
    ) -> Result<Self, EngineError> {
        let mut stage = Self::new(viewport);
        stage.add_layer(
            "particles",
            Box::new(ParticleField::new(tuning.particles, viewport, seed)?),
        );
        stage.add_layer(
            "globe",
            Box::new(PointSphere::new(tuning.globe, seed.wrapping_add(1))?),
        );
        stage.add_layer("cursor", Box::new(CursorGlide::new(tuning.cursor)?));
        Ok(stage)
    }

    pub fn add_layer(&mut self, name: &'static str, animator: Box<dyn Animator>) -> LayerId {
        self.layers.push(Layer {
            name,
            animator,
            surface: PrimitiveBuffer::with_capacity(256),
        });
        LayerId(self.layers.len() - 1)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_name(&self, layer: LayerId) -> Option<&'static str> {
        self.layers.get(layer.0).map(|l| l.name)
    }

    /// Commands recorded by a layer's most recent render, empty before the
    /// first tick or for an unknown layer.
    pub fn commands(&self, layer: LayerId) -> &[DrawCommand] {
        self.layers
            .get(layer.0)
            .map(|l| l.surface.commands())
            .unwrap_or(&[])
    }

    /// Latest pointer movement, last value wins.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    /// Toggle hover emphasis on pointer-following layers.
    pub fn pointer_emphasis(&mut self, on: bool) {
        self.pointer.set_emphasis(on);
    }

    /// Viewport change notification, propagated to every layer.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for layer in &mut self.layers {
            layer.animator.resize(viewport);
        }
    }

    /// Handle the host uses to stop the loop on view teardown.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.ticker.handle()
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticker.ticks()
    }

    /// Run one tick: `step` then `render` for every layer. Returns false
    /// (doing no work) once the stage has been cancelled.
    pub fn tick(&mut self) -> bool {
        if !self.ticker.advance() {
            return false;
        }
        let ctx = TickContext {
            viewport: self.viewport,
            pointer: self.pointer.sample(),
            emphasis: self.pointer.emphasis(),
            ticks: self.ticker.ticks(),
        };
        for layer in &mut self.layers {
            layer.animator.step(&ctx);
            layer.animator.render(&mut layer.surface);
        }
        true
    }
}

/// JSON-tunable settings for the stock hero scene.
///
/// Every section is optional and falls back to the stock constants.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SceneTuning {
    #[serde(default)]
    pub particles: ParticleFieldConfig,
    #[serde(default)]
    pub globe: PointSphereConfig,
    #[serde(default)]
    pub cursor: CursorStyle,
}

impl SceneTuning {
    /// Parse tuning from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn hero_scene_has_three_layers() {
        let stage = Stage::hero_scene(viewport(), 42).unwrap();
        assert_eq!(stage.layer_count(), 3);
        assert_eq!(stage.layer_name(LayerId(0)), Some("particles"));
        assert_eq!(stage.layer_name(LayerId(1)), Some("globe"));
        assert_eq!(stage.layer_name(LayerId(2)), Some("cursor"));
    }

    #[test]
    fn tick_renders_every_layer() {
        let mut stage = Stage::hero_scene(viewport(), 42).unwrap();
        assert!(stage.commands(LayerId(0)).is_empty());
        assert!(stage.tick());
        for i in 0..stage.layer_count() {
            let commands = stage.commands(LayerId(i));
            assert_eq!(commands[0], DrawCommand::Clear);
            assert!(commands.len() > 1, "layer {} rendered nothing", i);
        }
        assert_eq!(stage.ticks(), 1);
    }

    #[test]
    fn cancel_stops_further_ticks() {
        let mut stage = Stage::hero_scene(viewport(), 42).unwrap();
        assert!(stage.tick());
        stage.cancel_handle().cancel();
        assert!(!stage.tick());
        assert_eq!(stage.ticks(), 1);
    }

    #[test]
    fn unknown_layer_yields_no_commands() {
        let stage = Stage::hero_scene(viewport(), 42).unwrap();
        assert!(stage.commands(LayerId(99)).is_empty());
    }

    #[test]
    fn same_seed_replays_the_same_scene() {
        let mut a = Stage::hero_scene(viewport(), 7).unwrap();
        let mut b = Stage::hero_scene(viewport(), 7).unwrap();
        for _ in 0..5 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.commands(LayerId(0)), b.commands(LayerId(0)));
        assert_eq!(a.commands(LayerId(1)), b.commands(LayerId(1)));
    }

    #[test]
    fn tuning_parses_with_partial_sections() {
        let tuning = SceneTuning::from_json(r#"{"globe": {"count": 64, "radius": 80.0}}"#)
            .unwrap();
        assert_eq!(tuning.globe.count, 64);
        assert_eq!(tuning.globe.radius, 80.0);
        assert_eq!(tuning.particles.count, 100, "untouched section keeps defaults");
    }

    #[test]
    fn tuning_fields_are_individually_optional() {
        let tuning = SceneTuning::from_json(r#"{"particles": {"count": 10}}"#).unwrap();
        assert_eq!(tuning.particles.count, 10);
        assert_eq!(tuning.particles.link_distance, 100.0, "omitted field keeps its stock value");
        assert_eq!(tuning.cursor.dot_ease, 0.2);
    }

    #[test]
    fn bad_tuning_is_an_error() {
        assert!(SceneTuning::from_json("not json").is_err());
    }
}
