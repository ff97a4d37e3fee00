use glimmer_engine::{encode_commands, EngineError, LayerId, SceneTuning, Stage, Viewport};

/// Drives the hero scene from the browser.
///
/// JS calls [`tick`](SceneRunner::tick) from its requestAnimationFrame
/// callback, then reads each layer's frame as a `Float32Array` over the
/// pointer/length pair. Frames are re-encoded every tick; the buffers are
/// reused, so the pointers stay valid until the next tick.
pub struct SceneRunner {
    stage: Stage,
    frames: Vec<Vec<f32>>,
}

impl SceneRunner {
    pub fn new(
        width: f32,
        height: f32,
        seed: u64,
        tuning: Option<&str>,
    ) -> Result<Self, EngineError> {
        let viewport = Viewport::new(width, height)?;
        let tuning = match tuning {
            Some(json) => SceneTuning::from_json(json)?,
            None => SceneTuning::default(),
        };
        let stage = Stage::hero_scene_tuned(viewport, seed, &tuning)?;
        let frames = vec![Vec::new(); stage.layer_count()];
        Ok(Self { stage, frames })
    }

    /// Run one tick and re-encode every layer's frame.
    /// Returns false once the scene has been cancelled.
    pub fn tick(&mut self) -> bool {
        if !self.stage.tick() {
            return false;
        }
        for (i, frame) in self.frames.iter_mut().enumerate() {
            frame.clear();
            encode_commands(self.stage.commands(LayerId(i)), frame);
        }
        true
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.stage.pointer_moved(x, y);
    }

    pub fn pointer_emphasis(&mut self, on: bool) {
        self.stage.pointer_emphasis(on);
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        self.stage.resize(Viewport::new(width, height)?);
        Ok(())
    }

    pub fn cancel(&self) {
        self.stage.cancel_handle().cancel();
    }

    pub fn layer_count(&self) -> usize {
        self.stage.layer_count()
    }

    // ---- Pointer accessors for Float32Array reads ----

    pub fn frame_ptr(&self, layer: usize) -> *const f32 {
        self.frames
            .get(layer)
            .map(|f| f.as_ptr())
            .unwrap_or(std::ptr::null())
    }

    pub fn frame_len(&self, layer: usize) -> usize {
        self.frames.get(layer).map(|f| f.len()).unwrap_or(0)
    }
}
