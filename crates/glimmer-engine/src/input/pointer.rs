use glam::Vec2;

/// Latest-value pointer state.
///
/// Movement events overwrite the previous sample; animators poll once per
/// tick, so intermediate samples between ticks are dropped deliberately
/// (last value wins, no event queue).
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    latest: Option<Vec2>,
    emphasis: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer movement.
    pub fn moved(&mut self, x: f32, y: f32) {
        self.latest = Some(Vec2::new(x, y));
    }

    /// Toggle hover emphasis (the pointer is over an interactive element).
    pub fn set_emphasis(&mut self, on: bool) {
        self.emphasis = on;
    }

    /// The most recent sample, if any movement has arrived yet.
    pub fn sample(&self) -> Option<Vec2> {
        self.latest
    }

    pub fn emphasis(&self) -> bool {
        self.emphasis
    }
}
