use glam::Vec2;

use crate::core::viewport::Viewport;
use crate::render::surface::DrawSurface;

/// Read-only per-tick facts shared with every animator.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Current drawable size.
    pub viewport: Viewport,
    /// Latest pointer sample, if any movement has arrived yet.
    pub pointer: Option<Vec2>,
    /// Whether the pointer is hovering an interactive element.
    pub emphasis: bool,
    /// Ticks completed since the stage started, this one included.
    pub ticks: u64,
}

/// One independent continuously-animated layer.
///
/// The stage calls `step` then `render` once per display refresh, forever,
/// until cancelled. Each call is one discrete tick with no assumed wall-clock
/// spacing. Animators own their surface exclusively and never read each
/// other's state, so invocation order between them is unobservable.
pub trait Animator {
    /// Advance simulation state by one tick.
    fn step(&mut self, ctx: &TickContext);

    /// Redraw this animator's own surface from current state.
    fn render(&mut self, surface: &mut dyn DrawSurface);

    /// Viewport change notification. Default: ignore.
    fn resize(&mut self, _viewport: Viewport) {}
}
