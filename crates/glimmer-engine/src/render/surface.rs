use glam::Vec2;

use crate::render::color::Color;

/// Minimal 2D drawing contract the animators render against.
///
/// Each animator owns its surface exclusively; `clear` erases that surface
/// only, never the whole screen. Hosts replay recorded commands on a real
/// canvas; tests inspect them directly.
pub trait DrawSurface {
    /// Erase this surface's region.
    fn clear(&mut self);

    /// Draw a filled circle. `color.a` is the fill alpha.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw a stroked line segment. `color.a` is the stroke alpha.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
}

/// Retained command list implementing [`DrawSurface`].
///
/// `clear()` drops the previous frame's commands and records the clear, so a
/// replaying host erases its region before drawing the new frame.
#[derive(Debug, Default)]
pub struct PrimitiveBuffer {
    commands: Vec<DrawCommand>,
}

impl PrimitiveBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for PrimitiveBuffer {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }
}
