//! Flat f32 wire encoding of recorded draw commands.
//!
//! The host renderer reads a frame as a `Float32Array` and replays it
//! sequentially: read one tag, then consume that record's remaining floats.
//!
//! ```text
//! clear:  [TAG_CLEAR]
//! circle: [TAG_CIRCLE, x, y, radius, r, g, b, a]
//! line:   [TAG_LINE, x1, y1, x2, y2, width, r, g, b, a]
//! ```

use bytemuck::{Pod, Zeroable};

use crate::render::surface::DrawCommand;

pub const TAG_CLEAR: f32 = 0.0;
pub const TAG_CIRCLE: f32 = 1.0;
pub const TAG_LINE: f32 = 2.0;

/// Floats per clear record (wire format — never changes).
pub const CLEAR_FLOATS: usize = 1;

/// Floats per circle record: tag, x, y, radius, rgba.
pub const CIRCLE_FLOATS: usize = 8;

/// Floats per line record: tag, x1, y1, x2, y2, width, rgba.
pub const LINE_FLOATS: usize = 10;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct CircleRecord {
    tag: f32,
    x: f32,
    y: f32,
    radius: f32,
    color: [f32; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct LineRecord {
    tag: f32,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    width: f32,
    color: [f32; 4],
}

/// Append the wire form of `commands` to `out`, preserving draw order.
/// Returns the number of floats written.
pub fn encode_commands(commands: &[DrawCommand], out: &mut Vec<f32>) -> usize {
    let start = out.len();
    for command in commands {
        match *command {
            DrawCommand::Clear => out.push(TAG_CLEAR),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let record = CircleRecord {
                    tag: TAG_CIRCLE,
                    x: center.x,
                    y: center.y,
                    radius,
                    color: color.to_array(),
                };
                out.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(&record)));
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                let record = LineRecord {
                    tag: TAG_LINE,
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                    width,
                    color: color.to_array(),
                };
                out.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(&record)));
            }
        }
    }
    out.len() - start
}
