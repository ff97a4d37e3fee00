//! # Glimmer Engine
//!
//! Headless animation engine for a portfolio hero scene: a drifting particle
//! field with proximity links, a rotating point-cloud globe, and
//! exponential-decay cursor markers. Everything renders against the abstract
//! [`DrawSurface`] contract, so the engine runs identically under a browser
//! canvas, a native window, or a test harness.

pub mod api;
pub mod bridge;
pub mod core;
pub mod effects;
pub mod error;
pub mod input;
pub mod render;

// Re-export key types at crate root for convenience
pub use api::animator::{Animator, TickContext};
pub use api::stage::{LayerId, SceneTuning, Stage};
pub use bridge::protocol::{encode_commands, CIRCLE_FLOATS, CLEAR_FLOATS, LINE_FLOATS};
pub use core::rng::Rng;
pub use core::ticker::{CancelHandle, Ticker};
pub use core::viewport::Viewport;
pub use effects::cursor::{CursorGlide, CursorStyle};
pub use effects::globe::{PointSphere, PointSphereConfig, SpherePoint};
pub use effects::particles::{Mote, ParticleField, ParticleFieldConfig};
pub use error::EngineError;
pub use input::pointer::PointerState;
pub use render::color::Color;
pub use render::surface::{DrawCommand, DrawSurface, PrimitiveBuffer};
