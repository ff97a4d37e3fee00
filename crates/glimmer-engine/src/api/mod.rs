pub mod animator;
pub mod stage;
