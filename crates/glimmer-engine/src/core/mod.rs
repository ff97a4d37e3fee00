pub mod rng;
pub mod ticker;
pub mod viewport;
