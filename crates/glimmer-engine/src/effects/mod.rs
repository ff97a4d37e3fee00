pub mod cursor;
pub mod globe;
pub mod particles;
