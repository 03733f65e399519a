pub mod ambient;
pub mod reveal;
pub mod tween;
