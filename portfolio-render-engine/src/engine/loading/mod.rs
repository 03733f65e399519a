pub mod gate;
pub mod manifest;
pub mod progress;
