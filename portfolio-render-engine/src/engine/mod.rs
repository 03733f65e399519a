pub mod animation;
pub mod core;
pub mod loading;
pub mod mesh;
pub mod scene;
