pub mod star_mesh;
pub mod wire_mesh;
