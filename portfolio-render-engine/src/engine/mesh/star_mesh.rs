//! Particle field meshes.
//!
//! Fields and the starfield are single meshes of small randomly oriented
//! quads, one per particle. Vertex colours carry the per-star palette so a
//! whole field draws with one unlit material.

use std::f32::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use rand::rngs::SmallRng;
use rand::Rng;

use constants::palette::{starfield_color, STAR_SIZE_MIN, STAR_SIZE_SPAN};

/// Uniform white field: every particle the same size and colour, scattered
/// over a centred box.
pub fn particle_mesh(count: usize, spread: [f32; 3], half_size: f32, rng: &mut SmallRng) -> Mesh {
    let mut positions = Vec::with_capacity(count * 4);
    let mut colors = Vec::with_capacity(count * 4);
    let mut indices = Vec::with_capacity(count * 6);

    for _ in 0..count {
        let center = scatter(rng, spread);
        let orientation = random_orientation(rng);
        push_star(
            &mut positions,
            &mut colors,
            &mut indices,
            center,
            half_size,
            orientation,
            [1.0, 1.0, 1.0, 1.0],
        );
    }

    assemble(positions, colors, indices)
}

/// Starfield: per-star hue drawn from the palette bands, per-star size.
pub fn star_mesh(count: usize, spread: [f32; 3], rng: &mut SmallRng) -> Mesh {
    let mut positions = Vec::with_capacity(count * 4);
    let mut colors = Vec::with_capacity(count * 4);
    let mut indices = Vec::with_capacity(count * 6);

    for _ in 0..count {
        let center = scatter(rng, spread);
        let orientation = random_orientation(rng);

        let band_draw = rng.gen_range(0.0..1.0);
        let shade_draw = rng.gen_range(0.0..1.0);
        let (hue, saturation, lightness) = starfield_color(band_draw, shade_draw);
        let srgba = Color::hsl(hue, saturation, lightness).to_srgba();

        let half_size = (rng.gen_range(0.0..1.0) * STAR_SIZE_SPAN + STAR_SIZE_MIN) / 2.0;
        push_star(
            &mut positions,
            &mut colors,
            &mut indices,
            center,
            half_size,
            orientation,
            [srgba.red, srgba.green, srgba.blue, 1.0],
        );
    }

    assemble(positions, colors, indices)
}

fn scatter(rng: &mut SmallRng, spread: [f32; 3]) -> Vec3 {
    Vec3::new(
        rng.gen_range(-spread[0] / 2.0..=spread[0] / 2.0),
        rng.gen_range(-spread[1] / 2.0..=spread[1] / 2.0),
        rng.gen_range(-spread[2] / 2.0..=spread[2] / 2.0),
    )
}

fn random_orientation(rng: &mut SmallRng) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
        rng.gen_range(0.0..TAU),
    )
}

fn push_star(
    positions: &mut Vec<[f32; 3]>,
    colors: &mut Vec<[f32; 4]>,
    indices: &mut Vec<u32>,
    center: Vec3,
    half_size: f32,
    orientation: Quat,
    color: [f32; 4],
) {
    let base = positions.len() as u32;
    let corners = [
        Vec3::new(-half_size, -half_size, 0.0),
        Vec3::new(half_size, -half_size, 0.0),
        Vec3::new(half_size, half_size, 0.0),
        Vec3::new(-half_size, half_size, 0.0),
    ];
    for corner in corners {
        let vertex = center + orientation * corner;
        positions.push([vertex.x, vertex.y, vertex.z]);
        colors.push(color);
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
}

fn assemble(positions: Vec<[f32; 3]>, colors: Vec<[f32; 4]>, indices: Vec<u32>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn field_carries_one_quad_per_particle() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mesh = particle_mesh(120, [25.0, 25.0, 15.0], 0.0125, &mut rng);
        assert_eq!(mesh.count_vertices(), 120 * 4);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices.len(), 120 * 6);
    }

    #[test]
    fn particles_stay_inside_the_spread_box() {
        let mut rng = SmallRng::seed_from_u64(7);
        let spread = [10.0, 6.0, 4.0];
        let mesh = particle_mesh(200, spread, 0.0, &mut rng);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|values| values.as_float3())
            .unwrap();
        for position in positions {
            assert!(position[0].abs() <= spread[0] / 2.0);
            assert!(position[1].abs() <= spread[1] / 2.0);
            assert!(position[2].abs() <= spread[2] / 2.0);
        }
    }

    #[test]
    fn starfield_draws_more_than_one_colour() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mesh = star_mesh(64, [30.0, 30.0, 30.0], &mut rng);
        let colors = match mesh.attribute(Mesh::ATTRIBUTE_COLOR) {
            Some(bevy::render::mesh::VertexAttributeValues::Float32x4(values)) => values,
            _ => panic!("expected float32x4 colours"),
        };
        assert_eq!(colors.len(), 64 * 4);
        let first = colors[0];
        assert!(colors.iter().any(|color| *color != first));
    }
}
