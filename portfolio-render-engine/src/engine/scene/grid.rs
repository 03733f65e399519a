//! Scrolling ground grids.
//!
//! Two flat line grids tile along +z and wrap every `GRID_SPAN` units, so
//! the floor appears to stream toward the camera forever. Their position is
//! a pure function of elapsed time; opacity breathes on a sine and reacts
//! to pointer excursion.

use std::f32::consts::FRAC_PI_2;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::view::NoFrustumCulling;

use constants::motion::{GRID_DROP, GRID_SCROLL_SPEED, GRID_SPAN};

use crate::engine::loading::manifest::SceneSettings;
use crate::engine::scene::spatial::unlit_material;
use crate::interaction::pointer::PointerState;

const GRID_SHADE: f32 = 0.2;
const GRID_CENTER_SHADE: f32 = 0.267;

/// Opacity law `base + amp·sin(t·freq + phase) + gain_mx·|mx| + gain_my·|my|`.
#[derive(Debug, Clone, Copy)]
pub struct OpacityLaw {
    pub base: f32,
    pub amp: f32,
    pub freq: f32,
    pub phase: f32,
    pub gain_mx: f32,
    pub gain_my: f32,
}

#[derive(Component)]
pub struct ScrollingGrid {
    pub base: Vec3,
    pub speed: f32,
    pub span: f32,
    /// Lateral pointer sway gain on x.
    pub sway: f32,
    pub fade: OpacityLaw,
}

/// Flat XZ line grid with the two centre lines slightly accented through
/// vertex colours.
fn grid_mesh(extent: f32, lines: usize) -> Mesh {
    let mut positions = Vec::new();
    let mut colors = Vec::new();
    let mut indices = Vec::new();
    let half = extent / 2.0;
    let step = extent / lines.max(1) as f32;

    let mut push_line = |from: [f32; 3], to: [f32; 3], shade: f32| {
        let base = positions.len() as u32;
        positions.push(from);
        positions.push(to);
        let color = [shade, shade, shade, 1.0];
        colors.push(color);
        colors.push(color);
        indices.extend_from_slice(&[base, base + 1]);
    };

    for i in 0..=lines {
        let offset = -half + i as f32 * step;
        let shade = if i == lines / 2 { GRID_CENTER_SHADE } else { GRID_SHADE };
        push_line([offset, 0.0, -half], [offset, 0.0, half], shade);
        push_line([-half, 0.0, offset], [half, 0.0, offset], shade);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

pub fn spawn_ground_grids(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &SceneSettings,
    root: Entity,
) {
    let mesh = meshes.add(grid_mesh(settings.grid_extent, settings.grid_lines));

    let grids = [
        ScrollingGrid {
            base: Vec3::new(0.0, GRID_DROP, 0.0),
            speed: GRID_SCROLL_SPEED,
            span: GRID_SPAN,
            sway: 2.0,
            fade: OpacityLaw {
                base: 0.2,
                amp: 0.1,
                freq: 0.5,
                phase: 0.0,
                gain_mx: 0.1,
                gain_my: 0.0,
            },
        },
        // Second tile one span behind, so the pair hands off seamlessly.
        ScrollingGrid {
            base: Vec3::new(0.0, GRID_DROP, -GRID_SPAN),
            speed: GRID_SCROLL_SPEED,
            span: GRID_SPAN,
            sway: -1.5,
            fade: OpacityLaw {
                base: 0.15,
                amp: 0.05,
                freq: 0.3,
                phase: FRAC_PI_2,
                gain_mx: 0.0,
                gain_my: 0.08,
            },
        },
    ];

    let mut children = Vec::new();
    for grid in grids {
        let material = unlit_material(materials, Color::srgba(1.0, 1.0, 1.0, grid.fade.base));
        children.push(
            commands
                .spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material),
                    Transform::from_translation(grid.base),
                    NoFrustumCulling,
                    grid,
                ))
                .id(),
        );
    }
    commands.entity(root).add_children(&children);
}

pub fn scroll_grids(
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut grids: Query<(&ScrollingGrid, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
) {
    let t = time.elapsed_secs();
    let n = pointer.normalized;
    for (grid, mut transform, handle) in &mut grids {
        let advance = (t * grid.speed).rem_euclid(grid.span);
        transform.translation = grid.base + Vec3::new(n.x * grid.sway, 0.0, advance);
        if let Some(material) = materials.get_mut(&handle.0) {
            let alpha = grid.fade.base
                + grid.fade.amp * (t * grid.fade.freq + grid.fade.phase).sin()
                + grid.fade.gain_mx * n.x.abs()
                + grid.fade.gain_my * n.y.abs();
            material.base_color = material.base_color.with_alpha(alpha.clamp(0.0, 1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_mesh_draws_one_segment_per_line() {
        let mesh = grid_mesh(8.0, 4);
        // 5 lines per direction, 2 vertices each.
        assert_eq!(mesh.count_vertices(), 5 * 2 * 2);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices.len(), 5 * 2 * 2);
    }

    #[test]
    fn wrap_advance_never_leaves_the_span() {
        for step in 0..2000 {
            let t = step as f32 * 0.37;
            let advance = (t * GRID_SCROLL_SPEED).rem_euclid(GRID_SPAN);
            assert!((0.0..GRID_SPAN).contains(&advance));
        }
    }

    #[test]
    fn tiles_stay_one_span_apart_across_the_wrap() {
        // Same clock, bases one span apart: the visible pair always covers
        // a contiguous two-span window.
        let t = 15.9;
        let advance = (t * GRID_SCROLL_SPEED).rem_euclid(GRID_SPAN);
        let first = 0.0 + advance;
        let second = -GRID_SPAN + advance;
        assert!((first - second - GRID_SPAN).abs() < 1e-6);
    }
}
