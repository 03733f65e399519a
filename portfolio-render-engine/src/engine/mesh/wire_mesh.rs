//! Wireframe extraction.
//!
//! The backdrop shapes render as edge lines rather than shaded surfaces.
//! Bevy's primitive meshes arrive as triangle lists, so each one is rebuilt
//! as the line list of its unique edges.

use std::collections::HashSet;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Rebuild a triangle mesh as a line list over its deduplicated edges.
///
/// Returns `None` when the source has no position attribute or no index
/// buffer to walk.
pub fn edge_mesh(source: &Mesh) -> Option<Mesh> {
    let positions = source.attribute(Mesh::ATTRIBUTE_POSITION)?.as_float3()?.to_vec();
    let triangles: Vec<u32> = source.indices()?.iter().map(|index| index as u32).collect();

    let mut edges: HashSet<(u32, u32)> = HashSet::new();
    for triangle in triangles.chunks_exact(3) {
        let corners = [
            (triangle[0], triangle[1]),
            (triangle[1], triangle[2]),
            (triangle[2], triangle[0]),
        ];
        for (a, b) in corners {
            edges.insert(if a < b { (a, b) } else { (b, a) });
        }
    }

    let mut indices = Vec::with_capacity(edges.len() * 2);
    for (a, b) in edges {
        indices.extend_from_slice(&[a, b]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(indices));
    Some(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_edges_are_deduplicated_per_face() {
        let wire = edge_mesh(&Mesh::from(Cuboid::new(1.0, 1.0, 1.0))).unwrap();
        // 24 vertices (4 per face), each face's quad yields 4 sides plus one
        // shared diagonal: 6 faces x 5 edges.
        let Some(Indices::U32(indices)) = wire.indices() else {
            panic!("expected u32 line indices");
        };
        assert_eq!(indices.len(), 30 * 2);
        assert_eq!(wire.count_vertices(), 24);
    }

    #[test]
    fn shared_edges_collapse_to_one_segment() {
        let mut quad =
            Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::RENDER_WORLD);
        quad.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
        );
        quad.insert_indices(Indices::U32(vec![0, 1, 2, 0, 2, 3]));

        let wire = edge_mesh(&quad).unwrap();
        let Some(Indices::U32(indices)) = wire.indices() else {
            panic!("expected u32 line indices");
        };
        // Two triangles share the 0-2 diagonal: 5 edges, not 6.
        assert_eq!(indices.len(), 5 * 2);
    }

    #[test]
    fn unindexed_mesh_yields_nothing() {
        let mut bare =
            Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::RENDER_WORLD);
        bare.insert_attribute(Mesh::ATTRIBUTE_POSITION, vec![[0.0, 0.0, 0.0]]);
        assert!(edge_mesh(&bare).is_none());
    }
}
