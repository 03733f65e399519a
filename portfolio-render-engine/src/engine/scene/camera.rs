use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use constants::motion::{CAMERA_FOV_DEG, CAMERA_POSITION, FOG_END, FOG_START};

/// Fixed perspective camera looking into the backdrop. Bevy re-derives the
/// projection aspect from the window on every resize, so output never
/// stretches. Linear fog sinks the far grid and field edges into the black
/// clear colour instead of cutting them off.
pub fn spawn_backdrop_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            ..default()
        }),
        DistanceFog {
            color: Color::BLACK,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        Transform::from_translation(Vec3::from_array(CAMERA_POSITION))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
