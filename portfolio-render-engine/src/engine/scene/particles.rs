//! The two drifting particle fields and the coloured ambient starfield.
//!
//! Seeded generators keep the scatter identical across runs and platforms;
//! wasm builds need no entropy source.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use constants::motion::{STARFIELD_OPACITY, STARFIELD_POINTER_GAIN, STARFIELD_RATES};

use crate::engine::loading::manifest::SceneSettings;
use crate::engine::mesh::star_mesh::{particle_mesh, star_mesh};
use crate::engine::scene::spatial::{unlit_material, AxisLaw, FieldSway, PulseOpacity};

pub fn spawn_particle_fields(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &SceneSettings,
    root: Entity,
) {
    let mut rng_one = SmallRng::seed_from_u64(1);
    let field_one = commands
        .spawn((
            Mesh3d(meshes.add(particle_mesh(
                settings.field_one_count,
                settings.field_one_spread,
                settings.field_one_size / 2.0,
                &mut rng_one,
            ))),
            MeshMaterial3d(unlit_material(
                materials,
                Color::srgba(1.0, 1.0, 1.0, settings.field_one_opacity),
            )),
            Transform::IDENTITY,
            NoFrustumCulling,
            FieldSway {
                pitch: AxisLaw {
                    rate: 0.0,
                    wave_amp: 0.1,
                    wave_freq: 0.1,
                    wave_phase: 0.0,
                    pointer_gain: 0.03,
                },
                yaw: AxisLaw {
                    rate: 0.02,
                    wave_amp: 0.0,
                    wave_freq: 0.0,
                    wave_phase: 0.0,
                    pointer_gain: 0.05,
                },
                roll: AxisLaw::STILL,
            },
        ))
        .id();

    let mut rng_two = SmallRng::seed_from_u64(2);
    let field_two = commands
        .spawn((
            Mesh3d(meshes.add(particle_mesh(
                settings.field_two_count,
                settings.field_two_spread,
                settings.field_two_size / 2.0,
                &mut rng_two,
            ))),
            MeshMaterial3d(unlit_material(
                materials,
                Color::srgba(1.0, 1.0, 1.0, settings.field_two_opacity),
            )),
            Transform::IDENTITY,
            NoFrustumCulling,
            FieldSway {
                pitch: AxisLaw::STILL,
                yaw: AxisLaw {
                    rate: -0.015,
                    wave_amp: 0.0,
                    wave_freq: 0.0,
                    wave_phase: 0.0,
                    pointer_gain: -0.03,
                },
                // Cosine roll, expressed as a quarter-turn phase lead.
                roll: AxisLaw {
                    rate: 0.0,
                    wave_amp: 0.05,
                    wave_freq: 0.08,
                    wave_phase: FRAC_PI_2,
                    pointer_gain: 0.02,
                },
            },
        ))
        .id();

    let mut rng_stars = SmallRng::seed_from_u64(3);
    let (pulse_base, pulse_amp, pulse_freq) = STARFIELD_OPACITY;
    let starfield = commands
        .spawn((
            Mesh3d(meshes.add(star_mesh(
                settings.star_count,
                settings.star_spread,
                &mut rng_stars,
            ))),
            MeshMaterial3d(unlit_material(
                materials,
                Color::srgba(1.0, 1.0, 1.0, pulse_base),
            )),
            Transform::IDENTITY,
            NoFrustumCulling,
            FieldSway {
                pitch: AxisLaw {
                    rate: STARFIELD_RATES[0],
                    wave_amp: 0.0,
                    wave_freq: 0.0,
                    wave_phase: 0.0,
                    pointer_gain: STARFIELD_POINTER_GAIN,
                },
                yaw: AxisLaw {
                    rate: STARFIELD_RATES[1],
                    wave_amp: 0.0,
                    wave_freq: 0.0,
                    wave_phase: 0.0,
                    pointer_gain: STARFIELD_POINTER_GAIN,
                },
                roll: AxisLaw {
                    rate: STARFIELD_RATES[2],
                    wave_amp: 0.0,
                    wave_freq: 0.0,
                    wave_phase: 0.0,
                    pointer_gain: 0.0,
                },
            },
            PulseOpacity { base: pulse_base, amp: pulse_amp, freq: pulse_freq },
        ))
        .id();

    commands.entity(root).add_children(&[field_one, field_two, starfield]);
}
