//! Backdrop motion laws.
//!
//! Every transform here is recomputed each frame from elapsed time and the
//! normalized pointer; nothing integrates. A paused frame or a teleporting
//! pointer can never corrupt the scene because there is no carried state.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use constants::motion::{
    GROUP_PITCH_AMP, GROUP_PITCH_FREQ, GROUP_PITCH_POINTER, GROUP_YAW_POINTER, GROUP_YAW_RATE,
};

use crate::engine::mesh::wire_mesh::edge_mesh;
use crate::interaction::pointer::PointerState;

/// One rotation axis: a linear term, a wave term and a pointer term.
/// `angle(t, p) = rate·t + wave_amp·sin(t·wave_freq + wave_phase) + gain·p`.
#[derive(Debug, Clone, Copy)]
pub struct AxisLaw {
    pub rate: f32,
    pub wave_amp: f32,
    pub wave_freq: f32,
    pub wave_phase: f32,
    pub pointer_gain: f32,
}

impl AxisLaw {
    pub const STILL: AxisLaw =
        AxisLaw { rate: 0.0, wave_amp: 0.0, wave_freq: 0.0, wave_phase: 0.0, pointer_gain: 0.0 };

    pub fn angle(&self, t: f32, pointer: f32) -> f32 {
        self.rate * t
            + self.wave_amp * (t * self.wave_freq + self.wave_phase).sin()
            + self.pointer_gain * pointer
    }
}

/// Whole-body rotation of a field, the starfield or the shape group.
/// Pitch and roll read the pointer's y, yaw reads its x.
#[derive(Component)]
pub struct FieldSway {
    pub pitch: AxisLaw,
    pub yaw: AxisLaw,
    pub roll: AxisLaw,
}

impl FieldSway {
    /// The wireframe group's sway from the tuning constants.
    pub fn group() -> Self {
        Self {
            pitch: AxisLaw {
                rate: 0.0,
                wave_amp: GROUP_PITCH_AMP,
                wave_freq: GROUP_PITCH_FREQ,
                wave_phase: 0.0,
                pointer_gain: GROUP_PITCH_POINTER,
            },
            yaw: AxisLaw {
                rate: GROUP_YAW_RATE,
                wave_amp: 0.0,
                wave_freq: 0.0,
                wave_phase: 0.0,
                pointer_gain: GROUP_YAW_POINTER,
            },
            roll: AxisLaw::STILL,
        }
    }
}

pub fn sway_fields(
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut fields: Query<(&FieldSway, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    let n = pointer.normalized;
    for (sway, mut transform) in &mut fields {
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            sway.pitch.angle(t, n.y),
            sway.yaw.angle(t, n.x),
            sway.roll.angle(t, n.y),
        );
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ScaleLaw {
    Steady,
    /// `base + amp·sin(t·freq + phase)` on all axes.
    Pulse { base: f32, amp: f32, freq: f32, phase: f32 },
    /// Swells toward `1 + gain` as the pointer nears the viewport centre.
    Proximity { gain: f32 },
}

impl ScaleLaw {
    pub fn factor(&self, t: f32, pointer: Vec2) -> f32 {
        match *self {
            ScaleLaw::Steady => 1.0,
            ScaleLaw::Pulse { base, amp, freq, phase } => base + amp * (t * freq + phase).sin(),
            ScaleLaw::Proximity { gain } => 1.0 + (1.0 - pointer.length().min(1.0)) * gain,
        }
    }
}

/// A floating wireframe shape: vertical bob, pointer follow, constant tumble
/// and a scale law, all around a fixed base position.
#[derive(Component)]
pub struct Drift {
    pub base: Vec3,
    pub bob_amp: f32,
    pub bob_freq: f32,
    pub bob_phase: f32,
    /// Pointer-follow gains for (x ← pointer x, y ← pointer y).
    pub follow: Vec2,
    /// Tumble rates per axis, radians per second.
    pub rot_rate: Vec3,
    pub scale: ScaleLaw,
}

pub fn drive_shapes(
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut shapes: Query<(&Drift, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    let n = pointer.normalized;
    for (drift, mut transform) in &mut shapes {
        let bob = drift.bob_amp * (t * drift.bob_freq + drift.bob_phase).sin();
        transform.translation =
            drift.base + Vec3::new(drift.follow.x * n.x, bob + drift.follow.y * n.y, 0.0);
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            drift.rot_rate.x * t,
            drift.rot_rate.y * t,
            drift.rot_rate.z * t,
        );
        transform.scale = Vec3::splat(drift.scale.factor(t, n));
    }
}

/// Sinusoidal opacity for a whole material.
#[derive(Component)]
pub struct PulseOpacity {
    pub base: f32,
    pub amp: f32,
    pub freq: f32,
}

pub fn pulse_materials(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pulses: Query<(&PulseOpacity, &MeshMaterial3d<StandardMaterial>)>,
) {
    let t = time.elapsed_secs();
    for (pulse, handle) in &pulses {
        if let Some(material) = materials.get_mut(&handle.0) {
            let alpha = pulse.base + pulse.amp * (t * pulse.freq).sin();
            material.base_color = material.base_color.with_alpha(alpha.clamp(0.0, 1.0));
        }
    }
}

/// Unlit alpha-blended material shared by every backdrop mesh. Vertex
/// colours, where present, multiply into the base colour.
pub fn unlit_material(
    materials: &mut Assets<StandardMaterial>,
    color: Color,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    })
}

/// Spawn the wireframe primitives as children of the sway group: a bobbing
/// sphere, box, torus and icosahedron, two pointer-chasing rings and two
/// small static spheres.
pub fn spawn_wireframes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    group: Entity,
) {
    let mut children = Vec::new();
    let mut wire_shape = |mesh: Mesh, alpha: f32, drift: Drift| -> Option<Entity> {
        let wire = edge_mesh(&mesh)?;
        Some(
            commands
                .spawn((
                    Mesh3d(meshes.add(wire)),
                    MeshMaterial3d(unlit_material(materials, Color::srgba(1.0, 1.0, 1.0, alpha))),
                    Transform::from_translation(drift.base),
                    NoFrustumCulling,
                    drift,
                ))
                .id(),
        )
    };

    children.extend(wire_shape(
        Sphere::new(1.5).mesh().uv(16, 16),
        0.3,
        Drift {
            base: Vec3::new(-4.0, 2.0, -5.0),
            bob_amp: 2.0,
            bob_freq: 0.5,
            bob_phase: 0.0,
            follow: Vec2::new(0.0, 0.5),
            rot_rate: Vec3::new(0.2, 0.3, 0.0),
            scale: ScaleLaw::Proximity { gain: 0.3 },
        },
    ));
    children.extend(wire_shape(
        Mesh::from(Cuboid::new(2.0, 2.0, 2.0)),
        0.25,
        Drift {
            base: Vec3::new(4.0, -1.0, -4.0),
            bob_amp: 1.5,
            bob_freq: 0.7,
            bob_phase: FRAC_PI_2,
            follow: Vec2::new(0.0, -0.4),
            rot_rate: Vec3::new(0.4, 0.2, 0.0),
            scale: ScaleLaw::Steady,
        },
    ));
    children.extend(wire_shape(
        Mesh::from(Torus { minor_radius: 0.4, major_radius: 1.2 }),
        0.25,
        Drift {
            base: Vec3::new(-3.0, -2.0, -6.0),
            bob_amp: 1.0,
            bob_freq: 0.3,
            bob_phase: 0.0,
            follow: Vec2::new(0.0, 0.3),
            rot_rate: Vec3::new(0.3, 0.0, 0.2),
            scale: ScaleLaw::Steady,
        },
    ));
    // Low-subdivision icosphere reads as an icosahedron; the UV sphere is
    // only a fallback if subdivision ever fails.
    let icosahedron = Sphere::new(1.2)
        .mesh()
        .ico(1)
        .unwrap_or_else(|_| Sphere::new(1.2).mesh().uv(8, 8));
    children.extend(wire_shape(
        icosahedron,
        0.3,
        Drift {
            base: Vec3::new(3.5, 2.5, -7.0),
            bob_amp: 2.5,
            bob_freq: 0.4,
            bob_phase: FRAC_PI_2,
            follow: Vec2::new(0.0, 0.6),
            rot_rate: Vec3::new(0.2, 0.4, 0.0),
            scale: ScaleLaw::Steady,
        },
    ));
    children.extend(wire_shape(
        Mesh::from(Annulus::new(1.4, 1.5)),
        0.2,
        Drift {
            base: Vec3::new(0.0, 0.0, -3.0),
            bob_amp: 0.0,
            bob_freq: 0.0,
            bob_phase: 0.0,
            follow: Vec2::new(2.0, 2.0),
            rot_rate: Vec3::new(0.5, 0.2, 0.0),
            scale: ScaleLaw::Pulse { base: 1.0, amp: 0.2, freq: 2.0, phase: 0.0 },
        },
    ));
    children.extend(wire_shape(
        Mesh::from(Annulus::new(0.9, 1.0)),
        0.2,
        Drift {
            base: Vec3::new(0.0, 0.0, -3.5),
            bob_amp: 0.0,
            bob_freq: 0.0,
            bob_phase: 0.0,
            follow: Vec2::new(-1.5, -1.5),
            rot_rate: Vec3::new(-0.3, 0.4, 0.0),
            scale: ScaleLaw::Pulse { base: 0.8, amp: 0.3, freq: 1.5, phase: FRAC_PI_2 },
        },
    ));

    for (radius, position) in [(0.3, Vec3::new(-6.0, 4.0, -8.0)), (0.2, Vec3::new(6.0, -3.0, -9.0))]
    {
        if let Some(wire) = edge_mesh(&Sphere::new(radius).mesh().uv(12, 12)) {
            children.push(
                commands
                    .spawn((
                        Mesh3d(meshes.add(wire)),
                        MeshMaterial3d(unlit_material(
                            materials,
                            Color::srgba(1.0, 1.0, 1.0, 0.2),
                        )),
                        Transform::from_translation(position),
                        NoFrustumCulling,
                    ))
                    .id(),
            );
        }
    }

    commands.entity(group).add_children(&children);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_law_combines_rate_wave_and_pointer() {
        let law = AxisLaw {
            rate: 0.02,
            wave_amp: 0.1,
            wave_freq: 0.1,
            wave_phase: 0.0,
            pointer_gain: 0.05,
        };
        let angle = law.angle(10.0, 0.5);
        let expected = 0.2 + 0.1 * 1.0_f32.sin() + 0.025;
        assert!((angle - expected).abs() < 1e-6);
        assert_eq!(AxisLaw::STILL.angle(100.0, 1.0), 0.0);
    }

    #[test]
    fn proximity_swell_peaks_at_viewport_centre() {
        let law = ScaleLaw::Proximity { gain: 0.3 };
        assert!((law.factor(0.0, Vec2::ZERO) - 1.3).abs() < 1e-6);
        assert!((law.factor(0.0, Vec2::new(1.0, 0.0)) - 1.0).abs() < 1e-6);
        // Beyond the unit circle the swell stays clamped off, never negative.
        assert!((law.factor(0.0, Vec2::new(3.0, 3.0)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pulse_scale_oscillates_around_its_base() {
        let law = ScaleLaw::Pulse { base: 1.0, amp: 0.2, freq: 2.0, phase: 0.0 };
        assert!((law.factor(0.0, Vec2::ZERO) - 1.0).abs() < 1e-6);
        let quarter = std::f32::consts::FRAC_PI_2 / 2.0;
        assert!((law.factor(quarter, Vec2::ZERO) - 1.2).abs() < 1e-4);
    }
}
