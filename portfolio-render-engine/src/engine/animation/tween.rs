//! Timeline playback over UI nodes.
//!
//! A `Timeline` is a bag of from/to tweens with start offsets on a shared
//! clock. Playback writes sampled poses into `RevealPose` components; a
//! single apply pass folds reveal, ambient and parallax poses into the node
//! layout inset and transform, so the layers never fight over `Node` fields.

use bevy::math::curve::{Curve, EaseFunction, EasingCurve};
use bevy::prelude::*;

use crate::engine::animation::ambient::AmbientState;
use crate::interaction::parallax::ParallaxState;

/// Sample an easing function at `t`, clamped to [0, 1].
pub fn eased(function: EaseFunction, t: f32) -> f32 {
    EasingCurve::new(0.0, 1.0, function).sample_clamped(t)
}

/// Resolved animation state of one UI element, relative to its resting
/// layout: an inset offset in logical pixels, a scale and an opacity factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiPose {
    pub offset: Vec2,
    pub scale: Vec2,
    pub alpha: f32,
}

impl Default for UiPose {
    fn default() -> Self {
        Self { offset: Vec2::ZERO, scale: Vec2::ONE, alpha: 1.0 }
    }
}

/// From/to pairs for the animatable channels. Unset channels hold the
/// resting value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Channels {
    pub offset: Option<(Vec2, Vec2)>,
    pub scale: Option<(Vec2, Vec2)>,
    pub alpha: Option<(f32, f32)>,
}

impl Channels {
    pub fn sample(&self, s: f32) -> UiPose {
        UiPose {
            offset: self.offset.map(|(from, to)| from.lerp(to, s)).unwrap_or(Vec2::ZERO),
            scale: self.scale.map(|(from, to)| from.lerp(to, s)).unwrap_or(Vec2::ONE),
            alpha: self.alpha.map(|(from, to)| from + (to - from) * s).unwrap_or(1.0),
        }
    }
}

/// One eased from/to animation of a single target entity.
#[derive(Debug, Clone)]
pub struct Tween {
    pub target: Entity,
    pub start: f32,
    pub duration: f32,
    pub ease: EaseFunction,
    pub channels: Channels,
}

impl Tween {
    /// Pose at the given timeline clock. Clamps outside [start, start+duration],
    /// so a paused timeline at zero keeps writing the from-pose.
    pub fn sample(&self, clock: f32) -> UiPose {
        let t = ((clock - self.start) / self.duration.max(1e-6)).clamp(0.0, 1.0);
        self.channels.sample(eased(self.ease, t))
    }
}

/// A playable set of tweens on a shared clock. Lives on the entity that owns
/// the animation (a section root, the nav bar) and removes itself once the
/// clock passes the last tween.
#[derive(Component, Debug, Clone)]
pub struct Timeline {
    pub clock: f32,
    pub playing: bool,
    pub tweens: Vec<Tween>,
    length: f32,
}

impl Timeline {
    pub fn new() -> Self {
        Self { clock: 0.0, playing: true, tweens: Vec::new(), length: 0.0 }
    }

    pub fn paused(mut self) -> Self {
        self.playing = false;
        self
    }

    pub fn add(&mut self, tween: Tween) {
        self.length = self.length.max(tween.start + tween.duration);
        self.tweens.push(tween);
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn finished(&self) -> bool {
        self.clock >= self.length
    }
}

/// Pose written by timeline playback. Targets spawn with the identity pose
/// and are driven hidden by their section's primed timeline before first
/// paint.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct RevealPose(pub UiPose);

/// Points a colored node at the reveal target whose opacity it inherits.
/// Reveal targets reference themselves.
#[derive(Component)]
pub struct FadeGroup(pub Entity);

/// Authored opacities of a node's paint channels. The fade pass rescales the
/// live colors from these, never from the current values.
#[derive(Component, Default)]
pub struct BaseAlpha {
    pub background: Option<f32>,
    pub border: Option<f32>,
    pub text: Option<f32>,
}

/// Advance every timeline and write sampled poses. Tweens whose target has
/// despawned are skipped; a finished timeline detaches itself and its final
/// poses stay put.
pub fn play_timelines(
    mut commands: Commands,
    time: Res<Time>,
    mut timelines: Query<(Entity, &mut Timeline)>,
    mut poses: Query<&mut RevealPose>,
) {
    for (entity, mut timeline) in &mut timelines {
        if timeline.playing {
            timeline.clock += time.delta_secs();
        }
        for tween in &timeline.tweens {
            if let Ok(mut pose) = poses.get_mut(tween.target) {
                pose.0 = tween.sample(timeline.clock);
            }
        }
        if timeline.playing && timeline.finished() {
            commands.entity(entity).remove::<Timeline>();
        }
    }
}

/// Fold the animation layers into layout. Reveal, ambient and parallax
/// offsets add; scale comes from the reveal pose; spin from the ambient
/// layer. Nodes are positioned relatively, so the inset shifts them without
/// disturbing the surrounding flow.
pub fn apply_poses(
    mut nodes: Query<
        (
            &mut Node,
            &mut Transform,
            Option<&RevealPose>,
            Option<&AmbientState>,
            Option<&ParallaxState>,
        ),
        Or<(With<RevealPose>, With<AmbientState>, With<ParallaxState>)>,
    >,
) {
    for (mut node, mut transform, reveal, ambient, parallax) in &mut nodes {
        let pose = reveal.map(|r| r.0).unwrap_or_default();
        let mut offset = pose.offset;
        let mut spin = 0.0;
        if let Some(ambient) = ambient {
            offset += ambient.offset;
            spin += ambient.spin;
        }
        if let Some(parallax) = parallax {
            offset += parallax.offset;
        }
        node.left = Val::Px(offset.x);
        node.top = Val::Px(offset.y);
        transform.scale = Vec3::new(pose.scale.x, pose.scale.y, 1.0);
        transform.rotation = Quat::from_rotation_z(spin.to_radians());
    }
}

/// Rescale paint alphas from the owning reveal target's pose.
pub fn propagate_fade(
    poses: Query<&RevealPose>,
    mut nodes: Query<(
        &FadeGroup,
        &BaseAlpha,
        Option<&mut BackgroundColor>,
        Option<&mut BorderColor>,
        Option<&mut TextColor>,
    )>,
) {
    for (group, base, background, border, text) in &mut nodes {
        let factor = poses.get(group.0).map(|pose| pose.0.alpha).unwrap_or(1.0);
        if let (Some(alpha), Some(mut color)) = (base.background, background) {
            color.0 = color.0.with_alpha(alpha * factor);
        }
        if let (Some(alpha), Some(mut color)) = (base.border, border) {
            color.0 = color.0.with_alpha(alpha * factor);
        }
        if let (Some(alpha), Some(mut color)) = (base.text, text) {
            color.0 = color.0.with_alpha(alpha * factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rise(target: Entity, from_y: f32, start: f32, duration: f32) -> Tween {
        Tween {
            target,
            start,
            duration,
            ease: EaseFunction::QuadraticOut,
            channels: Channels {
                offset: Some((Vec2::new(0.0, from_y), Vec2::ZERO)),
                scale: None,
                alpha: Some((0.0, 1.0)),
            },
        }
    }

    #[test]
    fn quadratic_in_out_midpoint_is_exact() {
        assert_eq!(eased(EaseFunction::QuadraticInOut, 0.5), 0.5);
        assert_eq!(eased(EaseFunction::QuadraticInOut, 0.0), 0.0);
        assert_eq!(eased(EaseFunction::QuadraticInOut, 1.0), 1.0);
    }

    #[test]
    fn unset_channels_rest_at_identity() {
        let pose = Channels::default().sample(0.37);
        assert_eq!(pose, UiPose::default());
    }

    #[test]
    fn tween_clamps_outside_its_window() {
        let target = Entity::from_raw(1);
        let tween = rise(target, 50.0, 1.0, 0.8);

        // Before the start offset the from-pose holds.
        let before = tween.sample(0.0);
        assert_eq!(before.offset.y, 50.0);
        assert_eq!(before.alpha, 0.0);

        // Well past the end the final pose holds.
        let after = tween.sample(10.0);
        assert_eq!(after.offset.y, 0.0);
        assert_eq!(after.alpha, 1.0);
    }

    #[test]
    fn timeline_length_covers_the_last_tween() {
        let target = Entity::from_raw(1);
        let mut timeline = Timeline::new();
        timeline.add(rise(target, 50.0, 0.0, 0.8));
        timeline.add(rise(target, 30.0, 0.55, 0.6));
        assert!((timeline.length() - 1.15).abs() < 1e-6);
        assert!(!timeline.finished());
        timeline.clock = 1.15;
        assert!(timeline.finished());
    }

    #[test]
    fn staggered_children_start_after_their_delay() {
        let first = Entity::from_raw(1);
        let second = Entity::from_raw(2);
        let mut timeline = Timeline::new();
        timeline.add(rise(first, 30.0, 0.4, 0.6));
        timeline.add(rise(second, 30.0, 0.55, 0.6));

        // At the first child's start the second has not moved yet.
        timeline.clock = 0.4;
        assert_eq!(timeline.tweens[0].sample(timeline.clock).alpha, 0.0);
        assert_eq!(timeline.tweens[1].sample(timeline.clock).alpha, 0.0);

        // Between the two starts only the first is under way.
        timeline.clock = 0.5;
        assert!(timeline.tweens[0].sample(timeline.clock).alpha > 0.0);
        assert_eq!(timeline.tweens[1].sample(timeline.clock).alpha, 0.0);
    }

    #[test]
    fn paused_timeline_samples_hold_the_from_pose() {
        let target = Entity::from_raw(1);
        let mut timeline = Timeline::new().paused();
        timeline.add(rise(target, 50.0, 1.0, 0.8));
        let pose = timeline.tweens[0].sample(timeline.clock);
        assert_eq!(pose.offset.y, 50.0);
        assert_eq!(pose.alpha, 0.0);
    }
}
