//! Smooth scroll state for the page.
//!
//! Wheel input moves a target offset; the current offset chases it with an
//! exponential lerp, or follows an eased glide when the nav jumps to a
//! section. One sync system writes the result into the scroll root's
//! `ScrollPosition`, which is the only place the Bevy scrolling API is
//! touched.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::motion::{GLIDE_DURATION, GLIDE_EASE, SCROLL_CHASE_RATE, SCROLL_LINE_PX};

use crate::engine::animation::tween::eased;

/// Marker for the page's scrollable root node.
#[derive(Component)]
pub struct ScrollRoot;

/// Eased scroll-to-section animation.
#[derive(Debug, Clone, Copy)]
pub struct Glide {
    pub from: f32,
    pub to: f32,
    pub elapsed: f32,
    pub duration: f32,
}

#[derive(Resource, Debug, Default)]
pub struct ScrollState {
    /// Current content offset in logical pixels.
    pub offset: f32,
    /// Offset the wheel input is steering toward.
    pub target: f32,
    /// Largest valid offset, derived from the measured content height.
    pub max: f32,
    pub glide: Option<Glide>,
}

impl ScrollState {
    /// Start an eased glide toward a content offset, replacing any running
    /// one. Wheel input cancels it.
    pub fn scroll_to(&mut self, to: f32) {
        let to = to.clamp(0.0, self.max);
        self.glide = Some(Glide { from: self.offset, to, elapsed: 0.0, duration: GLIDE_DURATION });
    }
}

/// Wheel contribution in logical pixels. Line deltas are scaled, pixel
/// deltas pass through.
pub fn wheel_delta(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => y * SCROLL_LINE_PX,
        MouseScrollUnit::Pixel => y,
    }
}

pub fn gather_wheel(mut state: ResMut<ScrollState>, mut wheels: EventReader<MouseWheel>) {
    for wheel in wheels.read() {
        let delta = wheel_delta(wheel.unit, wheel.y);
        if delta != 0.0 {
            state.glide = None;
            let max = state.max;
            // Wheel-up is positive y and scrolls the content back up.
            state.target = (state.target - delta).clamp(0.0, max);
        }
    }
}

pub fn update_glide(time: Res<Time>, mut state: ResMut<ScrollState>) {
    let Some(mut glide) = state.glide else {
        return;
    };
    glide.elapsed += time.delta_secs();
    let t = (glide.elapsed / glide.duration).min(1.0);
    let offset = glide.from + (glide.to - glide.from) * eased(GLIDE_EASE, t);
    state.offset = offset;
    if t >= 1.0 {
        state.target = glide.to;
        state.glide = None;
    } else {
        state.target = offset;
        state.glide = Some(glide);
    }
}

pub fn chase_scroll(time: Res<Time>, mut state: ResMut<ScrollState>) {
    if state.glide.is_some() {
        return;
    }
    let rate = (SCROLL_CHASE_RATE * time.delta_secs()).min(1.0);
    let step = (state.target - state.offset) * rate;
    state.offset += step;
    if (state.target - state.offset).abs() < 0.05 {
        state.offset = state.target;
    }
}

pub fn sync_scroll_position(
    state: Res<ScrollState>,
    mut roots: Query<&mut ScrollPosition, With<ScrollRoot>>,
) {
    for mut position in &mut roots {
        position.offset_x = 0.0;
        position.offset_y = state.offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_units_scale_and_pixel_units_pass_through() {
        assert_eq!(wheel_delta(MouseScrollUnit::Line, -2.0), -80.0);
        assert_eq!(wheel_delta(MouseScrollUnit::Pixel, -37.0), -37.0);
    }

    #[test]
    fn scroll_to_clamps_to_the_content() {
        let mut state = ScrollState { max: 500.0, ..default() };
        state.scroll_to(900.0);
        let glide = state.glide.unwrap();
        assert_eq!(glide.to, 500.0);
        assert_eq!(glide.from, 0.0);
    }

    #[test]
    fn glide_lands_exactly_on_its_target() {
        let mut state = ScrollState { max: 2000.0, ..default() };
        state.scroll_to(1200.0);
        let mut glide = state.glide.unwrap();
        glide.elapsed = glide.duration;
        let t: f32 = (glide.elapsed / glide.duration).min(1.0);
        let offset = glide.from + (glide.to - glide.from) * eased(GLIDE_EASE, t);
        assert_eq!(offset, 1200.0);
    }
}
