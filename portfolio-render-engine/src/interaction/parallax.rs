//! Pointer parallax for decorative elements and hero text.

use bevy::prelude::*;

use crate::interaction::pointer::{PointerState, ViewportMetrics};

/// Per-element parallax gain. Negative components invert the layer.
#[derive(Component, Debug, Clone, Copy)]
pub struct Parallax {
    pub gain: Vec2,
}

/// Current parallax offset in logical pixels, consumed by the pose apply
/// pass.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ParallaxState {
    pub offset: Vec2,
}

/// Screen-space offset for a centered pointer normalization: zero at the
/// viewport center, `gain * half-viewport` at the edges, moving toward the
/// pointer for positive gains.
pub fn parallax_offset(normalized: Vec2, viewport: Vec2, gain: Vec2) -> Vec2 {
    Vec2::new(
        normalized.x * viewport.x * 0.5 * gain.x,
        -normalized.y * viewport.y * 0.5 * gain.y,
    )
}

pub fn drive_parallax(
    pointer: Res<PointerState>,
    metrics: Res<ViewportMetrics>,
    mut layers: Query<(&Parallax, &mut ParallaxState)>,
) {
    // No writes before the first pointer event.
    if pointer.viewport_pos.is_none() {
        return;
    }
    for (parallax, mut state) in &mut layers {
        state.offset = parallax_offset(pointer.normalized, metrics.size, parallax.gain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_gives_zero_offset() {
        let offset = parallax_offset(Vec2::ZERO, Vec2::new(1920.0, 1080.0), Vec2::splat(0.04));
        assert_eq!(offset, Vec2::ZERO);
    }

    #[test]
    fn offset_moves_toward_the_pointer_for_positive_gain() {
        let viewport = Vec2::new(1000.0, 800.0);
        // Pointer at the bottom-right corner.
        let offset = parallax_offset(Vec2::new(1.0, -1.0), viewport, Vec2::new(0.02, 0.02));
        assert_eq!(offset, Vec2::new(10.0, 8.0));
    }

    #[test]
    fn negative_gain_inverts_the_layer() {
        let viewport = Vec2::new(1000.0, 800.0);
        let offset = parallax_offset(Vec2::new(1.0, 1.0), viewport, Vec2::new(-0.03, 0.03));
        assert_eq!(offset, Vec2::new(-15.0, -12.0));
    }
}
