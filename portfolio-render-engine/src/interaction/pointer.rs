//! Shared pointer and viewport state.
//!
//! One tracking system owns both resources; the cursor overlay, the parallax
//! layer and the 3D backdrop only read them.

use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow, WindowResized};

/// Latest pointer position in logical viewport pixels, plus a centered
/// normalization: (0, 0) at the viewport center, x right and y up, both in
/// [-1, 1]. `viewport_pos` is `None` until the first move event and while
/// the pointer is outside the window; the normalization keeps its last value
/// so the backdrop does not snap back.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PointerState {
    pub viewport_pos: Option<Vec2>,
    pub normalized: Vec2,
}

/// Logical window size and scale factor, refreshed every frame.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ViewportMetrics {
    pub size: Vec2,
    pub scale_factor: f32,
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self { size: Vec2::ZERO, scale_factor: 1.0 }
    }
}

impl ViewportMetrics {
    pub fn aspect(&self) -> f32 {
        if self.size.y > 0.0 { self.size.x / self.size.y } else { 1.0 }
    }
}

/// Centered normalization of a viewport position.
pub fn centered(position: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        (position.x / size.x) * 2.0 - 1.0,
        -((position.y / size.y) * 2.0 - 1.0),
    )
}

pub fn update_viewport_metrics(
    mut metrics: ResMut<ViewportMetrics>,
    mut resizes: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    metrics.size = Vec2::new(window.width(), window.height());
    metrics.scale_factor = window.scale_factor();
    for _ in resizes.read() {
        info!(
            "viewport resized to {:.0}x{:.0} (aspect {:.3})",
            metrics.size.x,
            metrics.size.y,
            metrics.aspect()
        );
    }
}

pub fn track_pointer(
    mut pointer: ResMut<PointerState>,
    metrics: Res<ViewportMetrics>,
    mut leaves: EventReader<CursorLeft>,
    mut moves: EventReader<CursorMoved>,
) {
    if leaves.read().next().is_some() {
        pointer.viewport_pos = None;
    }
    for event in moves.read() {
        pointer.viewport_pos = Some(event.position);
        if metrics.size.x > 0.0 && metrics.size.y > 0.0 {
            pointer.normalized = centered(event.position, metrics.size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_normalizes_to_zero() {
        let size = Vec2::new(1920.0, 1080.0);
        assert_eq!(centered(size * 0.5, size), Vec2::ZERO);
    }

    #[test]
    fn corners_normalize_to_unit_values() {
        let size = Vec2::new(800.0, 600.0);
        // Top-left of the viewport: left of center, above center.
        assert_eq!(centered(Vec2::ZERO, size), Vec2::new(-1.0, 1.0));
        // Bottom-right.
        assert_eq!(centered(size, size), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn aspect_is_width_over_height() {
        let metrics = ViewportMetrics { size: Vec2::new(1920.0, 1080.0), scale_factor: 1.0 };
        assert!((metrics.aspect() - 16.0 / 9.0).abs() < 1e-6);
        // A degenerate height falls back instead of dividing by zero.
        let flat = ViewportMetrics { size: Vec2::new(1920.0, 0.0), scale_factor: 1.0 };
        assert_eq!(flat.aspect(), 1.0);
    }
}
