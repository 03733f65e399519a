use bevy::prelude::*;
use bevy::window::{CursorOptions, PresentMode};

pub const WINDOW_TITLE: &str = "Mohammed Anvar PP - Digital Craftsman";

/// The OS cursor stays hidden everywhere; the overlay in
/// `interaction::cursor` replaces it.
pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            title: WINDOW_TITLE.into(),
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            cursor_options: CursorOptions { visible: false, ..default() },
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: WINDOW_TITLE.into(),
            present_mode: PresentMode::AutoVsync,
            cursor_options: CursorOptions { visible: false, ..default() },
            ..default()
        }
    }
}
