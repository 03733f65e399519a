use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Application flow: the gate overlay owns `Loading`, everything else runs
/// in `Running`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Resource)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Leave `Loading` once the gate has counted up and faded out. The page and
/// the backdrop spawn on entering `Running`.
pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.gate_finished {
        info!("→ Transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

#[derive(Component)]
pub struct FpsText;

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
