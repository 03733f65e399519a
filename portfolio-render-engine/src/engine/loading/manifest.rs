//! Scene settings manifest.
//!
//! Backdrop tuning (particle counts, spreads, grid extents) lives in a JSON
//! asset so it can change without a rebuild. Loading happens behind the gate;
//! a missing or malformed file falls back to built-in defaults so the page
//! still comes up.

use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::loading::progress::LoadingProgress;

const SETTINGS_PATH: &str = "scene.settings.json";

#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneSettings {
    pub field_one_count: usize,
    pub field_one_spread: [f32; 3],
    pub field_one_size: f32,
    pub field_one_opacity: f32,
    pub field_two_count: usize,
    pub field_two_spread: [f32; 3],
    pub field_two_size: f32,
    pub field_two_opacity: f32,
    pub star_count: usize,
    pub star_spread: [f32; 3],
    pub grid_extent: f32,
    pub grid_lines: usize,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            field_one_count: 1000,
            field_one_spread: [25.0, 25.0, 15.0],
            field_one_size: 0.025,
            field_one_opacity: 0.7,
            field_two_count: 1000,
            field_two_spread: [40.0, 40.0, 25.0],
            field_two_size: 0.02,
            field_two_opacity: 0.4,
            star_count: 3000,
            star_spread: [30.0, 30.0, 30.0],
            grid_extent: 40.0,
            grid_lines: 40,
        }
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    pub handle: Option<Handle<SceneSettings>>,
}

pub fn start_loading(mut loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(SETTINGS_PATH));
    info!("Loading scene settings from {SETTINGS_PATH}");
}

/// Poll the manifest handle; resolve to the loaded settings or the defaults.
pub fn check_manifest_ready(
    mut commands: Commands,
    loader: Res<ManifestLoader>,
    settings: Res<Assets<SceneSettings>>,
    asset_server: Res<AssetServer>,
    mut progress: ResMut<LoadingProgress>,
) {
    if progress.manifest_ready {
        return;
    }
    if let Some(handle) = &loader.handle {
        if let Some(loaded) = settings.get(handle) {
            commands.insert_resource(loaded.clone());
            progress.manifest_ready = true;
            info!("✓ Scene settings loaded");
        } else if let Some(LoadState::Failed(_)) = asset_server.get_load_state(handle) {
            warn!("Scene settings failed to load, using defaults");
            commands.insert_resource(SceneSettings::default());
            progress.manifest_ready = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let settings = SceneSettings::default();
        let text = serde_json::to_string(&settings).unwrap();
        let back: SceneSettings = serde_json::from_str(&text).unwrap();
        assert_eq!(back.star_count, settings.star_count);
        assert_eq!(back.field_two_spread, settings.field_two_spread);
    }

    #[test]
    fn shipped_manifest_parses() {
        let text = include_str!("../../../assets/scene.settings.json");
        let settings: SceneSettings = serde_json::from_str(text).unwrap();
        assert_eq!(settings.star_count, 3000);
        assert_eq!(settings.grid_lines, 40);
        assert!(settings.field_one_opacity > settings.field_two_opacity);
    }
}
