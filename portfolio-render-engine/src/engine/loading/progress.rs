use bevy::prelude::*;

/// Loading milestones. The gate flag alone drives the state transition;
/// the manifest flag stops the poll once settings are resolved.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_ready: bool,
    pub gate_finished: bool,
}
