pub mod camera;
pub mod grid;
pub mod particles;
pub mod spatial;

use bevy::prelude::*;

use crate::engine::loading::manifest::SceneSettings;

/// Root of the 3D backdrop. Despawning it tears down the whole scene tree;
/// the dropped handles release their mesh and material assets.
#[derive(Component)]
pub struct BackdropRoot;

pub fn spawn_backdrop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &SceneSettings,
) {
    let root = commands
        .spawn((BackdropRoot, Name::new("Backdrop"), Transform::IDENTITY, Visibility::default()))
        .id();

    // Wireframes share one swaying group; fields and grids move on their own.
    let group = commands
        .spawn((spatial::FieldSway::group(), Transform::IDENTITY, Visibility::default()))
        .id();
    commands.entity(root).add_children(&[group]);
    spatial::spawn_wireframes(commands, meshes, materials, group);

    particles::spawn_particle_fields(commands, meshes, materials, settings, root);
    grid::spawn_ground_grids(commands, meshes, materials, settings, root);
}

/// `OnEnter(Running)` hook. A manifest that is still pending at this point
/// falls back to compiled defaults.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Option<Res<SceneSettings>>,
) {
    let settings = settings.map(|loaded| loaded.clone()).unwrap_or_else(|| {
        warn!("Scene settings still pending, spawning with defaults");
        SceneSettings::default()
    });
    spawn_backdrop(&mut commands, &mut meshes, &mut materials, &settings);
    info!("✓ Backdrop scene spawned");
}

pub fn despawn_backdrop(mut commands: Commands, roots: Query<Entity, With<BackdropRoot>>) {
    for root in &roots {
        commands.entity(root).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn teardown_releases_the_whole_scene_tree() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();

        app.world_mut().run_system_once(spawn_scene).unwrap();
        let spawned = app.world_mut().query::<&Mesh3d>().iter(app.world()).count();
        // 6 drifting wireframes, 2 static spheres, 2 fields, starfield, 2 grids.
        assert_eq!(spawned, 13);

        app.world_mut().run_system_once(despawn_backdrop).unwrap();
        let left = app.world_mut().query::<&Mesh3d>().iter(app.world()).count();
        assert_eq!(left, 0);
        assert_eq!(
            app.world_mut().query::<&BackdropRoot>().iter(app.world()).count(),
            0
        );
    }
}
