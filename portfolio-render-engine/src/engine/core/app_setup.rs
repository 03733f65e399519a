use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

#[cfg(debug_assertions)]
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;

use crate::engine::animation::ambient::drive_ambient;
use crate::engine::animation::reveal::{prime_sections, reveal_dispatcher};
use crate::engine::animation::tween::{apply_poses, play_timelines, propagate_fade};
use crate::engine::core::app_state::{AppState, fps_text_update_system, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::gate::{despawn_gate, run_gate, spawn_gate};
use crate::engine::loading::manifest::{
    ManifestLoader, SceneSettings, check_manifest_ready, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::camera::spawn_backdrop_camera;
use crate::engine::scene::grid::scroll_grids;
use crate::engine::scene::spatial::{drive_shapes, pulse_materials, sway_fields};
use crate::engine::scene::spawn_scene;
use crate::interaction::cursor::{CursorVm, apply_cursor_vm, drive_followers, update_cursor_vm};
use crate::interaction::parallax::drive_parallax;
use crate::interaction::pointer::{
    PointerState, ViewportMetrics, track_pointer, update_viewport_metrics,
};
use crate::interaction::scroll::{
    ScrollState, chase_scroll, gather_wheel, sync_scroll_position, update_glide,
};
use crate::interaction::sections::{
    ActiveSection, SectionGeometry, measure_sections, update_tracker,
};
use crate::site::hero::handle_scroll_hint;
use crate::site::nav::{handle_nav_clicks, highlight_active_nav};
use crate::site::page::spawn_page;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins());

    #[cfg(debug_assertions)]
    app.add_plugins(FrameTimeDiagnosticsPlugin::default());
    app.add_systems(Update, fps_text_update_system);

    configure_app(&mut app);

    app
}

/// Everything that does not need a window or the render backend, so the
/// integration tests can run the same wiring headless.
fn configure_app(app: &mut App) {
    app.init_state::<AppState>()
        .add_plugins(JsonAssetPlugin::<SceneSettings>::new(&["json"]))
        .insert_resource(ClearColor(Color::BLACK));

    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<PointerState>()
        .init_resource::<ViewportMetrics>()
        .init_resource::<ScrollState>()
        .init_resource::<SectionGeometry>()
        .init_resource::<ActiveSection>()
        .init_resource::<CursorVm>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (check_manifest_ready, run_gate, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnExit(AppState::Loading), despawn_gate)
        .add_systems(OnEnter(AppState::Running), (spawn_scene, spawn_page));

    // Input and geometry first, so every later group reads fresh state.
    let interaction_systems = (
        update_viewport_metrics,
        track_pointer,
        gather_wheel,
        update_glide,
        chase_scroll,
        sync_scroll_position,
        measure_sections,
        update_tracker,
    )
        .chain();

    let page_systems = (handle_nav_clicks, handle_scroll_hint, highlight_active_nav);

    // Pose writers feed the single apply pass, which feeds the fade pass.
    let motion_systems = (
        prime_sections,
        reveal_dispatcher,
        play_timelines,
        drive_ambient,
        drive_parallax,
        apply_poses,
        propagate_fade,
    )
        .chain();

    let cursor_systems = (update_cursor_vm, drive_followers, apply_cursor_vm).chain();

    let backdrop_systems = (sway_fields, drive_shapes, pulse_materials, scroll_grids);

    app.add_systems(
        Update,
        (interaction_systems, page_systems, motion_systems, cursor_systems, backdrop_systems)
            .chain()
            .run_if(in_state(AppState::Running)),
    );
}

fn setup(mut commands: Commands) {
    spawn_backdrop_camera(&mut commands);
    spawn_gate(&mut commands);

    #[cfg(debug_assertions)]
    create_debug_overlays(&mut commands);
}

#[cfg(debug_assertions)]
fn create_debug_overlays(commands: &mut Commands) {
    use crate::engine::core::app_state::FpsText;

    commands
        .spawn(Node { width: Val::Percent(100.0), height: Val::Percent(100.0), ..default() })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont { font_size: 16.0, ..default() },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use bevy::app::TaskPoolPlugin;
    use bevy::asset::AssetPlugin;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::input::mouse::MouseWheel;
    use bevy::state::app::StatesPlugin;
    use bevy::window::{CursorLeft, CursorMoved, WindowResized};
    use constants::motion::ABOUT_REVEAL;
    use constants::sections::{SECTION_ORDER, SectionId};

    use crate::engine::animation::reveal::{RevealGate, RevealSection};
    use crate::engine::animation::tween::{RevealPose, Timeline};
    use crate::engine::loading::gate::{GateCounter, GateRoot};
    use crate::engine::scene::BackdropRoot;
    use crate::interaction::sections::{PageSection, SectionBand};

    /// The full app wiring minus window and render plugins. Events that
    /// normally come from those plugins are registered empty.
    fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins((TaskPoolPlugin::default(), AssetPlugin::default(), StatesPlugin));
        app.init_resource::<Time>();
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.add_event::<WindowResized>();
        app.add_event::<CursorLeft>();
        app.add_event::<CursorMoved>();
        app.add_event::<MouseWheel>();
        configure_app(&mut app);
        app
    }

    fn step(app: &mut App, seconds: f32) {
        app.world_mut().resource_mut::<Time>().advance_by(Duration::from_secs_f32(seconds));
        app.update();
    }

    fn count<C: Component>(app: &mut App) -> usize {
        app.world_mut().query::<&C>().iter(app.world()).count()
    }

    fn state(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    fn counter_text(app: &mut App) -> String {
        app.world_mut()
            .query_filtered::<&Text, With<GateCounter>>()
            .single(app.world())
            .unwrap()
            .0
            .clone()
    }

    #[test]
    fn gate_counts_then_the_page_takes_over() {
        let mut app = headless_app();
        app.update();

        // Startup leaves the gate up and the state in Loading.
        assert_eq!(state(&app), AppState::Loading);
        assert_eq!(count::<GateRoot>(&mut app), 1);
        assert_eq!(counter_text(&mut app), "000");
        assert_eq!(count::<PageSection>(&mut app), 0);

        // Halfway through the count the quadratic ease reads exactly 50.
        step(&mut app, 1.25);
        assert_eq!(counter_text(&mut app), "050");
        assert_eq!(state(&app), AppState::Loading);

        // Finish the count, then the fade. The transition applies on the
        // following frame.
        step(&mut app, 1.25);
        step(&mut app, 0.5);
        app.update();

        assert_eq!(state(&app), AppState::Running);
        assert_eq!(count::<GateRoot>(&mut app), 0);
        assert_eq!(count::<PageSection>(&mut app), SECTION_ORDER.len());
        assert_eq!(count::<BackdropRoot>(&mut app), 1);
        // 6 drifting wireframes, 2 static spheres, 2 fields, starfield, 2 grids.
        assert_eq!(count::<Mesh3d>(&mut app), 13);

        // Runtime systems keep ticking in a windowless world.
        step(&mut app, 0.016);
        step(&mut app, 0.016);
        assert_eq!(count::<PageSection>(&mut app), SECTION_ORDER.len());
    }

    #[test]
    fn sections_hold_primed_timelines_until_measured() {
        let mut app = headless_app();
        app.update();
        step(&mut app, 3.1);
        step(&mut app, 0.5);
        app.update();
        assert_eq!(state(&app), AppState::Running);

        // One runtime frame primes every section; with a zero-sized headless
        // viewport the dispatcher never opens a band, so all stay paused.
        step(&mut app, 0.016);
        let world = app.world_mut();
        let primed: Vec<bool> = world
            .query_filtered::<&Timeline, With<PageSection>>()
            .iter(world)
            .map(|timeline| timeline.playing)
            .collect();
        assert_eq!(primed.len(), SECTION_ORDER.len());
        assert!(primed.iter().all(|playing| !playing));
    }

    #[test]
    fn band_entry_starts_the_entrance() {
        let mut app = App::new();
        app.init_resource::<SectionGeometry>();
        app.init_resource::<ViewportMetrics>();
        app.world_mut().resource_mut::<ViewportMetrics>().size = Vec2::new(1280.0, 800.0);

        let target = app.world_mut().spawn(RevealPose::default()).id();
        let section = app
            .world_mut()
            .spawn((
                PageSection(SectionId::About),
                RevealGate::default(),
                RevealSection {
                    recipe: &ABOUT_REVEAL,
                    mirror: false,
                    heading: vec![target],
                    items: vec![],
                },
            ))
            .id();

        app.world_mut().run_system_once(prime_sections).unwrap();
        let timeline = app.world().get::<Timeline>(section).unwrap();
        assert!(!timeline.playing);

        // Scroll the band inside the reveal window.
        app.world_mut().resource_mut::<SectionGeometry>().set(
            SectionId::About,
            SectionBand { top: 300.0, bottom: 900.0, offset_top: 300.0, height: 600.0 },
        );
        app.world_mut().run_system_once(reveal_dispatcher).unwrap();
        let timeline = app.world().get::<Timeline>(section).unwrap();
        assert!(timeline.playing);
        assert!(app.world().get::<RevealGate>(section).unwrap().inside);

        // Scrolling back out flips the band without touching the entrance.
        app.world_mut().resource_mut::<SectionGeometry>().set(
            SectionId::About,
            SectionBand { top: 700.0, bottom: 1300.0, offset_top: 700.0, height: 600.0 },
        );
        app.world_mut().run_system_once(reveal_dispatcher).unwrap();
        assert!(!app.world().get::<RevealGate>(section).unwrap().inside);
        assert!(app.world().get::<Timeline>(section).unwrap().playing);
    }
}
