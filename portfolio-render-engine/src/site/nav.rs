//! Fixed navigation bar.
//!
//! Spawns already armed with its fly-in timeline, highlights whichever
//! section the tracker reports, and glides the page to a section on click.

use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

use constants::content::{NAME_FIRST, NAME_LAST};
use constants::motion::{NAV_DROP_DURATION, NAV_DROP_IN, NAV_LEAD};
use constants::sections::{NAV_ENTRIES, SectionId};

use crate::engine::animation::tween::{BaseAlpha, Channels, FadeGroup, RevealPose, Timeline, Tween};
use crate::interaction::scroll::ScrollState;
use crate::interaction::sections::{ActiveSection, SectionGeometry};
use crate::site::widgets::faded_text;

#[derive(Component)]
pub struct NavRoot;

/// One nav entry, with direct handles to the pieces the highlight touches.
#[derive(Component)]
pub struct NavItem {
    pub target: SectionId,
    pub label: Entity,
    pub underline: Entity,
    pub dot: Entity,
}

pub fn spawn_nav(commands: &mut Commands) {
    let root = commands
        .spawn((
            NavRoot,
            Name::new("Nav"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(48.0), Val::Px(18.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
            GlobalZIndex(20),
            RevealPose::default(),
            BaseAlpha { background: Some(0.35), ..default() },
        ))
        .id();
    commands.entity(root).insert(FadeGroup(root));

    let monogram: String =
        [NAME_FIRST, NAME_LAST].iter().filter_map(|part| part.chars().next()).collect();
    let logo = faded_text(commands, root, monogram, 16.0, 0.9);

    let items = commands.spawn(Node { column_gap: Val::Px(8.0), ..default() }).id();
    let mut buttons = Vec::new();
    for entry in &NAV_ENTRIES {
        let label = faded_text(commands, root, entry.label, 14.0, 0.6);
        let dot = commands
            .spawn((
                Node { width: Val::Px(4.0), height: Val::Px(4.0), ..default() },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.0)),
                BorderRadius::MAX,
                FadeGroup(root),
                BaseAlpha { background: Some(0.0), ..default() },
            ))
            .id();
        let top_row = commands
            .spawn(Node { align_items: AlignItems::Center, column_gap: Val::Px(6.0), ..default() })
            .id();
        commands.entity(top_row).add_children(&[dot, label]);

        let underline = commands
            .spawn((
                Node { width: Val::Percent(0.0), height: Val::Px(2.0), ..default() },
                BackgroundColor(Color::WHITE),
                FadeGroup(root),
                BaseAlpha { background: Some(1.0), ..default() },
            ))
            .id();

        let button = commands
            .spawn((
                Button,
                NavItem { target: entry.target, label, underline, dot },
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::FlexStart,
                    row_gap: Val::Px(3.0),
                    padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                    ..default()
                },
            ))
            .id();
        commands.entity(button).add_children(&[top_row, underline]);
        buttons.push(button);
    }
    commands.entity(items).add_children(&buttons);
    commands.entity(root).add_children(&[logo, items]);

    // Fly in from above once the post-gate lead passes.
    let mut timeline = Timeline::new();
    timeline.add(Tween {
        target: root,
        start: NAV_LEAD,
        duration: NAV_DROP_DURATION,
        ease: EaseFunction::QuadraticOut,
        channels: Channels {
            offset: Some((Vec2::new(0.0, NAV_DROP_IN), Vec2::ZERO)),
            scale: None,
            alpha: Some((0.0, 1.0)),
        },
    });
    commands.entity(root).insert(timeline);
}

pub fn handle_nav_clicks(
    clicks: Query<(&Interaction, &NavItem), Changed<Interaction>>,
    geometry: Res<SectionGeometry>,
    mut scroll: ResMut<ScrollState>,
) {
    for (interaction, item) in &clicks {
        if *interaction == Interaction::Pressed {
            if let Some(band) = geometry.band(item.target) {
                scroll.scroll_to(band.offset_top);
            }
        }
    }
}

/// Mirror the tracker into the bar: bright label, full underline and a
/// pulsing dot on the active entry. Writes go through `BaseAlpha` so the
/// fade pass stays the only painter.
pub fn highlight_active_nav(
    time: Res<Time>,
    active: Res<ActiveSection>,
    items: Query<&NavItem>,
    mut alphas: Query<&mut BaseAlpha>,
    mut nodes: Query<&mut Node>,
) {
    let pulse = 0.65 + 0.35 * (time.elapsed_secs() * 4.0).sin();
    for item in &items {
        let is_active = item.target == active.0;
        if let Ok(mut alpha) = alphas.get_mut(item.label) {
            alpha.text = Some(if is_active { 1.0 } else { 0.6 });
        }
        if let Ok(mut alpha) = alphas.get_mut(item.dot) {
            alpha.background = Some(if is_active { pulse } else { 0.0 });
        }
        if let Ok(mut node) = nodes.get_mut(item.underline) {
            node.width = Val::Percent(if is_active { 100.0 } else { 0.0 });
        }
    }
}
