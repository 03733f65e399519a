//! Shared UI building blocks for the content sections.
//!
//! Reveal targets carry a `RevealPose` plus a self-referencing `FadeGroup`;
//! their painted children point their `FadeGroup` at the target so one pose
//! fades the whole block. Decorative shapes hang off an absolutely anchored
//! wrapper so percentage anchors survive the pixel offsets the pose apply
//! pass writes.

use std::f32::consts::FRAC_PI_4;

use bevy::prelude::*;
use rand::rngs::SmallRng;

use constants::motion::{DecorKind, DecorSpec, DriftRange};
use constants::sections::SectionId;

use crate::engine::animation::ambient::{AmbientDrift, AmbientState};
use crate::engine::animation::reveal::RevealGate;
use crate::engine::animation::tween::{BaseAlpha, FadeGroup, RevealPose};
use crate::interaction::parallax::{Parallax, ParallaxState};
use crate::interaction::sections::PageSection;

pub const CARD_BG: f32 = 0.04;
pub const CARD_BORDER: f32 = 0.1;

/// One-viewport-minimum section shell, centered column.
pub fn section_root(commands: &mut Commands, id: SectionId) -> Entity {
    commands
        .spawn((
            PageSection(id),
            RevealGate::default(),
            Name::new(format!("Section {}", id.slug())),
            Node {
                width: Val::Percent(100.0),
                min_height: Val::Vh(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: UiRect::axes(Val::Px(48.0), Val::Px(96.0)),
                row_gap: Val::Px(40.0),
                ..default()
            },
        ))
        .id()
}

/// Section heading, a reveal target in its own right.
pub fn section_title(commands: &mut Commands, title: &str) -> Entity {
    let entity = commands
        .spawn((
            Text::new(title),
            TextFont { font_size: 48.0, ..default() },
            TextColor(Color::WHITE),
            TextLayout::new_with_justify(JustifyText::Center),
            RevealPose::default(),
            BaseAlpha { text: Some(1.0), ..default() },
        ))
        .id();
    commands.entity(entity).insert(FadeGroup(entity));
    entity
}

/// Text that fades with `owner`'s reveal pose.
pub fn faded_text(
    commands: &mut Commands,
    owner: Entity,
    value: impl Into<String>,
    font_size: f32,
    alpha: f32,
) -> Entity {
    commands
        .spawn((
            Text::new(value),
            TextFont { font_size, ..default() },
            TextColor(Color::srgba(1.0, 1.0, 1.0, alpha)),
            FadeGroup(owner),
            BaseAlpha { text: Some(alpha), ..default() },
        ))
        .id()
}

/// Default card layout. Callers adjust width before handing it to
/// [`reveal_card`].
pub fn card_node() -> Node {
    Node {
        width: Val::Px(320.0),
        flex_direction: FlexDirection::Column,
        padding: UiRect::all(Val::Px(24.0)),
        border: UiRect::all(Val::Px(1.0)),
        row_gap: Val::Px(12.0),
        ..default()
    }
}

/// Bordered panel acting as a reveal target.
pub fn reveal_card(commands: &mut Commands, node: Node) -> Entity {
    let card = commands
        .spawn((
            node,
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, CARD_BG)),
            BorderColor(Color::srgba(1.0, 1.0, 1.0, CARD_BORDER)),
            BorderRadius::all(Val::Px(8.0)),
            RevealPose::default(),
            BaseAlpha { background: Some(CARD_BG), border: Some(CARD_BORDER), text: None },
        ))
        .id();
    commands.entity(card).insert(FadeGroup(card));
    card
}

/// Small pill tag.
pub fn chip(commands: &mut Commands, owner: Entity, label: &str) -> Entity {
    let shell = commands
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.05)),
            BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.12)),
            BorderRadius::all(Val::Px(999.0)),
            FadeGroup(owner),
            BaseAlpha { background: Some(0.05), border: Some(0.12), text: None },
        ))
        .id();
    let label = faded_text(commands, owner, label, 13.0, 0.7);
    commands.entity(shell).add_children(&[label]);
    shell
}

/// Floating decorative shapes: an absolute percentage-anchored wrapper with
/// the drifting shape inside it.
pub fn spawn_decor(
    commands: &mut Commands,
    section: Entity,
    specs: &[DecorSpec],
    range: &DriftRange,
    rng: &mut SmallRng,
) {
    let mut anchors = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        let color = Color::srgba(spec.color[0], spec.color[1], spec.color[2], spec.color[3]);
        let outlined = matches!(spec.kind, DecorKind::Ring | DecorKind::Square);

        let mut shape = commands.spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                border: if outlined { UiRect::all(Val::Px(1.0)) } else { UiRect::DEFAULT },
                ..default()
            },
            AmbientDrift::draw(range, index, rng),
            AmbientState::default(),
        ));
        match spec.kind {
            DecorKind::Dot => {
                shape.insert((BackgroundColor(color), BorderRadius::MAX));
            }
            DecorKind::Ring => {
                shape.insert((BorderColor(color), BorderRadius::MAX));
            }
            DecorKind::Square => {
                shape.insert(BorderColor(color));
            }
            DecorKind::Bar | DecorKind::Line => {
                shape.insert(BackgroundColor(color));
            }
        }
        if spec.parallax != Vec2::ZERO {
            shape.insert((Parallax { gain: spec.parallax }, ParallaxState::default()));
        }
        let shape = shape.id();

        let mut anchor = commands.spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(spec.anchor.x),
            top: Val::Percent(spec.anchor.y),
            width: Val::Px(spec.size.x),
            height: Val::Px(spec.size.y),
            ..default()
        });
        if spec.kind == DecorKind::Square {
            // The apply pass owns the shape's own rotation, so the diamond
            // tilt lives on the anchor.
            anchor.insert(Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_4)));
        }
        let anchor = anchor.id();
        commands.entity(anchor).add_children(&[shape]);
        anchors.push(anchor);
    }
    commands.entity(section).add_children(&anchors);
}
