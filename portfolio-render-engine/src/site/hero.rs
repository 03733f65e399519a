//! Hero section: the name in two parallax-split lines, subtitle and scroll
//! hint, surrounded by floating decor.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use constants::content::{HERO_SUBTITLE, NAME_FIRST, NAME_LAST, SCROLL_HINT};
use constants::motion::{
    HERO_DECOR, HERO_DECOR_DRIFT, HERO_REVEAL, HERO_TITLE_DRIFT, SCROLL_HINT_PARALLAX,
    SUBTITLE_PARALLAX, TITLE_PARALLAX,
};
use constants::sections::SectionId;

use crate::engine::animation::ambient::{AmbientDrift, AmbientState};
use crate::engine::animation::reveal::RevealSection;
use crate::engine::animation::tween::{BaseAlpha, FadeGroup, RevealPose};
use crate::interaction::parallax::{Parallax, ParallaxState};
use crate::interaction::scroll::ScrollState;
use crate::interaction::sections::SectionGeometry;
use crate::site::widgets::{faded_text, section_root, spawn_decor};

#[derive(Component)]
pub struct ScrollHint;

fn name_span(
    commands: &mut Commands,
    value: &str,
    gain: Vec2,
    index: usize,
    rng: &mut SmallRng,
) -> Entity {
    let span = commands
        .spawn((
            Text::new(value),
            TextFont { font_size: 80.0, ..default() },
            TextColor(Color::WHITE),
            TextLayout::new_with_justify(JustifyText::Center),
            RevealPose::default(),
            BaseAlpha { text: Some(1.0), ..default() },
            AmbientDrift::draw(&HERO_TITLE_DRIFT, index, rng),
            AmbientState::default(),
            Parallax { gain },
            ParallaxState::default(),
        ))
        .id();
    commands.entity(span).insert(FadeGroup(span));
    span
}

pub fn spawn_hero(commands: &mut Commands) -> Entity {
    let root = section_root(commands, SectionId::Hero);
    let mut rng = SmallRng::seed_from_u64(4);

    // The two name lines drift on opposite parallax gains.
    let first = name_span(commands, NAME_FIRST, TITLE_PARALLAX, 0, &mut rng);
    let last = name_span(commands, NAME_LAST, -TITLE_PARALLAX, 1, &mut rng);

    let subtitle = commands
        .spawn((
            Text::new(HERO_SUBTITLE),
            TextFont { font_size: 18.0, ..default() },
            TextColor(Color::srgba(1.0, 1.0, 1.0, 0.6)),
            TextLayout::new_with_justify(JustifyText::Center),
            Node { max_width: Val::Px(640.0), ..default() },
            RevealPose::default(),
            BaseAlpha { text: Some(0.6), ..default() },
            Parallax { gain: SUBTITLE_PARALLAX },
            ParallaxState::default(),
        ))
        .id();
    commands.entity(subtitle).insert(FadeGroup(subtitle));

    let hint = commands
        .spawn((
            ScrollHint,
            Button,
            Node {
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                margin: UiRect::top(Val::Px(48.0)),
                ..default()
            },
            RevealPose::default(),
            Parallax { gain: SCROLL_HINT_PARALLAX },
            ParallaxState::default(),
        ))
        .id();
    let hint_label = faded_text(commands, hint, SCROLL_HINT, 13.0, 0.5);
    let hint_line = commands
        .spawn((
            Node { width: Val::Px(2.0), height: Val::Px(24.0), ..default() },
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.4)),
            BorderRadius::MAX,
            FadeGroup(hint),
            BaseAlpha { background: Some(0.4), ..default() },
        ))
        .id();
    commands.entity(hint).add_children(&[hint_label, hint_line]);

    commands.entity(root).add_children(&[first, last, subtitle, hint]);
    spawn_decor(commands, root, &HERO_DECOR, &HERO_DECOR_DRIFT, &mut rng);

    commands.entity(root).insert(RevealSection {
        recipe: &HERO_REVEAL,
        mirror: false,
        heading: vec![first, last],
        items: vec![subtitle, hint],
    });
    root
}

/// Clicking the hint glides down to the about section.
pub fn handle_scroll_hint(
    hints: Query<&Interaction, (Changed<Interaction>, With<ScrollHint>)>,
    geometry: Res<SectionGeometry>,
    mut scroll: ResMut<ScrollState>,
) {
    for interaction in &hints {
        if *interaction == Interaction::Pressed {
            if let Some(band) = geometry.band(SectionId::About) {
                scroll.scroll_to(band.offset_top);
            }
        }
    }
}
