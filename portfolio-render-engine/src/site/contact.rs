//! Contact section: closing call plus the four reachable channels.

use bevy::prelude::*;

use constants::content::{CONTACT_COPY, CONTACT_LINKS, CONTACT_TITLE};
use constants::motion::CONTACT_REVEAL;
use constants::sections::SectionId;

use crate::engine::animation::reveal::RevealSection;
use crate::engine::animation::tween::{BaseAlpha, FadeGroup, RevealPose};
use crate::site::widgets::{faded_text, section_root, section_title, CARD_BG, CARD_BORDER};

pub fn spawn_contact(commands: &mut Commands) -> Entity {
    let root = section_root(commands, SectionId::Contact);
    let title = section_title(commands, CONTACT_TITLE);

    let copy = commands
        .spawn((
            Text::new(CONTACT_COPY),
            TextFont { font_size: 16.0, ..default() },
            TextColor(Color::srgba(1.0, 1.0, 1.0, 0.65)),
            TextLayout::new_with_justify(JustifyText::Center),
            Node { max_width: Val::Px(560.0), ..default() },
            RevealPose::default(),
            BaseAlpha { text: Some(0.65), ..default() },
        ))
        .id();
    commands.entity(copy).insert(FadeGroup(copy));

    let row = commands
        .spawn(Node {
            flex_wrap: FlexWrap::Wrap,
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(16.0),
            row_gap: Val::Px(16.0),
            ..default()
        })
        .id();

    let mut items = vec![copy];
    let mut buttons = Vec::new();
    for link in &CONTACT_LINKS {
        let button = commands
            .spawn((
                Button,
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(4.0),
                    padding: UiRect::axes(Val::Px(24.0), Val::Px(14.0)),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, CARD_BG)),
                BorderColor(Color::srgba(1.0, 1.0, 1.0, CARD_BORDER)),
                BorderRadius::all(Val::Px(8.0)),
                RevealPose::default(),
                BaseAlpha { background: Some(CARD_BG), border: Some(CARD_BORDER), text: None },
            ))
            .id();
        commands.entity(button).insert(FadeGroup(button));
        let label = faded_text(commands, button, link.label, 12.0, 0.5);
        let value = faded_text(commands, button, link.value, 15.0, 0.9);
        commands.entity(button).add_children(&[label, value]);
        buttons.push(button);
        items.push(button);
    }
    commands.entity(row).add_children(&buttons);

    commands.entity(root).add_children(&[title, copy, row]);

    commands.entity(root).insert(RevealSection {
        recipe: &CONTACT_REVEAL,
        mirror: false,
        heading: vec![title],
        items,
    });
    root
}
