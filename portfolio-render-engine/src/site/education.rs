//! Education section. The one mirrored section: its entrance replays on
//! every visit and scrolls back out with a staggered drop.

use bevy::prelude::*;

use constants::content::{EDUCATION_ENTRIES, EDUCATION_TITLE};
use constants::motion::EDUCATION_REVEAL;
use constants::sections::SectionId;

use crate::engine::animation::reveal::RevealSection;
use crate::site::widgets::{card_node, faded_text, reveal_card, section_root, section_title};

pub fn spawn_education(commands: &mut Commands) -> Entity {
    let root = section_root(commands, SectionId::Education);
    let title = section_title(commands, EDUCATION_TITLE);

    let column = commands
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(24.0),
            width: Val::Percent(100.0),
            max_width: Val::Px(720.0),
            ..default()
        })
        .id();

    let mut items = Vec::new();
    for entry in &EDUCATION_ENTRIES {
        let mut node = card_node();
        node.width = Val::Percent(100.0);
        let card = reveal_card(commands, node);
        let degree = faded_text(commands, card, entry.degree, 19.0, 1.0);
        let school = faded_text(commands, card, entry.school, 14.0, 0.7);
        let detail = faded_text(commands, card, entry.detail, 14.0, 0.55);
        commands.entity(card).add_children(&[degree, school, detail]);
        items.push(card);
    }

    commands.entity(column).add_children(&items);
    commands.entity(root).add_children(&[title, column]);

    commands.entity(root).insert(RevealSection {
        recipe: &EDUCATION_REVEAL,
        mirror: true,
        heading: vec![title],
        items,
    });
    root
}
