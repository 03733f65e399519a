//! Experience section: four dated entries sliding in from the left.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use constants::content::{EXPERIENCE_ENTRIES, EXPERIENCE_TITLE};
use constants::motion::{EXPERIENCE_DECOR, EXPERIENCE_DECOR_DRIFT, EXPERIENCE_REVEAL};
use constants::sections::SectionId;

use crate::engine::animation::reveal::RevealSection;
use crate::site::widgets::{card_node, faded_text, reveal_card, section_root, section_title, spawn_decor};

pub fn spawn_experience(commands: &mut Commands) -> Entity {
    let root = section_root(commands, SectionId::Experience);
    let title = section_title(commands, EXPERIENCE_TITLE);

    let column = commands
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(24.0),
            width: Val::Percent(100.0),
            max_width: Val::Px(760.0),
            ..default()
        })
        .id();

    let mut items = Vec::new();
    for entry in &EXPERIENCE_ENTRIES {
        let mut node = card_node();
        node.width = Val::Percent(100.0);
        let card = reveal_card(commands, node);

        let header = commands
            .spawn(Node {
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Baseline,
                width: Val::Percent(100.0),
                column_gap: Val::Px(16.0),
                ..default()
            })
            .id();
        let role = faded_text(commands, card, entry.role, 19.0, 1.0);
        let period = faded_text(commands, card, entry.period, 13.0, 0.5);
        commands.entity(header).add_children(&[role, period]);

        let company = faded_text(commands, card, entry.company, 15.0, 0.7);

        let mut rows = vec![header, company];
        for highlight in entry.highlights {
            rows.push(faded_text(commands, card, format!("- {highlight}"), 14.0, 0.6));
        }
        commands.entity(card).add_children(&rows);
        items.push(card);
    }

    commands.entity(column).add_children(&items);
    commands.entity(root).add_children(&[title, column]);
    let mut rng = SmallRng::seed_from_u64(5);
    spawn_decor(commands, root, &EXPERIENCE_DECOR, &EXPERIENCE_DECOR_DRIFT, &mut rng);

    commands.entity(root).insert(RevealSection {
        recipe: &EXPERIENCE_REVEAL,
        mirror: false,
        heading: vec![title],
        items,
    });
    root
}
