//! Skills section: three drifting category cards of tag chips over colored
//! decor.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use constants::content::{SKILL_CATEGORIES, SKILLS_TITLE};
use constants::motion::{SKILLS_CARD_DRIFT, SKILLS_DECOR, SKILLS_DECOR_DRIFT, SKILLS_REVEAL};
use constants::sections::SectionId;

use crate::engine::animation::ambient::{AmbientDrift, AmbientState};
use crate::engine::animation::reveal::RevealSection;
use crate::site::widgets::{card_node, chip, faded_text, reveal_card, section_root, section_title, spawn_decor};

pub fn spawn_skills(commands: &mut Commands) -> Entity {
    let root = section_root(commands, SectionId::Skills);
    let title = section_title(commands, SKILLS_TITLE);
    let mut rng = SmallRng::seed_from_u64(6);

    let row = commands
        .spawn(Node {
            flex_wrap: FlexWrap::Wrap,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Stretch,
            column_gap: Val::Px(24.0),
            row_gap: Val::Px(24.0),
            max_width: Val::Px(1120.0),
            ..default()
        })
        .id();

    let mut items = Vec::new();
    for (index, category) in SKILL_CATEGORIES.iter().enumerate() {
        let card = reveal_card(commands, card_node());
        // Cards keep floating after the reveal settles.
        commands.entity(card).insert((
            AmbientDrift::draw(&SKILLS_CARD_DRIFT, index, &mut rng),
            AmbientState::default(),
        ));

        let heading = faded_text(commands, card, category.name, 20.0, 1.0);
        let chips = commands
            .spawn(Node {
                flex_wrap: FlexWrap::Wrap,
                column_gap: Val::Px(8.0),
                row_gap: Val::Px(8.0),
                ..default()
            })
            .id();
        let tags: Vec<Entity> =
            category.skills.iter().map(|skill| chip(commands, card, skill)).collect();
        commands.entity(chips).add_children(&tags);

        commands.entity(card).add_children(&[heading, chips]);
        items.push(card);
    }

    commands.entity(row).add_children(&items);
    commands.entity(root).add_children(&[title, row]);
    spawn_decor(commands, root, &SKILLS_DECOR, &SKILLS_DECOR_DRIFT, &mut rng);

    commands.entity(root).insert(RevealSection {
        recipe: &SKILLS_REVEAL,
        mirror: false,
        heading: vec![title],
        items,
    });
    root
}
