//! Projects section: five featured project cards with stack tags.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use constants::content::{PROJECT_ENTRIES, PROJECTS_TITLE};
use constants::motion::{PROJECTS_CARD_DRIFT, PROJECTS_DECOR, PROJECTS_DECOR_DRIFT, PROJECTS_REVEAL};
use constants::sections::SectionId;

use crate::engine::animation::ambient::{AmbientDrift, AmbientState};
use crate::engine::animation::reveal::RevealSection;
use crate::engine::animation::tween::{BaseAlpha, FadeGroup};
use crate::site::widgets::{card_node, chip, faded_text, reveal_card, section_root, section_title, spawn_decor};

pub fn spawn_projects(commands: &mut Commands) -> Entity {
    let root = section_root(commands, SectionId::Projects);
    let title = section_title(commands, PROJECTS_TITLE);
    let mut rng = SmallRng::seed_from_u64(7);

    let column = commands
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(24.0),
            width: Val::Percent(100.0),
            max_width: Val::Px(840.0),
            ..default()
        })
        .id();

    let mut items = Vec::new();
    for (index, project) in PROJECT_ENTRIES.iter().enumerate() {
        let mut node = card_node();
        node.width = Val::Percent(100.0);
        let card = reveal_card(commands, node);
        commands.entity(card).insert((
            AmbientDrift::draw(&PROJECTS_CARD_DRIFT, index, &mut rng),
            AmbientState::default(),
        ));

        let header = commands
            .spawn(Node {
                justify_content: JustifyContent::SpaceBetween,
                width: Val::Percent(100.0),
                column_gap: Val::Px(16.0),
                ..default()
            })
            .id();
        let category = faded_text(commands, card, project.category, 13.0, 0.6);
        let year = faded_text(commands, card, project.year, 13.0, 0.4);
        commands.entity(header).add_children(&[category, year]);

        let name = faded_text(commands, card, project.title, 20.0, 1.0);
        let description = faded_text(commands, card, project.description, 15.0, 0.65);

        let stack = commands
            .spawn(Node {
                flex_wrap: FlexWrap::Wrap,
                column_gap: Val::Px(8.0),
                row_gap: Val::Px(8.0),
                ..default()
            })
            .id();
        let tags: Vec<Entity> =
            project.stack.iter().map(|tech| chip(commands, card, tech)).collect();
        commands.entity(stack).add_children(&tags);

        let mut rows = vec![header, name, description, stack];
        if let Some(link) = project.link {
            let link = commands
                .spawn((
                    Text::new(link),
                    TextFont { font_size: 13.0, ..default() },
                    TextColor(Color::srgba(0.23, 0.51, 0.96, 0.8)),
                    FadeGroup(card),
                    BaseAlpha { text: Some(0.8), ..default() },
                ))
                .id();
            rows.push(link);
        }
        commands.entity(card).add_children(&rows);
        items.push(card);
    }

    commands.entity(column).add_children(&items);
    commands.entity(root).add_children(&[title, column]);
    spawn_decor(commands, root, &PROJECTS_DECOR, &PROJECTS_DECOR_DRIFT, &mut rng);

    commands.entity(root).insert(RevealSection {
        recipe: &PROJECTS_REVEAL,
        mirror: false,
        heading: vec![title],
        items,
    });
    root
}
