//! About section: three expertise cards plus a compact studies card.

use bevy::prelude::*;

use constants::content::{ABOUT_CARDS, ABOUT_STUDIES, ABOUT_TITLE};
use constants::motion::ABOUT_REVEAL;
use constants::sections::SectionId;

use crate::engine::animation::reveal::RevealSection;
use crate::site::widgets::{card_node, faded_text, reveal_card, section_root, section_title};

pub fn spawn_about(commands: &mut Commands) -> Entity {
    let root = section_root(commands, SectionId::About);
    let title = section_title(commands, ABOUT_TITLE);

    let row = commands
        .spawn(Node {
            flex_wrap: FlexWrap::Wrap,
            justify_content: JustifyContent::Center,
            column_gap: Val::Px(24.0),
            row_gap: Val::Px(24.0),
            max_width: Val::Px(1120.0),
            ..default()
        })
        .id();

    let mut items = Vec::new();
    for card in &ABOUT_CARDS {
        let shell = reveal_card(commands, card_node());
        let heading = faded_text(commands, shell, card.title, 20.0, 1.0);
        let body = faded_text(commands, shell, card.body, 15.0, 0.6);
        commands.entity(shell).add_children(&[heading, body]);
        items.push(shell);
    }

    let studies = reveal_card(commands, card_node());
    let studies_heading = faded_text(commands, studies, "Studies", 20.0, 1.0);
    let mut study_rows = vec![studies_heading];
    for study in &ABOUT_STUDIES {
        let entry = commands
            .spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                margin: UiRect::top(Val::Px(8.0)),
                ..default()
            })
            .id();
        let degree = faded_text(commands, studies, study.degree, 15.0, 0.9);
        let school = faded_text(commands, studies, study.school, 13.0, 0.6);
        let note = faded_text(commands, studies, study.note, 13.0, 0.45);
        commands.entity(entry).add_children(&[degree, school, note]);
        study_rows.push(entry);
    }
    commands.entity(studies).add_children(&study_rows);
    items.push(studies);

    commands.entity(row).add_children(&items);
    commands.entity(root).add_children(&[title, row]);

    commands.entity(root).insert(RevealSection {
        recipe: &ABOUT_REVEAL,
        mirror: false,
        heading: vec![title],
        items,
    });
    root
}
