//! Page assembly.
//!
//! Runs once on entering `Running`: builds the scrollable content column
//! with the seven sections in document order, then the fixed overlays that
//! sit outside the scroll flow.

use bevy::prelude::*;

use crate::interaction::cursor::spawn_cursor_overlay;
use crate::interaction::scroll::ScrollRoot;
use crate::site::{about, contact, education, experience, hero, nav, projects, skills};

pub fn spawn_page(mut commands: Commands) {
    let sections = [
        hero::spawn_hero(&mut commands),
        about::spawn_about(&mut commands),
        experience::spawn_experience(&mut commands),
        education::spawn_education(&mut commands),
        skills::spawn_skills(&mut commands),
        projects::spawn_projects(&mut commands),
        contact::spawn_contact(&mut commands),
    ];

    let root = commands
        .spawn((
            ScrollRoot,
            Name::new("Page"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                overflow: Overflow::scroll_y(),
                ..default()
            },
            ScrollPosition::default(),
        ))
        .id();
    commands.entity(root).add_children(&sections);

    nav::spawn_nav(&mut commands);
    spawn_cursor_overlay(&mut commands);
    info!("✓ Page spawned with {} sections", sections.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use constants::sections::{SECTION_ORDER, SectionId};

    use crate::engine::animation::reveal::RevealSection;
    use crate::interaction::cursor::{CursorDot, CursorRing, HeroTrail};
    use crate::interaction::sections::PageSection;
    use crate::site::nav::NavRoot;

    #[test]
    fn page_holds_every_section_in_document_order() {
        let mut app = App::new();
        app.world_mut().run_system_once(spawn_page).unwrap();

        let mut sections: Vec<(Entity, SectionId)> = app
            .world_mut()
            .query::<(Entity, &PageSection)>()
            .iter(app.world())
            .map(|(entity, section)| (entity, section.0))
            .collect();
        // Section roots are allocated in spawn order.
        sections.sort_by_key(|(entity, _)| *entity);
        let order: Vec<SectionId> = sections.iter().map(|(_, id)| *id).collect();
        assert_eq!(order, SECTION_ORDER.to_vec());
    }

    #[test]
    fn sections_parent_under_the_scroll_root() {
        let mut app = App::new();
        app.world_mut().run_system_once(spawn_page).unwrap();

        let root = app
            .world_mut()
            .query_filtered::<Entity, With<ScrollRoot>>()
            .single(app.world())
            .unwrap();
        let parents: Vec<Entity> = app
            .world_mut()
            .query_filtered::<&ChildOf, With<PageSection>>()
            .iter(app.world())
            .map(|child_of| child_of.parent())
            .collect();
        assert_eq!(parents.len(), SECTION_ORDER.len());
        assert!(parents.iter().all(|parent| *parent == root));
    }

    #[test]
    fn every_section_carries_a_reveal_recipe() {
        let mut app = App::new();
        app.world_mut().run_system_once(spawn_page).unwrap();
        let revealed = app
            .world_mut()
            .query_filtered::<(), (With<PageSection>, With<RevealSection>)>()
            .iter(app.world())
            .count();
        assert_eq!(revealed, SECTION_ORDER.len());
    }

    #[test]
    fn overlays_spawn_alongside_the_page() {
        let mut app = App::new();
        app.world_mut().run_system_once(spawn_page).unwrap();
        let world = app.world_mut();
        assert_eq!(world.query::<&NavRoot>().iter(world).count(), 1);
        assert_eq!(world.query::<&CursorDot>().iter(world).count(), 1);
        assert_eq!(world.query::<&CursorRing>().iter(world).count(), 1);
        assert_eq!(world.query::<&HeroTrail>().iter(world).count(), 1);
    }
}
