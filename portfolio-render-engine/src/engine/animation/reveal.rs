//! Scroll-driven section reveals.
//!
//! One dispatcher derives an inside/outside band state per section from the
//! measured geometry and hands out entrance and exit timelines. Sections are
//! primed with a paused timeline on spawn so their targets sit at the
//! from-pose until the entrance actually plays.

use bevy::math::curve::EaseFunction;
use bevy::prelude::*;
use constants::motion::{REVEAL_ENTER_FRAC, REVEAL_EXIT_FRAC, RevealRecipe, TweenSpec};

use crate::engine::animation::tween::{Channels, Timeline, Tween};
use crate::interaction::pointer::ViewportMetrics;
use crate::interaction::sections::{PageSection, SectionGeometry};

/// Reveal configuration of one section: its recipe plus the entities the
/// timelines animate. Mirrored sections replay the entrance every visit and
/// play their exit when they scroll out.
#[derive(Component)]
pub struct RevealSection {
    pub recipe: &'static RevealRecipe,
    pub mirror: bool,
    pub heading: Vec<Entity>,
    pub items: Vec<Entity>,
}

/// Armed/inside flag pair driven by the dispatcher.
#[derive(Component, Default)]
pub struct RevealGate {
    pub primed: bool,
    pub inside: bool,
}

/// A section counts as on-screen once its top edge rises above 80% of the
/// viewport and until its bottom edge rises above 20%.
pub fn band_inside(top: f32, bottom: f32, viewport_height: f32) -> bool {
    top <= viewport_height * REVEAL_ENTER_FRAC && bottom >= viewport_height * REVEAL_EXIT_FRAC
}

fn enter(spec: &TweenSpec) -> Channels {
    Channels {
        offset: Some((spec.offset_from, Vec2::ZERO)),
        scale: Some((spec.scale_from, Vec2::ONE)),
        alpha: Some((0.0, 1.0)),
    }
}

fn leave(drop: Vec2) -> Channels {
    Channels {
        offset: Some((Vec2::ZERO, drop)),
        scale: None,
        alpha: Some((1.0, 0.0)),
    }
}

/// Assemble a section's entrance: the heading first, then the children
/// staggered, starting `overlap` seconds before the heading settles.
pub fn build_entrance(section: &RevealSection) -> Timeline {
    let recipe = section.recipe;
    let mut timeline = Timeline::new();
    for (index, &target) in section.heading.iter().enumerate() {
        timeline.add(Tween {
            target,
            start: recipe.lead + recipe.heading.stagger * index as f32,
            duration: recipe.heading.duration,
            ease: recipe.heading.ease,
            channels: enter(&recipe.heading),
        });
    }
    let children_start = (timeline.length() - recipe.overlap).max(0.0);
    for (index, &target) in section.items.iter().enumerate() {
        timeline.add(Tween {
            target,
            start: children_start + recipe.children.stagger * index as f32,
            duration: recipe.children.duration,
            ease: recipe.children.ease,
            channels: enter(&recipe.children),
        });
    }
    timeline
}

/// Assemble a mirrored section's scroll-out. Leaving past the top plays the
/// drop upward, leaving past the bottom plays it downward.
pub fn build_exit(section: &RevealSection, upward: bool) -> Option<Timeline> {
    let exit = section.recipe.exit.as_ref()?;
    let drop = Vec2::new(0.0, if upward { -exit.drop } else { exit.drop });
    let mut timeline = Timeline::new();
    for &target in &section.heading {
        timeline.add(Tween {
            target,
            start: 0.0,
            duration: exit.duration,
            ease: EaseFunction::QuadraticIn,
            channels: leave(drop),
        });
    }
    for (index, &target) in section.items.iter().enumerate() {
        timeline.add(Tween {
            target,
            start: exit.stagger * index as f32,
            duration: exit.duration,
            ease: EaseFunction::QuadraticIn,
            channels: leave(drop),
        });
    }
    Some(timeline)
}

/// Give every fresh section a paused entrance so its targets hold the
/// from-pose until the dispatcher starts the real one.
pub fn prime_sections(
    mut commands: Commands,
    mut sections: Query<(Entity, &RevealSection, &mut RevealGate)>,
) {
    for (entity, section, mut gate) in &mut sections {
        if !gate.primed {
            commands.entity(entity).insert(build_entrance(section).paused());
            gate.primed = true;
        }
    }
}

/// Flip band states and hand out timelines on the transitions. Sections
/// without measured geometry are skipped.
pub fn reveal_dispatcher(
    mut commands: Commands,
    geometry: Res<SectionGeometry>,
    metrics: Res<ViewportMetrics>,
    mut sections: Query<(Entity, &PageSection, &RevealSection, &mut RevealGate)>,
) {
    let viewport_height = metrics.size.y;
    if viewport_height <= 0.0 {
        return;
    }
    for (entity, page_section, section, mut gate) in &mut sections {
        let Some(band) = geometry.band(page_section.0) else {
            continue;
        };
        let inside = band_inside(band.top, band.bottom, viewport_height);
        if inside && !gate.inside {
            commands.entity(entity).insert(build_entrance(section));
        } else if !inside && gate.inside && section.mirror {
            let upward = band.bottom < viewport_height * REVEAL_EXIT_FRAC;
            if let Some(exit) = build_exit(section, upward) {
                commands.entity(entity).insert(exit);
            }
        }
        gate.inside = inside;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::motion::{EDUCATION_REVEAL, HERO_REVEAL, SKILLS_REVEAL};

    fn section(recipe: &'static RevealRecipe, mirror: bool, items: usize) -> RevealSection {
        RevealSection {
            recipe,
            mirror,
            heading: vec![Entity::from_raw(1)],
            items: (0..items).map(|i| Entity::from_raw(10 + i as u32)).collect(),
        }
    }

    #[test]
    fn band_membership_matches_the_thresholds() {
        let vh = 1000.0;
        // Fully below the viewport: top edge under the 80% line.
        assert!(!band_inside(900.0, 1900.0, vh));
        // Top edge crossed 80%.
        assert!(band_inside(799.0, 1799.0, vh));
        // Scrolled through until the bottom edge crosses 20%.
        assert!(band_inside(-800.0, 200.0, vh));
        assert!(!band_inside(-810.0, 190.0, vh));
        // A tall section spanning the whole viewport stays inside.
        assert!(band_inside(-100.0, 1100.0, vh));
    }

    #[test]
    fn children_begin_before_the_heading_settles() {
        let section = section(&SKILLS_REVEAL, false, 3);
        let timeline = build_entrance(&section);
        // Heading runs 0.0..0.8; with overlap 0.4 the first child starts at 0.4.
        assert!((timeline.tweens[1].start - 0.4).abs() < 1e-6);
        assert!(timeline.tweens[1].start < timeline.tweens[0].start + timeline.tweens[0].duration);
        // Stagger 0.15 between children.
        assert!((timeline.tweens[2].start - 0.55).abs() < 1e-6);
        assert!((timeline.tweens[3].start - 0.7).abs() < 1e-6);
    }

    #[test]
    fn hero_lead_delays_the_whole_entrance() {
        let hero = RevealSection {
            recipe: &HERO_REVEAL,
            mirror: false,
            heading: vec![Entity::from_raw(1), Entity::from_raw(2)],
            items: vec![Entity::from_raw(3)],
        };
        let timeline = build_entrance(&hero);
        assert!((timeline.tweens[0].start - 1.0).abs() < 1e-6);
        // Second title line staggers 0.2 behind the first.
        assert!((timeline.tweens[1].start - 1.2).abs() < 1e-6);
        // Subtitle overlaps the heading by 0.6: (1.2 + 1.2) - 0.6.
        assert!((timeline.tweens[2].start - 1.8).abs() < 1e-6);
    }

    #[test]
    fn only_mirrored_sections_build_exits() {
        assert!(build_exit(&section(&SKILLS_REVEAL, false, 2), true).is_none());
        let exit = build_exit(&section(&EDUCATION_REVEAL, true, 2), true);
        assert!(exit.is_some());
    }

    #[test]
    fn exit_direction_follows_the_crossed_edge() {
        let section = section(&EDUCATION_REVEAL, true, 1);
        let upward = build_exit(&section, true).unwrap();
        let downward = build_exit(&section, false).unwrap();
        let up_pose = upward.tweens[0].sample(10.0);
        let down_pose = downward.tweens[0].sample(10.0);
        assert_eq!(up_pose.offset.y, -30.0);
        assert_eq!(down_pose.offset.y, 30.0);
        assert_eq!(up_pose.alpha, 0.0);
    }
}
