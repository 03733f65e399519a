//! Custom cursor overlay.
//!
//! Visibility and hover are computed into a small view-model resource; a
//! separate render system applies it to the overlay entities. The dot snaps
//! to the pointer, the ring trails it, and inside the hero band both give
//! way to a soft trailing glow.

use bevy::prelude::*;
use constants::motion::{
    CURSOR_BREAKPOINT, CURSOR_DOT_HOVER_SCALE, CURSOR_DOT_RATE, CURSOR_DOT_SIZE, CURSOR_HERO_LINE,
    CURSOR_RING_HOVER_SIZE, CURSOR_RING_RATE, CURSOR_RING_SIZE, HERO_TRAIL_RATE, HERO_TRAIL_SIZE,
};
use constants::sections::SectionId;

use crate::interaction::pointer::{PointerState, ViewportMetrics};
use crate::interaction::sections::SectionGeometry;

/// Declarative cursor state. Render systems read this and nothing else.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorVm {
    pub visible: bool,
    pub hover: bool,
    pub trail: bool,
}

fn hero_holds_the_pointer(hero_band: Option<(f32, f32)>) -> bool {
    matches!(hero_band, Some((top, bottom)) if top <= CURSOR_HERO_LINE && bottom >= CURSOR_HERO_LINE)
}

/// Dot and ring visibility: needs a pointer, a viewport above the
/// breakpoint, and the hero band scrolled away from the reference line.
pub fn cursor_visible(
    pointer_present: bool,
    viewport_width: f32,
    hero_band: Option<(f32, f32)>,
) -> bool {
    if !pointer_present || viewport_width <= CURSOR_BREAKPOINT {
        return false;
    }
    !hero_holds_the_pointer(hero_band)
}

/// The hero glow shows exactly while the hero band hides the dot and ring.
pub fn trail_visible(pointer_present: bool, hero_band: Option<(f32, f32)>) -> bool {
    pointer_present && hero_holds_the_pointer(hero_band)
}

#[derive(Component)]
pub struct CursorDot;

#[derive(Component)]
pub struct CursorRing {
    pub size: f32,
}

#[derive(Component)]
pub struct HeroTrail;

/// Exponential chase toward the pointer. Higher rates snap, lower rates lag.
#[derive(Component)]
pub struct Follower {
    pub rate: f32,
    pub pos: Vec2,
}

pub fn spawn_cursor_overlay(commands: &mut Commands) {
    let dot = commands
        .spawn((
            CursorDot,
            Follower { rate: CURSOR_DOT_RATE, pos: Vec2::ZERO },
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(CURSOR_DOT_SIZE),
                height: Val::Px(CURSOR_DOT_SIZE),
                ..default()
            },
            BackgroundColor(Color::WHITE),
            BorderRadius::MAX,
            Visibility::Hidden,
        ))
        .id();
    let ring = commands
        .spawn((
            CursorRing { size: CURSOR_RING_SIZE },
            Follower { rate: CURSOR_RING_RATE, pos: Vec2::ZERO },
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(CURSOR_RING_SIZE),
                height: Val::Px(CURSOR_RING_SIZE),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.3)),
            BorderRadius::MAX,
            Visibility::Hidden,
        ))
        .id();
    let trail = commands
        .spawn((
            HeroTrail,
            Follower { rate: HERO_TRAIL_RATE, pos: Vec2::ZERO },
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(HERO_TRAIL_SIZE),
                height: Val::Px(HERO_TRAIL_SIZE),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.08)),
            BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.2)),
            BorderRadius::MAX,
            Visibility::Hidden,
        ))
        .id();

    commands
        .spawn((
            Name::new("Cursor Overlay"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            GlobalZIndex(100),
        ))
        .add_children(&[trail, ring, dot]);
}

pub fn update_cursor_vm(
    mut vm: ResMut<CursorVm>,
    pointer: Res<PointerState>,
    metrics: Res<ViewportMetrics>,
    geometry: Res<SectionGeometry>,
    hovers: Query<&Interaction, With<Button>>,
) {
    let hero_band = geometry.band(SectionId::Hero).map(|band| (band.top, band.bottom));
    let present = pointer.viewport_pos.is_some();
    vm.visible = cursor_visible(present, metrics.size.x, hero_band);
    vm.trail = trail_visible(present, hero_band);
    vm.hover = hovers
        .iter()
        .any(|interaction| matches!(interaction, Interaction::Hovered | Interaction::Pressed));
}

pub fn drive_followers(
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut followers: Query<&mut Follower>,
) {
    let Some(target) = pointer.viewport_pos else {
        return;
    };
    for mut follower in &mut followers {
        let rate = (follower.rate * time.delta_secs()).min(1.0);
        follower.pos = follower.pos.lerp(target, rate);
    }
}

pub fn apply_cursor_vm(
    vm: Res<CursorVm>,
    time: Res<Time>,
    mut dots: Query<
        (&Follower, &mut Node, &mut Transform, &mut Visibility),
        (With<CursorDot>, Without<CursorRing>, Without<HeroTrail>),
    >,
    mut rings: Query<
        (&Follower, &mut CursorRing, &mut Node, &mut BorderColor, &mut Visibility),
        (Without<CursorDot>, Without<HeroTrail>),
    >,
    mut trails: Query<
        (&Follower, &mut Node, &mut Visibility),
        (With<HeroTrail>, Without<CursorDot>, Without<CursorRing>),
    >,
) {
    let shown = |on: bool| if on { Visibility::Inherited } else { Visibility::Hidden };

    for (follower, mut node, mut transform, mut visibility) in &mut dots {
        node.left = Val::Px(follower.pos.x - CURSOR_DOT_SIZE * 0.5);
        node.top = Val::Px(follower.pos.y - CURSOR_DOT_SIZE * 0.5);
        let target = if vm.hover { CURSOR_DOT_HOVER_SCALE } else { 1.0 };
        let rate = (12.0 * time.delta_secs()).min(1.0);
        let scale = transform.scale.x + (target - transform.scale.x) * rate;
        transform.scale = Vec3::splat(scale);
        *visibility = shown(vm.visible);
    }

    for (follower, mut ring, mut node, mut border, mut visibility) in &mut rings {
        let target = if vm.hover { CURSOR_RING_HOVER_SIZE } else { CURSOR_RING_SIZE };
        let rate = (12.0 * time.delta_secs()).min(1.0);
        ring.size += (target - ring.size) * rate;
        node.width = Val::Px(ring.size);
        node.height = Val::Px(ring.size);
        node.left = Val::Px(follower.pos.x - ring.size * 0.5);
        node.top = Val::Px(follower.pos.y - ring.size * 0.5);
        border.0 = Color::srgba(1.0, 1.0, 1.0, if vm.hover { 0.6 } else { 0.3 });
        *visibility = shown(vm.visible);
    }

    for (follower, mut node, mut visibility) in &mut trails {
        node.left = Val::Px(follower.pos.x - HERO_TRAIL_SIZE * 0.5);
        node.top = Val::Px(follower.pos.y - HERO_TRAIL_SIZE * 0.5);
        *visibility = shown(vm.trail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f32 = 1440.0;

    #[test]
    fn hidden_without_a_pointer() {
        assert!(!cursor_visible(false, WIDE, None));
        assert!(!trail_visible(false, Some((0.0, 900.0))));
    }

    #[test]
    fn hidden_at_or_below_the_breakpoint() {
        assert!(!cursor_visible(true, 768.0, None));
        assert!(!cursor_visible(true, 480.0, None));
        assert!(cursor_visible(true, 769.0, None));
    }

    #[test]
    fn hero_band_on_the_reference_line_hides_the_cursor() {
        // Hero pinned at the top of the page straddles y=100.
        assert!(!cursor_visible(true, WIDE, Some((0.0, 900.0))));
        // Scrolled until the hero bottom passes the line.
        assert!(cursor_visible(true, WIDE, Some((-850.0, 50.0))));
        // Edge case: bottom exactly on the line still hides.
        assert!(!cursor_visible(true, WIDE, Some((-800.0, 100.0))));
        // No hero measured at all shows the cursor.
        assert!(cursor_visible(true, WIDE, None));
    }

    #[test]
    fn trail_shows_exactly_when_the_cursor_hides_in_hero() {
        let hero = Some((0.0, 900.0));
        assert!(trail_visible(true, hero));
        assert!(!cursor_visible(true, WIDE, hero));
        let scrolled = Some((-850.0, 50.0));
        assert!(!trail_visible(true, scrolled));
        assert!(cursor_visible(true, WIDE, scrolled));
    }
}
