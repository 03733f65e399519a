//! The loading gate.
//!
//! A fullscreen overlay while the scene spawns behind it: a three-digit
//! counter runs 0 to 100 over 2.5 seconds through a quadratic in-out ease,
//! then the whole overlay fades for half a second and signals completion
//! exactly once. The progress core is plain state so the timing rules are
//! testable without an app.

use bevy::prelude::*;
use constants::content;
use constants::motion::{GATE_DURATION, GATE_EASE, GATE_FADE};

use crate::engine::animation::tween::eased;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GatePhase {
    Counting,
    Fading,
    Done,
}

/// One frame of gate output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateTick {
    /// Integer counter value, reported only when it changes.
    pub report: Option<u8>,
    /// Eased fraction in [0, 1], drives the bar fill.
    pub progress: f32,
    /// Overlay opacity factor, 1 while counting, 0 when done.
    pub fade: f32,
    /// True on exactly one tick per gate lifetime.
    pub completed: bool,
}

/// Pure progress core. Dropping it before completion cancels the run; no
/// signal can fire afterwards.
#[derive(Debug, Clone)]
pub struct GateProgress {
    elapsed: f32,
    reported: u8,
    phase: GatePhase,
}

impl GateProgress {
    pub fn new() -> Self {
        Self { elapsed: 0.0, reported: 0, phase: GatePhase::Counting }
    }

    pub fn advance(&mut self, dt: f32) -> GateTick {
        match self.phase {
            GatePhase::Counting => {
                self.elapsed += dt;
                let t = (self.elapsed / GATE_DURATION).min(1.0);
                let progress = eased(GATE_EASE, t);
                let value = (progress * 100.0).round() as u8;
                let report = (value != self.reported).then_some(value);
                self.reported = value;
                if self.elapsed >= GATE_DURATION {
                    self.phase = GatePhase::Fading;
                }
                GateTick { report, progress, fade: 1.0, completed: false }
            }
            GatePhase::Fading => {
                self.elapsed += dt;
                let t = ((self.elapsed - GATE_DURATION) / GATE_FADE).min(1.0);
                let fade = 1.0 - eased(GATE_EASE, t);
                let completed = t >= 1.0;
                if completed {
                    self.phase = GatePhase::Done;
                }
                GateTick { report: None, progress: 1.0, fade, completed }
            }
            GatePhase::Done => {
                GateTick { report: None, progress: 1.0, fade: 0.0, completed: false }
            }
        }
    }
}

impl Default for GateProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Component, Default)]
pub struct LoadingGate(pub GateProgress);

#[derive(Component)]
pub struct GateRoot;

#[derive(Component)]
pub struct GateBar;

#[derive(Component)]
pub struct GateCounter;

#[derive(Component)]
pub struct GateLabel;

/// Authored alpha of a gate child's background, rescaled by the fade.
#[derive(Component)]
pub struct GateTint(pub f32);

const GRID_STEP: f32 = 50.0;
const GRID_ALPHA: f32 = 0.06;

pub fn spawn_gate(commands: &mut Commands) {
    let mut children = Vec::new();

    // Faint 50px grid across the whole overlay; clipped at the edges.
    for i in 0..50 {
        children.push(
            commands
                .spawn((
                    GateTint(GRID_ALPHA),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(i as f32 * GRID_STEP),
                        top: Val::Px(0.0),
                        width: Val::Px(1.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(1.0, 1.0, 1.0, GRID_ALPHA)),
                ))
                .id(),
        );
    }
    for i in 0..30 {
        children.push(
            commands
                .spawn((
                    GateTint(GRID_ALPHA),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(0.0),
                        top: Val::Px(i as f32 * GRID_STEP),
                        width: Val::Percent(100.0),
                        height: Val::Px(1.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(1.0, 1.0, 1.0, GRID_ALPHA)),
                ))
                .id(),
        );
    }

    children.push(
        commands
            .spawn((
                GateCounter,
                Text::new("000"),
                TextFont { font_size: 60.0, ..default() },
                TextColor(Color::WHITE),
            ))
            .id(),
    );

    let fill = commands
        .spawn((
            GateBar,
            GateTint(1.0),
            Node { width: Val::Percent(0.0), height: Val::Percent(100.0), ..default() },
            BackgroundColor(Color::WHITE),
        ))
        .id();
    let track = commands
        .spawn((
            GateTint(0.2),
            Node { width: Val::Px(256.0), height: Val::Px(2.0), ..default() },
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.2)),
        ))
        .id();
    commands.entity(track).add_children(&[fill]);
    children.push(track);

    children.push(
        commands
            .spawn((
                GateLabel,
                Text::new(format!("{} {}", content::NAME_FIRST, content::NAME_LAST)),
                TextFont { font_size: 12.0, ..default() },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.4)),
            ))
            .id(),
    );

    commands
        .spawn((
            GateRoot,
            LoadingGate::default(),
            Name::new("Loading Gate"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(Color::BLACK),
            GlobalZIndex(50),
        ))
        .add_children(&children);
}

/// Advance the gate and mirror its output onto the overlay.
pub fn run_gate(
    time: Res<Time>,
    mut progress: ResMut<LoadingProgress>,
    mut gates: Query<&mut LoadingGate>,
    mut bars: Query<&mut Node, With<GateBar>>,
    mut counters: Query<(&mut Text, &mut TextColor), (With<GateCounter>, Without<GateLabel>)>,
    mut labels: Query<&mut TextColor, (With<GateLabel>, Without<GateCounter>)>,
    mut roots: Query<&mut BackgroundColor, (With<GateRoot>, Without<GateTint>)>,
    mut tints: Query<(&GateTint, &mut BackgroundColor), Without<GateRoot>>,
) {
    let Ok(mut gate) = gates.single_mut() else {
        return;
    };
    let tick = gate.0.advance(time.delta_secs());

    for mut node in &mut bars {
        node.width = Val::Percent(tick.progress * 100.0);
    }
    for (mut text, mut color) in &mut counters {
        if let Some(value) = tick.report {
            text.0 = format!("{value:03}");
        }
        color.0 = color.0.with_alpha(tick.fade);
    }
    for mut color in &mut labels {
        color.0 = color.0.with_alpha(0.4 * tick.fade);
    }
    for mut background in &mut roots {
        background.0 = background.0.with_alpha(tick.fade);
    }
    for (tint, mut background) in &mut tints {
        background.0 = background.0.with_alpha(tint.0 * tick.fade);
    }

    if tick.completed {
        info!("✓ Loading gate complete");
        progress.gate_finished = true;
    }
}

pub fn despawn_gate(mut commands: Commands, gates: Query<Entity, With<GateRoot>>) {
    for entity in &gates {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_reports_exactly_fifty() {
        let mut gate = GateProgress::new();
        let tick = gate.advance(1.25);
        assert_eq!(tick.report, Some(50));
        assert!((tick.progress - 0.5).abs() < 1e-6);
        assert_eq!(tick.fade, 1.0);
    }

    #[test]
    fn counter_reports_are_discrete_and_monotonic() {
        let mut gate = GateProgress::new();
        let mut seen = Vec::new();
        for _ in 0..500 {
            let tick = gate.advance(2.5 / 500.0 as f32);
            if let Some(value) = tick.report {
                seen.push(value);
            }
        }
        assert_eq!(seen.last(), Some(&100));
        // Strictly increasing: each integer reported at most once.
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut gate = GateProgress::new();
        let mut completions = 0;
        for _ in 0..400 {
            if gate.advance(0.01).completed {
                completions += 1;
            }
        }
        // 4 seconds covers counting plus fade with plenty to spare.
        assert_eq!(completions, 1);
    }

    #[test]
    fn fade_runs_after_the_count_and_reaches_zero() {
        let mut gate = GateProgress::new();
        gate.advance(2.5);
        let mid_fade = gate.advance(0.25);
        assert!(mid_fade.fade > 0.0 && mid_fade.fade < 1.0);
        assert_eq!(mid_fade.report, None);
        let end = gate.advance(0.25);
        assert_eq!(end.fade, 0.0);
        assert!(end.completed);
    }

    #[test]
    fn cancelled_gate_never_completes() {
        let mut gate = GateProgress::new();
        for _ in 0..20 {
            assert!(!gate.advance(0.1).completed);
        }
        // Dropped here, two seconds in: no completion was ever reported.
        drop(gate);
    }

    #[test]
    fn a_single_large_step_still_lands_on_one_hundred() {
        let mut gate = GateProgress::new();
        let tick = gate.advance(10.0);
        assert_eq!(tick.report, Some(100));
        assert_eq!(tick.progress, 1.0);
    }
}
