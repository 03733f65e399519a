//! Endless drift for decorative elements.
//!
//! Every drifting element owns randomized amplitudes, a full-cycle period
//! and a phase, drawn once at spawn. Evaluation is a pure sine of elapsed
//! time, so the layer carries no per-frame state and composes additively
//! with reveal and parallax offsets.

use bevy::prelude::*;
use constants::motion::DriftRange;
use rand::Rng;
use rand::rngs::SmallRng;

#[derive(Component, Debug, Clone)]
pub struct AmbientDrift {
    /// Signed amplitude per axis, logical pixels.
    pub amp: Vec2,
    /// Signed spin amplitude in degrees.
    pub spin_deg: f32,
    /// Full there-and-back cycle in seconds.
    pub period: f32,
    /// Seconds the cycle is shifted for this element.
    pub phase: f32,
}

impl AmbientDrift {
    /// Draw one element's drift from a section's range. `index` feeds the
    /// stagger so siblings move out of step.
    pub fn draw(range: &DriftRange, index: usize, rng: &mut SmallRng) -> Self {
        Self {
            amp: Vec2::new(signed(rng, range.amp.x), signed(rng, range.amp.y)),
            spin_deg: signed(rng, range.spin_deg),
            period: span(rng, range.period),
            phase: range.stagger * index as f32,
        }
    }
}

fn signed(rng: &mut SmallRng, max: f32) -> f32 {
    if max > 0.0 { rng.gen_range(-max..=max) } else { 0.0 }
}

fn span(rng: &mut SmallRng, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo { rng.gen_range(lo..=hi) } else { lo }
}

/// Current drift sample, consumed by the pose apply pass.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AmbientState {
    pub offset: Vec2,
    pub spin: f32,
}

pub fn drive_ambient(time: Res<Time>, mut drifters: Query<(&AmbientDrift, &mut AmbientState)>) {
    let t = time.elapsed_secs();
    for (drift, mut state) in &mut drifters {
        let wave = ((t - drift.phase) * std::f32::consts::TAU / drift.period).sin();
        state.offset = drift.amp * wave;
        state.spin = drift.spin_deg * wave;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn draws_stay_inside_their_range() {
        let range = DriftRange {
            amp: Vec2::new(10.0, 20.0),
            spin_deg: 15.0,
            period: (3.0, 6.0),
            stagger: 0.2,
        };
        let mut rng = SmallRng::seed_from_u64(7);
        for index in 0..64 {
            let drift = AmbientDrift::draw(&range, index, &mut rng);
            assert!(drift.amp.x.abs() <= 10.0);
            assert!(drift.amp.y.abs() <= 20.0);
            assert!(drift.spin_deg.abs() <= 15.0);
            assert!((3.0..=6.0).contains(&drift.period));
            assert!((drift.phase - 0.2 * index as f32).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_amplitude_axis_never_moves() {
        let range = DriftRange {
            amp: Vec2::new(0.0, 8.0),
            spin_deg: 0.0,
            period: (6.0, 12.0),
            stagger: 0.3,
        };
        let mut rng = SmallRng::seed_from_u64(11);
        let drift = AmbientDrift::draw(&range, 0, &mut rng);
        assert_eq!(drift.amp.x, 0.0);
        assert_eq!(drift.spin_deg, 0.0);
    }

    #[test]
    fn same_seed_same_drift() {
        let range = DriftRange {
            amp: Vec2::new(10.0, 20.0),
            spin_deg: 180.0,
            period: (8.0, 16.0),
            stagger: 0.3,
        };
        let a = AmbientDrift::draw(&range, 3, &mut SmallRng::seed_from_u64(42));
        let b = AmbientDrift::draw(&range, 3, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a.amp, b.amp);
        assert_eq!(a.period, b.period);
    }
}
