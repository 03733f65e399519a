//! Animation tuning.
//!
//! Every duration, distance, easing and stagger used by the loading gate,
//! the section reveals, the ambient drift layer, the cursor and the 3D
//! backdrop is collected here.

use bevy::math::Vec2;
use bevy::math::curve::EaseFunction;

// --- loading gate ---

/// Seconds the progress counter takes to run 0 to 100.
pub const GATE_DURATION: f32 = 2.5;
/// Seconds of fade once the counter lands on 100.
pub const GATE_FADE: f32 = 0.5;
/// Easing applied to both the counter and the progress bar fill. Quadratic
/// in-out puts the counter at exactly 50 halfway through.
pub const GATE_EASE: EaseFunction = EaseFunction::QuadraticInOut;

// --- scroll ---

/// Logical pixels one wheel line scrolls.
pub const SCROLL_LINE_PX: f32 = 40.0;
/// Exponential chase rate for the scroll offset, per second.
pub const SCROLL_CHASE_RATE: f32 = 10.0;
/// Seconds a nav-click glide takes to reach its section.
pub const GLIDE_DURATION: f32 = 0.8;
pub const GLIDE_EASE: EaseFunction = EaseFunction::QuadraticInOut;

// --- active-section tracker ---

/// Logical pixels added to the scroll offset before the band test, so the
/// highlight flips slightly before a section reaches the top.
pub const TRACKER_LOOKAHEAD: f32 = 100.0;

// --- section reveal bands ---

/// A section has entered once its top edge rises above this fraction of the
/// viewport height.
pub const REVEAL_ENTER_FRAC: f32 = 0.8;
/// A section has left once its bottom edge rises above this fraction.
pub const REVEAL_EXIT_FRAC: f32 = 0.2;

/// One animated property set: where a target starts relative to its resting
/// pose. Targets always end at the identity pose, fully opaque.
pub struct TweenSpec {
    /// Starting offset in logical pixels.
    pub offset_from: Vec2,
    /// Starting scale. Axis values below one stand in for the perspective
    /// tilts of the original design; a squashed axis unfolds as it lands.
    pub scale_from: Vec2,
    pub duration: f32,
    /// Seconds between successive targets. Zero animates them as one.
    pub stagger: f32,
    pub ease: EaseFunction,
}

/// Scroll-out animation for mirrored sections.
pub struct ExitSpec {
    /// Pixels the items travel while fading. Leaving past the top plays the
    /// drop upward, leaving past the bottom plays it downward.
    pub drop: f32,
    pub duration: f32,
    pub stagger: f32,
}

/// Full entrance recipe for one section.
pub struct RevealRecipe {
    /// Seconds between the section entering its band and the heading moving.
    pub lead: f32,
    pub heading: TweenSpec,
    pub children: TweenSpec,
    /// Seconds the child block starts before the heading finishes.
    pub overlap: f32,
    /// Mirrored sections replay their entrance on every visit and play this
    /// exit when they scroll out.
    pub exit: Option<ExitSpec>,
}

/// Seconds after the gate lifts before the hero entrance begins.
pub const HERO_LEAD: f32 = 1.0;
/// Seconds after the gate lifts before the nav bar flies in.
pub const NAV_LEAD: f32 = 0.5;
/// Nav fly-in: starts this many pixels above its slot.
pub const NAV_DROP_IN: f32 = -50.0;
pub const NAV_DROP_DURATION: f32 = 1.0;

pub const HERO_REVEAL: RevealRecipe = RevealRecipe {
    lead: HERO_LEAD,
    heading: TweenSpec {
        offset_from: Vec2::new(0.0, 100.0),
        scale_from: Vec2::new(1.0, 0.0),
        duration: 1.2,
        stagger: 0.2,
        ease: EaseFunction::CubicOut,
    },
    children: TweenSpec {
        offset_from: Vec2::new(0.0, 50.0),
        scale_from: Vec2::new(0.8, 0.8),
        duration: 0.8,
        stagger: 0.0,
        ease: EaseFunction::QuadraticOut,
    },
    overlap: 0.6,
    exit: None,
};

pub const ABOUT_REVEAL: RevealRecipe = RevealRecipe {
    lead: 0.0,
    heading: TweenSpec {
        offset_from: Vec2::new(0.0, 50.0),
        scale_from: Vec2::ONE,
        duration: 0.8,
        stagger: 0.0,
        ease: EaseFunction::QuadraticOut,
    },
    children: TweenSpec {
        offset_from: Vec2::new(0.0, 30.0),
        scale_from: Vec2::ONE,
        duration: 0.6,
        stagger: 0.1,
        ease: EaseFunction::QuadraticOut,
    },
    overlap: 0.4,
    exit: None,
};

pub const EXPERIENCE_REVEAL: RevealRecipe = RevealRecipe {
    lead: 0.0,
    heading: TweenSpec {
        offset_from: Vec2::new(0.0, 50.0),
        scale_from: Vec2::new(1.0, 0.7),
        duration: 0.8,
        stagger: 0.0,
        ease: EaseFunction::QuadraticOut,
    },
    children: TweenSpec {
        offset_from: Vec2::new(-100.0, 0.0),
        scale_from: Vec2::new(0.7, 1.0),
        duration: 0.8,
        stagger: 0.2,
        ease: EaseFunction::QuadraticOut,
    },
    overlap: 0.4,
    exit: None,
};

pub const EDUCATION_REVEAL: RevealRecipe = RevealRecipe {
    lead: 0.0,
    heading: TweenSpec {
        offset_from: Vec2::new(0.0, 50.0),
        scale_from: Vec2::new(1.0, 0.7),
        duration: 0.8,
        stagger: 0.0,
        ease: EaseFunction::CubicOut,
    },
    children: TweenSpec {
        offset_from: Vec2::new(-50.0, 0.0),
        scale_from: Vec2::new(0.7, 1.0),
        duration: 0.8,
        stagger: 0.2,
        ease: EaseFunction::CubicOut,
    },
    overlap: 0.4,
    exit: Some(ExitSpec { drop: 30.0, duration: 0.4, stagger: 0.05 }),
};

pub const SKILLS_REVEAL: RevealRecipe = RevealRecipe {
    lead: 0.0,
    heading: TweenSpec {
        offset_from: Vec2::new(0.0, 50.0),
        scale_from: Vec2::new(0.8, 0.8),
        duration: 0.8,
        stagger: 0.0,
        ease: EaseFunction::QuadraticOut,
    },
    children: TweenSpec {
        offset_from: Vec2::new(0.0, 30.0),
        scale_from: Vec2::new(1.0, 0.7),
        duration: 0.6,
        stagger: 0.15,
        ease: EaseFunction::QuadraticOut,
    },
    overlap: 0.4,
    exit: None,
};

pub const PROJECTS_REVEAL: RevealRecipe = RevealRecipe {
    lead: 0.0,
    heading: TweenSpec {
        offset_from: Vec2::new(0.0, 50.0),
        scale_from: Vec2::new(1.0, 0.8),
        duration: 0.8,
        stagger: 0.0,
        ease: EaseFunction::QuadraticOut,
    },
    children: TweenSpec {
        offset_from: Vec2::new(0.0, 50.0),
        scale_from: Vec2::new(0.9, 0.9),
        duration: 0.8,
        stagger: 0.15,
        ease: EaseFunction::QuadraticOut,
    },
    overlap: 0.4,
    exit: None,
};

pub const CONTACT_REVEAL: RevealRecipe = RevealRecipe {
    lead: 0.0,
    heading: TweenSpec {
        offset_from: Vec2::new(0.0, 50.0),
        scale_from: Vec2::ONE,
        duration: 0.8,
        stagger: 0.0,
        ease: EaseFunction::QuadraticOut,
    },
    children: TweenSpec {
        offset_from: Vec2::new(0.0, 30.0),
        scale_from: Vec2::ONE,
        duration: 0.6,
        stagger: 0.1,
        ease: EaseFunction::QuadraticOut,
    },
    overlap: 0.4,
    exit: None,
};

// --- ambient drift ---

/// Randomisation bounds for one family of drifting elements. Amplitudes are
/// maxima; each element draws its own signed amplitude, full-cycle period
/// and spin inside these bounds.
pub struct DriftRange {
    /// Maximum offset amplitude per axis, logical pixels.
    pub amp: Vec2,
    /// Maximum spin amplitude in degrees.
    pub spin_deg: f32,
    /// Full there-and-back cycle length bounds in seconds.
    pub period: (f32, f32),
    /// Phase offset between successive elements, seconds.
    pub stagger: f32,
}

pub const HERO_TITLE_DRIFT: DriftRange =
    DriftRange { amp: Vec2::new(0.0, 5.0), spin_deg: 0.0, period: (8.0, 8.0), stagger: 0.0 };

pub const HERO_DECOR_DRIFT: DriftRange =
    DriftRange { amp: Vec2::new(10.0, 20.0), spin_deg: 15.0, period: (6.0, 12.0), stagger: 0.2 };

pub const EXPERIENCE_DECOR_DRIFT: DriftRange =
    DriftRange { amp: Vec2::new(20.0, 30.0), spin_deg: 180.0, period: (8.0, 16.0), stagger: 0.3 };

pub const SKILLS_DECOR_DRIFT: DriftRange =
    DriftRange { amp: Vec2::new(30.0, 50.0), spin_deg: 360.0, period: (10.0, 20.0), stagger: 0.2 };

pub const SKILLS_CARD_DRIFT: DriftRange =
    DriftRange { amp: Vec2::new(0.0, 8.0), spin_deg: 0.0, period: (6.0, 12.0), stagger: 0.3 };

pub const PROJECTS_DECOR_DRIFT: DriftRange =
    DriftRange { amp: Vec2::new(20.0, 40.0), spin_deg: 180.0, period: (12.0, 24.0), stagger: 0.4 };

pub const PROJECTS_CARD_DRIFT: DriftRange =
    DriftRange { amp: Vec2::new(0.0, 10.0), spin_deg: 0.0, period: (8.0, 14.0), stagger: 0.2 };

// --- decorative shapes ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorKind {
    /// Filled circle.
    Dot,
    /// Circle outline.
    Ring,
    /// Square outline, pre-rotated 45 degrees.
    Square,
    /// Filled horizontal bar.
    Bar,
    /// Filled vertical line.
    Line,
}

/// One floating decorative shape inside a section.
pub struct DecorSpec {
    pub kind: DecorKind,
    /// Anchor as a percentage of the section, measured from its top-left.
    pub anchor: Vec2,
    /// Size in logical pixels.
    pub size: Vec2,
    /// Straight RGBA, white unless the section calls for accents.
    pub color: [f32; 4],
    /// Pointer parallax gain. Zero for shapes that ignore the pointer.
    pub parallax: Vec2,
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const BLUE: [f32; 3] = [0.23, 0.51, 0.96];
const GREEN: [f32; 3] = [0.13, 0.77, 0.37];
const PURPLE: [f32; 3] = [0.66, 0.33, 0.97];
const ORANGE: [f32; 3] = [0.98, 0.45, 0.09];
const TEAL: [f32; 3] = [0.08, 0.72, 0.65];
const RED: [f32; 3] = [0.94, 0.27, 0.27];

const fn tinted(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}

pub const HERO_DECOR: [DecorSpec; 6] = [
    DecorSpec {
        kind: DecorKind::Dot,
        anchor: Vec2::new(10.0, 20.0),
        size: Vec2::new(8.0, 8.0),
        color: tinted(WHITE, 0.2),
        parallax: Vec2::new(0.02, 0.02),
    },
    DecorSpec {
        kind: DecorKind::Dot,
        anchor: Vec2::new(80.0, 40.0),
        size: Vec2::new(4.0, 4.0),
        color: tinted(WHITE, 0.3),
        parallax: Vec2::new(-0.03, 0.03),
    },
    DecorSpec {
        kind: DecorKind::Square,
        anchor: Vec2::new(20.0, 60.0),
        size: Vec2::new(12.0, 12.0),
        color: tinted(WHITE, 0.2),
        parallax: Vec2::new(0.04, -0.02),
    },
    DecorSpec {
        kind: DecorKind::Ring,
        anchor: Vec2::new(60.0, 60.0),
        size: Vec2::new(8.0, 8.0),
        color: tinted(WHITE, 0.15),
        parallax: Vec2::new(-0.02, -0.03),
    },
    DecorSpec {
        kind: DecorKind::Line,
        anchor: Vec2::new(90.0, 38.0),
        size: Vec2::new(4.0, 32.0),
        color: tinted(WHITE, 0.2),
        parallax: Vec2::new(0.03, 0.04),
    },
    DecorSpec {
        kind: DecorKind::Bar,
        anchor: Vec2::new(40.0, 80.0),
        size: Vec2::new(16.0, 4.0),
        color: tinted(WHITE, 0.1),
        parallax: Vec2::new(-0.04, 0.02),
    },
];

pub const EXPERIENCE_DECOR: [DecorSpec; 5] = [
    DecorSpec {
        kind: DecorKind::Ring,
        anchor: Vec2::new(88.0, 10.0),
        size: Vec2::new(12.0, 12.0),
        color: tinted(WHITE, 0.1),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Dot,
        anchor: Vec2::new(5.0, 75.0),
        size: Vec2::new(8.0, 8.0),
        color: tinted(WHITE, 0.1),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Line,
        anchor: Vec2::new(10.0, 50.0),
        size: Vec2::new(4.0, 48.0),
        color: tinted(WHITE, 0.1),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Bar,
        anchor: Vec2::new(78.0, 90.0),
        size: Vec2::new(16.0, 4.0),
        color: tinted(WHITE, 0.05),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Square,
        anchor: Vec2::new(70.0, 35.0),
        size: Vec2::new(8.0, 8.0),
        color: tinted(WHITE, 0.1),
        parallax: Vec2::ZERO,
    },
];

pub const SKILLS_DECOR: [DecorSpec; 6] = [
    DecorSpec {
        kind: DecorKind::Dot,
        anchor: Vec2::new(5.0, 8.0),
        size: Vec2::new(8.0, 8.0),
        color: tinted(BLUE, 0.2),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Ring,
        anchor: Vec2::new(88.0, 33.0),
        size: Vec2::new(12.0, 12.0),
        color: tinted(GREEN, 0.2),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Dot,
        anchor: Vec2::new(25.0, 70.0),
        size: Vec2::new(4.0, 4.0),
        color: tinted(PURPLE, 0.3),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Square,
        anchor: Vec2::new(92.0, 65.0),
        size: Vec2::new(8.0, 8.0),
        color: tinted(ORANGE, 0.2),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Bar,
        anchor: Vec2::new(60.0, 78.0),
        size: Vec2::new(16.0, 4.0),
        color: tinted(TEAL, 0.2),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Line,
        anchor: Vec2::new(75.0, 15.0),
        size: Vec2::new(4.0, 24.0),
        color: tinted(RED, 0.2),
        parallax: Vec2::ZERO,
    },
];

pub const PROJECTS_DECOR: [DecorSpec; 5] = [
    DecorSpec {
        kind: DecorKind::Ring,
        anchor: Vec2::new(10.0, 12.0),
        size: Vec2::new(16.0, 16.0),
        color: tinted(BLUE, 0.2),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Dot,
        anchor: Vec2::new(88.0, 75.0),
        size: Vec2::new(12.0, 12.0),
        color: tinted(PURPLE, 0.1),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Line,
        anchor: Vec2::new(78.0, 45.0),
        size: Vec2::new(8.0, 32.0),
        color: tinted(GREEN, 0.2),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Bar,
        anchor: Vec2::new(22.0, 65.0),
        size: Vec2::new(24.0, 4.0),
        color: tinted(ORANGE, 0.2),
        parallax: Vec2::ZERO,
    },
    DecorSpec {
        kind: DecorKind::Square,
        anchor: Vec2::new(30.0, 28.0),
        size: Vec2::new(8.0, 8.0),
        color: tinted(TEAL, 0.2),
        parallax: Vec2::ZERO,
    },
];

// --- cursor ---

/// Viewport width at or below which the custom cursor hides.
pub const CURSOR_BREAKPOINT: f32 = 768.0;
/// Hero-band test in logical pixels: hidden while the hero's top edge is at
/// or above this line and its bottom edge at or below it.
pub const CURSOR_HERO_LINE: f32 = 100.0;
pub const CURSOR_DOT_SIZE: f32 = 8.0;
pub const CURSOR_RING_SIZE: f32 = 32.0;
pub const CURSOR_RING_HOVER_SIZE: f32 = 48.0;
pub const CURSOR_DOT_HOVER_SCALE: f32 = 1.5;
/// Exponential chase rates, per second. The dot snaps, the ring lags.
pub const CURSOR_DOT_RATE: f32 = 30.0;
pub const CURSOR_RING_RATE: f32 = 10.0;
/// Hero-only trailing glow.
pub const HERO_TRAIL_SIZE: f32 = 48.0;
pub const HERO_TRAIL_RATE: f32 = 30.0;

// --- pointer parallax ---

/// Hero title spans move opposite each other by this gain.
pub const TITLE_PARALLAX: Vec2 = Vec2::new(0.01, 0.01);
pub const SUBTITLE_PARALLAX: Vec2 = Vec2::new(0.005, 0.005);
pub const SCROLL_HINT_PARALLAX: Vec2 = Vec2::new(0.01, 0.01);

// --- 3D backdrop ---

pub const CAMERA_POSITION: [f32; 3] = [0.0, 2.0, 8.0];
pub const CAMERA_FOV_DEG: f32 = 60.0;

/// Linear fog band fading far geometry into the black clear colour.
pub const FOG_START: f32 = 8.0;
pub const FOG_END: f32 = 35.0;

/// Whole-backdrop sway: yaw follows time and pointer x, pitch breathes on a
/// sine and follows pointer y.
pub const GROUP_YAW_RATE: f32 = 0.1;
pub const GROUP_YAW_POINTER: f32 = 0.2;
pub const GROUP_PITCH_AMP: f32 = 0.1;
pub const GROUP_PITCH_FREQ: f32 = 0.2;
pub const GROUP_PITCH_POINTER: f32 = 0.1;

/// Starfield spin rates in radians per second, applied on x, y and z.
pub const STARFIELD_RATES: [f32; 3] = [0.03, 0.06, 0.018];
pub const STARFIELD_POINTER_GAIN: f32 = 0.02;
/// Starfield opacity pulse: base plus amplitude times `sin(t * freq)`.
pub const STARFIELD_OPACITY: (f32, f32, f32) = (0.7, 0.2, 0.5);

/// Ground grids scroll toward the camera and repeat every `GRID_SPAN` units.
pub const GRID_SCROLL_SPEED: f32 = 0.5;
pub const GRID_SPAN: f32 = 8.0;
pub const GRID_DROP: f32 = -8.0;
