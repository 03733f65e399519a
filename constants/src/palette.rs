//! Starfield colour palette.
//!
//! Each star takes one uniform draw to pick a band and a second to place it
//! within the band. Hue is stored in degrees, saturation and lightness in
//! the 0..1 range Bevy's `Color::hsl` expects.

pub struct PaletteBand {
    /// Band draws strictly below this cut fall into the band. The last band
    /// has a cut of 1.0 and catches everything that remains.
    pub cut: f32,
    /// Base hue in degrees plus the span covered as the shade draw runs 0..1.
    pub hue: (f32, f32),
    pub saturation: f32,
    /// Base lightness plus span, same convention as hue.
    pub lightness: (f32, f32),
}

/// Deep blues, violets, teals and a sprinkling of near-white stars.
pub const STARFIELD_BANDS: [PaletteBand; 4] = [
    PaletteBand { cut: 0.3, hue: (216.0, 36.0), saturation: 0.8, lightness: (0.4, 0.3) },
    PaletteBand { cut: 0.6, hue: (288.0, 54.0), saturation: 0.7, lightness: (0.5, 0.3) },
    PaletteBand { cut: 0.8, hue: (180.0, 36.0), saturation: 0.6, lightness: (0.6, 0.2) },
    PaletteBand { cut: 1.0, hue: (198.0, 18.0), saturation: 0.3, lightness: (0.8, 0.2) },
];

/// Star quad half-extent in world units: `shade * STAR_SIZE_SPAN + STAR_SIZE_MIN`.
pub const STAR_SIZE_MIN: f32 = 0.01;
pub const STAR_SIZE_SPAN: f32 = 0.03;

/// Resolve a star colour from its two uniform draws as `(hue, saturation, lightness)`.
pub fn starfield_color(band_draw: f32, shade_draw: f32) -> (f32, f32, f32) {
    let band = STARFIELD_BANDS
        .iter()
        .find(|band| band_draw < band.cut)
        .unwrap_or(&STARFIELD_BANDS[3]);
    (
        band.hue.0 + shade_draw * band.hue.1,
        band.saturation,
        band.lightness.0 + shade_draw * band.lightness.1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_select_the_next_band() {
        // 0.3 is outside the blue band, 0.2999.. still inside.
        assert_eq!(starfield_color(0.299, 0.0).1, 0.8);
        assert_eq!(starfield_color(0.3, 0.0).1, 0.7);
        assert_eq!(starfield_color(0.6, 0.0).1, 0.6);
        assert_eq!(starfield_color(0.8, 0.0).1, 0.3);
        assert_eq!(starfield_color(0.999, 0.0).1, 0.3);
    }

    #[test]
    fn shade_draw_spans_the_band() {
        let (hue_lo, _, light_lo) = starfield_color(0.0, 0.0);
        let (hue_hi, _, light_hi) = starfield_color(0.0, 1.0);
        assert_eq!(hue_lo, 216.0);
        assert_eq!(hue_hi, 252.0);
        assert_eq!(light_lo, 0.4);
        assert!((light_hi - 0.7).abs() < 1e-6);
    }

    #[test]
    fn draw_of_one_still_resolves() {
        let (hue, saturation, _) = starfield_color(1.0, 0.5);
        assert_eq!(saturation, 0.3);
        assert!((hue - 207.0).abs() < 1e-6);
    }
}
