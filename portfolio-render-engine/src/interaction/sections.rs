//! Section geometry and the active-section tracker.

use bevy::prelude::*;
use constants::motion::TRACKER_LOOKAHEAD;
use constants::sections::{SECTION_ORDER, SectionId};

use crate::interaction::pointer::ViewportMetrics;
use crate::interaction::scroll::ScrollState;

/// Marks a section root and names it.
#[derive(Component, Debug, Clone, Copy)]
pub struct PageSection(pub SectionId);

/// One section's measured extent, in logical pixels. `top`/`bottom` are
/// viewport-relative (they move as the page scrolls); `offset_top`/`height`
/// are content-relative and stable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBand {
    pub top: f32,
    pub bottom: f32,
    pub offset_top: f32,
    pub height: f32,
}

/// Bands in document order, rebuilt each frame from the UI layout. Sections
/// that have not been laid out yet simply stay `None`.
#[derive(Resource, Default)]
pub struct SectionGeometry {
    bands: [Option<SectionBand>; SECTION_ORDER.len()],
}

impl SectionGeometry {
    pub fn band(&self, id: SectionId) -> Option<SectionBand> {
        SECTION_ORDER.iter().position(|s| *s == id).and_then(|index| self.bands[index])
    }

    pub fn set(&mut self, id: SectionId, band: SectionBand) {
        if let Some(index) = SECTION_ORDER.iter().position(|s| *s == id) {
            self.bands[index] = Some(band);
        }
    }

    pub fn clear(&mut self) {
        self.bands = Default::default();
    }

    /// Content-relative bottom of the last measured section.
    pub fn content_end(&self) -> f32 {
        self.bands
            .iter()
            .flatten()
            .map(|band| band.offset_top + band.height)
            .fold(0.0, f32::max)
    }
}

/// Measure every section from the laid-out UI and refresh the scroll bound.
pub fn measure_sections(
    mut geometry: ResMut<SectionGeometry>,
    mut scroll: ResMut<ScrollState>,
    metrics: Res<ViewportMetrics>,
    sections: Query<(&PageSection, &ComputedNode, &GlobalTransform)>,
) {
    geometry.clear();
    for (section, node, transform) in &sections {
        let to_logical = node.inverse_scale_factor();
        let size = node.size() * to_logical;
        let center = transform.translation().truncate() * to_logical;
        let top = center.y - size.y * 0.5;
        geometry.set(
            section.0,
            SectionBand {
                top,
                bottom: top + size.y,
                offset_top: top + scroll.offset,
                height: size.y,
            },
        );
    }
    scroll.max = (geometry.content_end() - metrics.size.y).max(0.0);
}

/// The section the nav highlights.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSection(pub SectionId);

impl Default for ActiveSection {
    fn default() -> Self {
        Self(SectionId::Hero)
    }
}

/// First section in document order whose content extent contains the probe
/// point `scroll_offset + lookahead`. No match leaves the current value.
pub fn resolve_active(
    geometry: &SectionGeometry,
    scroll_offset: f32,
    current: SectionId,
) -> SectionId {
    let probe = scroll_offset + TRACKER_LOOKAHEAD;
    for id in SECTION_ORDER {
        if let Some(band) = geometry.band(id) {
            if probe >= band.offset_top && probe < band.offset_top + band.height {
                return id;
            }
        }
    }
    current
}

pub fn update_tracker(
    geometry: Res<SectionGeometry>,
    scroll: Res<ScrollState>,
    mut active: ResMut<ActiveSection>,
) {
    let next = resolve_active(&geometry, scroll.offset, active.0);
    if next != active.0 {
        active.0 = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(heights: &[(SectionId, f32)]) -> SectionGeometry {
        let mut geometry = SectionGeometry::default();
        let mut offset = 0.0;
        for &(id, height) in heights {
            geometry.set(
                id,
                SectionBand { top: 0.0, bottom: height, offset_top: offset, height },
            );
            offset += height;
        }
        geometry
    }

    #[test]
    fn zero_scroll_resolves_the_hero() {
        let geometry = stacked(&[
            (SectionId::Hero, 900.0),
            (SectionId::About, 900.0),
            (SectionId::Experience, 900.0),
        ]);
        assert_eq!(resolve_active(&geometry, 0.0, SectionId::Contact), SectionId::Hero);
    }

    #[test]
    fn lookahead_flips_slightly_before_the_boundary() {
        let geometry = stacked(&[(SectionId::Hero, 900.0), (SectionId::About, 900.0)]);
        // Probe = 850 + 100 lands inside about even though hero still shows.
        assert_eq!(resolve_active(&geometry, 850.0, SectionId::Hero), SectionId::About);
        // Probe = 799 + 100 is still the hero's.
        assert_eq!(resolve_active(&geometry, 799.0, SectionId::Hero), SectionId::Hero);
    }

    #[test]
    fn no_match_keeps_the_previous_section() {
        let mut geometry = stacked(&[(SectionId::Hero, 500.0)]);
        geometry.set(
            SectionId::Projects,
            SectionBand { top: 0.0, bottom: 400.0, offset_top: 2000.0, height: 400.0 },
        );
        // Probe 1100 falls in the gap between the two bands.
        assert_eq!(resolve_active(&geometry, 1000.0, SectionId::Skills), SectionId::Skills);
    }

    #[test]
    fn missing_sections_are_skipped() {
        // Only two sections measured; the rest stay None.
        let geometry = stacked(&[(SectionId::Hero, 300.0), (SectionId::Contact, 300.0)]);
        assert_eq!(resolve_active(&geometry, 250.0, SectionId::Hero), SectionId::Contact);
    }

    #[test]
    fn first_match_in_document_order_wins() {
        let mut geometry = SectionGeometry::default();
        geometry.set(
            SectionId::Hero,
            SectionBand { top: 0.0, bottom: 500.0, offset_top: 0.0, height: 500.0 },
        );
        // Overlapping band later in the order never shadows the hero.
        geometry.set(
            SectionId::About,
            SectionBand { top: 0.0, bottom: 900.0, offset_top: 50.0, height: 850.0 },
        );
        assert_eq!(resolve_active(&geometry, 100.0, SectionId::Hero), SectionId::Hero);
    }

    #[test]
    fn content_end_spans_the_last_band() {
        let geometry = stacked(&[(SectionId::Hero, 900.0), (SectionId::About, 700.0)]);
        assert_eq!(geometry.content_end(), 1600.0);
    }
}
