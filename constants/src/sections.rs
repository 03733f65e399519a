/// Identity of every page section, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Education,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Anchor slug used for navigation targets and logs.
    pub fn slug(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

/// Document order checked by the active-section tracker. The first section
/// whose band contains the probe point wins.
pub const SECTION_ORDER: [SectionId; 7] = [
    SectionId::Hero,
    SectionId::About,
    SectionId::Experience,
    SectionId::Education,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Contact,
];

/// One entry in the fixed navigation bar.
pub struct NavEntry {
    pub label: &'static str,
    pub target: SectionId,
}

/// The nav stays at six links; education is reachable by scrolling only.
pub const NAV_ENTRIES: [NavEntry; 6] = [
    NavEntry { label: "Home", target: SectionId::Hero },
    NavEntry { label: "About", target: SectionId::About },
    NavEntry { label: "Experience", target: SectionId::Experience },
    NavEntry { label: "Skills", target: SectionId::Skills },
    NavEntry { label: "Projects", target: SectionId::Projects },
    NavEntry { label: "Contact", target: SectionId::Contact },
];
