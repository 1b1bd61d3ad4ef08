//! Display-ready view model
//!
//! Everything the page renders, fully derived before any markup is built.
//! Fields sourced from the fetched worker are resolved in `assemble`; fixed
//! reference content comes in through the `SectionSource` trait.

/// One entry in the three-stat strip under the avatar.
#[derive(Debug, Clone)]
pub struct Stat {
    pub icon: String,
    pub label: String,
    pub value: String,
}

/// A labeled value in a two-column attribute grid.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub label: String,
    pub value: String,
}

/// An icon-led entry in the Education section.
#[derive(Debug, Clone)]
pub struct EducationEntry {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Period {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone)]
pub struct ExperienceDetails {
    pub employer_nationality: String,
    pub size_of_home: String,
    pub district: String,
    pub household_size: u32,
    pub language_spoken: String,
    pub reason_for_leaving: String,
}

/// A duty badge inside a work experience entry. The optional age range
/// renders as an "AGE x-y" sub-label.
#[derive(Debug, Clone)]
pub struct MainDuty {
    pub icon: String,
    pub name: String,
    pub age_range: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WorkExperience {
    pub icon: String,
    pub position: String,
    pub location: String,
    pub period: Period,
    pub details: ExperienceDetails,
    pub main_duties: Vec<MainDuty>,
}

/// A caregiving category shown as one expandable panel. Either list may be
/// empty, in which case its block is omitted from the panel body.
#[derive(Debug, Clone)]
pub struct CaregivingCategory {
    pub category: String,
    pub has_cared_for: Vec<String>,
    pub experienced_in: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectationStatus {
    Satisfied,
    Unsatisfied,
}

#[derive(Debug, Clone)]
pub struct Expectation {
    pub label: String,
    pub status: ExpectationStatus,
}

/// A fixed-size card in the Main Skills grid.
#[derive(Debug, Clone)]
pub struct InfoCard {
    pub icon: String,
    pub title: String,
    pub subtitle: Option<String>,
}

/// Document head metadata. Derivation failures degrade to
/// [`PageMeta::fallback`], they never abort the render.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub preview_image: Option<String>,
}

impl PageMeta {
    pub fn fallback() -> Self {
        Self {
            title: "Worker Profile".to_string(),
            description: None,
            preview_image: None,
        }
    }
}

/// The fully-derived input to the presentation renderer.
#[derive(Debug, Clone)]
pub struct RenderModel {
    pub display_name: String,
    pub nationality_line: String,
    pub image_url: String,
    pub stats: Vec<Stat>,
    pub profile_attributes: Vec<Attribute>,
    pub family_background: Vec<Attribute>,
    pub education: Vec<EducationEntry>,
    pub languages: String,
    pub cooking: String,
    pub skill_cards: Vec<InfoCard>,
    pub work_history: Vec<WorkExperience>,
    pub expectations: Vec<Expectation>,
    pub caregiving: Vec<CaregivingCategory>,
}
