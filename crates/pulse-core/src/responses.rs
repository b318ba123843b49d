//! CLI response types returned as JSON by `pulse` commands.
//!
//! These structs define the shape of output for `pulse status`,
//! `pulse dashboard`, `pulse home`, and `pulse survey`. Simple one-field
//! responses stay local to their command handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Question, QuestionOption, Survey};
use crate::sections::Section;

/// Response from `pulse status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    pub username: Option<String>,
    pub organization_id: Option<String>,
    pub roles: Vec<String>,
    pub canonical_role: String,
    pub manager: bool,
    pub landing_path: String,
    pub note: Option<String>,
}

/// One dashboard section entry, id plus display title.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionInfo {
    pub id: String,
    pub title: String,
}

impl From<Section> for SectionInfo {
    fn from(section: Section) -> Self {
        Self {
            id: section.id().to_string(),
            title: section.title().to_string(),
        }
    }
}

/// One overview stat card.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub description: String,
}

/// Per-collection load outcome: counts for loaded collections, `None` for
/// collections outside the role's load plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionCounts {
    pub organization: Option<String>,
    pub surveys: usize,
    pub questions: usize,
    pub survey_responses: usize,
    pub departments: Option<usize>,
    pub teams: Option<usize>,
    pub users: Option<usize>,
    pub roles: Option<usize>,
    pub permissions: Option<usize>,
}

/// Response from `pulse dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    pub role: String,
    pub active_section: Section,
    pub sections: Vec<SectionInfo>,
    pub stats: Vec<StatCard>,
    pub loaded: CollectionCounts,
}

/// Response from `pulse home`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HomeResponse {
    pub username: String,
    pub surveys: Vec<Survey>,
    /// Load failure surfaced as a banner; the list renders empty.
    pub error: Option<String>,
}

/// One question with its answer options on the survey page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionView {
    pub question: Question,
    pub options: Vec<QuestionOption>,
}

/// Response from `pulse survey <id>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SurveyPageResponse {
    pub survey: Survey,
    pub questions: Vec<QuestionView>,
}
