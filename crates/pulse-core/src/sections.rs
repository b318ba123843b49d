//! Dashboard view composition: section visibility, active-section rules,
//! and the role-dependent data-load plan.
//!
//! Department and team managers are granted fixed allow-lists of section
//! ids; every other role value — including an absent identity and
//! unrecognized role strings — receives the full unfiltered list. The
//! permissive default branch mirrors the backend's authorization matrix
//! and must stay in sync with [`load_plan`]: a section is never visible
//! for a role unless its backing collections are loaded for that role.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::roles::{is_department_manager, is_team_manager};

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// A top-level dashboard section, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Overview,
    Surveys,
    Questions,
    Users,
    Organizations,
    Departments,
    Teams,
    Roles,
    SurveyBank,
}

/// All sections in canonical display order.
pub const ALL_SECTIONS: [Section; 9] = [
    Section::Overview,
    Section::Surveys,
    Section::Questions,
    Section::Users,
    Section::Organizations,
    Section::Departments,
    Section::Teams,
    Section::Roles,
    Section::SurveyBank,
];

const DEPARTMENT_MANAGER_SECTIONS: [Section; 5] = [
    Section::Surveys,
    Section::Questions,
    Section::Departments,
    Section::Teams,
    Section::SurveyBank,
];

const TEAM_MANAGER_SECTIONS: [Section; 4] = [
    Section::Surveys,
    Section::Questions,
    Section::Teams,
    Section::SurveyBank,
];

impl Section {
    /// Stable section identifier, as used in persisted UI state and the
    /// `--section` argument.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Surveys => "surveys",
            Self::Questions => "questions",
            Self::Users => "users",
            Self::Organizations => "organizations",
            Self::Departments => "departments",
            Self::Teams => "teams",
            Self::Roles => "roles",
            Self::SurveyBank => "surveyBank",
        }
    }

    /// Human-readable section title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Surveys => "Surveys",
            Self::Questions => "Questions",
            Self::Users => "Users",
            Self::Organizations => "Organization",
            Self::Departments => "Departments",
            Self::Teams => "Teams",
            Self::Roles => "Roles & Permissions",
            Self::SurveyBank => "Survey Bank",
        }
    }

    /// Parse a section id.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        ALL_SECTIONS.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Sections visible to the given identity, in canonical order.
///
/// Department and team managers get their allow-lists; everyone else gets
/// everything. The department branch is checked first, so a user holding
/// both tiers composes as a department manager.
#[must_use]
pub fn visible_sections(user: Option<&Identity>) -> Vec<Section> {
    if is_department_manager(user) {
        ALL_SECTIONS
            .into_iter()
            .filter(|s| DEPARTMENT_MANAGER_SECTIONS.contains(s))
            .collect()
    } else if is_team_manager(user) {
        ALL_SECTIONS
            .into_iter()
            .filter(|s| TEAM_MANAGER_SECTIONS.contains(s))
            .collect()
    } else {
        ALL_SECTIONS.to_vec()
    }
}

/// Resolve the section to actually render.
///
/// When the requested section (stale persisted UI state, or a role change
/// mid-session) is outside the identity's allowed set, fall back to the
/// first allowed section, or `overview` if the allowed set is empty.
#[must_use]
pub fn ensure_active_section(requested: Option<Section>, user: Option<&Identity>) -> Section {
    let allowed = visible_sections(user);
    match requested {
        Some(section) if allowed.contains(&section) => section,
        _ => allowed.first().copied().unwrap_or(Section::Overview),
    }
}

// ---------------------------------------------------------------------------
// Collections & load plan
// ---------------------------------------------------------------------------

/// A remote collection fetched on dashboard mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Organization,
    Surveys,
    Questions,
    SurveyResponses,
    Departments,
    Teams,
    Users,
    Roles,
    Permissions,
}

/// Collections every role loads.
const COMMON_COLLECTIONS: [Collection; 4] = [
    Collection::Organization,
    Collection::Surveys,
    Collection::Questions,
    Collection::SurveyResponses,
];

/// The set of collections to fetch for the given identity's dashboard.
///
/// Mirrors [`visible_sections`] tier by tier; the invariant test below
/// keeps the two in sync.
#[must_use]
pub fn load_plan(user: Option<&Identity>) -> Vec<Collection> {
    let mut plan = COMMON_COLLECTIONS.to_vec();
    if is_department_manager(user) {
        plan.extend([Collection::Departments, Collection::Teams, Collection::Users]);
    } else if is_team_manager(user) {
        plan.extend([Collection::Teams, Collection::Users]);
    } else {
        plan.extend([
            Collection::Departments,
            Collection::Teams,
            Collection::Users,
            Collection::Roles,
            Collection::Permissions,
        ]);
    }
    plan
}

/// Collections a section reads from once rendered.
#[must_use]
pub const fn backing_collections(section: Section) -> &'static [Collection] {
    match section {
        Section::Overview => &[
            Collection::Organization,
            Collection::Surveys,
            Collection::SurveyResponses,
        ],
        Section::Surveys => &[Collection::Surveys],
        Section::Questions => &[Collection::Questions],
        Section::Users => &[Collection::Users],
        Section::Organizations => &[Collection::Organization],
        Section::Departments => &[Collection::Departments],
        Section::Teams => &[Collection::Teams],
        Section::Roles => &[Collection::Roles, Collection::Permissions],
        Section::SurveyBank => &[Collection::Surveys, Collection::Questions],
    }
}
