//! The `/dashboard` view: role-gated section composition plus the
//! role-dependent concurrent data loads.
//!
//! Loads are fired together and fail independently — a collection whose
//! fetch errors is logged and rendered empty; nothing blocks or rolls
//! back the others.

use std::future::Future;

use anyhow::anyhow;

use pulse_api::{ApiClient, ApiError};
use pulse_core::Identity;
use pulse_core::entities::{Organization, Survey};
use pulse_core::responses::{CollectionCounts, DashboardResponse, SectionInfo, StatCard};
use pulse_core::roles::{canonical_role, is_department_manager, is_team_manager};
use pulse_core::routes::{self, DASHBOARD_PATH};
use pulse_core::sections::{
    ALL_SECTIONS, Collection, Section, ensure_active_section, load_plan, visible_sections,
};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::views::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::ui_state;

pub async fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = ctx.boot().await;
    let Some(identity) = state.identity else {
        return output(&routes::resolve(DASHBOARD_PATH, None), flags.format);
    };

    // Explicit --section must name a real section; stale persisted state
    // degrades silently through the allowed-set fallback instead.
    let requested = match &args.section {
        Some(id) => Some(Section::parse(id).ok_or_else(|| {
            let known = ALL_SECTIONS.map(Section::id).join(", ");
            anyhow!("unknown section '{id}' (expected one of: {known})")
        })?),
        None => ui_state::load_active_section(),
    };
    let active = ensure_active_section(requested, Some(&identity));
    ui_state::save_active_section(active);

    let plan = load_plan(Some(&identity));
    let api = &ctx.api;
    let (
        organization,
        surveys,
        questions,
        survey_responses,
        departments,
        teams,
        users,
        roles,
        permissions,
    ) = tokio::join!(
        load_organization(api, identity.organization_id.as_deref()),
        absorb("surveys", api.surveys()),
        absorb("questions", api.questions()),
        absorb("survey responses", api.survey_responses()),
        maybe(
            plan.contains(&Collection::Departments),
            absorb("departments", api.departments()),
        ),
        maybe(
            plan.contains(&Collection::Teams),
            absorb("teams", api.teams()),
        ),
        maybe(
            plan.contains(&Collection::Users),
            absorb("users", api.users()),
        ),
        maybe(
            plan.contains(&Collection::Roles),
            absorb("roles", api.roles()),
        ),
        maybe(
            plan.contains(&Collection::Permissions),
            absorb("permissions", api.permissions()),
        ),
    );

    let stats = overview_stats(
        &identity,
        organization.as_ref(),
        &surveys,
        survey_responses.len(),
        departments.as_deref().map_or(0, <[_]>::len),
        teams.as_deref().map_or(0, <[_]>::len),
        users.as_deref().map_or(0, <[_]>::len),
    );

    let response = DashboardResponse {
        role: canonical_role(Some(&identity)).to_string(),
        active_section: active,
        sections: visible_sections(Some(&identity))
            .into_iter()
            .map(SectionInfo::from)
            .collect(),
        stats,
        loaded: CollectionCounts {
            organization: organization.and_then(|org| org.name),
            surveys: surveys.len(),
            questions: questions.len(),
            survey_responses: survey_responses.len(),
            departments: departments.as_ref().map(Vec::len),
            teams: teams.as_ref().map(Vec::len),
            users: users.as_ref().map(Vec::len),
            roles: roles.as_ref().map(Vec::len),
            permissions: permissions.as_ref().map(Vec::len),
        },
    };
    output(&response, flags.format)
}

/// Await a collection load, absorbing its failure into an empty result.
async fn absorb<T>(
    what: &str,
    load: impl Future<Output = Result<Vec<T>, ApiError>>,
) -> Vec<T> {
    match load.await {
        Ok(items) => items,
        Err(error) => {
            tracing::error!(%error, "failed to load {what}");
            Vec::new()
        }
    }
}

/// Run a load only when the role's plan includes its collection.
async fn maybe<T>(enabled: bool, load: impl Future<Output = Vec<T>>) -> Option<Vec<T>> {
    if enabled { Some(load.await) } else { None }
}

async fn load_organization(
    api: &ApiClient,
    organization_id: Option<&str>,
) -> Option<Organization> {
    let id = organization_id?;
    match api.organization(id).await {
        Ok(org) => Some(org),
        Err(error) => {
            tracing::error!(%error, "failed to load organization");
            None
        }
    }
}

fn overview_stats(
    identity: &Identity,
    organization: Option<&Organization>,
    surveys: &[Survey],
    responses: usize,
    departments: usize,
    teams: usize,
    users: usize,
) -> Vec<StatCard> {
    let org_name = organization
        .and_then(|org| org.name.clone())
        .unwrap_or_else(|| "-".to_string());
    let active_surveys = surveys.iter().filter(|s| s.is_active()).count();

    let organization_card = StatCard {
        title: "Organization".into(),
        value: org_name,
        description: "Your organization".into(),
    };
    let departments_card = StatCard {
        title: "Departments".into(),
        value: departments.to_string(),
        description: "In your organization".into(),
    };
    let teams_card = StatCard {
        title: "Teams".into(),
        value: teams.to_string(),
        description: "Active teams".into(),
    };
    let active_card = StatCard {
        title: "Active Surveys".into(),
        value: active_surveys.to_string(),
        description: "Currently running".into(),
    };
    let responses_card = StatCard {
        title: "Survey Responses".into(),
        value: responses.to_string(),
        description: "Total submissions".into(),
    };

    if is_department_manager(Some(identity)) {
        vec![
            organization_card,
            departments_card,
            teams_card,
            active_card,
            responses_card,
        ]
    } else if is_team_manager(Some(identity)) {
        vec![organization_card, teams_card, active_card, responses_card]
    } else {
        vec![
            organization_card,
            departments_card,
            teams_card,
            StatCard {
                title: "Total Users".into(),
                value: users.to_string(),
                description: "In your organization".into(),
            },
            active_card,
            responses_card,
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn identity_with_roles(roles: &[&str]) -> Identity {
        Identity {
            username: "test".into(),
            email: None,
            organization_id: Some("org-1".into()),
            roles: roles.iter().map(ToString::to_string).collect(),
            department_id: None,
            team_id: None,
        }
    }

    fn titles(stats: &[StatCard]) -> Vec<&str> {
        stats.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn department_manager_stats_skip_users() {
        let identity = identity_with_roles(&["DEPARTMENT MANAGER"]);
        let stats = overview_stats(&identity, None, &[], 0, 2, 3, 9);
        assert_eq!(
            titles(&stats),
            vec![
                "Organization",
                "Departments",
                "Teams",
                "Active Surveys",
                "Survey Responses"
            ]
        );
    }

    #[test]
    fn team_manager_stats_skip_departments_and_users() {
        let identity = identity_with_roles(&["TEAM MANAGER"]);
        let stats = overview_stats(&identity, None, &[], 0, 0, 3, 9);
        assert_eq!(
            titles(&stats),
            vec!["Organization", "Teams", "Active Surveys", "Survey Responses"]
        );
    }

    #[test]
    fn full_access_stats_include_user_totals() {
        let identity = identity_with_roles(&["ORGANIZATION MANAGER"]);
        let stats = overview_stats(&identity, None, &[], 4, 2, 3, 9);
        assert_eq!(
            titles(&stats),
            vec![
                "Organization",
                "Departments",
                "Teams",
                "Total Users",
                "Active Surveys",
                "Survey Responses"
            ]
        );
        assert_eq!(stats[3].value, "9");
        assert_eq!(stats[5].value, "4");
    }

    #[test]
    fn active_surveys_count_filters_by_status() {
        let identity = identity_with_roles(&["ORGANIZATION MANAGER"]);
        let surveys: Vec<Survey> = serde_json::from_str(
            r#"[{"status": "ACTIVE"}, {"status": "DRAFT"}, {"status": "ACTIVE"}]"#,
        )
        .expect("should deserialize");
        let stats = overview_stats(&identity, None, &surveys, 0, 0, 0, 0);
        let active = stats
            .iter()
            .find(|s| s.title == "Active Surveys")
            .expect("active surveys card");
        assert_eq!(active.value, "2");
    }
}
