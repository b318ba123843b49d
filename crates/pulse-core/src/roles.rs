//! Role classification.
//!
//! Pure predicates over an optional [`Identity`]. Absence of data always
//! degrades to the least-privileged answer: `false` for predicates,
//! `"user"` for the canonical display role. Nothing here errors.
//!
//! Two distinct redirect predicates exist on purpose: [`is_manager`] covers
//! the three management tiers only, while [`has_dashboard_redirect_rights`]
//! additionally honors the `ADMIN`/`admin` alias. The backend grants
//! dashboard routing to admins without granting them a management tier, so
//! the two checks must not be unified.

use crate::identity::Identity;

pub const ORGANIZATION_MANAGER: &str = "ORGANIZATION MANAGER";
pub const DEPARTMENT_MANAGER: &str = "DEPARTMENT MANAGER";
pub const TEAM_MANAGER: &str = "TEAM MANAGER";

/// Default display role when no identity or no recognized role is present.
pub const DEFAULT_ROLE: &str = "user";

/// True iff the role set intersects the three management tiers.
#[must_use]
pub fn is_manager(user: Option<&Identity>) -> bool {
    user.is_some_and(|u| {
        u.roles.iter().any(|role| {
            role == ORGANIZATION_MANAGER || role == DEPARTMENT_MANAGER || role == TEAM_MANAGER
        })
    })
}

#[must_use]
pub fn is_organization_manager(user: Option<&Identity>) -> bool {
    user.is_some_and(|u| u.has_role(ORGANIZATION_MANAGER))
}

#[must_use]
pub fn is_department_manager(user: Option<&Identity>) -> bool {
    user.is_some_and(|u| u.has_role(DEPARTMENT_MANAGER))
}

#[must_use]
pub fn is_team_manager(user: Option<&Identity>) -> bool {
    user.is_some_and(|u| u.has_role(TEAM_MANAGER))
}

/// True iff the role set contains `ADMIN` or `admin`.
///
/// Both casings are checked independently — no case folding, so `Admin`
/// does not qualify.
#[must_use]
pub fn has_admin_role(user: Option<&Identity>) -> bool {
    user.is_some_and(|u| u.has_role("ADMIN") || u.has_role("admin"))
}

/// The top-level redirect predicate: management tier OR the admin alias.
///
/// Used by the `/` route redirect and [`crate::routes::landing_path`].
/// Deliberately wider than [`is_manager`]; see module docs.
#[must_use]
pub fn has_dashboard_redirect_rights(user: Option<&Identity>) -> bool {
    is_manager(user) || has_admin_role(user)
}

/// Alias of [`is_manager`], kept under the name the dashboard views use.
#[must_use]
pub fn should_redirect_to_dashboard(user: Option<&Identity>) -> bool {
    is_manager(user)
}

/// Highest-precedence role name for display.
///
/// Precedence: `ORGANIZATION MANAGER` > `DEPARTMENT MANAGER` >
/// `TEAM MANAGER` > the first element of the role set > `"user"` when the
/// set is empty or the identity absent.
#[must_use]
pub fn canonical_role(user: Option<&Identity>) -> &str {
    let Some(user) = user else {
        return DEFAULT_ROLE;
    };
    for tier in [ORGANIZATION_MANAGER, DEPARTMENT_MANAGER, TEAM_MANAGER] {
        if user.has_role(tier) {
            return tier;
        }
    }
    user.roles.first().map_or(DEFAULT_ROLE, String::as_str)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn identity_with_roles(roles: &[&str]) -> Identity {
        Identity {
            username: "test".into(),
            email: None,
            organization_id: None,
            roles: roles.iter().map(ToString::to_string).collect(),
            department_id: None,
            team_id: None,
        }
    }

    #[test]
    fn absent_identity_degrades_to_least_privilege() {
        assert!(!is_manager(None));
        assert!(!is_organization_manager(None));
        assert!(!is_department_manager(None));
        assert!(!is_team_manager(None));
        assert!(!has_admin_role(None));
        assert!(!has_dashboard_redirect_rights(None));
        assert_eq!(canonical_role(None), "user");
    }

    #[test]
    fn empty_role_set_is_base_user() {
        let user = identity_with_roles(&[]);
        assert!(!is_manager(Some(&user)));
        assert_eq!(canonical_role(Some(&user)), "user");
    }

    #[rstest]
    #[case(&["ORGANIZATION MANAGER"])]
    #[case(&["DEPARTMENT MANAGER"])]
    #[case(&["TEAM MANAGER"])]
    #[case(&["SOMETHING ELSE", "TEAM MANAGER"])]
    fn manager_tier_roles_classify_as_manager(#[case] roles: &[&str]) {
        let user = identity_with_roles(roles);
        assert!(is_manager(Some(&user)));
        assert!(should_redirect_to_dashboard(Some(&user)));
    }

    #[rstest]
    #[case(&[])]
    #[case(&["USER"])]
    #[case(&["organization manager"])]
    #[case(&["ADMIN"])]
    #[case(&["admin"])]
    fn non_tier_roles_do_not_classify_as_manager(#[case] roles: &[&str]) {
        let user = identity_with_roles(roles);
        assert!(!is_manager(Some(&user)));
    }

    #[test]
    fn tier_predicates_are_independent_booleans() {
        let user = identity_with_roles(&["DEPARTMENT MANAGER", "TEAM MANAGER"]);
        assert!(is_department_manager(Some(&user)));
        assert!(is_team_manager(Some(&user)));
        assert!(!is_organization_manager(Some(&user)));
    }

    #[test]
    fn organization_manager_wins_precedence_regardless_of_order() {
        let user =
            identity_with_roles(&["TEAM MANAGER", "ORGANIZATION MANAGER", "DEPARTMENT MANAGER"]);
        assert_eq!(canonical_role(Some(&user)), "ORGANIZATION MANAGER");
    }

    #[test]
    fn department_beats_team_in_precedence() {
        let user = identity_with_roles(&["TEAM MANAGER", "DEPARTMENT MANAGER"]);
        assert_eq!(canonical_role(Some(&user)), "DEPARTMENT MANAGER");
    }

    #[test]
    fn unrecognized_roles_fall_back_to_first_element() {
        let user = identity_with_roles(&["AUDITOR", "VIEWER"]);
        assert_eq!(canonical_role(Some(&user)), "AUDITOR");
    }

    #[rstest]
    #[case(&["ADMIN"], true)]
    #[case(&["admin"], true)]
    #[case(&["Admin"], false)]
    #[case(&["ADMINISTRATOR"], false)]
    fn admin_alias_checks_both_casings_without_folding(
        #[case] roles: &[&str],
        #[case] expected: bool,
    ) {
        let user = identity_with_roles(roles);
        assert_eq!(has_admin_role(Some(&user)), expected);
    }

    #[test]
    fn admin_alias_grants_redirect_rights_but_not_manager_tier() {
        let user = identity_with_roles(&["admin"]);
        assert!(has_dashboard_redirect_rights(Some(&user)));
        assert!(!is_manager(Some(&user)));
        assert!(!should_redirect_to_dashboard(Some(&user)));
    }
}
