//! Route table and guard.
//!
//! Mirrors the client's navigable surface: `/` is the public entry flow,
//! `/dashboard`, `/user-home`, and `/survey/:surveyId` are protected, and
//! anything else redirects to `/`. Guard decisions never error — an
//! unauthorized access is always a redirect.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::Identity;
use crate::roles::has_dashboard_redirect_rights;

pub const ENTRY_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const USER_HOME_PATH: &str = "/user-home";

/// A navigable route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "route")]
pub enum Route {
    /// Public entry flow (login / signup).
    Entry,
    Dashboard,
    UserHome,
    Survey { survey_id: String },
}

impl Route {
    /// Parse a path into a known route. Unknown paths return `None` and are
    /// handled by the catch-all redirect in [`resolve`].
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            ENTRY_PATH => Some(Self::Entry),
            DASHBOARD_PATH => Some(Self::Dashboard),
            USER_HOME_PATH => Some(Self::UserHome),
            _ => path
                .strip_prefix("/survey/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Self::Survey {
                    survey_id: id.to_string(),
                }),
        }
    }

    /// Whether the route requires an authenticated session.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        !matches!(self, Self::Entry)
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Entry => ENTRY_PATH.to_string(),
            Self::Dashboard => DASHBOARD_PATH.to_string(),
            Self::UserHome => USER_HOME_PATH.to_string(),
            Self::Survey { survey_id } => format!("/survey/{survey_id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of routing a path against the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "decision")]
pub enum RouteDecision {
    /// The session may view the route.
    Render { route: Route },
    /// Redirect elsewhere. `from` carries the originally requested path on
    /// an unauthenticated access attempt so a login flow could navigate
    /// back; nothing consumes it today.
    Redirect {
        to: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
    },
}

/// Post-authentication landing path.
///
/// `/dashboard` for the management tiers and the `ADMIN`/`admin` alias
/// (the admin alias qualifies here and only here), `/user-home` for
/// everyone else.
#[must_use]
pub fn landing_path(user: Option<&Identity>) -> &'static str {
    if has_dashboard_redirect_rights(user) {
        DASHBOARD_PATH
    } else {
        USER_HOME_PATH
    }
}

/// Route a requested path for the given session.
///
/// Must only be called once the session is initialized — routing before
/// the first auto-login resolves would flash the wrong view.
#[must_use]
pub fn resolve(path: &str, user: Option<&Identity>) -> RouteDecision {
    match Route::parse(path) {
        Some(Route::Entry) => {
            if user.is_some() {
                RouteDecision::Redirect {
                    to: landing_path(user).to_string(),
                    from: None,
                }
            } else {
                RouteDecision::Render {
                    route: Route::Entry,
                }
            }
        }
        Some(route) => {
            if user.is_some() {
                RouteDecision::Render { route }
            } else {
                RouteDecision::Redirect {
                    to: ENTRY_PATH.to_string(),
                    from: Some(path.to_string()),
                }
            }
        }
        // Catch-all: redirect home without capturing the bogus path.
        None => RouteDecision::Redirect {
            to: ENTRY_PATH.to_string(),
            from: None,
        },
    }
}
