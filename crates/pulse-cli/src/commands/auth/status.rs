use pulse_core::responses::AuthStatusResponse;
use pulse_core::roles::{canonical_role, is_manager};
use pulse_core::routes::landing_path;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.boot().await;

    let response = state.identity.as_ref().map_or_else(
        || AuthStatusResponse {
            authenticated: false,
            username: None,
            organization_id: None,
            roles: Vec::new(),
            canonical_role: canonical_role(None).to_string(),
            manager: false,
            landing_path: landing_path(None).to_string(),
            note: Some("no active session".into()),
        },
        |identity| AuthStatusResponse {
            authenticated: true,
            username: Some(identity.username.clone()),
            organization_id: identity.organization_id.clone(),
            roles: identity.roles.clone(),
            canonical_role: canonical_role(Some(identity)).to_string(),
            manager: is_manager(Some(identity)),
            landing_path: landing_path(Some(identity)).to_string(),
            note: None,
        },
    );
    output(&response, flags.format)
}
