use serde::Serialize;

use pulse_api::auth::LoginCredentials;
use pulse_core::roles::canonical_role;
use pulse_core::routes::landing_path;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::validate::{FieldError, validate_login};

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    username: Option<String>,
    canonical_role: Option<String>,
    landing_path: Option<String>,
    error: Option<String>,
    note: Option<String>,
}

#[derive(Serialize)]
struct ValidationFailedResponse {
    authenticated: bool,
    field_errors: Vec<FieldError>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = ctx.boot().await;

    // An authenticated session never sees the entry flow; mirror the `/`
    // redirect instead of re-submitting credentials.
    if let Some(identity) = &state.identity {
        return output(
            &AuthLoginResponse {
                authenticated: true,
                username: Some(identity.username.clone()),
                canonical_role: Some(canonical_role(Some(identity)).to_string()),
                landing_path: Some(landing_path(Some(identity)).to_string()),
                error: None,
                note: Some("already authenticated — log out first to switch accounts".into()),
            },
            flags.format,
        );
    }

    let field_errors = validate_login(&args.email, &args.password);
    if !field_errors.is_empty() {
        return output(
            &ValidationFailedResponse {
                authenticated: false,
                field_errors,
            },
            flags.format,
        );
    }

    ctx.store
        .login(&LoginCredentials {
            email: args.email.clone(),
            password: args.password.clone(),
        })
        .await;

    let state = ctx.store.snapshot();
    let response = state.identity.as_ref().map_or_else(
        || AuthLoginResponse {
            authenticated: false,
            username: None,
            canonical_role: None,
            landing_path: None,
            error: state.error_login.clone(),
            note: None,
        },
        |identity| AuthLoginResponse {
            authenticated: true,
            username: Some(identity.username.clone()),
            canonical_role: Some(canonical_role(Some(identity)).to_string()),
            landing_path: Some(landing_path(Some(identity)).to_string()),
            error: None,
            note: None,
        },
    );
    output(&response, flags.format)
}
