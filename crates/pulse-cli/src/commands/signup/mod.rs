use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::signup::SignupCommands;
use crate::context::AppContext;
use crate::validate::FieldError;

pub mod join;
pub mod new_org;

/// Shared response shape for both signup paths. The two error slots stay
/// separate so an organization-creation failure and a registration
/// failure cannot clobber each other.
#[derive(Serialize)]
pub struct SignupResponse {
    pub authenticated: bool,
    pub username: Option<String>,
    pub organization_id: Option<String>,
    pub error_organization: Option<String>,
    pub error_signup: Option<String>,
    pub field_errors: Vec<FieldError>,
}

impl SignupResponse {
    pub fn validation_failed(field_errors: Vec<FieldError>) -> Self {
        Self {
            authenticated: false,
            username: None,
            organization_id: None,
            error_organization: None,
            error_signup: None,
            field_errors,
        }
    }
}

pub async fn handle(
    action: &SignupCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SignupCommands::NewOrg(args) => new_org::handle(args, ctx, flags).await,
        SignupCommands::Join(args) => join::handle(args, ctx, flags).await,
    }
}
