use pulse_api::auth::JoinOrgSignup;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::signup::JoinArgs;
use crate::commands::signup::SignupResponse;
use crate::context::AppContext;
use crate::output::output;
use crate::validate::validate_join;

pub async fn handle(args: &JoinArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.boot().await;
    ctx.store.clear_auth_errors();

    let field_errors = validate_join(
        &args.name,
        &args.email,
        &args.password,
        &args.confirm_password,
        &args.invitation_code,
    );
    if !field_errors.is_empty() {
        return output(&SignupResponse::validation_failed(field_errors), flags.format);
    }

    ctx.store
        .register_for_existing_org(&JoinOrgSignup {
            username: args.name.clone(),
            email: args.email.clone(),
            password: args.password.clone(),
            invite_code: args.invitation_code.clone(),
        })
        .await;

    let state = ctx.store.snapshot();
    output(
        &SignupResponse {
            authenticated: state.is_authenticated(),
            username: state.identity.as_ref().map(|i| i.username.clone()),
            organization_id: state
                .identity
                .as_ref()
                .and_then(|i| i.organization_id.clone()),
            error_organization: None,
            error_signup: state.error_register_existing_org.clone(),
            field_errors: Vec::new(),
        },
        flags.format,
    )
}
