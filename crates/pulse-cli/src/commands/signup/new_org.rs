use pulse_api::auth::NewOrgSignup;
use pulse_api::organization::NewOrganization;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::signup::NewOrgArgs;
use crate::commands::signup::SignupResponse;
use crate::context::AppContext;
use crate::output::output;
use crate::validate::{validate_organization, validate_signup};

/// Two chained steps: create the organization, then register its first
/// account against the returned id. The registration implicitly
/// authenticates.
pub async fn handle(
    args: &NewOrgArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.boot().await;
    // Entering the signup flow clears errors left by other auth forms.
    ctx.store.clear_auth_errors();

    let mut field_errors = validate_organization(&args.organization_name);
    field_errors.extend(validate_signup(&args.name, &args.email, &args.password));
    if !field_errors.is_empty() {
        return output(&SignupResponse::validation_failed(field_errors), flags.format);
    }

    let created = match ctx
        .api
        .register_organization(&NewOrganization {
            organization_name: args.organization_name.clone(),
            org_type: args.organization_type.clone(),
        })
        .await
    {
        Ok(created) => created,
        Err(error) => {
            return output(
                &SignupResponse {
                    authenticated: false,
                    username: None,
                    organization_id: None,
                    error_organization: Some(error.user_message()),
                    error_signup: None,
                    field_errors: Vec::new(),
                },
                flags.format,
            );
        }
    };

    let Some(org_id) = created.any_id().map(ToString::to_string) else {
        return output(
            &SignupResponse {
                authenticated: false,
                username: None,
                organization_id: None,
                error_organization: Some("organization response carried no id".into()),
                error_signup: None,
                field_errors: Vec::new(),
            },
            flags.format,
        );
    };

    ctx.store
        .register_for_new_org(
            &org_id,
            &NewOrgSignup {
                name: args.name.clone(),
                email: args.email.clone(),
                password: args.password.clone(),
            },
        )
        .await;

    let state = ctx.store.snapshot();
    output(
        &SignupResponse {
            authenticated: state.is_authenticated(),
            username: state.identity.as_ref().map(|i| i.username.clone()),
            organization_id: Some(org_id),
            error_organization: None,
            error_signup: state.error_register_new_org.clone(),
            field_errors: Vec::new(),
        },
        flags.format,
    )
}
