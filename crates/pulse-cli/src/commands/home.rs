//! The `/user-home` view: the survey list for regular users.

use pulse_core::responses::HomeResponse;
use pulse_core::routes::{self, USER_HOME_PATH};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.boot().await;
    let Some(identity) = state.identity else {
        return output(&routes::resolve(USER_HOME_PATH, None), flags.format);
    };

    let (surveys, error) = match ctx.api.surveys().await {
        Ok(surveys) => (surveys, None),
        Err(error) => {
            tracing::error!(%error, "failed to load surveys");
            (Vec::new(), Some(error.user_message()))
        }
    };

    output(
        &HomeResponse {
            username: identity.username,
            surveys,
            error,
        },
        flags.format,
    )
}
