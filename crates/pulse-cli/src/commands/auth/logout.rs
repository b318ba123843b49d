use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.boot().await;
    // Locally authoritative: a failed backend call still lands logged out.
    ctx.store.logout().await;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
