//! Resolve an arbitrary client path against the route guard.

use pulse_core::routes;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::views::OpenArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Routing decisions are only valid once the session is initialized.
    let state = ctx.boot().await;
    let decision = routes::resolve(&args.path, state.identity.as_ref());
    output(&decision, flags.format)
}
