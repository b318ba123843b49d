use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthCommands;
use crate::context::AppContext;

pub mod login;
pub mod logout;
pub mod status;

pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags).await,
        AuthCommands::Status => status::handle(ctx, flags).await,
    }
}
