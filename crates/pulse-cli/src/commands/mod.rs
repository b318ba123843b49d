use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod open;
pub mod signup;
pub mod survey;

pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(&action, ctx, flags).await,
        Commands::Signup { action } => signup::handle(&action, ctx, flags).await,
        Commands::Dashboard(args) => dashboard::handle(&args, ctx, flags).await,
        Commands::Home => home::handle(ctx, flags).await,
        Commands::Survey(args) => survey::handle(&args, ctx, flags).await,
        Commands::Open(args) => open::handle(&args, ctx, flags).await,
    }
}
