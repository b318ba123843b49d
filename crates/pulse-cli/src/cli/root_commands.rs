use clap::Subcommand;

use crate::cli::subcommands::auth::AuthCommands;
use crate::cli::subcommands::signup::SignupCommands;
use crate::cli::subcommands::views::{DashboardArgs, OpenArgs, SurveyArgs};

/// All `pulse` commands. The view commands mirror the client's navigable
/// routes; `open` resolves an arbitrary path against the route guard.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Authentication: login, logout, session status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Signup flows: create a new organization or join an existing one.
    Signup {
        #[command(subcommand)]
        action: SignupCommands,
    },
    /// Role-gated administration dashboard (the `/dashboard` view).
    Dashboard(DashboardArgs),
    /// Survey list for regular users (the `/user-home` view).
    Home,
    /// One survey with its questions and options (the `/survey/:id` view).
    Survey(SurveyArgs),
    /// Resolve a client path against the route guard.
    Open(OpenArgs),
}
