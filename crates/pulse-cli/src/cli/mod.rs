use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pulse` binary.
#[derive(Debug, Parser)]
#[command(name = "pulse", version, about = "Pulse - survey administration client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::auth::AuthCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["pulse", "--format", "table", "--verbose", "home"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Home));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["pulse", "home", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Home));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["pulse", "--format", "xml", "home"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn auth_login_requires_email_and_password() {
        let parsed = Cli::try_parse_from(["pulse", "auth", "login", "--email", "a@b.com"]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from([
            "pulse", "auth", "login", "--email", "a@b.com", "--password", "secret1",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Login(_)
            }
        ));
    }

    #[test]
    fn survey_takes_a_positional_id() {
        let cli = Cli::try_parse_from(["pulse", "survey", "svy-1"]).expect("cli should parse");
        let Commands::Survey(args) = cli.command else {
            panic!("expected survey command");
        };
        assert_eq!(args.survey_id, "svy-1");
        assert!(args.submit.is_none());
    }

    #[test]
    fn dashboard_section_is_optional() {
        let cli = Cli::try_parse_from(["pulse", "dashboard", "--section", "teams"])
            .expect("cli should parse");
        let Commands::Dashboard(args) = cli.command else {
            panic!("expected dashboard command");
        };
        assert_eq!(args.section.as_deref(), Some("teams"));
    }
}
