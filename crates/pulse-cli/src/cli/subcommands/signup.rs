use clap::{Args, Subcommand};

/// Signup flows.
#[derive(Clone, Debug, Subcommand)]
pub enum SignupCommands {
    /// Create a new organization, then register its first account.
    NewOrg(NewOrgArgs),
    /// Join an existing organization with an invitation code.
    Join(JoinArgs),
}

#[derive(Clone, Debug, Args)]
pub struct NewOrgArgs {
    /// Name of the organization to create.
    #[arg(long)]
    pub organization_name: String,
    /// Organization type label.
    #[arg(long, default_value = "")]
    pub organization_type: String,
    /// Your display name.
    #[arg(long)]
    pub name: String,
    /// Account email address.
    #[arg(long)]
    pub email: String,
    /// Account password (minimum 6 characters).
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct JoinArgs {
    /// Your display name.
    #[arg(long)]
    pub name: String,
    /// Account email address.
    #[arg(long)]
    pub email: String,
    /// Account password (minimum 6 characters).
    #[arg(long)]
    pub password: String,
    /// Password confirmation; must match.
    #[arg(long)]
    pub confirm_password: String,
    /// Invitation code for the organization.
    #[arg(long)]
    pub invitation_code: String,
}
