use std::path::PathBuf;

use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Section to open (e.g. overview, surveys, teams). Falls back to the
    /// last opened section, then to the first your role allows.
    #[arg(long)]
    pub section: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SurveyArgs {
    /// Survey identifier.
    pub survey_id: String,
    /// Submit a response document (JSON file) for this survey.
    #[arg(long)]
    pub submit: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Client path to resolve (e.g. /dashboard, /survey/abc).
    pub path: String,
}
