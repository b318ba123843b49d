//! The `/survey/:surveyId` view: one survey, its assigned questions, and
//! their options. A failed load redirects back to the entry path instead
//! of surfacing an error, matching the view's navigation behavior.

use std::path::Path;

use anyhow::Context as _;
use serde::Serialize;

use pulse_api::{ApiClient, ApiError};
use pulse_core::responses::{QuestionView, SurveyPageResponse};
use pulse_core::routes::{self, ENTRY_PATH, Route, RouteDecision};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::views::SurveyArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SubmitResponse {
    submitted: bool,
    survey_id: String,
}

pub async fn handle(args: &SurveyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.boot().await;
    let path = Route::Survey {
        survey_id: args.survey_id.clone(),
    }
    .path();
    let Some(_identity) = state.identity else {
        return output(&routes::resolve(&path, None), flags.format);
    };

    if let Some(document) = &args.submit {
        return submit(args, ctx, flags, document).await;
    }

    match load_survey_page(&ctx.api, &args.survey_id).await {
        Ok(page) => output(&page, flags.format),
        Err(error) => {
            tracing::error!(%error, survey_id = %args.survey_id, "failed to load survey");
            output(
                &RouteDecision::Redirect {
                    to: ENTRY_PATH.to_string(),
                    from: None,
                },
                flags.format,
            )
        }
    }
}

async fn submit(
    args: &SurveyArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
    document: &Path,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(document)
        .with_context(|| format!("failed to read {}", document.display()))?;
    let response: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", document.display()))?;

    ctx.api
        .submit_survey_response(&response)
        .await
        .map_err(|error| anyhow::anyhow!(error.user_message()))?;

    output(
        &SubmitResponse {
            submitted: true,
            survey_id: args.survey_id.clone(),
        },
        flags.format,
    )
}

async fn load_survey_page(
    api: &ApiClient,
    survey_id: &str,
) -> Result<SurveyPageResponse, ApiError> {
    let survey = api.survey(survey_id).await?;

    let mut questions = Vec::with_capacity(survey.questions.len());
    for assigned in &survey.questions {
        let question = api.question(&assigned.question_id).await?;
        let options = api.options_by_question(&assigned.question_id).await?;
        questions.push(QuestionView { question, options });
    }

    Ok(SurveyPageResponse { survey, questions })
}
