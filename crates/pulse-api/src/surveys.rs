//! Survey collection endpoints: surveys, questions, options, and survey
//! responses.

use reqwest::Method;

use pulse_core::entities::{Question, QuestionOption, Survey, SurveyResponseRecord};

use crate::error::ApiError;
use crate::http::check_response;
use crate::ApiClient;

impl ApiClient {
    /// `GET /surveys`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn surveys(&self) -> Result<Vec<Survey>, ApiError> {
        let resp = self.request(Method::GET, "/surveys").send().await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `GET /surveys/{id}` — the detail payload carries the assigned
    /// question ids.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn survey(&self, survey_id: &str) -> Result<Survey, ApiError> {
        let resp = self
            .request(Method::GET, &format!("/surveys/{survey_id}"))
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `GET /questions`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn questions(&self) -> Result<Vec<Question>, ApiError> {
        let resp = self.request(Method::GET, "/questions").send().await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `GET /questions/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn question(&self, question_id: &str) -> Result<Question, ApiError> {
        let resp = self
            .request(Method::GET, &format!("/questions/{question_id}"))
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `GET /options/byQuestion/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn options_by_question(
        &self,
        question_id: &str,
    ) -> Result<Vec<QuestionOption>, ApiError> {
        let resp = self
            .request(Method::GET, &format!("/options/byQuestion/{question_id}"))
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `GET /survey-response`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn survey_responses(&self) -> Result<Vec<SurveyResponseRecord>, ApiError> {
        let resp = self.request(Method::GET, "/survey-response").send().await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `POST /survey-response` — submit a response document. The document
    /// is passed through verbatim; its shape belongs to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn submit_survey_response(
        &self,
        response: &serde_json::Value,
    ) -> Result<(), ApiError> {
        let resp = self
            .request(Method::POST, "/survey-response")
            .json(response)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
