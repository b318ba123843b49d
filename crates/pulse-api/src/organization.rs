//! Organization collaborator endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use pulse_core::entities::Organization;

use crate::error::ApiError;
use crate::http::check_response;
use crate::ApiClient;

/// Body of `POST /organizations/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub organization_name: String,
    #[serde(rename = "type")]
    pub org_type: String,
}

/// Registration response. The backend returns the new organization's id
/// under either `id` or `_id` depending on the store behind it.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationCreated {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
}

impl OrganizationCreated {
    /// Whichever id field the backend populated.
    #[must_use]
    pub fn any_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.mongo_id.as_deref())
    }
}

impl ApiClient {
    /// `POST /organizations/register` — create an organization; the
    /// returned id chains into the new-org signup step.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn register_organization(
        &self,
        org: &NewOrganization,
    ) -> Result<OrganizationCreated, ApiError> {
        let resp = self
            .request(Method::POST, "/organizations/register")
            .json(org)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `GET /organizations/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn organization(&self, organization_id: &str) -> Result<Organization, ApiError> {
        let resp = self
            .request(Method::GET, &format!("/organizations/{organization_id}"))
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }
}
