//! Directory collection endpoints: departments, teams, users, roles,
//! permissions. All plain list GETs; the dashboard fires the subset its
//! role's load plan names.

use reqwest::Method;

use pulse_core::entities::{Department, DirectoryUser, Permission, RoleDefinition, Team};

use crate::error::ApiError;
use crate::http::check_response;
use crate::ApiClient;

impl ApiClient {
    /// `GET /departments`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn departments(&self) -> Result<Vec<Department>, ApiError> {
        self.list("/departments").await
    }

    /// `GET /teams`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        self.list("/teams").await
    }

    /// `GET /users`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn users(&self) -> Result<Vec<DirectoryUser>, ApiError> {
        self.list("/users").await
    }

    /// `GET /roles`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn roles(&self) -> Result<Vec<RoleDefinition>, ApiError> {
        self.list("/roles").await
    }

    /// `GET /permissions`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-success status.
    pub async fn permissions(&self) -> Result<Vec<Permission>, ApiError> {
        self.list("/permissions").await
    }

    async fn list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let resp = self.request(Method::GET, path).send().await?;
        Ok(check_response(resp).await?.json().await?)
    }
}
