// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/client/api.rs
// Version: 1.0.0
//
// This file implements the HTTP client for the Datapoints REST API, located
// in the client subdirectory. It issues key/secret-authenticated form-encoded
// POST requests for the variable and group endpoints and validates the JSON
// responses.
//
// Tree Location:
// - src/client/api.rs (API client logic)
// - Depends on: reqwest, serde_json, tracing

use serde_json::Value;
use tracing::debug;

use crate::client::error::ApiError;
use crate::client::types::{ClientConfig, GroupData, GroupVars, Var};

/// Client for the Datapoints REST API.
///
/// Every endpoint is a form-encoded POST to
/// `{url}/api/{version}/{key}/{secret}/{endpoint}` returning a JSON body.
/// The client holds no mutable state; one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    root: String,
}

impl Client {
    /// Create a new client. Fails when the key or secret is missing.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        if config.key.is_empty() {
            return Err(ApiError::Config(
                "Datapoints: please provide an API key".to_string(),
            ));
        }
        if config.secret.is_empty() {
            return Err(ApiError::Config(
                "Datapoints: please provide an API secret".to_string(),
            ));
        }
        let root = format!(
            "{}/api/{}/{}/{}/",
            config.url.trim_end_matches('/'),
            config.version,
            config.key,
            config.secret
        );
        Ok(Self {
            http: reqwest::Client::new(),
            root,
        })
    }

    /// Full URL for an endpoint, used for request dispatch and tests.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root, endpoint)
    }

    /// Fetch variables, optionally filtered by the given query fields.
    pub async fn get_vars(&self, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let pairs: Vec<(&str, String)> = query
            .iter()
            .map(|(k, v)| (*k, (*v).to_string()))
            .collect();
        self.post("get-vars", &pairs).await
    }

    /// Save a variable; updates in place when `var.uuid` is set.
    pub async fn save_var(&self, var: &Var) -> Result<Value, ApiError> {
        self.post("var/save", &var.form_pairs()).await
    }

    /// Delete the variable with the given UUID.
    pub async fn delete_var(&self, uuid: &str) -> Result<Value, ApiError> {
        self.post("var/delete", &[("uuid", uuid.to_string())]).await
    }

    /// Fetch groups, optionally filtered by the given query fields.
    pub async fn get_groups(&self, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let pairs: Vec<(&str, String)> = query
            .iter()
            .map(|(k, v)| (*k, (*v).to_string()))
            .collect();
        self.post("groups", &pairs).await
    }

    /// Save a group; updates in place when `group.uuid` is set.
    pub async fn save_group(&self, group: &GroupData) -> Result<Value, ApiError> {
        self.post("group/save", &group.form_pairs()).await
    }

    /// Add variables to a group.
    pub async fn add_vars_to_group(&self, change: &GroupVars) -> Result<Value, ApiError> {
        self.post("group/add-vars", &change.form_pairs()).await
    }

    /// Remove variables from a group; `change.all` clears the group.
    pub async fn remove_vars_from_group(&self, change: &GroupVars) -> Result<Value, ApiError> {
        self.post("group/remove-vars", &change.form_pairs()).await
    }

    /// Delete the group with the given UUID.
    pub async fn delete_group(&self, uuid: &str) -> Result<Value, ApiError> {
        self.post("group/delete", &[("uuid", uuid.to_string())])
            .await
    }

    async fn post(&self, endpoint: &str, form: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, fields = form.len(), "sending request");
        let response = self.http.post(&url).form(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, body = %body, "received response");
        validate_response(status, &body)
    }
}

/// Validate a raw response per the API contract.
///
/// An empty body, a non-200 status, or a body that does not parse as a JSON
/// document (or parses to a bare string) yields [`ApiError::InvalidResponse`].
/// A JSON body carrying an `error` field yields [`ApiError::Server`] with
/// that error passed through verbatim. Everything else is returned as parsed
/// JSON.
pub fn validate_response(status: u16, body: &str) -> Result<Value, ApiError> {
    if body.is_empty() {
        return Err(ApiError::InvalidResponse);
    }
    if status != 200 {
        return Err(ApiError::InvalidResponse);
    }
    let data: Value = serde_json::from_str(body).map_err(|_| ApiError::InvalidResponse)?;
    if data.is_string() {
        return Err(ApiError::InvalidResponse);
    }
    if let Some(error) = data.get("error") {
        let message = match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        };
        return Err(ApiError::Server(message));
    }
    Ok(data)
}

// Changelog:
// - v1.0.0: Initial API client implementation.
//   - Purpose: Covers the six variable/group endpoint families with a shared
//     form-encoded POST path and a pure response validator.
//   - Note: validate_response is kept free of I/O so every error branch is
//     unit-testable without a server.
