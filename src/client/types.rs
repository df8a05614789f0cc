// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/client/types.rs
// Version: 1.0.0
//
// This file defines the configuration and payload types for the Datapoints
// API client, located in the client subdirectory. It includes the client
// configuration, the variable record, and the group payloads, along with
// their form-encoding conversions.
//
// Tree Location:
// - src/client/types.rs (client data structures)
// - Depends on: serde

use serde::{Deserialize, Serialize};

/// Connection settings for [`Client`](crate::client::api::Client).
///
/// `key` and `secret` are mandatory; construction fails without them.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL, without a trailing slash.
    pub url: String,
    /// API version path segment.
    pub version: String,
    /// API key, issued per account.
    pub key: String,
    /// API secret, issued per account.
    pub secret: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: "https://datapoints.global".to_string(),
            version: "1".to_string(),
            key: String::new(),
            secret: String::new(),
        }
    }
}

/// A named variable as stored by the server.
///
/// Saving with a `uuid` updates the existing variable; without one the
/// server creates a new variable and returns it under `newItem`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Var {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "isCurrency", skip_serializing_if = "Option::is_none")]
    pub is_currency: Option<bool>,
    #[serde(rename = "ispublic", skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    /// Display name of the account that owns the variable; server-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
}

impl Var {
    /// Form-encoded key/value pairs for a `var/save` request.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(uuid) = &self.uuid {
            pairs.push(("uuid", uuid.clone()));
        }
        pairs.push(("name", self.name.clone()));
        pairs.push(("value", self.value.clone()));
        if let Some(color) = &self.color {
            pairs.push(("color", color.clone()));
        }
        if let Some(is_currency) = self.is_currency {
            pairs.push(("isCurrency", is_currency.to_string()));
        }
        if let Some(is_public) = self.is_public {
            pairs.push(("ispublic", is_public.to_string()));
        }
        pairs
    }
}

/// A named group of variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub name: String,
    /// UUIDs of the member variables.
    #[serde(default)]
    pub datapoints: Vec<String>,
}

impl GroupData {
    /// Form-encoded key/value pairs for a `group/save` request. Member
    /// UUIDs encode as repeated `datapoints` keys.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(uuid) = &self.uuid {
            pairs.push(("uuid", uuid.clone()));
        }
        pairs.push(("name", self.name.clone()));
        for uuid in &self.datapoints {
            pairs.push(("datapoints", uuid.clone()));
        }
        pairs
    }
}

/// Membership change for `group/add-vars` and `group/remove-vars`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupVars {
    /// UUID of the group being modified.
    pub uuid: String,
    /// UUIDs of the variables to add or remove.
    #[serde(default)]
    pub datapoints: Vec<String>,
    /// Remove every variable from the group (remove-vars only).
    #[serde(default)]
    pub all: bool,
}

impl GroupVars {
    /// Form-encoded key/value pairs. `all` is only sent when set, matching
    /// the server's presence-based handling of the flag.
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("uuid", self.uuid.clone())];
        for uuid in &self.datapoints {
            pairs.push(("datapoints", uuid.clone()));
        }
        if self.all {
            pairs.push(("all", "true".to_string()));
        }
        pairs
    }
}
