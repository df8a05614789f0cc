// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/client/error.rs
// Version: 1.0.0
//
// This file defines the error type surfaced by the Datapoints API client,
// located in the client subdirectory.
//
// Tree Location:
// - src/client/error.rs (API error shapes)
// - Depends on: thiserror, reqwest

use thiserror::Error;

/// Errors surfaced by the Datapoints API client.
///
/// Exactly three shapes cross the request boundary: transport failures pass
/// through unchanged, malformed responses (empty body, non-200 status, or a
/// body that is not a JSON document) collapse to the fixed
/// `Invalid response from server.` message, and server-reported business
/// errors pass through verbatim. `Config` can only occur at construction.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or protocol failure from the HTTP layer, passed through.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Empty, non-200, or non-JSON response body.
    #[error("Invalid response from server.")]
    InvalidResponse,

    /// Error reported by the server in the response's `error` field.
    #[error("{0}")]
    Server(String),

    /// Invalid client configuration (missing key or secret).
    #[error("{0}")]
    Config(String),
}
