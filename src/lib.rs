// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.0.0
//
// This file serves as the main library entry point for the datapoints crate,
// located at the root of the source tree. It exports the API client and the
// formatting utilities.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: client, format

pub mod client;
pub mod format;

// Re-export commonly used types at the crate root for convenience
pub use crate::client::api::Client;
pub use crate::client::error::ApiError;
pub use crate::client::types::{ClientConfig, GroupData, GroupVars, Var};
pub use crate::format::{
    DurationOptions, FormatOptions, format_currency, format_duration, format_hashrate,
    format_number, format_percent,
};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.0.0: Initial library layout.
//   - Purpose: Establishes the library root, organizing the project into the
//     client and format modules.
//   - Features: Re-exports the client and formatter entry points and defines
//     a common Result type for the binary.
