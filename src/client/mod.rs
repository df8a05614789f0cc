// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/client/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the Datapoints API client, located
// in the client subdirectory. It declares the api, error, and types
// submodules.
//
// Tree Location:
// - src/client/mod.rs (client module entry point)
// - Submodules: api, error, types

pub mod api;
pub mod error;
pub mod types;

pub use api::{Client, validate_response};
pub use error::ApiError;
pub use types::{ClientConfig, GroupData, GroupVars, Var};
