// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/format/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the formatting utilities in the
// datapoints crate, located in the format subdirectory. It declares the
// language pack, number, and duration submodules.
//
// Tree Location:
// - src/format/mod.rs (format module entry point)
// - Submodules: duration, lang, number

pub mod duration;
pub mod lang;
pub mod number;

pub use duration::{DurationOptions, format_duration};
pub use lang::{CURRENCY_SCALE, DEFAULT_LANG, DurationSuffixes, LanguagePack, NUMBER_SCALE, ScaleEntry};
pub use number::{FormatOptions, format_currency, format_hashrate, format_number, format_percent};

// All functions in this module are pure and stateless; they are safe to call
// concurrently from any number of threads.
