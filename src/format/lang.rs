// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/format/lang.rs
// Version: 1.0.0
//
// This file defines the language pack consumed by the formatting functions,
// located in the format subdirectory. It holds the duration suffixes and the
// descending scale tables used to pick human-readable magnitude suffixes.
//
// Tree Location:
// - src/format/lang.rs (suffix and scale table definitions)
// - Depends on: std

/// One row of a scale table: the smallest magnitude the suffix applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleEntry {
    pub threshold: f64,
    pub suffix: &'static str,
}

/// Unit suffixes appended to duration components.
#[derive(Debug, Clone, Copy)]
pub struct DurationSuffixes {
    pub seconds: &'static str,
    pub minutes: &'static str,
    pub hours: &'static str,
    pub days: &'static str,
    pub weeks: &'static str,
}

/// Localization bundle for the formatting functions.
///
/// Passed by reference into every call; [`DEFAULT_LANG`] is the built-in
/// instance and per-call overrides substitute a different reference rather
/// than mutating shared state. Scale tables must be sorted in strictly
/// descending threshold order.
#[derive(Debug, Clone, Copy)]
pub struct LanguagePack {
    pub duration: DurationSuffixes,
    pub number_scale: &'static [ScaleEntry],
    pub currency_scale: &'static [ScaleEntry],
}

/// SI magnitude suffixes, sorted in descending order.
pub const NUMBER_SCALE: &[ScaleEntry] = &[
    ScaleEntry { threshold: 1e24, suffix: "Y" },  // Yotta
    ScaleEntry { threshold: 1e21, suffix: "Z" },  // Zetta
    ScaleEntry { threshold: 1e18, suffix: "E" },  // Exa
    ScaleEntry { threshold: 1e15, suffix: "P" },  // Peta
    ScaleEntry { threshold: 1e12, suffix: "T" },  // Tera
    ScaleEntry { threshold: 1e9, suffix: "G" },   // Giga
    ScaleEntry { threshold: 1e6, suffix: "M" },   // Mega
    ScaleEntry { threshold: 1e3, suffix: "k" },   // kilo
    ScaleEntry { threshold: 1e0, suffix: "" },
    ScaleEntry { threshold: 1e-3, suffix: "m" },  // milli
    ScaleEntry { threshold: 1e-6, suffix: "u" },  // micro
    ScaleEntry { threshold: 1e-9, suffix: "n" },  // nano
    ScaleEntry { threshold: 1e-12, suffix: "p" }, // pico
    ScaleEntry { threshold: 1e-15, suffix: "f" }, // femto
    ScaleEntry { threshold: 1e-18, suffix: "a" }, // atto
    ScaleEntry { threshold: 1e-21, suffix: "z" }, // zepto
    ScaleEntry { threshold: 1e-24, suffix: "y" }, // yocto
];

/// Monetary magnitude suffixes, sorted in descending order.
pub const CURRENCY_SCALE: &[ScaleEntry] = &[
    ScaleEntry { threshold: 1e12, suffix: "T" }, // Trillion
    ScaleEntry { threshold: 1e9, suffix: "B" },  // Billion
    ScaleEntry { threshold: 1e6, suffix: "M" },  // Million
    ScaleEntry { threshold: 1e3, suffix: "k" },  // kilo
];

/// Built-in language pack used when no override is supplied.
pub static DEFAULT_LANG: LanguagePack = LanguagePack {
    duration: DurationSuffixes {
        seconds: "s",
        minutes: "m",
        hours: "h",
        days: "d",
        weeks: "w",
    },
    number_scale: NUMBER_SCALE,
    currency_scale: CURRENCY_SCALE,
};

// Changelog:
// - v1.0.0: Initial language pack definition.
//   - Purpose: Centralizes the suffix tables so number, currency, hashrate,
//     and duration formatting share one immutable localization source.
//   - Note: Tables are static data; overriding a pack never mutates the
//     built-in one.
