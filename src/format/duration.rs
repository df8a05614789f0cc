// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/format/duration.rs
// Version: 1.0.0
//
// This file implements duration formatting for the datapoints crate, located
// in the format subdirectory. It decomposes a second count into week, day,
// hour, minute, and second components and renders them as a compact string.
//
// Tree Location:
// - src/format/duration.rs (duration formatting)
// - Depends on: std

use crate::format::lang::{DEFAULT_LANG, LanguagePack};

const SECONDS_PER_WEEK: u64 = 604_800;
const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Per-call options for [`format_duration`].
#[derive(Debug, Clone, Copy)]
pub struct DurationOptions<'a> {
    /// Unit suffixes, default [`DEFAULT_LANG`].
    pub lang: &'a LanguagePack,
    /// Maximum output length; longer results drop trailing components.
    pub max_length: Option<usize>,
    /// Suppress the hours component (and everything finer).
    pub without_hours: bool,
    /// Suppress the minutes component (and the seconds component).
    pub without_minutes: bool,
    /// Suppress the seconds component.
    pub without_seconds: bool,
}

impl Default for DurationOptions<'_> {
    fn default() -> Self {
        Self {
            lang: &DEFAULT_LANG,
            max_length: None,
            without_hours: false,
            without_minutes: false,
            without_seconds: false,
        }
    }
}

/// Format a second count as `"1w 2d 3h 4m 5s"`, omitting zero components.
///
/// Suppression flags cascade from coarse to fine: `without_hours` implies
/// `without_minutes`, which implies `without_seconds`. When `max_length` is
/// set and the joined string is longer, trailing components are dropped one
/// at a time (seconds first, then minutes) until the result fits; the
/// weeks/days/hours slots are never dropped.
pub fn format_duration(total_seconds: u64, opts: &DurationOptions) -> String {
    let without_hours = opts.without_hours;
    let without_minutes = opts.without_minutes || without_hours;
    let without_seconds = opts.without_seconds || without_minutes;
    let suffixes = &opts.lang.duration;

    let mut slots: [Option<String>; 5] = Default::default();
    let mut remaining = total_seconds;

    let weeks = remaining / SECONDS_PER_WEEK;
    if weeks > 0 {
        slots[0] = Some(format!("{weeks}{}", suffixes.weeks));
    }
    remaining -= weeks * SECONDS_PER_WEEK;

    let days = remaining / SECONDS_PER_DAY;
    if days > 0 {
        slots[1] = Some(format!("{days}{}", suffixes.days));
    }
    remaining -= days * SECONDS_PER_DAY;

    let hours = remaining / SECONDS_PER_HOUR;
    if hours > 0 && !without_hours {
        slots[2] = Some(format!("{hours}{}", suffixes.hours));
    }
    remaining -= hours * SECONDS_PER_HOUR;

    let minutes = remaining / SECONDS_PER_MINUTE;
    if minutes > 0 && !without_minutes {
        slots[3] = Some(format!("{minutes}{}", suffixes.minutes));
    }

    // Seconds is the true remainder after hours; minutes is not consumed.
    let seconds = remaining - minutes * SECONDS_PER_MINUTE;
    if seconds > 0 && !without_seconds {
        slots[4] = Some(format!("{seconds}{}", suffixes.seconds));
    }

    let join = |upto: usize| {
        slots[..upto]
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut result = join(slots.len());
    if let Some(max_length) = opts.max_length {
        if result.len() > max_length {
            // Drop trailing slots until the result fits, never below the
            // weeks/days/hours granularity.
            for upto in (3..slots.len()).rev() {
                result = join(upto);
                if result.len() <= max_length {
                    break;
                }
            }
        }
    }
    result
}


// Changelog:
// - v1.0.0: Initial duration formatter implementation.
//   - Purpose: Renders second counts as week/day/hour/minute/second strings
//     with per-component suppression and length-driven truncation.
