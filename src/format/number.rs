// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/format/number.rs
// Version: 1.0.0
//
// This file implements scale-based number formatting for the datapoints
// crate, located in the format subdirectory. It renders raw numbers with a
// magnitude suffix picked from a descending scale table, and provides the
// currency, hashrate, and percent wrappers built on top of it.
//
// Tree Location:
// - src/format/number.rs (scale formatter and policy wrappers)
// - Depends on: std

use crate::format::lang::{DEFAULT_LANG, LanguagePack};

/// Per-call options for the number-family formatters.
///
/// `prec` left unset falls back to the function-specific default: 3 decimal
/// digits for [`format_number`], [`format_currency`] and [`format_hashrate`],
/// 2 for [`format_percent`].
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions<'a> {
    /// Suffix and scale tables, default [`DEFAULT_LANG`].
    pub lang: &'a LanguagePack,
    /// Digits after the decimal point.
    pub prec: Option<u32>,
    /// Insert a space between the mantissa and the scale suffix. The space
    /// is emitted even when the suffix is empty so that wrappers appending
    /// their own unit (e.g. hashrate) stay separated from the number.
    pub spaced_suffix: bool,
    /// Currency symbol prefixed to [`format_currency`] output.
    pub symbol: Option<&'a str>,
    /// Unit appended by [`format_hashrate`] after the scale suffix.
    pub hash_suffix: &'a str,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        Self {
            lang: &DEFAULT_LANG,
            prec: None,
            spaced_suffix: false,
            symbol: None,
            hash_suffix: "H/s",
        }
    }
}

const DEFAULT_PREC: u32 = 3;

/// Format a number with a magnitude suffix from the plain scale table.
///
/// Values outside the table range (above the largest threshold or below the
/// smallest) render fixed-point with `prec` decimals and no suffix. Table
/// suffixes carry no embedded space; `spaced_suffix` inserts exactly one.
/// The sign of negative inputs is preserved. Non-finite inputs render
/// through their standard display form (`NaN`, `inf`) rather than raising.
pub fn format_number(number: f64, opts: &FormatOptions) -> String {
    scaled(number, opts, false)
}

/// Format a monetary amount with the currency scale table.
///
/// Amounts below the smallest currency threshold use a tiered fixed-point
/// policy instead of a suffix: below 0.000005 the shortest display form,
/// below 0.0005 eight decimals, below 0.05 five decimals, otherwise two.
/// There is no upper bound; huge amounts keep the largest suffix. When
/// `opts.symbol` is set it is prefixed with a single separating space.
pub fn format_currency(amount: f64, opts: &FormatOptions) -> String {
    let result = scaled(amount, opts, true);
    match opts.symbol {
        Some(symbol) => format!("{symbol} {result}"),
        None => result,
    }
}

/// Format a network hashrate, e.g. `1.5 MH/s`.
///
/// Forces a spaced suffix and appends `opts.hash_suffix` directly after the
/// scale suffix with no additional separator.
pub fn format_hashrate(rate: f64, opts: &FormatOptions) -> String {
    let spaced = FormatOptions {
        spaced_suffix: true,
        ..*opts
    };
    let mut result = scaled(rate, &spaced, false);
    result.push_str(opts.hash_suffix);
    result
}

/// Format a percentage, e.g. `33.45 %`.
///
/// The fractional part of the shortest decimal representation is truncated
/// (never rounded) to `prec` digits and dropped entirely when it parses to
/// zero. The ` %` suffix is always appended.
pub fn format_percent(value: f64, opts: &FormatOptions) -> String {
    let prec = opts.prec.unwrap_or(2) as usize;
    let repr = value.to_string();
    let mut result = match repr.split_once('.') {
        Some((int, frac)) => {
            let frac = &frac[..frac.len().min(prec)];
            if frac.parse::<u64>().map_or(false, |f| f != 0) {
                format!("{int}.{frac}")
            } else {
                int.to_string()
            }
        }
        None => repr,
    };
    result.push_str(" %");
    result
}

/// Shared scale search behind [`format_number`] and [`format_currency`].
fn scaled(number: f64, opts: &FormatOptions, currency: bool) -> String {
    let scale = if currency {
        opts.lang.currency_scale
    } else {
        opts.lang.number_scale
    };
    let prec = opts.prec.unwrap_or(DEFAULT_PREC) as usize;

    if !number.is_finite() {
        return number.to_string();
    }

    let n = number.abs();
    let largest = scale[0].threshold;
    let smallest = scale[scale.len() - 1].threshold;

    // Out of table range: fixed-point fallback, no suffix. The currency
    // table has no upper bound.
    if (!currency && n > largest) || n < smallest {
        let mut result = if currency {
            fixed_currency(number)
        } else {
            format!("{number:.prec$}")
        };
        if !result.is_empty() && opts.spaced_suffix {
            result.push(' ');
        }
        return result;
    }

    let pow = 10f64.powi(prec as i32);
    let mut mantissa = n;
    let mut chosen = scale.len() - 1;
    let mut prev = largest;
    for (i, entry) in scale.iter().enumerate() {
        if entry.threshold <= n {
            mantissa = (n * pow / entry.threshold).round() / pow;
            chosen = i;
            if i > 0 && mantissa == prev / entry.threshold {
                // Rounding reached the next scale level, step back one entry
                // so 999500 at precision 0 reads "1M", not "1000k".
                mantissa = 1.0;
                chosen = i - 1;
            }
            break;
        }
        prev = entry.threshold;
    }

    let mut result = trim_fixed(mantissa, prec);
    if opts.spaced_suffix {
        result.push(' ');
    }
    result.push_str(scale[chosen].suffix);
    if number < 0.0 {
        result.insert(0, '-');
    }
    result
}

/// Tiered fixed-point rendering for sub-threshold currency amounts.
fn fixed_currency(amount: f64) -> String {
    if amount < 0.000005 {
        amount.to_string()
    } else if amount < 0.0005 {
        format!("{amount:.8}")
    } else if amount < 0.05 {
        format!("{amount:.5}")
    } else {
        format!("{amount:.2}")
    }
}

/// Fixed-point rendering with trailing zeros (and a bare dot) trimmed,
/// matching the shortest display of the rounded mantissa: `1.5`, not `1.500`.
fn trim_fixed(value: f64, prec: usize) -> String {
    let mut out = format!("{value:.prec$}");
    if out.contains('.') {
        out.truncate(out.trim_end_matches('0').trim_end_matches('.').len());
    }
    out
}


// Changelog:
// - v1.0.0: Initial scale formatter implementation.
//   - Purpose: Provides the shared descending-table scale search with
//     boundary correction, plus the currency, hashrate, and percent
//     policy wrappers.
//   - Note: The previous iteration's threshold is carried in a scoped
//     local so the boundary check never reads stale state.
