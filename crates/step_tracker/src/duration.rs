//! Compact time-span parsing, e.g. `"3h50m"`, `"0h50m00s"` or `"1.5h"`.

use std::sync::LazyLock;

use chrono::TimeDelta;
use regex::Regex;
use thiserror::Error;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

// "ms" must come before "m" so that leftmost-first alternation picks it.
const TOKEN: &str = r"([0-9]+\.?[0-9]*|\.[0-9]+)(ns|us|µs|μs|ms|s|m|h)";

static SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[-+]?(?:{TOKEN})+$")).expect("span pattern compiles")
});
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN).expect("token pattern compiles"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("invalid duration {0:?}")]
    Invalid(String),
    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> u64 {
    match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => NANOS_PER_MINUTE,
        _ => NANOS_PER_HOUR,
    }
}

/// Parse a signed sequence of `<decimal><unit>` tokens into a [`TimeDelta`].
///
/// Accepted units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. The bare
/// literal `"0"` is the only unit-less value accepted.
pub fn parse_duration(s: &str) -> Result<TimeDelta, DurationError> {
    if s.is_empty() {
        return Err(DurationError::Empty);
    }
    if matches!(s, "0" | "+0" | "-0") {
        return Ok(TimeDelta::zero());
    }
    if !SPAN_RE.is_match(s) {
        return Err(DurationError::Invalid(s.to_string()));
    }

    let negative = s.starts_with('-');
    let overflow = || DurationError::Overflow(s.to_string());

    let mut total: u64 = 0;
    for caps in TOKEN_RE.captures_iter(s) {
        let unit = unit_nanos(&caps[2]);
        let (int_part, frac_part) = match caps[1].split_once('.') {
            Some((i, f)) => (i, f),
            None => (&caps[1], ""),
        };

        let whole = if int_part.is_empty() {
            0
        } else {
            int_part.parse::<u64>().map_err(|_| overflow())?
        };
        let mut nanos = whole.checked_mul(unit).ok_or_else(overflow)?;
        if !frac_part.is_empty() {
            let frac: f64 = format!("0.{frac_part}")
                .parse()
                .map_err(|_| DurationError::Invalid(s.to_string()))?;
            nanos = nanos
                .checked_add((frac * unit as f64).round() as u64)
                .ok_or_else(overflow)?;
        }
        total = total.checked_add(nanos).ok_or_else(overflow)?;
    }

    let signed = i64::try_from(total).map_err(|_| overflow())?;
    Ok(TimeDelta::nanoseconds(if negative { -signed } else { signed }))
}

/// Length of `d` in fractional hours.
pub fn hours(d: TimeDelta) -> f64 {
    seconds(d) / 3600.0
}

/// Length of `d` in fractional minutes.
pub fn minutes(d: TimeDelta) -> f64 {
    seconds(d) / 60.0
}

fn seconds(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 + f64::from(d.subsec_nanos()) / NANOS_PER_SECOND as f64
}
