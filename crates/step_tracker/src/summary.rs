//! Text summaries for raw activity lines.

use tracing::warn;

use crate::parser::{RecordLayout, parse_record};
use crate::profile::UserProfile;
use crate::report::{build_daily_report, build_report};
use crate::TrackerResult;

/// What a summary call does with a failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the error to the caller.
    #[default]
    Propagate,
    /// Log the error and return an empty summary.
    Discard,
}

/// Parse `raw` with `layout` and render the matching report.
///
/// The profile is validated before the record is parsed, so no arithmetic
/// ever runs on a non-positive weight or height.
pub fn summarize(
    raw: &str,
    weight_kg: f64,
    height_m: f64,
    layout: RecordLayout,
    policy: ErrorPolicy,
) -> TrackerResult<String> {
    match render(raw, weight_kg, height_m, layout) {
        Ok(text) => Ok(text),
        Err(err) if policy == ErrorPolicy::Discard => {
            warn!(error = %err, ?layout, "discarding malformed activity record");
            Ok(String::new())
        }
        Err(err) => Err(err),
    }
}

fn render(raw: &str, weight_kg: f64, height_m: f64, layout: RecordLayout) -> TrackerResult<String> {
    let profile = UserProfile::new(weight_kg, height_m)?;
    let record = parse_record(raw, layout)?;
    let text = match layout {
        RecordLayout::Daily => build_daily_report(&record, &profile)?.to_string(),
        RecordLayout::Training => build_report(&record, &profile)?.to_string(),
    };
    Ok(text)
}

/// Summary for a `<steps>,<duration>` line.
pub fn daily_summary(raw: &str, weight_kg: f64, height_m: f64) -> TrackerResult<String> {
    summarize(raw, weight_kg, height_m, RecordLayout::Daily, ErrorPolicy::Propagate)
}

/// Summary for a `<steps>,<activity>,<duration>` line.
pub fn training_summary(raw: &str, weight_kg: f64, height_m: f64) -> TrackerResult<String> {
    summarize(raw, weight_kg, height_m, RecordLayout::Training, ErrorPolicy::Propagate)
}

/// Daily summary that logs failures and returns an empty string instead.
pub fn day_action_info(raw: &str, weight_kg: f64, height_m: f64) -> String {
    summarize(raw, weight_kg, height_m, RecordLayout::Daily, ErrorPolicy::Discard)
        .unwrap_or_default()
}
