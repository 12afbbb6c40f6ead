//! Step and calorie summaries for short textual activity records.
//!
//! A record is a comma-separated line such as `"678,0h50m00s"` (daily steps)
//! or `"678,running,0h50m00s"` (a training session). The [`summary`] entry
//! points parse the line, compute distance, speed and calories for the given
//! body profile and render a plain-text report.

use thiserror::Error;

pub mod activity;
pub mod calc;
pub mod duration;
pub mod parser;
pub mod profile;
pub mod report;
pub mod summary;

pub use activity::ActivityKind;
pub use duration::DurationError;
pub use parser::{Activity, ActivityRecord, RecordLayout, parse_record};
pub use profile::UserProfile;
pub use report::{ActivityReport, DailyReport, build_daily_report, build_report};
pub use summary::{ErrorPolicy, daily_summary, day_action_info, summarize, training_summary};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("wrong data format: {0}")]
    Format(String),
    #[error("wrong data format: invalid step count: {0}")]
    Steps(#[from] std::num::ParseIntError),
    #[error("wrong data format: {0}")]
    Duration(#[from] DurationError),
    #[error("wrong data format: unknown activity kind {0:?}")]
    UnknownActivity(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TrackerError {
    /// True for every failure caused by the record or profile values.
    pub fn is_malformed_input(&self) -> bool {
        !matches!(
            self,
            TrackerError::Config(_) | TrackerError::Serialization(_)
        )
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_share_prefix() {
        let errs = [
            TrackerError::Format("steps must be > 0".into()),
            TrackerError::UnknownActivity("flying".into()),
            TrackerError::Duration(DurationError::Empty),
        ];
        for e in errs {
            assert!(e.to_string().starts_with("wrong data format"), "{e}");
            assert!(e.is_malformed_input());
        }
    }

    #[test]
    fn config_error_is_not_malformed_input() {
        let e = TrackerError::Config("STEP_TRACKER_WEIGHT_KG missing".into());
        assert!(!e.is_malformed_input());
        assert_eq!(e.to_string(), "configuration error: STEP_TRACKER_WEIGHT_KG missing");
    }

    #[test]
    fn nested_cause_is_exposed_as_source() {
        use std::error::Error as _;
        let cause = "abc".parse::<i64>().unwrap_err();
        let e = TrackerError::from(cause);
        assert!(e.source().is_some());
    }
}
