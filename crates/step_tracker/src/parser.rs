//! Comma-separated activity records.
//!
//! Daily records carry `<steps>,<duration>`; training records carry
//! `<steps>,<activity>,<duration>`. Both go through [`parse_record`], which
//! never hands back a partially validated record.

use chrono::TimeDelta;
use tracing::debug;

use crate::activity::ActivityKind;
use crate::duration::parse_duration;
use crate::{TrackerError, TrackerResult};

/// Shape of an input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordLayout {
    /// `<steps>,<duration>`
    Daily,
    /// `<steps>,<activity>,<duration>`
    Training,
}

impl RecordLayout {
    pub fn field_count(self) -> usize {
        match self {
            RecordLayout::Daily => 2,
            RecordLayout::Training => 3,
        }
    }

    fn count_word(self) -> &'static str {
        match self {
            RecordLayout::Daily => "two",
            RecordLayout::Training => "three",
        }
    }
}

/// Activity kind together with the label as it was written.
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRecord {
    pub steps: u32,
    pub activity: Option<Activity>,
    pub duration: TimeDelta,
}

pub fn parse_record(raw: &str, layout: RecordLayout) -> TrackerResult<ActivityRecord> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != layout.field_count() {
        return Err(TrackerError::Format(format!(
            "{} comma-separated values are expected, got {}",
            layout.count_word(),
            fields.len()
        )));
    }

    let steps = parse_steps(fields[0])?;

    let activity = match layout {
        RecordLayout::Daily => None,
        RecordLayout::Training => Some(parse_activity(fields[1])?),
    };

    let duration = parse_duration(fields[fields.len() - 1])?;
    if duration <= TimeDelta::zero() {
        return Err(TrackerError::Format("duration must be > 0".into()));
    }

    let record = ActivityRecord {
        steps,
        activity,
        duration,
    };
    debug!(?layout, steps = record.steps, "parsed activity record");
    Ok(record)
}

fn parse_steps(field: &str) -> TrackerResult<u32> {
    let steps: i64 = field.parse()?;
    if steps <= 0 {
        return Err(TrackerError::Format("steps must be > 0".into()));
    }
    u32::try_from(steps).map_err(|_| TrackerError::Format(format!("step count {steps} is too large")))
}

fn parse_activity(field: &str) -> TrackerResult<Activity> {
    if field.is_empty() {
        return Err(TrackerError::Format("activity kind is not defined".into()));
    }
    let kind = field.parse::<ActivityKind>()?;
    Ok(Activity {
        kind,
        label: field.to_string(),
    })
}
