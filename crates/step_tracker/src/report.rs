use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;
use tracing::debug;

use crate::activity::ActivityKind;
use crate::calc;
use crate::duration;
use crate::parser::ActivityRecord;
use crate::profile::UserProfile;
use crate::{TrackerError, TrackerResult};

/// Summary of a day's walking, built from a steps-only record.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct DailyReport {
    pub steps: u32,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub calories: f64,
}

/// Summary of a single training session.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct ActivityReport {
    pub kind: ActivityKind,
    /// Activity label as written in the record.
    pub label: String,
    pub steps: u32,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

/// Distance uses the fixed average step length; calories follow the walking
/// formula.
pub fn build_daily_report(
    record: &ActivityRecord,
    profile: &UserProfile,
) -> TrackerResult<DailyReport> {
    let calories = calc::walking_calories(
        record.steps,
        profile.weight_kg,
        profile.height_m,
        record.duration,
    )?;
    let report = DailyReport {
        steps: record.steps,
        duration_hours: duration::hours(record.duration),
        distance_km: calc::daily_distance_km(record.steps),
        calories,
    };
    debug!(steps = report.steps, calories = report.calories, "built daily report");
    Ok(report)
}

pub fn build_report(
    record: &ActivityRecord,
    profile: &UserProfile,
) -> TrackerResult<ActivityReport> {
    let activity = record
        .activity
        .as_ref()
        .ok_or_else(|| TrackerError::UnknownActivity(String::new()))?;

    let hours = duration::hours(record.duration);
    let calories = calc::calories(
        activity.kind,
        record.steps,
        profile.weight_kg,
        profile.height_m,
        record.duration,
    )?;

    let report = ActivityReport {
        kind: activity.kind,
        label: activity.label.clone(),
        steps: record.steps,
        duration_hours: hours,
        distance_km: calc::distance_km(record.steps, profile.height_m),
        mean_speed_kmh: calc::mean_speed_kmh(record.steps, profile.height_m, hours),
        calories,
    };
    debug!(kind = %report.kind, calories = report.calories, "built activity report");
    Ok(report)
}

impl DailyReport {
    pub fn to_json(&self) -> TrackerResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl ActivityReport {
    pub fn to_json(&self) -> TrackerResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps: {}.", self.steps)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Calories burned: {:.2} kcal.", self.calories)
    }
}

impl fmt::Display for ActivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Activity: {}", self.kind)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.mean_speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{RecordLayout, parse_record};

    fn profile() -> UserProfile {
        UserProfile::new(70.0, 1.75).unwrap()
    }

    #[test]
    fn daily_report_uses_fixed_step_length() {
        let r = parse_record("1000,1h0m0s", RecordLayout::Daily).unwrap();
        let rep = build_daily_report(&r, &profile()).unwrap();
        assert!((rep.distance_km - 0.65).abs() < 1e-12);
        assert_eq!(rep.duration_hours, 1.0);
        let walk = calc::walking_calories(1000, 70.0, 1.75, r.duration).unwrap();
        assert_eq!(rep.calories, walk);
    }

    #[test]
    fn training_report_dispatches_by_kind() {
        let p = profile();
        let walk = parse_record("1000,ходьба,1h0m0s", RecordLayout::Training).unwrap();
        let run = parse_record("1000,running,1h0m0s", RecordLayout::Training).unwrap();
        let walk = build_report(&walk, &p).unwrap();
        let run = build_report(&run, &p).unwrap();
        assert_eq!(walk.kind, ActivityKind::Walking);
        assert_eq!(walk.label, "ходьба");
        assert_eq!(walk.calories, run.calories * 0.5);
        assert_eq!(walk.distance_km, run.distance_km);
        assert_eq!(walk.mean_speed_kmh, run.mean_speed_kmh);
    }

    #[test]
    fn report_without_activity_is_rejected() {
        let r = parse_record("1000,1h", RecordLayout::Daily).unwrap();
        let err = build_report(&r, &profile()).unwrap_err();
        assert!(matches!(err, TrackerError::UnknownActivity(_)));
    }

    #[test]
    fn renders_training_template() {
        let rep = ActivityReport {
            kind: ActivityKind::Running,
            label: "run".into(),
            steps: 5000,
            duration_hours: 0.75,
            distance_km: 3.9381,
            mean_speed_kmh: 5.25,
            calories: 275.6301,
        };
        assert_eq!(
            rep.to_string(),
            "Activity: Running\nDuration: 0.75 h.\nDistance: 3.94 km.\nSpeed: 5.25 km/h\nCalories burned: 275.63\n"
        );
    }

    #[test]
    fn renders_daily_template() {
        let rep = DailyReport {
            steps: 678,
            duration_hours: 0.5,
            distance_km: 0.4407,
            calories: 12.5,
        };
        assert_eq!(
            rep.to_string(),
            "Steps: 678.\nDistance: 0.44 km.\nCalories burned: 12.50 kcal.\n"
        );
    }

    #[test]
    fn json_and_schema() {
        let r = parse_record("1000,Walking,30m", RecordLayout::Training).unwrap();
        let rep = build_report(&r, &profile()).unwrap();
        let v = rep.to_json().unwrap();
        assert_eq!(v["kind"], "walking");
        assert_eq!(v["steps"], 1000);

        let schema = schemars::schema_for!(ActivityReport);
        let props = schema
            .as_value()
            .get("properties")
            .and_then(|p| p.as_object())
            .expect("properties");
        assert!(props.contains_key("mean_speed_kmh"));
    }
}
