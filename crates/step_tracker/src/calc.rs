//! Distance, speed and calorie formulas.

use chrono::TimeDelta;

use crate::activity::ActivityKind;
use crate::duration;
use crate::{TrackerError, TrackerResult};

/// Average step length in metres, used when height is not taken into account.
pub const STEP_LENGTH_M: f64 = 0.65;
pub const METERS_IN_KM: f64 = 1000.0;
pub const MINUTES_IN_HOUR: f64 = 60.0;
/// Stride length as a share of body height.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Walking burns this share of what running burns for the same inputs.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

pub fn stride_length(height_m: f64) -> f64 {
    height_m * STEP_LENGTH_COEFFICIENT
}

pub fn distance_km(steps: u32, height_m: f64) -> f64 {
    stride_length(height_m) * f64::from(steps) / METERS_IN_KM
}

pub fn daily_distance_km(steps: u32) -> f64 {
    f64::from(steps) * STEP_LENGTH_M / METERS_IN_KM
}

/// Returns 0 for a non-positive duration.
pub fn mean_speed_kmh(steps: u32, height_m: f64, duration_hours: f64) -> f64 {
    if duration_hours <= 0.0 {
        return 0.0;
    }
    distance_km(steps, height_m) / duration_hours
}

pub fn running_calories(
    steps: u32,
    weight_kg: f64,
    height_m: f64,
    duration: TimeDelta,
) -> TrackerResult<f64> {
    if steps == 0 {
        return Err(TrackerError::Format("steps must be > 0".into()));
    }
    if weight_kg <= 0.0 {
        return Err(TrackerError::Format("weight must be > 0".into()));
    }
    if height_m <= 0.0 {
        return Err(TrackerError::Format("height must be > 0".into()));
    }
    if duration <= TimeDelta::zero() {
        return Err(TrackerError::Format("duration must be > 0".into()));
    }

    let speed = mean_speed_kmh(steps, height_m, duration::hours(duration));
    if speed <= 0.0 {
        return Err(TrackerError::Format(
            "error in calculating average speed".into(),
        ));
    }

    Ok(weight_kg * speed * duration::minutes(duration) / MINUTES_IN_HOUR)
}

pub fn walking_calories(
    steps: u32,
    weight_kg: f64,
    height_m: f64,
    duration: TimeDelta,
) -> TrackerResult<f64> {
    let running = running_calories(steps, weight_kg, height_m, duration)?;
    Ok(running * WALKING_CALORIES_COEFFICIENT)
}

pub fn calories(
    kind: ActivityKind,
    steps: u32,
    weight_kg: f64,
    height_m: f64,
    duration: TimeDelta,
) -> TrackerResult<f64> {
    match kind {
        ActivityKind::Walking => walking_calories(steps, weight_kg, height_m, duration),
        ActivityKind::Running => running_calories(steps, weight_kg, height_m, duration),
    }
}
