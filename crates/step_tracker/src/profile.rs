use crate::{TrackerError, TrackerResult};

pub const WEIGHT_ENV: &str = "STEP_TRACKER_WEIGHT_KG";
pub const HEIGHT_ENV: &str = "STEP_TRACKER_HEIGHT_M";

/// Body measurements used by the calorie and stride formulas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserProfile {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl UserProfile {
    /// Both values must be finite and strictly positive.
    pub fn new(weight_kg: f64, height_m: f64) -> TrackerResult<Self> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(TrackerError::Format("weight must be > 0".into()));
        }
        if !(height_m.is_finite() && height_m > 0.0) {
            return Err(TrackerError::Format("height must be > 0".into()));
        }
        Ok(Self {
            weight_kg,
            height_m,
        })
    }

    pub fn from_env() -> TrackerResult<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads the profile through `get` so tests don't touch the process
    /// environment.
    pub fn from_env_with<F>(mut get: F) -> TrackerResult<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let weight = read_number(&mut get, WEIGHT_ENV)?;
        let height = read_number(&mut get, HEIGHT_ENV)?;
        Self::new(weight, height).map_err(|e| TrackerError::Config(e.to_string()))
    }
}

fn read_number<F>(get: &mut F, key: &str) -> TrackerResult<f64>
where
    F: FnMut(&str) -> Option<String>,
{
    let raw = get(key).ok_or_else(|| TrackerError::Config(format!("{key} missing")))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|e| TrackerError::Config(format!("{key}: {e}")))
}
