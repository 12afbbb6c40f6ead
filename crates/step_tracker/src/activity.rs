use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::TrackerError;

/// Kind of exercise; selects which calorie formula applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Walking,
    Running,
}

/// Accepted labels, compared after lowercasing.
const LABELS: &[(&str, ActivityKind)] = &[
    ("walking", ActivityKind::Walking),
    ("walk", ActivityKind::Walking),
    ("ходьба", ActivityKind::Walking),
    ("running", ActivityKind::Running),
    ("run", ActivityKind::Running),
    ("бег", ActivityKind::Running),
];

impl ActivityKind {
    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.to_lowercase();
        LABELS
            .iter()
            .find(|(name, _)| *name == needle)
            .map(|(_, kind)| *kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Walking => "Walking",
            ActivityKind::Running => "Running",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| TrackerError::UnknownActivity(s.to_string()))
    }
}
