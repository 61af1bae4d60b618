//! Type-safe option types for the exercises
//!
//! Direction and verdict values travel through the CLI, the config file and
//! the demo report. Enums keep them from being passed around as loose strings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::ExerciseError;

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Move the first elements to the back
    Left,
    /// Move the last elements to the front
    #[default]
    Right,
}

impl Direction {
    /// Parse a user-supplied direction, listing the valid values on failure.
    pub fn parse_arg(value: &str) -> Result<Self, ExerciseError> {
        value.trim().parse().map_err(|_| {
            ExerciseError::parse(format!(
                "Invalid direction '{}'. Valid: left, right",
                value
            ))
        })
    }
}

/// Outcome of a bracket-balance check, shown as YES / NO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Yes,
    No,
}

impl From<bool> for Verdict {
    fn from(balanced: bool) -> Self {
        if balanced { Self::Yes } else { Self::No }
    }
}
