//! Demo configuration: which inputs the driver runs each exercise over.
//!
//! Stored as pretty-printed JSON. A section left out of the file is empty and
//! its exercise is skipped. [`DemoConfig::walkthrough`] holds the built-in
//! inputs (rotate `[1, 2, 3, 4, 5]` by 1-3 both ways, reverse three strings,
//! check two bracket sequences).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ExerciseError;
use crate::types::Direction;

/// Upper bound on a single rotation step count.
///
/// Rotation runs one move per step, so huge counts would stall the demo.
pub const MAX_ROTATION_STEPS: isize = 100_000;

/// Reject a rotation step count above [`MAX_ROTATION_STEPS`].
pub fn check_rotation_steps(steps: isize) -> Result<(), ExerciseError> {
    if steps > MAX_ROTATION_STEPS {
        return Err(ExerciseError::validation(format!(
            "Rotation step count {} exceeds the maximum of {}",
            steps, MAX_ROTATION_STEPS
        )));
    }
    Ok(())
}

/// Demo configuration that can be saved/loaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    // Rotation
    pub rotation_input: Vec<i64>,
    pub rotation_steps: Vec<isize>,
    pub rotation_directions: Vec<Direction>,

    // Reversal
    pub reversal_inputs: Vec<String>,

    // Brackets
    pub bracket_inputs: Vec<String>,
}

impl DemoConfig {
    /// Built-in inputs used when no configuration file is given
    pub fn walkthrough() -> Self {
        Self {
            rotation_input: vec![1, 2, 3, 4, 5],
            rotation_steps: vec![1, 2, 3],
            rotation_directions: vec![Direction::Right, Direction::Left],
            reversal_inputs: vec![
                String::new(),
                "abc".to_string(),
                "!ega dab a setoned enot esab a dagE".to_string(),
            ],
            bracket_inputs: vec!["{([])}".to_string(), "{([)}".to_string()],
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// True when the rotation section has something to run.
    pub fn has_rotations(&self) -> bool {
        !self.rotation_steps.is_empty() && !self.rotation_directions.is_empty()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.has_rotations()
            && self.reversal_inputs.is_empty()
            && self.bracket_inputs.is_empty()
        {
            anyhow::bail!("Configuration selects no exercises to run");
        }

        // An empty rotation input is a legitimate edge case; steps with no
        // direction (or the reverse) is not.
        if self.rotation_steps.is_empty() != self.rotation_directions.is_empty() {
            anyhow::bail!(
                "Rotation steps and rotation directions must both be set or both be empty"
            );
        }
        if !self.rotation_input.is_empty() && self.rotation_steps.is_empty() {
            anyhow::bail!("Rotation input is set but no rotation steps are given");
        }

        for steps in &self.rotation_steps {
            check_rotation_steps(*steps)?;
        }

        Ok(())
    }
}
