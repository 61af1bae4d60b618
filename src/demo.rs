//! Demo driver
//!
//! Runs every exercise over the inputs of a [`DemoConfig`] and collects the
//! results into a [`DemoReport`]. The report renders as plain text through
//! `Display` or as JSON through serde; printing is left to the caller.

use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::config_file::DemoConfig;
use crate::error::Result;
use crate::logic::brackets::check_brackets;
use crate::logic::reversal::reverse_or_placeholder;
use crate::logic::rotation::rotate;
use crate::types::Direction;

/// One exercise invocation and what it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoEntry {
    pub input: String,
    pub output: String,
}

/// A titled group of entries, one per exercise run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoSection {
    pub title: String,
    pub description: String,
    pub entries: Vec<DemoEntry>,
}

/// Everything the demo produced, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub sections: Vec<DemoSection>,
}

impl DemoReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "Question {}: {}", index + 1, section.title)?;
            writeln!(f, "{}", section.description)?;
            for entry in &section.entries {
                writeln!(f, "  {} => {}", entry.input, entry.output)?;
            }
        }
        Ok(())
    }
}

/// Run all configured exercises.
pub fn run(config: &DemoConfig) -> DemoReport {
    let mut sections = Vec::new();

    if config.has_rotations() {
        for direction in &config.rotation_directions {
            sections.push(rotation_section(config, *direction));
        }
    }
    if !config.reversal_inputs.is_empty() {
        sections.push(reversal_section(&config.reversal_inputs));
    }
    if !config.bracket_inputs.is_empty() {
        sections.push(bracket_section(&config.bracket_inputs));
    }

    info!("Demo produced {} sections", sections.len());
    DemoReport { sections }
}

fn rotation_section(config: &DemoConfig, direction: Direction) -> DemoSection {
    let entries = config
        .rotation_steps
        .iter()
        .map(|&k| {
            let rotated = rotate(&config.rotation_input, k, direction);
            debug!("rotate {} k={} -> {:?}", direction, k, rotated);
            DemoEntry {
                input: format!("K = {}", k),
                output: format!("{:?}", rotated),
            }
        })
        .collect();

    DemoSection {
        title: format!("rotate {}", direction),
        description: format!(
            "Rotating {:?} to the {} K times:",
            config.rotation_input, direction
        ),
        entries,
    }
}

fn reversal_section(inputs: &[String]) -> DemoSection {
    let entries = inputs
        .iter()
        .map(|text| DemoEntry {
            input: format!("{:?}", text),
            output: reverse_or_placeholder(text),
        })
        .collect();

    DemoSection {
        title: "reverse a string with a stack".to_string(),
        description: "Reversing each string:".to_string(),
        entries,
    }
}

fn bracket_section(inputs: &[String]) -> DemoSection {
    let entries = inputs
        .iter()
        .map(|s| DemoEntry {
            input: s.clone(),
            output: check_brackets(s).to_string(),
        })
        .collect();

    DemoSection {
        title: "balanced brackets".to_string(),
        description: "Is each string a balanced sequence of brackets?".to_string(),
        entries,
    }
}
