//! Mock script model and loaders
//!
//! A script file lists steps in the order they are applied:
//!
//! ```toml
//! always_value = "pinned"
//!
//! [[steps]]
//! value = "first"
//!
//! [[steps]]
//! error = "throttled"
//!
//! [[steps]]
//! position = 5
//! value = "sixth"
//! ```
//!
//! Steps without `position` append to the result queue; steps with one
//! overwrite that absolute queue position.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ScriptError;
use crate::step::{RawStep, ScriptStep, ScriptedOutcome};

/// A validated mock script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockScript<O> {
    always_value: Option<O>,
    steps: Vec<ScriptStep<O>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, bound(deserialize = "O: Deserialize<'de>"))]
struct RawScript<O> {
    #[serde(default)]
    always_value: Option<O>,

    #[serde(default)]
    steps: Vec<RawStep<O>>,
}

impl<O> Default for MockScript<O> {
    fn default() -> Self {
        Self {
            always_value: None,
            steps: Vec::new(),
        }
    }
}

impl<O> MockScript<O> {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value step
    pub fn push_value(mut self, value: O) -> Self {
        self.steps.push(ScriptStep::Append(ScriptedOutcome::Value(value)));
        self
    }

    /// Append an error step
    pub fn push_error(mut self, message: impl Into<String>) -> Self {
        self.steps
            .push(ScriptStep::Append(ScriptedOutcome::Error(message.into())));
        self
    }

    /// Add a positional value step
    pub fn value_at(mut self, position: usize, value: O) -> Self {
        self.steps.push(ScriptStep::At {
            position,
            outcome: ScriptedOutcome::Value(value),
        });
        self
    }

    /// Add a positional error step
    pub fn error_at(mut self, position: usize, message: impl Into<String>) -> Self {
        self.steps.push(ScriptStep::At {
            position,
            outcome: ScriptedOutcome::Error(message.into()),
        });
        self
    }

    /// Pin every result to a single value
    pub fn with_always_value(mut self, value: O) -> Self {
        self.always_value = Some(value);
        self
    }

    pub fn always_value(&self) -> Option<&O> {
        self.always_value.as_ref()
    }

    pub fn steps(&self) -> &[ScriptStep<O>] {
        &self.steps
    }

    /// Number of steps. The always-value is not a step.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the script has no steps, whether or not it pins an
    /// always-value
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Split into the always-value and the ordered steps
    pub fn into_parts(self) -> (Option<O>, Vec<ScriptStep<O>>) {
        (self.always_value, self.steps)
    }

    fn from_raw(raw: RawScript<O>) -> Result<Self, ScriptError> {
        let steps = raw
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, step)| step.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            always_value: raw.always_value,
            steps,
        })
    }
}

impl<O: DeserializeOwned> MockScript<O> {
    /// Parse a script from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ScriptError> {
        let raw: RawScript<O> = toml::from_str(contents)
            .map_err(|e| ScriptError::ParseError(format!("TOML parse error: {}", e)))?;
        Self::from_raw(raw)
    }

    /// Parse a script from JSON text
    pub fn from_json_str(contents: &str) -> Result<Self, ScriptError> {
        let raw: RawScript<O> = serde_json::from_str(contents)
            .map_err(|e| ScriptError::ParseError(format!("JSON parse error: {}", e)))?;
        Self::from_raw(raw)
    }

    /// Load a script file, choosing the parser from the file extension
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ScriptError> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            Some(other) => return Err(ScriptError::UnsupportedFormat(other.to_string())),
            None => {
                return Err(ScriptError::UnsupportedFormat(format!(
                    "{} has no extension",
                    path.display()
                )))
            }
        };

        let contents = fs::read_to_string(path)
            .map_err(|e| ScriptError::IoError(format!("{}: {}", path.display(), e)))?;
        let script = parse(&contents)?;

        tracing::debug!(
            path = %path.display(),
            steps = script.len(),
            always_value = script.always_value.is_some(),
            "Loaded mock script"
        );
        Ok(script)
    }
}
