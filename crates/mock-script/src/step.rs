//! Script step types.

use serde::{Deserialize, Deserializer};

use crate::error::ScriptError;

/// One scripted result: a value, or an error message the test maps into its
/// own error type when the script is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedOutcome<O> {
    Value(O),
    Error(String),
}

impl<O> ScriptedOutcome<O> {
    /// Returns true for the error variant
    pub fn is_error(&self) -> bool {
        matches!(self, ScriptedOutcome::Error(_))
    }
}

/// Where a scripted outcome lands in the result queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep<O> {
    /// Appended to the tail of the queue
    Append(ScriptedOutcome<O>),
    /// Written at an absolute queue position, padding any gap
    At {
        position: usize,
        outcome: ScriptedOutcome<O>,
    },
}

impl<O> ScriptStep<O> {
    /// The outcome carried by this step
    pub fn outcome(&self) -> &ScriptedOutcome<O> {
        match self {
            ScriptStep::Append(outcome) => outcome,
            ScriptStep::At { outcome, .. } => outcome,
        }
    }

    /// The absolute position, if this is a positional step
    pub fn position(&self) -> Option<usize> {
        match self {
            ScriptStep::Append(_) => None,
            ScriptStep::At { position, .. } => Some(*position),
        }
    }
}

/// Step as written in a script file, before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, bound(deserialize = "O: Deserialize<'de>"))]
pub(crate) struct RawStep<O> {
    #[serde(default)]
    pub position: Option<usize>,

    /// `Some` whenever the key is present, even if its content is `null`
    #[serde(default, deserialize_with = "present")]
    pub value: Option<O>,

    #[serde(default)]
    pub error: Option<String>,
}

fn present<'de, D, O>(deserializer: D) -> Result<Option<O>, D::Error>
where
    D: Deserializer<'de>,
    O: Deserialize<'de>,
{
    O::deserialize(deserializer).map(Some)
}

impl<O> RawStep<O> {
    /// Validate into a step. `index` is the step's place in the file, used
    /// in error messages.
    pub(crate) fn validate(self, index: usize) -> Result<ScriptStep<O>, ScriptError> {
        let outcome = match (self.value, self.error) {
            (Some(value), None) => ScriptedOutcome::Value(value),
            (None, Some(error)) => ScriptedOutcome::Error(error),
            (Some(_), Some(_)) => {
                return Err(ScriptError::ValidationError(format!(
                    "step {} sets both value and error",
                    index
                )));
            }
            (None, None) => {
                return Err(ScriptError::ValidationError(format!(
                    "step {} sets neither value nor error",
                    index
                )));
            }
        };

        Ok(match self.position {
            Some(position) => ScriptStep::At { position, outcome },
            None => ScriptStep::Append(outcome),
        })
    }
}
