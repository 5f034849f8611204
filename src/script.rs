//! Applying mock scripts
//!
//! Scripts carry error messages as strings; the caller supplies the
//! conversion into the mock's error type.

use serde::de::DeserializeOwned;
use std::path::Path;

use mock_script::{MockScript, ScriptStep, ScriptedOutcome};

use crate::error::MockError;
use crate::mock::Mock;

impl<I, O: Clone + 'static, E> Mock<I, O, E> {
    /// Apply a script's steps in order, then its always-value if present.
    ///
    /// Append steps go through `enqueue_*`, positional steps through
    /// `set_*_at`, so a script behaves exactly like the same calls made by
    /// hand.
    pub fn apply_script<F>(&mut self, script: MockScript<O>, mut make_error: F)
    where
        F: FnMut(String) -> E,
    {
        let (always_value, steps) = script.into_parts();
        let step_count = steps.len();

        for step in steps {
            match step {
                ScriptStep::Append(ScriptedOutcome::Value(value)) => self.enqueue_value(value),
                ScriptStep::Append(ScriptedOutcome::Error(message)) => {
                    self.enqueue_error(make_error(message))
                }
                ScriptStep::At {
                    position,
                    outcome: ScriptedOutcome::Value(value),
                } => self.set_value_at(position, value),
                ScriptStep::At {
                    position,
                    outcome: ScriptedOutcome::Error(message),
                } => self.set_error_at(position, make_error(message)),
            }
        }

        if let Some(value) = always_value {
            self.set_always_value(value);
        }

        tracing::debug!(
            steps = step_count,
            pending = self.pending_outcomes(),
            "Applied mock script"
        );
    }

    /// Load a TOML or JSON script file and apply it
    pub fn load_script<F>(&mut self, path: &Path, make_error: F) -> Result<(), MockError>
    where
        O: DeserializeOwned,
        F: FnMut(String) -> E,
    {
        let script = MockScript::load(path)?;
        self.apply_script(script, make_error);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_apply_script_matches_manual_setup() {
        let script = MockScript::new()
            .push_value(1u32)
            .push_error("throttled")
            .error_at(3, "late");

        let mut scripted: Mock<(), u32, String> = Mock::new("general".to_string());
        scripted.apply_script(script, |m| m);

        let mut manual: Mock<(), u32, String> = Mock::new("general".to_string());
        manual.enqueue_value(1);
        manual.enqueue_error("throttled".to_string());
        manual.set_error_at(3, "late".to_string());

        assert_eq!(scripted.pending_outcomes(), manual.pending_outcomes());
        for _ in 0..5 {
            assert_eq!(scripted.fetch_next(), manual.fetch_next());
        }
    }

    #[test]
    fn test_apply_script_maps_errors() {
        #[derive(Debug, Clone, PartialEq)]
        enum FetchError {
            General,
            Remote(String),
        }

        let script = MockScript::new().push_error("503");
        let mut mock: Mock<(), String, FetchError> = Mock::new(FetchError::General);
        mock.apply_script(script, FetchError::Remote);

        assert_eq!(mock.fetch_next(), Err(FetchError::Remote("503".to_string())));
        assert_eq!(mock.fetch_next(), Err(FetchError::General));
    }

    #[test]
    fn test_apply_script_always_value() {
        let script = MockScript::new()
            .push_value("queued".to_string())
            .with_always_value("pinned".to_string());

        let mut mock: Mock<(), String, String> = Mock::new("general".to_string());
        mock.apply_script(script, |m| m);

        assert!(mock.has_override());
        assert_eq!(mock.fetch_next(), Ok("pinned".to_string()));
        assert_eq!(mock.pending_outcomes(), 1);
    }

    #[test]
    fn test_load_script_file() {
        let mut temp = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(temp, "[[steps]]").unwrap();
        writeln!(temp, "value = 7").unwrap();
        writeln!(temp, "[[steps]]").unwrap();
        writeln!(temp, "position = 2").unwrap();
        writeln!(temp, "error = \"gone\"").unwrap();

        let mut mock: Mock<(), i64, String> = Mock::new("general".to_string());
        mock.load_script(temp.path(), |m| m).unwrap();

        assert_eq!(mock.fetch_next(), Ok(7));
        assert_eq!(mock.fetch_next(), Err("general".to_string()));
        assert_eq!(mock.fetch_next(), Err("gone".to_string()));
    }

    #[test]
    fn test_load_script_invalid_leaves_mock_untouched() {
        let mut temp = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(temp, "[[steps]]").unwrap();
        writeln!(temp, "value = 1").unwrap();
        writeln!(temp, "[[steps]]").unwrap();

        let mut mock: Mock<(), i64, String> = Mock::new("general".to_string());
        let err = mock.load_script(temp.path(), |m| m).unwrap_err();

        assert!(matches!(err, MockError::Script(_)));
        assert!(mock.is_exhausted());
    }
}
