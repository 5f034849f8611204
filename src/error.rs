//! Error types for mock inspection and script loading.

use mock_script::ScriptError;

/// Errors raised by the mock itself.
///
/// Scripted errors and the general fallback error are the caller's own `E`
/// and are returned through `fetch_next`; this type only covers misuse of the
/// mock's inspection API and failures loading a script file.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// Asked for a call that never happened.
    #[error("input index {index} out of range: mock was called {calls} time(s)")]
    InputOutOfRange { index: usize, calls: usize },

    /// Asked for the last input before any call was recorded.
    #[error("no inputs recorded: mock has not been called")]
    NoCalls,

    #[error("script error: {0}")]
    Script(#[from] ScriptError),
}
