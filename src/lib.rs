//! Scripted Mock - generic test double
//!
//! This crate provides [`Mock`], a stand-in for any function-shaped
//! dependency. Tests script the values and errors the mock returns on
//! successive calls, inspect the inputs it received, and pin every result
//! with an always-return override when the sequence does not matter.
//!
//! Outcome sequences can also be kept in TOML or JSON fixture files and
//! applied with [`Mock::load_script`].

pub mod error;
pub mod mock;
pub mod script;

pub use error::MockError;
pub use mock::{AlwaysFn, InputLog, Mock, Outcome, ResultQueue};
pub use mock_script::{MockScript, ScriptError, ScriptStep, ScriptedOutcome};
