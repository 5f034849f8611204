//! Mock Scripts
//!
//! Declarative descriptions of the outcomes a scripted mock should produce.
//! Scripts are kept next to other test fixtures as TOML or JSON files and
//! applied to a mock during test setup.

pub mod error;
pub mod script;
pub mod step;

pub use error::ScriptError;
pub use script::MockScript;
pub use step::{ScriptStep, ScriptedOutcome};
