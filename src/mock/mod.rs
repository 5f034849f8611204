//! Scripted mock implementation
//!
//! A generic test double for function-shaped dependencies.
//!
//! # Components
//!
//! - `InputLog`: every input passed to the mock, in call order
//! - `ResultQueue`: scripted outcomes, consumed one per fetch, with
//!   positional writes that pad gaps with unset slots
//! - `Mock`: ties both together with the always-value and always-function
//!   overrides and the general fallback error

mod input_log;
mod outcome;
mod result_queue;
mod scripted;

pub use input_log::InputLog;
pub use outcome::Outcome;
pub use result_queue::ResultQueue;
pub use scripted::{AlwaysFn, Mock};
