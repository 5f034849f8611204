//! Scripted Mock
//!
//! A stand-in for a function-shaped dependency. Every call records its
//! input; every fetch returns the next scripted outcome.
//!
//! Fetch resolution order:
//!
//! 1. The always-value override, if set
//! 2. The always-function override, if set
//! 3. The front of the result queue
//! 4. The general error, when the queue is empty or the front slot is unset
//!
//! Overrides never consume the queue. They stay in place until [`Mock::reset`].

use std::fmt;

use crate::error::MockError;

use super::input_log::InputLog;
use super::outcome::Outcome;
use super::result_queue::ResultQueue;

/// Override producing every result while installed
pub type AlwaysFn<O, E> = Box<dyn FnMut() -> Result<O, E>>;

/// Producer behind the always-value override; hands out clones of the
/// pinned value so fetching does not need `O: Clone`
type AlwaysValue<O> = Box<dyn FnMut() -> O>;

/// Generic mock over input `I`, output `O` and error `E`.
///
/// # Example
///
/// ```
/// use scripted_mock::Mock;
///
/// let mut mock: Mock<u32, String, String> = Mock::new("unexpected call".to_string());
/// mock.enqueue_value("first".to_string());
/// mock.enqueue_error("throttled".to_string());
///
/// assert_eq!(mock.call(1), Ok("first".to_string()));
/// assert_eq!(mock.call(2), Err("throttled".to_string()));
/// assert_eq!(mock.call(3), Err("unexpected call".to_string()));
///
/// assert_eq!(mock.call_count(), 3);
/// assert_eq!(mock.all_inputs(), vec![1, 2, 3]);
/// ```
pub struct Mock<I, O, E> {
    /// Returned when nothing else was scripted
    general_error: E,
    inputs: InputLog<I>,
    results: ResultQueue<O, E>,
    always_value: Option<AlwaysValue<O>>,
    always_fn: Option<AlwaysFn<O, E>>,
}

impl<I, O, E> Mock<I, O, E> {
    /// Create a mock that answers with `general_error` once its script runs out
    pub fn new(general_error: E) -> Self {
        Self {
            general_error,
            inputs: InputLog::new(),
            results: ResultQueue::new(),
            always_value: None,
            always_fn: None,
        }
    }

    pub fn general_error(&self) -> &E {
        &self.general_error
    }

    // === Input log ===

    /// Record the input of one call
    pub fn record_input(&mut self, input: I) {
        let call = self.inputs.record(input);
        tracing::trace!(call, "Recorded mock input");
    }

    /// Number of recorded calls since construction or the last reset
    pub fn call_count(&self) -> usize {
        self.inputs.len()
    }

    pub fn has_been_called(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Input of the call at `index` (zero-based, call order).
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.call_count()`. Use [`Mock::try_input_at`]
    /// to get an error instead.
    pub fn input_at(&self, index: usize) -> &I {
        match self.inputs.get(index) {
            Ok(input) => input,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_input_at(&self, index: usize) -> Result<&I, MockError> {
        self.inputs.get(index)
    }

    /// Input of the most recent call.
    ///
    /// # Panics
    ///
    /// Panics if no call has been recorded.
    pub fn last_input(&self) -> &I {
        match self.inputs.last() {
            Ok(input) => input,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_last_input(&self) -> Result<&I, MockError> {
        self.inputs.last()
    }

    /// Borrowed view of every recorded input
    pub fn inputs(&self) -> &[I] {
        self.inputs.as_slice()
    }

    /// Copy of every recorded input, in call order
    pub fn all_inputs(&self) -> Vec<I>
    where
        I: Clone,
    {
        self.inputs.as_slice().to_vec()
    }

    // === Result queue ===

    /// Append a value to the result queue
    pub fn enqueue_value(&mut self, value: O) {
        self.results.push(Outcome::Value(value));
    }

    /// Append an error to the result queue
    pub fn enqueue_error(&mut self, error: E) {
        self.results.push(Outcome::Error(error));
    }

    /// Put a value at absolute queue position `position`, replacing whatever
    /// was there. Positions past the tail pad the gap with unset slots.
    ///
    /// # Panics
    ///
    /// Panics if `position == usize::MAX`.
    pub fn set_value_at(&mut self, position: usize, value: O) {
        self.set_outcome_at(position, Outcome::Value(value));
    }

    /// Put an error at absolute queue position `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position == usize::MAX`.
    pub fn set_error_at(&mut self, position: usize, error: E) {
        self.set_outcome_at(position, Outcome::Error(error));
    }

    fn set_outcome_at(&mut self, position: usize, outcome: Outcome<O, E>) {
        let padded = self.results.set_at(position, outcome);
        if padded > 0 {
            tracing::debug!(position, padded, "Padded result queue with unset slots");
        }
    }

    /// Outcomes still waiting in the queue, unset placeholders included
    pub fn pending_outcomes(&self) -> usize {
        self.results.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.results.is_empty()
    }

    // === Overrides ===

    /// Answer every fetch with `value` until reset.
    ///
    /// Takes priority over an always-function override; the queue is left
    /// untouched.
    pub fn set_always_value(&mut self, value: O)
    where
        O: Clone + 'static,
    {
        tracing::debug!("Installed always-value override");
        self.always_value = Some(Box::new(move || value.clone()));
    }

    /// Answer every fetch by calling `f` until reset
    pub fn set_always_fn<F>(&mut self, f: F)
    where
        F: FnMut() -> Result<O, E> + 'static,
    {
        tracing::debug!("Installed always-fn override");
        self.always_fn = Some(Box::new(f));
    }

    pub fn has_override(&self) -> bool {
        self.always_value.is_some() || self.always_fn.is_some()
    }

    /// Clear inputs, queued outcomes and overrides. The general error is kept.
    pub fn reset(&mut self) {
        tracing::debug!(
            calls = self.inputs.len(),
            pending = self.results.len(),
            "Resetting mock"
        );
        self.inputs.clear();
        self.results.clear();
        self.always_value = None;
        self.always_fn = None;
    }
}

impl<I, O, E: Clone> Mock<I, O, E> {
    /// Next scripted result.
    ///
    /// Overrides answer without consuming the queue; otherwise the front
    /// outcome is removed. An empty queue or an unset slot yields a clone of
    /// the general error.
    pub fn fetch_next(&mut self) -> Result<O, E> {
        if let Some(value) = self.always_value.as_mut() {
            tracing::trace!(source = "always_value", "Fetched mock result");
            return Ok(value());
        }

        if let Some(f) = self.always_fn.as_mut() {
            tracing::trace!(source = "always_fn", "Fetched mock result");
            return f();
        }

        let Some(outcome) = self.results.pop_front() else {
            tracing::debug!(reason = "empty_queue", "Falling back to general error");
            return Err(self.general_error.clone());
        };

        if outcome.is_unset() {
            tracing::debug!(reason = "unset_slot", "Falling back to general error");
        } else {
            tracing::trace!(source = "queue", error = outcome.is_error(), "Fetched mock result");
        }
        outcome.into_result(|| self.general_error.clone())
    }

    /// Record `input`, then return the next scripted result
    pub fn call(&mut self, input: I) -> Result<O, E> {
        self.record_input(input);
        self.fetch_next()
    }
}

impl<I: fmt::Debug, O: fmt::Debug, E: fmt::Debug> fmt::Debug for Mock<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mock")
            .field("general_error", &self.general_error)
            .field("inputs", &self.inputs)
            .field("results", &self.results)
            .field("always_value", &self.always_value.is_some())
            .field("always_fn", &self.always_fn.is_some())
            .finish()
    }
}
