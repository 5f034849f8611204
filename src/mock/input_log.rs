//! Input log
//!
//! Append-only record of every input passed to a mock, in call order.

use crate::error::MockError;

/// Recorded inputs, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLog<I> {
    inputs: Vec<I>,
}

impl<I> Default for InputLog<I> {
    fn default() -> Self {
        Self { inputs: Vec::new() }
    }
}

impl<I> InputLog<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input, returning its zero-based call index
    pub fn record(&mut self, input: I) -> usize {
        self.inputs.push(input);
        self.inputs.len() - 1
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Input of the call at `index`
    pub fn get(&self, index: usize) -> Result<&I, MockError> {
        self.inputs.get(index).ok_or(MockError::InputOutOfRange {
            index,
            calls: self.inputs.len(),
        })
    }

    /// Input of the most recent call
    pub fn last(&self) -> Result<&I, MockError> {
        self.inputs.last().ok_or(MockError::NoCalls)
    }

    pub fn as_slice(&self) -> &[I] {
        &self.inputs
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }
}
