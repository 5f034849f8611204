//! Result queue
//!
//! FIFO of scripted outcomes. Appends and positional writes address the
//! same index space: position 0 is always the next outcome to be fetched.

use std::collections::VecDeque;

use super::outcome::Outcome;

/// Queue of outcomes waiting to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultQueue<O, E> {
    entries: VecDeque<Outcome<O, E>>,
}

impl<O, E> Default for ResultQueue<O, E> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<O, E> ResultQueue<O, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome at the tail
    pub fn push(&mut self, outcome: Outcome<O, E>) {
        self.entries.push_back(outcome);
    }

    /// Write an outcome at an absolute position.
    ///
    /// An existing entry at `position` is replaced. A position past the tail
    /// grows the queue, filling the gap with [`Outcome::Unset`]. Returns the
    /// number of placeholder entries added.
    ///
    /// # Panics
    ///
    /// Panics if `position == usize::MAX`, since the queue would need one
    /// more slot than `usize` can count.
    pub fn set_at(&mut self, position: usize, outcome: Outcome<O, E>) -> usize {
        let len = self.entries.len();
        let padded = position.saturating_sub(len);

        if position >= len {
            let Some(new_len) = position.checked_add(1) else {
                panic!("queue position {} out of range", position);
            };
            self.entries.resize_with(new_len, Outcome::default);
        }
        self.entries[position] = outcome;

        padded
    }

    /// Remove and return the next outcome
    pub fn pop_front(&mut self) -> Option<Outcome<O, E>> {
        self.entries.pop_front()
    }

    pub fn get(&self, position: usize) -> Option<&Outcome<O, E>> {
        self.entries.get(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome<O, E>> {
        self.entries.iter()
    }
}
