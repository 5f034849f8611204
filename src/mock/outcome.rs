//! Queued outcome type

/// One slot in the result queue.
///
/// A slot holds exactly one of a value, an error, or nothing. `Unset` is
/// what positional writes pad gaps with; fetching it yields the mock's
/// general error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<O, E> {
    Value(O),
    Error(E),
    Unset,
}

impl<O, E> Default for Outcome<O, E> {
    fn default() -> Self {
        Outcome::Unset
    }
}

impl<O, E> Outcome<O, E> {
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Outcome::Unset)
    }

    /// Convert into a result, substituting `fallback` for an unset slot
    pub fn into_result(self, fallback: impl FnOnce() -> E) -> Result<O, E> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Error(error) => Err(error),
            Outcome::Unset => Err(fallback()),
        }
    }
}
