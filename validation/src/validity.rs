//! Tri-state validation outcome.

/// Result of validating a field the user may not have touched yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validity<E> {
    /// Nothing to report yet (pristine or optional and empty).
    Neutral,
    Valid,
    Invalid(E),
}

impl<E> Validity<E> {
    /// Whether the field may be submitted. Neutral fields are not.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Whether the view must show an error under the field.
    pub fn shows_error(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }

    pub fn from_result<T>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Valid,
            Err(e) => Self::Invalid(e),
        }
    }
}
