//! Error types for specification construction and checking

use std::fmt;

/// Errors raised while constructing a specification.
///
/// # Example
///
/// ```rust
/// use specs::{new_named, SpecError};
///
/// let result = new_named("", |n: &i32| *n > 0);
/// assert_eq!(result.unwrap_err(), SpecError::EmptyName);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecError {
    /// An explicitly named specification was given an empty name.
    EmptyName,
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::EmptyName => write!(f, "invalid argument: specification name is empty"),
        }
    }
}

impl std::error::Error for SpecError {}

/// A value failed [`Spec::check`](crate::Spec::check).
///
/// Carries the description of the specification that was not satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsatisfied {
    description: String,
}

impl Unsatisfied {
    pub(crate) fn new(description: String) -> Self {
        Unsatisfied { description }
    }

    /// Description of the specification that rejected the value.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Unsatisfied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value does not satisfy {}", self.description)
    }
}

impl std::error::Error for Unsatisfied {}
