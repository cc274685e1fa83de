//! The "no constraint" specification

use std::fmt;
use std::marker::PhantomData;

use super::{Spec, Specification};

/// Specification that every value satisfies.
///
/// Its combinator rules are deliberate conventions rather than classical
/// logic:
/// - `nil.and(x)` and `nil.or(x)` both return `x`
/// - `nil.not()` returns `nil`
/// - `nil.and_not(x)` and `nil.or_not(x)` both return `not(x)`
///
/// Empty `all`/`any` composites are replaced with it.
pub struct Identity<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Identity<T> {
    /// Create the identity specification.
    pub fn new() -> Self {
        Identity(PhantomData)
    }
}

impl<T: ?Sized> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Identity<T> {}

impl<T: ?Sized> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<T: ?Sized> fmt::Display for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("nil")
    }
}

impl<T: ?Sized> Specification<T> for Identity<T> {
    #[inline]
    fn evaluate(&self, _value: &T) -> bool {
        true
    }

    fn is_identity(&self) -> bool {
        true
    }
}

/// The identity specification for `T`.
///
/// # Example
///
/// ```rust
/// use specs::{nil, Spec};
///
/// let spec: Spec<i32> = nil();
/// assert!(spec.evaluate(&-1));
/// assert_eq!(spec.to_string(), "nil");
/// ```
pub fn nil<T: ?Sized + 'static>() -> Spec<T> {
    Spec::from(Identity::new())
}
