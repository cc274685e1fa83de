//! Composable specifications over values of any type
//!
//! A specification wraps a boolean predicate into an immutable value that
//! carries a diagnostic name and can be combined with other specifications
//! using `and`, `or` and `not`. Every combination produces a new tree; the
//! tree can be evaluated against a candidate value and rendered to text.
//!
//! # Example
//!
//! ```rust
//! use specs::prelude::*;
//!
//! #[derive(Debug)]
//! struct Employee {
//!     age: u32,
//!     manager: bool,
//! }
//!
//! impl Employee {
//!     fn is_legal_age(&self) -> bool {
//!         self.age > 18
//!     }
//!
//!     fn is_manager(&self) -> bool {
//!         self.manager
//!     }
//! }
//!
//! let spec = new(Employee::is_legal_age).and_not_fn(Employee::is_manager);
//!
//! assert!(spec.evaluate(&Employee { age: 30, manager: false }));
//! assert!(!spec.evaluate(&Employee { age: 30, manager: true }));
//! assert_eq!(spec.to_string(), "all(.is_legal_age, not(.is_manager))");
//! ```
//!
//! # Variants
//!
//! - [`Leaf`]: one named predicate, built by [`new`] or [`new_named`]
//! - [`Identity`]: "no constraint", built by [`nil`] or [`maybe`] with `None`
//! - [`Composite`]: `not`, `all` or `any` over child specifications
//!
//! All three implement [`Specification`] and are handled through the shared
//! [`Spec`] handle, which carries the fluent combinator surface.

mod composite;
mod error;
mod identity;
mod leaf;
mod name;

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

pub use composite::{all, any, none, not, Composite, Operator};
pub use error::{SpecError, Unsatisfied};
pub use identity::{nil, Identity};
pub use leaf::{maybe, maybe_named, new, new_named, Leaf};

/// A composable boolean rule over values of type `T`.
///
/// Implementations must be immutable and pure: evaluating the same
/// specification against the same value always yields the same result.
/// The [`Display`](fmt::Display) impl renders the diagnostic form, e.g.
/// `all(.is_legal_age, not(.is_male))`.
///
/// # Example
///
/// ```rust
/// use specs::{Spec, Specification};
/// use std::fmt;
///
/// struct Even;
///
/// impl fmt::Display for Even {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("even")
///     }
/// }
///
/// impl Specification<i32> for Even {
///     fn evaluate(&self, value: &i32) -> bool {
///         value % 2 == 0
///     }
/// }
///
/// let spec = Spec::<i32>::from_specification(Even).and_fn(|n: &i32| *n > 0);
/// assert!(spec.evaluate(&4));
/// assert!(!spec.evaluate(&-4));
/// ```
pub trait Specification<T: ?Sized>: fmt::Display + Send + Sync {
    /// Check whether `value` satisfies this specification.
    fn evaluate(&self, value: &T) -> bool;

    /// Whether this is the "no constraint" element.
    ///
    /// The fluent combinators use this to apply the identity rules:
    /// `nil.and(x) == x`, `nil.or(x) == x`, `nil.not() == nil`.
    fn is_identity(&self) -> bool {
        false
    }

    /// The logical operator of a composite, `None` for other variants.
    fn operator(&self) -> Option<Operator> {
        None
    }

    /// Direct children of a composite, empty for other variants.
    fn children(&self) -> &[Spec<T>] {
        &[]
    }
}

/// Shared handle to an immutable specification tree.
///
/// Cloning is cheap: composites hold clones of their children's handles
/// rather than deep copies. A `Spec<T>` is `Send + Sync` and can be
/// evaluated from many threads at once.
pub struct Spec<T: ?Sized> {
    inner: Arc<dyn Specification<T>>,
}

impl<T: ?Sized + 'static> Spec<T> {
    /// Lift any [`Specification`] into a shared handle.
    pub fn from_specification<S>(spec: S) -> Self
    where
        S: Specification<T> + 'static,
    {
        Spec {
            inner: Arc::new(spec),
        }
    }

    /// Check whether `value` satisfies this specification.
    ///
    /// Panics raised by a wrapped predicate propagate unchanged.
    #[inline]
    pub fn evaluate(&self, value: &T) -> bool {
        self.inner.evaluate(value)
    }

    /// Render the diagnostic form of the tree.
    ///
    /// Leaves render as their name, the identity as `nil` and composites
    /// as `op(child, child, ...)`.
    pub fn describe(&self) -> String {
        self.inner.to_string()
    }

    /// Whether this is the identity specification.
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// The logical operator of a composite, `None` for leaves and identity.
    pub fn operator(&self) -> Option<Operator> {
        self.inner.operator()
    }

    /// Direct children of a composite.
    pub fn children(&self) -> &[Spec<T>] {
        self.inner.children()
    }

    /// Evaluate and report failures as an error carrying the description.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specs::new_named;
    ///
    /// let positive = new_named("positive", |n: &i32| *n > 0).unwrap();
    /// assert!(positive.check(&3).is_ok());
    ///
    /// let err = positive.check(&-3).unwrap_err();
    /// assert_eq!(err.to_string(), "value does not satisfy positive");
    /// ```
    pub fn check(&self, value: &T) -> Result<(), Unsatisfied> {
        if self.evaluate(value) {
            Ok(())
        } else {
            Err(Unsatisfied::new(self.describe()))
        }
    }

    /// Keep only the values that satisfy this specification.
    ///
    /// # Example
    ///
    /// ```rust
    /// use specs::new;
    ///
    /// let even = new(|n: &i32| n % 2 == 0);
    /// let kept: Vec<i32> = even.filter(1..=6).collect();
    /// assert_eq!(kept, vec![2, 4, 6]);
    /// ```
    pub fn filter<'a, I, V>(&'a self, values: I) -> impl Iterator<Item = V> + 'a
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: 'a,
        V: Borrow<T> + 'a,
    {
        values
            .into_iter()
            .filter(move |value| self.evaluate(value.borrow()))
    }

    /// Combine with AND logic: `all(self, other)`.
    ///
    /// On the identity this returns `other` unchanged.
    pub fn and(self, other: Spec<T>) -> Spec<T> {
        if self.is_identity() {
            return other;
        }
        all([self, other])
    }

    /// Combine with OR logic: `any(self, other)`.
    ///
    /// On the identity this returns `other` unchanged. Callers relying on
    /// classical logic should note that `nil.or(x)` behaves like `x`, not
    /// like an always-true specification.
    pub fn or(self, other: Spec<T>) -> Spec<T> {
        if self.is_identity() {
            return other;
        }
        any([self, other])
    }

    /// Negate this specification: `not(self)`.
    ///
    /// The identity negates to itself.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Spec<T> {
        not(self)
    }

    /// `all(self, not(other))`
    pub fn and_not(self, other: Spec<T>) -> Spec<T> {
        self.and(not(other))
    }

    /// `any(self, not(other))`
    pub fn or_not(self, other: Spec<T>) -> Spec<T> {
        self.or(not(other))
    }

    /// Wrap `predicate` with [`new`] and combine with AND logic.
    #[track_caller]
    pub fn and_fn<F>(self, predicate: F) -> Spec<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.and(new(predicate))
    }

    /// Wrap `predicate` with [`new`] and combine with OR logic.
    #[track_caller]
    pub fn or_fn<F>(self, predicate: F) -> Spec<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.or(new(predicate))
    }

    /// Wrap `predicate` with [`new`] and combine its negation with AND logic.
    #[track_caller]
    pub fn and_not_fn<F>(self, predicate: F) -> Spec<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.and_not(new(predicate))
    }

    /// Wrap `predicate` with [`new`] and combine its negation with OR logic.
    #[track_caller]
    pub fn or_not_fn<F>(self, predicate: F) -> Spec<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.or_not(new(predicate))
    }
}

impl<T: ?Sized> Clone for Spec<T> {
    fn clone(&self) -> Self {
        Spec {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Display for Spec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl<T: ?Sized> fmt::Debug for Spec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spec({})", self.inner)
    }
}

impl<T: ?Sized + 'static> Specification<T> for Spec<T> {
    fn evaluate(&self, value: &T) -> bool {
        self.inner.evaluate(value)
    }

    fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    fn operator(&self) -> Option<Operator> {
        self.inner.operator()
    }

    fn children(&self) -> &[Spec<T>] {
        self.inner.children()
    }
}

impl<T: ?Sized + 'static> From<Leaf<T>> for Spec<T> {
    fn from(leaf: Leaf<T>) -> Self {
        Spec::from_specification(leaf)
    }
}

impl<T: ?Sized + 'static> From<Identity<T>> for Spec<T> {
    fn from(identity: Identity<T>) -> Self {
        Spec::from_specification(identity)
    }
}

impl<T: ?Sized + 'static> From<Composite<T>> for Spec<T> {
    fn from(composite: Composite<T>) -> Self {
        Spec::from_specification(composite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive() -> Spec<i32> {
        new_named("positive", |n: &i32| *n > 0).unwrap()
    }

    fn even() -> Spec<i32> {
        new_named("even", |n: &i32| n % 2 == 0).unwrap()
    }

    #[test]
    fn test_and() {
        let spec = positive().and(even());
        assert!(spec.evaluate(&4));
        assert!(!spec.evaluate(&3));
        assert!(!spec.evaluate(&-4));
        assert_eq!(spec.describe(), "all(positive, even)");
    }

    #[test]
    fn test_or() {
        let spec = positive().or(even());
        assert!(spec.evaluate(&3));
        assert!(spec.evaluate(&-4));
        assert!(!spec.evaluate(&-3));
        assert_eq!(spec.describe(), "any(positive, even)");
    }

    #[test]
    fn test_not() {
        let spec = positive().not();
        assert!(spec.evaluate(&0));
        assert!(!spec.evaluate(&1));
        assert_eq!(spec.describe(), "not(positive)");
    }

    #[test]
    fn test_and_not_or_not() {
        let and_not = positive().and_not(even());
        assert!(and_not.evaluate(&3));
        assert!(!and_not.evaluate(&4));
        assert_eq!(and_not.describe(), "all(positive, not(even))");

        let or_not = positive().or_not(even());
        assert!(or_not.evaluate(&-3));
        assert!(!or_not.evaluate(&-4));
        assert_eq!(or_not.describe(), "any(positive, not(even))");
    }

    #[test]
    fn test_fn_variants() {
        let spec = positive().and_fn(|n: &i32| *n < 10);
        assert!(spec.evaluate(&5));
        assert!(!spec.evaluate(&50));

        let spec = positive().or_fn(|n: &i32| *n == -1);
        assert!(spec.evaluate(&-1));
        assert!(!spec.evaluate(&-2));

        let spec = positive().and_not_fn(|n: &i32| *n == 7);
        assert!(spec.evaluate(&6));
        assert!(!spec.evaluate(&7));

        let spec = positive().or_not_fn(|n: &i32| *n < 0);
        assert!(spec.evaluate(&0));
        assert!(!spec.evaluate(&-5));
    }

    #[test]
    fn test_chained_construction() {
        let spec = positive()
            .and(even())
            .and_not(new_named("big", |n: &i32| *n > 100).unwrap())
            .or(new_named("minus one", |n: &i32| *n == -1).unwrap());

        assert_eq!(
            spec.describe(),
            "any(all(all(positive, even), not(big)), minus one)"
        );
        assert!(spec.evaluate(&8));
        assert!(spec.evaluate(&-1));
        assert!(!spec.evaluate(&102));
        assert!(!spec.evaluate(&7));
    }

    #[test]
    fn test_combinators_do_not_touch_operands() {
        let base = positive();
        let _combined = base.clone().and(even());
        assert_eq!(base.describe(), "positive");
        assert!(base.evaluate(&3));
    }

    #[test]
    fn test_check() {
        let spec = positive().and(even());
        assert_eq!(spec.check(&2), Ok(()));

        let err = spec.check(&3).unwrap_err();
        assert_eq!(err.description(), "all(positive, even)");
    }

    #[test]
    fn test_filter() {
        let spec = positive().and(even());
        let values = vec![-2, -1, 0, 1, 2, 3, 4];
        let kept: Vec<&i32> = spec.filter(&values).collect();
        assert_eq!(kept, vec![&2, &4]);
    }

    #[test]
    fn test_inspection() {
        let spec = positive().and(even());
        assert_eq!(spec.operator(), Some(Operator::All));
        assert_eq!(spec.children().len(), 2);
        assert_eq!(spec.children()[0].describe(), "positive");

        let leaf = positive();
        assert_eq!(leaf.operator(), None);
        assert!(leaf.children().is_empty());
        assert!(!leaf.is_identity());
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", positive().not()), "Spec(not(positive))");
    }

    #[test]
    fn test_unsized_value_type() {
        let spec: Spec<str> = new_named::<str, _>("short", |s: &str| s.len() < 5)
            .unwrap()
            .and_fn(|s: &str| !s.is_empty());
        assert!(spec.evaluate("abc"));
        assert!(!spec.evaluate(""));
        assert!(!spec.evaluate("abcdef"));
    }

    #[test]
    fn test_spec_is_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Spec<i32>>();
        assert_send_sync::<Spec<str>>();
    }
}
