//! Logical combinators: `not`, `all` and `any`

use std::fmt;

use super::identity::nil;
use super::{Spec, Specification};

/// The logical operator of a [`Composite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Negation of a single child.
    Not,
    /// Every child must hold. Stops at the first failing child.
    All,
    /// At least one child must hold. Stops at the first passing child.
    Any,
}

impl Operator {
    /// The name used when rendering, e.g. `all`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Not => "not",
            Operator::All => "all",
            Operator::Any => "any",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A specification derived from one or more child specifications.
///
/// Built only through [`not`], [`all`] and [`any`], which guarantee the
/// child list is never empty. Renders as `op(child, child, ...)`.
pub struct Composite<T: ?Sized> {
    operator: Operator,
    children: Vec<Spec<T>>,
}

impl<T: ?Sized> Composite<T> {
    /// # Panics
    ///
    /// Panics if `children` is empty, or if a `not` does not have exactly
    /// one child. The factories rule both out; reaching either means the
    /// emptiness guard is broken.
    fn new(operator: Operator, children: Vec<Spec<T>>) -> Self {
        assert!(
            !children.is_empty(),
            "{} composite built without children; empty composites must be the identity",
            operator
        );
        if operator == Operator::Not {
            assert_eq!(children.len(), 1, "not composite takes exactly one child");
        }
        Composite { operator, children }
    }

    /// The operator combining the children.
    pub fn operator(&self) -> Operator {
        self.operator
    }
}

impl<T: ?Sized> Clone for Composite<T> {
    fn clone(&self) -> Self {
        Composite {
            operator: self.operator,
            children: self.children.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Composite<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("operator", &self.operator)
            .field("children", &self.children)
            .finish()
    }
}

impl<T: ?Sized> fmt::Display for Composite<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.operator)?;
        for (i, child) in self.children.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", child)?;
        }
        f.write_str(")")
    }
}

impl<T: ?Sized + 'static> Specification<T> for Composite<T> {
    fn evaluate(&self, value: &T) -> bool {
        match self.operator {
            Operator::Not => !self.children[0].evaluate(value),
            Operator::All => self.children.iter().all(|child| child.evaluate(value)),
            Operator::Any => self.children.iter().any(|child| child.evaluate(value)),
        }
    }

    fn operator(&self) -> Option<Operator> {
        Some(self.operator)
    }

    fn children(&self) -> &[Spec<T>] {
        &self.children
    }
}

/// Negate a specification.
///
/// Negating the identity returns the identity.
///
/// # Example
///
/// ```rust
/// use specs::{new_named, nil, not, Spec};
///
/// let minor = not(new_named("adult", |age: &u32| *age >= 18).unwrap());
/// assert!(minor.evaluate(&12));
/// assert_eq!(minor.to_string(), "not(adult)");
///
/// let unconstrained: Spec<u32> = not(nil());
/// assert_eq!(unconstrained.to_string(), "nil");
/// ```
pub fn not<T: ?Sized + 'static>(spec: Spec<T>) -> Spec<T> {
    if spec.is_identity() {
        return spec;
    }
    Spec::from(Composite::new(Operator::Not, vec![spec]))
}

/// Specification satisfied when every child is.
///
/// Evaluation stops at the first child that fails. With no children this
/// returns the identity.
///
/// # Example
///
/// ```rust
/// use specs::{all, new_named, Spec};
///
/// let positive = new_named("positive", |n: &i32| *n > 0).unwrap();
/// let even = new_named("even", |n: &i32| n % 2 == 0).unwrap();
///
/// let spec = all([positive, even]);
/// assert!(spec.evaluate(&4));
/// assert!(!spec.evaluate(&3));
/// assert_eq!(spec.to_string(), "all(positive, even)");
///
/// let empty: Spec<i32> = all([]);
/// assert!(empty.is_identity());
/// ```
pub fn all<T, I>(specs: I) -> Spec<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Spec<T>>,
{
    aggregate(Operator::All, specs)
}

/// Specification satisfied when at least one child is.
///
/// Evaluation stops at the first child that holds. With no children this
/// returns the identity, so an empty `any` is satisfied by every value.
///
/// # Example
///
/// ```rust
/// use specs::{any, new_named};
///
/// let negative = new_named("negative", |n: &i32| *n < 0).unwrap();
/// let zero = new_named("zero", |n: &i32| *n == 0).unwrap();
///
/// let spec = any([negative, zero]);
/// assert!(spec.evaluate(&0));
/// assert!(!spec.evaluate(&1));
/// assert_eq!(spec.to_string(), "any(negative, zero)");
/// ```
pub fn any<T, I>(specs: I) -> Spec<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Spec<T>>,
{
    aggregate(Operator::Any, specs)
}

/// Specification satisfied when no child is: `not(any(specs))`.
///
/// With no children this returns the identity.
///
/// # Example
///
/// ```rust
/// use specs::{new_named, none};
///
/// let negative = new_named("negative", |n: &i32| *n < 0).unwrap();
/// let zero = new_named("zero", |n: &i32| *n == 0).unwrap();
///
/// let spec = none([negative, zero]);
/// assert!(spec.evaluate(&1));
/// assert!(!spec.evaluate(&0));
/// assert_eq!(spec.to_string(), "not(any(negative, zero))");
/// ```
pub fn none<T, I>(specs: I) -> Spec<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Spec<T>>,
{
    not(any(specs))
}

fn aggregate<T, I>(operator: Operator, specs: I) -> Spec<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Spec<T>>,
{
    let children: Vec<Spec<T>> = specs.into_iter().collect();
    if children.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::trace!(operator = %operator, "empty composite replaced by identity");
        return nil();
    }
    Spec::from(Composite::new(operator, children))
}
