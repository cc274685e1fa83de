//! Testing utilities for code built on specifications
//!
//! Assertion macros that report the specification's description on failure,
//! and (with the `proptest` feature) strategies that generate random
//! specification trees.
//!
//! # Examples
//!
//! ```rust
//! use specs::{assert_describes, assert_satisfied, assert_unsatisfied, new_named};
//!
//! let positive = new_named("positive", |n: &i32| *n > 0).unwrap();
//!
//! assert_satisfied!(positive, 3);
//! assert_unsatisfied!(positive, -3);
//! assert_describes!(positive.not(), "not(positive)");
//! ```

/// Assert that a value satisfies a specification.
///
/// On failure the panic message names the specification and the value.
///
/// # Example
///
/// ```rust
/// use specs::{assert_satisfied, new};
///
/// assert_satisfied!(new(|n: &u8| *n < 10), 3);
/// ```
#[macro_export]
macro_rules! assert_satisfied {
    ($spec:expr, $value:expr) => {{
        let spec = &$spec;
        let value = &$value;
        if !spec.evaluate(value) {
            panic!("Expected {:?} to satisfy {}", value, spec);
        }
    }};
}

/// Assert that a value does not satisfy a specification.
///
/// # Example
///
/// ```rust
/// use specs::{assert_unsatisfied, new};
///
/// assert_unsatisfied!(new(|n: &u8| *n < 10), 30);
/// ```
#[macro_export]
macro_rules! assert_unsatisfied {
    ($spec:expr, $value:expr) => {{
        let spec = &$spec;
        let value = &$value;
        if spec.evaluate(value) {
            panic!("Expected {:?} not to satisfy {}", value, spec);
        }
    }};
}

/// Assert the rendered form of a specification.
///
/// # Example
///
/// ```rust
/// use specs::{all, assert_describes, new_named};
///
/// let a = new_named("a", |n: &i32| *n > 0).unwrap();
/// let b = new_named("b", |n: &i32| *n < 9).unwrap();
/// assert_describes!(all([a, b.not()]), "all(a, not(b))");
/// ```
#[macro_export]
macro_rules! assert_describes {
    ($spec:expr, $expected:expr) => {
        assert_eq!($spec.describe(), $expected);
    };
}

/// Proptest strategies for specification trees over `i32`.
///
/// A generated [`SpecTree`] is plain data: [`SpecTree::build`] turns it into
/// a [`Spec`](crate::Spec) and [`SpecTree::expected`] evaluates it directly,
/// so properties can compare the two.
///
/// # Example
///
/// ```rust
/// use proptest::prelude::*;
/// use specs::testing::strategies::spec_tree;
///
/// proptest!(|(tree in spec_tree(), value in any::<i32>())| {
///     prop_assert_eq!(tree.build().evaluate(&value), tree.expected(&value));
/// });
/// ```
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;

    use crate::{all, new_named, nil, not, Spec};

    /// Data description of a specification tree.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SpecTree {
        /// The identity.
        Nil,
        /// `n > bound`
        GreaterThan(i32),
        /// `n % 2 == 0`
        Even,
        /// Negation.
        Not(Box<SpecTree>),
        /// Conjunction.
        All(Vec<SpecTree>),
        /// Disjunction.
        Any(Vec<SpecTree>),
    }

    impl SpecTree {
        /// Build the specification this tree describes.
        pub fn build(&self) -> Spec<i32> {
            match self {
                SpecTree::Nil => nil(),
                SpecTree::GreaterThan(bound) => {
                    let bound = *bound;
                    leaf(format!("gt{}", bound), move |n| *n > bound)
                }
                SpecTree::Even => leaf("even".to_string(), |n| n % 2 == 0),
                SpecTree::Not(inner) => not(inner.build()),
                SpecTree::All(children) => all(children.iter().map(SpecTree::build)),
                SpecTree::Any(children) => crate::any(children.iter().map(SpecTree::build)),
            }
        }

        /// Whether the built specification collapses to the identity.
        pub fn is_nil(&self) -> bool {
            match self {
                SpecTree::Nil => true,
                SpecTree::Not(inner) => inner.is_nil(),
                SpecTree::All(children) | SpecTree::Any(children) => children.is_empty(),
                _ => false,
            }
        }

        /// Reference evaluation, independent of the specification engine.
        pub fn expected(&self, value: &i32) -> bool {
            if self.is_nil() {
                return true;
            }
            match self {
                SpecTree::Nil => true,
                SpecTree::GreaterThan(bound) => *value > *bound,
                SpecTree::Even => value % 2 == 0,
                SpecTree::Not(inner) => !inner.expected(value),
                SpecTree::All(children) => children.iter().all(|c| c.expected(value)),
                SpecTree::Any(children) => children.iter().any(|c| c.expected(value)),
            }
        }
    }

    fn leaf<F>(name: String, predicate: F) -> Spec<i32>
    where
        F: Fn(&i32) -> bool + Send + Sync + 'static,
    {
        match new_named(name, predicate) {
            Ok(spec) => spec,
            Err(err) => unreachable!("generated leaf names are never empty: {}", err),
        }
    }

    /// Strategy for leaves and the identity.
    pub fn leaf_tree() -> impl Strategy<Value = SpecTree> {
        prop_oneof![
            1 => Just(SpecTree::Nil),
            4 => (-100i32..100).prop_map(SpecTree::GreaterThan),
            2 => Just(SpecTree::Even),
        ]
    }

    /// Strategy for trees up to four levels deep.
    pub fn spec_tree() -> impl Strategy<Value = SpecTree> {
        leaf_tree().prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                inner.clone().prop_map(|t| SpecTree::Not(Box::new(t))),
                prop::collection::vec(inner.clone(), 0..4).prop_map(SpecTree::All),
                prop::collection::vec(inner, 0..4).prop_map(SpecTree::Any),
            ]
        })
    }

}
