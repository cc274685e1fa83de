//! # Specs
//!
//! Business rules as composable, named, inspectable values.
//!
//! A specification wraps a boolean predicate over some value type. Rules such
//! as "is of legal age" or "is eligible" become first-class values that can
//! be combined with `and`, `or` and `not`, evaluated against candidates and
//! rendered for diagnostics.
//!
//! ## Quick Example
//!
//! ```rust
//! use specs::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! enum Gender {
//!     Male,
//!     Female,
//! }
//!
//! #[derive(Debug)]
//! struct Employee {
//!     age: u32,
//!     gender: Gender,
//! }
//!
//! impl Employee {
//!     fn is_legal_age(&self) -> bool {
//!         self.age > 18
//!     }
//!
//!     fn is_male(&self) -> bool {
//!         self.gender == Gender::Male
//!     }
//! }
//!
//! let bob = Employee { age: 19, gender: Gender::Male };
//! let alice = Employee { age: 17, gender: Gender::Female };
//!
//! let spec = new(Employee::is_legal_age).and_fn(Employee::is_male);
//!
//! assert_eq!(spec.to_string(), "all(.is_legal_age, .is_male)");
//! assert!(spec.evaluate(&bob));
//! assert!(!spec.evaluate(&alice));
//! ```
//!
//! ## The identity
//!
//! [`nil`] is satisfied by every value and is the starting point for rules
//! assembled at runtime. Its combinators follow this crate's conventions
//! rather than classical logic: `nil.and(x)` and `nil.or(x)` are both `x`,
//! and `nil.not()` is `nil`. Empty [`all`] and [`any`] return it too.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when the identity is substituted or a
//!   predicate cannot be named
//! - `proptest`: expose `testing::strategies` for property tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod spec;
pub mod testing;

// Re-exports
pub use spec::{
    all, any, maybe, maybe_named, new, new_named, nil, none, not, Composite, Identity, Leaf,
    Operator, Spec, SpecError, Specification, Unsatisfied,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::spec::{
        all, any, maybe, maybe_named, new, new_named, nil, none, not, Spec, SpecError,
        Specification,
    };
}
