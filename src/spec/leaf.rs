//! Leaf specifications wrapping a single predicate

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use super::error::SpecError;
use super::identity::nil;
use super::name;
use super::{Spec, Specification};

/// A named predicate with no children.
///
/// The name is diagnostic only. It never takes part in evaluation.
pub struct Leaf<T: ?Sized> {
    name: String,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Leaf<T> {
    /// Wrap `predicate`, labelling it from its type.
    ///
    /// See [`new`] for the labelling rules.
    #[track_caller]
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let name = name::resolve::<T, F>(Location::caller());
        Leaf {
            name,
            predicate: Arc::new(predicate),
        }
    }

    /// Wrap `predicate` under an explicit name.
    ///
    /// Fails with [`SpecError::EmptyName`] if `name` is empty.
    pub fn named<F>(name: impl Into<String>, predicate: F) -> Result<Self, SpecError>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(SpecError::EmptyName);
        }
        Ok(Leaf {
            name,
            predicate: Arc::new(predicate),
        })
    }

    /// The diagnostic name of this leaf.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The same predicate under a different name.
    pub fn with_name(&self, name: impl Into<String>) -> Result<Self, SpecError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SpecError::EmptyName);
        }
        Ok(Leaf {
            name,
            predicate: Arc::clone(&self.predicate),
        })
    }
}

impl<T: ?Sized> Clone for Leaf<T> {
    fn clone(&self) -> Self {
        Leaf {
            name: self.name.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Leaf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized> fmt::Display for Leaf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<T: ?Sized> Specification<T> for Leaf<T> {
    #[inline]
    fn evaluate(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

/// Wrap a predicate into a specification.
///
/// The leaf is labelled from the predicate itself:
/// - a method declared on `T` renders as `.method_name`
/// - any other named function renders as its full path
/// - a closure renders as `<anonymous: file:line>` of this call
/// - anything else, such as a function pointer, renders as `<no-name>`
///
/// # Example
///
/// ```rust
/// use specs::new;
///
/// struct Order {
///     total: u32,
/// }
///
/// impl Order {
///     fn is_large(&self) -> bool {
///         self.total > 1000
///     }
/// }
///
/// let spec = new(Order::is_large);
/// assert!(spec.evaluate(&Order { total: 5000 }));
/// assert_eq!(spec.to_string(), ".is_large");
///
/// let spec = new(|o: &Order| o.total == 0);
/// assert!(spec.to_string().starts_with("<anonymous: "));
/// ```
#[track_caller]
pub fn new<T, F>(predicate: F) -> Spec<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Spec::from(Leaf::new(predicate))
}

/// Wrap a predicate under an explicit name.
///
/// # Errors
///
/// Returns [`SpecError::EmptyName`] if `name` is empty.
///
/// # Example
///
/// ```rust
/// use specs::new_named;
///
/// let adult = new_named("adult", |age: &u32| *age >= 18).unwrap();
/// assert_eq!(adult.to_string(), "adult");
/// assert!(new_named("", |age: &u32| *age >= 18).is_err());
/// ```
pub fn new_named<T, F>(name: impl Into<String>, predicate: F) -> Result<Spec<T>, SpecError>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Leaf::named(name, predicate).map(Spec::from)
}

/// Wrap an optional predicate; `None` yields the identity.
///
/// # Example
///
/// ```rust
/// use specs::maybe;
///
/// let rule: Option<fn(&i32) -> bool> = None;
/// let spec = maybe(rule);
/// assert!(spec.is_identity());
/// assert!(spec.evaluate(&-7));
/// ```
#[track_caller]
pub fn maybe<T, F>(predicate: Option<F>) -> Spec<T>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    match predicate {
        Some(predicate) => new(predicate),
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!("no predicate given, using identity specification");
            nil()
        }
    }
}

/// Wrap an optional predicate under an explicit name.
///
/// The name is validated first, so an empty name fails even when no
/// predicate is given. A valid name with `None` yields the identity and the
/// name is dropped.
///
/// # Errors
///
/// Returns [`SpecError::EmptyName`] if `name` is empty.
pub fn maybe_named<T, F>(
    name: impl Into<String>,
    predicate: Option<F>,
) -> Result<Spec<T>, SpecError>
where
    T: ?Sized + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let name = name.into();
    if name.is_empty() {
        return Err(SpecError::EmptyName);
    }
    match predicate {
        Some(predicate) => new_named(name, predicate),
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(name = %name, "no predicate given, using identity specification");
            Ok(nil())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Parcel {
        weight: u32,
    }

    impl Parcel {
        fn is_heavy(&self) -> bool {
            self.weight > 20
        }
    }

    fn is_weightless(parcel: &Parcel) -> bool {
        parcel.weight == 0
    }

    #[test]
    fn test_new_evaluates_predicate() {
        let spec = new(Parcel::is_heavy);
        assert!(spec.evaluate(&Parcel { weight: 30 }));
        assert!(!spec.evaluate(&Parcel { weight: 3 }));
    }

    #[test]
    fn test_new_names() {
        assert_eq!(new(Parcel::is_heavy).describe(), ".is_heavy");
        assert_eq!(
            new(is_weightless).describe(),
            "specs::spec::leaf::tests::is_weightless"
        );

        let line = line!() + 1;
        let spec = new(|p: &Parcel| p.weight == 1);
        assert_eq!(
            spec.describe(),
            format!("<anonymous: {}:{}>", file!(), line)
        );
    }

    #[test]
    fn test_new_named() {
        let spec = new_named("heavy", Parcel::is_heavy).unwrap();
        assert_eq!(spec.describe(), "heavy");
        assert!(spec.evaluate(&Parcel { weight: 21 }));
    }

    #[test]
    fn test_new_named_rejects_empty_name() {
        let result = new_named("", Parcel::is_heavy);
        assert_eq!(result.unwrap_err(), SpecError::EmptyName);
    }

    #[test]
    fn test_maybe() {
        let spec = maybe(Some(Parcel::is_heavy));
        assert_eq!(spec.describe(), ".is_heavy");

        let spec = maybe::<Parcel, fn(&Parcel) -> bool>(None);
        assert!(spec.is_identity());
        assert!(spec.evaluate(&Parcel { weight: 0 }));
    }

    #[test]
    fn test_maybe_named() {
        let spec = maybe_named("heavy", Some(Parcel::is_heavy)).unwrap();
        assert_eq!(spec.describe(), "heavy");

        let spec = maybe_named::<Parcel, fn(&Parcel) -> bool>("heavy", None).unwrap();
        assert!(spec.is_identity());
        assert_eq!(spec.describe(), "nil");

        let result = maybe_named::<Parcel, fn(&Parcel) -> bool>("", None);
        assert_eq!(result.unwrap_err(), SpecError::EmptyName);

        let result = maybe_named("", Some(Parcel::is_heavy));
        assert_eq!(result.unwrap_err(), SpecError::EmptyName);
    }

    #[test]
    fn test_with_name() {
        let leaf = Leaf::new(Parcel::is_heavy);
        let renamed = leaf.with_name("heavy parcel").unwrap();
        assert_eq!(leaf.name(), ".is_heavy");
        assert_eq!(renamed.name(), "heavy parcel");
        assert!(renamed.evaluate(&Parcel { weight: 25 }));
        assert_eq!(leaf.with_name("").unwrap_err(), SpecError::EmptyName);
    }

    #[test]
    fn test_predicate_invoked_once_per_evaluation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let spec = new(move |p: &Parcel| {
            counter.fetch_add(1, Ordering::SeqCst);
            p.weight > 0
        });

        spec.evaluate(&Parcel { weight: 1 });
        spec.evaluate(&Parcel { weight: 1 });
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    #[should_panic(expected = "predicate failed")]
    fn test_predicate_panic_propagates() {
        let spec = new(|_: &Parcel| -> bool { panic!("predicate failed") });
        spec.evaluate(&Parcel { weight: 1 });
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn test_missing_predicate_is_traced() {
        let _ = maybe_named::<Parcel, fn(&Parcel) -> bool>("heavy", None);
        assert!(logs_contain(
            "no predicate given, using identity specification"
        ));
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn test_unnamed_predicate_is_traced() {
        let pointer: fn(&Parcel) -> bool = Parcel::is_heavy;
        assert_eq!(new(pointer).describe(), "<no-name>");
        assert!(logs_contain("predicate has no usable name"));
    }

    #[test]
    fn test_debug() {
        let leaf = Leaf::named("heavy", Parcel::is_heavy).unwrap();
        assert_eq!(format!("{:?}", leaf), "Leaf { name: \"heavy\", .. }");
    }
}
