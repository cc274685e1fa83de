//! Diagnostic names for predicates
//!
//! Leaf specifications built without an explicit name are labelled from the
//! predicate's type, as reported by [`std::any::type_name`]:
//!
//! | Predicate | Label |
//! |---|---|
//! | method on the value type, `Employee::is_legal_age` | `.is_legal_age` |
//! | method on a built-in value type, `str::is_empty` | `.is_empty` |
//! | any other named function, `rules::is_adult` | `my_crate::rules::is_adult` |
//! | generic function, `rules::is_set::<u8>` | `my_crate::rules::is_set<u8>` |
//! | closure | `<anonymous: src/rules.rs:42>` |
//! | function pointer, boxed `dyn Fn`, ... | `<no-name>` |
//!
//! `type_name` is best effort and its output may change between compiler
//! releases, so labels are for humans only. Two equivalent predicates may
//! render differently; never compare labels to decide semantics.

use std::any::type_name;
use std::panic::Location;

/// Label for predicates whose type carries no usable path.
pub(crate) const NO_NAME: &str = "<no-name>";

const CLOSURE_MARKER: &str = "{{closure}}";

/// Derive the label for predicate type `F` over value type `T`.
///
/// `site` is where the leaf was constructed; it identifies closures.
pub(crate) fn resolve<T: ?Sized, F>(site: &Location<'_>) -> String {
    label(type_name::<T>(), type_name::<F>(), site)
}

fn label(owner: &str, path: &str, site: &Location<'_>) -> String {
    if path.contains(CLOSURE_MARKER) {
        return format!("<anonymous: {}:{}>", site.file(), site.line());
    }

    let Some((prefix, name)) = named_item(path) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(predicate = path, "predicate has no usable name");
        return NO_NAME.to_string();
    };

    if is_method_of(prefix, owner) {
        return format!(".{}", name);
    }

    path.to_string()
}

/// Split `path` into its parent path and the bare name of the item it ends
/// with, or `None` when it names no item.
fn named_item(path: &str) -> Option<(&str, &str)> {
    const ANONYMOUS_PREFIXES: [&str; 7] = ["fn(", "unsafe fn(", "for<", "&", "*", "(", "["];

    if ANONYMOUS_PREFIXES.iter().any(|p| path.starts_with(p)) || path.contains("dyn ") {
        return None;
    }

    let (prefix, last) = split_last_segment(path)?;
    let name = strip_generics(last);
    is_identifier(name).then_some((prefix, name))
}

fn is_method_of(prefix: &str, owner: &str) -> bool {
    // inherent impls on built-in types render as `core::str::<impl str>`
    prefix == owner || prefix.ends_with(&format!("<impl {}>", owner))
}

/// Split at the last `::` outside any `<...>` argument list.
fn split_last_segment(path: &str) -> Option<(&str, &str)> {
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut split = None;

    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => split = Some(i),
            _ => {}
        }
    }

    split.map(|i| (&path[..i], &path[i + 2..]))
}

fn strip_generics(segment: &str) -> &str {
    match segment.find('<') {
        Some(i) if segment.ends_with('>') => &segment[..i],
        _ => segment,
    }
}

fn is_identifier(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
}
