//! Joining sequences and key sets for debug overlays

use std::fmt::{Display, Write};

const SEPARATOR: &str = ", ";

/// Join values with `", "`, in iteration order
///
/// Anything iterable whose items implement `Display` works. For a list that
/// may be missing, use [`format_array_opt`].
pub fn format_array<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();

    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}", value);
    }

    out
}

/// [`format_array`] for a list that may be missing; `None` yields `""`
pub fn format_array_opt<I>(values: Option<I>) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format_array(values.into_iter().flatten())
}

/// Join the keys of a mapping with `", "`, in the mapping's iteration order
///
/// Accepts anything yielding `(key, value)` pairs, e.g. `&HashMap`,
/// `&BTreeMap`, or `maybe_map.into_iter().flatten()` for a mapping that may
/// be missing. Values are ignored. Hash maps have no stable order, so only
/// ordered maps give a predictable result.
pub fn format_map_keys<M, K, V>(mapping: M) -> String
where
    M: IntoIterator<Item = (K, V)>,
    K: Display,
{
    let mut out = String::new();

    for (key, _) in mapping {
        let _ = write!(out, "{}{}", key, SEPARATOR);
    }

    // An empty mapping never wrote a separator
    if out.ends_with(SEPARATOR) {
        out.truncate(out.len() - SEPARATOR.len());
    }

    out
}
