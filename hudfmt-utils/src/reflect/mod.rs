//! Type-name introspection for debug output
//!
//! Names come from a [`TypeNameSource`] supplied by the host. Whatever the
//! source reports, `::` path separators are normalised to `.` so names read
//! the same regardless of where they came from.

pub mod registry;

use std::any::Any;

pub use registry::{NativeTypeNames, TypeRegistry};

/// Host capability resolving the fully qualified type name of a live value
pub trait TypeNameSource {
    /// `None` when the type is unknown to this source
    fn type_name_of<T: Any>(&self, obj: &T) -> Option<String>;
}

impl<S: TypeNameSource + ?Sized> TypeNameSource for &S {
    fn type_name_of<T: Any>(&self, obj: &T) -> Option<String> {
        (**self).type_name_of(obj)
    }
}

/// Replace `::` separators with `.`
pub fn qualify(raw: &str) -> String {
    raw.replace("::", ".")
}

/// Segment after the last `.` of a qualified name
///
/// Only the path before the first `<` is searched, so generic arguments stay
/// intact: `alloc.vec.Vec<alloc.string.String>` shortens to
/// `Vec<alloc.string.String>`. This differs from a plain "after the last `.`"
/// cut, which would give `String>`; names without `<` behave identically.
pub fn simple_name(qualified: &str) -> &str {
    let path_end = qualified.find('<').unwrap_or(qualified.len());
    match qualified[..path_end].rfind('.') {
        Some(dot) => &qualified[dot + 1..],
        None => qualified,
    }
}

/// Class name of `obj` as reported by `source`
///
/// `None` stands for a missing object or a type the source cannot resolve.
pub fn class_name<S, T>(source: &S, obj: Option<&T>, simple: bool) -> Option<String>
where
    S: TypeNameSource,
    T: Any,
{
    let Some(obj) = obj else {
        tracing::debug!("No object given for class name lookup");
        return None;
    };

    let Some(raw) = source.type_name_of(obj) else {
        tracing::debug!(
            type_name = std::any::type_name::<T>(),
            "Type name source could not resolve type"
        );
        return None;
    };

    let qualified = qualify(&raw);
    if simple {
        Some(simple_name(&qualified).to_string())
    } else {
        Some(qualified)
    }
}

/// Whether both objects report the same class name
///
/// Two unresolvable objects compare equal, as two missing objects do.
pub fn same_class_name<S, A, B>(source: &S, a: Option<&A>, b: Option<&B>, simple: bool) -> bool
where
    S: TypeNameSource,
    A: Any,
    B: Any,
{
    class_name(source, a, simple) == class_name(source, b, simple)
}

/// [`class_name`] backed by the compiler's own type names
pub fn native_class_name<T: Any>(obj: Option<&T>, simple: bool) -> Option<String> {
    class_name(&NativeTypeNames, obj, simple)
}
