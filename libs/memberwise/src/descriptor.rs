//! Field descriptors and the `Memberwise` trait.
//!
//! A `Memberwise` type exposes a static table of its fields together with
//! the state of the `#[memberwise(ignore)]` marker on each of them. The table
//! is produced at compile time by `#[derive(Memberwise)]`; there is no runtime
//! reflection involved.

use std::any::type_name;
use std::hash::Hasher;

use crate::error::Error;

/// Static description of a single field.
///
/// `path` is the field name for named fields and the position for tuple
/// fields (`"0"`, `"1"`, ...). Fields of enum variants are prefixed with the
/// variant name (`"Circle.radius"`, `"Rect.0"`). Raw identifiers are recorded
/// without the `r#` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    path: &'static str,
    ignored: bool,
}

impl Field {
    #[must_use]
    pub const fn new(path: &'static str, ignored: bool) -> Self {
        Self { path, ignored }
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Whether the field carries the exclusion marker.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        self.ignored
    }
}

/// Memberwise equality and hashing with per-field exclusion.
///
/// Implementations must keep three things consistent: `FIELDS`,
/// `is_ignored`, and the set of fields actually read by `memberwise_eq` and
/// `memberwise_hash`. The derive guarantees this. Hand-written impls can be
/// checked with [`validate`](crate::validate).
///
/// # Example
///
/// ```
/// use memberwise::Memberwise;
///
/// #[derive(Memberwise)]
/// struct Point {
///     #[memberwise(ignore)]
///     x: i32,
///     y: i32,
/// }
///
/// assert!(Point::is_ignored("x"));
/// assert!(!Point::is_ignored("y"));
/// assert!(Point { x: 1, y: 5 }.memberwise_eq(&Point { x: 2, y: 5 }));
/// ```
pub trait Memberwise {
    /// Every field of the type in declaration order, marked or not.
    const FIELDS: &'static [Field];

    /// Whether the field at `path` carries the exclusion marker.
    ///
    /// Unknown paths report `false`. Use [`query`] to tell them apart.
    fn is_ignored(path: &str) -> bool {
        Self::FIELDS
            .iter()
            .any(|field| field.ignored && field.path == path)
    }

    /// Compares all fields that are not marked.
    fn memberwise_eq(&self, other: &Self) -> bool;

    /// Feeds all fields that are not marked into `state`.
    fn memberwise_hash<H: Hasher>(&self, state: &mut H);
}

/// Looks up the descriptor of `path`.
#[must_use]
pub fn field<T: Memberwise + ?Sized>(path: &str) -> Option<&'static Field> {
    T::FIELDS.iter().find(|field| field.path == path)
}

/// Fields that take part in equality and hashing.
pub fn compared_fields<T: Memberwise + ?Sized>() -> impl Iterator<Item = &'static Field> {
    T::FIELDS.iter().filter(|field| !field.ignored)
}

/// Fields carrying the exclusion marker.
pub fn ignored_fields<T: Memberwise + ?Sized>() -> impl Iterator<Item = &'static Field> {
    T::FIELDS.iter().filter(|field| field.ignored)
}

/// Checked presence query.
///
/// # Errors
///
/// Returns [`Error::UnknownField`] if `T` declares no field at `path`.
pub fn query<T: Memberwise + ?Sized>(path: &str) -> Result<bool, Error> {
    if field::<T>(path).is_none() {
        return Err(Error::UnknownField {
            type_name: type_name::<T>(),
            path: path.to_owned(),
        });
    }
    Ok(T::is_ignored(path))
}
