//! Memberwise comparer.
//!
//! `MemberwiseComparer` is the consumer of the exclusion marker: it compares
//! and hashes values of a `Memberwise` type, skipping every marked field.
//! Hash codes come from a `BuildHasher`, xxh3 by default, so they are stable
//! across runs and processes for the same seed.

use std::any::type_name;
use std::fmt;
use std::hash::BuildHasher;
use std::marker::PhantomData;
use std::ptr;

use tracing::debug;
use xxhash_rust::xxh3::Xxh3Builder;

use crate::descriptor::Memberwise;
use crate::error::Error;
use crate::validate::validate;

/// Equality and hash-code computation over the unmarked fields of `T`.
///
/// # Example
///
/// ```
/// use memberwise::{Memberwise, MemberwiseComparer};
///
/// #[derive(Memberwise)]
/// struct Point {
///     #[memberwise(ignore)]
///     x: i32,
///     y: i32,
/// }
///
/// let comparer = MemberwiseComparer::<Point>::new();
/// assert!(comparer.equals(&Point { x: 1, y: 5 }, &Point { x: 2, y: 5 }));
/// assert!(!comparer.equals(&Point { x: 1, y: 5 }, &Point { x: 1, y: 6 }));
/// assert_eq!(
///     comparer.hash_code(&Point { x: 1, y: 5 }),
///     comparer.hash_code(&Point { x: 2, y: 5 }),
/// );
/// ```
pub struct MemberwiseComparer<T: ?Sized, S = Xxh3Builder> {
    build_hasher: S,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Memberwise + ?Sized> MemberwiseComparer<T> {
    /// Comparer hashing with unseeded xxh3.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(Xxh3Builder::new())
    }

    /// Comparer hashing with xxh3 and the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_hasher(Xxh3Builder::new().with_seed(seed))
    }

    /// Validates the layout of `T` before building the comparer.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency reported by [`validate`].
    pub fn try_new() -> Result<Self, Error> {
        let summary = validate::<T>()?;
        debug!(
            type_name = summary.type_name,
            compared = summary.compared,
            ignored = summary.ignored,
            "memberwise comparer ready"
        );
        Ok(Self::new())
    }
}

impl<T: Memberwise + ?Sized> Default for MemberwiseComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, S> MemberwiseComparer<T, S> {
    /// Comparer hashing through a caller-supplied `BuildHasher`.
    #[must_use]
    pub const fn with_hasher(build_hasher: S) -> Self {
        Self {
            build_hasher,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn hasher(&self) -> &S {
        &self.build_hasher
    }
}

impl<T: Memberwise + ?Sized, S: BuildHasher> MemberwiseComparer<T, S> {
    /// Compares the unmarked fields of `a` and `b`.
    ///
    /// The same reference is always equal to itself, without looking at
    /// its fields.
    #[must_use]
    pub fn equals(&self, a: &T, b: &T) -> bool {
        ptr::eq(a, b) || a.memberwise_eq(b)
    }

    /// Like [`equals`](Self::equals), where two `None`s are equal and
    /// `None` never equals a value.
    #[must_use]
    pub fn equals_opt(&self, a: Option<&T>, b: Option<&T>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => self.equals(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Hash code over the unmarked fields of `value`.
    #[must_use]
    pub fn hash_code(&self, value: &T) -> u64 {
        self.build_hasher.hash_one(MemberwiseHashable(value))
    }

    /// Like [`hash_code`](Self::hash_code); `None` hashes to 0.
    #[must_use]
    pub fn hash_code_opt(&self, value: Option<&T>) -> u64 {
        value.map_or(0, |value| self.hash_code(value))
    }
}

impl<T: ?Sized, S: Clone> Clone for MemberwiseComparer<T, S> {
    fn clone(&self) -> Self {
        Self::with_hasher(self.build_hasher.clone())
    }
}

impl<T: ?Sized, S> fmt::Debug for MemberwiseComparer<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberwiseComparer")
            .field("type", &type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// Adapts `memberwise_hash` to `Hash` for `BuildHasher::hash_one`.
struct MemberwiseHashable<'a, T: ?Sized>(&'a T);

impl<T: Memberwise + ?Sized> std::hash::Hash for MemberwiseHashable<'_, T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.memberwise_hash(state);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::descriptor::Field;
    use std::collections::hash_map::RandomState;
    use std::hash::{Hash, Hasher};

    #[derive(Clone)]
    struct Reading {
        sensor: u32,
        value: i64,
        received_at: u64,
    }

    impl Memberwise for Reading {
        const FIELDS: &'static [Field] = &[
            Field::new("sensor", false),
            Field::new("value", false),
            Field::new("received_at", true),
        ];

        fn memberwise_eq(&self, other: &Self) -> bool {
            self.sensor == other.sensor && self.value == other.value
        }

        fn memberwise_hash<H: Hasher>(&self, state: &mut H) {
            self.sensor.hash(state);
            self.value.hash(state);
        }
    }

    fn reading(sensor: u32, value: i64, received_at: u64) -> Reading {
        Reading {
            sensor,
            value,
            received_at,
        }
    }

    #[test]
    fn test_marked_field_ignored() {
        let comparer = MemberwiseComparer::<Reading>::new();
        let a = reading(1, 20, 1000);
        let b = reading(1, 20, 2000);
        assert!(comparer.equals(&a, &b));
        assert_eq!(comparer.hash_code(&a), comparer.hash_code(&b));
        assert_ne!(a.received_at, b.received_at);
    }

    #[test]
    fn test_unmarked_field_compared() {
        let comparer = MemberwiseComparer::<Reading>::default();
        let a = reading(1, 20, 1000);
        let b = reading(1, 21, 1000);
        assert!(!comparer.equals(&a, &b));
        assert_ne!(comparer.hash_code(&a), comparer.hash_code(&b));
    }

    #[test]
    fn test_same_reference_is_equal() {
        let comparer = MemberwiseComparer::<Reading>::new();
        let a = reading(3, 4, 5);
        assert!(comparer.equals(&a, &a));
    }

    #[test]
    fn test_optional_values() {
        let comparer = MemberwiseComparer::<Reading>::new();
        let a = reading(1, 2, 3);
        assert!(comparer.equals_opt(None, None));
        assert!(!comparer.equals_opt(Some(&a), None));
        assert!(!comparer.equals_opt(None, Some(&a)));
        assert!(comparer.equals_opt(Some(&a), Some(&a.clone())));
        assert_eq!(comparer.hash_code_opt(None), 0);
        assert_eq!(comparer.hash_code_opt(Some(&a)), comparer.hash_code(&a));
    }

    #[test]
    fn test_hash_codes_are_deterministic() {
        let a = reading(7, -3, 0);
        let first = MemberwiseComparer::<Reading>::new().hash_code(&a);
        let second = MemberwiseComparer::<Reading>::new().hash_code(&a);
        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_changes_hash_codes() {
        let a = reading(7, -3, 0);
        let unseeded = MemberwiseComparer::<Reading>::new().hash_code(&a);
        let seeded = MemberwiseComparer::<Reading>::with_seed(0x5eed).hash_code(&a);
        assert_ne!(unseeded, seeded);
    }

    #[test]
    fn test_custom_build_hasher() {
        let comparer = MemberwiseComparer::<Reading, _>::with_hasher(RandomState::new());
        let a = reading(1, 2, 3);
        let b = reading(1, 2, 4);
        assert_eq!(comparer.hash_code(&a), comparer.hash_code(&b));
    }

    #[test]
    fn test_try_new_validates() {
        assert!(MemberwiseComparer::<Reading>::try_new().is_ok());
    }

    #[test]
    fn test_debug_names_type() {
        let comparer = MemberwiseComparer::<Reading>::new();
        assert!(format!("{comparer:?}").contains("Reading"));
    }
}
