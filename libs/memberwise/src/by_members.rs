use std::hash::{Hash, Hasher};
use std::ops::Deref;

use crate::descriptor::Memberwise;

/// Wrapper giving a `Memberwise` type memberwise `PartialEq`, `Eq` and `Hash`.
///
/// Useful for keying hash maps and sets by the unmarked fields of a type
/// that keeps its own `PartialEq` (or has none).
///
/// ```
/// use std::collections::HashSet;
/// use memberwise::{ByMembers, Memberwise};
///
/// #[derive(Memberwise)]
/// struct Job {
///     name: &'static str,
///     #[memberwise(ignore)]
///     attempts: u32,
/// }
///
/// let mut seen = HashSet::new();
/// assert!(seen.insert(ByMembers(Job { name: "build", attempts: 1 })));
/// assert!(!seen.insert(ByMembers(Job { name: "build", attempts: 2 })));
/// ```
///
/// `Eq` is only sound when every compared field is reflexive; a compared
/// `f64` holding NaN breaks it exactly as it would for a derived `Eq`.
#[derive(Debug, Clone, Copy, Default)]
#[repr(transparent)]
pub struct ByMembers<T>(pub T);

impl<T> ByMembers<T> {
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Memberwise> PartialEq for ByMembers<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.memberwise_eq(&other.0)
    }
}

impl<T: Memberwise> Eq for ByMembers<T> {}

impl<T: Memberwise> Hash for ByMembers<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.memberwise_hash(state);
    }
}

impl<T> Deref for ByMembers<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for ByMembers<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
