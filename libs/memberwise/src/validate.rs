//! Startup validation of `Memberwise` implementations.
//!
//! Derived impls are consistent by construction. Hand-written impls are
//! not, and a mismatch between the descriptor table and `is_ignored` would
//! silently change which fields a comparer treats as excluded.

use std::any::type_name;
use std::collections::HashSet;

use tracing::{debug, warn};

use crate::descriptor::{Memberwise, compared_fields, ignored_fields};
use crate::error::Error;

/// Outcome of a successful [`validate`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub type_name: &'static str,
    /// Number of fields taking part in equality and hashing.
    pub compared: usize,
    /// Number of fields carrying the exclusion marker.
    pub ignored: usize,
}

/// Checks the descriptor table of `T`.
///
/// Every path must be unique and `T::is_ignored` must agree with the
/// `ignored` flag of every descriptor.
///
/// # Errors
///
/// Returns [`Error::DuplicateField`] or [`Error::InconsistentMarker`] for
/// the first offending descriptor.
pub fn validate<T: Memberwise + ?Sized>() -> Result<Summary, Error> {
    let type_name = type_name::<T>();
    let mut seen = HashSet::with_capacity(T::FIELDS.len());

    for field in T::FIELDS {
        if !seen.insert(field.path()) {
            warn!(type_name, path = field.path(), "duplicate memberwise field");
            return Err(Error::DuplicateField {
                type_name,
                path: field.path(),
            });
        }

        if T::is_ignored(field.path()) != field.is_ignored() {
            warn!(
                type_name,
                path = field.path(),
                declared = field.is_ignored(),
                "memberwise marker mismatch"
            );
            return Err(Error::InconsistentMarker {
                type_name,
                path: field.path(),
                declared: field.is_ignored(),
            });
        }
    }

    let summary = Summary {
        type_name,
        compared: compared_fields::<T>().count(),
        ignored: ignored_fields::<T>().count(),
    };
    debug!(
        type_name,
        compared = summary.compared,
        ignored = summary.ignored,
        "memberwise layout validated"
    );
    Ok(summary)
}
