//! # memberwise
//!
//! Memberwise equality and hashing with field-level exclusion.
//!
//! A field marked `#[memberwise(ignore)]` is skipped by every comparison and
//! hash produced through this crate. The marker is resolved at compile time by
//! the derive macros re-exported here:
//!
//! - [`MemberwiseEq`](derive@MemberwiseEq): `PartialEq` over the unmarked fields
//! - [`MemberwiseHash`](derive@MemberwiseHash): `Hash` over the unmarked fields
//! - [`Memberwise`](derive@Memberwise): the [`Memberwise`](trait@Memberwise) trait,
//!   which also exposes the static field table and the presence query
//!
//! ```
//! use memberwise::{MemberwiseEq, MemberwiseHash};
//!
//! #[derive(Debug, MemberwiseEq, Eq, MemberwiseHash)]
//! struct Point {
//!     #[memberwise(ignore)]
//!     x: i32,
//!     y: i32,
//! }
//!
//! assert_eq!(Point { x: 1, y: 5 }, Point { x: 2, y: 5 });
//! assert_ne!(Point { x: 1, y: 5 }, Point { x: 1, y: 6 });
//! ```
//!
//! The marker is only accepted on fields, at most once each; misuse fails
//! to compile.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod by_members;
pub mod comparer;
pub mod descriptor;
pub mod error;
pub mod validate;

pub use by_members::ByMembers;
pub use comparer::MemberwiseComparer;
pub use descriptor::{Field, Memberwise, compared_fields, field, ignored_fields, query};
pub use error::Error;
pub use validate::{Summary, validate};

pub use memberwise_macros::{Memberwise, MemberwiseEq, MemberwiseHash};
