//! # memberwise-macros
//!
//! Derive macros for memberwise equality and hashing with field-level
//! exclusion. Use them through the `memberwise` crate, which re-exports
//! them next to the runtime types the generated code refers to.
//!
//! ## The `ignore` marker
//!
//! `#[memberwise(ignore)]` tells every derive in this crate to leave a field
//! out of both equality and hashing. It carries no arguments, is valid on
//! fields only (named or tuple, in structs or enum variants), and may appear
//! at most once per field. Any other placement is a compile error.
//!
//! ```ignore
//! use memberwise::{MemberwiseEq, MemberwiseHash};
//!
//! #[derive(Debug, MemberwiseEq, Eq, MemberwiseHash)]
//! pub struct Point {
//!     #[memberwise(ignore)]
//!     pub x: i32,
//!     pub y: i32,
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use proc_macro::TokenStream;
use proc_macro_error2::proc_macro_error;
use syn::{DeriveInput, parse_macro_input};

mod attr;
mod container;
mod describe;
mod diagnostics;
mod eq;
mod hash;

/// Derive macro for `PartialEq` that skips fields marked `#[memberwise(ignore)]`.
///
/// Fields are compared in declaration order. Enum values compare equal only
/// when they are the same variant and all compared fields are equal.
/// Ignored fields need not implement `PartialEq`.
///
/// # Example
///
/// ```ignore
/// #[derive(MemberwiseEq)]
/// struct Item {
///     id: u64,
///     #[memberwise(ignore)]
///     updated_at: i64,
/// }
/// ```
#[proc_macro_derive(MemberwiseEq, attributes(memberwise))]
#[proc_macro_error]
pub fn derive_memberwise_eq(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    eq::expand_derive_memberwise_eq(&input).into()
}

/// Derive macro for `Hash` that skips fields marked `#[memberwise(ignore)]`.
///
/// Pair it with [`MemberwiseEq`](derive.MemberwiseEq.html) on the same type so
/// that values that compare equal also hash equal.
#[proc_macro_derive(MemberwiseHash, attributes(memberwise))]
#[proc_macro_error]
pub fn derive_memberwise_hash(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    hash::expand_derive_memberwise_hash(&input).into()
}

/// Derive macro for implementing `memberwise::Memberwise`.
///
/// Generates the static field descriptor table, the constant-time
/// `is_ignored` presence query, and the `memberwise_eq` / `memberwise_hash`
/// methods consumed by `MemberwiseComparer` and `ByMembers`.
///
/// # Example
///
/// ```ignore
/// #[derive(Memberwise)]
/// struct Point {
///     #[memberwise(ignore)]
///     x: i32,
///     y: i32,
/// }
///
/// assert!(Point::is_ignored("x"));
/// assert!(!Point::is_ignored("y"));
/// ```
#[proc_macro_derive(Memberwise, attributes(memberwise))]
#[proc_macro_error]
pub fn derive_memberwise(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    describe::expand_derive_memberwise(&input).into()
}
