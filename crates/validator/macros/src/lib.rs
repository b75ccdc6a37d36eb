//! # fieldcheck macros
//!
//! Proc-macros for the `fieldcheck` record validator.
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Record`](derive@Record) | Implements `Record` and `Inspect` for a struct |
//!
//! Use the re-export from `fieldcheck` rather than depending on this crate
//! directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` trait.
///
/// Generates a field descriptor table for a struct with named fields, plus an
/// `Inspect` impl so the struct can be validated directly or nested inside
/// another record.
///
/// # Attributes
///
/// ## Field attributes
///
/// - `#[validate("...")]` - Constraint annotation for the field, e.g.
///   `"min:18;max:65"` or `"in:draft,published"`
///
/// Only plain `pub` fields may carry an annotation; an annotated private
/// field is reported as a violation at validation time. Every field type
/// must implement `Inspect`, and generic type parameters receive an
/// `Inspect` bound.
///
/// # Example
///
/// ```ignore
/// use fieldcheck::Record;
///
/// #[derive(Record)]
/// pub struct Address {
///     #[validate("min:2")]
///     pub city: String,
///     #[validate("len:5")]
///     pub zip: String,
/// }
///
/// #[derive(Record)]
/// pub struct Customer {
///     #[validate("min:1;max:64")]
///     pub name: String,
///     pub address: Address,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
