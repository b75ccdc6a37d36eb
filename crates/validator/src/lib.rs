//! # fieldcheck
//!
//! Validates record values against per-field constraint annotations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck::{Record, validate};
//!
//! #[derive(Record)]
//! pub struct Signup {
//!     #[validate("min:3;max:20")]
//!     pub username: String,
//!     #[validate("min:18;max:65")]
//!     pub age: i64,
//!     #[validate("in:free,pro")]
//!     pub plan: String,
//! }
//!
//! let signup = Signup { username: "al".into(), age: 70, plan: "pro".into() };
//! let errors = validate(&signup).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```
//!
//! ## Annotations
//!
//! An annotation is a `;`-separated list of `kind:value` clauses:
//!
//! | Clause      | Text field                     | `i64` field          |
//! |-------------|--------------------------------|----------------------|
//! | `len:N`     | exactly N characters           | rejected             |
//! | `min:N`     | at least N characters          | value >= N           |
//! | `max:N`     | at most N characters           | value <= N           |
//! | `in:a,b,c`  | one of the listed strings      | one of the integers  |
//!
//! Sequences (`Vec`, arrays, slices) of text or `i64` apply the annotation to
//! every element and name violations `field[index]`. Nested records are
//! always descended and name violations `outer.inner`.
//!
//! ## Errors
//!
//! Every failure is a [`Violation`] carrying a matchable [`Cause`]. A pass
//! never stops at the first failure: all violations are returned together
//! in a [`ValidationErrors`].

extern crate self as fieldcheck;

pub mod config;
pub mod error;
pub mod evaluate;
pub mod prelude;
pub mod record;
pub mod rules;
mod validator;
mod visitor;

pub use config::ValidatorConfig;
pub use error::{Cause, ValidationErrors, Violation};
pub use evaluate::Scalar;
pub use record::{Field, FieldValue, Inspect, Record};
pub use rules::{Constraint, ConstraintKind, RuleSet, ScalarKind};
pub use validator::{RecordValidator, Validator, validate};

#[cfg(feature = "derive")]
pub use fieldcheck_macros::Record;
