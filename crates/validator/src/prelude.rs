//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use fieldcheck::prelude::*;
//! ```

pub use crate::config::ValidatorConfig;
pub use crate::error::{Cause, ValidationErrors, Violation};
pub use crate::record::{Field, FieldValue, Inspect, Record};
pub use crate::validator::{Validator, validate};

#[cfg(feature = "derive")]
pub use fieldcheck_macros::Record;
