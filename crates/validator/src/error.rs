//! Violation types
//!
//! Every failure the engine can report is a [`Cause`]. A [`Violation`] pins a
//! cause to the qualified name of the field that produced it, and
//! [`ValidationErrors`] is the ordered collection handed back to the caller.
//!
//! Causes are plain values with structural equality, so callers can ask
//! "did `user.age` fail because of X" without comparing strings:
//!
//! ```rust,ignore
//! use fieldcheck::{Cause, validate};
//!
//! let errors = validate(&form).unwrap_err();
//! assert!(errors.is(&Cause::UnsupportedType));
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// CAUSE
// ============================================================================

/// Why a field failed validation.
///
/// The first group are structural or usage errors: the record or its
/// annotations are wrong, not the data. The second group describes a value
/// that broke one of its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Cause {
    /// The value handed to the validator is not a record.
    #[error("wrong argument given, should be a struct")]
    NotStruct,

    /// The field carries an annotation with no clauses.
    #[error("validator tag is empty")]
    EmptyAnnotation,

    /// A clause is not of the form `kind:value`, or its value does not parse.
    #[error("invalid validator syntax")]
    InvalidSyntax,

    /// A clause names a constraint kind outside `len`, `min`, `max`, `in`.
    #[error("invalid validator type")]
    InvalidConstraintKind,

    /// The field is annotated but not visible outside its record.
    #[error("validation for unexported field is not allowed")]
    ValidateForUnexportedFields,

    /// The field's type is neither text nor `i64` (after unwrapping sequences).
    #[error("field type is unsupported")]
    UnsupportedType,

    /// The constraint kind does not apply to the field's type.
    #[error("validator type is unsupported")]
    UnsupportedConstraintForType,

    /// The record is nested deeper than the configured limit.
    #[error("record nesting exceeds the limit of {limit}")]
    DepthExceeded {
        /// Configured maximum depth.
        limit: usize,
    },

    /// `len`: the text does not have exactly the required length.
    #[error("string length {actual} does not match '{expected}'")]
    LengthMismatch {
        /// Required length in characters.
        expected: usize,
        /// Actual length in characters.
        actual: usize,
    },

    /// `min` on text: the text is shorter than the bound.
    #[error("string length {actual} is less than '{min}'")]
    TooShort {
        /// Lower bound on the length.
        min: i64,
        /// Actual length in characters.
        actual: usize,
    },

    /// `max` on text: the text is longer than the bound.
    #[error("string length {actual} is bigger than '{max}'")]
    TooLong {
        /// Upper bound on the length.
        max: i64,
        /// Actual length in characters.
        actual: usize,
    },

    /// `in` on text: the value is not one of the allowed strings.
    #[error("string value '{value}' is not contained in [{}]", .allowed.join(", "))]
    TextNotIn {
        /// The offending value.
        value: String,
        /// The allowed values, in annotation order.
        allowed: Vec<String>,
    },

    /// `min` on an integer: the value is below the bound.
    #[error("value {value} is less than {min}")]
    BelowMin {
        /// The offending value.
        value: i64,
        /// Lower bound (inclusive).
        min: i64,
    },

    /// `max` on an integer: the value is above the bound.
    #[error("value {value} is bigger than {max}")]
    AboveMax {
        /// The offending value.
        value: i64,
        /// Upper bound (inclusive).
        max: i64,
    },

    /// `in` on an integer: the value is not one of the allowed integers.
    #[error("value {value} is not contained in [{}]", join_ints(.allowed))]
    IntNotIn {
        /// The offending value.
        value: i64,
        /// The allowed values, in annotation order.
        allowed: Vec<i64>,
    },
}

impl Cause {
    /// Stable snake-case code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotStruct => "not_struct",
            Self::EmptyAnnotation => "empty_annotation",
            Self::InvalidSyntax => "invalid_syntax",
            Self::InvalidConstraintKind => "invalid_constraint_kind",
            Self::ValidateForUnexportedFields => "validate_for_unexported_fields",
            Self::UnsupportedType => "unsupported_type",
            Self::UnsupportedConstraintForType => "unsupported_constraint_for_type",
            Self::DepthExceeded { .. } => "depth_exceeded",
            Self::LengthMismatch { .. } => "len",
            Self::TooShort { .. } | Self::BelowMin { .. } => "min",
            Self::TooLong { .. } | Self::AboveMax { .. } => "max",
            Self::TextNotIn { .. } | Self::IntNotIn { .. } => "in",
        }
    }

    /// Returns `true` for causes raised by a value breaking a constraint,
    /// `false` for structural and usage errors.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::TooShort { .. }
                | Self::TooLong { .. }
                | Self::TextNotIn { .. }
                | Self::BelowMin { .. }
                | Self::AboveMax { .. }
                | Self::IntNotIn { .. }
        )
    }
}

fn join_ints(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A single failure, named by the qualified path of the field.
///
/// Paths are dotted for nested records (`address.city`) and indexed for
/// sequence elements (`tags[2]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Qualified field name.
    pub field: String,
    /// What went wrong.
    pub cause: Cause,
}

impl Violation {
    /// Creates a violation for `field`.
    pub fn new(field: impl Into<String>, cause: Cause) -> Self {
        Self {
            field: field.into(),
            cause,
        }
    }

    /// Returns `true` if this violation was caused by `cause`.
    #[must_use]
    pub fn is(&self, cause: &Cause) -> bool {
        self.cause == *cause
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field {}, error: {}", self.field, self.cause)
    }
}

impl std::error::Error for Violation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Every violation found in one validation pass, in field-declaration order.
///
/// Nested records contribute their violations at the point where the parent
/// descends into them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Appends a violation.
    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Appends one violation per cause, all under the same field name.
    pub fn add_causes<I>(&mut self, field: &str, causes: I)
    where
        I: IntoIterator<Item = Cause>,
    {
        self.violations
            .extend(causes.into_iter().map(|cause| Violation::new(field, cause)));
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns all violations.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterates over the violations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Returns `true` if any violation was caused by `cause`.
    #[must_use]
    pub fn is(&self, cause: &Cause) -> bool {
        self.violations.iter().any(|v| v.is(cause))
    }

    /// Violations recorded for exactly the qualified name `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<Violation> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
