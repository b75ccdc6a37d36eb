//! Record traversal
//!
//! [`RecordValidator`] walks one record level. The root level is created by
//! [`Validator::validate`]; every nested record field spawns a child that
//! writes into the same [`ValidationErrors`], so one call produces exactly
//! one collection, ordered depth-first by field declaration.

use crate::config::ValidatorConfig;
use crate::error::{Cause, ValidationErrors, Violation};
use crate::record::{FieldValue, Inspect, Record};
use crate::visitor::FieldVisitor;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Entry point holding a [`ValidatorConfig`].
///
/// A validator owns no per-call state: each [`validate`](Self::validate)
/// call allocates its own error collection.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck::{Record, Validator, ValidatorConfig};
///
/// #[derive(Record)]
/// pub struct Signup {
///     #[validate("min:3;max:20")]
///     pub username: String,
///     #[validate("min:18")]
///     pub age: i64,
/// }
///
/// let validator = Validator::new(ValidatorConfig::default());
/// let errors = validator.validate(&signup).unwrap_err();
/// for violation in &errors {
///     println!("{violation}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `value`, which should be a record or wrap one.
    ///
    /// # Errors
    ///
    /// Returns every violation found. A value that is not a record yields a
    /// single [`Cause::NotStruct`] violation named by
    /// [`ValidatorConfig::root_name`].
    pub fn validate<T>(&self, value: &T) -> Result<(), ValidationErrors>
    where
        T: Inspect + ?Sized,
    {
        let root = RecordValidator::new(value.inspect(), &self.config);
        tracing::debug!(ty = root.target.describe(), "validation started");
        let result = root.execute();
        match &result {
            Ok(()) => tracing::debug!("validation passed"),
            Err(errors) => tracing::debug!(violations = errors.len(), "validation failed"),
        }
        result
    }
}

/// Validates `value` with the default configuration.
///
/// Returns `Ok(())` when every field passes and otherwise the complete list
/// of violations; its `Display` output has one `Field <name>, error: <cause>`
/// line per violation.
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate<T>(value: &T) -> Result<(), ValidationErrors>
where
    T: Inspect + ?Sized,
{
    Validator::default().validate(value)
}

// ============================================================================
// RECORD VALIDATOR
// ============================================================================

/// Validates one record level.
///
/// The root instance has an empty prefix; nested instances carry the
/// qualified name of the field that holds them.
pub struct RecordValidator<'a> {
    target: FieldValue<'a>,
    prefix: String,
    depth: usize,
    config: &'a ValidatorConfig,
}

impl<'a> RecordValidator<'a> {
    /// Creates a root validator for `target`.
    #[must_use]
    pub fn new(target: FieldValue<'a>, config: &'a ValidatorConfig) -> Self {
        Self {
            target,
            prefix: String::new(),
            depth: 0,
            config,
        }
    }

    /// Runs the validator with a fresh error collection.
    ///
    /// # Errors
    ///
    /// Returns the collected violations if there are any.
    pub fn execute(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.execute_into(&mut errors);
        errors.into_result()
    }

    /// Runs the validator, appending violations to `errors`.
    pub fn execute_into(&self, errors: &mut ValidationErrors) {
        let record = match self.target {
            FieldValue::Record(record) => record,
            _ => {
                tracing::debug!(ty = self.target.describe(), "validated value is not a record");
                errors.add(Violation::new(
                    self.config.root_name.as_str(),
                    Cause::NotStruct,
                ));
                return;
            }
        };

        for field in record.fields() {
            FieldVisitor::new(self, field).visit(errors);
        }
    }

    /// Qualified name of a field declared on this level.
    pub(crate) fn qualify(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_owned()
        } else {
            format!("{}.{name}", self.prefix)
        }
    }

    /// Validates a nested record held by the field `name`.
    pub(crate) fn descend(
        &self,
        record: &'a dyn Record,
        name: String,
        errors: &mut ValidationErrors,
    ) {
        let depth = self.depth + 1;
        if let Some(limit) = self.config.max_depth
            && depth > limit
        {
            tracing::debug!(field = %name, limit, "nesting limit reached");
            errors.add(Violation::new(name, Cause::DepthExceeded { limit }));
            return;
        }

        let child = Self {
            target: FieldValue::Record(record),
            prefix: name,
            depth,
            config: self.config,
        };
        child.execute_into(errors);
    }
}

// ============================================================================
// TESTS
// ============================================================================
