//! Per-field validation
//!
//! A [`FieldVisitor`] is created for every field of every record in a pass.
//! It decides what kind of field it holds, parses the annotation once,
//! evaluates it, and appends the outcome to the shared error sink.

use crate::error::{Cause, ValidationErrors, Violation};
use crate::evaluate::{Scalar, evaluate};
use crate::record::{Field, FieldValue};
use crate::rules::{RuleSet, parse};
use crate::validator::RecordValidator;

/// One field of one record, bound to the validator that owns it.
pub(crate) struct FieldVisitor<'v, 'a> {
    name: String,
    field: Field<'a>,
    owner: &'v RecordValidator<'a>,
}

impl<'v, 'a> FieldVisitor<'v, 'a> {
    pub(crate) fn new(owner: &'v RecordValidator<'a>, field: Field<'a>) -> Self {
        Self {
            name: owner.qualify(field.name),
            field,
            owner,
        }
    }

    /// Validates the field, appending any violations to `errors`.
    pub(crate) fn visit(self, errors: &mut ValidationErrors) {
        let Self { name, field, owner } = self;
        tracing::trace!(field = %name, "visiting field");
        let Field {
            exported,
            annotation,
            value,
            ..
        } = field;

        // nested records are descended whether or not they are annotated
        if let FieldValue::Record(record) = value {
            tracing::trace!(field = %name, "descending into nested record");
            owner.descend(record, name, errors);
            return;
        }

        let Some(annotation) = annotation else {
            tracing::trace!(field = %name, "no annotation, skipping");
            return;
        };

        if !exported {
            errors.add(Violation::new(name, Cause::ValidateForUnexportedFields));
            return;
        }

        match value {
            FieldValue::Sequence(items) => visit_sequence(&name, annotation, &items, errors),
            other => match other.as_scalar() {
                Some(scalar) => visit_scalar(&name, annotation, scalar, errors),
                None => {
                    tracing::trace!(field = %name, ty = other.describe(), "unsupported field type");
                    errors.add(Violation::new(name, Cause::UnsupportedType));
                }
            },
        }
    }
}

fn visit_scalar(name: &str, annotation: &str, value: Scalar<'_>, errors: &mut ValidationErrors) {
    let Some(rules) = parse_for(name, annotation, value, errors) else {
        return;
    };
    errors.add_causes(name, evaluate(&rules, value));
}

fn visit_sequence(
    name: &str,
    annotation: &str,
    items: &[FieldValue<'_>],
    errors: &mut ValidationErrors,
) {
    let Some(first) = items.first() else {
        tracing::trace!(field = %name, "empty sequence, skipping");
        return;
    };

    let Some(first) = first.as_scalar() else {
        tracing::trace!(field = %name, ty = first.describe(), "unsupported element type");
        errors.add(Violation::new(name, Cause::UnsupportedType));
        return;
    };

    let Some(rules) = parse_for(name, annotation, first, errors) else {
        return;
    };

    for (index, item) in items.iter().enumerate() {
        let causes = match item.as_scalar() {
            Some(scalar) => evaluate(&rules, scalar),
            None => smallvec::smallvec![Cause::UnsupportedType],
        };
        if !causes.is_empty() {
            errors.add_causes(&format!("{name}[{index}]"), causes);
        }
    }
}

/// Parses `annotation` for the kind of `sample`, recording a parse failure
/// as the field's only violation.
fn parse_for(
    name: &str,
    annotation: &str,
    sample: Scalar<'_>,
    errors: &mut ValidationErrors,
) -> Option<RuleSet> {
    match parse(annotation, sample.kind()) {
        Ok(rules) => Some(rules),
        Err(cause) => {
            tracing::debug!(field = %name, annotation, %cause, "annotation rejected");
            errors.add(Violation::new(name, cause));
            None
        }
    }
}
