//! Constraint evaluation
//!
//! [`evaluate`] checks one scalar against a parsed [`RuleSet`] and returns
//! one [`Cause`] per broken rule, in rule order. Text lengths are counted in
//! Unicode scalar values, never bytes.

use smallvec::{SmallVec, smallvec};

use crate::error::Cause;
use crate::rules::{Constraint, RuleSet, ScalarKind};

/// Causes produced for one value; usually none or one.
pub type Causes = SmallVec<[Cause; 2]>;

/// A scalar value ready for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    /// Text value.
    Text(&'a str),
    /// Integer value.
    Int(i64),
}

impl Scalar<'_> {
    /// The kind of this scalar.
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Text(_) => ScalarKind::Text,
            Self::Int(_) => ScalarKind::Int,
        }
    }
}

/// Evaluates every rule against `value`.
///
/// The rule set must have been parsed for the value's kind. A mismatched
/// pair yields a single [`Cause::UnsupportedType`] rather than passing.
#[must_use]
pub fn evaluate(rules: &RuleSet, value: Scalar<'_>) -> Causes {
    match (rules, value) {
        (RuleSet::Text(rules), Scalar::Text(text)) => evaluate_text(rules, text),
        (RuleSet::Int(rules), Scalar::Int(int)) => evaluate_int(rules, int),
        _ => {
            tracing::debug!(
                rules = %rules.kind(),
                value = %value.kind(),
                "rule set does not match value kind"
            );
            smallvec![Cause::UnsupportedType]
        }
    }
}

fn evaluate_text(rules: &[Constraint<String>], text: &str) -> Causes {
    let actual = text.chars().count();
    let len = i64::try_from(actual).unwrap_or(i64::MAX);
    rules
        .iter()
        .filter_map(|rule| match rule {
            Constraint::Len(expected) => (actual != *expected).then_some(Cause::LengthMismatch {
                expected: *expected,
                actual,
            }),
            Constraint::Min(min) => {
                (!within(len, *min, len)).then_some(Cause::TooShort { min: *min, actual })
            }
            Constraint::Max(max) => {
                (!within(len, len, *max)).then_some(Cause::TooLong { max: *max, actual })
            }
            Constraint::In(allowed) => {
                (!contains(allowed, text)).then(|| Cause::TextNotIn {
                    value: text.to_owned(),
                    allowed: allowed.clone(),
                })
            }
        })
        .collect()
}

fn evaluate_int(rules: &[Constraint<i64>], value: i64) -> Causes {
    rules
        .iter()
        .filter_map(|rule| match rule {
            Constraint::Min(min) => {
                (!within(value, *min, value)).then_some(Cause::BelowMin { value, min: *min })
            }
            Constraint::Max(max) => {
                (!within(value, value, *max)).then_some(Cause::AboveMax { value, max: *max })
            }
            Constraint::In(allowed) => (!contains(allowed, &value)).then(|| Cause::IntNotIn {
                value,
                allowed: allowed.clone(),
            }),
            // rejected for integer fields at parse time
            Constraint::Len(_) => None,
        })
        .collect()
}

// ============================================================================
// PREDICATES
// ============================================================================

/// `true` if `text` has exactly `expected` characters.
#[must_use]
pub fn length_matches(text: &str, expected: usize) -> bool {
    text.chars().count() == expected
}

/// `true` if `text` has at least `min` characters.
#[must_use]
pub fn length_at_least(text: &str, min: i64) -> bool {
    let len = char_count(text);
    within(len, min, len)
}

/// `true` if `text` has at most `max` characters.
#[must_use]
pub fn length_at_most(text: &str, max: i64) -> bool {
    let len = char_count(text);
    within(len, len, max)
}

/// `true` if `min <= value <= max`.
#[must_use]
pub fn within(value: i64, min: i64, max: i64) -> bool {
    value >= min && value <= max
}

/// `true` if `value` equals one of `allowed`.
pub fn contains<T, Q>(allowed: &[T], value: &Q) -> bool
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    allowed.iter().any(|item| item == value)
}

fn char_count(text: &str) -> i64 {
    i64::try_from(text.chars().count()).unwrap_or(i64::MAX)
}

// ============================================================================
// TESTS
// ============================================================================
