//! Annotation parsing
//!
//! An annotation is a `;`-separated list of `kind:value` clauses:
//!
//! ```text
//! len:3
//! min:18;max:65
//! in:draft,published,archived
//! ```
//!
//! [`parse`] turns one annotation into a typed [`RuleSet`] for the scalar kind
//! of the field it is attached to. Parsing is strict: no whitespace is
//! trimmed and the first bad clause decides the error.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::Cause;

const CLAUSE_SEPARATOR: char = ';';
const KEY_SEPARATOR: char = ':';
const LIST_SEPARATOR: char = ',';

/// Rule storage; most annotations carry one or two clauses.
pub type Rules<T> = SmallVec<[Constraint<T>; 4]>;

// ============================================================================
// KINDS
// ============================================================================

/// Scalar kinds the evaluator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Text, measured in Unicode scalar values.
    Text,
    /// Signed 64-bit integer.
    Int,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Int => f.write_str("int"),
        }
    }
}

/// The clause keys of the annotation grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// `len`: exact text length.
    Len,
    /// `min`: lower bound on text length or integer value.
    Min,
    /// `max`: upper bound on text length or integer value.
    Max,
    /// `in`: membership in a list.
    In,
}

impl ConstraintKind {
    /// The clause key as written in an annotation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Len => "len",
            Self::Min => "min",
            Self::Max => "max",
            Self::In => "in",
        }
    }
}

impl FromStr for ConstraintKind {
    type Err = Cause;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "len" => Ok(Self::Len),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "in" => Ok(Self::In),
            _ => Err(Cause::InvalidConstraintKind),
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONSTRAINT
// ============================================================================

/// One parsed clause.
///
/// `T` is the element type of `in` lists: `String` for text fields, `i64`
/// for integer fields. `Len` is only ever built for text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint<T> {
    /// Exact length.
    Len(usize),
    /// Inclusive lower bound.
    Min(i64),
    /// Inclusive upper bound.
    Max(i64),
    /// Allowed values.
    In(Vec<T>),
}

impl<T> Constraint<T> {
    /// The clause key this constraint was parsed from.
    #[must_use]
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::Len(_) => ConstraintKind::Len,
            Self::Min(_) => ConstraintKind::Min,
            Self::Max(_) => ConstraintKind::Max,
            Self::In(_) => ConstraintKind::In,
        }
    }
}

/// Renders the clause back in annotation syntax.
impl<T: fmt::Display> fmt::Display for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{KEY_SEPARATOR}", self.kind())?;
        match self {
            Self::Len(n) => write!(f, "{n}"),
            Self::Min(n) | Self::Max(n) => write!(f, "{n}"),
            Self::In(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{LIST_SEPARATOR}")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// The ordered constraints of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSet {
    /// Rules for a text field.
    Text(Rules<String>),
    /// Rules for an integer field.
    Int(Rules<i64>),
}

impl RuleSet {
    /// The scalar kind these rules were parsed for.
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Text(_) => ScalarKind::Text,
            Self::Int(_) => ScalarKind::Int,
        }
    }

    /// Number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(rules) => rules.len(),
            Self::Int(rules) => rules.len(),
        }
    }

    /// Always `false` for a successfully parsed annotation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, rules: &[Constraint<T>]) -> fmt::Result {
            for (i, rule) in rules.iter().enumerate() {
                if i > 0 {
                    write!(f, "{CLAUSE_SEPARATOR}")?;
                }
                write!(f, "{rule}")?;
            }
            Ok(())
        }

        match self {
            Self::Text(rules) => join(f, rules),
            Self::Int(rules) => join(f, rules),
        }
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// Parses an annotation for a field of the given scalar kind.
///
/// # Errors
///
/// - [`Cause::EmptyAnnotation`] if `annotation` is empty
/// - [`Cause::InvalidSyntax`] if a clause is not exactly one non-empty key
///   and one non-empty value, or the value does not parse
/// - [`Cause::InvalidConstraintKind`] for an unknown key
/// - [`Cause::UnsupportedConstraintForType`] for `len` on an integer field
pub fn parse(annotation: &str, kind: ScalarKind) -> Result<RuleSet, Cause> {
    if annotation.is_empty() {
        return Err(Cause::EmptyAnnotation);
    }

    match kind {
        ScalarKind::Text => parse_clauses(annotation, kind, |raw| {
            Ok(raw.split(LIST_SEPARATOR).map(str::to_owned).collect())
        })
        .map(RuleSet::Text),
        ScalarKind::Int => parse_clauses(annotation, kind, |raw| {
            raw.split(LIST_SEPARATOR).map(parse_int).collect()
        })
        .map(RuleSet::Int),
    }
}

fn parse_clauses<T, F>(annotation: &str, kind: ScalarKind, parse_list: F) -> Result<Rules<T>, Cause>
where
    F: Fn(&str) -> Result<Vec<T>, Cause>,
{
    annotation
        .split(CLAUSE_SEPARATOR)
        .map(|clause| {
            let (key, raw) = split_clause(clause)?;
            match key.parse::<ConstraintKind>()? {
                ConstraintKind::Len => {
                    if kind != ScalarKind::Text {
                        return Err(Cause::UnsupportedConstraintForType);
                    }
                    raw.parse::<usize>()
                        .map(Constraint::Len)
                        .map_err(|_| Cause::InvalidSyntax)
                }
                ConstraintKind::Min => parse_int(raw).map(Constraint::Min),
                ConstraintKind::Max => parse_int(raw).map(Constraint::Max),
                ConstraintKind::In => {
                    let items = parse_list(raw)?;
                    if items.is_empty() {
                        return Err(Cause::InvalidSyntax);
                    }
                    Ok(Constraint::In(items))
                }
            }
        })
        .collect()
}

fn split_clause(clause: &str) -> Result<(&str, &str), Cause> {
    let mut parts = clause.split(KEY_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(raw), None) if !key.is_empty() && !raw.is_empty() => Ok((key, raw)),
        _ => Err(Cause::InvalidSyntax),
    }
}

fn parse_int(raw: &str) -> Result<i64, Cause> {
    raw.parse::<i64>().map_err(|_| Cause::InvalidSyntax)
}

// ============================================================================
// TESTS
// ============================================================================
