//! Field descriptors
//!
//! A [`Record`] describes its own fields: name, visibility, annotation and
//! current value. [`Inspect`] maps a Rust value onto the closed set of shapes
//! the validator understands. Both are normally produced by
//! `#[derive(Record)]`, but can be implemented by hand:
//!
//! ```rust,ignore
//! use fieldcheck::{Field, Inspect, Record};
//!
//! struct Point { x: i64, y: i64 }
//!
//! impl Record for Point {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("x", true, Some("min:0"), self.x.inspect()),
//!             Field::new("y", true, Some("min:0"), self.y.inspect()),
//!         ]
//!     }
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::evaluate::Scalar;

// ============================================================================
// RECORD
// ============================================================================

/// A value whose fields can be validated.
pub trait Record {
    /// Descriptors for every field, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Metadata and current value of one record field.
#[derive(Debug)]
pub struct Field<'a> {
    /// Field name as declared.
    pub name: &'static str,
    /// Whether the field is visible outside its declaring record.
    pub exported: bool,
    /// Raw annotation, if the field has one.
    pub annotation: Option<&'static str>,
    /// Current value.
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Creates a field descriptor.
    #[must_use]
    pub fn new(
        name: &'static str,
        exported: bool,
        annotation: Option<&'static str>,
        value: FieldValue<'a>,
    ) -> Self {
        Self {
            name,
            exported,
            annotation,
            value,
        }
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// The shape of a field value.
pub enum FieldValue<'a> {
    /// Text.
    Text(&'a str),
    /// Signed 64-bit integer.
    Int(i64),
    /// A nested record, validated recursively.
    Record(&'a dyn Record),
    /// A fixed-size or growable sequence.
    Sequence(Vec<FieldValue<'a>>),
    /// Anything else; carries the type name for diagnostics.
    Unsupported(&'static str),
}

impl<'a> FieldValue<'a> {
    /// Returns the scalar for text and integer values.
    #[must_use]
    pub fn as_scalar(&self) -> Option<Scalar<'a>> {
        match *self {
            Self::Text(text) => Some(Scalar::Text(text)),
            Self::Int(int) => Some(Scalar::Int(int)),
            Self::Record(_) | Self::Sequence(_) | Self::Unsupported(_) => None,
        }
    }

    /// Short description of the shape, used in log output.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match *self {
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Record(_) => "record",
            Self::Sequence(_) => "sequence",
            Self::Unsupported(name) => name,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Int(int) => f.debug_tuple("Int").field(int).finish(),
            Self::Record(_) => f.write_str("Record(..)"),
            Self::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Self::Unsupported(name) => f.debug_tuple("Unsupported").field(name).finish(),
        }
    }
}

// ============================================================================
// INSPECT
// ============================================================================

/// Maps a value onto a [`FieldValue`].
///
/// Every field of a derived record must implement this trait. Types outside
/// text, `i64`, sequences and records report [`FieldValue::Unsupported`] so
/// that an annotation on them surfaces as a violation instead of being
/// ignored.
pub trait Inspect {
    /// Describes this value.
    fn inspect(&self) -> FieldValue<'_>;
}

impl Inspect for str {
    fn inspect(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl Inspect for String {
    fn inspect(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl Inspect for i64 {
    fn inspect(&self) -> FieldValue<'_> {
        FieldValue::Int(*self)
    }
}

impl<T: Inspect> Inspect for [T] {
    fn inspect(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.iter().map(Inspect::inspect).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> FieldValue<'_> {
        self.as_slice().inspect()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn inspect(&self) -> FieldValue<'_> {
        self.as_slice().inspect()
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn inspect(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.iter().map(Inspect::inspect).collect())
    }
}

macro_rules! transparent {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $wrapper {
                fn inspect(&self) -> FieldValue<'_> {
                    (**self).inspect()
                }
            }
        )*
    };
}

transparent!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self) -> FieldValue<'_> {
                    FieldValue::Unsupported(std::any::type_name::<Self>())
                }
            }
        )*
    };
}

unsupported!(
    bool, char, f32, f64, i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, (),
);

macro_rules! unsupported_generic {
    ($($ty:ident < $($param:ident),+ >),* $(,)?) => {
        $(
            impl<$($param),+> Inspect for $ty<$($param),+> {
                fn inspect(&self) -> FieldValue<'_> {
                    FieldValue::Unsupported(std::any::type_name::<Self>())
                }
            }
        )*
    };
}

unsupported_generic!(
    Option<T>,
    HashMap<K, V, S>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    BTreeSet<T>,
);

// ============================================================================
// TESTS
// ============================================================================
