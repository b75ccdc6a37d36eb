use fieldcheck::{Cause, Record, validate};
use pretty_assertions::assert_eq;

#[derive(Record)]
pub struct Named {
    #[validate("len:3")]
    pub name: String,
}

#[derive(Record)]
pub struct Aged {
    #[validate("min:18;max:65")]
    pub age: i64,
}

#[derive(Record)]
pub struct Tagged {
    #[validate("in:a,b,c")]
    pub tag: String,
}

#[derive(Record)]
pub struct Point {
    #[validate("min:0")]
    pub x: i64,
}

#[derive(Record)]
pub struct Outer {
    pub inner: Point,
}

#[derive(Record)]
pub struct Blank {
    #[validate("")]
    pub name: String,
}

#[derive(Record)]
pub struct Hidden {
    #[validate("this is not an annotation")]
    secret: String,
}

#[test]
fn exact_length_mismatch() {
    let errors = validate(&Named { name: "ab".into() }).unwrap_err();

    assert_eq!(errors.len(), 1);
    let violation = &errors.violations()[0];
    assert_eq!(violation.field, "name");
    assert_eq!(
        violation.cause,
        Cause::LengthMismatch {
            expected: 3,
            actual: 2
        }
    );
    assert!(violation.to_string().contains("'3'"));

    assert!(validate(&Named { name: "abc".into() }).is_ok());
}

#[test]
fn integer_range() {
    let errors = validate(&Aged { age: 70 }).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.is(&Cause::AboveMax { value: 70, max: 65 }));

    assert!(validate(&Aged { age: 30 }).is_ok());
    assert!(validate(&Aged { age: 18 }).is_ok());
    assert!(validate(&Aged { age: 65 }).is_ok());
}

#[test]
fn text_membership() {
    let errors = validate(&Tagged { tag: "d".into() }).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.violations()[0].cause.code(), "in");

    assert!(validate(&Tagged { tag: "b".into() }).is_ok());
}

#[test]
fn nested_violation_is_qualified() {
    let errors = validate(&Outer {
        inner: Point { x: -1 },
    })
    .unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.violations()[0].field, "inner.x");
    assert!(errors.is(&Cause::BelowMin { value: -1, min: 0 }));
}

#[test]
fn empty_annotation_is_reported() {
    let errors = validate(&Blank {
        name: "anything".into(),
    })
    .unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors.violations()[0].is(&Cause::EmptyAnnotation));
}

#[test]
fn private_field_is_not_parsed() {
    let errors = validate(&Hidden {
        secret: String::new(),
    })
    .unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors.violations()[0].is(&Cause::ValidateForUnexportedFields));
    assert!(!errors.is(&Cause::InvalidSyntax));
}

#[test]
fn validation_is_idempotent() {
    let value = Aged { age: 3 };
    assert_eq!(validate(&value), validate(&value));
}
