use fieldcheck::{Cause, Record, validate};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Record)]
pub struct Form {
    #[validate("len:3;;min:1")]
    pub syntax: String,
    #[validate("regexp:^a")]
    pub kind: String,
    #[validate("len:3")]
    pub count: i64,
    #[validate("min:1")]
    pub ratio: f64,
    #[validate("max:5")]
    pub ok: String,
}

#[test]
fn usage_errors_do_not_stop_siblings() {
    let form = Form {
        syntax: "abc".into(),
        kind: "a".into(),
        count: 3,
        ratio: 0.5,
        ok: "too long".into(),
    };

    let errors = validate(&form).unwrap_err();
    let causes: Vec<(&str, Cause)> = errors
        .iter()
        .map(|v| (v.field.as_str(), v.cause.clone()))
        .collect();

    assert_eq!(
        causes,
        vec![
            ("syntax", Cause::InvalidSyntax),
            ("kind", Cause::InvalidConstraintKind),
            ("count", Cause::UnsupportedConstraintForType),
            ("ratio", Cause::UnsupportedType),
            ("ok", Cause::TooLong { max: 5, actual: 8 }),
        ]
    );
}

#[derive(Record)]
pub struct Unannotated {
    pub ratio: f64,
    pub maybe: Option<String>,
}

#[test]
fn unannotated_unsupported_fields_are_ignored() {
    let value = Unannotated {
        ratio: 1.5,
        maybe: None,
    };
    assert!(validate(&value).is_ok());
}

#[rstest]
#[case::integer(&42_i64)]
#[case::text(&"plain text")]
#[case::sequence(&vec![1_i64, 2])]
fn non_record_root_is_rejected(#[case] value: &dyn fieldcheck::Inspect) {
    let errors = validate(value).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.violations()[0].field, "Main");
    assert!(errors.is(&Cause::NotStruct));
}
