use fieldcheck::{Record, validate};

#[derive(Record)]
pub struct Signup {
    #[validate("min:3;max:20")]
    pub username: String,
    #[validate("min:18;max:65")]
    pub age: i64,
    #[validate("in:free,pro,team")]
    pub plan: String,
    #[validate("in:10,20,30")]
    pub seats: i64,
}

fn invalid() -> Signup {
    Signup {
        username: "al".into(),
        age: 70,
        plan: "enterprise".into(),
        seats: 15,
    }
}

#[test]
fn display_lists_one_line_per_violation() {
    let errors = validate(&invalid()).unwrap_err();
    insta::assert_snapshot!(errors.to_string(), @r"
    Field username, error: string length 2 is less than '3'
    Field age, error: value 70 is bigger than 65
    Field plan, error: string value 'enterprise' is not contained in [free, pro, team]
    Field seats, error: value 15 is not contained in [10, 20, 30]
    ");
}

#[test]
fn violations_serialize_for_transport() {
    let errors = validate(&invalid()).unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();

    assert_eq!(json.as_array().map(Vec::len), Some(4));
    assert_eq!(
        json[3],
        serde_json::json!({
            "field": "seats",
            "cause": { "kind": "int_not_in", "value": 15, "allowed": [10, 20, 30] }
        })
    );
}

#[test]
fn violation_exposes_its_cause_as_source() {
    use std::error::Error;

    let errors = validate(&invalid()).unwrap_err();
    let first = &errors.violations()[0];
    let source = first.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("string length 2 is less than '3'"));
}
