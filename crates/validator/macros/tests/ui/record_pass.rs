use fieldcheck::{Cause, Record, validate};

#[derive(Record)]
pub struct Address {
    #[validate("min:2")]
    pub city: String,
    #[validate("len:5")]
    pub zip: String,
}

#[derive(Record)]
pub struct Customer {
    #[validate("min:1;max:64")]
    pub name: String,
    #[validate("min:18;max:120")]
    pub age: i64,
    #[validate("in:free,pro")]
    pub plan: &'static str,
    pub address: Address,
    #[validate("in:1,2,3")]
    pub scores: Vec<i64>,
    pub r#type: String,
    #[allow(dead_code)]
    note: String,
}

fn main() {
    let customer = Customer {
        name: "Ada".into(),
        age: 36,
        plan: "pro",
        address: Address {
            city: "Oslo".into(),
            zip: "0150".into(),
        },
        scores: vec![1, 3],
        r#type: String::new(),
        note: String::new(),
    };

    let errors = validate(&customer).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.violations()[0].field, "address.zip");
    assert!(errors.violations()[0].cause.is_constraint_violation());
    assert!(!errors.is(&Cause::UnsupportedType));
}
