//! Basic usage example for fieldcheck

use fieldcheck::{Record, Validator, ValidatorConfig, validate};

#[derive(Record)]
pub struct Address {
    #[validate("min:2")]
    pub city: String,
    #[validate("len:5")]
    pub zip: String,
}

#[derive(Record)]
pub struct Signup {
    #[validate("min:3;max:20")]
    pub username: String,
    #[validate("min:18;max:65")]
    pub age: i64,
    #[validate("in:free,pro,team")]
    pub plan: String,
    #[validate("min:1;max:12")]
    pub interests: Vec<String>,
    pub address: Address,
}

fn main() {
    let mut signup = Signup {
        username: "ferris".into(),
        age: 30,
        plan: "pro".into(),
        interests: vec!["rust".into(), "crabs".into()],
        address: Address {
            city: "Berlin".into(),
            zip: "10115".into(),
        },
    };

    match validate(&signup) {
        Ok(()) => println!("✓ signup is valid"),
        Err(errors) => println!("✗ unexpected errors:\n{errors}"),
    }

    signup.username = "al".into();
    signup.age = 70;
    signup.interests.push(String::new());
    signup.address.zip = "101".into();

    if let Err(errors) = validate(&signup) {
        println!("\n✗ {} violations:", errors.len());
        for violation in &errors {
            println!("  [{}] {violation}", violation.cause.code());
        }
    }

    // Non-record input is reported under the configured root name
    let validator = Validator::new(ValidatorConfig::new().with_root_name("input"));
    if let Err(errors) = validator.validate(&42_i64) {
        println!("\n✗ {errors}");
    }
}
