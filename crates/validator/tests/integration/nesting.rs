use fieldcheck::{Cause, Record, Validator, ValidatorConfig, validate};
use pretty_assertions::assert_eq;

#[derive(Record)]
pub struct Geo {
    #[validate("min:-90;max:90")]
    pub lat: i64,
}

#[derive(Record)]
pub struct Address {
    #[validate("min:2")]
    pub city: String,
    pub geo: Geo,
}

#[derive(Record)]
pub struct Customer {
    #[validate("min:1")]
    pub name: String,
    pub address: Address,
    pub billing: Box<Address>,
    #[validate("max:120")]
    pub age: i64,
}

#[derive(Record)]
pub struct Wrapper {
    // private and unannotated nested records are still descended
    customer: Customer,
}

fn customer() -> Customer {
    Customer {
        name: "Ada".into(),
        address: Address {
            city: "Oslo".into(),
            geo: Geo { lat: 59 },
        },
        billing: Box::new(Address {
            city: "Bergen".into(),
            geo: Geo { lat: 60 },
        }),
        age: 36,
    }
}

fn fields(errors: &fieldcheck::ValidationErrors) -> Vec<&str> {
    errors.iter().map(|v| v.field.as_str()).collect()
}

#[test]
fn valid_tree_passes() {
    assert!(validate(&customer()).is_ok());
}

#[test]
fn violations_follow_declaration_order_depth_first() {
    let mut value = customer();
    value.name = String::new();
    value.address.city = "X".into();
    value.address.geo.lat = 100;
    value.billing.geo.lat = -91;
    value.age = 200;

    let errors = validate(&value).unwrap_err();
    assert_eq!(
        fields(&errors),
        vec![
            "name",
            "address.city",
            "address.geo.lat",
            "billing.geo.lat",
            "age"
        ]
    );
}

#[test]
fn path_has_one_segment_per_level() {
    let mut value = Wrapper {
        customer: customer(),
    };
    value.customer.address.geo.lat = 91;

    let errors = validate(&value).unwrap_err();
    assert_eq!(fields(&errors), vec!["customer.address.geo.lat"]);
    assert_eq!(errors.violations()[0].field.split('.').count(), 4);
}

#[test]
fn depth_limit_reports_the_cut_off_record() {
    let mut value = customer();
    value.address.geo.lat = 91;

    let validator = Validator::new(ValidatorConfig::new().with_max_depth(1));
    let errors = validator.validate(&value).unwrap_err();

    assert_eq!(
        fields(&errors),
        vec!["address.geo", "billing.geo"],
        "records at depth 2 are not descended"
    );
    assert!(errors.iter().all(|v| v.is(&Cause::DepthExceeded { limit: 1 })));
}

#[derive(Record)]
pub struct AnnotatedNested {
    #[validate("garbage")]
    pub geo: Geo,
}

#[test]
fn annotation_on_nested_record_is_ignored() {
    let errors = validate(&AnnotatedNested {
        geo: Geo { lat: 91 },
    })
    .unwrap_err();

    assert_eq!(fields(&errors), vec!["geo.lat"]);
    assert!(errors.is(&Cause::AboveMax { value: 91, max: 90 }));
    assert!(!errors.is(&Cause::InvalidSyntax));
}
