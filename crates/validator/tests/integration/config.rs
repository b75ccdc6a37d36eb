use fieldcheck::{Cause, Validator, ValidatorConfig};
use pretty_assertions::assert_eq;

#[test]
fn config_loads_from_json() {
    let config: ValidatorConfig =
        serde_json::from_str(r#"{ "root_name": "payload", "max_depth": 3 }"#).unwrap();

    assert_eq!(config.root_name, "payload");
    assert_eq!(config.max_depth, Some(3));

    let validator = Validator::new(config);
    let errors = validator.validate(&7_i64).unwrap_err();
    assert_eq!(errors.violations()[0].field, "payload");
    assert!(errors.is(&Cause::NotStruct));
}

#[test]
fn empty_json_is_the_default() {
    let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ValidatorConfig::default());
    assert_eq!(Validator::default().config(), &config);
}

#[test]
fn config_round_trips_through_json() {
    let config = ValidatorConfig::new().with_root_name("root").with_max_depth(4);
    let text = serde_json::to_string(&config).unwrap();
    let back: ValidatorConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}
