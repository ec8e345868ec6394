//! Integration tests for bundle schemas and pool configuration

use flyweight_foundation::{AttributeBundle, BundleSchema, ErrorKind, PoolConfig, ValidationError};

fn validation(schema: &BundleSchema, bundle: &AttributeBundle) -> Option<ValidationError> {
    match schema.validate(bundle) {
        Ok(()) => None,
        Err(err) => match err.kind {
            ErrorKind::Validation(v) => Some(v),
            other => panic!("unexpected error kind: {other:?}"),
        },
    }
}

#[test]
fn custom_required_fields() {
    let schema = BundleSchema::new(["color", "size"]);

    let ok = AttributeBundle::new([("color", "red"), ("size", "L")]).unwrap();
    assert_eq!(validation(&schema, &ok), None);

    let missing = AttributeBundle::new([("color", "red")]).unwrap();
    assert_eq!(
        validation(&schema, &missing),
        Some(ValidationError::MissingField("size".to_string()))
    );
}

#[test]
fn missing_reported_before_empty() {
    let bundle = AttributeBundle::new([("department", ""), ("role", "Manager")]).unwrap();
    assert_eq!(
        validation(&BundleSchema::default(), &bundle),
        Some(ValidationError::MissingField("location".to_string()))
    );
}

#[test]
fn any_schema_accepts_arbitrary_fields() {
    let bundle = AttributeBundle::new([("anything", "goes")]).unwrap();
    assert_eq!(validation(&BundleSchema::any(), &bundle), None);
}

#[test]
fn permissive_config_uses_any_schema() {
    assert_eq!(PoolConfig::permissive().schema, BundleSchema::any());
    assert_eq!(
        PoolConfig::permissive().initial_capacity,
        PoolConfig::default().initial_capacity
    );
}
