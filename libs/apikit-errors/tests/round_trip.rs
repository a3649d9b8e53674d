//! End-to-end wire round-trips through the process-wide registry

use apikit_errors::{
    ErrorDetail, UnknownKindError, error_from_serialized, register_error_kind,
    register_global_kind,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct UpstreamTimeout(String);

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct QuotaBlown(String);

impl From<String> for QuotaBlown {
    fn from(message: String) -> Self {
        Self(message)
    }
}

#[test]
fn caught_error_survives_the_wire() {
    register_error_kind("UpstreamTimeout", |message| {
        Box::new(UpstreamTimeout(message))
    });

    let detail = ErrorDetail::from_error(&UpstreamTimeout("gateway gave up".to_owned()));
    let wire = serde_json::to_value(&detail).unwrap();
    assert_eq!(
        wire,
        json!({"type": "UpstreamTimeout", "message": "gateway gave up"})
    );

    let revived = error_from_serialized(wire).unwrap();
    let timeout = revived.downcast_ref::<UpstreamTimeout>().unwrap();
    assert_eq!(timeout.to_string(), "gateway gave up");
}

#[test]
fn typed_global_registration_keys_on_the_type_name() {
    register_global_kind::<QuotaBlown>();

    let revived = ErrorDetail::new("QuotaBlown", "over the line").into_error();
    let quota = revived.downcast_ref::<QuotaBlown>().unwrap();
    assert_eq!(quota.to_string(), "over the line");
}

#[test]
fn unknown_kind_from_the_wire_falls_back() {
    let wire = json!({"type": "SomebodyElsesError", "message": "Hrm"});
    let revived = error_from_serialized(wire).unwrap();

    let fallback = revived.downcast_ref::<UnknownKindError>().unwrap();
    assert_eq!(fallback.kind, "SomebodyElsesError");
    assert_eq!(revived.to_string(), "SomebodyElsesError: Hrm");
}

#[test]
fn malformed_wire_payload_never_reaches_resolution() {
    let err = error_from_serialized(json!({"message": "no kind"})).unwrap_err();
    assert!(err.to_string().contains("type"));
}
