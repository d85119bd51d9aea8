//! Serde mapping: a valid value is its payload, an invalid one is `null`.

use ckint_types::{CheckedI16, CheckedIntegral, CheckedU32, ModuloU8};
use serde_json::json;

#[test]
fn valid_value_serializes_as_number() {
    let v = CheckedI16::new(-300);
    assert_eq!(serde_json::to_value(v).unwrap(), json!(-300));
}

#[test]
fn invalid_value_serializes_as_null() {
    let v = CheckedU32::max_value() + 1;
    assert_eq!(serde_json::to_value(v).unwrap(), json!(null));
}

#[test]
fn serializing_an_unchecked_value_does_not_report() {
    let v = CheckedU32::new(20) * 2;
    assert_eq!(serde_json::to_string(&v).unwrap(), "40");
    assert!(v.is_unchecked());
}

#[test]
fn number_deserializes_checked_and_valid() {
    let v: CheckedU32 = serde_json::from_str("7").unwrap();
    assert!(v.is_valid_and_checked());
    assert_eq!(v.value(), 7);
}

#[test]
fn null_deserializes_to_failure() {
    let v: CheckedI16 = serde_json::from_str("null").unwrap();
    assert!(v.is_invalid());
    assert!(v.is_unchecked());
}

#[test]
fn out_of_range_number_is_a_deserialize_error() {
    assert!(serde_json::from_str::<CheckedIntegral<u8>>("256").is_err());
    assert!(serde_json::from_str::<ModuloU8>("-1").is_err());
}

#[test]
fn round_trip_inside_a_struct() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Extent {
        offset: CheckedU32,
        length: CheckedU32,
    }

    let extent = Extent {
        offset: CheckedU32::new(4096),
        length: CheckedU32::max_value() + 1,
    };
    let encoded = serde_json::to_string(&extent).unwrap();
    assert_eq!(encoded, r#"{"offset":4096,"length":null}"#);

    let decoded: Extent = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.offset.value(), 4096);
    assert!(decoded.length.is_invalid());
}
