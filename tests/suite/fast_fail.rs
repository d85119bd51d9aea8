//! Guarded reads under the strict default reporter.

use std::panic::{AssertUnwindSafe, catch_unwind};

use ckint_types::{CheckedI16, CheckedI64, CheckedU8, CheckedU64, violation};

#[test]
#[should_panic(expected = "checked integral must be checked before use")]
fn value_of_fresh_sum() {
    let v = CheckedU8::new(1) + 1;
    let _ = v.value();
}

#[test]
#[should_panic(expected = "checked integral must be checked before use")]
fn comparing_fresh_sum_with_literal() {
    let v = CheckedU8::new(1) + 1;
    let _ = v == 0;
}

#[test]
#[should_panic(expected = "checked integral must be checked before use")]
fn is_zero_of_fresh_product() {
    let v = CheckedI64::new(3) * 3;
    let _ = v.is_zero();
}

#[test]
#[should_panic(expected = "checked integral must be checked before use")]
fn is_neg_of_fresh_difference() {
    let v = CheckedI16::new(3) - 4;
    let _ = v.is_neg();
}

#[test]
#[should_panic(expected = "checked integral must be checked before use")]
fn is_zero_or_unchecked_is_still_a_use() {
    let v = CheckedU64::new(3) / 3;
    let _ = v.is_zero_or_unchecked();
}

#[test]
#[should_panic(expected = "an invalid checked integral was read")]
fn value_of_examined_poison() {
    let v = (CheckedU8::max_value() + 1).acknowledge();
    let _ = v.value();
}

#[test]
#[should_panic(expected = "an invalid checked integral was read")]
fn is_pos_of_examined_poison() {
    let v = CheckedI64::with_invalid(5, true);
    let _ = v.is_pos();
}

#[test]
fn panic_message_names_the_call_site() {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let v = CheckedU8::new(1) + 1;
        v.value()
    }));

    let payload = result.expect_err("reading a fresh sum must panic");
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default();
    assert!(message.starts_with("contract violation:"), "{message}");
    assert!(message.contains("fast_fail.rs"), "{message}");
}

#[test]
fn default_reporter_is_strict() {
    assert!(violation::reporter().enforcement().is_strict());
}

#[test]
fn examinations_never_report() {
    let v = CheckedU8::max_value() + 1;
    assert!(v.is_invalid());
    assert!(v.is_unchecked());
    assert!(!v.is_valid_and_checked());
    assert_eq!(v.to_string(), "[error]");
    assert!(v.into_result().is_err());

    let v = (CheckedU8::new(1) + 1).acknowledge();
    assert_eq!(v.value(), 2);
    assert!(v == 2);
}
