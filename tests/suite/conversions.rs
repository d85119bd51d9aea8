//! Width conversions through the public API.

use ckint_types::{
    CheckedI8, CheckedI32, CheckedIntegral, CheckedU16, CheckedU64, CheckedUsize, to_i8, to_idx,
    to_u8_truncating, to_u16, to_usize,
};

use crate::common::outcome;

#[test]
fn narrowing_a_checked_sum() {
    let sum = CheckedI32::new(100) + 27;
    assert_eq!(outcome(to_i8(sum)), Some(127));

    let sum = CheckedI32::new(100) + 28;
    assert_eq!(outcome(to_i8(sum)), None);
}

#[test]
fn converting_poison_keeps_it_poisoned() {
    let poisoned = CheckedU64::max_value() * 2;
    let narrowed = to_u16(poisoned);
    assert!(narrowed.is_invalid());
    assert!(narrowed.is_unchecked());
}

#[test]
fn conversion_of_checked_value_is_checked() {
    let v = to_usize(CheckedU16::new(9));
    assert!(v.is_valid_and_checked());
    assert_eq!(v.value(), 9);
}

#[test]
fn convert_constructor_matches_free_functions() {
    for raw in [i32::MIN, -129, -128, -1, 0, 127, 128, i32::MAX] {
        let source = CheckedI32::new(raw);
        assert_eq!(
            outcome(CheckedI8::convert(source)),
            outcome(to_i8(source)),
            "{raw}"
        );
        assert_eq!(outcome(to_i8(source)), i8::try_from(raw).ok(), "{raw}");
    }
}

#[test]
fn merge_folds_in_selector_validity() {
    let index = CheckedUsize::merge(CheckedU16::new(12), CheckedI8::magic_1());
    assert!(index.is_valid_and_checked());
    assert_eq!(index.value(), 12);

    let index = CheckedUsize::merge(CheckedU16::new(12), CheckedI8::failure());
    assert!(index.is_invalid());

    let narrowed = CheckedIntegral::<u8>::merge(CheckedI32::new(-1), CheckedI8::magic_1());
    assert!(narrowed.is_invalid());
    assert!(narrowed.is_checked());
}

#[test]
fn bare_primitives_enter_conversions() {
    assert_eq!(outcome(to_u16(70_000_u32)), None);
    assert_eq!(outcome(to_u16(65_535_u32)), Some(u16::MAX));
    assert_eq!(outcome(to_u8_truncating(0x1FF_u16)), Some(0xFF));
}

#[test]
fn index_from_a_checked_offset() {
    let items = [10, 20, 30, 40];
    let base = (CheckedU16::new(1) + 2).acknowledge();
    let idx = to_idx(base);
    assert_eq!(idx.lookup(&items), Some(&40));
    assert!((idx + 1).lookup(&items).is_none());

    let before_start = idx - 4;
    assert!(before_start.is_invalid());
    assert_eq!(before_start.to_string(), "[error]");
}
