//! Operator properties checked against the primitive `checked_*` methods.
//!
//! The 8-bit widths are swept exhaustively; the wider ones at their edges.

use ckint_types::{CheckedI8, CheckedIntegral, CheckedU8, Integer, ModuloU8, SignedInteger};

use crate::common::{all_i8, all_u8, edges, outcome};

macro_rules! sweep {
    ($Checked:ty, $values:expr, $a:ident, $b:ident, $op:tt, $expected:expr) => {
        for $a in $values {
            for $b in $values {
                let expected = $expected;
                assert_eq!(
                    outcome(<$Checked>::new($a) $op <$Checked>::new($b)),
                    expected,
                    "{} {} {}",
                    $a,
                    stringify!($op),
                    $b
                );
                assert_eq!(outcome(<$Checked>::new($a) $op $b), expected);
                assert_eq!(outcome($a $op <$Checked>::new($b)), expected);
            }
        }
    };
}

#[test]
fn i8_arithmetic_matches_primitive_checked_ops() {
    sweep!(CheckedI8, all_i8(), a, b, +, a.checked_add(b));
    sweep!(CheckedI8, all_i8(), a, b, -, a.checked_sub(b));
    sweep!(CheckedI8, all_i8(), a, b, *, a.checked_mul(b));
    sweep!(CheckedI8, all_i8(), a, b, /, a.checked_div(b));
    sweep!(CheckedI8, all_i8(), a, b, %, a.checked_rem(b));
}

#[test]
fn u8_arithmetic_matches_primitive_checked_ops() {
    sweep!(CheckedU8, all_u8(), a, b, +, a.checked_add(b));
    sweep!(CheckedU8, all_u8(), a, b, -, a.checked_sub(b));
    sweep!(CheckedU8, all_u8(), a, b, *, a.checked_mul(b));
    sweep!(CheckedU8, all_u8(), a, b, /, a.checked_div(b));
    sweep!(CheckedU8, all_u8(), a, b, %, a.checked_rem(b));
}

#[test]
fn bitwise_ops_never_poison_valid_operands() {
    sweep!(CheckedI8, all_i8(), a, b, &, Some(a & b));
    sweep!(CheckedI8, all_i8(), a, b, |, Some(a | b));
    sweep!(CheckedI8, all_i8(), a, b, ^, Some(a ^ b));
    sweep!(CheckedU8, all_u8(), a, b, &, Some(a & b));
    sweep!(CheckedU8, all_u8(), a, b, |, Some(a | b));
    sweep!(CheckedU8, all_u8(), a, b, ^, Some(a ^ b));
}

#[test]
fn shifts_reject_negative_and_oversized_amounts() {
    sweep!(CheckedI8, all_i8(), a, b, <<, u32::try_from(b).ok().and_then(|n| a.checked_shl(n)));
    sweep!(CheckedI8, all_i8(), a, b, >>, u32::try_from(b).ok().and_then(|n| a.checked_shr(n)));
    sweep!(CheckedU8, all_u8(), a, b, <<, a.checked_shl(u32::from(b)));
    sweep!(CheckedU8, all_u8(), a, b, >>, a.checked_shr(u32::from(b)));
}

#[test]
fn modulo_add_and_sub_wrap_like_hardware() {
    sweep!(ModuloU8, all_u8(), a, b, +, Some(a.wrapping_add(b)));
    sweep!(ModuloU8, all_u8(), a, b, -, Some(a.wrapping_sub(b)));
    sweep!(ModuloU8, all_u8(), a, b, *, a.checked_mul(b));
}

#[test]
fn negation_matches_checked_neg() {
    for a in all_i8() {
        assert_eq!(outcome(-CheckedI8::new(a)), a.checked_neg());
    }
}

fn poison_is_sticky<T: Integer>() {
    let poison = CheckedIntegral::<T>::failure();
    for v in edges::<T>() {
        let v = CheckedIntegral::<T>::new(v);
        for result in [
            poison + v,
            v + poison,
            poison - v,
            v - poison,
            poison * v,
            v * poison,
            poison / v,
            v / poison,
            poison % v,
            v % poison,
            poison & v,
            v & poison,
            poison | v,
            v | poison,
            poison ^ v,
            v ^ poison,
            poison << v,
            v << poison,
            poison >> v,
            v >> poison,
            !poison,
            poison.max(v),
            v.min(poison),
        ] {
            assert!(result.is_invalid());
            assert!(result.is_unchecked());
        }
    }
}

#[test]
fn poison_propagates_through_every_operator() {
    poison_is_sticky::<i8>();
    poison_is_sticky::<i16>();
    poison_is_sticky::<i32>();
    poison_is_sticky::<i64>();
    poison_is_sticky::<isize>();
    poison_is_sticky::<u8>();
    poison_is_sticky::<u16>();
    poison_is_sticky::<u32>();
    poison_is_sticky::<u64>();
    poison_is_sticky::<usize>();
}

fn results_are_unchecked<T: Integer>() {
    for a in edges::<T>() {
        for b in edges::<T>() {
            let a = CheckedIntegral::<T>::new(a);
            let b = CheckedIntegral::<T>::new(b);
            for result in [a + b, a - b, a * b, a / b, a % b, a & b, a | b, a ^ b, a << b, a >> b] {
                assert!(result.is_unchecked());
                let acked = result.acknowledge();
                assert!(acked.is_checked());
                assert_eq!(acked.is_invalid(), result.is_invalid());
            }
        }
    }
}

#[test]
fn every_result_is_unchecked_and_acknowledge_keeps_validity() {
    results_are_unchecked::<i16>();
    results_are_unchecked::<i32>();
    results_are_unchecked::<i64>();
    results_are_unchecked::<isize>();
    results_are_unchecked::<u16>();
    results_are_unchecked::<u32>();
    results_are_unchecked::<u64>();
    results_are_unchecked::<usize>();
}

fn overflow_boundary<T: Integer>() {
    assert!((CheckedIntegral::<T>::max_value() + T::ONE).is_invalid());
    assert_eq!(outcome(CheckedIntegral::<T>::max_value() + T::ZERO), Some(T::MAX));
    assert!((CheckedIntegral::<T>::min_value() - T::ONE).is_invalid());
    assert_eq!(outcome(CheckedIntegral::<T>::min_value() - T::ZERO), Some(T::MIN));
}

fn signed_division_boundary<T: SignedInteger>() {
    assert!((CheckedIntegral::<T>::min_value() / T::NEG_ONE).is_invalid());
    assert!((CheckedIntegral::<T>::min_value() % T::NEG_ONE).is_invalid());
    assert!((-CheckedIntegral::<T>::min_value()).is_invalid());
}

#[test]
fn boundaries_of_every_width() {
    overflow_boundary::<i8>();
    overflow_boundary::<i16>();
    overflow_boundary::<i32>();
    overflow_boundary::<i64>();
    overflow_boundary::<isize>();
    overflow_boundary::<u8>();
    overflow_boundary::<u16>();
    overflow_boundary::<u32>();
    overflow_boundary::<u64>();
    overflow_boundary::<usize>();

    signed_division_boundary::<i8>();
    signed_division_boundary::<i16>();
    signed_division_boundary::<i32>();
    signed_division_boundary::<i64>();
    signed_division_boundary::<isize>();
}
