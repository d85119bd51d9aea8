//! Shared test utilities and fixtures

#![allow(dead_code)]

use ckint_types::{CheckedIntegral, Integer, OverflowPolicy};

/// The examined outcome of `value`: its payload, or `None` when invalid.
pub fn outcome<T, P>(value: CheckedIntegral<T, P>) -> Option<T>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    value.into_result().ok()
}

/// Every `i8`, for exhaustive sweeps.
pub fn all_i8() -> impl Iterator<Item = i8> + Clone {
    i8::MIN..=i8::MAX
}

/// Every `u8`, for exhaustive sweeps.
pub fn all_u8() -> impl Iterator<Item = u8> + Clone {
    u8::MIN..=u8::MAX
}

/// Values around the edges of `T`: `MIN`, `MIN + 1`, the small constants,
/// `MAX - 1` and `MAX`.
pub fn edges<T: Integer>() -> Vec<T> {
    let mut values = vec![T::MIN, T::ZERO, T::ONE, T::TWO, T::THREE, T::MAX];
    values.extend(T::MIN.try_add(T::ONE));
    values.extend(T::MAX.try_sub(T::ONE));
    values.sort_unstable();
    values.dedup();
    values
}
