//! Numeric bounds and primitive checked helpers for every supported width.
//!
//! [`Integer`] is the single capability the operator matrix is written against.
//! It supplies the native minimum/maximum of each primitive together with the
//! by-value checked helpers the operators need, so the overflow rules live in
//! one generic place instead of once per width.

use std::fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Neg, Not};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width primitive integer that can back a
/// [`CheckedIntegral`](crate::CheckedIntegral).
///
/// Sealed: implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`,
/// `u32`, `u64` and `usize`.
pub trait Integer:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Binary
    + Octal
    + LowerHex
    + UpperHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Width of the type in bits.
    const BITS: u32;
    /// Whether the type can hold negative values.
    const SIGNED: bool;
    /// Smallest representable value, bit-identical to the native `MIN`.
    const MIN: Self;
    /// Largest representable value, bit-identical to the native `MAX`.
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const THREE: Self;

    /// Addition, `None` when the result leaves `[MIN, MAX]`.
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction, `None` when the result leaves `[MIN, MAX]`.
    fn try_sub(self, rhs: Self) -> Option<Self>;

    /// Multiplication, `None` when the result leaves `[MIN, MAX]`.
    fn try_mul(self, rhs: Self) -> Option<Self>;

    /// Division, `None` for a zero divisor and for `MIN / -1`.
    fn try_div(self, rhs: Self) -> Option<Self>;

    /// Remainder, `None` for a zero divisor and for `MIN % -1`.
    fn try_rem(self, rhs: Self) -> Option<Self>;

    /// Two's-complement wrapping addition.
    fn wrapping_add_val(self, rhs: Self) -> Self;

    /// Two's-complement wrapping subtraction.
    fn wrapping_sub_val(self, rhs: Self) -> Self;

    /// Interprets `self` as a shift amount.
    ///
    /// Returns `None` when the amount is negative or not smaller than
    /// [`Self::BITS`].
    fn shift_amount(self) -> Option<u32>;

    /// Left shift by an amount already validated by [`Self::shift_amount`].
    fn shl_raw(self, amount: u32) -> Self;

    /// Right shift (arithmetic for signed types) by a validated amount.
    fn shr_raw(self, amount: u32) -> Self;
}

/// A signed [`Integer`]. Only signed widths get unary negation.
pub trait SignedInteger: Integer + Neg<Output = Self> {
    const NEG_ONE: Self;
    const NEG_TWO: Self;
    const NEG_THREE: Self;

    /// Negation, `None` for `MIN`.
    fn try_neg(self) -> Option<Self>;
}

/// An unsigned [`Integer`]. Only unsigned widths accept the
/// [`Modulo`](crate::Modulo) policy.
pub trait UnsignedInteger: Integer {
    /// The bits of `self`, zero-extended to 64 bits.
    fn to_u64_bits(self) -> u64;
}

macro_rules! impl_integer {
    ($t:ty, $signed:expr) => {
        impl sealed::Sealed for $t {}

        impl Integer for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;
            const THREE: Self = 3;

            #[inline]
            fn try_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn try_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }

            #[inline]
            fn try_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }

            #[inline]
            fn try_div(self, rhs: Self) -> Option<Self> {
                <$t>::checked_div(self, rhs)
            }

            #[inline]
            fn try_rem(self, rhs: Self) -> Option<Self> {
                <$t>::checked_rem(self, rhs)
            }

            #[inline]
            fn wrapping_add_val(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub_val(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn shift_amount(self) -> Option<u32> {
                u32::try_from(self).ok().filter(|amount| *amount < <$t>::BITS)
            }

            #[inline]
            fn shl_raw(self, amount: u32) -> Self {
                <$t>::wrapping_shl(self, amount)
            }

            #[inline]
            fn shr_raw(self, amount: u32) -> Self {
                <$t>::wrapping_shr(self, amount)
            }
        }
    };
}

macro_rules! impl_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl_integer!($t, true);

            impl SignedInteger for $t {
                const NEG_ONE: Self = -1;
                const NEG_TWO: Self = -2;
                const NEG_THREE: Self = -3;

                #[inline]
                fn try_neg(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl_integer!($t, false);

            impl UnsignedInteger for $t {
                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn to_u64_bits(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);
