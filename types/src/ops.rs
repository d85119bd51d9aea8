//! The checked operator matrix.
//!
//! Every operator follows the same three rules:
//!
//! 1. Poison first: an invalid operand makes the result invalid without
//!    touching either payload.
//! 2. Domain check: overflow, underflow, a zero divisor, `MIN / -1`, and a
//!    shift amount that is negative or not below the bit width all poison
//!    the result. Add/sub defer to the [`OverflowPolicy`].
//! 3. The result is always unchecked, valid or not.
//!
//! A bare `T` is accepted on either side of every binary operator.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::bounds::{Integer, SignedInteger};
use crate::integral::CheckedIntegral;
use crate::policy::OverflowPolicy;

impl<T, P> CheckedIntegral<T, P>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    #[inline]
    fn combine(self, rhs: Self, op: impl FnOnce(T, T) -> Option<T>) -> Self {
        if self.is_invalid() || rhs.is_invalid() {
            return Self::failure();
        }
        op(self.payload(), rhs.payload()).map_or_else(Self::failure, Self::pending)
    }

    #[inline]
    fn map(self, op: impl FnOnce(T) -> Option<T>) -> Self {
        if self.is_invalid() {
            return Self::failure();
        }
        op(self.payload()).map_or_else(Self::failure, Self::pending)
    }

    /// Left shift that also poisons the result when significant bits
    /// (including the sign bit of a signed type) are shifted out.
    ///
    /// `<<` only rejects a bad shift amount and otherwise discards the
    /// high bits, like the primitive.
    ///
    /// ```
    /// use ckint_types::CheckedU8;
    ///
    /// assert!((CheckedU8::new(0x81) << 1).is_valid());
    /// assert!(CheckedU8::new(0x81).shl_exact(1).is_invalid());
    /// assert_eq!(CheckedU8::new(0x41).shl_exact(1).acknowledge().value(), 0x82);
    /// ```
    pub fn shl_exact(self, rhs: T) -> Self {
        self.combine(Self::new(rhs), |value, amount| {
            let amount = amount.shift_amount()?;
            let shifted = value.shl_raw(amount);
            (shifted.shr_raw(amount) == value).then_some(shifted)
        })
    }
}

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $eval:expr) => {
        impl<T, P> $Op for CheckedIntegral<T, P>
        where
            T: Integer,
            P: OverflowPolicy<T>,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.combine(rhs, $eval)
            }
        }

        impl<T, P> $Op<T> for CheckedIntegral<T, P>
        where
            T: Integer,
            P: OverflowPolicy<T>,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: T) -> Self {
                self.combine(Self::new(rhs), $eval)
            }
        }

        impl<T, P> $OpAssign for CheckedIntegral<T, P>
        where
            T: Integer,
            P: OverflowPolicy<T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl<T, P> $OpAssign<T> for CheckedIntegral<T, P>
        where
            T: Integer,
            P: OverflowPolicy<T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, P::add_values);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, P::sub_values);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, T::try_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, T::try_div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, T::try_rem);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |a: T, b: T| Some(a & b));
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |a: T, b: T| Some(a | b));
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |a: T, b: T| Some(a ^ b));
impl_binary_op!(Shl, shl, ShlAssign, shl_assign, |a: T, b: T| b
    .shift_amount()
    .map(|n| a.shl_raw(n)));
impl_binary_op!(Shr, shr, ShrAssign, shr_assign, |a: T, b: T| b
    .shift_amount()
    .map(|n| a.shr_raw(n)));

impl<T, P> Not for CheckedIntegral<T, P>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|value| Some(!value))
    }
}

/// Unsigned widths have no negation:
///
/// ```compile_fail
/// use ckint_types::CheckedU32;
///
/// let _ = -CheckedU32::new(1);
/// ```
impl<T, P> Neg for CheckedIntegral<T, P>
where
    T: SignedInteger,
    P: OverflowPolicy<T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(T::try_neg)
    }
}

// ============================================================================
// Bare literal on the left-hand side
// ============================================================================

macro_rules! impl_literal_lhs_op {
    ($t:ty, $Op:ident, $op:ident) => {
        impl<P: OverflowPolicy<$t>> $Op<CheckedIntegral<$t, P>> for $t {
            type Output = CheckedIntegral<$t, P>;

            #[inline]
            fn $op(self, rhs: CheckedIntegral<$t, P>) -> Self::Output {
                $Op::$op(CheckedIntegral::<$t, P>::new(self), rhs)
            }
        }
    };
}

macro_rules! impl_literal_lhs {
    ($($t:ty),* $(,)?) => {
        $(
            impl_literal_lhs_op!($t, Add, add);
            impl_literal_lhs_op!($t, Sub, sub);
            impl_literal_lhs_op!($t, Mul, mul);
            impl_literal_lhs_op!($t, Div, div);
            impl_literal_lhs_op!($t, Rem, rem);
            impl_literal_lhs_op!($t, BitAnd, bitand);
            impl_literal_lhs_op!($t, BitOr, bitor);
            impl_literal_lhs_op!($t, BitXor, bitxor);
            impl_literal_lhs_op!($t, Shl, shl);
            impl_literal_lhs_op!($t, Shr, shr);
        )*
    };
}

impl_literal_lhs!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
