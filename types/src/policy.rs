//! Overflow policies for addition and subtraction.
//!
//! Every width is [`Bounded`] by default. Unsigned widths may opt into
//! [`Modulo`], which wraps on add/sub the way two's-complement hardware does.
//! A signed modulo integer cannot be named: `Modulo` only implements
//! [`OverflowPolicy`] for [`UnsignedInteger`] types.

use std::fmt::Debug;
use std::hash::Hash;

use crate::bounds::{Integer, UnsignedInteger};

/// Decides what addition and subtraction do at the edges of `T`.
///
/// Multiplication, division, remainder and shifts are always checked,
/// regardless of policy.
pub trait OverflowPolicy<T: Integer>: Copy + Default + Debug + Eq + Hash + 'static {
    /// `None` marks the result invalid.
    fn add_values(lhs: T, rhs: T) -> Option<T>;

    /// `None` marks the result invalid.
    fn sub_values(lhs: T, rhs: T) -> Option<T>;
}

/// Add/sub outside `[MIN, MAX]` poisons the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounded;

/// Add/sub wrap modulo `2^BITS`. Unsigned widths only.
///
/// ```compile_fail
/// use ckint_types::{CheckedIntegral, Modulo};
///
/// // Signed modulo integers are unrepresentable.
/// let _ = CheckedIntegral::<i32, Modulo>::new(1) + 1;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modulo;

impl<T: Integer> OverflowPolicy<T> for Bounded {
    #[inline]
    fn add_values(lhs: T, rhs: T) -> Option<T> {
        lhs.try_add(rhs)
    }

    #[inline]
    fn sub_values(lhs: T, rhs: T) -> Option<T> {
        lhs.try_sub(rhs)
    }
}

impl<T: UnsignedInteger> OverflowPolicy<T> for Modulo {
    #[inline]
    fn add_values(lhs: T, rhs: T) -> Option<T> {
        Some(lhs.wrapping_add_val(rhs))
    }

    #[inline]
    fn sub_values(lhs: T, rhs: T) -> Option<T> {
        Some(lhs.wrapping_sub_val(rhs))
    }
}
