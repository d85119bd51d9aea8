//! Guarded comparisons.
//!
//! Comparing is a use: each operand goes through the same guard as
//! [`CheckedIntegral::value`], so an unchecked or invalid operand is reported
//! before the payloads are compared. Every method is overridden (including
//! `ne` and the ordering shorthands) so the reported location is the caller's.

use std::cmp::Ordering;

use crate::bounds::Integer;
use crate::integral::CheckedIntegral;
use crate::policy::OverflowPolicy;

impl<T, P> PartialEq for CheckedIntegral<T, P>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }

    #[track_caller]
    fn ne(&self, other: &Self) -> bool {
        self.value() != other.value()
    }
}

impl<T, P> PartialEq<T> for CheckedIntegral<T, P>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    #[track_caller]
    fn eq(&self, other: &T) -> bool {
        self.value() == *other
    }

    #[track_caller]
    fn ne(&self, other: &T) -> bool {
        self.value() != *other
    }
}

impl<T, P> PartialOrd for CheckedIntegral<T, P>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.value().cmp(&other.value()))
    }

    #[track_caller]
    fn lt(&self, other: &Self) -> bool {
        self.value() < other.value()
    }

    #[track_caller]
    fn le(&self, other: &Self) -> bool {
        self.value() <= other.value()
    }

    #[track_caller]
    fn gt(&self, other: &Self) -> bool {
        self.value() > other.value()
    }

    #[track_caller]
    fn ge(&self, other: &Self) -> bool {
        self.value() >= other.value()
    }
}

impl<T, P> PartialOrd<T> for CheckedIntegral<T, P>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    #[track_caller]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        Some(self.value().cmp(other))
    }

    #[track_caller]
    fn lt(&self, other: &T) -> bool {
        self.value() < *other
    }

    #[track_caller]
    fn le(&self, other: &T) -> bool {
        self.value() <= *other
    }

    #[track_caller]
    fn gt(&self, other: &T) -> bool {
        self.value() > *other
    }

    #[track_caller]
    fn ge(&self, other: &T) -> bool {
        self.value() >= *other
    }
}

macro_rules! impl_literal_lhs_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl<P: OverflowPolicy<$t>> PartialEq<CheckedIntegral<$t, P>> for $t {
                #[track_caller]
                fn eq(&self, other: &CheckedIntegral<$t, P>) -> bool {
                    *self == other.value()
                }

                #[track_caller]
                fn ne(&self, other: &CheckedIntegral<$t, P>) -> bool {
                    *self != other.value()
                }
            }

            impl<P: OverflowPolicy<$t>> PartialOrd<CheckedIntegral<$t, P>> for $t {
                #[track_caller]
                fn partial_cmp(&self, other: &CheckedIntegral<$t, P>) -> Option<Ordering> {
                    Some(self.cmp(&other.value()))
                }

                #[track_caller]
                fn lt(&self, other: &CheckedIntegral<$t, P>) -> bool {
                    *self < other.value()
                }

                #[track_caller]
                fn le(&self, other: &CheckedIntegral<$t, P>) -> bool {
                    *self <= other.value()
                }

                #[track_caller]
                fn gt(&self, other: &CheckedIntegral<$t, P>) -> bool {
                    *self > other.value()
                }

                #[track_caller]
                fn ge(&self, other: &CheckedIntegral<$t, P>) -> bool {
                    *self >= other.value()
                }
            }
        )*
    };
}

impl_literal_lhs_cmp!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
