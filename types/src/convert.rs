//! Width conversions between checked integrals.
//!
//! Every function here accepts a bare primitive or a checked integral of any
//! width through [`IntoChecked`]. `to_*` keep the source flags and poison the
//! result when the payload does not fit the target width. `to_*_truncating`
//! keep the low bits instead, like an `as` cast between unsigned types. The
//! `merge_usize_with_*` helpers replace the low bits of a `usize` with a
//! narrower value and behave like the bitwise operators they are built from:
//! the result is unchecked.

use crate::bounds::{Integer, UnsignedInteger};
use crate::index::CheckedIndex;
use crate::integral::CheckedIntegral;
use crate::policy::{Bounded, OverflowPolicy};

/// Anything that can enter a conversion: a bare primitive (checked and valid,
/// [`Bounded`] policy) or a checked integral, which is passed through as is.
pub trait IntoChecked {
    type Value: Integer;
    type Policy: OverflowPolicy<Self::Value>;

    fn into_checked(self) -> CheckedIntegral<Self::Value, Self::Policy>;
}

impl<T, P> IntoChecked for CheckedIntegral<T, P>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    type Value = T;
    type Policy = P;

    #[inline]
    fn into_checked(self) -> Self {
        self
    }
}

macro_rules! impl_into_checked {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoChecked for $t {
                type Value = $t;
                type Policy = Bounded;

                #[inline]
                fn into_checked(self) -> CheckedIntegral<$t> {
                    CheckedIntegral::new(self)
                }
            }
        )*
    };
}

impl_into_checked!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_to {
    ($($name:ident => $t:ty),* $(,)?) => {
        $(
            #[doc = concat!("Converts `source` to a checked `", stringify!($t), "`.")]
            pub fn $name<S>(source: S) -> CheckedIntegral<$t>
            where
                S: IntoChecked,
                $t: TryFrom<S::Value>,
            {
                CheckedIntegral::convert(source.into_checked())
            }
        )*
    };
}

impl_to!(
    to_i8 => i8,
    to_i16 => i16,
    to_i32 => i32,
    to_i64 => i64,
    to_isize => isize,
    to_u8 => u8,
    to_u16 => u16,
    to_u32 => u32,
    to_u64 => u64,
    to_usize => usize,
);

macro_rules! impl_to_truncating {
    ($($name:ident => $t:ty),* $(,)?) => {
        $(
            #[doc = concat!("Keeps the low `", stringify!($t), "::BITS` bits of an unsigned `source`.")]
            ///
            /// Never poisons: the flags of `source` carry over unchanged.
            pub fn $name<S>(source: S) -> CheckedIntegral<$t>
            where
                S: IntoChecked,
                S::Value: UnsignedInteger,
            {
                let source = source.into_checked();
                CheckedIntegral::with_flags_from(source.payload().to_u64_bits() as $t, source)
            }
        )*
    };
}

impl_to_truncating!(
    to_u8_truncating => u8,
    to_u16_truncating => u16,
    to_u32_truncating => u32,
    to_u64_truncating => u64,
    to_usize_truncating => usize,
);

/// Converts `source` to a [`CheckedIndex`]. See [`CheckedIndex::from_checked`].
#[track_caller]
pub fn to_idx<S>(source: S) -> CheckedIndex
where
    S: IntoChecked,
    usize: TryFrom<S::Value>,
{
    CheckedIndex::from_checked(source.into_checked())
}

fn merge_low_bits<L, P, Q>(
    upper: CheckedIntegral<usize, P>,
    lower: CheckedIntegral<L, Q>,
) -> CheckedIntegral<usize, P>
where
    L: Integer,
    P: OverflowPolicy<usize>,
    Q: OverflowPolicy<L>,
    usize: TryFrom<L>,
{
    let low_mask = usize::MAX >> usize::BITS.saturating_sub(L::BITS);
    (upper & !low_mask) | CheckedIntegral::<usize, P>::convert(lower)
}

/// `(upper & !0xFF) | lower`
pub fn merge_usize_with_u8<P, Q>(
    upper: CheckedIntegral<usize, P>,
    lower: CheckedIntegral<u8, Q>,
) -> CheckedIntegral<usize, P>
where
    P: OverflowPolicy<usize>,
    Q: OverflowPolicy<u8>,
{
    merge_low_bits(upper, lower)
}

/// `(upper & !0xFFFF) | lower`
pub fn merge_usize_with_u16<P, Q>(
    upper: CheckedIntegral<usize, P>,
    lower: CheckedIntegral<u16, Q>,
) -> CheckedIntegral<usize, P>
where
    P: OverflowPolicy<usize>,
    Q: OverflowPolicy<u16>,
{
    merge_low_bits(upper, lower)
}

/// `(upper & !0xFFFF_FFFF) | lower`
pub fn merge_usize_with_u32<P, Q>(
    upper: CheckedIntegral<usize, P>,
    lower: CheckedIntegral<u32, Q>,
) -> CheckedIntegral<usize, P>
where
    P: OverflowPolicy<usize>,
    Q: OverflowPolicy<u32>,
{
    merge_low_bits(upper, lower)
}
