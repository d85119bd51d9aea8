//! Formatting.
//!
//! Rendering is an examination, so it never reports a violation: a valid
//! value prints its payload with the caller's flags, an invalid one prints
//! [`INVALID_MARKER`] padded to the requested width.

use std::fmt;

use crate::bounds::Integer;
use crate::integral::CheckedIntegral;
use crate::policy::OverflowPolicy;

/// What an invalid value renders as, in every radix.
pub const INVALID_MARKER: &str = "[error]";

macro_rules! impl_format {
    ($($Trait:ident),* $(,)?) => {
        $(
            impl<T, P> fmt::$Trait for CheckedIntegral<T, P>
            where
                T: Integer,
                P: OverflowPolicy<T>,
            {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    if self.is_invalid() {
                        f.pad(INVALID_MARKER)
                    } else {
                        fmt::$Trait::fmt(&self.payload(), f)
                    }
                }
            }
        )*
    };
}

impl_format!(Display, LowerHex, UpperHex, Binary, Octal);
