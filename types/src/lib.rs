//! Checked integer arithmetic with must-check enforcement.
//!
//! A [`CheckedIntegral`] is a primitive integer plus two flags. Arithmetic
//! never panics and never wraps silently: a result that would leave the
//! representable range is marked *invalid* and stays invalid through every
//! later operation. Every operator result is also marked *unchecked*, and
//! reading, comparing, or branching on an unchecked value is reported to the
//! process-wide [`violation`] reporter (which panics by default).
//!
//! ```
//! use ckint_types::CheckedI32;
//!
//! let sum = CheckedI32::max_value() + 1;
//! assert!(sum.is_invalid());
//!
//! let sum = (CheckedI32::new(40) + 2).acknowledge();
//! assert_eq!(sum.value(), 42);
//! assert_eq!(sum.to_string(), "42");
//! ```
//!
//! This crate never installs a tracing subscriber; violations are logged
//! through whatever the host application has set up.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)] // Panics come from the violation reporter
#![allow(clippy::module_name_repetitions)]

pub mod bounds;
mod cmp;
pub mod convert;
mod fmt;
mod index;
mod integral;
mod ops;
pub mod policy;
pub mod violation;

pub use bounds::{Integer, SignedInteger, UnsignedInteger};
pub use convert::{
    IntoChecked, merge_usize_with_u8, merge_usize_with_u16, merge_usize_with_u32, to_i8, to_i16,
    to_i32, to_i64, to_idx, to_isize, to_u8, to_u8_truncating, to_u16, to_u16_truncating, to_u32,
    to_u32_truncating, to_u64, to_u64_truncating, to_usize, to_usize_truncating,
};
pub use fmt::INVALID_MARKER;
pub use index::CheckedIndex;
pub use integral::{CheckedIntegral, Poisoned};
pub use policy::{Bounded, Modulo, OverflowPolicy};
pub use violation::{
    Enforcement, InstallError, Reporter, UnknownEnforcement, Violation, ViolationKind,
};

// ============================================================================
// Width aliases
// ============================================================================

pub type CheckedI8 = CheckedIntegral<i8>;
pub type CheckedI16 = CheckedIntegral<i16>;
pub type CheckedI32 = CheckedIntegral<i32>;
pub type CheckedI64 = CheckedIntegral<i64>;
pub type CheckedIsize = CheckedIntegral<isize>;
pub type CheckedU8 = CheckedIntegral<u8>;
pub type CheckedU16 = CheckedIntegral<u16>;
pub type CheckedU32 = CheckedIntegral<u32>;
pub type CheckedU64 = CheckedIntegral<u64>;
pub type CheckedUsize = CheckedIntegral<usize>;

/// Unsigned integers whose addition and subtraction wrap.
pub type ModuloU8 = CheckedIntegral<u8, Modulo>;
pub type ModuloU16 = CheckedIntegral<u16, Modulo>;
pub type ModuloU32 = CheckedIntegral<u32, Modulo>;
pub type ModuloU64 = CheckedIntegral<u64, Modulo>;
pub type ModuloUsize = CheckedIntegral<usize, Modulo>;
