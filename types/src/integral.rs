//! The checked integral value: a payload plus two flags.
//!
//! `invalid` records that some operation along the way could not produce a
//! mathematically defined result. `unchecked` records that the value came out
//! of an operation capable of failing and nobody has examined it since. The
//! flags are orthogonal: a perfectly valid sum is still unchecked until
//! [`CheckedIntegral::acknowledge`] (or any other examination) clears it.
//!
//! # State machine
//!
//! ```text
//!   literal ──> Checked/Valid ──(operator)──> Unchecked/{Valid,Invalid}
//!                    ^                                 │
//!                    └──────────(acknowledge)──────────┘  (validity kept)
//! ```
//!
//! Reading the payload, branching on it, or comparing it while unchecked is a
//! contract violation, and so is reading the payload of an invalid value.
//! Both are routed through [`crate::violation`].

use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::bounds::{Integer, SignedInteger};
use crate::policy::{Bounded, OverflowPolicy};
use crate::violation::{self, ViolationKind};

/// Returned by [`CheckedIntegral::into_result`] for an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("checked integral is invalid (overflow, underflow, division by zero, or bad shift)")]
pub struct Poisoned;

/// An integer of type `T` that carries its own failure status.
///
/// `P` selects what addition and subtraction do at the edges of `T`; see
/// [`crate::policy`].
#[must_use = "a checked integral must be examined before it is dropped or used"]
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedIntegral<T, P = Bounded> {
    value: T,
    invalid: bool,
    unchecked: bool,
    policy: PhantomData<P>,
}

impl<T, P> CheckedIntegral<T, P>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    /// A checked, valid value holding `value`.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            invalid: false,
            unchecked: false,
            policy: PhantomData,
        }
    }

    /// A checked value whose validity is supplied by the caller.
    ///
    /// This is the only way to build an invalid value that is already
    /// checked; operators never produce one.
    pub const fn with_invalid(value: T, invalid: bool) -> Self {
        Self {
            value,
            invalid,
            unchecked: false,
            policy: PhantomData,
        }
    }

    /// `value`, carrying the flags of `selector` (of any width).
    pub fn with_flags_from<S, R>(value: T, selector: CheckedIntegral<S, R>) -> Self {
        Self {
            value: if selector.invalid { T::ZERO } else { value },
            invalid: selector.invalid,
            unchecked: selector.unchecked,
            policy: PhantomData,
        }
    }

    /// Like [`Self::with_flags_from`], for a computation that may have
    /// produced nothing: `None` yields [`Self::failure`].
    pub fn with_flags_from_option<S, R>(value: Option<T>, selector: CheckedIntegral<S, R>) -> Self {
        match value {
            Some(value) => Self::with_flags_from(value, selector),
            None => Self::failure(),
        }
    }

    /// Converts `source` to `T`, poisoning the result if the payload does not fit.
    ///
    /// The flags of `source` carry over. A failed narrowing yields an invalid,
    /// unchecked value.
    pub fn convert<U, Q>(source: CheckedIntegral<U, Q>) -> Self
    where
        U: Integer,
        Q: OverflowPolicy<U>,
        T: TryFrom<U>,
    {
        if source.invalid {
            return Self {
                value: T::ZERO,
                invalid: true,
                unchecked: source.unchecked,
                policy: PhantomData,
            };
        }

        match T::try_from(source.value) {
            Ok(value) => Self {
                value,
                invalid: false,
                unchecked: source.unchecked,
                policy: PhantomData,
            },
            Err(_) => Self::failure(),
        }
    }

    /// Converts `source` to `T` and folds in the validity of `selector`.
    ///
    /// This is a merge point, not an operator: the result is checked exactly
    /// when both inputs were checked. A source that does not fit `T` makes
    /// the result invalid without marking it unchecked.
    pub fn merge<U, Q, S, R>(source: CheckedIntegral<U, Q>, selector: CheckedIntegral<S, R>) -> Self
    where
        U: Integer,
        Q: OverflowPolicy<U>,
        T: TryFrom<U>,
    {
        let converted = if source.invalid {
            None
        } else {
            T::try_from(source.value).ok()
        };
        let value = converted.filter(|_| !selector.invalid);
        Self {
            value: value.unwrap_or(T::ZERO),
            invalid: value.is_none(),
            unchecked: source.unchecked || selector.unchecked,
            policy: PhantomData,
        }
    }

    /// The universal poison literal: invalid and unchecked.
    pub const fn failure() -> Self {
        Self {
            value: T::ZERO,
            invalid: true,
            unchecked: true,
            policy: PhantomData,
        }
    }

    /// Result of an operator that succeeded: valid but unchecked.
    pub(crate) const fn pending(value: T) -> Self {
        Self {
            value,
            invalid: false,
            unchecked: true,
            policy: PhantomData,
        }
    }

    /// The payload with no enforcement. Operators use this after ruling out
    /// invalid operands.
    pub(crate) const fn payload(&self) -> T {
        self.value
    }

    pub const fn min_value() -> Self {
        Self::new(T::MIN)
    }

    pub const fn max_value() -> Self {
        Self::new(T::MAX)
    }

    pub const fn magic_0() -> Self {
        Self::new(T::ZERO)
    }

    pub const fn magic_1() -> Self {
        Self::new(T::ONE)
    }

    pub const fn magic_2() -> Self {
        Self::new(T::TWO)
    }

    pub const fn magic_3() -> Self {
        Self::new(T::THREE)
    }

    // ------------------------------------------------------------------------
    // Flag queries (never enforced)
    // ------------------------------------------------------------------------

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.invalid
    }

    #[must_use]
    pub const fn is_unchecked(&self) -> bool {
        self.unchecked
    }

    #[must_use]
    pub const fn is_checked(&self) -> bool {
        !self.unchecked
    }

    #[must_use]
    pub const fn is_valid_and_checked(&self) -> bool {
        !self.invalid && !self.unchecked
    }

    // ------------------------------------------------------------------------
    // Examination
    // ------------------------------------------------------------------------

    /// The same value with `unchecked` cleared. Validity is untouched.
    pub fn acknowledge(self) -> Self {
        Self {
            value: self.value,
            invalid: self.invalid,
            unchecked: false,
            policy: PhantomData,
        }
    }

    /// Consumes the value, examining it: the payload, or [`Poisoned`].
    pub fn into_result(self) -> Result<T, Poisoned> {
        if self.invalid {
            Err(Poisoned)
        } else {
            Ok(self.value)
        }
    }

    // ------------------------------------------------------------------------
    // Guarded reads
    // ------------------------------------------------------------------------

    #[track_caller]
    fn ensure_checked(&self) {
        if self.unchecked {
            violation::report(ViolationKind::UncheckedUse);
        }
    }

    #[track_caller]
    fn ensure_readable(&self) {
        if self.unchecked {
            violation::report(ViolationKind::UncheckedUse);
        } else if self.invalid {
            violation::report(ViolationKind::InvalidRead);
        }
    }

    /// The raw payload.
    ///
    /// Reports a violation if the value is unchecked or invalid. Under
    /// permissive enforcement the payload is returned anyway. Operators and
    /// conversions zero the payload of every invalid value they produce.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> T {
        self.ensure_readable();
        self.value
    }

    #[must_use]
    #[track_caller]
    pub fn is_zero(&self) -> bool {
        self.ensure_readable();
        self.value == T::ZERO
    }

    #[must_use]
    #[track_caller]
    pub fn is_pos(&self) -> bool {
        self.ensure_readable();
        self.value > T::ZERO
    }

    /// True for zero or for an invalid value. Must be checked first.
    #[must_use]
    #[track_caller]
    pub fn is_zero_or_invalid(&self) -> bool {
        self.ensure_checked();
        self.invalid || self.value == T::ZERO
    }

    /// Like [`Self::is_zero_or_invalid`], and also true for an unchecked
    /// value once permissive enforcement lets the call through.
    #[must_use]
    #[track_caller]
    pub fn is_zero_or_unchecked(&self) -> bool {
        self.ensure_checked();
        self.unchecked || self.invalid || self.value == T::ZERO
    }

    /// Postfix increment: returns the prior value and leaves `self`
    /// incremented and unchecked.
    #[track_caller]
    pub fn increment(&mut self) -> Self {
        self.ensure_readable();
        let prior = *self;
        *self = prior + T::ONE;
        prior
    }

    /// Postfix decrement: returns the prior value and leaves `self`
    /// decremented and unchecked.
    #[track_caller]
    pub fn decrement(&mut self) -> Self {
        self.ensure_readable();
        let prior = *self;
        *self = prior - T::ONE;
        prior
    }

    // ------------------------------------------------------------------------
    // Combinators
    // ------------------------------------------------------------------------

    /// The larger of the two payloads. Unchecked; invalid if either side is.
    pub fn max(self, other: Self) -> Self {
        if self.invalid || other.invalid {
            return Self::failure();
        }
        Self::pending(if self.value >= other.value {
            self.value
        } else {
            other.value
        })
    }

    /// The smaller of the two payloads. Unchecked; invalid if either side is.
    pub fn min(self, other: Self) -> Self {
        if self.invalid || other.invalid {
            return Self::failure();
        }
        Self::pending(if self.value <= other.value {
            self.value
        } else {
            other.value
        })
    }
}

impl<T, P> CheckedIntegral<T, P>
where
    T: SignedInteger,
    P: OverflowPolicy<T>,
{
    pub const fn magic_neg_1() -> Self {
        Self::new(T::NEG_ONE)
    }

    pub const fn magic_neg_2() -> Self {
        Self::new(T::NEG_TWO)
    }

    pub const fn magic_neg_3() -> Self {
        Self::new(T::NEG_THREE)
    }

    #[must_use]
    #[track_caller]
    pub fn is_neg(&self) -> bool {
        self.ensure_readable();
        self.value < T::ZERO
    }
}

impl<T, P> From<T> for CheckedIntegral<T, P>
where
    T: Integer,
    P: OverflowPolicy<T>,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// Serde
// ============================================================================

/// Serializes as an optional payload: `null` when invalid. Serializing is an
/// examination, so unchecked values are accepted.
impl<T, P> Serialize for CheckedIntegral<T, P>
where
    T: Integer + Serialize,
    P: OverflowPolicy<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.invalid {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(&self.value)
        }
    }
}

/// `null` deserializes to [`CheckedIntegral::failure`]; a number to a checked,
/// valid value.
impl<'de, T, P> Deserialize<'de> for CheckedIntegral<T, P>
where
    T: Integer + Deserialize<'de>,
    P: OverflowPolicy<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or_else(Self::failure, Self::new))
    }
}
