//! A poison-carrying `usize` for indexing.
//!
//! [`CheckedIndex`] has no `unchecked` flag: building one from a checked
//! integral is already a use of that value, so the guard runs once, at
//! construction. Offsets poison the index on overflow or underflow, and
//! reading a poisoned index back reports an invalid read.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::bounds::Integer;
use crate::fmt::INVALID_MARKER;
use crate::integral::CheckedIntegral;
use crate::policy::OverflowPolicy;
use crate::violation::{self, ViolationKind};

/// An index into a slice that remembers whether it went out of range.
#[must_use]
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedIndex {
    value: usize,
    invalid: bool,
}

impl CheckedIndex {
    pub const fn new(value: usize) -> Self {
        Self {
            value,
            invalid: false,
        }
    }

    /// Builds an index from a checked integral of any width.
    ///
    /// Reports an unchecked source, otherwise an invalid source or one that
    /// does not fit `usize`. Under permissive enforcement the result is a
    /// poisoned index.
    #[track_caller]
    pub fn from_checked<T, P>(source: CheckedIntegral<T, P>) -> Self
    where
        T: Integer,
        P: OverflowPolicy<T>,
        usize: TryFrom<T>,
    {
        let value = if source.is_invalid() {
            None
        } else {
            usize::try_from(source.payload()).ok()
        };

        if source.is_unchecked() {
            violation::report(ViolationKind::UncheckedUse);
        } else if value.is_none() {
            violation::report(ViolationKind::InvalidRead);
        }

        match value {
            Some(value) => Self::new(value),
            None => Self::poisoned(),
        }
    }

    const fn poisoned() -> Self {
        Self {
            value: 0,
            invalid: true,
        }
    }

    pub const fn min_value() -> Self {
        Self::new(usize::MIN)
    }

    pub const fn max_value() -> Self {
        Self::new(usize::MAX)
    }

    pub const fn magic_0() -> Self {
        Self::new(0)
    }

    pub const fn magic_1() -> Self {
        Self::new(1)
    }

    pub const fn magic_2() -> Self {
        Self::new(2)
    }

    pub const fn magic_3() -> Self {
        Self::new(3)
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.invalid
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.invalid
    }

    #[track_caller]
    fn ensure_valid(&self) {
        if self.invalid {
            violation::report(ViolationKind::InvalidRead);
        }
    }

    /// The index. Reports a violation if it is poisoned.
    #[must_use]
    #[track_caller]
    pub fn get(&self) -> usize {
        self.ensure_valid();
        self.value
    }

    #[must_use]
    #[track_caller]
    pub fn is_zero(&self) -> bool {
        self.get() == 0
    }

    #[must_use]
    #[track_caller]
    pub fn is_pos(&self) -> bool {
        self.get() > 0
    }

    /// `items[index]`, or `None` when the index is past the end.
    ///
    /// A poisoned index is reported, and yields `None` if enforcement lets
    /// the call through.
    #[must_use]
    #[track_caller]
    pub fn lookup<'a, E>(&self, items: &'a [E]) -> Option<&'a E> {
        self.ensure_valid();
        if self.invalid {
            None
        } else {
            items.get(self.value)
        }
    }

    fn offset(self, rhs: Self, op: fn(usize, usize) -> Option<usize>) -> Self {
        if self.invalid || rhs.invalid {
            return Self::poisoned();
        }
        op(self.value, rhs.value).map_or_else(Self::poisoned, Self::new)
    }
}

impl From<usize> for CheckedIndex {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// Offsets
// ============================================================================

macro_rules! impl_offset {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident, $checked:path) => {
        impl $Trait for CheckedIndex {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.offset(rhs, $checked)
            }
        }

        impl $Trait<usize> for CheckedIndex {
            type Output = Self;

            fn $method(self, rhs: usize) -> Self {
                self.offset(Self::new(rhs), $checked)
            }
        }

        impl $AssignTrait for CheckedIndex {
            fn $assign(&mut self, rhs: Self) {
                *self = self.offset(rhs, $checked);
            }
        }

        impl $AssignTrait<usize> for CheckedIndex {
            fn $assign(&mut self, rhs: usize) {
                *self = self.offset(Self::new(rhs), $checked);
            }
        }
    };
}

impl_offset!(Add, add, AddAssign, add_assign, usize::checked_add);
impl_offset!(Sub, sub, SubAssign, sub_assign, usize::checked_sub);

// ============================================================================
// Comparisons
// ============================================================================

impl PartialEq for CheckedIndex {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl PartialEq<usize> for CheckedIndex {
    #[track_caller]
    fn eq(&self, other: &usize) -> bool {
        self.get() == *other
    }
}

impl PartialOrd for CheckedIndex {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.get().cmp(&other.get()))
    }
}

impl PartialOrd<usize> for CheckedIndex {
    #[track_caller]
    fn partial_cmp(&self, other: &usize) -> Option<Ordering> {
        Some(self.get().cmp(other))
    }
}

impl fmt::Display for CheckedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.invalid {
            f.pad(INVALID_MARKER)
        } else {
            fmt::Display::fmt(&self.value, f)
        }
    }
}
