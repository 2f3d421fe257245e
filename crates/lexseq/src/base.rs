use crate::error::SequenceError;
use derive_more::{Deref, Display};

///
/// Base
///
/// Validated positional base shared by every sequence operation:
/// even and at least 4. Odd bases cannot be split into an occupied
/// half and a safety-margin half per digit-length tier, and bases
/// below 4 leave tier 1 empty, so both are rejected at construction.
///

#[derive(Clone, Copy, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Base(u64);

impl Base {
    pub const MIN: u64 = 4;

    /// Validate and wrap a base. The only constructor.
    pub const fn try_new(base: u64) -> Result<Self, SequenceError> {
        if base < Self::MIN || base % 2 != 0 {
            return Err(SequenceError::InvalidBase { base });
        }

        Ok(Self(base))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Number of occupied digit values per tier step, `base / 2`.
    #[must_use]
    pub const fn half(self) -> u64 {
        self.0 / 2
    }
}

impl TryFrom<u64> for Base {
    type Error = SequenceError;

    fn try_from(base: u64) -> Result<Self, Self::Error> {
        Self::try_new(base)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_even_bases_from_four_up() {
        for base in [4, 6, 10, 52, 64, 256] {
            assert!(Base::try_new(base).is_ok(), "base {base} should be valid");
        }
    }

    #[test]
    fn rejects_small_and_odd_bases() {
        for base in [0, 1, 2, 3, 5, 25, 51] {
            assert_eq!(
                Base::try_new(base),
                Err(SequenceError::InvalidBase { base }),
                "base {base} should be rejected"
            );
        }
    }

    #[test]
    fn half_is_exact() {
        let base = Base::try_new(10).unwrap();
        assert_eq!(base.half(), 5);
        assert_eq!(base.get(), 10);
    }
}
