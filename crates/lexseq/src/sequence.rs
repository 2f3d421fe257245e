use crate::{
    base::Base,
    error::SequenceError,
    tier::{digit_length, first_of_length, last_of_length, size_of_length},
};

///
/// Sequencer
///
/// Immutable handle over a validated [`Base`], exposing the four
/// sequence operations as pure methods. Enumeration order is
/// simultaneously numeric order and lexicographic order of the
/// base-rendered digits, and no member's rendering is a prefix of
/// another's.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Sequencer {
    base: Base,
}

impl Sequencer {
    /// Construct a sequencer, rejecting odd bases and bases below 4.
    pub const fn new(base: u64) -> Result<Self, SequenceError> {
        match Base::try_new(base) {
            Ok(base) => Ok(Self { base }),
            Err(err) => Err(err),
        }
    }

    #[must_use]
    pub const fn base(&self) -> Base {
        self.base
    }

    /// Member at position `index` in enumeration order.
    ///
    /// Walks digit-length tiers, subtracting each tier's member count
    /// until the remainder lands inside one; O(log index) steps.
    /// Fails with [`SequenceError::IndexOverflow`] when the member at
    /// `index` does not fit in 64 bits.
    pub fn sequence(&self, index: u64) -> Result<u64, SequenceError> {
        let overflow = SequenceError::IndexOverflow { index };
        let mut remaining = u128::from(index);
        let mut d = 1;

        loop {
            let size = size_of_length(self.base, d).ok_or(overflow)?;
            if remaining < size {
                let first = first_of_length(self.base, d).ok_or(overflow)?;

                return u64::try_from(first + remaining).map_err(|_| overflow);
            }

            remaining -= size;
            d += 1;
        }
    }

    /// Member following `value` in enumeration order.
    ///
    /// The last member of a tier is followed by `(value + 1) * base`,
    /// the first member of the next tier; every other member is
    /// followed by `value + 1`. Returns `None` only when the next
    /// member overflows u64. Precondition: `value` is itself a member;
    /// non-members are not diagnosed here (use [`Self::sequence_inv_safe`]
    /// for membership tests).
    #[must_use]
    pub fn successor(&self, value: u64) -> Option<u64> {
        let d = digit_length(self.base, value);
        let at_tier_end =
            last_of_length(self.base, d).is_some_and(|last| u128::from(value) == last);

        if at_tier_end {
            value.checked_add(1)?.checked_mul(self.base.get())
        } else {
            value.checked_add(1)
        }
    }

    /// Enumeration position of `value`, or `None` if `value` is not a
    /// member for this base. The non-failing membership test.
    #[must_use]
    pub fn sequence_inv_safe(&self, value: u64) -> Option<u64> {
        let d = digit_length(self.base, value);

        // a tier bound past u128 is past every u64 value, so `value`
        // sits in the unused tail below it
        let first = first_of_length(self.base, d)?;
        let size = size_of_length(self.base, d)?;

        let candidate = u128::from(value).checked_sub(first)?;
        if candidate >= size {
            return None;
        }

        // index = candidate + total size of all shorter tiers
        let half = u128::from(self.base.half());
        let mut index = candidate;
        let mut tier_size = half;
        let mut k = 1;
        while k < d {
            index += tier_size;
            tier_size *= half;
            k += 1;
        }

        u64::try_from(index).ok()
    }

    /// Enumeration position of `value`; fails with
    /// [`SequenceError::NotAMember`] instead of returning `None`.
    pub fn sequence_inv(&self, value: u64) -> Result<u64, SequenceError> {
        self.sequence_inv_safe(value)
            .ok_or(SequenceError::NotAMember {
                value,
                base: self.base.get(),
            })
    }

    /// Iterate members in enumeration order, starting at `sequence(0)`.
    /// Amortized O(1) per step, versus `sequence`'s O(log n) random
    /// access; ends when the next member no longer fits in u64.
    #[must_use]
    pub const fn members(&self) -> Members {
        Members {
            sequencer: *self,
            next: Some(0),
        }
    }
}

///
/// Members
///
/// Forward iterator over sequence members, driven by `successor`.
///

#[derive(Clone, Debug)]
pub struct Members {
    sequencer: Sequencer,
    next: Option<u64>,
}

impl Iterator for Members {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.sequencer.successor(current);

        Some(current)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(base: u64) -> Sequencer {
        Sequencer::new(base).unwrap()
    }

    #[test]
    fn rejects_invalid_bases() {
        for base in [0, 1, 2, 3, 25] {
            assert_eq!(
                Sequencer::new(base),
                Err(SequenceError::InvalidBase { base })
            );
        }
    }

    #[test]
    fn base_ten_reference_values() {
        let s = seq(10);

        assert_eq!(s.sequence(0), Ok(0));
        assert_eq!(s.sequence(4), Ok(4));
        assert_eq!(s.sequence(5), Ok(50));
        assert_eq!(s.sequence(29), Ok(74));
        assert_eq!(s.sequence(30), Ok(750));
        assert_eq!(s.sequence(99), Ok(819));
    }

    #[test]
    fn base_ten_reference_inverses() {
        let s = seq(10);

        assert_eq!(s.sequence_inv(819), Ok(99));
        assert_eq!(s.sequence_inv_safe(819), Some(99));
        assert_eq!(s.sequence_inv_safe(5), None);
        assert_eq!(
            s.sequence_inv(5),
            Err(SequenceError::NotAMember { value: 5, base: 10 })
        );
    }

    #[test]
    fn base_ten_reference_successors() {
        let s = seq(10);

        assert_eq!(s.successor(0), Some(1));
        assert_eq!(s.successor(4), Some(50));
        assert_eq!(s.successor(74), Some(750));
        assert_eq!(s.successor(50), Some(51));
    }

    #[test]
    fn tier_one_tail_is_not_a_member() {
        for base in [4u64, 6, 10, 52] {
            let s = seq(base);
            let half = base / 2;

            assert_eq!(s.sequence_inv_safe(half), None, "base {base}");
            assert_eq!(s.sequence_inv_safe(half + 1), None, "base {base}");
        }
    }

    #[test]
    fn successor_matches_sequence_for_ten_thousand_steps() {
        for base in [4u64, 10, 52] {
            let s = seq(base);
            let mut current = s.sequence(0).unwrap();
            assert_eq!(current, 0);

            for i in 1..=10_000 {
                current = s.successor(current).unwrap();
                assert_eq!(current, s.sequence(i).unwrap(), "base {base} index {i}");
            }
        }
    }

    #[test]
    fn members_iterator_matches_random_access() {
        let s = seq(6);

        for (i, value) in s.members().take(500).enumerate() {
            assert_eq!(value, s.sequence(i as u64).unwrap());
        }
    }

    #[test]
    fn overflow_indices_are_rejected_not_wrapped() {
        // base 4 exhausts u64-representable members around index 2^33,
        // so the top of the index range must report overflow
        let s = seq(4);

        assert_eq!(
            s.sequence(u64::MAX),
            Err(SequenceError::IndexOverflow { index: u64::MAX })
        );
    }

    #[test]
    fn successor_returns_none_at_the_top_of_u64() {
        let s = seq(4);

        // find the last representable member by walking tier bounds
        let mut last = 0;
        let mut d = 1;
        while let Some(bound) = crate::tier::last_of_length(s.base(), d) {
            if let Ok(v) = u64::try_from(bound) {
                last = last.max(v);
            } else {
                break;
            }
            d += 1;
        }

        assert!(s.sequence_inv_safe(last).is_some());
        assert_eq!(s.successor(last), None);
    }
}
