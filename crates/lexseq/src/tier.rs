use crate::base::Base;

//
// Digit-length tier arithmetic.
//
// Tier `d` (d >= 1) is the set of sequence members whose base
// representation has exactly `d` digits. It holds `(base/2)^d` members
// occupying the numeric range `[first_of_length(d), last_of_length(d)]`:
//
//   first_of_length(d) = base^d - base * (base/2)^(d-1)
//   last_of_length(d)  = base^d - (base/2)^d - 1
//
// The gap between `last_of_length(d)` and `base^d - 1` is the unused
// tail of tier `d`; tier `d + 1` starts above it, which is what makes
// every shorter member lexicographically smaller than (and never a
// prefix of) every longer one.
//
// All bounds are computed in u128 with checked arithmetic. A `None`
// from any of the helpers means the bound exceeds u128, which in turn
// means it exceeds every representable u64 value or index.

/// Number of base digits of `value`, by exact repeated division.
/// `0` has length 1. Deliberately avoids floating-point logarithms,
/// which round the wrong way at exact powers of the base.
pub(crate) const fn digit_length(base: Base, value: u64) -> u32 {
    let mut len = 1;
    let mut rest = value / base.get();

    while rest > 0 {
        len += 1;
        rest /= base.get();
    }

    len
}

/// Member count of tier `d`: `(base/2)^d`.
pub(crate) fn size_of_length(base: Base, d: u32) -> Option<u128> {
    u128::from(base.half()).checked_pow(d)
}

/// Smallest member of tier `d`.
pub(crate) fn first_of_length(base: Base, d: u32) -> Option<u128> {
    let b = u128::from(base.get());
    let margin = b.checked_mul(u128::from(base.half()).checked_pow(d - 1)?)?;

    Some(b.checked_pow(d)? - margin)
}

/// Largest member of tier `d`.
pub(crate) fn last_of_length(base: Base, d: u32) -> Option<u128> {
    let b = u128::from(base.get());
    let occupied = u128::from(base.half()).checked_pow(d)?;

    Some(b.checked_pow(d)? - occupied - 1)
}

///
/// TESTS
///
