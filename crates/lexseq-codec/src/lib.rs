//! Arbitrary-base digit codec for rendering integers as sortable text.
//!
//! [`Alphabet`] maps a nonnegative integer to a string of digit
//! symbols and back. Construction enforces that symbol code points are
//! strictly increasing, so comparing rendered strings compares digit
//! values; ordering guarantees established on the integers (for
//! example by the `lexseq` engine) then transfer to the strings
//! unchanged. The codec itself knows nothing about any sequence: it is
//! a plain positional-notation encoder.

use thiserror::Error as ThisError;

/// The reference base-52 alphabet, `A-Z` then `a-z` in ASCII order.
pub const BASE52: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

///
/// CodecError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum CodecError {
    #[error("alphabet has {len} symbols (at least 2 required)")]
    TooShort { len: usize },

    #[error("alphabet symbols must be strictly increasing: '{symbol}' is out of order")]
    UnorderedSymbol { symbol: char },

    #[error("empty input")]
    Empty,

    #[error("symbol '{symbol}' is not in the alphabet")]
    UnknownSymbol { symbol: char },

    #[error("decoded value overflows u64")]
    Overflow,
}

///
/// Alphabet
///
/// An ordered digit symbol table defining one positional base. Symbol
/// order is digit order; the strictly-increasing code point check at
/// construction is what makes string comparison agree with numeric
/// comparison of the encoded values' digits.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Validate and build an alphabet from its symbols in digit order.
    pub fn try_new(symbols: &str) -> Result<Self, CodecError> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.len() < 2 {
            return Err(CodecError::TooShort { len: symbols.len() });
        }
        for pair in symbols.windows(2) {
            if pair[1] <= pair[0] {
                return Err(CodecError::UnorderedSymbol { symbol: pair[1] });
            }
        }

        Ok(Self { symbols })
    }

    /// Number of symbols, i.e. the base of this codec.
    #[must_use]
    pub fn base(&self) -> u64 {
        self.symbols.len() as u64
    }

    /// Render `value` in this base, most significant digit first.
    /// `0` encodes as the single first symbol.
    #[must_use]
    pub fn encode(&self, value: u64) -> String {
        let base = self.base();
        let mut digits = Vec::new();
        let mut rest = value;

        loop {
            digits.push(self.symbols[(rest % base) as usize]);
            rest /= base;
            if rest == 0 {
                break;
            }
        }

        digits.iter().rev().collect()
    }

    /// Parse a rendering produced by [`Self::encode`] back to its value.
    pub fn decode(&self, encoded: &str) -> Result<u64, CodecError> {
        if encoded.is_empty() {
            return Err(CodecError::Empty);
        }

        let base = self.base();
        let mut value: u64 = 0;
        for symbol in encoded.chars() {
            let digit = self
                .symbols
                .binary_search(&symbol)
                .map_err(|_| CodecError::UnknownSymbol { symbol })?;

            value = value
                .checked_mul(base)
                .and_then(|v| v.checked_add(digit as u64))
                .ok_or(CodecError::Overflow)?;
        }

        Ok(value)
    }
}

///
/// TESTS
///
