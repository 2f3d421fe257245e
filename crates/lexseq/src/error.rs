use thiserror::Error as ThisError;

///
/// SequenceError
///
/// Validation failures for the sequence engine. All variants are pure
/// input rejections; there is nothing transient to retry.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum SequenceError {
    #[error("invalid base: {base} (must be an even integer >= 4)")]
    InvalidBase { base: u64 },

    #[error("no member for index {index} fits in 64 bits")]
    IndexOverflow { index: u64 },

    #[error("value {value} is not a sequence member for base {base}")]
    NotAMember { value: u64, base: u64 },
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = SequenceError::InvalidBase { base: 25 };
        assert_eq!(err.to_string(), "invalid base: 25 (must be an even integer >= 4)");

        let err = SequenceError::NotAMember { value: 5, base: 10 };
        assert_eq!(
            err.to_string(),
            "value 5 is not a sequence member for base 10"
        );
    }
}
