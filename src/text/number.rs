use super::digit::digit;
use crate::error::TextError;
use crate::flat_map::FlatMapExt;
use crate::parser::Parser;
use crate::some::SomeExt;

/// Parser for a non-empty run of ASCII digits, read as a decimal `u64`
///
/// Values that do not fit in a `u64` are rejected after the digits have matched.
pub fn unsigned<'a>() -> impl Parser<Input = &'a str, Output = u64, Error = TextError> {
    digit().some().flat_map(|digits| {
        digits
            .into_iter()
            .try_fold(0u64, |acc, d| acc.checked_mul(10)?.checked_add(u64::from(d)))
            .ok_or_else(|| TextError::invalid("integer does not fit in u64"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_basic() {
        assert_eq!(unsigned().parse("123"), Ok((123, "")));
        assert_eq!(unsigned().parse("0"), Ok((0, "")));
    }

    #[test]
    fn test_unsigned_leading_zeros() {
        assert_eq!(unsigned().parse("007abc"), Ok((7, "abc")));
    }

    #[test]
    fn test_unsigned_max() {
        assert_eq!(
            unsigned().parse("18446744073709551615"),
            Ok((u64::MAX, ""))
        );
    }

    #[test]
    fn test_unsigned_overflow() {
        assert_eq!(
            unsigned().parse("18446744073709551616"),
            Err(TextError::invalid("integer does not fit in u64"))
        );
    }

    #[test]
    fn test_unsigned_requires_a_digit() {
        assert_eq!(
            unsigned().parse("-1"),
            Err(TextError::unexpected("ASCII digit", '-'))
        );
        assert!(unsigned().parse("").is_err());
    }
}
