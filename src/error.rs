use std::borrow::Cow;
use thiserror::Error;

/// Error reported by the primitive matchers in [`text`](crate::text) and
/// [`token`](crate::token)
///
/// Combinators never build errors of their own. They forward whatever their children
/// report, so grammars are free to use any error type; this one only exists for the
/// matchers shipped with the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError<T> {
    /// Input ran out before anything could be matched
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: Cow<'static, str> },
    /// The next element did not match
    #[error("expected {expected}, found {found:?}")]
    Unexpected {
        expected: Cow<'static, str>,
        found: T,
    },
    /// Matched, but the value was rejected after parsing
    #[error("invalid value: {message}")]
    Invalid { message: Cow<'static, str> },
}

impl<T> MatchError<T> {
    pub fn unexpected_end(expected: impl Into<Cow<'static, str>>) -> Self {
        MatchError::UnexpectedEnd {
            expected: expected.into(),
        }
    }

    pub fn unexpected(expected: impl Into<Cow<'static, str>>, found: T) -> Self {
        MatchError::Unexpected {
            expected: expected.into(),
            found,
        }
    }

    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        MatchError::Invalid {
            message: message.into(),
        }
    }
}

/// Error type of the `&str` matchers
pub type TextError = MatchError<char>;

/// Error type of the `&[T]` matchers
pub type TokenError<T> = MatchError<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_end_display() {
        let error = TextError::unexpected_end("digit");
        assert_eq!(error.to_string(), "unexpected end of input, expected digit");
    }

    #[test]
    fn test_unexpected_display() {
        let error = TextError::unexpected("digit", 'x');
        assert_eq!(error.to_string(), "expected digit, found 'x'");
    }

    #[test]
    fn test_token_error_display() {
        let error: TokenError<u8> = MatchError::unexpected("byte 0x41", 0x42);
        assert_eq!(error.to_string(), "expected byte 0x41, found 66");
    }

    #[test]
    fn test_invalid_display() {
        let error = TextError::invalid(format!("{} does not fit in u8", 300));
        assert_eq!(error.to_string(), "invalid value: 300 does not fit in u8");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&TextError::unexpected_end("anything"));
    }
}
