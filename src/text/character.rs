use crate::error::TextError;
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes and returns a single character
pub struct AnyChar<'a> {
    _phantom: PhantomData<fn(&'a str)>,
}

impl<'a> AnyChar<'a> {
    pub fn new() -> Self {
        AnyChar {
            _phantom: PhantomData,
        }
    }
}

impl<'a> Default for AnyChar<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Parser for AnyChar<'a> {
    type Input = &'a str;
    type Output = char;
    type Error = TextError;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) => Ok((c, chars.as_str())),
            None => Err(TextError::unexpected_end("any character")),
        }
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char<'a>() -> AnyChar<'a> {
    AnyChar::new()
}

/// Parser that matches a specific character
pub struct IsChar<'a> {
    expected: char,
    _phantom: PhantomData<fn(&'a str)>,
}

impl<'a> IsChar<'a> {
    pub fn new(expected: char) -> Self {
        IsChar {
            expected,
            _phantom: PhantomData,
        }
    }

    fn describe(&self) -> String {
        format!("{:?}", self.expected)
    }
}

impl<'a> Parser for IsChar<'a> {
    type Input = &'a str;
    type Output = char;
    type Error = TextError;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        match input.chars().next() {
            Some(c) if c == self.expected => Ok((c, &input[c.len_utf8()..])),
            Some(c) => Err(TextError::unexpected(self.describe(), c)),
            None => Err(TextError::unexpected_end(self.describe())),
        }
    }
}

/// Convenience function to create an IsChar parser
pub fn is_char<'a>(expected: char) -> IsChar<'a> {
    IsChar::new(expected)
}

/// Parser that matches one character accepted by a predicate
///
/// `expected` names what the predicate accepts and is used in error messages.
pub struct CharIf<'a, F> {
    predicate: F,
    expected: Cow<'static, str>,
    _phantom: PhantomData<fn(&'a str)>,
}

impl<'a, F> CharIf<'a, F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F, expected: Cow<'static, str>) -> Self {
        CharIf {
            predicate,
            expected,
            _phantom: PhantomData,
        }
    }
}

impl<'a, F> Parser for CharIf<'a, F>
where
    F: Fn(char) -> bool,
{
    type Input = &'a str;
    type Output = char;
    type Error = TextError;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        match input.chars().next() {
            Some(c) if (self.predicate)(c) => Ok((c, &input[c.len_utf8()..])),
            Some(c) => Err(TextError::unexpected(self.expected.clone(), c)),
            None => Err(TextError::unexpected_end(self.expected.clone())),
        }
    }
}

/// Convenience function to create a CharIf parser
pub fn char_if<'a, F>(predicate: F, expected: impl Into<Cow<'static, str>>) -> CharIf<'a, F>
where
    F: Fn(char) -> bool,
{
    CharIf::new(predicate, expected.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_char_ascii() {
        assert_eq!(any_char().parse("abc"), Ok(('a', "bc")));
    }

    #[test]
    fn test_any_char_multibyte() {
        assert_eq!(any_char().parse("ñandú"), Ok(('ñ', "andú")));
        assert_eq!(any_char().parse("中文"), Ok(('中', "文")));
        assert_eq!(any_char().parse("🚀!"), Ok(('🚀', "!")));
    }

    #[test]
    fn test_any_char_empty_input() {
        assert_eq!(
            any_char().parse(""),
            Err(TextError::unexpected_end("any character"))
        );
    }

    #[test]
    fn test_is_char_match() {
        assert_eq!(is_char('ü').parse("über"), Ok(('ü', "ber")));
    }

    #[test]
    fn test_is_char_mismatch() {
        let result = is_char('a').parse("bcd");
        assert_eq!(result, Err(TextError::unexpected("'a'", 'b')));
        assert_eq!(result.unwrap_err().to_string(), "expected 'a', found 'b'");
    }

    #[test]
    fn test_is_char_empty_input() {
        assert_eq!(
            is_char('a').parse(""),
            Err(TextError::unexpected_end("'a'"))
        );
    }

    #[test]
    fn test_char_if_unicode_letter() {
        let test_cases = [
            ("a", true),
            ("Z", true),
            ("ñ", true),
            ("中", true),
            ("1", false),
            ("!", false),
            (" ", false),
        ];

        let parser = char_if(char::is_alphabetic, "letter");
        for (input, should_succeed) in test_cases {
            let result = parser.parse(input);
            if should_succeed {
                assert_eq!(result, Ok((input.chars().next().unwrap(), "")), "input: {}", input);
            } else {
                assert!(result.is_err(), "Expected failure for: {}", input);
            }
        }
    }

    #[test]
    fn test_char_if_error_message() {
        let parser = char_if(char::is_whitespace, "whitespace");

        let error = parser.parse("x").unwrap_err();
        assert_eq!(error.to_string(), "expected whitespace, found 'x'");
    }
}
