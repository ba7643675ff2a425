use crate::error::TextError;
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches an exact string and returns the matched slice of the input
pub struct Literal<'a> {
    expected: Cow<'static, str>,
    _phantom: PhantomData<fn(&'a str)>,
}

impl<'a> Literal<'a> {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Literal {
            expected: expected.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'a> Parser for Literal<'a> {
    type Input = &'a str;
    type Output = &'a str;
    type Error = TextError;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        if input.starts_with(self.expected.as_ref()) {
            return Ok(input.split_at(self.expected.len()));
        }

        let description = format!("{:?}", self.expected);
        let mismatch = self
            .expected
            .chars()
            .zip(input.chars())
            .find(|(expected, found)| expected != found);

        match mismatch {
            Some((_, found)) => Err(TextError::unexpected(description, found)),
            // Input is a strict prefix of the literal
            None => Err(TextError::unexpected_end(description)),
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal<'a>(expected: impl Into<Cow<'static, str>>) -> Literal<'a> {
    Literal::new(expected)
}
