use super::and::And;
use super::parser::Parser;

/// Parser combinator that runs two parsers in sequence and keeps the first result
///
/// `before(p1, p2)` yields the output of `p1`, the part that comes before `p2`.
/// Failure behaves exactly like `and`.
pub struct Before<P1, P2> {
    inner: And<P1, P2>,
}

impl<P1, P2> Before<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Before {
            inner: And::new(parser1, parser2),
        }
    }
}

impl<P1, P2> Parser for Before<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Error = P1::Error>,
{
    type Input = P1::Input;
    type Output = P1::Output;
    type Error = P1::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        let ((first, _), rest) = self.inner.parse(input)?;
        Ok((first, rest))
    }
}

/// Convenience function to create a Before parser
pub fn before<P1, P2>(parser1: P1, parser2: P2) -> Before<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Error = P1::Error>,
{
    Before::new(parser1, parser2)
}

/// Extension trait to add .before() method support for parsers
pub trait BeforeExt: Parser + Sized {
    /// Run `self` then `other`, keeping `self`'s output
    fn before<P>(self, other: P) -> Before<Self, P>
    where
        P: Parser<Input = Self::Input, Error = Self::Error>,
    {
        Before::new(self, other)
    }
}

/// Implement BeforeExt for all parsers
impl<P> BeforeExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::after::AfterExt;
    use crate::text::{TextError, is_char, unsigned};

    #[test]
    fn test_before_keeps_first() {
        let parser = unsigned().before(is_char(';'));

        let (n, rest) = parser.parse("42;43").unwrap();
        assert_eq!(n, 42);
        assert_eq!(rest, "43");
    }

    #[test]
    fn test_before_second_fails() {
        let parser = before(unsigned(), is_char(';'));

        assert_eq!(parser.parse("42,"), Err(TextError::unexpected("';'", ',')));
    }

    #[test]
    fn test_before_first_fails() {
        let parser = before(unsigned(), is_char(';'));

        assert!(parser.parse(";").is_err());
    }

    #[test]
    fn test_delimited() {
        let parser = is_char('(').after(unsigned()).before(is_char(')'));

        let (n, rest) = parser.parse("(7) tail").unwrap();
        assert_eq!(n, 7);
        assert_eq!(rest, " tail");
    }
}
