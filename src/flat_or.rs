use super::or::Or;
use super::parser::Parser;

/// Parser combinator choosing between two alternatives that produce the same type
///
/// Same as [`or`](crate::or::or) with the [`Either`](either::Either) collapsed, so
/// short-circuiting and error reporting are identical: the first success wins, and when
/// both fail the second parser's error is returned.
pub struct FlatOr<P1, P2> {
    inner: Or<P1, P2>,
}

impl<P1, P2> FlatOr<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        FlatOr {
            inner: Or::new(parser1, parser2),
        }
    }
}

impl<P1, P2> Parser for FlatOr<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output, Error = P1::Error>,
{
    type Input = P1::Input;
    type Output = P1::Output;
    type Error = P1::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        let (value, rest) = self.inner.parse(input)?;
        Ok((value.into_inner(), rest))
    }
}

/// Convenience function to create a FlatOr parser
pub fn flat_or<P1, P2>(parser1: P1, parser2: P2) -> FlatOr<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output, Error = P1::Error>,
{
    FlatOr::new(parser1, parser2)
}

/// Extension trait to add .flat_or() method support for parsers
pub trait FlatOrExt: Parser + Sized {
    fn flat_or<P>(self, other: P) -> FlatOr<Self, P>
    where
        P: Parser<Input = Self::Input, Output = Self::Output, Error = Self::Error>,
    {
        FlatOr::new(self, other)
    }
}

/// Implement FlatOrExt for all parsers
impl<P> FlatOrExt for P where P: Parser {}
