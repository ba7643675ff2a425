use super::and::And;
use super::parser::Parser;

/// Parser combinator that runs two parsers in sequence and keeps the second result
///
/// `after(p1, p2)` yields the output of `p2`, i.e. what comes after `p1`. It is `and`
/// with the first output dropped, so it fails exactly when `and` would, with the same
/// error.
pub struct After<P1, P2> {
    inner: And<P1, P2>,
}

impl<P1, P2> After<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        After {
            inner: And::new(parser1, parser2),
        }
    }
}

impl<P1, P2> Parser for After<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Error = P1::Error>,
{
    type Input = P1::Input;
    type Output = P2::Output;
    type Error = P1::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        let ((_, second), rest) = self.inner.parse(input)?;
        Ok((second, rest))
    }
}

/// Convenience function to create an After parser
pub fn after<P1, P2>(parser1: P1, parser2: P2) -> After<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Error = P1::Error>,
{
    After::new(parser1, parser2)
}

/// Extension trait to add .after() method support for parsers
pub trait AfterExt: Parser + Sized {
    /// Run `self` then `other`, keeping `other`'s output
    fn after<P>(self, other: P) -> After<Self, P>
    where
        P: Parser<Input = Self::Input, Error = Self::Error>,
    {
        After::new(self, other)
    }
}

/// Implement AfterExt for all parsers
impl<P> AfterExt for P where P: Parser {}
