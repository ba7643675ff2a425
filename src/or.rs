use super::parser::Parser;
use either::Either;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both alternatives start from the same input: the second parser never sees anything
/// the first one consumed before failing. The first success wins, so the second parser
/// only runs when the first fails.
///
/// The outputs may differ in type and are returned as an [`Either`]: `Right` holds the
/// first parser's output, `Left` the second's. Use [`flat_or`](crate::flat_or::flat_or)
/// when both alternatives produce the same type.
///
/// When both alternatives fail, only the second parser's error is returned.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Error = P1::Error>,
{
    type Input = P1::Input;
    type Output = Either<P2::Output, P1::Output>;
    type Error = P1::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        match self.parser1.parse(input.clone()) {
            Ok((value, rest)) => Ok((Either::Right(value), rest)),
            Err(_) => {
                #[cfg(feature = "trace")]
                tracing::trace!(target: "parsalg::or", "first alternative failed, trying second");
                let (value, rest) = self.parser2.parse(input)?;
                Ok((Either::Left(value), rest))
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Input = Self::Input, Error = Self::Error>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Error = P1::Error>,
{
    Or::new(parser1, parser2)
}
