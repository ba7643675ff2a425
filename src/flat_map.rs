use super::parser::Parser;

/// Parser combinator that validates or converts the output of a parser with a fallible
/// function
///
/// This is how semantic checks that the grammar alone cannot express are added, e.g.
/// "the matched number must fit in a byte". If the function rejects the value the whole
/// parse fails with the function's error and the remainder is discarded; a rejected
/// value looks the same to the caller as a structural parse failure.
///
/// Example:
/// ```
/// use parsalg::flat_map::FlatMapExt;
/// use parsalg::parser::Parser;
/// use parsalg::text::{TextError, unsigned};
///
/// let byte = unsigned().flat_map(|n| {
///     u8::try_from(n).map_err(|_| TextError::invalid("number does not fit in a byte"))
/// });
///
/// assert_eq!(byte.parse("255,"), Ok((255, ",")));
/// assert!(byte.parse("256,").is_err());
/// ```
pub struct FlatMap<P, F> {
    parser: P,
    function: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, function: F) -> Self {
        FlatMap { parser, function }
    }
}

impl<P, F, U> Parser for FlatMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, P::Error>,
{
    type Input = P::Input;
    type Output = U;
    type Error = P::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        let (value, rest) = self.parser.parse(input)?;
        match (self.function)(value) {
            Ok(value) => Ok((value, rest)),
            Err(error) => {
                #[cfg(feature = "trace")]
                tracing::trace!(target: "parsalg::flat_map", "parsed value rejected");
                Err(error)
            }
        }
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<P, F, U>(parser: P, function: F) -> FlatMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, P::Error>,
{
    FlatMap::new(parser, function)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt: Parser + Sized {
    fn flat_map<F, U>(self, function: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, Self::Error>,
    {
        FlatMap::new(self, function)
    }
}

/// Implement FlatMapExt for all parsers
impl<P> FlatMapExt for P where P: Parser {}
