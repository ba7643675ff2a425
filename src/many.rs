use super::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// The parser is applied again and again, each time to the remainder of the previous
/// success, until it fails. `Many` then succeeds with every output collected so far (an
/// empty `Vec` if the very first attempt failed) and the input as it was before the
/// failed attempt. The failure itself is swallowed; `Many` never fails.
///
/// Repetition is a plain loop, so the number of matches is limited by memory, not by
/// stack depth.
///
/// The parser must consume input on every success. One that can succeed without
/// consuming anything, such as an [`optional`](crate::optional::optional) parser, will
/// make `Many` loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Input = P::Input;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, mut input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        let mut results = Vec::new();

        while let Ok((value, rest)) = self.parser.parse(input.clone()) {
            results.push(value);
            input = rest;
        }

        #[cfg(feature = "trace")]
        tracing::trace!(target: "parsalg::many", items = results.len(), "repetition stopped");

        Ok((results, input))
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt: Parser + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<P> ManyExt for P where P: Parser {}
