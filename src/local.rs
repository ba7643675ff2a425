use super::parser::Parser;

/// Parser combinator that runs a parser over a different input representation
///
/// `into` converts the outer input to the input the wrapped parser understands, and
/// `back` converts the wrapped parser's remainder to the outer representation again.
/// Errors are returned as-is. The two functions are expected to agree with each other
/// on every remainder the wrapped parser can produce; this is not checked.
pub struct Local<P, F, G> {
    parser: P,
    into: F,
    back: G,
}

impl<P, F, G> Local<P, F, G> {
    pub fn new(parser: P, into: F, back: G) -> Self {
        Local { parser, into, back }
    }
}

impl<P, F, G, I> Parser for Local<P, F, G>
where
    P: Parser,
    F: Fn(I) -> P::Input,
    G: Fn(P::Input) -> I,
    I: Clone,
{
    type Input = I;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        let (value, rest) = self.parser.parse((self.into)(input))?;
        Ok((value, (self.back)(rest)))
    }
}

/// Convenience function to create a Local parser
pub fn local<P, F, G, I>(parser: P, into: F, back: G) -> Local<P, F, G>
where
    P: Parser,
    F: Fn(I) -> P::Input,
    G: Fn(P::Input) -> I,
    I: Clone,
{
    Local::new(parser, into, back)
}

/// Extension trait to add .local() method support for parsers
pub trait LocalExt: Parser + Sized {
    fn local<F, G, I>(self, into: F, back: G) -> Local<Self, F, G>
    where
        F: Fn(I) -> Self::Input,
        G: Fn(Self::Input) -> I,
        I: Clone,
    {
        Local::new(self, into, back)
    }
}

/// Implement LocalExt for all parsers
impl<P> LocalExt for P where P: Parser {}
