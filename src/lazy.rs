use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
///
/// The factory runs on every `parse`, so it should be cheap; recursive grammars usually
/// return a [`BoxedParser`](crate::parser::BoxedParser) from it to give the recursive
/// type a name.
pub struct Lazy<F> {
    factory: F,
}

impl<F, P> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        let parser = (self.factory)();
        parser.parse(input)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
