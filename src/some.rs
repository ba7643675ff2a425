use super::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Like [`Many`](crate::many::Many), except that the first application must succeed;
/// its error is returned otherwise.
///
/// The name collides with `Option::Some`, so this type is reachable only as
/// `parsalg::some::Some` and is left out of the crate root and [`prelude`](crate::prelude).
/// Prefer [`some()`] or [`SomeExt::some`] and avoid glob-importing this module.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<P> Parser for Some<P>
where
    P: Parser,
{
    type Input = P::Input;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        // First parse must succeed
        let (first_value, mut input) = self.parser.parse(input)?;
        let mut results = vec![first_value];

        while let Ok((value, rest)) = self.parser.parse(input.clone()) {
            results.push(value);
            input = rest;
        }

        Ok((results, input))
    }
}

/// Convenience function to create a Some parser
pub fn some<P>(parser: P) -> Some<P>
where
    P: Parser,
{
    Some::new(parser)
}

/// Extension trait to add .some() method support for parsers
pub trait SomeExt: Parser + Sized {
    fn some(self) -> Some<Self> {
        Some::new(self)
    }
}

/// Implement SomeExt for all parsers
impl<P> SomeExt for P where P: Parser {}
