use super::default::DefaultParser;
use super::flat_or::FlatOr;
use super::map::Map;
use super::parser::Parser;

type Present<P> = Map<P, fn(<P as Parser>::Output) -> Option<<P as Parser>::Output>>;

type Absent<P> =
    DefaultParser<<P as Parser>::Input, Option<<P as Parser>::Output>, <P as Parser>::Error>;

/// Parser combinator that makes a parser optional
///
/// Built as `parser.map(Some)` with a fallback to a parser that consumes nothing and
/// yields `None`. It never fails: when the wrapped parser fails, the output is `None`
/// and the input is returned untouched.
pub struct Optional<P>
where
    P: Parser,
{
    inner: FlatOr<Present<P>, Absent<P>>,
}

impl<P> Optional<P>
where
    P: Parser,
{
    pub fn new(parser: P) -> Self {
        let present: fn(P::Output) -> Option<P::Output> = Some;
        Optional {
            inner: FlatOr::new(Map::new(parser, present), DefaultParser::new()),
        }
    }
}

impl<P> Parser for Optional<P>
where
    P: Parser,
{
    type Input = P::Input;
    type Output = Option<P::Output>;
    type Error = P::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        self.inner.parse(input)
    }
}

/// Convenience function to create an Optional parser
pub fn optional<P>(parser: P) -> Optional<P>
where
    P: Parser,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt: Parser + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<P> OptionalExt for P where P: Parser {}
