use super::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The second parser runs on the remainder of the first. If the first parser fails
/// the second never runs and the first error is returned; if the second fails its
/// error is returned.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics. The nesting only changes the shape of the
/// output: `a.and(b).and(c)` and `a.and(b.and(c))` consume the same input and fail on
/// the same inputs.
///
/// Example:
/// ```
/// use parsalg::and::AndExt;
/// use parsalg::parser::Parser;
/// use parsalg::text::{is_char, unsigned};
///
/// let ((int_part, _), frac_part) = unsigned()
///     .and(is_char('.'))
///     .and(unsigned())
///     .parse("123.456")
///     .unwrap()
///     .0;
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Error = P1::Error>,
{
    type Input = P1::Input;
    type Output = (P1::Output, P2::Output);
    type Error = P1::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        let (result1, rest) = self.parser1.parse(input)?;
        let (result2, rest) = self.parser2.parse(rest)?;
        Ok(((result1, result2), rest))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Error = P1::Error>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<Input = Self::Input, Error = Self::Error>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}
