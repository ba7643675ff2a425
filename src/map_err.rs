use super::parser::Parser;

/// Parser combinator that transforms the error of a parser using a mapping function
///
/// Sequencing and choice require both sides to share an error type; `map_err` is how
/// parsers with different error types are brought together.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F, E2> Parser for MapErr<P, F>
where
    P: Parser,
    F: Fn(P::Error) -> E2,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = E2;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        self.parser.parse(input).map_err(&self.mapper)
    }
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt: Parser + Sized {
    fn map_err<F, E2>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E2,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<P> MapErrExt for P where P: Parser {}

/// Convenience function to create a MapErr parser
pub fn map_err<P, F, E2>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser,
    F: Fn(P::Error) -> E2,
{
    MapErr::new(parser, mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::text::{TextError, is_char};
    use crate::token::{TokenError, is_token};

    #[derive(Debug, PartialEq)]
    enum CustomError {
        Simple(String),
        WithCode(u32),
    }

    #[test]
    fn test_map_err_transforms_error_on_failure() {
        let parser = is_char('a').map_err(|_| CustomError::Simple("mapped error".to_string()));

        assert_eq!(
            parser.parse("test").unwrap_err(),
            CustomError::Simple("mapped error".to_string())
        );
    }

    #[test]
    fn test_map_err_preserves_success() {
        let parser = is_char('t').map_err(|_| -> CustomError {
            panic!("error mapper must not run on success")
        });

        assert_eq!(parser.parse("test"), Ok(('t', "est")));
    }

    #[test]
    fn test_map_err_chain() {
        let parser = is_char('a')
            .map_err(|_| CustomError::Simple("first".to_string()))
            .map_err(|_| CustomError::WithCode(500));

        assert_eq!(parser.parse("test").unwrap_err(), CustomError::WithCode(500));
    }

    #[test]
    fn test_map_err_with_closure_accessing_original_error() {
        let parser = is_char('a')
            .map_err(|original: TextError| CustomError::Simple(format!("Wrapped: {}", original)));

        let error_msg = match parser.parse("test").unwrap_err() {
            CustomError::Simple(msg) => msg,
            other => panic!("Expected Simple error, got {:?}", other),
        };
        assert_eq!(error_msg, "Wrapped: expected 'a', found 't'");
    }

    #[test]
    fn test_map_err_unifies_error_types() {
        let tokens = [1u8, 2];
        let first = is_token(1u8).map_err(|_: TokenError<u8>| "first token");
        let second = map_err(is_token(2u8), |_| "second token");
        let parser = first.and(second);

        assert_eq!(parser.parse(&tokens[..]), Ok(((1, 2), &[][..])));
        assert_eq!(parser.parse(&tokens[1..]), Err("first token"));
    }
}
