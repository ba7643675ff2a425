use super::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns the default value of T
pub struct DefaultParser<I, T, E> {
    _phantom: PhantomData<fn(I) -> (T, E)>,
}

impl<I, T, E> DefaultParser<I, T, E> {
    pub fn new() -> Self {
        DefaultParser {
            _phantom: PhantomData,
        }
    }
}

impl<I, T, E> Default for DefaultParser<I, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T, E> Parser for DefaultParser<I, T, E>
where
    I: Clone,
    T: Default,
{
    type Input = I;
    type Output = T;
    type Error = E;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        Ok((T::default(), input))
    }
}

/// Convenience function to create a default parser
pub fn default<I, T, E>() -> DefaultParser<I, T, E>
where
    I: Clone,
    T: Default,
{
    DefaultParser::new()
}
