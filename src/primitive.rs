use super::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
pub struct Pure<I, O, E> {
    value: O,
    _phantom: PhantomData<fn(I) -> E>,
}

impl<I, O, E> Pure<I, O, E> {
    pub fn new(value: O) -> Self {
        Pure {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, E> Parser for Pure<I, O, E>
where
    I: Clone,
    O: Clone,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        Ok((self.value.clone(), input))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<I, O, E>(value: O) -> Pure<I, O, E>
where
    I: Clone,
    O: Clone,
{
    Pure::new(value)
}

/// Parser that always fails with a fixed error
pub struct Fail<I, O, E> {
    error: E,
    _phantom: PhantomData<fn(I) -> O>,
}

impl<I, O, E> Fail<I, O, E> {
    pub fn new(error: E) -> Self {
        Fail {
            error,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, E> Parser for Fail<I, O, E>
where
    I: Clone,
    E: Clone,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn parse(&self, _input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        Err(self.error.clone())
    }
}

/// Convenience function to create a Fail parser
pub fn fail<I, O, E>(error: E) -> Fail<I, O, E>
where
    I: Clone,
    E: Clone,
{
    Fail::new(error)
}
