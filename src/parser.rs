use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value. `parse` takes `&self`, so running a parser never
/// changes it and the same parser can be run any number of times, from any number of
/// places, on different inputs.
///
/// On success a parser returns its output together with the remaining input. The
/// remainder must never be more input than was given: combinators such as
/// [`many`](crate::many::many) depend on it.
pub trait Parser {
    /// The input representation. Cloned whenever a combinator needs to retry from
    /// an earlier point, so it should be cheap to clone (a slice, an offset).
    type Input: Clone;
    type Output;
    type Error;

    /// Attempt to parse `input`
    ///
    /// Returns Ok with the parsed value and the unconsumed input on success,
    /// or Err if the parse fails.
    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error>;
}

impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        (**self).parse(input)
    }
}

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        (**self).parse(input)
    }
}

impl<P> Parser for Rc<P>
where
    P: Parser + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        (**self).parse(input)
    }
}

impl<P> Parser for Arc<P>
where
    P: Parser + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        (**self).parse(input)
    }
}

/// A type-erased parser, for naming the type of recursive or dynamically built grammars
pub type BoxedParser<'a, I, O, E> = Box<dyn Parser<Input = I, Output = O, Error = E> + 'a>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, Self::Input, Self::Output, Self::Error>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<P> BoxedExt for P where P: Parser {}

/// Parser backed by a plain closure
pub struct FnParser<F, I, O, E> {
    function: F,
    _phantom: PhantomData<fn(I) -> (O, E)>,
}

impl<F, I, O, E> FnParser<F, I, O, E>
where
    F: Fn(I) -> Result<(O, I), E>,
{
    pub fn new(function: F) -> Self {
        FnParser {
            function,
            _phantom: PhantomData,
        }
    }
}

impl<F, I, O, E> Parser for FnParser<F, I, O, E>
where
    F: Fn(I) -> Result<(O, I), E>,
    I: Clone,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        (self.function)(input)
    }
}

/// Wrap a closure as a parser
///
/// The closure must behave like any other parser: no side effects, and a remainder
/// that is never larger than its input.
pub fn from_fn<F, I, O, E>(function: F) -> FnParser<F, I, O, E>
where
    F: Fn(I) -> Result<(O, I), E>,
    I: Clone,
{
    FnParser::new(function)
}
