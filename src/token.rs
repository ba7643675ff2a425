//! Primitive parsers over slices of tokens

use crate::parser::Parser;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

pub use crate::error::TokenError;

/// Parser that consumes and returns a single token
pub struct AnyToken<'a, T> {
    _phantom: PhantomData<fn(&'a [T])>,
}

impl<'a, T> AnyToken<'a, T> {
    pub fn new() -> Self {
        AnyToken {
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Default for AnyToken<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Parser for AnyToken<'a, T>
where
    T: Clone,
{
    type Input = &'a [T];
    type Output = T;
    type Error = TokenError<T>;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        match input.split_first() {
            Some((first, rest)) => Ok((first.clone(), rest)),
            None => Err(TokenError::unexpected_end("any token")),
        }
    }
}

/// Convenience function to create an AnyToken parser
pub fn any_token<'a, T>() -> AnyToken<'a, T>
where
    T: Clone,
{
    AnyToken::new()
}

/// Parser that matches one specific token
pub struct IsToken<'a, T> {
    expected: T,
    _phantom: PhantomData<fn(&'a [T])>,
}

impl<'a, T> IsToken<'a, T> {
    pub fn new(expected: T) -> Self {
        IsToken {
            expected,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Parser for IsToken<'a, T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Input = &'a [T];
    type Output = T;
    type Error = TokenError<T>;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        match input.split_first() {
            Some((first, rest)) if *first == self.expected => Ok((first.clone(), rest)),
            Some((first, _)) => Err(TokenError::unexpected(
                format!("{:?}", self.expected),
                first.clone(),
            )),
            None => Err(TokenError::unexpected_end(format!("{:?}", self.expected))),
        }
    }
}

/// Convenience function to create an IsToken parser
pub fn is_token<'a, T>(expected: T) -> IsToken<'a, T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    IsToken::new(expected)
}

/// Parser that matches one token accepted by a predicate
pub struct TokenIf<'a, T, F> {
    predicate: F,
    expected: Cow<'static, str>,
    _phantom: PhantomData<fn(&'a [T])>,
}

impl<'a, T, F> TokenIf<'a, T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(predicate: F, expected: Cow<'static, str>) -> Self {
        TokenIf {
            predicate,
            expected,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T, F> Parser for TokenIf<'a, T, F>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    type Input = &'a [T];
    type Output = T;
    type Error = TokenError<T>;

    fn parse(&self, input: Self::Input) -> Result<(Self::Output, Self::Input), Self::Error> {
        match input.split_first() {
            Some((first, rest)) if (self.predicate)(first) => Ok((first.clone(), rest)),
            Some((first, _)) => Err(TokenError::unexpected(self.expected.clone(), first.clone())),
            None => Err(TokenError::unexpected_end(self.expected.clone())),
        }
    }
}

/// Convenience function to create a TokenIf parser
pub fn token_if<'a, T, F>(predicate: F, expected: impl Into<Cow<'static, str>>) -> TokenIf<'a, T, F>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    TokenIf::new(predicate, expected.into())
}
