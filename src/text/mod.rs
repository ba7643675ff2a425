//! Primitive parsers over `&str` input

pub mod character;
pub mod digit;
pub mod literal;
pub mod number;

pub use crate::error::TextError;
pub use character::{any_char, char_if, is_char};
pub use digit::digit;
pub use literal::literal;
pub use number::unsigned;
