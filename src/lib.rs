//! # parsalg - Parser Combinator Algebra
//!
//! A parser is an immutable value that turns an input into either an error, or an
//! output plus the input it did not consume. This crate provides a small set of
//! combinators that build bigger parsers out of smaller ones:
//!
//! - **Transform**: [`map()`], [`flat_map()`], [`local()`], [`map_err()`]
//! - **Sequence and choice**: [`and()`], [`or()`]
//! - **Derived**: [`after()`], [`before()`], [`flat_or()`], [`optional()`]
//! - **Repetition**: [`many()`], [`some()`]
//!
//! Every combinator is also available as a method through its extension trait
//! (`AndExt`, `OrExt`, ...), all of which are re-exported from [`prelude`].
//!
//! The combinators are generic over the input type and never build errors of their
//! own: errors always come from the parsers being combined, or from a function passed
//! to [`flat_map()`] or [`map_err()`]. Failure never panics; everything is reported through
//! `Result`.
//!
//! A few primitive parsers ([`pure()`], [`fail()`], [`default()`], [`lazy()`], [`text`],
//! [`token`])
//! are included so that grammars can be written without any other crate.
//!
//! ```
//! use parsalg::prelude::*;
//! use parsalg::text::{digit, is_char};
//!
//! // One or more comma-separated digits, e.g. "1,2,3"
//! let digits = digit().and(is_char(',').after(digit()).many());
//!
//! let ((first, rest), remaining) = digits.parse("1,2,3;").unwrap();
//! assert_eq!(first, 1);
//! assert_eq!(rest, vec![2, 3]);
//! assert_eq!(remaining, ";");
//! ```

pub mod after;
pub mod and;
pub mod before;
pub mod default;
pub mod error;
pub mod flat_map;
pub mod flat_or;
pub mod lazy;
pub mod local;
pub mod many;
pub mod map;
pub mod map_err;
pub mod optional;
pub mod or;
pub mod parser;
pub mod primitive;
pub mod some;
pub mod text;
pub mod token;

pub use after::after;
pub use and::and;
pub use before::before;
pub use default::default;
pub use either::Either;
pub use error::{MatchError, TextError, TokenError};
pub use flat_map::flat_map;
pub use flat_or::flat_or;
pub use lazy::lazy;
pub use local::local;
pub use many::many;
pub use map::map;
pub use map_err::map_err;
pub use optional::optional;
pub use or::or;
pub use parser::{BoxedParser, Parser, from_fn};
pub use primitive::{fail, pure};
pub use some::some;

/// Everything needed to write grammars with method syntax
pub mod prelude {
    pub use crate::after::AfterExt;
    pub use crate::and::AndExt;
    pub use crate::before::BeforeExt;
    pub use crate::flat_map::FlatMapExt;
    pub use crate::flat_or::FlatOrExt;
    pub use crate::local::LocalExt;
    pub use crate::many::ManyExt;
    pub use crate::map::MapExt;
    pub use crate::map_err::MapErrExt;
    pub use crate::optional::OptionalExt;
    pub use crate::or::OrExt;
    pub use crate::parser::{BoxedExt, Parser};
    pub use crate::some::SomeExt;
}
