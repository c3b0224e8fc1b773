//! Strand core: a backtracking parser-combinator engine.
//!
//! The engine is built from four layers, leaves first:
//! - [`Stream`] - forward-only cursor over bytes or pre-lexed tokens
//! - [`Context`] - wraps a stream, runs parsers in child frames, rolls back on failure
//! - combinators - [`Seq`], [`OneOf`], [`Maybe`], [`Repeat`], byte matchers, [`Regex`]
//! - [`Error`] - the "while parsing X at Y / after trying Z" diagnostic trace
//!
//! # Example
//!
//! ```
//! use strand_core::{ByteStream, Bytes, Context, OneOf};
//!
//! let mut ctx = Context::new(ByteStream::new(b"mutation {}"));
//! let keyword = OneOf((Bytes("query"), Bytes("mutation")));
//! let choice = ctx.parse_or_error(&keyword).expect("keyword");
//! assert_eq!(choice.index, 1);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod bytes;
mod colors;
mod combinators;
mod context;
mod error;
mod invariants;
mod location;
mod parser;
mod regex;
mod stream;
mod trace;

#[cfg(test)]
mod bytes_tests;
#[cfg(test)]
mod context_tests;
#[cfg(test)]
mod stream_tests;
#[cfg(test)]
mod trace_tests;

pub use bytes::{Byte, Bytes, BytesWhile};
pub use colors::Colors;
pub use combinators::{Choice, Maybe, OneOf, Repeat, Seq};
pub use context::{Context, DEFAULT_RECURSION_LIMIT};
pub use error::{Error, ErrorKind, Frame};
pub use location::Location;
pub use parser::{Map, Named, ParseFn, Parser, ParserExt, Rule, RuleParser, rule};
pub use regex::{Match, Regex};
pub use stream::{ByteStream, Describe, Positioned, Stream, StreamError, TokenStream};
pub use trace::{PrintTracer, Tracer, Verbosity};

/// Result type for everything that runs inside a [`Context`].
pub type PResult<T> = std::result::Result<T, Error>;
