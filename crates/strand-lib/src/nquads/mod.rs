//! RDF N-Quads, practical subset.
//!
//! Text is lexed into [`Token`]s first; statements are then parsed from a
//! token stream. A lexical error ends the token list and surfaces as a read
//! fault at that position.

mod grammar;
mod lexer;
mod token;

#[cfg(test)]
mod grammar_tests;

use serde::{Serialize, Serializer};

pub use grammar::QuadDocument;
pub use lexer::{LexError, Lexed, lex};
pub use token::{Token, TokenKind};

/// One subject/predicate/object(/label) statement.
///
/// A language tag or datatype IRI on a literal object is folded into
/// `predicate` as `.<tag>` or `.@@<iri>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NQuad {
    pub subject: String,
    pub predicate: String,
    /// Empty when the object is a literal.
    pub object_id: String,
    /// Empty when the object is a reference.
    #[serde(serialize_with = "serialize_lossy")]
    pub object_value: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
