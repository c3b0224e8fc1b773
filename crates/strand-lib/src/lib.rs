//! Strand grammars: a GraphQL-like query language and RDF N-Quads.
//!
//! # Example
//!
//! ```
//! use strand_lib::parse_query_document;
//!
//! let doc = parse_query_document("query { friends(first: 10) { name } }").expect("valid query");
//! let op = doc.query().expect("single query").expect("has a query");
//! assert_eq!(op.selections.0.len(), 1);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod gql;
pub mod nquads;
mod session;

#[cfg(test)]
mod session_tests;

pub use diagnostics::{RenderOptions, render_error};
pub use session::{Session, parse_quad, parse_quad_document, parse_query_document};

/// Errors returned by the grammar entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input did not match the grammar.
    #[error(transparent)]
    Parse(#[from] strand_core::Error),

    /// [`gql::Document::query`] found more than one query operation.
    #[error("document contains multiple query operations")]
    MultipleQueryOperations,
}

/// Result type for grammar operations.
pub type Result<T> = std::result::Result<T, Error>;
