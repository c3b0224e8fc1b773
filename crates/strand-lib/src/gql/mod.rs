//! GraphQL-like query language.
//!
//! ```text
//! Document     = { Operation }
//! Operation    = [ ("query" | "mutation") [ Name ] ] SelectionSet
//! SelectionSet = "{" { Field [ "," ] } "}"
//! Field        = Name [ Arguments ] [ SelectionSet ]
//! Arguments    = "(" { Name ":" Value [ "," ] } ")"
//! ```
//!
//! Whitespace and `#` comments may appear between any two elements, except
//! inside an argument list, where only spaces and tabs are skipped.

mod ast;
mod grammar;
pub mod printer;

#[cfg(test)]
mod grammar_tests;
#[cfg(test)]
mod printer_tests;

pub use ast::{
    Argument, Arguments, Document, Field, Name, Operation, OperationType, Selection, SelectionSet,
    Value,
};
