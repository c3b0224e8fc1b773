use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strand_core::{ByteStream, Context, rule};

use crate::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub operations: Vec<Operation>,
}

impl Document {
    /// The single query operation, if any.
    ///
    /// Operations without a keyword count as queries. Parsing accepts any
    /// number of them; only this accessor rejects a second one.
    pub fn query(&self) -> Result<Option<&Operation>, Error> {
        let mut found = None;
        for op in &self.operations {
            if op.kind == OperationType::Mutation {
                continue;
            }
            if found.is_some() {
                return Err(Error::MultipleQueryOperations);
            }
            found = Some(op);
        }
        Ok(found)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    Query,
    Mutation,
    /// Bare selection set without a keyword.
    Unspecified,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Unspecified => "unspecified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub kind: OperationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    pub selections: SelectionSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet(pub Vec<Selection>);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Field(Field),
}

impl Selection {
    pub fn as_field(&self) -> &Field {
        match self {
            Selection::Field(field) => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: Name,
    pub arguments: Arguments,
    pub selections: SelectionSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Arguments(pub Vec<Argument>);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
}

/// Identifier: `[_A-Za-z.][-._0-9A-Za-z]*`. Never starts with a digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Name(pub(super) String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = strand_core::Error;

    /// The whole input must be one name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ctx = Context::new(ByteStream::from(s));
        let name = ctx.parse_or_error(&rule::<Name>())?;
        if ctx.good() {
            return Err(ctx.unexpected("end of name"));
        }
        Ok(name)
    }
}

/// Raw argument value: a non-empty run up to whitespace, `(`, `)` or `,`.
///
/// An empty run such as `(x: )` is rejected rather than read as an empty
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Value(pub(super) String);

impl Value {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
