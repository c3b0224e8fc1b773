use std::fmt;

use serde::Serialize;
use strand_core::{Describe, Location, Positioned};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `<...>`, value without brackets.
    IriRef,
    /// `_:label`, value including the prefix.
    BlankNodeLabel,
    /// `"..."`, value unescaped and without quotes.
    Literal,
    /// `.`
    Period,
    /// `@tag`, value without the `@`.
    LangTag,
    /// `^^`
    DoubleHat,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::IriRef => "IRIREF",
            TokenKind::BlankNodeLabel => "BLANK_NODE_LABEL",
            TokenKind::Literal => "LITERAL",
            TokenKind::Period => "PERIOD",
            TokenKind::LangTag => "LANGTAG",
            TokenKind::DoubleHat => "DOUBLE_HAT",
        }
    }

    fn has_value(self) -> bool {
        !matches!(self, TokenKind::Period | TokenKind::DoubleHat)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: Location,
    /// A line break separates this token from the previous one.
    pub line_break: bool,
}

impl Positioned for Token {
    fn location(&self) -> Location {
        self.location
    }
}

impl Describe for Token {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_value() {
            write!(f, "{} {:?}", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
