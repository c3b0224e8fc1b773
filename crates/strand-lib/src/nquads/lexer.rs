//! Byte-level N-Quads scanner.

use std::sync::LazyLock;

use regex_automata::meta::Regex;
use strand_core::{Describe, Location};

use super::token::{Token, TokenKind};

static LANG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+(-[a-zA-Z0-9]+)*$").expect("valid pattern"));

/// Lexer output: the tokens read before the first error, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub fault: Option<LexError>,
    /// Where lexing stopped: end of input, or the fault position.
    pub end: Location,
}

impl Lexed {
    pub fn fault_message(&self) -> Option<&str> {
        self.fault.as_ref().map(|f| f.message.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {location}")]
pub struct LexError {
    pub message: String,
    pub location: Location,
}

/// Split `text` into tokens, skipping whitespace and `#` comments.
pub fn lex(text: &str) -> Lexed {
    let mut lexer = Lexer {
        src: text.as_bytes(),
        loc: Location::START,
    };
    let mut tokens = Vec::new();
    loop {
        let line_break = lexer.skip_trivia();
        match lexer.next_token(line_break) {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => {
                return Lexed {
                    tokens,
                    fault: None,
                    end: lexer.loc,
                };
            }
            Err(err) => {
                return Lexed {
                    tokens,
                    end: err.location,
                    fault: Some(err),
                };
            }
        }
    }
}

struct Lexer<'s> {
    src: &'s [u8],
    loc: Location,
}

impl Lexer<'_> {
    fn peek(&self) -> Option<u8> {
        self.src.get(self.loc.offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.loc = self.loc.step(b);
        Some(b)
    }

    fn error(&self, at: Location, message: impl Into<String>) -> LexError {
        LexError {
            message: message.into(),
            location: at,
        }
    }

    /// Returns whether a line break was skipped.
    fn skip_trivia(&mut self) -> bool {
        let mut line_break = false;
        while let Some(b) = self.peek() {
            if b == b'#' {
                while self.peek().is_some_and(|b| b != b'\n') {
                    self.bump();
                }
            } else if b.is_ascii_whitespace() {
                line_break |= b == b'\n';
                self.bump();
            } else {
                break;
            }
        }
        line_break
    }

    fn next_token(&mut self, line_break: bool) -> Result<Option<Token>, LexError> {
        let start = self.loc;
        let Some(b) = self.bump() else {
            return Ok(None);
        };
        let (kind, value) = match b {
            b'<' => (TokenKind::IriRef, self.iri_ref(start)?),
            b'_' => (TokenKind::BlankNodeLabel, self.blank_node_label(start)?),
            b'"' => (TokenKind::Literal, self.literal(start)?),
            b'.' => (TokenKind::Period, String::new()),
            b'@' => (TokenKind::LangTag, self.lang_tag(start)?),
            b'^' => {
                self.expect(b'^')?;
                (TokenKind::DoubleHat, String::new())
            }
            other => {
                return Err(self.error(start, format!("unexpected character {}", other.describe())));
            }
        };
        Ok(Some(Token {
            kind,
            value,
            location: start,
            line_break,
        }))
    }

    fn expect(&mut self, want: u8) -> Result<(), LexError> {
        let at = self.loc;
        match self.bump() {
            Some(got) if got == want => Ok(()),
            Some(got) => Err(self.error(
                at,
                format!("expected {} but got {}", want.describe(), got.describe()),
            )),
            None => Err(self.error(
                at,
                format!("expected {} but got end of input", want.describe()),
            )),
        }
    }

    fn iri_ref(&mut self, start: Location) -> Result<String, LexError> {
        let mut value = Vec::new();
        loop {
            let at = self.loc;
            match self.bump() {
                None => return Err(self.error(start, "unterminated IRI")),
                Some(b'>') => break,
                Some(b'\n' | b'\r') => return Err(self.error(at, "line break in IRI")),
                Some(b'\\') => {
                    value.push(b'\\');
                    match self.bump() {
                        Some(b'\n' | b'\r') | None => {
                            return Err(self.error(at, "unterminated escape in IRI"));
                        }
                        Some(b) => value.push(b),
                    }
                }
                Some(b) => value.push(b),
            }
        }
        Ok(String::from_utf8_lossy(&value).into_owned())
    }

    fn blank_node_label(&mut self, start: Location) -> Result<String, LexError> {
        self.expect(b':')?;
        let src = self.src;
        let rest = &src[self.loc.offset..];
        let run = rest.iter().take_while(|b| !b.is_ascii_whitespace()).count();
        // RDF 1.1 BLANK_NODE_LABEL may not end in `.`, so a trailing run of
        // dots is the statement terminator, not part of the label.
        let mut len = run;
        while len > 0 && rest[len - 1] == b'.' {
            len -= 1;
        }
        if len == 0 {
            return Err(self.error(start, "empty blank node label"));
        }
        let label = format!("_:{}", String::from_utf8_lossy(&rest[..len]));
        for _ in 0..len {
            self.bump();
        }
        Ok(label)
    }

    fn literal(&mut self, start: Location) -> Result<String, LexError> {
        let mut value = Vec::new();
        loop {
            let at = self.loc;
            match self.bump() {
                None => return Err(self.error(start, "unterminated literal")),
                Some(b'"') => break,
                Some(b'\\') => value.push(self.escape(at)?),
                Some(b) => value.push(b),
            }
        }
        Ok(String::from_utf8_lossy(&value).into_owned())
    }

    /// `ECHAR ::= '\' [tbnrf"'\]`
    fn escape(&mut self, at: Location) -> Result<u8, LexError> {
        match self.bump() {
            Some(b't') => Ok(b'\t'),
            Some(b'b') => Ok(0x08),
            Some(b'n') => Ok(b'\n'),
            Some(b'r') => Ok(b'\r'),
            Some(b'f') => Ok(0x0c),
            Some(b'"') => Ok(b'"'),
            Some(b'\'') => Ok(b'\''),
            Some(b'\\') => Ok(b'\\'),
            Some(other) => Err(self.error(at, format!("can't escape {}", other.describe()))),
            None => Err(self.error(at, "no character after backslash")),
        }
    }

    fn lang_tag(&mut self, start: Location) -> Result<String, LexError> {
        let mut value = Vec::new();
        while let Some(b) = self.peek() {
            if !(b.is_ascii_alphanumeric() || b == b'-') {
                break;
            }
            value.push(b);
            self.bump();
        }
        let tag = String::from_utf8_lossy(&value).into_owned();
        if !LANG_TAG.is_match(&tag) {
            return Err(self.error(start, format!("malformed language tag {tag:?}")));
        }
        Ok(tag)
    }
}
