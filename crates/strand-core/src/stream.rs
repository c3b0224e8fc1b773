//! Forward-only input cursors.
//!
//! A stream is an immutable-style cursor: [`Stream::advance`] returns a new
//! cursor and never touches the receiver. This makes speculative parsing a
//! matter of keeping the old value around.

use crate::Location;

/// Human-readable rendering of a token for "expected X but got Y" messages.
pub trait Describe {
    fn describe(&self) -> String;
}

impl Describe for u8 {
    fn describe(&self) -> String {
        format!("'{}'", self.escape_ascii())
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Tokens that know where they came from.
pub trait Positioned {
    fn location(&self) -> Location;
}

/// Why a stream has no token at its current position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("end of input")]
    EndOfInput,

    /// The underlying source failed (for token streams: a lexical error).
    #[error("read fault: {0}")]
    ReadFault(String),
}

/// Positioned, single-direction cursor over input tokens.
pub trait Stream: Clone {
    type Token: Copy + Describe;

    /// The current token, or why there is none.
    fn token(&self) -> Result<Self::Token, StreamError>;

    /// Cursor pointing at the next token. Only meaningful when [`good`](Self::good).
    fn advance(&self) -> Self;

    /// Error at the current position, if any.
    fn error(&self) -> Option<StreamError>;

    /// Whether a token is available at the current position.
    fn good(&self) -> bool {
        self.error().is_none()
    }

    /// Source location of the current token (or of the end of input).
    fn position(&self) -> Location;

    /// Number of tokens consumed so far. Strictly increases on every advance.
    fn offset(&self) -> usize;
}

/// Cursor over an in-memory byte slice. Never faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteStream<'a> {
    src: &'a [u8],
    loc: Location,
}

impl<'a> ByteStream<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            loc: Location::START,
        }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.src[self.loc.offset..]
    }

    pub fn source(&self) -> &'a [u8] {
        self.src
    }
}

impl<'a> From<&'a str> for ByteStream<'a> {
    fn from(src: &'a str) -> Self {
        Self::new(src.as_bytes())
    }
}

impl Stream for ByteStream<'_> {
    type Token = u8;

    fn token(&self) -> Result<u8, StreamError> {
        self.src
            .get(self.loc.offset)
            .copied()
            .ok_or(StreamError::EndOfInput)
    }

    fn advance(&self) -> Self {
        match self.src.get(self.loc.offset) {
            Some(&b) => Self {
                src: self.src,
                loc: self.loc.step(b),
            },
            None => *self,
        }
    }

    fn error(&self) -> Option<StreamError> {
        if self.good() {
            None
        } else {
            Some(StreamError::EndOfInput)
        }
    }

    fn good(&self) -> bool {
        self.loc.offset < self.src.len()
    }

    fn position(&self) -> Location {
        self.loc
    }

    fn offset(&self) -> usize {
        self.loc.offset
    }
}

/// Cursor over a pre-lexed token slice.
///
/// A lexer that stopped early hands its error message over as a fault; the
/// stream reports it as [`StreamError::ReadFault`] once the good tokens run out.
pub struct TokenStream<'a, T> {
    tokens: &'a [T],
    index: usize,
    end: Location,
    fault: Option<&'a str>,
}

impl<'a, T> TokenStream<'a, T> {
    /// `end` is reported as the position once all tokens are consumed.
    pub fn new(tokens: &'a [T], end: Location) -> Self {
        Self {
            tokens,
            index: 0,
            end,
            fault: None,
        }
    }

    pub fn with_fault(mut self, fault: Option<&'a str>) -> Self {
        self.fault = fault;
        self
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &'a [T] {
        &self.tokens[self.index..]
    }
}

impl<T> Clone for TokenStream<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TokenStream<'_, T> {}

impl<'a, T: Positioned + Describe> Stream for TokenStream<'a, T> {
    type Token = &'a T;

    fn token(&self) -> Result<&'a T, StreamError> {
        match self.tokens.get(self.index) {
            Some(token) => Ok(token),
            None => Err(self.end_error()),
        }
    }

    fn advance(&self) -> Self {
        let mut next = *self;
        if next.index < next.tokens.len() {
            next.index += 1;
        }
        next
    }

    fn error(&self) -> Option<StreamError> {
        if self.good() {
            None
        } else {
            Some(self.end_error())
        }
    }

    fn good(&self) -> bool {
        self.index < self.tokens.len()
    }

    fn position(&self) -> Location {
        self.tokens
            .get(self.index)
            .map_or(self.end, Positioned::location)
    }

    fn offset(&self) -> usize {
        self.index
    }
}

impl<T> TokenStream<'_, T> {
    fn end_error(&self) -> StreamError {
        match self.fault {
            Some(msg) => StreamError::ReadFault(msg.to_string()),
            None => StreamError::EndOfInput,
        }
    }
}
