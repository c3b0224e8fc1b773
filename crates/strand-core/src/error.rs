//! Diagnostic error model.
//!
//! An [`Error`] is raised at the failure site and grows one [`Frame`] per
//! parser it unwinds through. Sibling failures (alternatives that were tried
//! and abandoned in a frame) ride along on that frame, so the rendered error
//! reads as a trace of the whole failed path.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::Location;

/// Category of the root cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A parser expected one shape and found another.
    Syntax,
    /// The input ended while a parser still wanted a token.
    EndOfInput,
    /// The input source failed; for token streams this is a lexical error.
    ReadFault,
    /// An unbounded repetition succeeded without consuming input.
    NoProgress,
    /// Parsers nested deeper than the context allows.
    RecursionLimit,
}

impl ErrorKind {
    /// Fatal errors cross alternation and optional constructs unchanged.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            ErrorKind::ReadFault | ErrorKind::NoProgress | ErrorKind::RecursionLimit
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::EndOfInput => write!(f, "unexpected end of input"),
            ErrorKind::ReadFault => write!(f, "read fault"),
            ErrorKind::NoProgress => write!(f, "repetition made no progress"),
            ErrorKind::RecursionLimit => write!(f, "recursion limit exceeded"),
        }
    }
}

/// One parser on the failure path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub parser: Cow<'static, str>,
    /// Where this parser started.
    pub position: Location,
    /// Failures recorded in this frame before it gave up.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub siblings: Vec<Error>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ErrorData {
    kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    position: Location,
    /// Innermost first.
    frames: Vec<Frame>,
}

/// A parse failure with its full frame trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Error(Box<ErrorData>);

impl Error {
    pub fn new(kind: ErrorKind, position: Location) -> Self {
        Self(Box::new(ErrorData {
            kind,
            message: None,
            position,
            frames: Vec::new(),
        }))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.0.message = Some(message.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.0.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.0.message.as_deref()
    }

    /// Where the failure was raised.
    pub fn position(&self) -> Location {
        self.0.position
    }

    /// Frames on the failure path, innermost first.
    pub fn frames(&self) -> &[Frame] {
        &self.0.frames
    }

    pub fn is_fatal(&self) -> bool {
        self.0.kind.is_fatal()
    }

    /// Record that the failure unwound through `parser`.
    pub(crate) fn within(
        mut self,
        parser: Cow<'static, str>,
        position: Location,
        siblings: Vec<Error>,
    ) -> Self {
        self.0.frames.push(Frame {
            parser,
            position,
            siblings,
        });
        self
    }

    /// Attach failures recorded outside any frame to the outermost one.
    pub(crate) fn adopt_siblings(&mut self, siblings: Vec<Error>) {
        if siblings.is_empty() {
            return;
        }
        match self.0.frames.last_mut() {
            Some(frame) => frame.siblings.extend(siblings),
            None => self.0.frames.push(Frame {
                parser: Cow::Borrowed("input"),
                position: self.0.position,
                siblings,
            }),
        }
    }

    /// One-line description of the root cause.
    pub fn summary(&self) -> String {
        match &self.0.message {
            Some(msg) => format!("{msg} at {}", self.0.position),
            None => format!("{} at {}", self.0.kind, self.0.position),
        }
    }

    /// Multi-line trace: one line per frame, abandoned alternatives indented
    /// under `after:` markers.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        self.collect_lines(0, &mut lines);
        lines.join("\n")
    }

    fn collect_lines(&self, indent: usize, out: &mut Vec<String>) {
        let pad = " ".repeat(indent);
        if self.0.frames.is_empty() {
            out.push(format!("{pad}{}", self.summary()));
            return;
        }

        for (i, frame) in self.0.frames.iter().enumerate() {
            let mut line = format!("{pad}while parsing {} at {}", frame.parser, frame.position);
            if i == 0 {
                if let Some(msg) = &self.0.message {
                    line.push_str(": ");
                    line.push_str(msg);
                }
                if self.0.position != frame.position {
                    line.push_str(&format!(" (at {})", self.0.position));
                }
            }
            out.push(line);

            for sibling in &frame.siblings {
                out.push(format!("{pad}  after:"));
                sibling.collect_lines(indent + 4, out);
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for Error {}
