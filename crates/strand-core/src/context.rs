//! Parse context and backtracking control.
//!
//! Every parser invocation runs in a child frame of the context. The child
//! starts at the parent's position; on success the parent adopts the child's
//! position (commit), on failure the cursor is restored (rollback). Backtracking
//! is a checkpoint/restore pair on a single cursor, so branching costs one
//! stream copy and one (usually empty) sibling list.
//!
//! # Sibling failures
//!
//! [`Context::try_parse`] turns a recoverable failure into `None` and records
//! the error in the current frame. If that frame later fails, the recorded
//! errors are attached to its [`Frame`](crate::Frame); if it succeeds they are
//! dropped, since success erases failed-alternative history.

use std::fmt::Display;

use crate::parser::{Parser, Rule, rule};
use crate::{Error, ErrorKind, Location, PResult, Stream, StreamError, Tracer};

/// Default maximum number of nested parser frames.
pub const DEFAULT_RECURSION_LIMIT: u32 = 512;

pub struct Context<'t, S: Stream> {
    stream: S,
    /// Sibling failures per active frame. Index 0 is the root.
    frames: Vec<Vec<Error>>,
    recursion_limit: Option<u32>,
    tracer: Option<&'t mut dyn Tracer>,
}

impl<'t, S: Stream> Context<'t, S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            frames: vec![Vec::new()],
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
            tracer: None,
        }
    }

    /// Set the nesting limit. None = unlimited.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn with_tracer(mut self, tracer: &'t mut dyn Tracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn into_stream(self) -> S {
        self.stream
    }

    pub fn position(&self) -> Location {
        self.stream.position()
    }

    pub fn good(&self) -> bool {
        self.stream.good()
    }

    /// Number of active child frames.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Failures recorded in the current frame so far.
    pub fn siblings(&self) -> &[Error] {
        self.frames.last().map_or(&[], Vec::as_slice)
    }

    pub fn peek(&self) -> Option<S::Token> {
        self.stream.token().ok()
    }

    /// The current token, or an end-of-input / read-fault error.
    pub fn token(&self) -> PResult<S::Token> {
        self.stream
            .token()
            .map_err(|err| self.stream_error(err, None))
    }

    /// Move past the current token. Only valid when [`good`](Self::good).
    pub fn advance(&mut self) {
        self.ensure_good();
        self.stream = self.stream.advance();
    }

    /// Advance over `n` tokens, stopping early at the end of input.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if !self.stream.good() {
                break;
            }
            self.stream = self.stream.advance();
        }
    }

    /// Syntax error at the current position.
    pub fn fail(&self, message: impl Into<String>) -> Error {
        Error::new(ErrorKind::Syntax, self.position()).with_message(message)
    }

    /// "expected X but got Y", where Y is the current token or the stream error.
    pub fn unexpected(&self, expected: impl Display) -> Error {
        match self.stream.token() {
            Ok(token) => self.fail(format!(
                "expected {expected} but got {}",
                crate::Describe::describe(&token)
            )),
            Err(err) => self.stream_error(err, Some(&expected.to_string())),
        }
    }

    fn stream_error(&self, err: StreamError, expected: Option<&str>) -> Error {
        let kind = match err {
            StreamError::EndOfInput => ErrorKind::EndOfInput,
            StreamError::ReadFault(_) => ErrorKind::ReadFault,
        };
        let message = match expected {
            Some(expected) => format!("expected {expected} but got {err}"),
            None => err.to_string(),
        };
        Error::new(kind, self.position()).with_message(message)
    }

    /// Run `parser` in a child frame.
    ///
    /// On success the child's position is committed and its sibling failures
    /// are discarded. On failure the cursor is restored and the error gains a
    /// frame for `parser`.
    pub fn parse<P: Parser<S> + ?Sized>(&mut self, parser: &P) -> PResult<P::Output> {
        let checkpoint = self.stream.clone();
        let start = checkpoint.position();

        if let Some(limit) = self.recursion_limit {
            if self.depth() >= limit as usize {
                return Err(Error::new(ErrorKind::RecursionLimit, start)
                    .with_message(format!("parsers nested deeper than {limit} frames"))
                    .within(parser.name(), start, Vec::new()));
            }
        }

        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.trace_enter(&parser.name(), start);
        }

        self.frames.push(Vec::new());
        let result = parser.parse(self);
        let siblings = self.frames.pop().unwrap_or_default();

        match result {
            Ok(output) => {
                if let Some(tracer) = self.tracer.as_deref_mut() {
                    tracer.trace_commit(&parser.name(), start, self.stream.position());
                }
                Ok(output)
            }
            Err(err) => {
                self.stream = checkpoint;
                let err = err.within(parser.name(), start, siblings);
                if let Some(tracer) = self.tracer.as_deref_mut() {
                    tracer.trace_backtrack(&parser.name(), start, &err);
                }
                Err(err)
            }
        }
    }

    /// Run `parser`, converting a recoverable failure into `None`.
    ///
    /// The failure is recorded as a sibling of the current frame. Fatal errors
    /// (see [`ErrorKind::is_fatal`]) are returned as `Err` and must be
    /// propagated by the caller.
    pub fn try_parse<P: Parser<S> + ?Sized>(&mut self, parser: &P) -> PResult<Option<P::Output>> {
        match self.parse(parser) {
            Ok(output) => Ok(Some(output)),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                self.record(err);
                Ok(None)
            }
        }
    }

    /// Entry-point variant of [`parse`](Self::parse): the returned error also
    /// carries every failure recorded at the root level.
    pub fn parse_or_error<P: Parser<S> + ?Sized>(&mut self, parser: &P) -> Result<P::Output, Error> {
        match self.parse(parser) {
            Ok(output) => Ok(output),
            Err(mut err) => {
                if self.depth() == 0 {
                    let recorded = std::mem::take(&mut self.frames[0]);
                    err.adopt_siblings(recorded);
                }
                Err(err)
            }
        }
    }

    /// Parse the grammar type `T` in a child frame named `T::NAME`.
    pub fn rule<T: Rule<S>>(&mut self) -> PResult<T> {
        self.parse(&rule::<T>())
    }

    fn record(&mut self, err: Error) {
        if let Some(frame) = self.frames.last_mut() {
            frame.push(err);
        }
    }
}
