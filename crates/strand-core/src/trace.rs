//! Tracing infrastructure for debugging parser execution.
//!
//! # Design: Opt-In Instrumentation
//!
//! A [`Context`](crate::Context) holds an optional `&mut dyn Tracer`. Without
//! one, no parser names are formatted and no trace calls happen; the only
//! cost is a branch per frame.
//!
//! # Design: Tracer-Owned State
//!
//! Display-only state (nesting depth, collected lines) lives in the tracer,
//! not in the context. The context reports frame boundaries and the tracer
//! decides what to keep.

use crate::{Colors, Error, Location};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Commits and backtracks only.
    #[default]
    Default,
    /// Also every frame entry (-v).
    Verbose,
}

/// Instrumentation hooks called by the context at frame boundaries.
///
/// - `trace_enter` - a parser is about to run
/// - `trace_commit` - it succeeded; the context moved from `from` to `to`
/// - `trace_backtrack` - it failed; the cursor was restored to `at`
pub trait Tracer {
    fn trace_enter(&mut self, parser: &str, at: Location);

    fn trace_commit(&mut self, parser: &str, from: Location, to: Location);

    fn trace_backtrack(&mut self, parser: &str, at: Location, error: &Error);
}

/// Tracer that collects an indented execution trace.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    /// Collected trace lines.
    lines: Vec<String>,
    /// Current frame nesting.
    depth: usize,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
            depth: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines to stderr.
    pub fn print(&self) {
        for line in &self.lines {
            eprintln!("{}", line);
        }
    }

    fn push(&mut self, marker: &str, color: &str, parser: &str, rest: String) {
        let c = self.colors;
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!(
            "{indent}{color}{marker}{reset} {blue}{parser}{reset} {rest}",
            reset = c.reset,
            blue = c.blue,
        ));
    }
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, parser: &str, at: Location) {
        if self.verbosity == Verbosity::Verbose {
            let c = self.colors;
            self.push(">", c.dim, parser, format!("{}@ {at}{}", c.dim, c.reset));
        }
        self.depth += 1;
    }

    fn trace_commit(&mut self, parser: &str, from: Location, to: Location) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        self.push("+", c.green, parser, format!("{}{from}..{to}{}", c.dim, c.reset));
    }

    fn trace_backtrack(&mut self, parser: &str, at: Location, error: &Error) {
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        let cause = error.message().map_or_else(|| error.kind().to_string(), str::to_string);
        self.push("-", c.red, parser, format!("{}@ {at}{}: {cause}", c.dim, c.reset));
    }
}
