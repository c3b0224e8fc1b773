pub mod input;
pub mod lex;
pub mod nquads;
pub mod query;


use serde::Serialize;
use strand_core::{Colors, PrintTracer, Verbosity};
use strand_lib::{RenderOptions, Session, render_error};

use input::Input;

/// Flags shared by the grammar commands.
pub struct RuntimeArgs {
    pub json: bool,
    pub trace: bool,
    pub verbose: bool,
    /// None = unlimited.
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

impl RuntimeArgs {
    pub fn tracer(&self) -> PrintTracer {
        let verbosity = if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Default
        };
        PrintTracer::new(verbosity, Colors::new(self.color))
    }

    /// A session that records into `tracer` when `--trace` is on.
    pub fn session<'t>(&self, tracer: &'t mut PrintTracer) -> Session<'t> {
        let session = Session::new().with_recursion_limit(self.recursion_limit);
        if self.trace {
            session.with_tracer(tracer)
        } else {
            session
        }
    }

    pub fn print_trace(&self, tracer: &PrintTracer) {
        if self.trace {
            tracer.print();
        }
    }
}

/// Render `err` against the input on stderr and exit with status 1.
pub fn fail(input: &Input, err: &strand_lib::Error, colored: bool) -> ! {
    let options = RenderOptions {
        colored,
        path: input.path.as_deref(),
    };
    eprintln!("{}", render_error(&input.text, err, options));
    std::process::exit(1);
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}
