//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input file (positional). `-` reads stdin.
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Input file, or - for stdin")
}

/// Inline query text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline query text")
}

/// Inline N-Quads text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline N-Quads text")
}

/// Keep only the single query operation (--select).
pub fn select_arg() -> Arg {
    Arg::new("select")
        .long("select")
        .action(ArgAction::SetTrue)
        .help("Select the query operation (fails on more than one)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the result as JSON")
}

/// Parser trace on stderr (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print the parser trace to stderr")
}

/// Trace verbosity (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::SetTrue)
        .requires("trace")
        .help("Also trace every parser entry")
}

/// Nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("512")
        .value_parser(value_parser!(u32))
        .help("Maximum parser nesting, 0 for unlimited")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
