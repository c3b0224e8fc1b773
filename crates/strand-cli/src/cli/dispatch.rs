//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` mirror the command `*Args` but keep the raw clap choices
//! (color mode, recursion limit with 0 for unlimited). The `Into<*Args>`
//! impls resolve them.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::RuntimeArgs;
use crate::commands::lex::LexArgs;
use crate::commands::nquads::NQuadsArgs;
use crate::commands::query::QueryArgs;

pub struct QueryParams {
    pub input_path: Option<PathBuf>,
    pub text: Option<String>,
    pub select: bool,
    pub runtime: RuntimeParams,
}

impl QueryParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            text: m.get_one::<String>("text").cloned(),
            select: m.get_flag("select"),
            runtime: RuntimeParams::from_matches(m),
        }
    }
}

impl From<QueryParams> for QueryArgs {
    fn from(p: QueryParams) -> Self {
        Self {
            input_path: p.input_path,
            text: p.text,
            select: p.select,
            runtime: p.runtime.into(),
        }
    }
}

pub struct NQuadsParams {
    pub input_path: Option<PathBuf>,
    pub text: Option<String>,
    pub runtime: RuntimeParams,
}

impl NQuadsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            text: m.get_one::<String>("text").cloned(),
            runtime: RuntimeParams::from_matches(m),
        }
    }
}

impl From<NQuadsParams> for NQuadsArgs {
    fn from(p: NQuadsParams) -> Self {
        Self {
            input_path: p.input_path,
            text: p.text,
            runtime: p.runtime.into(),
        }
    }
}

pub struct LexParams {
    pub input_path: Option<PathBuf>,
    pub text: Option<String>,
    pub color: ColorChoice,
}

impl LexParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            text: m.get_one::<String>("text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<LexParams> for LexArgs {
    fn from(p: LexParams) -> Self {
        Self {
            input_path: p.input_path,
            text: p.text,
            color: p.color.should_colorize(),
        }
    }
}

/// Flags shared by the grammar commands.
pub struct RuntimeParams {
    pub json: bool,
    pub trace: bool,
    pub verbose: bool,
    pub recursion_limit: u32,
    pub color: ColorChoice,
}

impl RuntimeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            trace: m.get_flag("trace"),
            verbose: m.get_flag("verbose"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied().unwrap_or(0),
            color: parse_color(m),
        }
    }
}

impl From<RuntimeParams> for RuntimeArgs {
    fn from(p: RuntimeParams) -> Self {
        Self {
            json: p.json,
            trace: p.trace,
            verbose: p.verbose,
            recursion_limit: (p.recursion_limit != 0).then_some(p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
