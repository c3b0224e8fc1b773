use std::path::PathBuf;

use strand_core::{Colors, ErrorKind};
use strand_lib::nquads::lex;

use super::fail;
use super::input::load_or_exit;

pub struct LexArgs {
    pub input_path: Option<PathBuf>,
    pub text: Option<String>,
    pub color: bool,
}

pub fn run(args: LexArgs) {
    let input = load_or_exit(args.input_path.as_deref(), args.text.as_deref(), "-s/--source");
    let c = Colors::new(args.color);

    let lexed = lex(&input.text);
    for token in &lexed.tokens {
        let marker = if token.line_break { "\u{21b5} " } else { "" };
        println!("{}{}{} {}{}", c.dim, token.location, c.reset, marker, token);
    }

    if let Some(fault) = lexed.fault {
        let err = strand_core::Error::new(ErrorKind::ReadFault, fault.location)
            .with_message(fault.message);
        fail(&input, &err.into(), args.color);
    }
}
