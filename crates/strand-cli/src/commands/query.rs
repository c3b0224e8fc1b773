use std::path::PathBuf;

use strand_lib::gql::Document;
use strand_lib::gql::printer::DocumentPrinter;

use super::input::load_or_exit;
use super::{RuntimeArgs, fail, print_json};

pub struct QueryArgs {
    pub input_path: Option<PathBuf>,
    pub text: Option<String>,
    pub select: bool,
    pub runtime: RuntimeArgs,
}

pub fn run(args: QueryArgs) {
    let input = load_or_exit(args.input_path.as_deref(), args.text.as_deref(), "-q/--query");
    let rt = &args.runtime;

    let mut tracer = rt.tracer();
    let result = rt.session(&mut tracer).parse_query_document(&input.text);
    rt.print_trace(&tracer);

    let document = result.unwrap_or_else(|e| fail(&input, &e, rt.color));
    let document = if args.select {
        match document.query() {
            Ok(op) => Document {
                operations: op.into_iter().cloned().collect(),
            },
            Err(e) => fail(&input, &e, rt.color),
        }
    } else {
        document
    };

    if rt.json {
        print_json(&document);
    } else {
        print!("{}", DocumentPrinter::new(&document).colored(rt.color).dump());
    }
}
