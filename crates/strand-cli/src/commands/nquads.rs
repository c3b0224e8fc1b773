use std::path::PathBuf;

use strand_core::Colors;
use strand_lib::nquads::NQuad;

use super::input::load_or_exit;
use super::{RuntimeArgs, fail, print_json};

pub struct NQuadsArgs {
    pub input_path: Option<PathBuf>,
    pub text: Option<String>,
    pub runtime: RuntimeArgs,
}

pub fn run(args: NQuadsArgs) {
    let input = load_or_exit(args.input_path.as_deref(), args.text.as_deref(), "-s/--source");
    let rt = &args.runtime;

    let mut tracer = rt.tracer();
    let result = rt.session(&mut tracer).parse_quad_document(&input.text);
    rt.print_trace(&tracer);

    let quads = result.unwrap_or_else(|e| fail(&input, &e, rt.color));
    if rt.json {
        print_json(&quads);
        return;
    }

    let colors = Colors::new(rt.color);
    for quad in &quads {
        println!("{}", format_quad(quad, colors));
    }
}

/// `subject predicate object [label]`, literal objects quoted.
pub fn format_quad(quad: &NQuad, colors: Colors) -> String {
    let c = colors;
    let object = if quad.object_id.is_empty() {
        format!(
            "{}\"{}\"{}",
            c.green,
            quad.object_value.escape_ascii(),
            c.reset
        )
    } else {
        quad.object_id.clone()
    };

    let mut line = format!(
        "{}{}{} {}{}{} {}",
        c.blue, quad.subject, c.reset, c.blue, quad.predicate, c.reset, object
    );
    if let Some(label) = &quad.label {
        line.push_str(&format!(" {}{}{}", c.dim, label, c.reset));
    }
    line
}
