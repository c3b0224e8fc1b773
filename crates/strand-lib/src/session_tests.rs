use strand_core::{Colors, ErrorKind, PrintTracer, Verbosity};

use crate::{Error, Session, parse_quad, parse_query_document};

fn nested(depth: usize) -> String {
    format!("{}{}", "{ a ".repeat(depth), "}".repeat(depth))
}

#[test]
fn default_session_parses() {
    let doc = parse_query_document("{ a }").unwrap();

    assert_eq!(doc.operations.len(), 1);
    assert_eq!(parse_quad("<a> <b> <c> .").unwrap().object_id, "c");
}

#[test]
fn recursion_limit_stops_deep_nesting() {
    let source = nested(50);
    let result = Session::new()
        .with_recursion_limit(Some(40))
        .parse_query_document(&source);

    let Err(Error::Parse(err)) = result else {
        panic!("expected a parse error");
    };
    assert_eq!(err.kind(), ErrorKind::RecursionLimit);
}

#[test]
fn unlimited_recursion() {
    let source = nested(50);
    let doc = Session::new()
        .with_recursion_limit(None)
        .parse_query_document(&source)
        .unwrap();

    assert_eq!(doc.operations.len(), 1);
}

#[test]
fn tracer_sees_rule_frames() {
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    Session::new()
        .with_tracer(&mut tracer)
        .parse_quad("<a> <b> <c> .")
        .unwrap();

    let last = tracer.lines().last().unwrap();
    assert_eq!(last, "+ NQuad 1:1..1:14");
}
