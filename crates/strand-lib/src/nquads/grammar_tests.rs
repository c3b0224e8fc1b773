use indoc::indoc;
use strand_core::ErrorKind;

use super::NQuad;
use crate::{Error, parse_quad, parse_quad_document};

fn parse_error(line: &str) -> strand_core::Error {
    match parse_quad(line) {
        Err(Error::Parse(err)) => err,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn simple_quad() {
    let quad = parse_quad("<a> <b> <c> .").unwrap();

    assert_eq!(
        quad,
        NQuad {
            subject: "a".to_string(),
            predicate: "b".to_string(),
            object_id: "c".to_string(),
            ..NQuad::default()
        }
    );
}

#[test]
fn blank_nodes_and_label() {
    let quad = parse_quad("_:alice <knows> _:bob <graph> .").unwrap();

    assert_eq!(quad.subject, "_:alice");
    assert_eq!(quad.object_id, "_:bob");
    assert_eq!(quad.label.as_deref(), Some("graph"));
}

#[test]
fn literal_object() {
    let quad = parse_quad(r#"<s> <name> "Alice \"A\"" ."#).unwrap();

    assert_eq!(quad.object_id, "");
    assert_eq!(quad.object_value, b"Alice \"A\"");
    assert_eq!(quad.predicate, "name");
}

#[test]
fn language_tag_folds_into_predicate() {
    let quad = parse_quad(r#"<s> <name> "Alice"@en-US ."#).unwrap();

    assert_eq!(quad.predicate, "name.en-US");
    assert_eq!(quad.object_value, b"Alice");
}

#[test]
fn datatype_folds_into_predicate() {
    let quad = parse_quad(r#"<s> <age> "42"^^<xs:int> _:g ."#).unwrap();

    assert_eq!(quad.predicate, "age.@@xs:int");
    assert_eq!(quad.object_value, b"42");
    assert_eq!(quad.label.as_deref(), Some("_:g"));
}

#[test]
fn fields_stay_on_one_line() {
    let err = parse_error("<a> <b>\n<c> .");

    assert_eq!(err.kind(), ErrorKind::Syntax);
    insta::assert_snapshot!(err.summary(), @"none of 3 alternatives matched at 2:1");
}

#[test]
fn predicate_must_be_an_iri() {
    let err = parse_error("<a> _:b <c> .");

    insta::assert_snapshot!(err.summary(), @r#"expected IRIREF but got BLANK_NODE_LABEL "_:b" at 1:5"#);
}

#[test]
fn trailing_tokens_are_rejected() {
    let err = parse_error("<a> <b> <c> . <d>");

    insta::assert_snapshot!(err.summary(), @r#"expected end of input but got IRIREF "d" at 1:15"#);
}

#[test]
fn missing_terminator() {
    let err = parse_error("<a> <b> <c>");

    assert_eq!(err.kind(), ErrorKind::EndOfInput);
    insta::assert_snapshot!(err.summary(), @"expected PERIOD but got end of input at 1:12");
}

#[test]
fn lexical_error_is_a_read_fault() {
    let err = parse_error(r#"<a> <b> "\q" ."#);

    assert_eq!(err.kind(), ErrorKind::ReadFault);
    insta::assert_snapshot!(err.summary(), @"expected IRIREF but got read fault: can't escape 'q' at 1:10");
}

#[test]
fn document_of_statements() {
    let quads = parse_quad_document(indoc! {r#"
        # people
        <alice> <name> "Alice" .

        _:b1 <knows> <alice> <g1> .
    "#})
    .unwrap();

    assert_eq!(quads.len(), 2);
    assert_eq!(quads[0].subject, "alice");
    assert_eq!(quads[1].label.as_deref(), Some("g1"));
}

#[test]
fn empty_document() {
    assert_eq!(parse_quad_document("").unwrap(), vec![]);
    assert_eq!(parse_quad_document("# nothing\n\n").unwrap(), vec![]);
}

#[test]
fn document_with_blank_node_before_terminator() {
    let quads = parse_quad_document("_:a <b> _:c.\n_:d <e> <f>.\n").unwrap();

    assert_eq!(quads.len(), 2);
    assert_eq!(quads[0].object_id, "_:c");
    assert_eq!(quads[1].subject, "_:d");
    assert_eq!(quads[1].object_id, "f");
}

#[test]
fn document_stops_on_bad_statement() {
    let err = parse_quad_document("<a> <b> <c>\n<d> <e> <f> .").unwrap_err();

    insta::assert_snapshot!(err.to_string().lines().next().unwrap(), @r#"while parsing PERIOD at 2:1: expected PERIOD but got IRIREF "d""#);
}

#[test]
fn document_reports_trailing_garbage() {
    let Err(Error::Parse(err)) = parse_quad_document("<a> <b> <c> .\n$") else {
        panic!("expected a parse error");
    };

    assert_eq!(err.kind(), ErrorKind::ReadFault);
    insta::assert_snapshot!(err.summary(), @"expected a statement but got read fault: unexpected character '$' at 2:1");
}

#[test]
fn serializes_to_json() {
    let quad = parse_quad(r#"<s> <name> "Alice"@en ."#).unwrap();

    insta::assert_snapshot!(
        serde_json::to_string(&quad).unwrap(),
        @r#"{"subject":"s","predicate":"name.en","object_id":"","object_value":"Alice"}"#
    );
}
