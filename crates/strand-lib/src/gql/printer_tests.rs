use indoc::indoc;

use super::printer::{DocumentPrinter, dump};
use crate::parse_query_document;

#[test]
fn dump_nested_document() {
    let doc = parse_query_document(indoc! {"
        query me {
            name,
            friends(first: 10, after: 3) {
                name
            }
        }
        { other }
    "})
    .unwrap();

    assert_eq!(
        dump(&doc),
        indoc! {"
            Document
              Operation query me
                Field name
                Field friends
                  Argument first = 10
                  Argument after = 3
                  Field name
              Operation
                Field other
        "}
    );
}

#[test]
fn dump_empty_document() {
    let doc = parse_query_document("").unwrap();

    assert_eq!(dump(&doc), "Document\n");
}

#[test]
fn colored_dump_marks_kinds() {
    let doc = parse_query_document("{ a(x: 1) }").unwrap();
    let out = DocumentPrinter::new(&doc).colored(true).dump();

    assert!(out.starts_with("\x1b[34mDocument\x1b[0m\n"));
    assert!(out.contains("\x1b[32m1\x1b[0m"));
}
