use indoc::indoc;
use strand_core::{ByteStream, Context, Error, ErrorKind, Rule, rule};

use super::{
    Argument, Arguments, Document, Field, Name, OperationType, Selection, SelectionSet, Value,
};
use crate::parse_query_document;

fn parse<T: for<'a> Rule<ByteStream<'a>>>(src: &str) -> Result<T, Error> {
    Context::new(ByteStream::from(src)).parse_or_error(&rule::<T>())
}

fn name(s: &str) -> Name {
    Name(s.to_string())
}

fn arg(n: &str, v: &str) -> Argument {
    Argument {
        name: name(n),
        value: Value(v.to_string()),
    }
}

fn field(n: &str, args: Vec<Argument>, children: Vec<Field>) -> Field {
    Field {
        name: name(n),
        arguments: Arguments(args),
        selections: SelectionSet(children.into_iter().map(Selection::Field).collect()),
    }
}

#[test]
fn field_with_arguments_and_empty_selection_set() {
    let parsed: Field = parse("friends (first: 10, after: 3) { }").unwrap();

    assert_eq!(
        parsed,
        field(
            "friends",
            vec![arg("first", "10"), arg("after", "3")],
            vec![]
        )
    );
}

#[test]
fn trailing_comment_is_discarded() {
    let parsed: Field = parse(indoc! {"
        friends(xid:what) {  # xid would be ignored.
                    }"})
    .unwrap();

    assert_eq!(parsed, field("friends", vec![arg("xid", "what")], vec![]));
}

#[test]
fn nested_selection_set() {
    let parsed: SelectionSet = parse(indoc! {"
        {
            name,
            friends(xid:what) {  # xid would be ignored.
            }
        }"})
    .unwrap();

    assert_eq!(
        parsed,
        SelectionSet(vec![
            Selection::Field(field("name", vec![], vec![])),
            Selection::Field(field("friends", vec![arg("xid", "what")], vec![])),
        ])
    );
}

#[test]
fn names_round_trip() {
    for input in ["friends", "_id", ".dotted", "a-b.c_d", "X9", "first-name", "_"] {
        let parsed: Name = input.parse().unwrap();
        assert_eq!(parsed.as_str(), input);
    }
}

#[test]
fn names_never_start_with_a_digit() {
    for input in ["1abc", "9", "0_x"] {
        assert!(input.parse::<Name>().is_err(), "{input} accepted");
    }
}

#[test]
fn name_rejects_other_leading_bytes() {
    for input in ["", "-x", "{", " a"] {
        assert!(input.parse::<Name>().is_err(), "{input:?} accepted");
    }
}

#[test]
fn name_must_span_whole_input() {
    let err = "a b".parse::<Name>().unwrap_err();

    insta::assert_snapshot!(err.summary(), @"expected end of name but got ' ' at 1:2");
}

#[test]
fn arguments_forms() {
    let empty: Field = parse("f()").unwrap();
    let spaced: Field = parse("f(a:1 b:2)").unwrap();
    let trailing: Field = parse("f(a: 1,)").unwrap();

    assert!(empty.arguments.0.is_empty());
    assert_eq!(spaced.arguments.0, vec![arg("a", "1"), arg("b", "2")]);
    assert_eq!(trailing.arguments.0, vec![arg("a", "1")]);
}

#[test]
fn argument_list_does_not_cross_lines() {
    let err = parse::<Field>("f(a: 1,\n b: 2)").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.frames().last().unwrap().parser, "Field");
}

#[test]
fn value_must_be_non_empty() {
    let err = parse::<Field>("f(a: )").unwrap_err();

    insta::assert_snapshot!(err.summary(), @"expected a value but got ')' at 1:6");
    let names: Vec<_> = err.frames().iter().map(|f| &*f.parser).collect();
    assert_eq!(names, ["Value", "Argument", "Arguments", "Field"]);
}

#[test]
fn document_with_operations() {
    let doc = parse_query_document(indoc! {"
        query { me }
        mutation {
            set(x: 1)
        }
        # trailing comment
    "})
    .unwrap();

    let kinds: Vec<_> = doc.operations.iter().map(|op| op.kind).collect();
    assert_eq!(kinds, [OperationType::Query, OperationType::Mutation]);
    assert_eq!(
        doc.operations[1].selections,
        SelectionSet(vec![Selection::Field(field(
            "set",
            vec![arg("x", "1")],
            vec![]
        ))])
    );
}

#[test]
fn named_operation() {
    let doc = parse_query_document("query friendsOfMe { friends { name } }").unwrap();
    let op = &doc.operations[0];

    assert_eq!(op.kind, OperationType::Query);
    assert_eq!(op.name, Some(name("friendsOfMe")));
    assert_eq!(op.selections.0.len(), 1);
}

#[test]
fn keyword_needs_a_boundary() {
    assert!(parse_query_document("queryx { a }").is_err());
    assert_eq!(
        parse_query_document("query{ a }").unwrap().operations[0].kind,
        OperationType::Query
    );
}

#[test]
fn empty_documents() {
    assert_eq!(parse_query_document("").unwrap(), Document::default());
    assert_eq!(
        parse_query_document("  # nothing here\n\n").unwrap(),
        Document::default()
    );
}

#[test]
fn query_selects_the_single_query() {
    let doc = parse_query_document("{ a } mutation { b }").unwrap();
    let op = doc.query().unwrap().unwrap();

    assert_eq!(op.kind, OperationType::Unspecified);
    assert_eq!(op.selections.0[0].as_field().name, name("a"));
}

#[test]
fn multiple_queries_parse_but_do_not_select() {
    let doc = parse_query_document("{ a } query { b }").unwrap();

    assert_eq!(doc.operations.len(), 2);
    assert_eq!(doc.query(), Err(crate::Error::MultipleQueryOperations));
}

#[test]
fn mutation_only_document_has_no_query() {
    let doc = parse_query_document("mutation { a }").unwrap();

    assert_eq!(doc.query(), Ok(None));
}

#[test]
fn unterminated_selection_set_reaches_end_of_input() {
    let err = parse_query_document("{ a").unwrap_err();
    let crate::Error::Parse(err) = err else {
        panic!("expected a parse error");
    };

    assert_eq!(err.kind(), ErrorKind::EndOfInput);
    assert_eq!(err.frames().last().unwrap().parser, "Document");
}

#[test]
fn serializes_to_json() {
    let doc = parse_query_document("{ a(x: 1) }").unwrap();

    insta::assert_snapshot!(
        serde_json::to_string(&doc).unwrap(),
        @r#"{"operations":[{"kind":"unspecified","selections":[{"field":{"name":"a","arguments":[{"name":"x","value":"1"}],"selections":[]}}]}]}"#
    );
}
