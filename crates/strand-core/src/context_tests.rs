use indoc::indoc;

use crate::{
    Byte, ByteStream, Bytes, Context, ErrorKind, Location, PResult, ParseFn, Parser, Rule, rule,
};

struct Nested;

impl<'a> Rule<ByteStream<'a>> for Nested {
    const NAME: &'static str = "Nested";

    fn parse(ctx: &mut Context<'_, ByteStream<'a>>) -> PResult<Self> {
        ctx.rule::<Nested>()
    }
}

#[test]
fn parse_commits_on_success() {
    let mut ctx = Context::new(ByteStream::from("ab"));

    ctx.parse(&Byte(b'a')).unwrap();

    assert_eq!(ctx.position(), Location::new(1, 1, 2));
    assert_eq!(ctx.depth(), 0);
}

#[test]
fn parse_restores_on_failure() {
    let mut ctx = Context::new(ByteStream::from("abd"));

    let err = ctx.parse(&Bytes("abc")).unwrap_err();

    assert_eq!(err.position(), Location::new(2, 1, 3));
    assert_eq!(ctx.position(), Location::START);
}

#[test]
fn try_parse_records_sibling() {
    let mut ctx = Context::new(ByteStream::from("b"));

    assert_eq!(ctx.try_parse(&Byte(b'a')), Ok(None));
    assert_eq!(ctx.try_parse(&Byte(b'b')), Ok(Some(b'b')));
    assert_eq!(ctx.siblings().len(), 1);
    assert_eq!(ctx.siblings()[0].frames()[0].parser, "Byte('a')");
}

#[test]
fn child_siblings_discarded_on_success() {
    let mut ctx = Context::new(ByteStream::from("b"));
    let either = ParseFn::new("either", |ctx: &mut Context<'_, ByteStream<'_>>| {
        if let Some(b) = ctx.try_parse(&Byte(b'a'))? {
            return Ok(b);
        }
        ctx.parse(&Byte(b'b'))
    });

    assert_eq!(ctx.parse(&either), Ok(b'b'));
    assert!(ctx.siblings().is_empty());
}

#[test]
fn parse_or_error_folds_root_siblings() {
    let mut ctx = Context::new(ByteStream::from("c"));

    assert_eq!(ctx.try_parse(&Byte(b'a')), Ok(None));
    let err = ctx.parse_or_error(&Byte(b'b')).unwrap_err();

    assert_eq!(
        err.render(),
        indoc! {"
            while parsing Byte('b') at 1:1: expected 'b' but got 'c'
              after:
                while parsing Byte('a') at 1:1: expected 'a' but got 'c'"}
    );
    assert!(ctx.siblings().is_empty());
}

#[test]
fn unexpected_at_end_of_input() {
    let ctx = Context::new(ByteStream::from(""));
    let err = ctx.unexpected("a name");

    assert_eq!(err.kind(), ErrorKind::EndOfInput);
    insta::assert_snapshot!(err.summary(), @"expected a name but got end of input at 1:1");
}

#[test]
fn fail_uses_current_position() {
    let mut ctx = Context::new(ByteStream::from("xy"));
    ctx.advance();

    let err = ctx.fail("boom");

    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.position(), Location::new(1, 1, 2));
    assert_eq!(err.message(), Some("boom"));
}

#[test]
fn advance_by_stops_at_end() {
    let mut ctx = Context::new(ByteStream::from("abc"));
    ctx.advance_by(10);

    assert!(!ctx.good());
    assert_eq!(ctx.position().offset, 3);
}

#[test]
fn recursion_limit_fails_closed() {
    let mut ctx = Context::new(ByteStream::from("")).with_recursion_limit(Some(8));
    let err = ctx.parse_or_error(&rule::<Nested>()).err().unwrap();

    assert_eq!(err.kind(), ErrorKind::RecursionLimit);
    assert!(err.is_fatal());
    assert_eq!(err.frames().len(), 9);
    assert!(err.frames().iter().all(|f| f.parser == "Nested"));
}

#[test]
fn recursion_limit_crosses_try_parse() {
    let mut ctx = Context::new(ByteStream::from("")).with_recursion_limit(Some(4));
    let err = ctx.try_parse(&rule::<Nested>()).err().unwrap();

    assert_eq!(err.kind(), ErrorKind::RecursionLimit);
    assert!(ctx.siblings().is_empty());
}

#[test]
fn rule_parser_uses_explicit_name() {
    let p = rule::<Nested>();

    assert_eq!(Parser::<ByteStream<'_>>::name(&p), "Nested");
}
