use crate::{Byte, ByteStream, Bytes, BytesWhile, Context, ErrorKind, Location};

#[test]
fn byte_matches_and_advances() {
    let mut ctx = Context::new(ByteStream::from("{}"));

    assert_eq!(ctx.parse(&Byte(b'{')), Ok(b'{'));
    assert_eq!(ctx.position(), Location::new(1, 1, 2));
}

#[test]
fn byte_mismatch_names_both_bytes() {
    let mut ctx = Context::new(ByteStream::from("x"));
    let err = ctx.parse(&Byte(b'{')).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Syntax);
    insta::assert_snapshot!(err.summary(), @"expected '{' but got 'x' at 1:1");
    assert_eq!(ctx.position(), Location::START);
}

#[test]
fn byte_at_end_of_input() {
    let mut ctx = Context::new(ByteStream::from(""));
    let err = ctx.parse(&Byte(b'}')).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EndOfInput);
    insta::assert_snapshot!(err.summary(), @"expected '}' but got end of input at 1:1");
}

#[test]
fn bytes_reports_mismatch_position() {
    let mut ctx = Context::new(ByteStream::from("quack"));
    let err = ctx.parse(&Bytes("query")).unwrap_err();

    insta::assert_snapshot!(
        err.render(),
        @r#"while parsing Bytes("query") at 1:1: expected 'e' but got 'a' (at 1:3)"#
    );
    assert_eq!(ctx.position(), Location::START);
}

#[test]
fn bytes_whole_literal() {
    let mut ctx = Context::new(ByteStream::from("query {"));

    assert_eq!(ctx.parse(&Bytes("query")), Ok(()));
    assert_eq!(ctx.stream().remaining(), b" {");
}

#[test]
fn bytes_while_is_greedy() {
    let mut ctx = Context::new(ByteStream::from("123abc"));
    let digits = ctx.parse(&BytesWhile(|b: u8| b.is_ascii_digit())).unwrap();

    assert_eq!(digits, b"123");
    assert_eq!(ctx.stream().remaining(), b"abc");
}

#[test]
fn bytes_while_zero_width_is_legal() {
    let mut ctx = Context::new(ByteStream::from("abc"));
    let digits = ctx.parse(&BytesWhile(|b: u8| b.is_ascii_digit())).unwrap();

    assert!(digits.is_empty());
    assert_eq!(ctx.position(), Location::START);
}
