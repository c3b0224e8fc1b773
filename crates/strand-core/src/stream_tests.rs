use crate::{ByteStream, Describe, Location, Positioned, Stream, StreamError, TokenStream};

#[derive(Debug)]
struct Tok {
    loc: Location,
    text: &'static str,
}

impl Positioned for Tok {
    fn location(&self) -> Location {
        self.loc
    }
}

impl Describe for Tok {
    fn describe(&self) -> String {
        self.text.to_string()
    }
}

#[test]
fn byte_stream_tracks_lines_and_columns() {
    let mut s = ByteStream::from("ab\ncd");
    for _ in 0..3 {
        s = s.advance();
    }

    assert_eq!(s.position(), Location::new(3, 2, 1));
    assert_eq!(s.token(), Ok(b'c'));
    assert_eq!(s.remaining(), b"cd");
}

#[test]
fn byte_stream_advance_leaves_receiver_untouched() {
    let start = ByteStream::from("xy");
    let next = start.advance();

    assert_eq!(start.token(), Ok(b'x'));
    assert_eq!(next.token(), Ok(b'y'));
    assert_eq!(start.offset(), 0);
    assert_eq!(next.offset(), 1);
}

#[test]
fn byte_stream_end_of_input() {
    let s = ByteStream::from("z").advance();

    assert!(!s.good());
    assert_eq!(s.error(), Some(StreamError::EndOfInput));
    assert_eq!(s.token(), Err(StreamError::EndOfInput));
    assert_eq!(s.advance().offset(), 1);
}

#[test]
fn token_stream_reports_fault_after_last_token() {
    let tokens = [Tok {
        loc: Location::new(0, 1, 1),
        text: "<a>",
    }];
    let end = Location::new(4, 1, 5);
    let s = TokenStream::new(&tokens, end).with_fault(Some("bad escape"));

    assert_eq!(s.token().map(|t| t.text), Ok("<a>"));
    let s = s.advance();
    assert_eq!(s.position(), end);
    assert_eq!(
        s.error(),
        Some(StreamError::ReadFault("bad escape".to_string()))
    );
}

#[test]
fn token_stream_without_fault_ends_cleanly() {
    let tokens: [Tok; 0] = [];
    let s = TokenStream::new(&tokens, Location::START);

    assert_eq!(s.error(), Some(StreamError::EndOfInput));
    assert!(s.remaining().is_empty());
}

#[test]
fn describe_escapes_bytes() {
    assert_eq!(b'a'.describe(), "'a'");
    assert_eq!(b'\n'.describe(), "'\\n'");
}
