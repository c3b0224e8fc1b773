use crate::{Byte, ByteStream, Colors, Context, PrintTracer, Seq, Verbosity};

#[test]
fn default_verbosity_shows_commits() {
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    {
        let mut ctx = Context::new(ByteStream::from("ab")).with_tracer(&mut tracer);
        ctx.parse(&Seq((Byte(b'a'), Byte(b'b')))).unwrap();
    }

    assert_eq!(
        tracer.lines(),
        [
            "  + Byte('a') 1:1..1:2",
            "  + Byte('b') 1:2..1:3",
            "+ Seq 1:1..1:3",
        ]
    );
}

#[test]
fn verbose_shows_entries_and_backtracks() {
    let mut tracer = PrintTracer::new(Verbosity::Verbose, Colors::OFF);
    {
        let mut ctx = Context::new(ByteStream::from("a")).with_tracer(&mut tracer);
        ctx.parse(&Byte(b'x')).unwrap_err();
    }

    assert_eq!(
        tracer.lines(),
        [
            "> Byte('x') @ 1:1",
            "- Byte('x') @ 1:1: expected 'x' but got 'a'",
        ]
    );
}

#[test]
fn colored_lines_carry_escape_codes() {
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::ON);
    {
        let mut ctx = Context::new(ByteStream::from("a")).with_tracer(&mut tracer);
        ctx.parse(&Byte(b'a')).unwrap();
    }

    let line = &tracer.lines()[0];
    assert!(line.starts_with("\x1b[32m+\x1b[0m \x1b[34mByte('a')"));
    assert!(Colors::ON.is_enabled());
    assert!(!Colors::new(false).is_enabled());
}
