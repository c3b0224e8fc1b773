//! Literal and predicate-driven byte matchers.

use std::borrow::Cow;

use crate::{Context, Describe, PResult, Parser, Stream};

/// Matches exactly one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Byte(pub u8);

/// Matches a literal byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes<L>(pub L);

/// Consumes bytes while the predicate holds. A zero-width match succeeds;
/// callers needing "at least one" must check the output length.
#[derive(Clone, Copy)]
pub struct BytesWhile<F>(pub F);

impl<S: Stream<Token = u8>> Parser<S> for Byte {
    type Output = u8;

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Byte({})", self.0.describe()))
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<u8> {
        expect_byte(ctx, self.0)?;
        Ok(self.0)
    }
}

impl<S: Stream<Token = u8>, L: AsRef<[u8]>> Parser<S> for Bytes<L> {
    type Output = ();

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Bytes(\"{}\")", self.0.as_ref().escape_ascii()))
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<()> {
        for &want in self.0.as_ref() {
            expect_byte(ctx, want)?;
        }
        Ok(())
    }
}

impl<S: Stream<Token = u8>, F: Fn(u8) -> bool> Parser<S> for BytesWhile<F> {
    type Output = Vec<u8>;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("BytesWhile")
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<Vec<u8>> {
        let mut run = Vec::new();
        while let Some(b) = ctx.peek() {
            if !(self.0)(b) {
                break;
            }
            run.push(b);
            ctx.advance();
        }
        Ok(run)
    }
}

fn expect_byte<S: Stream<Token = u8>>(ctx: &mut Context<'_, S>, want: u8) -> PResult<()> {
    match ctx.peek() {
        Some(got) if got == want => {
            ctx.advance();
            Ok(())
        }
        _ => Err(ctx.unexpected(want.describe())),
    }
}
