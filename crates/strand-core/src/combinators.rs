//! Structural combinators: sequence, ordered choice, optional, repetition.
//!
//! Alternatives and sequence elements are given as tuples, so each element
//! keeps its own type and `Seq` can return a tuple of outputs.

use std::borrow::Cow;

use serde::Serialize;

use crate::invariants::assert_repeat_bounds;
use crate::{Context, Error, ErrorKind, PResult, Parser, Stream};

/// Runs each parser in order. Fails on the first failing element.
#[derive(Debug, Clone, Copy)]
pub struct Seq<T>(pub T);

/// Ordered alternation: the first alternative that succeeds wins.
///
/// Every alternative tried and abandoned is recorded as a sibling failure,
/// so the error for "nothing matched" lists them all.
#[derive(Debug, Clone, Copy)]
pub struct OneOf<T>(pub T);

/// Output of [`OneOf`]: which alternative matched and what it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice<O> {
    pub index: usize,
    pub value: O,
}

/// Optional parser. Never fails except on fatal errors.
#[derive(Debug, Clone, Copy)]
pub struct Maybe<P>(pub P);

/// Bounded repetition. `max == 0` means unbounded.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<P> {
    min: usize,
    max: usize,
    parser: P,
}

macro_rules! impl_seq {
    ($($P:ident $idx:tt),+) => {
        impl<S: Stream, $($P: Parser<S>),+> Parser<S> for Seq<($($P,)+)> {
            type Output = ($($P::Output,)+);

            fn name(&self) -> Cow<'static, str> {
                Cow::Borrowed("Seq")
            }

            fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<Self::Output> {
                Ok(($(ctx.parse(&self.0.$idx)?,)+))
            }
        }
    };
}

impl_seq!(A 0);
impl_seq!(A 0, B 1);
impl_seq!(A 0, B 1, C 2);
impl_seq!(A 0, B 1, C 2, D 3);
impl_seq!(A 0, B 1, C 2, D 3, E 4);
impl_seq!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_seq!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_seq!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

macro_rules! impl_one_of {
    ($n:literal; $A:ident $a:tt $(, $P:ident $idx:tt)*) => {
        impl<S: Stream, $A: Parser<S> $(, $P: Parser<S, Output = $A::Output>)*> Parser<S>
            for OneOf<($A, $($P,)*)>
        {
            type Output = Choice<$A::Output>;

            fn name(&self) -> Cow<'static, str> {
                Cow::Borrowed("OneOf")
            }

            fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<Self::Output> {
                if let Some(value) = ctx.try_parse(&self.0.$a)? {
                    return Ok(Choice { index: $a, value });
                }
                $(
                    if let Some(value) = ctx.try_parse(&self.0.$idx)? {
                        return Ok(Choice { index: $idx, value });
                    }
                )*
                Err(ctx.fail(format!("none of {} alternatives matched", $n)))
            }
        }
    };
}

impl_one_of!(1; A 0);
impl_one_of!(2; A 0, B 1);
impl_one_of!(3; A 0, B 1, C 2);
impl_one_of!(4; A 0, B 1, C 2, D 3);
impl_one_of!(5; A 0, B 1, C 2, D 3, E 4);
impl_one_of!(6; A 0, B 1, C 2, D 3, E 4, F 5);
impl_one_of!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_one_of!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

impl<S: Stream, P: Parser<S>> Parser<S> for Maybe<P> {
    type Output = Option<P::Output>;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Maybe")
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<Self::Output> {
        ctx.try_parse(&self.0)
    }
}

impl<P> Repeat<P> {
    /// Between `min` and `max` repetitions; `max == 0` is unbounded.
    ///
    /// # Panics
    /// If `max` is non-zero and smaller than `min`.
    pub fn new(min: usize, max: usize, parser: P) -> Self {
        assert_repeat_bounds(min, max);
        Self { min, max, parser }
    }

    /// Zero or more.
    pub fn star(parser: P) -> Self {
        Self::new(0, 0, parser)
    }

    /// One or more.
    pub fn plus(parser: P) -> Self {
        Self::new(1, 0, parser)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl<S: Stream, P: Parser<S>> Parser<S> for Repeat<P> {
    type Output = Vec<P::Output>;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Repeat")
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<Self::Output> {
        let unbounded = self.max == 0;
        let mut items = Vec::new();

        while unbounded || items.len() < self.max {
            let before = ctx.stream().offset();
            let Some(item) = ctx.try_parse(&self.parser)? else {
                break;
            };
            // A zero-width success would repeat forever.
            if unbounded && ctx.stream().offset() == before {
                return Err(Error::new(ErrorKind::NoProgress, ctx.position()).with_message(
                    format!("{} succeeded without consuming input", self.parser.name()),
                ));
            }
            items.push(item);
        }

        if items.len() < self.min {
            return Err(ctx.fail(format!(
                "got {} repetitions, minimum is {}",
                items.len(),
                self.min
            )));
        }
        Ok(items)
    }
}
