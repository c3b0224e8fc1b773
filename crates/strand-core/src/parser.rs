//! The parser capability and its adapters.

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::{
    Byte, Bytes, BytesWhile, Context, Maybe, OneOf, PResult, Regex, Repeat, Seq, Stream,
};

/// Anything that can consume zero or more tokens from a [`Context`].
///
/// A parser either succeeds (the context has advanced, or legitimately has
/// not for zero-width matches) or fails with an [`Error`](crate::Error).
/// Parsers never run directly: [`Context::parse`] wraps every invocation in
/// a child frame so that failures roll back.
pub trait Parser<S: Stream> {
    type Output;

    /// Stable, human-readable tag used in diagnostics.
    fn name(&self) -> Cow<'static, str>;

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<Self::Output>;
}

impl<S: Stream, P: Parser<S> + ?Sized> Parser<S> for &P {
    type Output = P::Output;

    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<Self::Output> {
        (**self).parse(ctx)
    }
}

/// Grammar types that know how to parse themselves.
///
/// `NAME` is the explicit tag shown in diagnostics.
pub trait Rule<S: Stream>: Sized {
    const NAME: &'static str;

    fn parse(ctx: &mut Context<'_, S>) -> PResult<Self>;
}

/// Parser adapter for a [`Rule`] type.
pub struct RuleParser<T>(PhantomData<fn() -> T>);

/// Parser for the grammar type `T`.
pub const fn rule<T>() -> RuleParser<T> {
    RuleParser(PhantomData)
}

impl<T> Clone for RuleParser<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RuleParser<T> {}

impl<S: Stream, T: Rule<S>> Parser<S> for RuleParser<T> {
    type Output = T;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(T::NAME)
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<T> {
        T::parse(ctx)
    }
}

/// A closure with a name.
pub struct ParseFn<F, O> {
    name: &'static str,
    f: F,
    _output: PhantomData<fn() -> O>,
}

impl<F, O> ParseFn<F, O> {
    pub fn new(name: &'static str, f: F) -> Self {
        Self {
            name,
            f,
            _output: PhantomData,
        }
    }
}

impl<S: Stream, F, O> Parser<S> for ParseFn<F, O>
where
    F: Fn(&mut Context<'_, S>) -> PResult<O>,
{
    type Output = O;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name)
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<O> {
        (self.f)(ctx)
    }
}

/// Transforms the output of a parser. See [`ParserExt::map`].
pub struct Map<P, F, O> {
    parser: P,
    f: F,
    _output: PhantomData<fn() -> O>,
}

impl<S: Stream, P: Parser<S>, F, O> Parser<S> for Map<P, F, O>
where
    F: Fn(P::Output) -> O,
{
    type Output = O;

    fn name(&self) -> Cow<'static, str> {
        self.parser.name()
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<O> {
        self.parser.parse(ctx).map(&self.f)
    }
}

/// Renames a parser in diagnostics. See [`ParserExt::named`].
pub struct Named<P> {
    parser: P,
    name: &'static str,
}

impl<S: Stream, P: Parser<S>> Parser<S> for Named<P> {
    type Output = P::Output;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name)
    }

    fn parse(&self, ctx: &mut Context<'_, S>) -> PResult<P::Output> {
        self.parser.parse(ctx)
    }
}

/// Output and naming adapters for the combinator types.
///
/// The adapters do not fix a stream type, so closures passed to
/// [`map`](Self::map) usually need an annotated parameter.
pub trait ParserExt: Sized {
    /// Map the output. The mapped parser keeps the inner parser's frame.
    fn map<F, O>(self, f: F) -> Map<Self, F, O> {
        Map {
            parser: self,
            f,
            _output: PhantomData,
        }
    }

    fn named(self, name: &'static str) -> Named<Self> {
        Named { parser: self, name }
    }
}

impl ParserExt for Byte {}
impl<L> ParserExt for Bytes<L> {}
impl<F> ParserExt for BytesWhile<F> {}
impl ParserExt for Regex {}
impl<T> ParserExt for Seq<T> {}
impl<T> ParserExt for OneOf<T> {}
impl<P> ParserExt for Maybe<P> {}
impl<P> ParserExt for Repeat<P> {}
impl<T> ParserExt for RuleParser<T> {}
impl<F, O> ParserExt for ParseFn<F, O> {}
impl<P, F, O> ParserExt for Map<P, F, O> {}
impl<P> ParserExt for Named<P> {}
