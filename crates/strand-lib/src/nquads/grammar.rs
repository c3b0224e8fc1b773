//! Statement rules over the token stream.

use std::borrow::Cow;

use strand_core::{Context, Maybe, OneOf, PResult, Parser, Rule, Stream, StreamError, TokenStream};

use super::NQuad;
use super::token::{Token, TokenKind};

type Tokens<'a> = TokenStream<'a, Token>;
type Ctx<'c, 'a> = Context<'c, Tokens<'a>>;

/// Matches one token of a given kind.
#[derive(Clone, Copy)]
struct Expect {
    kind: TokenKind,
    /// The token must be on the same line as the previous one.
    inline: bool,
}

const fn first(kind: TokenKind) -> Expect {
    Expect {
        kind,
        inline: false,
    }
}

const fn inline(kind: TokenKind) -> Expect {
    Expect { kind, inline: true }
}

impl<'a> Parser<Tokens<'a>> for Expect {
    type Output = &'a Token;

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.kind.as_str())
    }

    fn parse(&self, ctx: &mut Ctx<'_, 'a>) -> PResult<&'a Token> {
        match ctx.peek() {
            Some(token) if token.kind == self.kind => {
                if self.inline && token.line_break {
                    return Err(ctx.fail(format!("expected {} on the same line", self.kind)));
                }
                ctx.advance();
                Ok(token)
            }
            _ => Err(ctx.unexpected(self.kind)),
        }
    }
}

/// Language tag or datatype following a literal object.
enum LiteralSuffix {
    Language(String),
    Datatype(String),
}

impl<'a> Rule<Tokens<'a>> for LiteralSuffix {
    const NAME: &'static str = "LiteralSuffix";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        if let Some(tag) = ctx.try_parse(&inline(TokenKind::LangTag))? {
            return Ok(LiteralSuffix::Language(tag.value.clone()));
        }
        ctx.parse(&inline(TokenKind::DoubleHat))?;
        let iri = ctx.parse(&inline(TokenKind::IriRef))?;
        Ok(LiteralSuffix::Datatype(iri.value.clone()))
    }
}

impl<'a> Rule<Tokens<'a>> for NQuad {
    const NAME: &'static str = "NQuad";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        let subject = ctx.parse(&OneOf((
            first(TokenKind::IriRef),
            first(TokenKind::BlankNodeLabel),
        )))?;
        let mut predicate = ctx.parse(&inline(TokenKind::IriRef))?.value.clone();

        let object = ctx.parse(&OneOf((
            inline(TokenKind::IriRef),
            inline(TokenKind::BlankNodeLabel),
            inline(TokenKind::Literal),
        )))?;
        let (object_id, object_value) = match object.value.kind {
            TokenKind::Literal => (String::new(), object.value.value.clone().into_bytes()),
            _ => (object.value.value.clone(), Vec::new()),
        };

        if object.value.kind == TokenKind::Literal {
            let suffix = match ctx.peek().map(|t| t.kind) {
                Some(TokenKind::LangTag | TokenKind::DoubleHat) => {
                    Some(ctx.rule::<LiteralSuffix>()?)
                }
                _ => None,
            };
            match suffix {
                Some(LiteralSuffix::Language(tag)) => {
                    predicate.push('.');
                    predicate.push_str(&tag);
                }
                Some(LiteralSuffix::Datatype(iri)) => {
                    predicate.push_str(".@@");
                    predicate.push_str(&iri);
                }
                None => {}
            }
        }

        let label = ctx.parse(&Maybe(OneOf((
            inline(TokenKind::IriRef),
            inline(TokenKind::BlankNodeLabel),
        ))))?;
        ctx.parse(&inline(TokenKind::Period))?;

        Ok(NQuad {
            subject: subject.value.value.clone(),
            predicate,
            object_id,
            object_value,
            label: label.map(|choice| choice.value.value.clone()),
        })
    }
}

/// Statements up to end of input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuadDocument(pub Vec<NQuad>);

impl<'a> Rule<Tokens<'a>> for QuadDocument {
    const NAME: &'static str = "QuadDocument";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        let mut quads = Vec::new();
        while ctx.good() {
            quads.push(ctx.rule::<NQuad>()?);
        }
        if let Some(StreamError::ReadFault(_)) = ctx.stream().error() {
            return Err(ctx.unexpected("a statement"));
        }
        Ok(QuadDocument(quads))
    }
}
