//! Rules for the query language over a byte stream.

use std::borrow::Cow;
use std::sync::LazyLock;

use strand_core::{
    Byte, ByteStream, Bytes, BytesWhile, Context, Maybe, Named, OneOf, PResult, Parser,
    ParserExt, Regex, Repeat, Rule, rule,
};

use super::ast::{
    Argument, Arguments, Document, Field, Name, Operation, OperationType, Selection, SelectionSet,
    Value,
};

type Ctx<'c, 'a> = Context<'c, ByteStream<'a>>;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid pattern")
}

/// Spaces, tabs, newlines and `#` comments.
static INSIGNIFICANT: LazyLock<Named<Repeat<OneOf<(Regex, Regex)>>>> = LazyLock::new(|| {
    Repeat::star(OneOf((regex(r"[ \t\r\n]+"), regex(r"#[^\n]*")))).named("whitespace")
});

/// Argument lists never cross a line.
static INLINE: LazyLock<Named<Maybe<Regex>>> =
    LazyLock::new(|| Maybe(regex(r"[ \t]+")).named("inline whitespace"));

static NAME: LazyLock<Regex> = LazyLock::new(|| regex(r"[_A-Za-z.][-._0-9A-Za-z]*"));

fn skip(ctx: &mut Ctx<'_, '_>) -> PResult<()> {
    ctx.parse(&*INSIGNIFICANT)?;
    Ok(())
}

fn skip_inline(ctx: &mut Ctx<'_, '_>) -> PResult<()> {
    ctx.parse(&*INLINE)?;
    Ok(())
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-')
}

/// A keyword not followed by another name byte.
struct Keyword(&'static str);

impl<'a> Parser<ByteStream<'a>> for Keyword {
    type Output = ();

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.0)
    }

    fn parse(&self, ctx: &mut Ctx<'_, 'a>) -> PResult<()> {
        ctx.parse(&Bytes(self.0))?;
        if ctx.peek().is_some_and(is_name_byte) {
            return Err(ctx.fail(format!("expected end of keyword `{}`", self.0)));
        }
        Ok(())
    }
}

impl<'a> Rule<ByteStream<'a>> for Document {
    const NAME: &'static str = "Document";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        let mut operations = Vec::new();
        loop {
            skip(ctx)?;
            if !ctx.good() {
                break;
            }
            operations.push(ctx.rule::<Operation>()?);
        }
        Ok(Document { operations })
    }
}

impl<'a> Rule<ByteStream<'a>> for Operation {
    const NAME: &'static str = "Operation";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        let keyword = OneOf((Keyword("query"), Keyword("mutation")));
        let kind = match ctx.try_parse(&keyword)? {
            Some(choice) if choice.index == 0 => OperationType::Query,
            Some(_) => OperationType::Mutation,
            None => OperationType::Unspecified,
        };

        let mut name = None;
        if kind != OperationType::Unspecified {
            skip(ctx)?;
            name = ctx.try_parse(&rule::<Name>())?;
        }

        skip(ctx)?;
        let selections = ctx.rule::<SelectionSet>()?;
        Ok(Operation {
            kind,
            name,
            selections,
        })
    }
}

impl<'a> Rule<ByteStream<'a>> for SelectionSet {
    const NAME: &'static str = "SelectionSet";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        ctx.parse(&Byte(b'{'))?;
        let mut selections = Vec::new();
        loop {
            skip(ctx)?;
            if ctx.try_parse(&Byte(b'}'))?.is_some() {
                return Ok(SelectionSet(selections));
            }
            selections.push(ctx.rule::<Selection>()?);
            ctx.parse(&BytesWhile(|b: u8| b.is_ascii_whitespace() || b == b','))?;
        }
    }
}

impl<'a> Rule<ByteStream<'a>> for Selection {
    const NAME: &'static str = "Selection";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        Ok(Selection::Field(ctx.rule::<Field>()?))
    }
}

impl<'a> Rule<ByteStream<'a>> for Field {
    const NAME: &'static str = "Field";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        let name = ctx.rule::<Name>()?;
        skip(ctx)?;

        // An opening bracket commits to the construct it starts.
        let arguments = match ctx.peek() {
            Some(b'(') => ctx.rule::<Arguments>()?,
            _ => Arguments::default(),
        };
        skip(ctx)?;

        let selections = match ctx.peek() {
            Some(b'{') => ctx.rule::<SelectionSet>()?,
            _ => SelectionSet::default(),
        };
        skip(ctx)?;

        Ok(Field {
            name,
            arguments,
            selections,
        })
    }
}

impl<'a> Rule<ByteStream<'a>> for Arguments {
    const NAME: &'static str = "Arguments";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        ctx.parse(&Byte(b'('))?;
        let mut args = Vec::new();
        loop {
            skip_inline(ctx)?;
            if ctx.try_parse(&Byte(b')'))?.is_some() {
                return Ok(Arguments(args));
            }
            args.push(ctx.rule::<Argument>()?);
            skip_inline(ctx)?;
            ctx.parse(&Maybe(Byte(b',')))?;
        }
    }
}

impl<'a> Rule<ByteStream<'a>> for Argument {
    const NAME: &'static str = "Argument";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        let name = ctx.rule::<Name>()?;
        skip_inline(ctx)?;
        ctx.parse(&Byte(b':'))?;
        skip_inline(ctx)?;
        let value = ctx.rule::<Value>()?;
        Ok(Argument { name, value })
    }
}

impl<'a> Rule<ByteStream<'a>> for Name {
    const NAME: &'static str = "Name";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        let found = ctx.parse(&*NAME)?;
        Ok(Name(found.text))
    }
}

impl<'a> Rule<ByteStream<'a>> for Value {
    const NAME: &'static str = "Value";

    fn parse(ctx: &mut Ctx<'_, 'a>) -> PResult<Self> {
        let run = ctx.parse(&BytesWhile(|b: u8| {
            !b.is_ascii_whitespace() && !matches!(b, b'(' | b')' | b',')
        }))?;
        if run.is_empty() {
            return Err(ctx.unexpected("a value"));
        }
        Ok(Value(String::from_utf8_lossy(&run).into_owned()))
    }
}
