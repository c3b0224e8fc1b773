//! Parse configuration and the grammar entry points.

use strand_core::{ByteStream, Context, Stream, StreamError, TokenStream, Tracer, rule};

use crate::Result;
use crate::gql::Document;
use crate::nquads::{NQuad, QuadDocument, lex};

/// Parse settings shared by all entry points.
///
/// ```
/// use strand_lib::Session;
///
/// let quad = Session::new()
///     .with_recursion_limit(Some(64))
///     .parse_quad("<a> <b> <c> .")
///     .expect("valid quad");
/// assert_eq!(quad.subject, "a");
/// ```
pub struct Session<'t> {
    recursion_limit: Option<u32>,
    tracer: Option<&'t mut dyn Tracer>,
}

impl Default for Session<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Session<'t> {
    pub fn new() -> Self {
        Self {
            recursion_limit: Some(strand_core::DEFAULT_RECURSION_LIMIT),
            tracer: None,
        }
    }

    /// Maximum parser nesting. None = unlimited.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn with_tracer(mut self, tracer: &'t mut dyn Tracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    fn context<S: Stream>(&mut self, stream: S) -> Context<'_, S> {
        let ctx = Context::new(stream).with_recursion_limit(self.recursion_limit);
        match self.tracer.as_deref_mut() {
            Some(tracer) => ctx.with_tracer(tracer),
            None => ctx,
        }
    }

    /// Parse a query-language document. An empty document is legal.
    pub fn parse_query_document(&mut self, text: &str) -> Result<Document> {
        let mut ctx = self.context(ByteStream::from(text));
        Ok(ctx.parse_or_error(&rule::<Document>())?)
    }

    /// Parse a single N-Quads statement spanning the whole input.
    pub fn parse_quad(&mut self, line: &str) -> Result<NQuad> {
        let lexed = lex(line);
        let stream = TokenStream::new(&lexed.tokens, lexed.end).with_fault(lexed.fault_message());
        let mut ctx = self.context(stream);

        let quad = ctx.parse_or_error(&rule::<NQuad>())?;
        if ctx.stream().error() != Some(StreamError::EndOfInput) {
            return Err(ctx.unexpected("end of input").into());
        }
        Ok(quad)
    }

    /// Parse N-Quads statements until end of input.
    ///
    /// Fails on the first malformed statement.
    pub fn parse_quad_document(&mut self, text: &str) -> Result<Vec<NQuad>> {
        let lexed = lex(text);
        let stream = TokenStream::new(&lexed.tokens, lexed.end).with_fault(lexed.fault_message());
        let mut ctx = self.context(stream);

        let QuadDocument(quads) = ctx.parse_or_error(&rule::<QuadDocument>())?;
        Ok(quads)
    }
}

/// [`Session::parse_query_document`] with default settings.
pub fn parse_query_document(text: &str) -> Result<Document> {
    Session::new().parse_query_document(text)
}

/// [`Session::parse_quad`] with default settings.
pub fn parse_quad(line: &str) -> Result<NQuad> {
    Session::new().parse_quad(line)
}

/// [`Session::parse_quad_document`] with default settings.
pub fn parse_quad_document(text: &str) -> Result<Vec<NQuad>> {
    Session::new().parse_quad_document(text)
}
