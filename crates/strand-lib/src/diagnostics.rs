//! Source-snippet rendering of parse failures.

use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::Error;

/// Rendering switches for [`render_error`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'p> {
    pub colored: bool,
    /// Shown in the snippet header.
    pub path: Option<&'p str>,
}

/// Render `error` against the `source` it came from.
///
/// Parse failures get a snippet pointing at the raise position, followed by
/// the full frame trace. Other errors render as a single title line.
pub fn render_error(source: &str, error: &Error, options: RenderOptions<'_>) -> String {
    let renderer = if options.colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };

    let Error::Parse(err) = error else {
        let message = error.to_string();
        let report: Vec<Group> = vec![Group::with_title(Level::ERROR.primary_title(&message))];
        return renderer.render(&report).to_string();
    };

    let title = err
        .message()
        .map_or_else(|| err.kind().to_string(), str::to_string);
    let label = match err.frames().first() {
        Some(frame) => format!("while parsing {}", frame.parser),
        None => err.kind().to_string(),
    };

    let mut snippet = Snippet::source(source).line_start(1).annotation(
        AnnotationKind::Primary
            .span(span_at(source, err.position().offset))
            .label(&label),
    );
    if let Some(path) = options.path {
        snippet = snippet.path(path);
    }

    let report: Vec<Group> = vec![Level::ERROR.primary_title(&title).element(snippet)];
    format!("{}\n\n{}", renderer.render(&report), err.render())
}

/// One character at `offset`, clamped to the source.
fn span_at(source: &str, offset: usize) -> Range<usize> {
    let mut start = offset.min(source.len());
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    let end = source[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());
    start..end
}
