//! Indented text rendering of a parsed [`Document`].

use std::fmt::Write;

use strand_core::Colors;

use super::ast::{Document, Field, OperationType, SelectionSet};

pub struct DocumentPrinter<'d> {
    document: &'d Document,
    colors: Colors,
}

impl<'d> DocumentPrinter<'d> {
    pub fn new(document: &'d Document) -> Self {
        Self {
            document,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        writeln!(w, "{}Document{}", c.blue, c.reset)?;
        for op in &self.document.operations {
            write!(w, "  {}Operation{}", c.blue, c.reset)?;
            if op.kind != OperationType::Unspecified {
                write!(w, " {}", op.kind.as_str())?;
            }
            if let Some(name) = &op.name {
                write!(w, " {name}")?;
            }
            writeln!(w)?;
            self.format_selections(&op.selections, 2, w)?;
        }
        Ok(())
    }

    fn format_selections(
        &self,
        set: &SelectionSet,
        depth: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        for selection in &set.0 {
            self.format_field(selection.as_field(), depth, w)?;
        }
        Ok(())
    }

    fn format_field(&self, field: &Field, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        let indent = "  ".repeat(depth);
        writeln!(w, "{indent}{}Field{} {}", c.blue, c.reset, field.name)?;
        for arg in &field.arguments.0 {
            writeln!(
                w,
                "{indent}  {}Argument{} {} = {}{}{}",
                c.blue, c.reset, arg.name, c.green, arg.value, c.reset
            )?;
        }
        self.format_selections(&field.selections, depth + 1, w)
    }
}

/// Uncolored dump of `document`.
pub fn dump(document: &Document) -> String {
    DocumentPrinter::new(document).dump()
}
