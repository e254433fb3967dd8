//! Indentation-aware text sink for generated code.
//!
//! Indentation is written lazily: the indent string is emitted when the first
//! text of a line is printed, so blank lines carry no trailing whitespace.

use std::fmt;

/// A position in a [`CodeWriter`] that can be restored with
/// [`CodeWriter::rollback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
    indent: usize,
    at_line_start: bool,
}

impl Checkpoint {
    /// Indentation level when the checkpoint was taken.
    pub fn indent_level(&self) -> usize {
        self.indent
    }
}

/// Append-only output buffer with print/println and indent/outdent.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buf: String,
    indent: usize,
    indent_unit: String,
    at_line_start: bool,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    /// Create a writer indenting with two spaces per level.
    pub fn new() -> Self {
        Self::with_indent_unit("  ")
    }

    /// Create a writer with a custom indent string.
    pub fn with_indent_unit(unit: impl Into<String>) -> Self {
        Self {
            buf: String::new(),
            indent: 0,
            indent_unit: unit.into(),
            at_line_start: true,
        }
    }

    /// Append text without a line break.
    pub fn print(&mut self, text: &str) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            if !line.is_empty() {
                self.write_indent();
                self.buf.push_str(line);
            }
        }
    }

    /// Append text followed by a line break.
    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.newline();
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indentation level. Saturates at zero.
    pub fn outdent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// Record the current position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            len: self.buf.len(),
            indent: self.indent,
            at_line_start: self.at_line_start,
        }
    }

    /// Discard everything written since `checkpoint` and restore its
    /// indentation.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.buf.truncate(checkpoint.len);
        self.indent = checkpoint.indent;
        self.at_line_start = checkpoint.at_line_start;
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the generated text.
    pub fn finish(self) -> String {
        self.buf
    }

    fn newline(&mut self) {
        self.buf.push('\n');
        self.at_line_start = true;
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent {
                self.buf.push_str(&self.indent_unit);
            }
            self.at_line_start = false;
        }
    }
}

impl fmt::Write for CodeWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}

impl fmt::Display for CodeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use super::*;

    #[test]
    fn indentation_is_lazy() {
        let mut w = CodeWriter::new();
        w.println("a {");
        w.indent();
        w.println("");
        w.print("b");
        w.println(";");
        w.outdent();
        w.print("}");
        assert_eq!(w.as_str(), "a {\n\n  b;\n}");
    }

    #[test]
    fn embedded_newlines_are_indented() {
        let mut w = CodeWriter::new();
        w.indent();
        w.println("x\ny");
        assert_eq!(w.as_str(), "  x\n  y\n");
    }

    #[test]
    fn rollback_restores_text_and_indent() {
        let mut w = CodeWriter::new();
        w.print("keep");
        let cp = w.checkpoint();
        w.indent();
        w.println(" drop");
        w.print("more");
        w.rollback(cp);
        assert_eq!(w.as_str(), "keep");
        assert_eq!(w.indent_level(), 0);
        w.print("!");
        assert_eq!(w.finish(), "keep!");
    }

    #[test]
    fn fmt_write_goes_through_print() {
        let mut w = CodeWriter::with_indent_unit("\t");
        w.indent();
        write!(w, "{}.{}", "p", "q").unwrap();
        assert_eq!(w.to_string(), "\tp.q");
    }

    #[test]
    fn outdent_saturates() {
        let mut w = CodeWriter::new();
        w.outdent();
        assert_eq!(w.indent_level(), 0);
    }
}
