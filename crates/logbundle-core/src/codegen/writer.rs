//! Indentation-aware text builder for generated sources.

use std::fmt::Write as _;

/// One indentation level in generated sources.
const INDENT: &str = "   ";

/// Builds source text line by line.
///
/// Blank lines carry no indentation, so output never has trailing spaces.
#[derive(Debug, Default)]
pub struct SourceWriter {
    buf: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Write a formatted line at the current depth.
    pub fn line_fmt(&mut self, args: std::fmt::Arguments<'_>) -> &mut Self {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = text.write_fmt(args);
        self.line(text)
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Run `body` one level deeper.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self
    }

    /// Write `open`, the indented `body`, then `close`, all at the current depth.
    pub fn block(&mut self, open: impl AsRef<str>, close: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(open);
        self.indented(body);
        self.line(close)
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
