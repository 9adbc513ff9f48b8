//! C++ source writer - builds generated artifact text
//!
//! A line buffer with indentation, used by both emitters so the artifacts share one layout.

use std::fmt::Write;

/// A buffer for building C++ source text with GNU-style two-space indentation
#[derive(Debug, Default)]
pub struct SourceWriter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: "  ",
        }
    }

    /// Get the generated text
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Take the text written so far, leaving the buffer empty (indentation is kept)
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        if s.is_empty() {
            self.blank_line();
            return;
        }
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write every line of a multi-line text block at the current indentation
    pub fn lines(&mut self, text: &str) {
        for l in text.lines() {
            self.line(l);
        }
    }

    /// Write text without newline
    pub fn write(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Write formatted text
    pub fn writef(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.buffer.write_fmt(args);
    }

    /// Write a blank line (never indented)
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a `/* ... */` block comment, one ` * ` line per input line
    pub fn block_comment(&mut self, opener: &str, text: &str) {
        self.line(opener);
        for l in text.lines() {
            if l.is_empty() {
                self.line(" *");
            } else {
                self.line(&format!(" * {}", l));
            }
        }
        self.line(" */");
    }

    /// Write a `struct name { ... };` definition
    pub fn struct_def<F>(&mut self, name: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("struct {} {{", name));
        self.indent();
        f(self);
        self.dedent();
        self.line("};");
    }

    /// Write a function definition with the return type on its own line and the braces on separate lines
    pub fn function_def<F>(&mut self, return_type: &str, signature: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(return_type);
        self.line(signature);
        self.line("{");
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }
}
