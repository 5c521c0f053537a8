//! Rust code emitter - accumulates the generated test file as text
//!
//! The buffer only tracks indentation. Layout is cosmetic: the finished text is re-parsed with
//! `syn` and re-printed with `prettyplease` before it is written anywhere.

/// A buffer for building Rust source code with indentation
#[derive(Debug)]
pub struct RustEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl Default for RustEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl RustEmitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: "    ", // 4 spaces for Rust
        }
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write text without newline
    pub fn write(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Write a blank line
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

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write an outer attribute such as `#[test]`
    pub fn attribute(&mut self, attr: &str) {
        self.line(&format!("#[{}]", attr));
    }

    /// Write an inner attribute such as `#![allow(dead_code)]`
    pub fn inner_attribute(&mut self, attr: &str) {
        self.line(&format!("#![{}]", attr));
    }

    /// Write a call spanning several lines, one argument per line
    pub fn call_statement(&mut self, callee: &str, args: &[String]) {
        self.line(&format!("{}(", callee));
        self.indent();
        for arg in args {
            self.line(&format!("{},", arg));
        }
        self.dedent();
        self.line(");");
    }
}
