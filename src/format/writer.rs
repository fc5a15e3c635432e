//! Line buffer for canonical Tern source
//!
//! The formatter calls `indent` on entering a `then`/`else`/`do` body and `dedent` before the
//! matching `else` or `end`. Indentation is emitted lazily, so blank lines between function
//! declarations never carry trailing spaces.

use super::config::FormatConfig;

/// Accumulates printed statements at the current block depth.
pub struct FormatWriter {
    output: String,
    /// Number of enclosing blocks.
    indent_level: usize,
    config: FormatConfig,
    /// Set after `newline`; the next write emits the indentation first.
    at_line_start: bool,
}

impl FormatWriter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Consume the writer and return the printed program.
    pub fn finish(self) -> String {
        self.output
    }

    /// Enter a block body.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Leave a block body. Never goes below the program level.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.config.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Append a fragment of a statement, indenting first if it opens a line.
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Separate a function declaration from its neighbours.
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    #[cfg(test)]
    fn current_indent(&self) -> usize {
        self.indent_level
    }
}
