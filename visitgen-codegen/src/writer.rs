//! Line-oriented text assembly.
//!
//! [`CodeWriter`] accumulates lines at a tracked indentation depth. Every
//! emitter writes through it; lines are rendered strictly in call order.

use std::fmt;

/// Default indentation unit, in spaces.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Accumulating buffer of indented lines.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    lines: Vec<String>,
    depth: usize,
    indent_width: usize,
}

impl CodeWriter {
    /// Creates an empty writer with the default indentation unit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    /// Creates an empty writer indenting by `width` spaces per level.
    #[must_use]
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
            indent_width: width,
        }
    }

    /// Appends `line` at the current indentation. Empty lines are indented
    /// too.
    pub fn insert(&mut self, line: &str) {
        let mut out = String::with_capacity(self.indentation() + line.len() + 1);
        out.extend(std::iter::repeat_n(' ', self.indentation()));
        out.push_str(line);
        out.push('\n');
        self.lines.push(out);
    }

    /// Appends an empty line at the current indentation.
    pub fn blank(&mut self) {
        self.insert("");
    }

    /// Increases the depth by one level.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decreases the depth by one level; no-op at depth zero.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Inserts a single line one level deeper than the current depth.
    pub fn indent_insert_dedent(&mut self, line: &str) {
        self.indent();
        self.insert(line);
        self.dedent();
    }

    /// Removes and returns the most recently appended line.
    pub fn remove_last_line(&mut self) -> Option<String> {
        self.lines.pop()
    }

    /// Returns the current depth in levels.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the current indentation in spaces.
    #[must_use]
    pub const fn indentation(&self) -> usize {
        self.depth * self.indent_width
    }

    /// Returns the number of lines written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the last line written, including its newline.
    #[must_use]
    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Concatenates every line into the final text.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CodeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.lines.iter().try_for_each(|line| f.write_str(line))
    }
}
