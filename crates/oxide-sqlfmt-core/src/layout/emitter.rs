//! Output Emitter
//!
//! Builds the output string. Separators are recorded as pending and only
//! written when the next text arrives, so the output never carries trailing
//! spaces, a leading newline or a dangling indent.

/// Separator waiting to be written before the next text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Nothing,
    Space,
    Newline { depth: usize, blank_lines: usize },
}

/// String-based emitter.
#[derive(Debug)]
pub struct StringEmitter {
    buffer: String,
    indent: String,
    pending: Pending,
}

impl StringEmitter {
    /// Creates an emitter using `indent` for one level.
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            indent: indent.into(),
            pending: Pending::Nothing,
        }
    }

    /// Writes text after any pending separator.
    pub fn text(&mut self, text: &str) {
        self.flush();
        self.buffer.push_str(text);
    }

    /// Writes text directly after the previous text.
    ///
    /// A pending space is dropped; a pending newline is kept.
    pub fn attach(&mut self, text: &str) {
        if self.pending == Pending::Space {
            self.pending = Pending::Nothing;
        }
        self.text(text);
    }

    /// Requests a space before the next text.
    pub fn space(&mut self) {
        if self.pending == Pending::Nothing {
            self.pending = Pending::Space;
        }
    }

    /// Requests a line break indented `depth` levels.
    pub fn newline(&mut self, depth: usize) {
        let blank_lines = match self.pending {
            Pending::Newline { blank_lines, .. } => blank_lines,
            _ => 0,
        };
        self.pending = Pending::Newline { depth, blank_lines };
    }

    /// Requests a line break at depth zero preceded by `n` blank lines.
    pub fn blank_lines(&mut self, n: usize) {
        let blank_lines = match self.pending {
            Pending::Newline { blank_lines, .. } => blank_lines.max(n),
            _ => n,
        };
        self.pending = Pending::Newline {
            depth: 0,
            blank_lines,
        };
    }

    /// Returns the output, dropping any pending separator.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn flush(&mut self) {
        let pending = std::mem::replace(&mut self.pending, Pending::Nothing);
        if self.buffer.is_empty() {
            return;
        }
        match pending {
            Pending::Nothing => {}
            Pending::Space => self.buffer.push(' '),
            Pending::Newline { depth, blank_lines } => {
                for _ in 0..=blank_lines {
                    self.buffer.push('\n');
                }
                for _ in 0..depth {
                    self.buffer.push_str(&self.indent);
                }
            }
        }
    }
}
