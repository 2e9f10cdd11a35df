//! Indentation-aware string buffer
//!
//! Text appended right after a newline is prefixed with the current indentation.

#[derive(Debug, Clone)]
pub struct IndentedWriter {
    buffer: String,
    unit: String,
    level: usize,
}

impl Default for IndentedWriter {
    fn default() -> Self {
        Self::new("  ")
    }
}

impl IndentedWriter {
    pub fn new(unit: impl Into<String>) -> Self {
        IndentedWriter {
            buffer: String::new(),
            unit: unit.into(),
            level: 0,
        }
    }

    pub fn append(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        if self.ends_with_newline() {
            for _ in 0..self.level {
                self.buffer.push_str(&self.unit);
            }
        }
        self.buffer.push_str(value);
    }

    pub fn append_line(&mut self, value: &str) {
        self.append(value);
        self.buffer.push('\n');
    }

    /// Runs `body` one indentation level deeper.
    pub fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.level += 1;
        body(self);
        self.level -= 1;
    }

    pub fn ends_with_newline(&self) -> bool {
        self.buffer.ends_with('\n')
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
