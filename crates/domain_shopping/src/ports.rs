//! Console Port
//!
//! Every user-visible line produced by the domain (notifications, listings,
//! receipts, the not-found message) is written through [`Console`]. The
//! binary uses [`StdoutConsole`]; tests capture output with
//! [`BufferConsole`].

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Sink for human-readable console lines
pub trait Console {
    /// Writes one line of text
    fn line(&self, text: &str);

    /// Writes an empty line
    fn blank(&self) {
        self.line("");
    }
}

/// Shared handle to a console
pub type SharedConsole = Rc<dyn Console>;

/// Console writing to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    /// Returns a shared handle to standard output
    pub fn shared() -> SharedConsole {
        Rc::new(StdoutConsole)
    }
}

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        // A closed stdout must not abort a list operation halfway.
        let _ = writeln!(io::stdout().lock(), "{text}");
    }
}

/// Console that keeps every line in memory
#[derive(Debug, Default)]
pub struct BufferConsole {
    lines: RefCell<Vec<String>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns all captured lines joined with newlines
    pub fn contents(&self) -> String {
        self.lines.borrow().join("\n")
    }

    /// Counts captured lines equal to `text`
    pub fn count(&self, text: &str) -> usize {
        self.lines.borrow().iter().filter(|line| *line == text).count()
    }

    /// Drops everything captured so far
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for BufferConsole {
    fn line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_console_captures_in_order() {
        let console = BufferConsole::new();
        console.line("one");
        console.blank();
        console.line("two");

        assert_eq!(console.lines(), vec!["one", "", "two"]);
        assert_eq!(console.contents(), "one\n\ntwo");
    }

    #[test]
    fn test_buffer_console_count_and_clear() {
        let console = BufferConsole::new();
        console.line("x");
        console.line("x");
        console.line("y");
        assert_eq!(console.count("x"), 2);

        console.clear();
        assert!(console.lines().is_empty());
    }
}
