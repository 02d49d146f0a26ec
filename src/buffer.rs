//! Buffer Model
//!
//! Immutable stdin (an ordered sequence of lines) and stdout (a current
//! partial line plus a history of completed lines, newest-first). These are
//! the only I/O buffers the symbolic core knows about — there are no real
//! file descriptors here, matching the in-memory model the rest of the
//! system uses for filesystems.

use std::collections::VecDeque;

/// Ordered sequence of input lines, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Stdin {
    lines: VecDeque<String>,
}

impl Stdin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: impl IntoIterator<Item = String>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Pop the next line, if any, returning the remaining stdin.
    pub fn pop_front(&self) -> (Option<String>, Stdin) {
        let mut rest = self.lines.clone();
        let first = rest.pop_front();
        (first, Stdin { lines: rest })
    }
}

/// Current partial line plus completed-line history, newest history entry first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Stdout {
    current: String,
    /// Completed lines, most recently completed first.
    history: Vec<String>,
}

impl Stdout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.history.is_empty()
    }

    /// Append `s` to the current (unterminated) line.
    pub fn append_str(&self, s: &str) -> Stdout {
        let mut new = self.clone();
        new.current.push_str(s);
        new
    }

    /// Terminate the current line, pushing it onto the history.
    pub fn append_newline(&self) -> Stdout {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.push(self.current.clone());
        history.extend(self.history.iter().cloned());
        Stdout {
            current: String::new(),
            history,
        }
    }

    /// Serialise to a string: reverse history, drop all trailing empty
    /// lines, join with `\n`, then append the current line without a
    /// trailing newline. See spec §6.4.
    pub fn to_string_lossy(&self) -> String {
        let mut chronological: Vec<&str> = self.history.iter().rev().map(String::as_str).collect();
        while matches!(chronological.last(), Some(l) if l.is_empty()) {
            chronological.pop();
        }
        let mut out = chronological.join("\n");
        if !chronological.is_empty() && !self.current.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.current);
        out
    }

    /// Reverse of `[current] ++ history` yields the stdin line sequence
    /// (spec §6.4 "pipe-to-stdin").
    pub fn pipe_to_stdin(&self) -> Stdin {
        let mut lines: Vec<String> = self.history.iter().rev().cloned().collect();
        lines.push(self.current.clone());
        Stdin::from_lines(lines)
    }

    /// Concatenate two stdout buffers produced in sequence: `prefix` is
    /// whatever was already written, `suffix` is output produced starting
    /// from an empty buffer that continues where `prefix` left off. This is
    /// the operation the utility-interpreter invariant in spec §6.2 relies
    /// on: running a utility against an empty stdout and then concatenating
    /// must equal running it against the caller's real stdout directly.
    pub fn concat(prefix: &Stdout, suffix: &Stdout) -> Stdout {
        let mut merged: Vec<String> = prefix.history.iter().rev().cloned().collect();
        let suffix_chronological: Vec<String> = suffix.history.iter().rev().cloned().collect();
        let current = if let Some((first, rest)) = suffix_chronological.split_first() {
            merged.push(format!("{}{}", prefix.current, first));
            merged.extend(rest.iter().cloned());
            suffix.current.clone()
        } else {
            format!("{}{}", prefix.current, suffix.current)
        };
        Stdout {
            current,
            history: merged.into_iter().rev().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_serialise() {
        let out = Stdout::new().append_str("a").append_newline().append_str("b");
        assert_eq!(out.to_string_lossy(), "a\nb");
    }

    #[test]
    fn test_serialise_drops_trailing_empty_lines() {
        let out = Stdout::new()
            .append_newline() // completed empty line
            .append_newline() // another completed empty line
            .append_str("b");
        assert_eq!(out.to_string_lossy(), "b");
    }

    #[test]
    fn test_serialise_empty() {
        assert_eq!(Stdout::new().to_string_lossy(), "");
    }

    #[test]
    fn test_pipe_to_stdin_order() {
        let out = Stdout::new()
            .append_str("one")
            .append_newline()
            .append_str("two")
            .append_newline()
            .append_str("three");
        let stdin = out.pipe_to_stdin();
        let lines: Vec<&str> = stdin.lines().collect();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_concat_continues_current_line() {
        let prefix = Stdout::new().append_str("hel");
        let suffix = Stdout::new().append_str("lo").append_newline().append_str("world");
        let combined = Stdout::concat(&prefix, &suffix);
        assert_eq!(combined.to_string_lossy(), "hello\nworld");
    }

    #[test]
    fn test_concat_empty_suffix() {
        let prefix = Stdout::new().append_str("hel").append_newline().append_str("lo");
        let suffix = Stdout::new();
        let combined = Stdout::concat(&prefix, &suffix);
        assert_eq!(combined, prefix);
    }
}
