//! Line tokenizer for battle logs
//!
//! Splits a raw log into pipe-delimited lines. Anything that does not start
//! with `|` carries no protocol meaning and is skipped.

use std::str::Lines as RawLines;

/// A single protocol line, split into fields
///
/// `fields[0]` is the message type, the rest are its arguments.
/// The empty field produced by the leading `|` has already been dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the raw input
    pub number: usize,
    pub fields: Vec<&'a str>,
}

impl<'a> Line<'a> {
    /// Message type tag (e.g. "move", "-damage", "turn")
    pub fn kind(&self) -> &'a str {
        self.fields.first().copied().unwrap_or("")
    }

    /// Argument at `index`, counting from the first field after the tag
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index + 1).copied()
    }

    /// All arguments after the tag
    pub fn args(&self) -> &[&'a str] {
        self.fields.get(1..).unwrap_or(&[])
    }
}

/// Lazy iterator over the protocol lines of a log
///
/// Cloning forks the current position.
/// Call [`tokenize`] again to start from the top.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    inner: std::iter::Enumerate<RawLines<'a>>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, raw) in self.inner.by_ref() {
            if let Some(line) = tokenize_line(raw, idx + 1) {
                return Some(line);
            }
        }
        None
    }
}

/// Tokenize a full battle log
pub fn tokenize(raw: &str) -> Lines<'_> {
    Lines {
        inner: raw.lines().enumerate(),
    }
}

/// Tokenize one raw line, returning None if it has no protocol meaning
pub fn tokenize_line(raw: &str, number: usize) -> Option<Line<'_>> {
    let line = raw.trim();
    let body = line.strip_prefix('|')?;

    Some(Line {
        number,
        fields: body.split('|').collect(),
    })
}
