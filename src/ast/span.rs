//! Source span tracking for error messages

/// A span in the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-length span at a single offset
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Merge two spans into one that covers both
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Column of the span start, counted in characters (0-indexed)
    pub fn column(&self, source: &str) -> usize {
        let offset = self.start.min(source.len());
        source
            .char_indices()
            .take_while(|(i, _)| *i < offset)
            .count()
    }

    /// Render the source on one line with a caret under the span start:
    ///
    /// ```text
    /// 1+@
    ///   ^ invalid token
    /// ```
    ///
    /// Newlines, tabs and other control characters echo as a single space
    /// each, so the caret column still counts one per character.
    pub fn render_caret(&self, source: &str, message: &str) -> String {
        let line: String = source
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        format!("{}\n{}^ {}", line, " ".repeat(self.column(source)), message)
    }
}

/// A node with an associated span
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}
