//! Mixin types for structures.
//!
//! - `SourceLineMixin` is a generic wrapper that attaches the source line (number and raw text) to a value.
//! - `SourceLineMixinExt` is a trait that provides extension methods to create `SourceLineMixin` instances.

/// A generic wrapper that attaches the source line to a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLineMixin<T> {
    /// Wrapped content value
    content: T,
    /// Line number in the source, starts with 1.
    line: usize,
    /// Raw text of the line, without the line terminator.
    text: String,
}

impl<T> SourceLineMixin<T> {
    /// Instances a new `SourceLineMixin`
    pub fn new(content: T, line: usize, text: impl Into<String>) -> Self {
        Self {
            content,
            line,
            text: text.into(),
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Returns the wrapped content as a mutable reference.
    pub const fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the line number, starts with 1.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the raw text of the line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Maps the content of the wrapper.
    pub fn map<U, F>(self, f: F) -> SourceLineMixin<U>
    where
        F: FnOnce(T) -> U,
    {
        SourceLineMixin {
            content: f(self.content),
            line: self.line,
            text: self.text,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceLineMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {}: {:?})", self.content, self.line, self.text)
    }
}

impl<T: std::error::Error + 'static> std::error::Error for SourceLineMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods for `SourceLineMixin`.
pub trait SourceLineMixinExt {
    /// Instances a new `SourceLineMixin` on the same line as a wrapper.
    fn into_wrapper<W>(self, wrapper: &SourceLineMixin<W>) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, wrapper.line, wrapper.text.as_str())
    }

    /// Instances a new `SourceLineMixin` with a given line number and text.
    fn into_wrapper_line(self, line: usize, text: impl Into<String>) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, line, text)
    }
}

impl<T> SourceLineMixinExt for T {}
