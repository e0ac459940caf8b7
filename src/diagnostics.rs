//! Fancy diagnostics support using `ariadne`.
//!
//! This module provides convenient methods to convert the errors of loading a chart into
//! `ariadne::Report` without modifying the error type definitions.
//!
//! The errors only carry the line number, so the span of the whole line is looked up in the
//! source text given with [`SimpleSource`].
//!
//! # Usage Example
//!
//! ```rust
//! use chart_rs::{chart::load_str, diagnostics::emit_load_error};
//!
//! let source = "[Song]\n{\n  Resolution = 192\n";
//! if let Err(err) = load_str(source) {
//!     emit_load_error("notes.chart", source, &err);
//! }
//! ```

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::chart::{LoadError, parse::ParseErrorWithLine};

/// Simple source container that holds the filename and source text.
///
/// # Usage Example
///
/// ```rust
/// use chart_rs::diagnostics::SimpleSource;
///
/// let source_text = "[Song]\n{\n}\n";
/// let source = SimpleSource::new("notes.chart", source_text);
///
/// assert_eq!(source.text(), source_text);
/// assert_eq!(source.line_span(2), 7..8);
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Byte range of the line `line` (starts with 1), without the line terminator.
    ///
    /// Returns the empty range at the end of the text if there is no such line.
    #[must_use]
    pub fn line_span(&self, line: usize) -> Range<usize> {
        let mut start = 0;
        for (number, text) in (1..).zip(self.text.split_inclusive('\n')) {
            if number == line {
                let content = text.trim_end_matches('\n').trim_end_matches('\r');
                return start..start + content.len();
            }
            start += text.len();
        }
        self.text.len()..self.text.len()
    }
}

/// Trait for converting errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    ///
    /// `src` is used for the filename and to find the span of the line.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` consistently.
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: Range<usize>,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, Range<usize>)> {
    let filename = src.name().to_owned();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

impl ToAriadne for ParseErrorWithLine {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        build_report(
            src,
            ReportKind::Error,
            src.line_span(self.line()),
            "parse error",
            self.content(),
            Color::Red,
        )
    }
}

impl ToAriadne for LoadError {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        match self {
            Self::Parse(err) => err.to_report(src),
            Self::Io(err) => {
                build_report(src, ReportKind::Error, 0..0, "I/O error", err, Color::Red)
            }
            Self::MissingSong => {
                let end = src.text().len();
                build_report(
                    src,
                    ReportKind::Error,
                    end..end,
                    "missing section",
                    self,
                    Color::Yellow,
                )
            }
        }
    }
}

/// Convenience method: render the load error to the standard error.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete chart source text
/// * `error` - The error returned by loading `source`
pub fn emit_load_error(name: &str, source: &str, error: &LoadError) {
    let simple = SimpleSource::new(name, source);
    let report = error.to_report(&simple);
    if let Err(err) = report.eprint((name.to_owned(), Source::from(source))) {
        tracing::warn!(%err, "failed to print the diagnostic");
    }
}

/// Build the `ariadne::Report` of the load error without printing.
///
/// This is useful in tests to verify diagnostics can be generated while keeping test output clean.
#[must_use]
pub fn collect_load_report<'a>(
    name: &'a str,
    source: &'a str,
    error: &LoadError,
) -> Report<'a, (String, Range<usize>)> {
    error.to_report(&SimpleSource::new(name, source))
}
