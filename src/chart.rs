//! The parser and serializer of `.chart` files, the chart format of Clone Hero and Feedback.
//!
//! A `.chart` file is a sequence of sections, each one a bracketed header and a body of
//! `key = value` entries in braces:
//!
//! ```text
//! [Song]
//! {
//!   Resolution = 192
//! }
//! [ExpertSingle]
//! {
//!   192 = N 0 0
//! }
//! ```
//!
//! `lex` module splits the source into lines and classifies them into tokens.
//!
//! `parse` module reads the sections into [`model::Chart`], with the help of a
//! [`parse::prompt::Prompter`] when something is defined twice.
//!
//! `unparse` module writes [`model::Chart`] back into the text, which reads back into an equal
//! chart.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8.
//! - Stop at the first error, never return a partial chart.
//! - Keep the order of the items on the same tick as written.

pub mod command;
pub mod lex;
pub mod model;
pub mod parse;
pub mod prelude;
pub mod unparse;

use std::io::{self, BufRead};

use thiserror::Error;

use self::{
    model::Chart,
    parse::{
        ParseErrorWithLine,
        prompt::{AlwaysUseNewer, Prompter},
    },
};

pub use self::unparse::dump;

/// An error occurred when loading a `.chart` file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the source failed, or the source was not UTF-8.
    #[error("failed to read the chart: {0}")]
    Io(#[from] io::Error),
    /// The source was malformed.
    #[error("parse: {0}")]
    Parse(#[from] ParseErrorWithLine),
    /// There was no `[Song]` section.
    #[error("missing [Song] section")]
    MissingSong,
}

/// Loads a chart, using the newer one on duplicated definitions.
///
/// # Example
///
/// ```
/// use chart_rs::chart::{command::Instrument, command::Difficulty, load};
///
/// let source = "[Song]\n{\n  Resolution = 192\n}\n[ExpertSingle]\n{\n  192 = N 0 0\n}\n";
/// let chart = load(source.as_bytes()).unwrap();
/// assert_eq!(chart.metadata.resolution(), Some(192));
/// assert_eq!(chart.instrument(Difficulty::Expert, Instrument::Single).map(|track| track.len()), Some(1));
/// ```
///
/// # Errors
///
/// See [`Chart::from_reader`].
pub fn load(reader: impl BufRead) -> Result<Chart, LoadError> {
    load_with_prompter(reader, AlwaysUseNewer)
}

/// Loads a chart, consulting `prompter` on duplicated definitions.
///
/// # Errors
///
/// See [`Chart::from_reader`].
pub fn load_with_prompter(
    reader: impl BufRead,
    prompter: impl Prompter,
) -> Result<Chart, LoadError> {
    Chart::from_reader(reader, prompter)
}

/// Loads a chart from the source text.
///
/// # Errors
///
/// See [`Chart::from_reader`].
pub fn load_str(source: &str) -> Result<Chart, LoadError> {
    load(source.as_bytes())
}
