//! Parsing [`Chart`] from the lines.
//!
//! Raw lines == [lex](super::lex) ==> [`Token`] == [`block::DataBlockReader`] ==> entries
//! == [`item_processor`] ==> [`Block`] ==> [`Chart`]
//!
//! The whole source is read in one pass, and the first error stops it.

pub mod block;
mod fields;
pub mod item_processor;
pub mod prompt;

use std::{collections::HashSet, io::BufRead};

use thiserror::Error;

use crate::chart::{
    LoadError,
    command::{
        SectionName, UnknownSection,
        mixin::{SourceLineMixin, SourceLineMixinExt},
    },
    lex::{LineCursor, Token},
    model::{Block, Chart},
};

use self::{
    block::DataBlockReader,
    item_processor::{
        EventProcessor, LyricProcessor, MetadataProcessor, NoteProcessor, SyncProcessor,
        process_block,
    },
    prompt::{Duplication, Prompter},
};

/// An error occurred when parsing the `.chart` source.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// The section name had characters other than ASCII letters and spaces.
    #[error("invalid section header `[{0}]`")]
    InvalidSectionHeader(String),
    /// A line outside of sections was not a section header.
    #[error("expected a section header")]
    ExpectedSectionHeader,
    /// The section name was not any of the known sections.
    #[error("unknown section `[{0}]`")]
    UnknownSection(String),
    /// The source ended before the closing `}` of the section.
    #[error("section `[{section}]` is not closed by `}}`")]
    UnterminatedBlock {
        /// The name of the unclosed section.
        section: String,
    },
    /// A line in the body of a section was not `key = value`.
    #[error("expected `key = value` or `}}` in the section")]
    InvalidBlockLine,
    /// The key in `[Song]` was not an identifier.
    #[error("invalid metadata key `{0}`")]
    InvalidMetadataKey(String),
    /// The key in a track section was not a tick.
    #[error("invalid time `{0}`")]
    InvalidTime(String),
    /// The number did not fit in its field.
    #[error("number out of range: {0}")]
    InvalidNumber(String),
    /// The entry in `[SyncTrack]` was malformed.
    #[error("invalid sync event `{0}`")]
    InvalidSyncEvent(String),
    /// The entry in `[Events]` was malformed.
    #[error("invalid event `{0}`")]
    InvalidEvent(String),
    /// The entry in `[Lyrics]` was malformed.
    #[error("invalid lyric `{0}`")]
    InvalidLyric(String),
    /// The entry in an instrument track was malformed.
    #[error("invalid track item `{0}`")]
    InvalidTrackItem(String),
    /// The item had too few or too many numbers.
    #[error("`{kind}` expects {min} to {max} numbers, but found {found}")]
    InvalidFieldCount {
        /// The code of the item, such as `N` or `TS`.
        kind: String,
        /// The least number of fields.
        min: usize,
        /// The most number of fields.
        max: usize,
        /// The number of fields found.
        found: usize,
    },
    /// A flag-only line appeared before any note of the track.
    #[error("flag fret {0} has no note to modify")]
    FlagWithoutNote(u32),
    /// The flag-only line had a fret which cannot be a flag.
    #[error("flag fret {0} is out of range")]
    FlagOutOfRange(u32),
    /// The prompter chose to halt on a duplication.
    #[error("halted on duplicated {what}")]
    Duplicated {
        /// The description of the duplicated definition.
        what: String,
    },
}

impl From<UnknownSection> for ParseError {
    fn from(UnknownSection(name): UnknownSection) -> Self {
        Self::UnknownSection(name)
    }
}

/// A parse error with the line it occurred on.
pub type ParseErrorWithLine = SourceLineMixin<ParseError>;

/// Whether the section name consists of ASCII letters and spaces.
fn is_valid_section_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic() || b == b' ')
}

impl Chart {
    /// Parses the `.chart` source, consulting `prompter` about duplications.
    ///
    /// # Errors
    ///
    /// Fails with [`LoadError::Io`] if reading fails, [`LoadError::Parse`] at the first
    /// malformed line, or [`LoadError::MissingSong`] if there was no `[Song]` section.
    pub fn from_reader<R: BufRead>(
        reader: R,
        mut prompter: impl Prompter,
    ) -> Result<Self, LoadError> {
        let mut cursor = LineCursor::new(reader);
        let mut chart = Self::default();
        let mut seen = HashSet::new();
        let mut has_song = false;

        while let Some(header) = cursor.next_line()? {
            let at_header =
                |err: ParseError| err.into_wrapper_line(header.number, header.text.as_str());
            let name = match Token::parse(&header.text) {
                Token::Blank => continue,
                Token::Header(name) => name,
                _ => return Err(at_header(ParseError::ExpectedSectionHeader).into()),
            };
            if !is_valid_section_name(name) {
                return Err(at_header(ParseError::InvalidSectionHeader(name.to_owned())).into());
            }
            let section: SectionName = name
                .parse()
                .map_err(|err: UnknownSection| at_header(err.into()))?;

            let reader = DataBlockReader::new(&mut cursor, &header, name);
            let block = match section {
                SectionName::Song => {
                    process_block(
                        reader,
                        MetadataProcessor::new(&mut chart.metadata, &mut prompter),
                    )?;
                    tracing::debug!(line = header.number, "decoded [Song]");
                    has_song = true;
                    continue;
                }
                SectionName::SyncTrack => {
                    Block::SyncTrack(process_block(reader, SyncProcessor::default())?)
                }
                SectionName::Events => {
                    Block::Events(process_block(reader, EventProcessor::default())?)
                }
                SectionName::Lyrics => {
                    Block::Lyrics(process_block(reader, LyricProcessor::default())?)
                }
                SectionName::Instrument(id) => Block::Instrument(
                    id,
                    process_block(reader, NoteProcessor::new(id.instrument))?,
                ),
            };
            tracing::debug!(line = header.number, %section, "decoded section");

            if !seen.insert(section) {
                let duplication = Duplication::Section { name: section };
                let what = duplication.to_string();
                let workaround = prompter.handle_duplication(duplication);
                tracing::warn!(%section, ?workaround, "duplicated section");
                let mut replace = false;
                workaround
                    .apply(&mut replace, true, what)
                    .map_err(at_header)?;
                if !replace {
                    continue;
                }
            }
            chart.add(block);
        }

        if !has_song {
            return Err(LoadError::MissingSong);
        }
        Ok(chart)
    }
}
