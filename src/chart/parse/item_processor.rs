//! Decoders from the entries of a section into the typed items.
//!
//! Every section kind has its own [`ItemProcessor`]. The driver feeds the entries in the
//! source order, then takes the decoded section with [`ItemProcessor::finish`].

pub mod event;
pub mod lyric;
pub mod metadata;
pub mod note;
pub mod sync;

use std::io::BufRead;

use crate::chart::{LoadError, command::mixin::SourceLineMixinExt};

use super::{
    ParseError,
    block::{DataBlockReader, Entry},
};

pub use self::{
    event::EventProcessor, lyric::LyricProcessor, metadata::MetadataProcessor,
    note::NoteProcessor, sync::SyncProcessor,
};

/// A decoder of the entries in one section.
pub trait ItemProcessor {
    /// The decoded section.
    type Output;

    /// Decodes an entry.
    ///
    /// # Errors
    ///
    /// Fails if the entry is not valid in the section.
    fn on_entry(&mut self, entry: &Entry) -> Result<(), ParseError>;

    /// Finishes the section.
    fn finish(self) -> Self::Output;
}

/// Feeds all the entries from the reader into the processor.
///
/// # Errors
///
/// Fails with the first error from the reader or the processor, located at the entry.
pub fn process_block<R: BufRead, I: ItemProcessor>(
    reader: DataBlockReader<'_, R>,
    mut processor: I,
) -> Result<I::Output, LoadError> {
    for entry in reader {
        let entry = entry?;
        processor
            .on_entry(entry.content())
            .map_err(|err| err.into_wrapper(&entry))?;
    }
    Ok(processor.finish())
}
