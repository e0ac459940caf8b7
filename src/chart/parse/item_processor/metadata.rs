//! This module handles the `[Song]` entries:
//!
//! - `Key = 192` - An integer value.
//! - `Key = "text"` - A string value. A quoted numeral is still an integer.

use crate::chart::{
    model::metadata::{Metadata, MetadataValue, is_valid_key},
    parse::{
        ParseError,
        block::Entry,
        prompt::{Duplication, Prompter},
    },
};

use super::ItemProcessor;

/// It processes the entries of `[Song]` into the metadata of the chart.
///
/// The entries are written into the existing metadata, so a key defined again in a later
/// `[Song]` section is also a duplication.
pub struct MetadataProcessor<'a, P> {
    target: &'a mut Metadata,
    prompter: &'a mut P,
}

impl<'a, P: Prompter> MetadataProcessor<'a, P> {
    /// Creates a processor which writes into `target`.
    pub const fn new(target: &'a mut Metadata, prompter: &'a mut P) -> Self {
        Self { target, prompter }
    }
}

impl<P: Prompter> ItemProcessor for MetadataProcessor<'_, P> {
    type Output = ();

    fn on_entry(&mut self, entry: &Entry) -> Result<(), ParseError> {
        let key = entry.key.as_str();
        if !is_valid_key(key) {
            return Err(ParseError::InvalidMetadataKey(key.to_owned()));
        }
        let newer = MetadataValue::parse(&entry.value);
        let Some(older) = self.target.get_mut(key) else {
            self.target
                .insert(key, newer)
                .map_err(|_| ParseError::InvalidMetadataKey(key.to_owned()))?;
            return Ok(());
        };
        let duplication = Duplication::Metadata {
            key,
            older: &*older,
            newer: &newer,
        };
        let what = duplication.to_string();
        let workaround = self.prompter.handle_duplication(duplication);
        tracing::warn!(key, ?workaround, "duplicated metadata key");
        workaround.apply(older, newer, what)
    }

    fn finish(self) -> Self::Output {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::parse::prompt::{AlwaysHalt, AlwaysUseNewer, AlwaysUseOlder};

    fn entry(key: &str, value: &str) -> Entry {
        Entry {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }

    #[test]
    fn typed_values() {
        let mut metadata = Metadata::new();
        let mut prompter = AlwaysUseNewer;
        let mut processor = MetadataProcessor::new(&mut metadata, &mut prompter);
        processor.on_entry(&entry("Resolution", "192")).unwrap();
        processor.on_entry(&entry("Name", "\"Song Title\"")).unwrap();
        processor.on_entry(&entry("Offset", "\"120\"")).unwrap();
        processor.finish();

        assert_eq!(metadata.resolution(), Some(192));
        assert_eq!(metadata.name(), Some("Song Title"));
        assert_eq!(metadata.get("Offset"), Some(&MetadataValue::Integer(120)));
    }

    #[test]
    fn invalid_key() {
        let mut metadata = Metadata::new();
        let mut prompter = AlwaysUseNewer;
        let mut processor = MetadataProcessor::new(&mut metadata, &mut prompter);
        assert_eq!(
            processor.on_entry(&entry("192", "N 0 0")),
            Err(ParseError::InvalidMetadataKey("192".to_owned()))
        );
    }

    #[test]
    fn duplicated_key_follows_prompter() {
        let mut metadata = Metadata::new();
        MetadataProcessor::new(&mut metadata, &mut AlwaysUseOlder)
            .on_entry(&entry("Name", "\"a\""))
            .unwrap();
        MetadataProcessor::new(&mut metadata, &mut AlwaysUseOlder)
            .on_entry(&entry("Name", "\"b\""))
            .unwrap();
        assert_eq!(metadata.name(), Some("a"));

        MetadataProcessor::new(&mut metadata, &mut AlwaysUseNewer)
            .on_entry(&entry("Name", "\"c\""))
            .unwrap();
        assert_eq!(metadata.name(), Some("c"));

        assert_eq!(
            MetadataProcessor::new(&mut metadata, &mut AlwaysHalt)
                .on_entry(&entry("Name", "\"d\"")),
            Err(ParseError::Duplicated {
                what: "metadata key `Name`".to_owned()
            })
        );
        assert_eq!(metadata.name(), Some("c"));
        assert_eq!(metadata.len(), 1);
    }
}
