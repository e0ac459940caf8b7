//! The chart data aggregate.

pub mod metadata;
pub mod obj;
pub mod track;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::chart::command::{Difficulty, Instrument, TrackId};

use self::{
    metadata::Metadata,
    obj::{ChartItem, Event, LyricItem, SyncEvent},
    track::Track,
};

/// An error occurred when editing the [`Chart`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelError {
    /// The instrument track to remove did not exist.
    #[error("no instrument track `{0}`")]
    TrackNotFound(TrackId),
    /// The metadata key was not an identifier.
    #[error("invalid metadata key `{0}`")]
    InvalidMetadataKey(String),
}

/// A decoded section, ready to be added to the [`Chart`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    /// `[Song]`.
    Metadata(Metadata),
    /// `[SyncTrack]`.
    SyncTrack(Track<SyncEvent>),
    /// `[Events]`.
    Events(Track<Event>),
    /// `[Lyrics]`.
    Lyrics(Track<LyricItem>),
    /// `[<Difficulty><Instrument>]`.
    Instrument(TrackId, Track<ChartItem>),
}

/// A chart data aggregate of `.chart` format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// The `[Song]` metadata.
    pub metadata: Metadata,
    /// The `[SyncTrack]`, tempo and time signature changes.
    pub sync_track: Track<SyncEvent>,
    /// The `[Events]`, global events such as sections.
    pub events: Track<Event>,
    /// The `[Lyrics]`, if any.
    pub lyrics: Option<Track<LyricItem>>,
    /// The instrument tracks, at most one for each pair of difficulty and instrument.
    pub instruments: BTreeMap<TrackId, Track<ChartItem>>,
}

impl Chart {
    /// Creates a chart with the metadata and nothing else.
    #[must_use]
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }

    /// Adds the decoded section. Metadata is merged by key, and any other section replaces
    /// the one already there.
    pub fn add(&mut self, block: Block) {
        match block {
            Block::Metadata(metadata) => self.add_metadata(metadata),
            Block::SyncTrack(track) => self.sync_track = track,
            Block::Events(track) => self.events = track,
            Block::Lyrics(track) => self.add_lyrics(track),
            Block::Instrument(id, track) => {
                self.add_instrument(id, track);
            }
        }
    }

    /// Merges the metadata, overwriting the values of the same keys.
    pub fn add_metadata(&mut self, metadata: Metadata) {
        self.metadata.merge(metadata);
    }

    /// Sets the lyrics, replacing the existing ones.
    pub fn add_lyrics(&mut self, lyrics: Track<LyricItem>) {
        self.lyrics = Some(lyrics);
    }

    /// Sets the instrument track, returning the one it replaced.
    pub fn add_instrument(
        &mut self,
        id: TrackId,
        track: Track<ChartItem>,
    ) -> Option<Track<ChartItem>> {
        self.instruments.insert(id, track)
    }

    /// Removes the instrument track and returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::TrackNotFound`] if there is no such track.
    pub fn remove_instrument(
        &mut self,
        difficulty: Difficulty,
        instrument: Instrument,
    ) -> Result<Track<ChartItem>, ModelError> {
        let id = TrackId::new(difficulty, instrument);
        self.instruments.remove(&id).ok_or(ModelError::TrackNotFound(id))
    }

    /// Returns the instrument track.
    #[must_use]
    pub fn instrument(
        &self,
        difficulty: Difficulty,
        instrument: Instrument,
    ) -> Option<&Track<ChartItem>> {
        self.instruments.get(&TrackId::new(difficulty, instrument))
    }

    /// Returns the mutable instrument track.
    pub fn instrument_mut(
        &mut self,
        difficulty: Difficulty,
        instrument: Instrument,
    ) -> Option<&mut Track<ChartItem>> {
        self.instruments.get_mut(&TrackId::new(difficulty, instrument))
    }

    /// The `[Song]` metadata.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The mutable `[Song]` metadata.
    pub const fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// The `[SyncTrack]`.
    #[must_use]
    pub const fn sync_track(&self) -> &Track<SyncEvent> {
        &self.sync_track
    }

    /// The mutable `[SyncTrack]`.
    pub const fn sync_track_mut(&mut self) -> &mut Track<SyncEvent> {
        &mut self.sync_track
    }

    /// The `[Events]`.
    #[must_use]
    pub const fn events(&self) -> &Track<Event> {
        &self.events
    }

    /// The mutable `[Events]`.
    pub const fn events_mut(&mut self) -> &mut Track<Event> {
        &mut self.events
    }

    /// The `[Lyrics]`, if any.
    #[must_use]
    pub const fn lyrics(&self) -> Option<&Track<LyricItem>> {
        self.lyrics.as_ref()
    }

    /// The mutable `[Lyrics]`, if any.
    pub const fn lyrics_mut(&mut self) -> Option<&mut Track<LyricItem>> {
        self.lyrics.as_mut()
    }

    /// The instrument tracks in the order of [`TrackId`].
    #[must_use]
    pub const fn instruments(&self) -> &BTreeMap<TrackId, Track<ChartItem>> {
        &self.instruments
    }

    /// The mutable instrument tracks.
    pub const fn instruments_mut(&mut self) -> &mut BTreeMap<TrackId, Track<ChartItem>> {
        &mut self.instruments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::model::obj::Note;

    #[test]
    fn add_dispatches_by_block() {
        let mut chart = Chart::default();
        let mut metadata = Metadata::new();
        metadata.insert("Name", "Song").unwrap();
        chart.add(Block::Metadata(metadata));

        let mut metadata = Metadata::new();
        metadata.insert("Resolution", 192_i64).unwrap();
        metadata.insert("Name", "Renamed").unwrap();
        chart.add(Block::Metadata(metadata));

        assert_eq!(chart.metadata.name(), Some("Renamed"));
        assert_eq!(chart.metadata.resolution(), Some(192));
        assert_eq!(chart.metadata.len(), 2);

        chart.add(Block::SyncTrack([SyncEvent::bpm(0, 120000)].into_iter().collect()));
        chart.add(Block::Events([Event::new(0, "section A")].into_iter().collect()));
        chart.add(Block::Lyrics(Track::new()));
        assert_eq!(chart.sync_track().len(), 1);
        assert_eq!(chart.events().len(), 1);
        assert_eq!(chart.lyrics, Some(Track::new()));
    }

    #[test]
    fn instrument_is_replaced_and_removed() {
        let id = TrackId::new(Difficulty::Hard, Instrument::Drums);
        let first: Track<ChartItem> = [ChartItem::from(Note::new(0, 1, 0))].into_iter().collect();
        let second: Track<ChartItem> = [ChartItem::from(Note::new(0, 2, 0))].into_iter().collect();

        let mut chart = Chart::default();
        assert_eq!(chart.add_instrument(id, first.clone()), None);
        assert_eq!(chart.add_instrument(id, second.clone()), Some(first));
        assert_eq!(chart.instrument(Difficulty::Hard, Instrument::Drums), Some(&second));

        assert_eq!(
            chart.remove_instrument(Difficulty::Hard, Instrument::Drums),
            Ok(second)
        );
        assert_eq!(
            chart.remove_instrument(Difficulty::Hard, Instrument::Drums),
            Err(ModelError::TrackNotFound(id))
        );
    }
}
