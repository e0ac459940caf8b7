//! Definitions of the section names and the values they are made of.
//!
//! A `.chart` file is a sequence of bracketed sections. [`SectionName`] is the grammar
//! dispatch table: it maps the text between the brackets onto the decoder which understands
//! the body of that section.

pub mod flags;
pub mod mixin;

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A difficulty of the instrument track.
///
/// The variant order is the canonical order of the difficulties, which is also the order
/// the serializer writes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// `Easy`.
    Easy,
    /// `Medium`.
    Medium,
    /// `Hard`.
    Hard,
    /// `Expert`.
    Expert,
}

impl Difficulty {
    /// All the difficulties in canonical order.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// The prefix of the section header for this difficulty.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An instrument of the instrument track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instrument {
    /// `Single`, the lead guitar.
    Single,
    /// `DoubleGuitar`, the co-op guitar.
    DoubleGuitar,
    /// `DoubleBass`.
    DoubleBass,
    /// `DoubleRhythm`.
    DoubleRhythm,
    /// `Keyboard`.
    Keyboard,
    /// `Drums`.
    Drums,
    /// `GHLGuitar`, the six-fret guitar.
    GhlGuitar,
    /// `GHLBass`, the six-fret bass.
    GhlBass,
}

impl Instrument {
    /// All the instruments in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Single,
        Self::DoubleGuitar,
        Self::DoubleBass,
        Self::DoubleRhythm,
        Self::Keyboard,
        Self::Drums,
        Self::GhlGuitar,
        Self::GhlBass,
    ];

    /// The suffix of the section header for this instrument.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::DoubleGuitar => "DoubleGuitar",
            Self::DoubleBass => "DoubleBass",
            Self::DoubleRhythm => "DoubleRhythm",
            Self::Keyboard => "Keyboard",
            Self::Drums => "Drums",
            Self::GhlGuitar => "GHLGuitar",
            Self::GhlBass => "GHLBass",
        }
    }

    /// Whether the instrument is a six-fret one, whose notes carry
    /// [`NoteFlags::GHLIVE`](flags::NoteFlags::GHLIVE).
    #[must_use]
    pub const fn is_ghl(self) -> bool {
        matches!(self, Self::GhlGuitar | Self::GhlBass)
    }

    /// The greatest fret which makes a playable note.
    #[must_use]
    pub const fn max_fret(self) -> u32 {
        if self.is_ghl() { 5 } else { 4 }
    }

    /// The reserved fret value which makes an open note.
    ///
    /// A note line with this fret is read as fret `0` with [`NoteFlags::OPEN`](flags::NoteFlags::OPEN).
    #[must_use]
    pub const fn open_fret(self) -> u32 {
        self.max_fret() + 1
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The key of an instrument track, a pair of difficulty and instrument.
///
/// Ordered by difficulty first, then by instrument. Serialized as its header name, such as
/// `ExpertSingle`, so that it can be a key of maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId {
    /// The difficulty of the track.
    pub difficulty: Difficulty,
    /// The instrument of the track.
    pub instrument: Instrument,
}

impl TrackId {
    /// Creates a new track id.
    #[must_use]
    pub const fn new(difficulty: Difficulty, instrument: Instrument) -> Self {
        Self {
            difficulty,
            instrument,
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.difficulty, self.instrument)
    }
}

impl FromStr for TrackId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find_map(|difficulty| {
                let rest = s.strip_prefix(difficulty.as_str())?;
                let instrument = Instrument::ALL
                    .into_iter()
                    .find(|instrument| instrument.as_str() == rest)?;
                Some(Self::new(difficulty, instrument))
            })
            .ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TrackId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TrackId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// The name of a section, which selects how to decode its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionName {
    /// `[Song]`, the metadata.
    Song,
    /// `[SyncTrack]`, the anchors, tempo and time signature changes.
    SyncTrack,
    /// `[Events]`, the global events such as sections.
    Events,
    /// `[Lyrics]`, also accepted as `[PART VOCALS]`.
    Lyrics,
    /// `[<Difficulty><Instrument>]`, an instrument track.
    Instrument(TrackId),
}

impl SectionName {
    /// The header name written by the serializer for the lyrics.
    pub const LYRICS: &'static str = "Lyrics";
    /// The other header name accepted for the lyrics.
    pub const LYRICS_ALIAS: &'static str = "PART VOCALS";
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Song => f.write_str("Song"),
            Self::SyncTrack => f.write_str("SyncTrack"),
            Self::Events => f.write_str("Events"),
            Self::Lyrics => f.write_str(Self::LYRICS),
            Self::Instrument(id) => id.fmt(f),
        }
    }
}

/// The section name was not any of the known sections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionName {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Song" => Self::Song,
            "SyncTrack" => Self::SyncTrack,
            "Events" => Self::Events,
            Self::LYRICS | Self::LYRICS_ALIAS => Self::Lyrics,
            other => Self::Instrument(other.parse()?),
        })
    }
}
