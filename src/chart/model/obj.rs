//! Definitions of the items on the tracks.

use crate::chart::command::flags::NoteFlags;

use super::track::Timed;

/// An event on the `[SyncTrack]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncEvent {
    /// The tick where the event happens.
    pub time: u64,
    /// What happens.
    pub kind: SyncEventKind,
}

/// The kind of [`SyncEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyncEventKind {
    /// `A`. Pins the tick to the absolute time in microseconds.
    Anchor(u64),
    /// `B`. Changes the tempo, in thousandths of BPM (`120000` is 120 BPM).
    Bpm(u64),
    /// `TS`. Changes the time signature.
    TimeSignature {
        /// The beats in a measure.
        numerator: u32,
        /// The note value of a beat. It is a power of two, written as its exponent and
        /// omitted when it is `4`.
        denominator: u32,
    },
}

impl SyncEventKind {
    /// The code written before the arguments.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Anchor(_) => "A",
            Self::Bpm(_) => "B",
            Self::TimeSignature { .. } => "TS",
        }
    }
}

impl SyncEvent {
    /// Creates a tempo change.
    #[must_use]
    pub const fn bpm(time: u64, millibeats: u64) -> Self {
        Self {
            time,
            kind: SyncEventKind::Bpm(millibeats),
        }
    }

    /// Creates an anchor.
    #[must_use]
    pub const fn anchor(time: u64, micros: u64) -> Self {
        Self {
            time,
            kind: SyncEventKind::Anchor(micros),
        }
    }

    /// Creates a time signature change.
    #[must_use]
    pub const fn time_signature(time: u64, numerator: u32, denominator: u32) -> Self {
        Self {
            time,
            kind: SyncEventKind::TimeSignature {
                numerator,
                denominator,
            },
        }
    }
}

impl Timed for SyncEvent {
    fn time(&self) -> u64 {
        self.time
    }
}

/// A text event, `E`. Found on the `[Events]` and the instrument tracks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// The tick where the event happens.
    pub time: u64,
    /// The text without surrounding quotes, such as `section Intro` or `solo`.
    pub text: String,
}

impl Event {
    /// Creates a text event.
    pub fn new(time: u64, text: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
        }
    }
}

impl Timed for Event {
    fn time(&self) -> u64 {
        self.time
    }
}

/// A playable note, `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// The tick where the note is placed.
    pub time: u64,
    /// The fret, from `0` to [`Instrument::max_fret`](crate::chart::command::Instrument::max_fret).
    /// It is `0` for an open note.
    pub fret: u32,
    /// The sustain length in ticks, `0` for a tap.
    pub length: u64,
    /// The modifiers of the note.
    pub flags: NoteFlags,
}

impl Note {
    /// Creates a note without modifiers.
    #[must_use]
    pub const fn new(time: u64, fret: u32, length: u64) -> Self {
        Self {
            time,
            fret,
            length,
            flags: NoteFlags::empty(),
        }
    }

    /// Returns the note with the modifiers added.
    #[must_use]
    pub const fn with_flags(mut self, flags: NoteFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    /// Whether the note is an open note.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.flags.contains(NoteFlags::OPEN)
    }
}

/// A phrase, `S`, such as star power (phrase `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarPower {
    /// The tick where the phrase starts.
    pub time: u64,
    /// The kind of the phrase.
    pub phrase: u32,
    /// The length of the phrase in ticks.
    pub length: u64,
}

/// An item on an instrument track.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartItem {
    /// `N`.
    Note(Note),
    /// `S`.
    StarPower(StarPower),
    /// `E`, a track-local event such as `solo`.
    Event(Event),
}

impl ChartItem {
    /// Returns the note if the item is.
    #[must_use]
    pub const fn as_note(&self) -> Option<&Note> {
        match self {
            Self::Note(note) => Some(note),
            _ => None,
        }
    }

    pub(crate) const fn as_note_mut(&mut self) -> Option<&mut Note> {
        match self {
            Self::Note(note) => Some(note),
            _ => None,
        }
    }
}

impl Timed for ChartItem {
    fn time(&self) -> u64 {
        match self {
            Self::Note(note) => note.time,
            Self::StarPower(phrase) => phrase.time,
            Self::Event(event) => event.time,
        }
    }
}

impl From<Note> for ChartItem {
    fn from(value: Note) -> Self {
        Self::Note(value)
    }
}

impl From<StarPower> for ChartItem {
    fn from(value: StarPower) -> Self {
        Self::StarPower(value)
    }
}

impl From<Event> for ChartItem {
    fn from(value: Event) -> Self {
        Self::Event(value)
    }
}

/// A phoneme marker on the lyrics, `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LyricNote {
    /// The tick of the marker.
    pub time: u64,
    /// The pitch or id of the marker.
    pub value: u32,
    /// The length in ticks.
    pub length: u64,
}

/// A word fragment on the lyrics, `E`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LyricWord {
    /// The tick of the word.
    pub time: u64,
    /// The text without surrounding quotes.
    pub text: String,
}

/// An item on the lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LyricItem {
    /// `N`.
    Note(LyricNote),
    /// `E`.
    Word(LyricWord),
}

impl Timed for LyricItem {
    fn time(&self) -> u64 {
        match self {
            Self::Note(note) => note.time,
            Self::Word(word) => word.time,
        }
    }
}
