//! This module handles the entries of the instrument tracks:
//!
//! - `time = N fret length` - A note. The fret one past the maximum of the instrument makes an
//!   open note, and a greater fret adds a flag to the last note instead.
//! - `time = S phrase length` - A phrase such as star power.
//! - `time = E text` - A track event such as `solo`.

use itertools::Itertools;

use crate::chart::{
    command::{Instrument, flags::NoteFlags},
    model::{
        obj::{ChartItem, Event, Note, StarPower},
        track::Track,
    },
    parse::{
        ParseError,
        block::Entry,
        fields::{parse_fields, parse_time, split_code},
    },
};

use super::{ItemProcessor, event::parse_event_text};

/// It processes the entries of an instrument track.
#[derive(Debug)]
pub struct NoteProcessor {
    instrument: Instrument,
    track: Track<ChartItem>,
    /// Index of the note appended last, which receives flag-only lines.
    last_note: Option<usize>,
}

impl NoteProcessor {
    /// Creates a processor for the track of the instrument.
    #[must_use]
    pub const fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            track: Track::new(),
            last_note: None,
        }
    }

    fn push(&mut self, item: ChartItem) {
        let is_note = item.as_note().is_some();
        let index = self.track.push(item);
        if is_note {
            self.last_note = Some(index);
        } else if let Some(last) = self.last_note.as_mut() {
            if *last >= index {
                *last += 1;
            }
        }
    }

    fn on_note(&mut self, time: u64, fret: u32, length: u64) -> Result<(), ParseError> {
        let instrument = self.instrument;
        let live = if instrument.is_ghl() {
            NoteFlags::GHLIVE
        } else {
            NoteFlags::empty()
        };
        if fret == instrument.open_fret() {
            let note = Note::new(time, 0, length).with_flags(NoteFlags::OPEN | live);
            self.push(note.into());
        } else if fret > instrument.max_fret() {
            let flag = NoteFlags::from_fret(fret).ok_or(ParseError::FlagOutOfRange(fret))?;
            let note = self
                .last_note
                .and_then(|index| self.track.get_mut(index))
                .and_then(ChartItem::as_note_mut)
                .ok_or(ParseError::FlagWithoutNote(fret))?;
            note.flags |= flag;
            tracing::trace!(time = note.time, fret, "flag merged into note");
        } else {
            self.push(Note::new(time, fret, length).with_flags(live).into());
        }
        Ok(())
    }
}

impl ItemProcessor for NoteProcessor {
    type Output = Track<ChartItem>;

    fn on_entry(&mut self, entry: &Entry) -> Result<(), ParseError> {
        let time = parse_time(&entry.key)?;
        let value = entry.value.as_str();
        let invalid = || ParseError::InvalidTrackItem(value.to_owned());
        let to_u32 = |number: u64| {
            u32::try_from(number).map_err(|_| ParseError::InvalidNumber(number.to_string()))
        };
        match split_code(value) {
            (code @ "N", rest) => {
                let fields: Vec<u64> = parse_fields(code, rest, (2, 2), invalid)?;
                let Some((fret, length)) = fields.into_iter().collect_tuple() else {
                    return Err(invalid());
                };
                self.on_note(time, to_u32(fret)?, length)?;
            }
            (code @ "S", rest) => {
                let fields: Vec<u64> = parse_fields(code, rest, (2, 2), invalid)?;
                let Some((phrase, length)) = fields.into_iter().collect_tuple() else {
                    return Err(invalid());
                };
                let phrase = to_u32(phrase)?;
                self.push(
                    StarPower {
                        time,
                        phrase,
                        length,
                    }
                    .into(),
                );
            }
            ("E", _) => {
                let text = parse_event_text(value).ok_or_else(invalid)?;
                self.push(Event::new(time, text).into());
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.track
    }
}
