//! This module handles the `[Lyrics]` entries:
//!
//! - `time = N value length` - A phoneme marker.
//! - `time = E "word"` - A word fragment.

use itertools::Itertools;

use crate::chart::{
    model::{
        obj::{LyricItem, LyricNote, LyricWord},
        track::Track,
    },
    parse::{
        ParseError,
        block::Entry,
        fields::{parse_fields, parse_time, split_code},
    },
};

use super::{ItemProcessor, event::parse_event_text};

/// It processes the entries of `[Lyrics]`.
#[derive(Debug, Default)]
pub struct LyricProcessor {
    track: Track<LyricItem>,
}

impl ItemProcessor for LyricProcessor {
    type Output = Track<LyricItem>;

    fn on_entry(&mut self, entry: &Entry) -> Result<(), ParseError> {
        let time = parse_time(&entry.key)?;
        let value = entry.value.as_str();
        let invalid = || ParseError::InvalidLyric(value.to_owned());
        let item = match split_code(value) {
            (code @ "N", rest) => {
                let fields: Vec<u64> = parse_fields(code, rest, (2, 2), invalid)?;
                let Some((pitch, length)) = fields.into_iter().collect_tuple() else {
                    return Err(invalid());
                };
                LyricItem::Note(LyricNote {
                    time,
                    value: u32::try_from(pitch)
                        .map_err(|_| ParseError::InvalidNumber(pitch.to_string()))?,
                    length,
                })
            }
            ("E", _) => LyricItem::Word(LyricWord {
                time,
                text: parse_event_text(value).ok_or_else(invalid)?,
            }),
            _ => return Err(invalid()),
        };
        self.track.push(item);
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.track
    }
}
