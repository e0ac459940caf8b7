//! This module handles the `[Events]` entries:
//!
//! - `time = E "text"` - A global event such as `section Intro`.

use crate::chart::{
    model::{metadata::strip_quotes, obj::Event, track::Track},
    parse::{ParseError, block::Entry, fields::parse_time, fields::split_code},
};

use super::ItemProcessor;

/// Reads the text of an `E` value, with one pair of surrounding quotes stripped.
///
/// Returns `None` if the code is not `E` or there is no text after it.
pub(crate) fn parse_event_text(value: &str) -> Option<String> {
    match split_code(value) {
        ("E", Some(rest)) => Some(strip_quotes(rest).to_owned()),
        _ => None,
    }
}

/// It processes the entries of `[Events]`.
#[derive(Debug, Default)]
pub struct EventProcessor {
    track: Track<Event>,
}

impl ItemProcessor for EventProcessor {
    type Output = Track<Event>;

    fn on_entry(&mut self, entry: &Entry) -> Result<(), ParseError> {
        let time = parse_time(&entry.key)?;
        let text = parse_event_text(&entry.value)
            .ok_or_else(|| ParseError::InvalidEvent(entry.value.clone()))?;
        self.track.push(Event::new(time, text));
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.track
    }
}
