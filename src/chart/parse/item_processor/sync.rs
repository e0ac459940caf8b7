//! This module handles the `[SyncTrack]` entries:
//!
//! - `time = A micros` - Anchor.
//! - `time = B millibeats` - Tempo change.
//! - `time = TS numerator [exponent]` - Time signature change, the denominator is
//!   `2^exponent` and `4` when omitted.

use itertools::Itertools;

use crate::chart::{
    model::{
        obj::{SyncEvent, SyncEventKind},
        track::Track,
    },
    parse::{
        ParseError,
        block::Entry,
        fields::{parse_fields, parse_time, split_code},
    },
};

use super::ItemProcessor;

/// It processes the entries of `[SyncTrack]`.
#[derive(Debug, Default)]
pub struct SyncProcessor {
    track: Track<SyncEvent>,
}

impl SyncProcessor {
    fn parse_kind(value: &str) -> Result<SyncEventKind, ParseError> {
        let invalid = || ParseError::InvalidSyncEvent(value.to_owned());
        let (code, rest) = split_code(value);
        Ok(match code {
            "A" => {
                let fields: Vec<u64> = parse_fields(code, rest, (1, 1), invalid)?;
                SyncEventKind::Anchor(fields.into_iter().exactly_one().map_err(|_| invalid())?)
            }
            "B" => {
                let fields: Vec<u64> = parse_fields(code, rest, (1, 1), invalid)?;
                SyncEventKind::Bpm(fields.into_iter().exactly_one().map_err(|_| invalid())?)
            }
            "TS" => {
                let fields: Vec<u32> = parse_fields(code, rest, (1, 2), invalid)?;
                let mut fields = fields.into_iter();
                let numerator = fields.next().ok_or_else(invalid)?;
                let denominator = match fields.next() {
                    Some(exponent) => 2_u32.checked_pow(exponent).ok_or_else(invalid)?,
                    None => 4,
                };
                SyncEventKind::TimeSignature {
                    numerator,
                    denominator,
                }
            }
            _ => return Err(invalid()),
        })
    }
}

impl ItemProcessor for SyncProcessor {
    type Output = Track<SyncEvent>;

    fn on_entry(&mut self, entry: &Entry) -> Result<(), ParseError> {
        let time = parse_time(&entry.key)?;
        let kind = Self::parse_kind(&entry.value)?;
        self.track.push(SyncEvent { time, kind });
        Ok(())
    }

    fn finish(self) -> Self::Output {
        self.track
    }
}
