//! Writing [`Chart`] back into the `.chart` format.
//!
//! The output reads back into an equal [`Chart`] with [`load`](super::load). Sections are
//! written in the order `[Song]`, `[Events]`, `[SyncTrack]`, `[Lyrics]`, then the instrument
//! tracks from `Easy` to `Expert`.

use std::{fmt, io};

use crate::chart::{
    command::{Instrument, SectionName},
    model::{
        Chart,
        metadata::Metadata,
        obj::{ChartItem, Event, LyricItem, SyncEvent, SyncEventKind},
        track::Track,
    },
};

const INDENT: &str = "  ";

impl Chart {
    /// Renders the chart as `.chart` text.
    #[must_use]
    pub fn unparse(&self) -> String {
        self.to_string()
    }

    /// Writes the chart as `.chart` text into `writer`.
    ///
    /// # Errors
    ///
    /// Fails if writing fails.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, SectionName::Song, |f| write_metadata(f, &self.metadata))?;
        write_section(f, SectionName::Events, |f| write_events(f, &self.events))?;
        write_section(f, SectionName::SyncTrack, |f| {
            write_sync_track(f, &self.sync_track)
        })?;
        if let Some(lyrics) = &self.lyrics {
            write_section(f, SectionName::Lyrics, |f| write_lyrics(f, lyrics))?;
        }
        for (&id, track) in &self.instruments {
            write_section(f, SectionName::Instrument(id), |f| {
                write_items(f, id.instrument, track)
            })?;
        }
        tracing::debug!(instruments = self.instruments.len(), "serialized chart");
        Ok(())
    }
}

fn write_section<W: fmt::Write>(
    f: &mut W,
    name: SectionName,
    body: impl FnOnce(&mut W) -> fmt::Result,
) -> fmt::Result {
    writeln!(f, "[{name}]")?;
    writeln!(f, "{{")?;
    body(f)?;
    writeln!(f, "}}")?;
    writeln!(f)
}

fn write_metadata(f: &mut impl fmt::Write, metadata: &Metadata) -> fmt::Result {
    for (key, value) in metadata {
        writeln!(f, "{INDENT}{key} = {value}")?;
    }
    Ok(())
}

fn write_events(f: &mut impl fmt::Write, events: &Track<Event>) -> fmt::Result {
    for Event { time, text } in events {
        writeln!(f, "{INDENT}{time} = E \"{text}\"")?;
    }
    Ok(())
}

fn write_sync_track(f: &mut impl fmt::Write, sync_track: &Track<SyncEvent>) -> fmt::Result {
    for SyncEvent { time, kind } in sync_track {
        write!(f, "{INDENT}{time} = {} ", kind.code())?;
        match *kind {
            SyncEventKind::Anchor(value) | SyncEventKind::Bpm(value) => writeln!(f, "{value}")?,
            SyncEventKind::TimeSignature {
                numerator,
                denominator: 4,
            } => writeln!(f, "{numerator}")?,
            SyncEventKind::TimeSignature {
                numerator,
                denominator,
            } => writeln!(f, "{numerator} {}", denominator.trailing_zeros())?,
        }
    }
    Ok(())
}

fn write_lyrics(f: &mut impl fmt::Write, lyrics: &Track<LyricItem>) -> fmt::Result {
    for item in lyrics {
        match item {
            LyricItem::Note(note) => writeln!(
                f,
                "{INDENT}{} = N {} {}",
                note.time, note.value, note.length
            )?,
            LyricItem::Word(word) => writeln!(f, "{INDENT}{} = E \"{}\"", word.time, word.text)?,
        }
    }
    Ok(())
}

fn write_items(
    f: &mut impl fmt::Write,
    instrument: Instrument,
    track: &Track<ChartItem>,
) -> fmt::Result {
    for item in track {
        match item {
            ChartItem::Note(note) => {
                let fret = if note.is_open() {
                    instrument.open_fret()
                } else {
                    note.fret
                };
                writeln!(f, "{INDENT}{} = N {fret} {}", note.time, note.length)?;
                for flag in note.flags.frets() {
                    writeln!(f, "{INDENT}{} = N {flag} 0", note.time)?;
                }
            }
            ChartItem::StarPower(phrase) => writeln!(
                f,
                "{INDENT}{} = S {} {}",
                phrase.time, phrase.phrase, phrase.length
            )?,
            ChartItem::Event(event) => {
                write!(f, "{INDENT}{} = E ", event.time)?;
                if needs_quotes(&event.text) {
                    writeln!(f, "\"{}\"", event.text)?;
                } else {
                    f.write_str(&event.text)?;
                    f.write_char('\n')?;
                }
            }
        }
    }
    Ok(())
}

/// Whether the track event would not read back identically without quotes.
fn needs_quotes(text: &str) -> bool {
    text.is_empty() || text.trim() != text || text.starts_with('"')
}

/// Writes the chart as `.chart` text into `writer`.
///
/// # Errors
///
/// Fails if writing fails.
pub fn dump(chart: &Chart, writer: impl io::Write) -> io::Result<()> {
    chart.write_to(writer)
}
