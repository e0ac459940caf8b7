//! Prelude module for the chart module.
//!
//! You can use `use chart_rs::chart::prelude::*;` to import all chart types at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_load_error};

pub use super::{
    LoadError,
    command::{
        Difficulty, Instrument, SectionName, TrackId, UnknownSection,
        flags::NoteFlags,
        mixin::{SourceLineMixin, SourceLineMixinExt},
    },
    dump,
    lex::{Line, LineCursor, Token},
    load, load_str, load_with_prompter,
    model::{
        Block, Chart, ModelError,
        metadata::{Metadata, MetadataValue},
        obj::{
            ChartItem, Event, LyricItem, LyricNote, LyricWord, Note, StarPower, SyncEvent,
            SyncEventKind,
        },
        track::{Timed, Track},
    },
    parse::{
        ParseError, ParseErrorWithLine,
        prompt::{
            AlwaysHalt, AlwaysUseNewer, AlwaysUseOlder, Duplication, DuplicationWorkaround,
            Prompter,
        },
    },
};
