//! The `.chart` format parser and serializer.
//!
//! The `.chart` format is the plain text chart format of Clone Hero and Feedback. It holds the
//! song metadata, the tempo map, the global events, optional lyrics and a note track for every
//! pair of difficulty and instrument.
//!
//! [`chart`] module is the entry point: [`chart::load`] reads a [`chart::model::Chart`] and
//! [`chart::dump`] writes it back.
//!
//! # Features
//!
//! - `serde` derives `Serialize` and `Deserialize` on the chart model and the errors.
//! - `diagnostics` (default) enables the `diagnostics` module to render errors with `ariadne`.

pub mod chart;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
