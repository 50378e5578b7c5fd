//! Raw dataset adapters.
//!
//! Each adapter turns one raw relationship format into canonical
//! `source,target,timestamp` lines through a single interface:
//!
//! - [`HyperlinkLog`] - whitespace-delimited timestamped edge streams
//! - [`CastCsv`] - quoted CSV cast lists, expanded per-snapshot
//! - [`Cooccurrence`] - the shared snapshot-keyed co-occurrence builder
//!
//! Adapter output carries raw (string) vertex ids and raw timestamps; the
//! [`normalize`](crate::normalize) step densifies both spaces before the
//! core pipeline consumes the file.

mod cast;
mod cooccur;
mod hyperlink;

pub use cast::CastCsv;
pub use cooccur::Cooccurrence;
pub use hyperlink::HyperlinkLog;

use crate::error::Result;
use serde::Serialize;
use std::io::{Read, Write};

/// Statistics from one adapter conversion.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ConvertStats {
    /// Raw records consumed (excluding comments and headers).
    pub records_read: usize,
    /// Canonical edges written.
    pub edges_written: usize,
}

/// A format-specific front end producing canonical triples.
pub trait Adapter {
    /// Stream `input`, writing `source,target,timestamp` lines to `output`.
    fn convert<R: Read, W: Write>(&self, input: R, output: W) -> Result<ConvertStats>;
}
