//! Timestamped hyperlink stream adapter.
//!
//! Raw format: whitespace-delimited `source target date weight` lines with
//! `%`-prefixed comment lines, as published by the hyperlink-growth network
//! dumps. The `YYYY-MM-DD` date collapses to a numeric timestamp by
//! dropping the dashes, which preserves chronological order.

use super::{Adapter, ConvertStats};
use crate::error::{Error, Result};
use std::io::{BufRead, BufReader, Read, Write};

/// Expected fields per raw line.
const FIELDS: usize = 4;

/// How often the conversion reports progress, in input lines.
const PROGRESS_INTERVAL: u64 = 1_000_000;

/// Adapter for timestamped hyperlink logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct HyperlinkLog;

impl Adapter for HyperlinkLog {
    fn convert<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<ConvertStats> {
        let reader = BufReader::new(input);
        let mut stats = ConvertStats::default();
        let mut line_no: u64 = 0;

        for line in reader.lines() {
            let line = line?;
            line_no += 1;

            if line_no % PROGRESS_INTERVAL == 0 {
                tracing::debug!(line = line_no, "converting");
            }

            if line.starts_with('%') || line.trim().is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != FIELDS {
                return Err(Error::Format {
                    line: line_no,
                    expected: FIELDS,
                    found: parts.len(),
                });
            }
            stats.records_read += 1;

            let timestamp = parts[2].replace('-', "");
            timestamp.parse::<u64>().map_err(|source| Error::Parse {
                line: line_no,
                field: parts[2].to_string(),
                source,
            })?;

            writeln!(output, "{},{},{}", parts[0], parts[1], timestamp)?;
            stats.edges_written += 1;
        }

        output.flush()?;
        tracing::info!(
            records = stats.records_read,
            edges = stats.edges_written,
            "hyperlink log converted"
        );

        Ok(stats)
    }
}
