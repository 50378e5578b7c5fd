//! Cast-list CSV adapter.
//!
//! Raw format: a headered CSV where one column carries a comma-separated
//! member list (quoted when it embeds commas) and another carries the
//! release year. Each row's cast becomes a co-occurrence group keyed by
//! year, so two members share an edge in every year they appeared together.

use super::{Adapter, ConvertStats, Cooccurrence};
use crate::error::{Error, Result};
use std::io::{Read, Write};

/// Adapter for cast-list CSVs.
#[derive(Debug, Clone, Copy)]
pub struct CastCsv {
    /// Zero-based index of the member-list column.
    pub members_column: usize,
    /// Zero-based index of the year column.
    pub year_column: usize,
    /// Exact field count enforced per record, if set.
    pub expected_fields: Option<usize>,
}

impl Default for CastCsv {
    /// Column layout of the reference movie dataset: 12 columns, cast in
    /// column 5, release year in column 6.
    fn default() -> Self {
        Self {
            members_column: 5,
            year_column: 6,
            expected_fields: Some(12),
        }
    }
}

impl Adapter for CastCsv {
    fn convert<R: Read, W: Write>(&self, input: R, output: W) -> Result<ConvertStats> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let mut stats = ConvertStats::default();
        let mut groups = Cooccurrence::new();
        let widest = self.members_column.max(self.year_column);

        for result in reader.records() {
            let record =
                result.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            let line = record.position().map_or(0, csv::Position::line);

            if let Some(expected) = self.expected_fields {
                if record.len() != expected {
                    return Err(Error::Format {
                        line,
                        expected,
                        found: record.len(),
                    });
                }
            }
            if record.len() <= widest {
                return Err(Error::Format {
                    line,
                    expected: widest + 1,
                    found: record.len(),
                });
            }
            stats.records_read += 1;

            let year_field = record[self.year_column].trim();
            let year: u64 = year_field.parse().map_err(|source| Error::Parse {
                line,
                field: year_field.to_string(),
                source,
            })?;

            let members: Vec<&str> = record[self.members_column]
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .collect();

            groups.add_group(year, &members);
        }

        stats.edges_written = groups.write_triples(output)?;
        tracing::info!(
            records = stats.records_read,
            snapshots = groups.num_snapshots(),
            edges = stats.edges_written,
            "cast list converted"
        );

        Ok(stats)
    }
}
