//! Temporal edge graph preprocessing.
//!
//! Converts raw relationship datasets into the canonical temporal edge
//! graph (TEG) exchange format and synthesizes bounded lifetime intervals
//! for every edge, producing inputs for temporal-graph query benchmarking:
//!
//! - [`EdgeList`] - one streaming pass over a canonical edge file
//! - [`validate_id_spaces`] - dense, zero-based id space checks
//! - [`CondensedGraph`] - dense-id adjacency as a flat arena plus offsets
//! - [`synthesize_deletions`] - reproducible pseudorandom edge lifetimes
//! - [`write_teg`] - canonical serialization
//! - [`formats`] - raw dataset adapters (hyperlink logs, cast lists)
//! - [`normalize`] - densification of raw id spaces
//!
//! The pipeline is strictly sequential: Loader → Validator → Builder →
//! Synthesizer → Writer, each stage consuming the previous stage's complete
//! output. Every failure is fatal for the run and propagates as [`Error`]
//! to the caller; nothing is written until all prior stages succeed.
//!
//! # Example
//!
//! ```rust
//! use tempograph_core::{synthesize_deletions, CondensedGraph, EdgeList};
//!
//! let input = "0,1,0\n1,2,1\n0,2,2\n";
//! let list = EdgeList::from_reader(input.as_bytes())?;
//! let mut graph = CondensedGraph::from_edge_list(list)?;
//! assert_eq!(graph.num_vertices(), 3);
//!
//! synthesize_deletions(&mut graph, 0);
//! for (_src, edge) in graph.iter() {
//!     assert!(edge.start <= edge.end);
//!     assert!((edge.end as usize) < graph.num_snapshots());
//! }
//! # Ok::<(), tempograph_core::Error>(())
//! ```

mod edge;
mod error;
pub mod formats;
mod graph;
mod loader;
pub mod normalize;
pub mod pipeline;
mod synth;
mod validate;
mod writer;

pub use edge::{OutgoingEdge, Timestamp, VertexId};
pub use error::{Error, Result};
pub use graph::{CondensedGraph, GraphStats};
pub use loader::EdgeList;
pub use pipeline::PipelineReport;
pub use synth::{synthesize_deletions, DEFAULT_SEED};
pub use validate::{validate_id_spaces, IdSpaces};
pub use writer::{write_teg, write_teg_file};
