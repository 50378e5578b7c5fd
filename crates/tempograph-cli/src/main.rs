//! Tempograph CLI - temporal edge graph preprocessing from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Convert a raw hyperlink log to canonical triples
//! tempograph convert wikipedia-growth.txt --format hyperlink
//!
//! # Densify vertex and snapshot ids
//! tempograph normalize wikipedia-growth.txt.teg
//!
//! # Synthesize deletion times (the core pipeline)
//! tempograph deletions wikipedia-growth.txt.teg.sim --seed 7
//!
//! # Show graph statistics
//! tempograph stats wikipedia-growth.txt.teg.sim
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempograph_core::formats::{Adapter, CastCsv, HyperlinkLog};
use tempograph_core::{normalize, pipeline, CondensedGraph, EdgeList};

#[derive(Parser)]
#[command(name = "tempograph")]
#[command(about = "Temporal edge graph preprocessing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize deletion times for a canonical edge file
    Deletions {
        /// Input file (source,target,timestamp lines with dense ids)
        input: PathBuf,

        /// Output file (defaults to <input>.deletions)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Random seed
        #[arg(long, default_value_t = tempograph_core::DEFAULT_SEED)]
        seed: u64,
    },

    /// Convert a raw dataset to canonical triples
    Convert {
        /// Raw input file
        input: PathBuf,

        /// Raw input format
        #[arg(short, long)]
        format: RawFormat,

        /// Output file (defaults to <input>.teg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Densify vertex and snapshot ids to zero-based contiguous ranges
    Normalize {
        /// Input file (canonical triples, raw ids)
        input: PathBuf,

        /// Output file (defaults to <input>.sim)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show statistics about a canonical edge file
    Stats {
        /// Input file (source,target,timestamp lines with dense ids)
        input: PathBuf,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RawFormat {
    /// Whitespace-delimited hyperlink log with % comments
    Hyperlink,
    /// Quoted CSV cast list, expanded to per-year co-occurrence
    Cast,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deletions {
            input,
            output,
            seed,
        } => cmd_deletions(&input, output.as_deref(), seed),
        Commands::Convert {
            input,
            format,
            output,
        } => cmd_convert(&input, format, output.as_deref()),
        Commands::Normalize { input, output } => cmd_normalize(&input, output.as_deref()),
        Commands::Stats { input, json } => cmd_stats(&input, json),
    }
}

fn cmd_deletions(input: &Path, output: Option<&Path>, seed: u64) -> Result<()> {
    let start = Instant::now();
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Processing {}...", input.display()));

    let report = pipeline::run(input, output, seed)
        .with_context(|| format!("Failed to preprocess {}", input.display()))?;

    pb.finish_with_message(format!("Done in {:.2?}", start.elapsed()));
    println!("Vertices:  {}", report.num_vertices);
    println!("Snapshots: {}", report.num_snapshots);
    println!("Edges:     {}", report.num_edges);
    println!("Wrote {}", report.output.display());

    Ok(())
}

fn cmd_convert(input: &Path, format: RawFormat, output: Option<&Path>) -> Result<()> {
    let output = output.map_or_else(|| appended(input, "teg"), Path::to_path_buf);

    let reader =
        File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let writer = BufWriter::new(
        File::create(&output).with_context(|| format!("Failed to create {}", output.display()))?,
    );

    let stats = match format {
        RawFormat::Hyperlink => HyperlinkLog.convert(reader, writer),
        RawFormat::Cast => CastCsv::default().convert(reader, writer),
    }
    .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!(
        "Read {} records, wrote {} edges",
        stats.records_read, stats.edges_written
    );
    println!("Converted {} -> {}", input.display(), output.display());

    Ok(())
}

fn cmd_normalize(input: &Path, output: Option<&Path>) -> Result<()> {
    let report = normalize::normalize_file(input, output)
        .with_context(|| format!("Failed to normalize {}", input.display()))?;

    println!("Vertices:  {}", report.num_vertices);
    println!("Snapshots: {}", report.num_snapshots);
    println!("Edges:     {}", report.num_edges);
    println!("Wrote {}", report.output.display());

    Ok(())
}

fn cmd_stats(input: &Path, json: bool) -> Result<()> {
    let start = Instant::now();
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading {}...", input.display()));

    let list =
        EdgeList::from_path(input).with_context(|| format!("Failed to load {}", input.display()))?;
    let graph = CondensedGraph::from_edge_list(list)
        .with_context(|| format!("Failed to condense {}", input.display()))?;

    pb.finish_with_message(format!("Loaded in {:.2?}", start.elapsed()));

    let stats = graph.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Temporal Edge Graph Statistics");
        println!("==============================");
        println!("Vertices:       {}", stats.num_vertices);
        println!("Snapshots:      {}", stats.num_snapshots);
        println!("Edges:          {}", stats.num_edges);
        println!("Max out-degree: {}", stats.max_out_degree);
        println!("Avg out-degree: {:.2}", stats.avg_out_degree);
    }

    Ok(())
}

/// `path.ext` keeping the existing extension: `growth.txt` -> `growth.txt.teg`.
fn appended(path: &Path, ext: &str) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".");
    os.push(ext);
    PathBuf::from(os)
}
