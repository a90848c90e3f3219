use std::path::PathBuf;

use amoozdb_cli::{init_tracing, load_settings};
use amoozdb_core::ingest::SegmentSource;
use amoozdb_core::traits::SegmentStore;
use amoozdb_text::PartitionStore;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Reads `.txt` files and saves every paragraph as a segment.
#[derive(Parser)]
#[command(name = "amoozdb-indexer")]
struct Args {
    /// Directory scanned recursively for `.txt` files.
    data_dir: PathBuf,
    /// Store root; defaults to `store.root_dir` from the config.
    #[arg(long)]
    root: Option<PathBuf>,
    /// Read at most this many files.
    #[arg(long)]
    limit: Option<usize>,
    /// Segments per commit.
    #[arg(long, default_value_t = 500)]
    batch: usize,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut settings = load_settings()?;
    if let Some(root) = &args.root {
        settings.store.root_dir = root.to_string_lossy().to_string();
    }

    let source = args.limit.map_or_else(SegmentSource::new, SegmentSource::with_limit);
    let mut segments = source.read_directory(&args.data_dir)?;
    if segments.is_empty() {
        return Ok(());
    }
    let store = PartitionStore::from_settings(&settings)?;
    info!(root = %store.root().display(), alias = store.alias(), "indexing {} segments", segments.len());

    let bar = ProgressBar::new(segments.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} segments ({eta})")?);
    let mut saved = 0;
    for chunk in segments.chunks_mut(args.batch.max(1)) {
        for segment in chunk.iter_mut() {
            segment.before_save();
        }
        saved += store.persist_batch(chunk)?.len();
        bar.inc(chunk.len() as u64);
    }
    bar.finish_and_clear();
    info!("saved {} segments", saved);
    Ok(())
}
