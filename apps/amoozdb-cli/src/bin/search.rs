use std::path::PathBuf;

use amoozdb_cli::{init_tracing, load_settings};
use amoozdb_text::AliasSearcher;
use clap::Parser;

/// Queries the alias and prints the segments it owns.
#[derive(Parser)]
#[command(name = "amoozdb-search")]
struct Args {
    /// Query text; wrap in double quotes for a phrase.
    query: Option<String>,
    #[arg(long)]
    root: Option<PathBuf>,
    #[arg(long)]
    limit: Option<usize>,
    /// Match the whole text exactly instead of analyzing it.
    #[arg(long)]
    exact: bool,
    /// Ignore the query and list the newest segments.
    #[arg(long)]
    recent: bool,
    /// Glob of partitions to search instead of the alias pattern.
    #[arg(long)]
    target: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let settings = load_settings()?;
    let root = args.root.clone().unwrap_or_else(|| settings.root_dir());
    let limit = args.limit.unwrap_or(settings.search.default_limit);
    let searcher = AliasSearcher::new(root, settings.alias_pattern()?);

    let routed = if args.recent {
        searcher.recent(limit)?
    } else {
        let Some(query) = args.query.as_deref() else {
            anyhow::bail!("a query is required unless --recent is given");
        };
        if args.exact {
            println!("{} exact matches", searcher.count_exact(query)?);
            searcher.lookup_exact(query, limit)?
        } else {
            let target = args.target.as_deref().unwrap_or(searcher.pattern().glob());
            searcher.search_target(target, query, limit)?
        }
    };

    for (i, hit) in routed.segments.iter().enumerate() {
        let score = hit.score.map(|s| format!("{s:.4}")).unwrap_or_else(|| "-".to_string());
        let created = hit.segment.created_at.map(|at| at.to_rfc3339()).unwrap_or_default();
        println!("{}. score={}  partition={}  id={}  created_at={}", i + 1, score, hit.partition, hit.id, created);
        println!("   {}", hit.segment.text);
    }
    if !routed.declined.is_empty() {
        println!("{} hits from partitions outside '{}' were skipped", routed.declined.len(), searcher.pattern().alias());
    }
    Ok(())
}
