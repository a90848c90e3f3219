use amoozdb_cli::{init_tracing, load_settings};
use amoozdb_core::settings::{alias_actions, index_body, partition_name};
use clap::Parser;

/// Prints the request bodies that provision a partition and attach it to the alias.
#[derive(Parser)]
#[command(name = "amoozdb-settings")]
struct Args {
    /// Partition to attach; defaults to the one receiving writes right now.
    #[arg(long)]
    partition: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let settings = load_settings()?;
    let alias = settings.alias_pattern()?;
    let partition = args
        .partition
        .unwrap_or_else(|| partition_name(alias.alias(), settings.store.rotation, chrono::Utc::now()));
    if !alias.matches_name(&partition) {
        anyhow::bail!("partition '{}' does not match '{}'", partition, alias.glob());
    }

    println!("PUT /{partition}");
    println!("{}", serde_json::to_string_pretty(&index_body(&settings.index))?);
    println!("POST /_aliases");
    println!("{}", serde_json::to_string_pretty(&alias_actions(alias.alias(), &partition))?);
    Ok(())
}
