use amoozdb_cli::init_tracing;
use amoozdb_text::analysis::{analyze, persian_index_analyzer, persian_search_analyzer};
use clap::Parser;

/// Shows the tokens the index or search analyzer produces for a text.
#[derive(Parser)]
#[command(name = "amoozdb-analyze")]
struct Args {
    text: String,
    /// Use the search analyzer instead of the index analyzer.
    #[arg(long)]
    search: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let mut analyzer = if args.search { persian_search_analyzer() } else { persian_index_analyzer() };
    for token in analyze(&mut analyzer, &args.text) {
        println!("{token}");
    }
}
