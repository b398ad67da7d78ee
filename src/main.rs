use anyhow::Context;
use clap::Parser;
use sitefind::{MatchMode, RawDocument, SearchConfig, SearchEngine};
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Full-text search over a static-site document store", long_about = None)]
struct Args {
    /// Path to the JSON document-store feed
    #[arg(short, long, default_value = "store.json")]
    store: String,

    /// Query to run against the feed
    #[arg(short, long)]
    query: String,

    /// Match mode: "any" or "all"
    #[arg(short, long, default_value = "any")]
    mode: String,

    /// Maximum number of results to print
    #[arg(short, long)]
    limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let match_mode: MatchMode = args.mode.parse()?;

    let file = File::open(&args.store)
        .with_context(|| format!("failed to open document store '{}'", args.store))?;
    let records: Vec<RawDocument> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse document store '{}'", args.store))?;

    let config = SearchConfig {
        match_mode,
        result_limit: args.limit,
        ..Default::default()
    };
    let engine = SearchEngine::with_config(config)?;

    let start = Instant::now();
    engine.load(records)?;
    println!(
        "Indexed {} documents in {:?}",
        engine.document_count(),
        start.elapsed()
    );

    let start = Instant::now();
    let results = engine.search(&args.query);
    let duration = start.elapsed();

    println!();
    println!(
        "Query \"{}\" matched {} documents in {:?}",
        args.query, results.total, duration
    );
    println!();

    for (hit, ranked) in results.hits.iter().zip(&results.ranked) {
        println!("{:.4}\t{}\t{}", ranked.score, hit.title, hit.url);
    }

    Ok(())
}
