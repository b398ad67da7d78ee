use sitefind::{
    InvertedIndex, MatchMode, QueryOptions, RawDocument, SearchConfig, SearchEngine,
};

fn blog_feed() -> Vec<RawDocument> {
    vec![
        RawDocument::new("posts/colstore", "Column Store (SoA)", "/notes/colstore.html")
            .with_excerpt("Crypto L2 analysis: column store architecture and workflow")
            .with_tags(vec!["jekyll".to_string(), "howto".to_string()])
            .with_categories(vec!["notes".to_string()]),
        RawDocument::new("posts/cpp", "CPP Learnings", "/notes/cpp.html")
            .with_excerpt("Value categories, lifetime and storage, the object model")
            .with_tags(vec!["cpp".to_string()])
            .with_categories(vec!["notes".to_string()]),
        RawDocument::new("posts/wsl", "WSL Cheatsheet", "/notes/wsl.html")
            .with_excerpt("From first principles to power user: shells and environments")
            .with_tags(vec!["wsl".to_string(), "linux".to_string()])
            .with_categories(vec!["notes".to_string()]),
    ]
}

fn main() -> anyhow::Result<()> {
    println!("=== sitefind basic usage ===\n");

    // One engine, one tokenizer configuration shared by build and query
    let engine = SearchEngine::with_config(SearchConfig::default())?;
    engine.load(blog_feed())?;
    println!("Indexed {} documents\n", engine.document_count());

    // Example 1: ranked search
    println!("--- Search for 'column store' ---");
    let results = engine.search("column store");
    for (hit, ranked) in results.hits.iter().zip(&results.ranked) {
        println!("[{:.4}] {} ({})", ranked.score, hit.title, hit.url);
    }

    // Example 2: a tag match outranks an excerpt-only match
    println!("\n--- Search for 'cpp' ---");
    for ranked in &engine.search("cpp").ranked {
        println!("[{:.4}] {}", ranked.score, ranked.doc_id);
    }

    // Example 3: require every query term
    println!("\n--- 'column lifetime' with match mode all ---");
    let all = engine.search_with(
        "column lifetime",
        &QueryOptions {
            match_mode: Some(MatchMode::All),
            ..Default::default()
        },
    );
    println!("{} documents match every term", all.total);

    // Example 4: result limit
    println!("\n--- 'notes' limited to 2 results ---");
    let limited = engine.search_with(
        "notes",
        &QueryOptions {
            limit: Some(2),
            ..Default::default()
        },
    );
    println!("showing {} of {} candidates", limited.hits.len(), limited.total);

    // Example 5: wholesale rebuild replaces the index atomically
    println!("\n--- Rebuild after a content change ---");
    let mut feed = blog_feed();
    feed.push(
        RawDocument::new("posts/raii", "Object Model & RAII", "/notes/raii.html")
            .with_excerpt("Ownership, lifetime, memory")
            .with_tags(vec!["cpp".to_string()])
            .with_categories(vec!["notes".to_string()]),
    );
    engine.load(feed)?;
    println!("now {} documents indexed", engine.document_count());

    // Example 6: index snapshot round-trip
    println!("\n--- Index snapshot ---");
    let store = sitefind::DocumentStore::load(blog_feed())?;
    let tokenizer = sitefind::Tokenizer::from_config(&SearchConfig::default());
    let index = InvertedIndex::build(&store, &tokenizer);
    let bytes = index.to_bytes()?;
    let restored = InvertedIndex::from_bytes(&bytes)?;
    println!(
        "snapshot is {} bytes, {} terms before and after",
        bytes.len(),
        restored.distinct_terms()
    );

    println!("\n=== done ===");
    Ok(())
}
