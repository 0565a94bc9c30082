use std::env;

use lexvec_cli::{init_logging, parse_usize_flag, print_results, Workspace};
use lexvec_core::config::Config;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [--limit N] [--keyword-only | --vector-only]", args[0]);
        eprintln!("Example: {} 'fire starting' --limit 5", args[0]);
        std::process::exit(1);
    }
    let settings = Config::load()?.settings()?;
    let mut limit = settings.search.default_limit;
    let mut mode = "hybrid";
    let mut words = Vec::new();
    let mut i = 1; while i < args.len() { match args[i].as_str() {
        "--limit" => { limit = parse_usize_flag("--limit", args.get(i + 1))?; i += 1; }
        "--keyword-only" => mode = "keyword",
        "--vector-only" => mode = "vector",
        _ => words.push(args[i].clone()),
    } i += 1; }
    let query_text = words.join(" ");

    println!("🔍 lexvec-search ({mode})\n==================");
    let ws = Workspace::open(&settings)?;
    println!("Corpus: {} ({} documents)", ws.corpus_path().display(), ws.engine.len());

    match mode {
        "keyword" => {
            let hits = ws.engine.keyword_search(&query_text, limit);
            println!("\n🔍 Found {} keyword results for: \"{}\"", hits.len(), query_text);
            for (i, h) in hits.iter().enumerate() {
                println!("  {}. score={:.1}  id={}  title={}", i + 1, h.relevance_score, h.document.id, h.document.title);
            }
        }
        "vector" => {
            let hits = ws.engine.vector_search(&query_text, limit)?;
            println!("\n🔍 Found {} vector results for: \"{}\"", hits.len(), query_text);
            for (i, h) in hits.iter().enumerate() {
                println!("  {}. similarity={:.4}  id={}", i + 1, h.similarity, h.id);
            }
        }
        _ => print_results(&query_text, &ws.engine.hybrid_retrieval(&query_text, limit)?),
    }
    Ok(())
}
