use std::env;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use lexvec_cli::{init_logging, parse_usize_flag, print_results, Workspace};
use lexvec_core::config::{expand_path, Config};
use lexvec_core::data_processor::DataProcessor;
use lexvec_core::types::Document;

const USAGE: &str = "Usage: lexvec <command> [args...]

Commands:
  ingest [dir] [--limit N]                       ingest .txt files (one document per file)
  add <title> <content> [--id ID] [--tags a,b] [--category C]
  remove <id>
  query <text> [--limit N]
  rebuild                                        re-vectorize every document
  status";

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() { eprintln!("{USAGE}"); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let (cmd, args) = parse_args();
    let ws = Workspace::open(&settings)?;

    match cmd.as_str() {
        "ingest" => {
            let mut data_dir = None; let mut limit = None;
            let mut i = 0; while i < args.len() { match args[i].as_str() {
                "--limit" => { limit = Some(parse_usize_flag("--limit", args.get(i + 1))?); i += 1; }
                a if !a.starts_with('-') => data_dir = Some(PathBuf::from(a)),
                other => anyhow::bail!("unknown flag {other}"),
            } i += 1; }
            let data_dir = data_dir.unwrap_or_else(|| expand_path(&settings.data.raw_txt_dir));
            println!("Ingesting from {}", data_dir.display());
            let processor = DataProcessor::new();
            let docs = match limit {
                Some(n) => processor.process_directory_limited(&data_dir, n)?,
                None => processor.process_directory(&data_dir)?,
            };
            let pb = ProgressBar::new(docs.len() as u64);
            pb.set_style(ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents {msg}")?.progress_chars("#>-"));
            let (mut added, mut updated) = (0usize, 0usize);
            for doc in docs {
                pb.set_message(doc.id.clone());
                if ws.engine.upsert_document(doc)? { updated += 1; } else { added += 1; }
                pb.inc(1);
            }
            pb.finish_with_message("done");
            ws.save()?;
            println!("✅ Ingest complete: {} added, {} updated, {} total", added, updated, ws.engine.len());
        }
        "add" => {
            let mut positional = Vec::new();
            let mut id = None; let mut tags: Vec<String> = Vec::new(); let mut category = String::new();
            let mut i = 0; while i < args.len() { match args[i].as_str() {
                "--id" => { id = args.get(i + 1).cloned(); i += 1; }
                "--tags" => { tags = args.get(i + 1).map(|t| t.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()).unwrap_or_default(); i += 1; }
                "--category" => { category = args.get(i + 1).cloned().unwrap_or_default(); i += 1; }
                _ => positional.push(args[i].clone()),
            } i += 1; }
            let [title, content] = positional.as_slice() else {
                anyhow::bail!("add needs <title> <content>\n\n{USAGE}");
            };
            let id = id.unwrap_or_else(|| format!("doc-{}", chrono::Utc::now().timestamp_millis()));
            let doc = Document::new(id.clone(), title.as_str(), content.as_str()).with_tags(tags).with_category(category);
            ws.engine.add_document(doc)?;
            ws.save()?;
            println!("✅ Added document {}", id);
        }
        "remove" => {
            let Some(id) = args.first() else { anyhow::bail!("remove needs <id>\n\n{USAGE}"); };
            match ws.engine.remove_document(id) {
                Some(doc) => { ws.save()?; println!("🗑️  Removed {} ({})", doc.id, doc.title); }
                None => { eprintln!("No document with id {}", id); std::process::exit(1); }
            }
        }
        "query" => {
            let mut limit = settings.search.default_limit; let mut words = Vec::new();
            let mut i = 0; while i < args.len() { match args[i].as_str() {
                "--limit" => { limit = parse_usize_flag("--limit", args.get(i + 1))?; i += 1; }
                _ => words.push(args[i].clone()),
            } i += 1; }
            let query_text = words.join(" ");
            let results = ws.engine.hybrid_retrieval(&query_text, limit)?;
            print_results(&query_text, &results);
        }
        "rebuild" => {
            let n = ws.engine.rebuild()?;
            ws.save()?;
            println!("✅ Re-vectorized {} documents", n);
        }
        "status" => {
            let unvectorized = ws.engine.unvectorized_ids();
            println!("📦 Corpus:  {} ({} documents)", ws.corpus_path().display(), ws.engine.len());
            println!("📐 Vectors: {} ({} entries)", ws.vectors_path().display(), ws.engine.vector_table().len());
            println!("⏳ Unvectorized: {}", unvectorized.len());
            for id in unvectorized { println!("   - {}", id); }
        }
        _ => { eprintln!("Unknown command: {}\n\n{}", cmd, USAGE); std::process::exit(1); }
    }
    Ok(())
}
