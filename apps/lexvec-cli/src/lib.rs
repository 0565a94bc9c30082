//! Shared plumbing for the `lexvec` binaries: logging setup, loading and
//! saving the corpus + vector table pair, and result printing.

use anyhow::Result;
use std::path::{Path, PathBuf};

use lexvec_core::config::{expand_path, Settings};
use lexvec_core::corpus::{load_documents, save_documents};
use lexvec_core::types::ScoredResult;
use lexvec_embed::get_default_vectorizer;
use lexvec_hybrid::HybridSearchEngine;
use lexvec_vector::persist::{load_table_or_default, save_table};

pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // a second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// An engine bound to the files it was loaded from.
pub struct Workspace {
    pub engine: HybridSearchEngine,
    corpus_path: PathBuf,
    vectors_path: PathBuf,
}

impl Workspace {
    pub fn open(settings: &Settings) -> Result<Self> {
        Self::open_at(
            &expand_path(&settings.data.corpus_path),
            &expand_path(&settings.data.vectors_path),
            settings,
        )
    }

    /// Load corpus and vectors (empty on failure) and vectorize any document
    /// the persisted table does not cover.
    pub fn open_at(corpus_path: &Path, vectors_path: &Path, settings: &Settings) -> Result<Self> {
        let engine = HybridSearchEngine::with_config(get_default_vectorizer(), settings.fusion);
        engine.load(load_documents(corpus_path), load_table_or_default(vectors_path));
        let vectorized = engine.vectorize_missing()?;
        let ws = Self { engine, corpus_path: corpus_path.to_path_buf(), vectors_path: vectors_path.to_path_buf() };
        if vectorized > 0 {
            ws.save()?;
        }
        Ok(ws)
    }

    pub fn save(&self) -> Result<()> {
        save_documents(&self.corpus_path, &self.engine.documents())?;
        save_table(&self.vectors_path, &self.engine.vector_table())?;
        Ok(())
    }

    pub fn corpus_path(&self) -> &Path { &self.corpus_path }

    pub fn vectors_path(&self) -> &Path { &self.vectors_path }
}

pub fn print_results(query: &str, results: &[ScoredResult]) {
    println!("\n🔍 Found {} results for: \"{}\"", results.len(), query);
    for (i, r) in results.iter().enumerate() {
        println!(
            "\n  {}. combined={:.4}  keyword={:.1}  vector={:.4}  id={}  category={}",
            i + 1,
            r.combined_score,
            r.keyword_score,
            r.vector_score,
            r.document.id,
            r.document.category
        );
        println!("     📄 {}", r.document.title);
        println!("     📝 {}", preview(&r.document.content, 160));
    }
}

/// First `max_chars` chars of `text` on one line.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars).collect();
    format!("{cut}…")
}

/// Parse the value following a numeric `--flag`.
pub fn parse_usize_flag(flag: &str, value: Option<&String>) -> Result<usize> {
    value
        .and_then(|v| v.parse::<usize>().ok())
        .ok_or_else(|| anyhow::anyhow!("{flag} requires a number"))
}
