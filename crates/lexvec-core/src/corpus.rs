//! JSON file store for the raw document list.
//!
//! A missing or unreadable corpus is not fatal: loading falls back to an
//! empty list and logs why.

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::Document;

pub fn load_documents(path: &Path) -> Vec<Document> {
    match try_load_documents(path) {
        Ok(docs) => {
            tracing::info!(path = %path.display(), documents = docs.len(), "corpus loaded");
            docs
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "corpus unavailable, starting empty");
            Vec::new()
        }
    }
}

pub fn try_load_documents(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_documents(path: &Path, documents: &[Document]) -> Result<()> {
    write_json_atomic(path, &documents)
}

/// Serialize `value` to a sibling temp file, then rename it over `path`.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let file_name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
    let tmp = dir.join(format!(".{file_name}.tmp"));
    let written = write_json_file(&tmp, value).and_then(|()| fs::rename(&tmp, path).map_err(Into::into));
    if written.is_err() {
        // best effort; the original error is what gets reported
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut f = fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut f, value)?;
    f.write_all(b"\n")?;
    f.sync_all()?;
    Ok(())
}
