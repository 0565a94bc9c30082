//! On-disk vector table: a JSON object of `id → { term → weight }`.
//!
//! Loading reconstructs the same keys and weights that were saved. Missing or
//! malformed files are recoverable through `load_table_or_default`.

use std::fs;
use std::path::Path;

use lexvec_core::corpus::write_json_atomic;
use lexvec_core::error::Result;

use crate::table::VectorTable;

pub fn save_table(path: &Path, table: &VectorTable) -> Result<()> {
    write_json_atomic(path, table)?;
    tracing::info!(path = %path.display(), vectors = table.len(), "vector table saved");
    Ok(())
}

pub fn load_table(path: &Path) -> Result<VectorTable> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn load_table_or_default(path: &Path) -> VectorTable {
    match load_table(path) {
        Ok(table) => {
            tracing::info!(path = %path.display(), vectors = table.len(), "vector table loaded");
            table
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "vector table unavailable, starting empty");
            VectorTable::new()
        }
    }
}
