//! Directory ingestion: one `.txt` file becomes one `Document`.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{Document, Meta};

pub const SOURCE_PATH_KEY: &str = "source_path";

#[derive(Default)]
pub struct DataProcessor;

impl DataProcessor {
    pub fn new() -> Self { Self }

    pub fn process_directory(&self, data_dir: &Path) -> Result<Vec<Document>> {
        self.process_files(data_dir, self.list_txt_files(data_dir))
    }

    pub fn process_directory_limited(&self, data_dir: &Path, limit: usize) -> Result<Vec<Document>> {
        let mut files = self.list_txt_files(data_dir);
        if files.len() > limit {
            files.truncate(limit);
            tracing::info!(limit, "limited ingestion to first files");
        }
        self.process_files(data_dir, files)
    }

    fn process_files(&self, data_dir: &Path, files: Vec<PathBuf>) -> Result<Vec<Document>> {
        if files.is_empty() {
            tracing::warn!(dir = %data_dir.display(), "no .txt files found");
            return Ok(vec![]);
        }
        let mut documents = Vec::with_capacity(files.len());
        for (file_index, file_path) in files.iter().enumerate() {
            tracing::debug!(file = %file_path.display(), "processing file {}/{}", file_index + 1, files.len());
            documents.push(self.file_to_document(data_dir, file_path)?);
        }
        tracing::info!(files = files.len(), "processed files into documents");
        Ok(documents)
    }

    pub fn file_to_document(&self, data_dir: &Path, file_path: &Path) -> Result<Document> {
        let content = self.read_file_content(file_path)?;
        let category = self.get_category_from_path(file_path, data_dir);
        let title = file_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let tags: Vec<String> = if category == "misc" {
            Vec::new()
        } else {
            category.split('/').filter(|s| !s.is_empty()).map(str::to_string).collect()
        };
        let mut metadata = Meta::new();
        metadata.insert(SOURCE_PATH_KEY.to_string(), file_path.to_string_lossy().to_string());

        let doc = Document::new(self.extract_doc_id(file_path, data_dir), title, content.trim())
            .with_tags(tags)
            .with_category(category);
        Ok(Document { metadata, ..doc })
    }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
        }
    }

    /// Relative path without extension, `/`-separated, so ids stay unique
    /// across subdirectories.
    fn extract_doc_id(&self, file_path: &Path, data_dir: &Path) -> String {
        let relative = file_path.strip_prefix(data_dir).unwrap_or(file_path).with_extension("");
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn get_category_from_path(&self, file_path: &Path, data_dir: &Path) -> String {
        let relative_path = file_path.strip_prefix(data_dir).unwrap_or(file_path);
        match relative_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join("/"),
            _ => "misc".to_string(),
        }
    }

    fn list_txt_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut txt_files = Vec::new();
        for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("txt") { txt_files.push(path.to_path_buf()); }
        }
        txt_files.sort();
        txt_files
    }
}
