//! Domain types shared by the vectorizer, the scorers and the ranker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub type DocId = String;
pub type Meta = HashMap<String, String>;

/// A short text document owned by the corpus.
///
/// - `id`: stable identity, unique across the live corpus
/// - `title`/`content`: the searchable text
/// - `tags`: ordered labels, matched as whole strings by the keyword scorer
/// - `category`: free-form grouping (e.g. the source directory)
/// - `metadata`: arbitrary key/value pairs carried through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub metadata: Meta,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn new(id: impl Into<DocId>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            category: String::new(),
            metadata: Meta::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Text fed to the vectorizer: title and content joined by a space.
    pub fn vector_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}

/// Sparse weighted term vector.
///
/// Keys are lower-cased tokens, weights are non-negative. A `BTreeMap` keeps
/// iteration (and therefore serialization and float summation) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermVector(BTreeMap<String, f32>);

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &str) -> Option<f32> {
        self.0.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Euclidean norm over every weight in the vector.
    pub fn norm(&self) -> f32 {
        self.0.values().map(|w| w * w).sum::<f32>().sqrt()
    }
}

impl FromIterator<(String, f32)> for TermVector {
    fn from_iter<T: IntoIterator<Item = (String, f32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, f32)> for TermVector {
    fn from_iter<T: IntoIterator<Item = (&'a str, f32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

/// Indicates which scorer(s) produced a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SourceKind {
    Keyword,
    Vector,
    Hybrid,
}

/// A document matched by the keyword scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordHit {
    pub document: Document,
    pub relevance_score: f32,
}

/// A vector-table entry matched by similarity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorHit {
    pub id: DocId,
    pub similarity: f32,
}

/// One row of a fused ranking. Produced per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    pub document: Document,
    pub keyword_score: f32,
    pub vector_score: f32,
    pub combined_score: f32,
    pub source: SourceKind,
}
