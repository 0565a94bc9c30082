use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use lexvec_core::types::{DocId, TermVector};

/// Document id → term vector. Entries are only replaced on re-vectorization
/// and only removed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VectorTable {
    entries: BTreeMap<DocId, TermVector>,
}

impl VectorTable {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace; returns the previous vector for `id`.
    pub fn insert(&mut self, id: impl Into<DocId>, vector: TermVector) -> Option<TermVector> {
        self.entries.insert(id.into(), vector)
    }

    pub fn remove(&mut self, id: &str) -> Option<TermVector> { self.entries.remove(id) }

    pub fn get(&self, id: &str) -> Option<&TermVector> { self.entries.get(id) }

    pub fn contains(&self, id: &str) -> bool { self.entries.contains_key(id) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Drop every entry whose id fails `keep`; returns how many were dropped.
    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut keep: F) -> usize {
        let before = self.entries.len();
        self.entries.retain(|id, _| keep(id));
        before - self.entries.len()
    }
}

impl FromIterator<(DocId, TermVector)> for VectorTable {
    fn from_iter<T: IntoIterator<Item = (DocId, TermVector)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
