//! lexvec-vector
//!
//! Cosine similarity over sparse term vectors, the id-keyed vector table and
//! its JSON persistence.
pub mod persist;
pub mod search;
pub mod similarity;
pub mod table;

pub use search::VectorIndex;
pub use similarity::cosine_similarity;
pub use table::VectorTable;
