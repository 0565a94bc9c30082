pub mod engine;
pub mod fusion;

pub use engine::HybridSearchEngine;
pub use fusion::fuse;
