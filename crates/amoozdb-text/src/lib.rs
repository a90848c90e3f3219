//! amoozdb-text
//!
//! Persian analysis chain and the Tantivy-backed partition store and alias
//! searcher. See `analysis`, `index` and `search`.

pub mod analysis;
pub mod index;
pub mod search;
pub mod tantivy_utils;

pub use index::PartitionStore;
pub use search::AliasSearcher;
