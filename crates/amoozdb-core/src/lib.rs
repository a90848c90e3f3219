#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod alias;
pub mod config;
pub mod error;
pub mod ingest;
pub mod settings;
pub mod traits;
pub mod types;

pub use alias::{AliasPattern, HitRouter, RoutedHits};
pub use types::{IndexedSegment, RawHit, SavedSegment, SegmentHit};
