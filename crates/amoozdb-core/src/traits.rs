use crate::types::{IndexedSegment, RawHit, SavedSegment};

/// Decides whether a raw hit belongs to a schema.
///
/// Routing layers take this as an explicit strategy instead of asking the
/// document type.
pub trait HitMatcher: Send + Sync {
    fn matches(&self, hit: &RawHit) -> bool;
}

impl<F> HitMatcher for F
where
    F: Fn(&RawHit) -> bool + Send + Sync,
{
    fn matches(&self, hit: &RawHit) -> bool {
        self(hit)
    }
}

/// The persistence boundary. Implementations report their own failures unchanged.
pub trait SegmentStore: Send + Sync {
    fn persist(&self, segment: &IndexedSegment) -> anyhow::Result<SavedSegment>;

    fn persist_batch(&self, segments: &[IndexedSegment]) -> anyhow::Result<Vec<SavedSegment>> {
        segments.iter().map(|s| self.persist(s)).collect()
    }
}
