//! Domain types shared by the schema, the stores and the routers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::Hasher;

use crate::traits::SegmentStore;

pub type SegmentId = String;

/// A Persian text segment as it is written to the alias.
///
/// - `text`: caller-supplied payload, indexed both analyzed and as a keyword
/// - `created_at`: wall-clock instant of the last save, never caller-supplied
/// - `created_timestamp`: the same instant in epoch milliseconds
///
/// The two creation fields are `None` until the segment is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    pub text: String,
}

impl IndexedSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    /// Overwrites both creation fields from a single clock read.
    pub fn before_save(&mut self) -> &mut Self {
        self.stamp(Utc::now())
    }

    pub(crate) fn stamp(&mut self, now: DateTime<Utc>) -> &mut Self {
        self.created_at = Some(now);
        self.created_timestamp = Some(now.timestamp_millis());
        self
    }

    /// Stamps the segment and hands it to `store`. Store errors are returned as-is.
    pub fn save<S: SegmentStore + ?Sized>(&mut self, store: &S) -> anyhow::Result<SavedSegment> {
        self.before_save();
        store.persist(self)
    }

    /// Stable document id derived from the text and the creation stamp.
    pub fn segment_id(&self) -> SegmentId {
        let mut hasher = twox_hash::XxHash64::with_seed(0);
        hasher.write(self.text.as_bytes());
        hasher.write_i64(self.created_timestamp.unwrap_or_default());
        format!("{:016x}", hasher.finish())
    }
}

/// Where a persisted segment ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSegment {
    pub partition: String,
    pub id: SegmentId,
}

/// A search hit as the engine reports it, before any schema claims it.
///
/// Field names follow the engine's wire format so hits can be deserialized
/// straight from a response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id", default)]
    pub id: SegmentId,
    #[serde(rename = "_score", default)]
    pub score: Option<f32>,
    #[serde(rename = "_source", default)]
    pub source: serde_json::Value,
}

/// A hit claimed by a schema and deserialized into its document type.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentHit {
    pub partition: String,
    pub id: SegmentId,
    pub score: Option<f32>,
    pub segment: IndexedSegment,
}
