//! Provisioning contract for a partition: shard layout, analysis chain and mapping.
//!
//! Any tooling that creates an `amooozeshyar-*` partition must send exactly this
//! body so that new partitions stay compatible with existing data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const PERSIAN_INDEX_ANALYZER: &str = "persian_grams_index_analyzer";
pub const PERSIAN_SEARCH_ANALYZER: &str = "persian_grams_search_analyzer";
pub const ZERO_WIDTH_CHAR_FILTER: &str = "zero_width_spaces";
pub const GRAMS_FILTER: &str = "persian_grams";
pub const GRAMS_QUERY_FILTER: &str = "persian_grams_query";

pub const TEXT_FIELD: &str = "text";
pub const KEYWORD_SUBFIELD: &str = "keyword";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const CREATED_TIMESTAMP_FIELD: &str = "created_timestamp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSettings {
    #[serde(default = "default_shards")]
    pub number_of_shards: u32,
    #[serde(default = "default_replicas")]
    pub number_of_replicas: u32,
}

fn default_shards() -> u32 {
    7
}

fn default_replicas() -> u32 {
    1
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self { number_of_shards: default_shards(), number_of_replicas: default_replicas() }
    }
}

/// How partitions are sliced over time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Daily,
    #[default]
    Monthly,
    None,
}

impl Rotation {
    pub fn suffix(self, at: DateTime<Utc>) -> String {
        match self {
            Rotation::Daily => at.format("%Y.%m.%d").to_string(),
            Rotation::Monthly => at.format("%Y.%m").to_string(),
            Rotation::None => "main".to_string(),
        }
    }
}

/// Physical partition that receives a segment created at `at`.
pub fn partition_name(alias: &str, rotation: Rotation, at: DateTime<Utc>) -> String {
    format!("{alias}-{}", rotation.suffix(at))
}

pub fn analysis() -> Value {
    json!({
        "char_filter": {
            ZERO_WIDTH_CHAR_FILTER: {
                "type": "mapping",
                "mappings": ["\\u200C=> "]
            }
        },
        "analyzer": {
            PERSIAN_INDEX_ANALYZER: {
                "filter": ["lowercase", "arabic_normalization", "persian_normalization", GRAMS_FILTER],
                "char_filter": [ZERO_WIDTH_CHAR_FILTER],
                "tokenizer": "standard"
            },
            PERSIAN_SEARCH_ANALYZER: {
                "filter": ["lowercase", "arabic_normalization", "persian_normalization", GRAMS_QUERY_FILTER],
                "char_filter": [ZERO_WIDTH_CHAR_FILTER],
                "tokenizer": "standard"
            }
        },
        "filter": {
            GRAMS_FILTER: {
                "type": "common_grams",
                "stopwords": "_persian_",
                "common_words": "_persian_"
            },
            GRAMS_QUERY_FILTER: {
                "type": "common_grams",
                "query_mode": "true",
                "stopwords": "_persian_",
                "common_words": "_persian_"
            }
        }
    })
}

pub fn mappings() -> Value {
    json!({
        "properties": {
            CREATED_AT_FIELD: { "type": "date" },
            CREATED_TIMESTAMP_FIELD: { "type": "long" },
            TEXT_FIELD: {
                "type": "text",
                "analyzer": PERSIAN_INDEX_ANALYZER,
                "search_analyzer": PERSIAN_SEARCH_ANALYZER,
                "fields": {
                    KEYWORD_SUBFIELD: { "type": "keyword" }
                }
            }
        }
    })
}

/// Full create-index body for one partition.
pub fn index_body(settings: &IndexSettings) -> Value {
    json!({
        "settings": {
            "number_of_shards": settings.number_of_shards,
            "number_of_replicas": settings.number_of_replicas,
            "analysis": analysis()
        },
        "mappings": mappings()
    })
}

/// Body that attaches `partition` to `alias`.
pub fn alias_actions(alias: &str, partition: &str) -> Value {
    json!({
        "actions": [
            { "add": { "index": partition, "alias": alias } }
        ]
    })
}
