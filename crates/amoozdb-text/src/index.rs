use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tantivy::schema::Field;
use tantivy::{Index, IndexWriter, TantivyDocument};
use tracing::{debug, info};

use amoozdb_core::config::Settings;
use amoozdb_core::error::Error;
use amoozdb_core::settings::{analysis, index_body, partition_name, IndexSettings, Rotation, CREATED_AT_FIELD, CREATED_TIMESTAMP_FIELD, TEXT_FIELD};
use amoozdb_core::traits::SegmentStore;
use amoozdb_core::{IndexedSegment, SavedSegment};

use crate::tantivy_utils::{build_schema, register_tokenizer, ID_FIELD, TEXT_KEYWORD_FIELD};

/// Provisioning record kept next to each partition's index files.
pub const PARTITION_META: &str = "partition.json";

/// Tantivy-backed store: one index directory per `<alias>-<suffix>` partition.
pub struct PartitionStore {
	root: PathBuf,
	alias: String,
	rotation: Rotation,
	index_settings: IndexSettings,
	writer_heap_bytes: usize,
}

pub(crate) struct SegmentFields {
	pub id: Field,
	pub text: Field,
	pub keyword: Field,
	pub created_at: Field,
	pub created_timestamp: Field,
}

impl SegmentFields {
	pub fn resolve(index: &Index) -> Result<Self> {
		let schema = index.schema();
		Ok(Self {
			id: schema.get_field(ID_FIELD)?,
			text: schema.get_field(TEXT_FIELD)?,
			keyword: schema.get_field(TEXT_KEYWORD_FIELD)?,
			created_at: schema.get_field(CREATED_AT_FIELD)?,
			created_timestamp: schema.get_field(CREATED_TIMESTAMP_FIELD)?,
		})
	}
}

impl PartitionStore {
	pub fn new(root: impl Into<PathBuf>, alias: &str) -> Result<Self> {
		let root = root.into();
		std::fs::create_dir_all(&root)?;
		Ok(Self { root, alias: alias.to_string(), rotation: Rotation::default(), index_settings: IndexSettings::default(), writer_heap_bytes: 50_000_000 })
	}

	pub fn from_settings(settings: &Settings) -> Result<Self> {
		let mut store = Self::new(settings.root_dir(), &settings.store.alias)?;
		store.rotation = settings.store.rotation;
		store.index_settings = settings.index;
		store.writer_heap_bytes = settings.store.writer_heap_bytes;
		Ok(store)
	}

	pub fn with_rotation(mut self, rotation: Rotation) -> Self {
		self.rotation = rotation;
		self
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn alias(&self) -> &str {
		&self.alias
	}

	/// Opens `name`, provisioning it first if it does not exist yet.
	pub fn open_partition(&self, name: &str) -> Result<Index> {
		let dir = self.root.join(name);
		if dir.join("meta.json").exists() {
			check_compatible(&dir)?;
			let index = Index::open_in_dir(&dir)?;
			register_tokenizer(&index);
			return Ok(index);
		}
		std::fs::create_dir_all(&dir)?;
		let record = json!({ "alias": self.alias, "index": index_body(&self.index_settings) });
		std::fs::write(dir.join(PARTITION_META), serde_json::to_vec_pretty(&record)?)?;
		let index = Index::create_in_dir(&dir, build_schema())?;
		register_tokenizer(&index);
		info!(partition = name, shards = self.index_settings.number_of_shards, replicas = self.index_settings.number_of_replicas, "created partition");
		Ok(index)
	}

	/// Unstamped segments go to the partition for `now`.
	fn partition_for(&self, segment: &IndexedSegment, now: DateTime<Utc>) -> String {
		partition_name(&self.alias, self.rotation, segment.created_at.unwrap_or(now))
	}
}

fn check_compatible(dir: &Path) -> Result<()> {
	let path = dir.join(PARTITION_META);
	if !path.exists() {
		return Ok(());
	}
	let record: serde_json::Value = serde_json::from_slice(&std::fs::read(&path)?)?;
	if record["index"]["settings"]["analysis"] != analysis() {
		return Err(Error::InvalidConfig(format!("partition '{}' was provisioned with a different analysis chain", dir.display())).into());
	}
	Ok(())
}

fn to_document(fields: &SegmentFields, id: &str, segment: &IndexedSegment) -> TantivyDocument {
	let mut doc = TantivyDocument::default();
	doc.add_text(fields.id, id);
	doc.add_text(fields.text, &segment.text);
	doc.add_text(fields.keyword, &segment.text);
	if let Some(at) = segment.created_at {
		doc.add_date(fields.created_at, tantivy::DateTime::from_timestamp_millis(at.timestamp_millis()));
	}
	if let Some(ts) = segment.created_timestamp {
		doc.add_i64(fields.created_timestamp, ts);
	}
	doc
}

impl SegmentStore for PartitionStore {
	fn persist(&self, segment: &IndexedSegment) -> Result<SavedSegment> {
		let mut saved = self.persist_batch(std::slice::from_ref(segment))?;
		saved.pop().ok_or_else(|| anyhow::anyhow!("Nothing was persisted"))
	}

	/// One writer and one commit per touched partition.
	fn persist_batch(&self, segments: &[IndexedSegment]) -> Result<Vec<SavedSegment>> {
		let now = Utc::now();
		let mut by_partition: BTreeMap<String, Vec<usize>> = BTreeMap::new();
		for (i, segment) in segments.iter().enumerate() {
			by_partition.entry(self.partition_for(segment, now)).or_default().push(i);
		}
		let mut saved: Vec<Option<SavedSegment>> = vec![None; segments.len()];
		for (partition, positions) in by_partition {
			let index = self.open_partition(&partition)?;
			let fields = SegmentFields::resolve(&index)?;
			let mut writer: IndexWriter = index.writer_with_num_threads(1, self.writer_heap_bytes)?;
			for &i in &positions {
				let id = segments[i].segment_id();
				writer.add_document(to_document(&fields, &id, &segments[i]))?;
				saved[i] = Some(SavedSegment { partition: partition.clone(), id });
			}
			writer.commit()?;
			debug!(partition = %partition, count = positions.len(), "committed segments");
		}
		Ok(saved.into_iter().flatten().collect())
	}
}
