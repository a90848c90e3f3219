use anyhow::Result;
use chrono::Utc;
use serde_json::json;
use std::path::{Path, PathBuf};
use tantivy::collector::{Count, TopDocs};
use tantivy::query::{AllQuery, Query, QueryParser, TermQuery};
use tantivy::schema::{IndexRecordOption, Value};
use tantivy::{DocAddress, Index, Order, Searcher, TantivyDocument, Term};
use tracing::debug;

use amoozdb_core::alias::compile_glob;
use amoozdb_core::settings::CREATED_TIMESTAMP_FIELD;
use amoozdb_core::{AliasPattern, HitRouter, RawHit, RoutedHits};

use crate::analysis::query_tokenizers;
use crate::index::{PartitionStore, SegmentFields};
use crate::tantivy_utils::register_tokenizer;

/// Searches the partitions on disk and classifies hits with the alias pattern.
pub struct AliasSearcher {
	root: PathBuf,
	pattern: AliasPattern,
}

struct OpenPartition {
	name: String,
	index: Index,
	searcher: Searcher,
	fields: SegmentFields,
}

impl AliasSearcher {
	pub fn new(root: impl Into<PathBuf>, pattern: AliasPattern) -> Self {
		Self { root: root.into(), pattern }
	}

	pub fn for_store(store: &PartitionStore) -> Result<Self> {
		Ok(Self::new(store.root(), AliasPattern::new(store.alias())?))
	}

	pub fn pattern(&self) -> &AliasPattern {
		&self.pattern
	}

	/// Every partition under the root, whatever alias it belongs to.
	pub fn all_partitions(&self) -> Result<Vec<String>> {
		list_partitions(&self.root)
	}

	/// Partitions owned by the alias.
	pub fn partitions(&self) -> Result<Vec<String>> {
		Ok(self.all_partitions()?.into_iter().filter(|p| self.pattern.matches_name(p)).collect())
	}

	/// Partitions whose name matches the glob `target`.
	pub fn resolve(&self, target: &str) -> Result<Vec<String>> {
		let glob = compile_glob(target)?;
		Ok(self.all_partitions()?.into_iter().filter(|p| glob.is_match(p)).collect())
	}

	/// Analyzed query over every partition matching `target`, best hits first.
	pub fn search_raw(&self, target: &str, query: &str, limit: usize) -> Result<Vec<RawHit>> {
		let mut hits = Vec::new();
		for partition in self.open(target)? {
			let parser = QueryParser::new(partition.index.schema(), vec![partition.fields.text], query_tokenizers());
			let parsed = parser.parse_query(query)?;
			hits.extend(partition.top_hits(parsed.as_ref(), limit)?);
		}
		Ok(best_first(hits, limit))
	}

	pub fn search(&self, query: &str, limit: usize) -> Result<RoutedHits> {
		self.search_target(self.pattern.glob(), query, limit)
	}

	/// Searches `target` and keeps the hits the alias pattern claims.
	pub fn search_target(&self, target: &str, query: &str, limit: usize) -> Result<RoutedHits> {
		let hits = self.search_raw(target, query, limit)?;
		HitRouter::new(self.pattern.clone()).route(hits)
	}

	/// Exact match on the keyword field.
	pub fn lookup_exact(&self, text: &str, limit: usize) -> Result<RoutedHits> {
		let mut hits = Vec::new();
		for partition in self.open(self.pattern.glob())? {
			let query = keyword_query(&partition, text);
			hits.extend(partition.top_hits(&query, limit)?);
		}
		HitRouter::new(self.pattern.clone()).route(best_first(hits, limit))
	}

	pub fn count_exact(&self, text: &str) -> Result<usize> {
		let mut total = 0;
		for partition in self.open(self.pattern.glob())? {
			total += partition.searcher.search(&keyword_query(&partition, text), &Count)?;
		}
		Ok(total)
	}

	/// Newest segments by `created_timestamp`.
	pub fn recent(&self, limit: usize) -> Result<RoutedHits> {
		let mut stamped = Vec::new();
		for partition in self.open(self.pattern.glob())? {
			let collector = TopDocs::with_limit(limit.max(1)).order_by_fast_field::<i64>(CREATED_TIMESTAMP_FIELD, Order::Desc);
			for (ts, addr) in partition.searcher.search(&AllQuery, &collector)? {
				stamped.push((ts, partition.raw_hit(addr, None)?));
			}
		}
		stamped.sort_by(|a, b| b.0.cmp(&a.0));
		stamped.truncate(limit);
		HitRouter::new(self.pattern.clone()).route(stamped.into_iter().map(|(_, hit)| hit).collect())
	}

	fn open(&self, target: &str) -> Result<Vec<OpenPartition>> {
		let names = self.resolve(target)?;
		debug!(target, partitions = names.len(), "resolved search target");
		names
			.into_iter()
			.map(|name| -> Result<OpenPartition> {
				let index = Index::open_in_dir(self.root.join(&name))?;
				register_tokenizer(&index);
				let searcher = index.reader()?.searcher();
				let fields = SegmentFields::resolve(&index)?;
				Ok(OpenPartition { name, index, searcher, fields })
			})
			.collect()
	}
}

impl OpenPartition {
	fn top_hits(&self, query: &dyn Query, limit: usize) -> Result<Vec<RawHit>> {
		let top_docs = self.searcher.search(query, &TopDocs::with_limit(limit.max(1)))?;
		top_docs.into_iter().map(|(score, addr)| self.raw_hit(addr, Some(score))).collect()
	}

	fn raw_hit(&self, addr: DocAddress, score: Option<f32>) -> Result<RawHit> {
		let doc: TantivyDocument = self.searcher.doc(addr)?;
		let id = doc.get_first(self.fields.id).and_then(|v| v.as_str()).unwrap_or_default().to_string();
		let text = doc.get_first(self.fields.text).and_then(|v| v.as_str()).unwrap_or_default();
		let created_timestamp = doc.get_first(self.fields.created_timestamp).and_then(|v| v.as_i64());
		let created_at = doc
			.get_first(self.fields.created_at)
			.and_then(|v| v.as_datetime())
			.and_then(|d| chrono::DateTime::<Utc>::from_timestamp_millis(d.into_timestamp_millis()));
		Ok(RawHit {
			index: self.name.clone(),
			id,
			score,
			source: json!({ "text": text, "created_at": created_at, "created_timestamp": created_timestamp }),
		})
	}
}

fn keyword_query(partition: &OpenPartition, text: &str) -> TermQuery {
	TermQuery::new(Term::from_field_text(partition.fields.keyword, text), IndexRecordOption::Basic)
}

fn best_first(mut hits: Vec<RawHit>, limit: usize) -> Vec<RawHit> {
	hits.sort_by(|a, b| b.score.unwrap_or(0.0).total_cmp(&a.score.unwrap_or(0.0)));
	hits.truncate(limit);
	hits
}

/// Directories under `root` that hold a Tantivy index, sorted by name.
pub fn list_partitions(root: &Path) -> Result<Vec<String>> {
	if !root.exists() {
		return Ok(vec![]);
	}
	let mut names = Vec::new();
	for entry in std::fs::read_dir(root)? {
		let entry = entry?;
		if entry.file_type()?.is_dir() && entry.path().join("meta.json").exists() {
			if let Some(name) = entry.file_name().to_str() {
				names.push(name.to_string());
			}
		}
	}
	names.sort();
	Ok(names)
}
