use tantivy::schema::{IndexRecordOption, Schema, TextFieldIndexing, TextOptions, FAST, INDEXED, STORED, STRING};
use tantivy::Index;

use amoozdb_core::settings::{CREATED_AT_FIELD, CREATED_TIMESTAMP_FIELD, PERSIAN_INDEX_ANALYZER, TEXT_FIELD};

use crate::analysis::register_analyzers;

pub const ID_FIELD: &str = "id";
/// Exact-match twin of `text` (`text.keyword` on the wire).
pub const TEXT_KEYWORD_FIELD: &str = "text_keyword";

pub fn build_schema() -> Schema {
	let mut schema_builder = Schema::builder();
	schema_builder.add_text_field(ID_FIELD, STRING | STORED);
	let text_field_indexing = TextFieldIndexing::default().set_tokenizer(PERSIAN_INDEX_ANALYZER).set_index_option(IndexRecordOption::WithFreqsAndPositions);
	let text_options = TextOptions::default().set_indexing_options(text_field_indexing).set_stored();
	schema_builder.add_text_field(TEXT_FIELD, text_options);
	schema_builder.add_text_field(TEXT_KEYWORD_FIELD, STRING | FAST);
	schema_builder.add_date_field(CREATED_AT_FIELD, INDEXED | STORED | FAST);
	schema_builder.add_i64_field(CREATED_TIMESTAMP_FIELD, INDEXED | STORED | FAST);
	schema_builder.build()
}

pub fn register_tokenizer(index: &Index) {
	register_analyzers(index.tokenizers());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn schema_has_all_segment_fields() {
		let schema = build_schema();
		for name in [ID_FIELD, TEXT_FIELD, TEXT_KEYWORD_FIELD, CREATED_AT_FIELD, CREATED_TIMESTAMP_FIELD] {
			assert!(schema.get_field(name).is_ok(), "missing field {name}");
		}
		let text = schema.get_field_entry(schema.get_field(TEXT_FIELD).unwrap());
		assert!(text.is_indexed());
		assert!(text.is_stored());
	}
}
