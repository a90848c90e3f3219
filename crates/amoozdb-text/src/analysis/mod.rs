//! Persian analysis chain.
//!
//! Both analyzers share `zero_width_spaces` → `standard` → lowercase →
//! arabic normalization → persian normalization; they differ only in the
//! common-grams mode.

pub mod char_filter;
pub mod common_grams;
pub mod normalize;
pub mod standard;
pub mod stopwords;

use tantivy::tokenizer::{LowerCaser, TextAnalyzer, TokenStream, TokenizerManager};

use amoozdb_core::settings::{PERSIAN_INDEX_ANALYZER, PERSIAN_SEARCH_ANALYZER};

pub use char_filter::ZeroWidthSpaces;
pub use common_grams::CommonGrams;
pub use normalize::{ArabicNormalization, PersianNormalization};
pub use standard::StandardTokenizer;

fn persian_analyzer(grams: CommonGrams) -> TextAnalyzer {
    TextAnalyzer::builder(ZeroWidthSpaces::new(StandardTokenizer::default()))
        .filter(LowerCaser)
        .filter(ArabicNormalization)
        .filter(PersianNormalization)
        .filter(grams)
        .build()
}

pub fn persian_index_analyzer() -> TextAnalyzer {
    persian_analyzer(CommonGrams::new(stopwords::PERSIAN))
}

pub fn persian_search_analyzer() -> TextAnalyzer {
    persian_analyzer(CommonGrams::new(stopwords::PERSIAN).query_mode())
}

/// Registers both analyzers under their configured names.
pub fn register_analyzers(manager: &TokenizerManager) {
    manager.register(PERSIAN_INDEX_ANALYZER, persian_index_analyzer());
    manager.register(PERSIAN_SEARCH_ANALYZER, persian_search_analyzer());
}

/// Tokenizers used when parsing queries: the text field is analyzed with the
/// search analyzer even though its schema names the index analyzer.
pub fn query_tokenizers() -> TokenizerManager {
    let manager = TokenizerManager::default();
    manager.register(PERSIAN_INDEX_ANALYZER, persian_search_analyzer());
    manager.register(PERSIAN_SEARCH_ANALYZER, persian_search_analyzer());
    manager
}

/// Runs `analyzer` over `text` and collects token texts.
pub fn analyze(analyzer: &mut TextAnalyzer, text: &str) -> Vec<String> {
    let mut stream = analyzer.token_stream(text);
    let mut tokens = Vec::new();
    while stream.advance() {
        tokens.push(stream.token().text.clone());
    }
    tokens
}
