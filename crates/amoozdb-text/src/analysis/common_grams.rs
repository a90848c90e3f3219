//! Common grams: glue frequent words to their neighbours instead of dropping them.
//!
//! Index mode keeps every word and adds a `first_second` gram for each adjacent
//! pair that involves a common word, placed at the first word's position.
//! Query mode keeps only the tokens a phrase needs: a token is emitted only when
//! the next one is not a gram, and a trailing word already covered by a gram is
//! dropped. Emitted tokens keep their start position with length 1, so a
//! phrase of grams lines up with the grams written at index time.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tantivy::tokenizer::{Token, TokenFilter, TokenStream, Tokenizer};

use super::normalize::normalize_word;

pub const GRAM_SEPARATOR: char = '_';

#[derive(Clone)]
pub struct CommonGrams {
    words: Arc<HashSet<String>>,
    query_mode: bool,
}

impl CommonGrams {
    /// Words are folded with the analyzers' normalization so they compare
    /// against normalized tokens.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.into_iter().map(|w| normalize_word(w.as_ref())).collect();
        Self { words: Arc::new(words), query_mode: false }
    }

    pub fn query_mode(mut self) -> Self {
        self.query_mode = true;
        self
    }

    pub fn is_common(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl TokenFilter for CommonGrams {
    type Tokenizer<T: Tokenizer> = CommonGramsFilter<T>;

    fn transform<T: Tokenizer>(self, tokenizer: T) -> CommonGramsFilter<T> {
        CommonGramsFilter { inner: tokenizer, grams: self }
    }
}

#[derive(Clone)]
pub struct CommonGramsFilter<T> {
    inner: T,
    grams: CommonGrams,
}

impl<T: Tokenizer> Tokenizer for CommonGramsFilter<T> {
    type TokenStream<'a> = CommonGramsTokenStream<'a, T::TokenStream<'a>>;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> Self::TokenStream<'a> {
        CommonGramsTokenStream {
            tail: self.inner.token_stream(text),
            words: &self.grams.words,
            query_mode: self.grams.query_mode,
            queue: VecDeque::new(),
            last_word: None,
            pending: None,
            last_emitted_gram: false,
            exhausted: false,
            token: Token::default(),
        }
    }
}

struct Item {
    token: Token,
    gram: bool,
}

pub struct CommonGramsTokenStream<'a, T> {
    tail: T,
    words: &'a HashSet<String>,
    query_mode: bool,
    queue: VecDeque<Item>,
    last_word: Option<Token>,
    pending: Option<Item>,
    last_emitted_gram: bool,
    exhausted: bool,
    token: Token,
}

impl<T: TokenStream> CommonGramsTokenStream<'_, T> {
    /// Next token of the index-mode stream.
    fn next_item(&mut self) -> Option<Item> {
        if let Some(item) = self.queue.pop_front() {
            return Some(item);
        }
        if !self.tail.advance() {
            return None;
        }
        let current = self.tail.token().clone();
        let previous = self.last_word.replace(current.clone());
        match previous {
            Some(prev) if self.words.contains(&prev.text) || self.words.contains(&current.text) => {
                let gram = Token {
                    offset_from: prev.offset_from,
                    offset_to: current.offset_to,
                    position: prev.position,
                    text: format!("{}{}{}", prev.text, GRAM_SEPARATOR, current.text),
                    position_length: 2,
                };
                self.queue.push_back(Item { token: current, gram: false });
                Some(Item { token: gram, gram: true })
            }
            _ => Some(Item { token: current, gram: false }),
        }
    }

    fn advance_query(&mut self) -> bool {
        if !self.exhausted {
            while let Some(current) = self.next_item() {
                let current_is_gram = current.gram;
                match self.pending.replace(current) {
                    Some(prev) if !current_is_gram => {
                        self.emit(prev);
                        return true;
                    }
                    _ => {}
                }
            }
            self.exhausted = true;
        }
        match self.pending.take() {
            Some(prev) if !self.last_emitted_gram => {
                self.emit(prev);
                true
            }
            _ => false,
        }
    }

    fn emit(&mut self, item: Item) {
        self.last_emitted_gram = item.gram;
        self.token = item.token;
        self.token.position_length = 1;
    }
}

impl<T: TokenStream> TokenStream for CommonGramsTokenStream<'_, T> {
    fn advance(&mut self) -> bool {
        if self.query_mode {
            return self.advance_query();
        }
        match self.next_item() {
            Some(item) => {
                self.token = item.token;
                true
            }
            None => false,
        }
    }

    fn token(&self) -> &Token {
        &self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tantivy::tokenizer::{TextAnalyzer, WhitespaceTokenizer};

    fn run(grams: CommonGrams, text: &str) -> Vec<(String, usize)> {
        let mut analyzer = TextAnalyzer::builder(WhitespaceTokenizer::default()).filter(grams).build();
        let mut stream = analyzer.token_stream(text);
        let mut out = Vec::new();
        while stream.advance() {
            out.push((stream.token().text.clone(), stream.token().position));
        }
        out
    }

    fn words() -> CommonGrams {
        CommonGrams::new(["the", "in"])
    }

    fn texts(tokens: &[(String, usize)]) -> Vec<&str> {
        tokens.iter().map(|t| t.0.as_str()).collect()
    }

    #[test]
    fn index_mode_keeps_words_and_adds_grams() {
        let out = run(words(), "the rain in spain falls");
        assert_eq!(texts(&out), vec!["the", "the_rain", "rain", "rain_in", "in", "in_spain", "spain", "falls"]);
        let positions: Vec<usize> = out.iter().map(|t| t.1).collect();
        assert_eq!(positions, vec![0, 0, 1, 1, 2, 2, 3, 4]);
    }

    #[test]
    fn query_mode_keeps_grams_and_uncovered_words() {
        let out = run(words().query_mode(), "the rain in spain falls");
        assert_eq!(texts(&out), vec!["the_rain", "rain_in", "in_spain", "spain", "falls"]);
        let positions: Vec<usize> = out.iter().map(|t| t.1).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn query_mode_drops_trailing_word_covered_by_gram() {
        let out = run(words().query_mode(), "rain the");
        assert_eq!(texts(&out), vec!["rain_the"]);
    }

    #[test]
    fn single_common_word_survives_query_mode() {
        assert_eq!(texts(&run(words().query_mode(), "the")), vec!["the"]);
        assert_eq!(texts(&run(words(), "the")), vec!["the"]);
    }

    #[test]
    fn no_common_words_passes_through() {
        assert_eq!(texts(&run(words().query_mode(), "quick brown fox")), vec!["quick", "brown", "fox"]);
        assert_eq!(texts(&run(words(), "quick brown fox")), vec!["quick", "brown", "fox"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(run(words().query_mode(), "").is_empty());
        assert!(run(words(), "   ").is_empty());
    }
}
