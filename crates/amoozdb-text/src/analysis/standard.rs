use tantivy::tokenizer::{Token, TokenStream, Tokenizer};
use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

/// Unicode (UAX #29) word tokenizer. Word boundaries keep decimals and
/// apostrophe words whole, and combining marks stay on their base letter.
#[derive(Clone, Default)]
pub struct StandardTokenizer {
    token: Token,
}

pub struct StandardTokenStream<'a> {
    segments: UWordBoundIndices<'a>,
    token: &'a mut Token,
}

/// Spaces, punctuation and symbols come out of the segmenter as their own
/// segments; only those starting with a letter or digit are words.
fn is_word(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_alphanumeric)
}

impl Tokenizer for StandardTokenizer {
    type TokenStream<'a> = StandardTokenStream<'a>;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> StandardTokenStream<'a> {
        self.token.reset();
        StandardTokenStream { segments: text.split_word_bound_indices(), token: &mut self.token }
    }
}

impl TokenStream for StandardTokenStream<'_> {
    fn advance(&mut self) -> bool {
        self.token.text.clear();
        for (offset, segment) in self.segments.by_ref() {
            if is_word(segment) {
                self.token.position = self.token.position.wrapping_add(1);
                self.token.offset_from = offset;
                self.token.offset_to = offset + segment.len();
                self.token.text.push_str(segment);
                return true;
            }
        }
        false
    }

    fn token(&self) -> &Token {
        self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<(String, usize, usize, usize)> {
        let mut tokenizer = StandardTokenizer::default();
        let mut stream = tokenizer.token_stream(text);
        let mut out = Vec::new();
        while stream.advance() {
            let t = stream.token();
            out.push((t.text.clone(), t.position, t.offset_from, t.offset_to));
        }
        out
    }

    fn texts(text: &str) -> Vec<String> {
        tokens(text).into_iter().map(|t| t.0).collect()
    }

    #[test]
    fn splits_on_spaces_and_punctuation() {
        let out = tokens("سلام، دنیا! 42");
        assert_eq!(out.iter().map(|t| t.0.as_str()).collect::<Vec<_>>(), vec!["سلام", "دنیا", "42"]);
        assert_eq!(out.iter().map(|t| t.1).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn keeps_harakat_inside_words() {
        let out = tokens("كَتَبَ");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].0, "كَتَبَ");
        assert_eq!(out[0].3, "كَتَبَ".len());
    }

    #[test]
    fn decimals_and_apostrophes_stay_whole() {
        assert_eq!(texts("3.14 don't ۳٫۱۴"), vec!["3.14", "don't", "۳٫۱۴"]);
        assert_eq!(texts("end. Next"), vec!["end", "Next"]);
    }

    #[test]
    fn offsets_point_into_the_input() {
        let text = "قیمت: 12.5 تومان";
        for (word, _, from, to) in tokens(text) {
            assert_eq!(&text[from..to], word);
        }
    }
}
