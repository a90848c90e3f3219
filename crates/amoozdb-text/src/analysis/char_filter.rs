use tantivy::tokenizer::Tokenizer;

pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';

/// Char filter that turns ZWNJ into whitespace before the wrapped tokenizer runs.
///
/// ZWNJ is three bytes in UTF-8, so it is replaced by three spaces and token
/// offsets still point into the caller's text.
#[derive(Clone)]
pub struct ZeroWidthSpaces<T> {
    inner: T,
    buffer: String,
}

impl<T> ZeroWidthSpaces<T> {
    pub fn new(inner: T) -> Self {
        Self { inner, buffer: String::new() }
    }
}

pub fn strip_zero_width(text: &str, out: &mut String) {
    out.clear();
    out.reserve(text.len());
    for c in text.chars() {
        if c == ZERO_WIDTH_NON_JOINER {
            out.push_str("   ");
        } else {
            out.push(c);
        }
    }
}

impl<T: Tokenizer> Tokenizer for ZeroWidthSpaces<T> {
    type TokenStream<'a> = T::TokenStream<'a>;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> Self::TokenStream<'a> {
        strip_zero_width(text, &mut self.buffer);
        self.inner.token_stream(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_preserves_byte_length() {
        let text = "می\u{200C}خواهم";
        let mut out = String::new();
        strip_zero_width(text, &mut out);
        assert_eq!(out.len(), text.len());
        assert_eq!(out, "می   خواهم");
    }
}
