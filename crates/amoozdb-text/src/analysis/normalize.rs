//! Arabic-script orthographic normalization as token filters.

use tantivy::tokenizer::{Token, TokenFilter, TokenStream, Tokenizer};

const TATWEEL: char = '\u{0640}';
const ALEF: char = '\u{0627}';
const YEH: char = '\u{064A}';
const HEH: char = '\u{0647}';
const KAF: char = '\u{0643}';

/// Removes tatweel and harakat, unifies alef forms, alef maksura and teh marbuta.
pub fn arabic_normalize(input: &str, out: &mut String) {
    for c in input.chars() {
        match c {
            TATWEEL | '\u{064B}'..='\u{0652}' => {}
            '\u{0622}' | '\u{0623}' | '\u{0625}' => out.push(ALEF),
            '\u{0649}' => out.push(YEH),
            '\u{0629}' => out.push(HEH),
            c => out.push(c),
        }
    }
}

/// Folds Persian letter variants onto their Arabic counterparts and drops hamza above.
pub fn persian_normalize(input: &str, out: &mut String) {
    for c in input.chars() {
        match c {
            '\u{0654}' => {}
            '\u{06D2}' | '\u{06CC}' => out.push(YEH),
            '\u{06A9}' => out.push(KAF),
            '\u{06C0}' | '\u{06C1}' => out.push(HEH),
            c => out.push(c),
        }
    }
}

/// Lowercase plus both normalizations, the same folding the analyzers apply to tokens.
pub fn normalize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut arabic = String::with_capacity(lower.len());
    arabic_normalize(&lower, &mut arabic);
    let mut persian = String::with_capacity(arabic.len());
    persian_normalize(&arabic, &mut persian);
    persian
}

type NormalizeFn = fn(&str, &mut String);

#[derive(Clone, Copy)]
pub struct ArabicNormalization;

#[derive(Clone, Copy)]
pub struct PersianNormalization;

impl TokenFilter for ArabicNormalization {
    type Tokenizer<T: Tokenizer> = NormalizingFilter<T>;

    fn transform<T: Tokenizer>(self, tokenizer: T) -> NormalizingFilter<T> {
        NormalizingFilter { tokenizer, normalize: arabic_normalize, buffer: String::new() }
    }
}

impl TokenFilter for PersianNormalization {
    type Tokenizer<T: Tokenizer> = NormalizingFilter<T>;

    fn transform<T: Tokenizer>(self, tokenizer: T) -> NormalizingFilter<T> {
        NormalizingFilter { tokenizer, normalize: persian_normalize, buffer: String::new() }
    }
}

#[derive(Clone)]
pub struct NormalizingFilter<T> {
    tokenizer: T,
    normalize: NormalizeFn,
    buffer: String,
}

impl<T: Tokenizer> Tokenizer for NormalizingFilter<T> {
    type TokenStream<'a> = NormalizingTokenStream<'a, T::TokenStream<'a>>;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> Self::TokenStream<'a> {
        self.buffer.clear();
        NormalizingTokenStream { tail: self.tokenizer.token_stream(text), normalize: self.normalize, buffer: &mut self.buffer }
    }
}

pub struct NormalizingTokenStream<'a, T> {
    tail: T,
    normalize: NormalizeFn,
    buffer: &'a mut String,
}

impl<T: TokenStream> TokenStream for NormalizingTokenStream<'_, T> {
    fn advance(&mut self) -> bool {
        // Tokens made only of removable marks vanish.
        while self.tail.advance() {
            self.buffer.clear();
            (self.normalize)(&self.tail.token().text, self.buffer);
            if self.buffer.is_empty() {
                continue;
            }
            std::mem::swap(&mut self.tail.token_mut().text, self.buffer);
            return true;
        }
        false
    }

    fn token(&self) -> &Token {
        self.tail.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.tail.token_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: NormalizeFn, s: &str) -> String {
        let mut out = String::new();
        f(s, &mut out);
        out
    }

    #[test]
    fn arabic_folds_alef_and_drops_marks() {
        assert_eq!(run(arabic_normalize, "أإآ"), "ااا");
        assert_eq!(run(arabic_normalize, "كَتَبَ"), "كتب");
        assert_eq!(run(arabic_normalize, "مدرسة"), "مدرسه");
        assert_eq!(run(arabic_normalize, "علـــی"), "علی");
        assert_eq!(run(arabic_normalize, "مصطفى"), "مصطفي");
    }

    #[test]
    fn persian_folds_yeh_kaf_heh() {
        assert_eq!(run(persian_normalize, "یک"), "\u{064A}\u{0643}");
        assert_eq!(run(persian_normalize, "خانۀ"), "خانه");
        assert_eq!(run(persian_normalize, "\u{06C1}"), "\u{0647}");
        assert_eq!(run(persian_normalize, "سؤال\u{0654}"), "سؤال");
    }

    #[test]
    fn normalize_word_is_idempotent() {
        for w in ["آزمایش", "یک", "کتاب‌ها", "ABC", "خانۀ", "مدرسة"] {
            let once = normalize_word(w);
            assert_eq!(normalize_word(&once), once);
        }
    }
}
