//! Basic tokenization: cleanup, whitespace and punctuation splitting.
//!
//! This is the stage that runs before WordPiece. It never consults the
//! vocabulary, so its output is the same for every BERT model sharing the
//! same casing options.

use std::collections::HashSet;

use crate::{
    normalizer::{clean, is_punctuation, space_chinese_chars, strip_accents, whitespace_tokenize},
    Tokenizer,
};

/// Splits text into words and punctuation marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicTokenizer {
    do_lower_case: bool,
    never_split: HashSet<String>,
    tokenize_chinese_chars: bool,
}

impl Default for BasicTokenizer {
    fn default() -> Self {
        Self::new(false, HashSet::new(), true)
    }
}

impl BasicTokenizer {
    /// Creates a basic tokenizer.
    ///
    /// # Arguments
    ///
    /// * `do_lower_case` - Lowercase and strip accents from each word.
    /// * `never_split` - Words kept verbatim: neither lowercased nor split on
    ///   punctuation.
    /// * `tokenize_chinese_chars` - Make every CJK ideograph its own word.
    pub fn new(
        do_lower_case: bool,
        never_split: HashSet<String>,
        tokenize_chinese_chars: bool,
    ) -> Self {
        Self {
            do_lower_case,
            never_split,
            tokenize_chinese_chars,
        }
    }

    /// Splits one whitespace-delimited word on punctuation.
    ///
    /// Every punctuation character becomes a token of its own and the runs
    /// between them become tokens. Words in `never_split` come back whole.
    fn split_on_punctuation(&self, word: &str) -> Vec<String> {
        if self.never_split.contains(word) {
            return vec![word.to_string()];
        }

        let mut output = Vec::new();
        let mut current = String::new();

        for c in word.chars() {
            if is_punctuation(c) {
                if !current.is_empty() {
                    output.push(std::mem::take(&mut current));
                }
                output.push(c.to_string());
            } else {
                current.push(c);
            }
        }

        if !current.is_empty() {
            output.push(current);
        }
        output
    }
}

impl Tokenizer for BasicTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut text = clean(text);
        if self.tokenize_chinese_chars {
            text = space_chinese_chars(&text);
        }

        let mut tokens = Vec::new();
        for word in whitespace_tokenize(&text) {
            if self.do_lower_case && !self.never_split.contains(word) {
                let folded = strip_accents(&word.to_lowercase());
                tokens.extend(self.split_on_punctuation(&folded));
            } else {
                tokens.extend(self.split_on_punctuation(word));
            }
        }
        tokens
    }
}
