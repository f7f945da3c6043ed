//! WordPiece subword segmentation.
//!
//! Each word is cut greedily into the longest pieces found in the vocabulary,
//! left to right. Every piece after the first carries the `##` continuation
//! prefix. A word that cannot be covered completely becomes a single unknown
//! token.

use std::sync::Arc;

use crate::{
    config::DEFAULT_MAX_INPUT_CHARS_PER_WORD,
    normalizer::whitespace_tokenize,
    types::CONTINUATION_PREFIX,
    vocab::Vocabulary,
    Tokenizer,
};

/// Greedy longest-match-first subword tokenizer.
#[derive(Debug, Clone)]
pub struct WordpieceTokenizer {
    vocab: Arc<Vocabulary>,
    unknown_token: String,
    max_input_chars_per_word: usize,
}

impl WordpieceTokenizer {
    /// Creates a tokenizer with the default 100-character word limit.
    pub fn new(vocab: Arc<Vocabulary>, unknown_token: impl Into<String>) -> Self {
        Self::with_max_input_chars(vocab, unknown_token, DEFAULT_MAX_INPUT_CHARS_PER_WORD)
    }

    /// Creates a tokenizer; words with more than `max_input_chars_per_word`
    /// characters map straight to `unknown_token`.
    pub fn with_max_input_chars(
        vocab: Arc<Vocabulary>,
        unknown_token: impl Into<String>,
        max_input_chars_per_word: usize,
    ) -> Self {
        Self {
            vocab,
            unknown_token: unknown_token.into(),
            max_input_chars_per_word,
        }
    }

    /// Segments a single word (no whitespace) into WordPiece tokens.
    ///
    /// # Arguments
    ///
    /// * `word` - One token from the basic tokenizer.
    ///
    /// # Returns
    ///
    /// The pieces in order, e.g. `["un", "##aff", "##able"]`, or
    /// `[unknown_token]` if the word is too long or some position has no
    /// matching piece. Partial segmentations are never returned.
    ///
    /// # Complexity
    ///
    /// `O(n²)` vocabulary lookups for a word of `n` characters in the worst
    /// case, each one a hash of the candidate piece.
    pub fn tokenize_word(&self, word: &str) -> Vec<String> {
        // byte offsets of every char boundary, including the end of the word
        let boundaries: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()))
            .collect();
        let char_count = boundaries.len() - 1;

        if char_count > self.max_input_chars_per_word {
            return vec![self.unknown_token.clone()];
        }

        let mut sub_tokens = Vec::new();
        let mut candidate = String::with_capacity(word.len() + CONTINUATION_PREFIX.len());
        let mut start = 0;

        while start < char_count {
            let mut matched = None;

            for end in (start + 1..=char_count).rev() {
                let piece = &word[boundaries[start]..boundaries[end]];
                candidate.clear();
                if start > 0 {
                    candidate.push_str(CONTINUATION_PREFIX);
                }
                candidate.push_str(piece);

                if self.vocab.contains(&candidate) {
                    matched = Some(end);
                    break;
                }
            }

            match matched {
                Some(end) => {
                    sub_tokens.push(candidate.clone());
                    start = end;
                }
                None => return vec![self.unknown_token.clone()],
            }
        }

        sub_tokens
    }
}

impl Tokenizer for WordpieceTokenizer {
    /// Splits `text` on whitespace and segments every word.
    fn tokenize(&self, text: &str) -> Vec<String> {
        whitespace_tokenize(text)
            .into_iter()
            .flat_map(|word| self.tokenize_word(word))
            .collect()
    }
}
