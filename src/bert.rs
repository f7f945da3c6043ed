//! End-to-end BERT tokenization.
//!
//! This module provides the complete pipeline:
//! 1. Basic tokenization (cleanup, CJK spacing, casing, punctuation split).
//! 2. WordPiece segmentation of every basic token.
//! 3. Id lookup wrapped in `[CLS]` ... `[SEP]`.
//! 4. For batches, right padding and attention masks.
//!
//! Batch encoding runs each text on a Rayon worker; the vocabulary is shared
//! read-only, so no locking is involved.

use std::{path::Path, sync::Arc};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle, style::TemplateError};
use log::{debug, warn};
use ndarray::Array2;
use rayon::prelude::*;

use crate::{
    basic::BasicTokenizer,
    config::{BertConfig, SpecialTokens},
    error::{EncodeError, TokenizerInitError},
    types::{ModelInput, TokenId, CONTINUATION_PREFIX, INPUT_PAD_VALUE},
    vocab::Vocabulary,
    wordpiece::WordpieceTokenizer,
    Tokenizer,
};

/// Model inputs for a batch of texts.
///
/// All three arrays have shape `(texts, longest encoded length)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch {
    /// Token ids, right-padded with [`INPUT_PAD_VALUE`].
    pub input_ids: Array2<ModelInput>,
    /// `1` for real tokens, `0` for padding.
    pub attention_mask: Array2<ModelInput>,
    /// Segment ids; always `0` (single-segment inputs only).
    pub token_type_ids: Array2<ModelInput>,
    lengths: Vec<usize>,
}

impl EncodedBatch {
    /// Pads encoded rows into the three model input arrays.
    fn from_rows(rows: &[Vec<TokenId>]) -> Self {
        let lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
        let max_len = lengths.iter().copied().max().unwrap_or(0);
        let shape = (rows.len(), max_len);

        let mut input_ids = Array2::from_elem(shape, INPUT_PAD_VALUE);
        let mut attention_mask = Array2::zeros(shape);

        for (row, ids) in rows.iter().enumerate() {
            for (col, &id) in ids.iter().enumerate() {
                input_ids[[row, col]] = id as ModelInput;
                attention_mask[[row, col]] = 1;
            }
        }

        Self {
            input_ids,
            attention_mask,
            token_type_ids: Array2::zeros(shape),
            lengths,
        }
    }

    /// `(rows, columns)` shared by all three arrays.
    pub fn shape(&self) -> (usize, usize) {
        self.input_ids.dim()
    }

    /// Unpadded length of every row (including `[CLS]` and `[SEP]`).
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// The arrays under the input names BERT exports expect.
    pub fn named(&self) -> [(&'static str, &Array2<ModelInput>); 3] {
        [
            ("input_ids", &self.input_ids),
            ("attention_mask", &self.attention_mask),
            ("token_type_ids", &self.token_type_ids),
        ]
    }
}

/// BERT tokenizer: basic tokenization followed by WordPiece.
///
/// Cheap to share: the vocabulary sits behind an [`Arc`] and nothing is
/// mutated after construction, so `&BertTokenizer` can be used from any
/// number of threads at once.
#[derive(Debug, Clone)]
pub struct BertTokenizer {
    vocab: Arc<Vocabulary>,
    basic: Option<BasicTokenizer>,
    wordpiece: WordpieceTokenizer,
    special_tokens: SpecialTokens,
    max_sequence_length: usize,
}

impl BertTokenizer {
    /// Creates a tokenizer from an already loaded vocabulary.
    ///
    /// Special tokens missing from the vocabulary are logged here and
    /// reported as [`EncodeError::UnknownToken`] by the encode methods.
    pub fn new(vocab: impl Into<Arc<Vocabulary>>, config: BertConfig) -> Self {
        let vocab = vocab.into();

        let basic = config.do_basic_tokenize.then(|| {
            BasicTokenizer::new(
                config.do_lower_case,
                config.never_split.clone(),
                config.tokenize_chinese_chars,
            )
        });
        let wordpiece = WordpieceTokenizer::with_max_input_chars(
            Arc::clone(&vocab),
            config.special_tokens.unk.clone(),
            config.max_input_chars_per_word,
        );

        for token in config.special_tokens.all() {
            if !vocab.contains(token) {
                warn!("special token {token:?} is not in the vocabulary; encoding will fail");
            }
        }
        if let Some(pad_id) = vocab.id_of(&config.special_tokens.pad) {
            if pad_id as ModelInput != INPUT_PAD_VALUE {
                warn!(
                    "{} has id {pad_id} but batches are padded with {INPUT_PAD_VALUE}",
                    config.special_tokens.pad
                );
            }
        }

        debug!(
            "bert tokenizer ready: vocab_size={}, lower_case={}, basic={}",
            vocab.size(),
            config.do_lower_case,
            config.do_basic_tokenize
        );

        Self {
            vocab,
            basic,
            wordpiece,
            special_tokens: config.special_tokens,
            max_sequence_length: config.max_sequence_length,
        }
    }

    /// Loads `vocab_file` and builds a tokenizer with the default options.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerInitError::Vocab`] if the vocabulary cannot be read.
    pub fn from_file(vocab_file: impl AsRef<Path>) -> Result<Self, TokenizerInitError> {
        Self::from_file_with_config(vocab_file, BertConfig::default())
    }

    /// Loads `vocab_file` and builds a tokenizer with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerInitError::Vocab`] if the vocabulary cannot be read.
    pub fn from_file_with_config(
        vocab_file: impl AsRef<Path>,
        config: BertConfig,
    ) -> Result<Self, TokenizerInitError> {
        let vocab = Vocabulary::load(vocab_file)?;
        Ok(Self::new(vocab, config))
    }

    /// Number of distinct vocabulary tokens.
    pub fn vocab_size(&self) -> usize {
        self.vocab.size()
    }

    /// Special tokens taken from the config.
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special_tokens
    }

    /// Declared model length. Longer sequences are logged, not truncated.
    pub fn max_sequence_length(&self) -> usize {
        self.max_sequence_length
    }

    pub fn cls_id(&self) -> Result<TokenId, EncodeError> {
        self.token_to_id(&self.special_tokens.cls)
    }

    pub fn sep_id(&self) -> Result<TokenId, EncodeError> {
        self.token_to_id(&self.special_tokens.sep)
    }

    pub fn pad_id(&self) -> Result<TokenId, EncodeError> {
        self.token_to_id(&self.special_tokens.pad)
    }

    pub fn unk_id(&self) -> Result<TokenId, EncodeError> {
        self.token_to_id(&self.special_tokens.unk)
    }

    pub fn mask_id(&self) -> Result<TokenId, EncodeError> {
        self.token_to_id(&self.special_tokens.mask)
    }

    /// Looks up a single token.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownToken`] if `token` is not in the
    /// vocabulary.
    pub fn token_to_id(&self, token: &str) -> Result<TokenId, EncodeError> {
        self.vocab
            .id_of(token)
            .ok_or_else(|| EncodeError::UnknownToken(token.to_string()))
    }

    /// Looks up every token, without adding special tokens.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownToken`] for the first token that is not
    /// in the vocabulary.
    pub fn convert_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<Vec<TokenId>, EncodeError> {
        tokens.iter().map(|t| self.token_to_id(t.as_ref())).collect()
    }

    /// Maps ids back to their token strings.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownId`] for the first id with no token.
    pub fn convert_ids_to_tokens(&self, ids: &[TokenId]) -> Result<Vec<String>, EncodeError> {
        ids.iter()
            .map(|&id| {
                self.vocab
                    .token_of(id)
                    .map(str::to_string)
                    .ok_or(EncodeError::UnknownId(id))
            })
            .collect()
    }

    /// Looks up `tokens` and wraps them as `[CLS] tokens... [SEP]`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownToken`] if `[CLS]`, `[SEP]` or any of
    /// `tokens` is missing from the vocabulary.
    pub fn encode_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<TokenId>, EncodeError> {
        let mut ids = Vec::with_capacity(tokens.len() + 2);
        ids.push(self.cls_id()?);
        for token in tokens {
            ids.push(self.token_to_id(token.as_ref())?);
        }
        ids.push(self.sep_id()?);

        if ids.len() > self.max_sequence_length {
            warn!(
                "encoded sequence has {} ids, more than max_sequence_length {}; not truncated",
                ids.len(),
                self.max_sequence_length
            );
        }
        Ok(ids)
    }

    /// Tokenizes `text` and returns `[CLS] ids... [SEP]`.
    ///
    /// The result always has `tokenize(text).len() + 2` ids.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownToken`] if a special token (or,
    /// unexpectedly, a produced subword) is missing from the vocabulary.
    pub fn encode(&self, text: &str) -> Result<Vec<TokenId>, EncodeError> {
        self.encode_tokens(&self.tokenize(text))
    }

    /// Encodes many texts into padded model inputs.
    ///
    /// Equivalent to [`encode_batch_with_progress`](Self::encode_batch_with_progress)
    /// without a progress bar.
    ///
    /// # Errors
    ///
    /// Returns the first [`EncodeError::UnknownToken`] hit by any text.
    pub fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
    ) -> Result<EncodedBatch, EncodeError> {
        self.encode_batch_with_progress(texts, false)
    }

    /// Encodes many texts in parallel into padded model inputs.
    ///
    /// Each text is encoded independently on a Rayon worker; row order
    /// follows `texts`. Rows shorter than the longest one are right-padded:
    /// `input_ids` with the literal `0`, `attention_mask` with `0`.
    ///
    /// # Arguments
    ///
    /// * `texts` - Texts to encode, one row each.
    /// * `show_progress` - Whether to display a progress bar during encoding.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownToken`] if a text cannot be encoded, or
    /// [`EncodeError::ProgressBarSetup`] if the progress bar template fails
    /// to compile.
    pub fn encode_batch_with_progress<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
        show_progress: bool,
    ) -> Result<EncodedBatch, EncodeError> {
        let pb = if show_progress {
            self.progress_bar(texts.len() as u64, "Encoding texts")?
        } else {
            // create dummy progress bar and force to not render
            let pb = ProgressBar::new(texts.len() as u64);
            pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
            pb
        };

        // collect() on a ParallelIterator preserves input order.
        let rows: Vec<Vec<TokenId>> = texts
            .par_iter()
            .progress_with(pb)
            .map(|text| self.encode(text.as_ref()))
            .collect::<Result<_, _>>()?;

        let batch = EncodedBatch::from_rows(&rows);
        debug!("encoded batch with shape {:?}", batch.shape());
        Ok(batch)
    }

    /// Joins tokens back into text.
    ///
    /// Removes every `##` marker and joins the tokens with single spaces.
    /// This is lossy: `["hello", ",", "wor", "##ld"]` becomes
    /// `"hello , wor ld"`, so it is not an inverse of [`tokenize`](Tokenizer::tokenize).
    pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let joined = tokens
            .iter()
            .map(|t| t.as_ref().replace(CONTINUATION_PREFIX, ""))
            .collect::<Vec<_>>()
            .join(" ");
        joined.trim_matches(|c: char| c <= '\u{20}').to_string()
    }

    /// Creates a styled progress bar with elapsed time, a fixed-width message label, and position/total counters.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the progress bar style template is invalid.
    fn progress_bar(&self, size: u64, msg: impl Into<String>) -> Result<ProgressBar, TemplateError> {
        let pb = ProgressBar::new(size);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {msg:<30!} {wide_bar} {pos}/{len}")?;

        pb.set_style(style);
        pb.set_message(msg.into());
        pb.enable_steady_tick(std::time::Duration::from_secs(1));

        Ok(pb)
    }
}

impl Tokenizer for BertTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        match &self.basic {
            Some(basic) => basic
                .tokenize(text)
                .iter()
                .flat_map(|token| self.wordpiece.tokenize_word(token))
                .collect(),
            None => self.wordpiece.tokenize(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, io::Write};

    use proptest::prelude::*;

    use super::*;

    /// Vocabulary used by the end-to-end example: `[CLS]`=0 ... `##!`=7.
    fn example_vocab() -> Vocabulary {
        Vocabulary::from_lines(["[CLS]", "[SEP]", "[UNK]", "[PAD]", "hello", "world", ",", "##!"])
    }

    fn make_tokenizer(config: BertConfig) -> BertTokenizer {
        let vocab = Vocabulary::from_lines([
            "[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]", "a", "b", "##b", "the", "quick", "brown",
            "fox", "jump", "##s", "##ed", ".", ",", "!", "中", "文", "cafe",
        ]);
        BertTokenizer::new(vocab, config)
    }

    #[test]
    fn test_end_to_end_example() {
        let tok = BertTokenizer::new(example_vocab(), BertConfig::default().with_lower_case(true));
        let ids = tok.encode("Hello, world").expect("text should be encodable");
        assert_eq!(ids, vec![0, 4, 6, 5, 1]);
    }

    #[test]
    fn test_tokenize_pipeline() {
        let tok = make_tokenizer(BertConfig::default().with_lower_case(true));
        assert_eq!(
            tok.tokenize("The quick brown fox JUMPED."),
            vec!["the", "quick", "brown", "fox", "jump", "##ed", "."]
        );
        assert_eq!(tok.tokenize("中文 Café!"), vec!["中", "文", "cafe", "!"]);
        assert_eq!(tok.tokenize("foxs zebra"), vec!["fox", "##s", "[UNK]"]);
        // no "##e" piece, so the whole word is unknown
        assert_eq!(tok.tokenize("foxes"), vec!["[UNK]"]);
    }

    #[test]
    fn test_default_config_is_case_sensitive() {
        let tok = make_tokenizer(BertConfig::default());
        assert_eq!(tok.tokenize("The the"), vec!["[UNK]", "the"]);
    }

    #[test]
    fn test_without_basic_tokenize() {
        let tok = make_tokenizer(BertConfig::default().with_basic_tokenize(false));
        // punctuation is no longer split off, so "fox." has no full cover
        assert_eq!(tok.tokenize("  the fox.  jumps "), vec!["the", "[UNK]", "jump", "##s"]);
    }

    #[test]
    fn test_never_split_through_config() {
        let tok = make_tokenizer(
            BertConfig::default()
                .with_lower_case(true)
                .with_never_split(["[MASK]"]),
        );
        assert_eq!(tok.tokenize("the [MASK] fox"), vec!["the", "[MASK]", "fox"]);
    }

    #[test]
    fn test_encode_wraps_special_tokens() {
        let tok = make_tokenizer(BertConfig::default());
        let ids = tok.encode("quick fox").expect("text should be encodable");
        assert_eq!(ids, vec![2, 9, 11, 3]);
        assert_eq!(tok.encode("").expect("empty text should be encodable"), vec![2, 3]);
    }

    #[test]
    fn test_encode_missing_special_token_errors() {
        let vocab = Vocabulary::from_lines(["[CLS]", "[UNK]", "hello"]);
        let tok = BertTokenizer::new(vocab, BertConfig::default());
        match tok.encode("hello") {
            Err(EncodeError::UnknownToken(token)) => assert_eq!(token, "[SEP]"),
            other => panic!("expected UnknownToken, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_missing_unknown_token_errors() {
        // the WordPiece fallback itself is absent from the vocabulary
        let vocab = Vocabulary::from_lines(["[CLS]", "[SEP]", "hello"]);
        let tok = BertTokenizer::new(vocab, BertConfig::default());
        assert!(matches!(
            tok.encode("goodbye"),
            Err(EncodeError::UnknownToken(t)) if t == "[UNK]"
        ));
    }

    #[test]
    fn test_encode_batch_pads_with_zero() {
        let tok = make_tokenizer(BertConfig::default());
        let batch = tok.encode_batch(&["a", "b b", ""]).expect("batch should be encodable");

        assert_eq!(batch.shape(), (3, 4));
        assert_eq!(batch.lengths(), &[3, 4, 2]);
        assert_eq!(
            batch.input_ids,
            ndarray::array![[2i64, 5, 3, 0], [2, 6, 6, 3], [2, 3, 0, 0]]
        );
        assert_eq!(
            batch.attention_mask,
            ndarray::array![[1i64, 1, 1, 0], [1, 1, 1, 1], [1, 1, 0, 0]]
        );
        assert!(batch.token_type_ids.iter().all(|&t| t == 0));
    }

    #[test]
    fn test_encode_batch_pad_value_ignores_vocab_pad_id() {
        // [PAD] is id 3 here, padding still writes 0
        let tok = BertTokenizer::new(example_vocab(), BertConfig::default().with_lower_case(true));
        let batch = tok
            .encode_batch(&["hello", "hello world"])
            .expect("batch should be encodable");
        assert_eq!(batch.input_ids, ndarray::array![[0i64, 4, 1, 0], [0, 4, 5, 1]]);
    }

    #[test]
    fn test_encode_batch_empty() {
        let tok = make_tokenizer(BertConfig::default());
        let batch = tok.encode_batch::<&str>(&[]).expect("empty batch should be encodable");
        assert_eq!(batch.shape(), (0, 0));
        assert!(batch.lengths().is_empty());
    }

    #[test]
    fn test_encode_batch_propagates_errors() {
        let vocab = Vocabulary::from_lines(["[CLS]", "[UNK]"]);
        let tok = BertTokenizer::new(vocab, BertConfig::default());
        assert!(tok.encode_batch(&["x", "y"]).is_err());
    }

    #[test]
    fn test_named_inputs() {
        let tok = make_tokenizer(BertConfig::default());
        let batch = tok.encode_batch(&["a"]).expect("batch should be encodable");
        let names: Vec<&str> = batch.named().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["input_ids", "attention_mask", "token_type_ids"]);
        for (_, array) in batch.named() {
            assert_eq!(array.dim(), (1, 3));
        }
    }

    #[test]
    fn test_id_conversions() {
        let tok = make_tokenizer(BertConfig::default());
        let ids = tok
            .convert_tokens_to_ids(&["jump", "##s"])
            .expect("tokens should be in the vocabulary");
        assert_eq!(ids, vec![12, 13]);
        assert_eq!(
            tok.convert_ids_to_tokens(&ids).expect("ids should be in the vocabulary"),
            vec!["jump", "##s"]
        );
        assert!(matches!(
            tok.convert_ids_to_tokens(&[999]),
            Err(EncodeError::UnknownId(999))
        ));
        assert_eq!(tok.pad_id().expect("[PAD] should exist"), 0);
        assert_eq!(tok.mask_id().expect("[MASK] should exist"), 4);
        assert_eq!(tok.unk_id().expect("[UNK] should exist"), 1);
        assert_eq!(tok.vocab_size(), 21);
    }

    #[test]
    fn test_encode_tokens() {
        let tok = make_tokenizer(BertConfig::default());
        let ids = tok
            .encode_tokens(&["the", "fox"])
            .expect("tokens should be in the vocabulary");
        assert_eq!(ids, vec![2, 8, 11, 3]);
    }

    #[test]
    fn test_decode_is_lossy() {
        let tok = make_tokenizer(BertConfig::default());
        assert_eq!(tok.decode(&["jump", "##ed", ",", "fox"]), "jump ed , fox");
        assert_eq!(tok.decode::<&str>(&[]), "");
        assert_eq!(tok.decode(&["a", "##"]), "a");
    }

    #[test]
    fn test_long_sequence_is_not_truncated() {
        let tok = make_tokenizer(BertConfig::default().with_max_sequence_length(4));
        assert_eq!(tok.max_sequence_length(), 4);
        let ids = tok.encode("a a a a a").expect("text should be encodable");
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be creatable");
        for token in ["[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]", "hi"] {
            writeln!(file, "{token}").expect("temp file should be writable");
        }
        let tok = BertTokenizer::from_file(file.path()).expect("vocab file should load");
        assert_eq!(tok.vocab_size(), 6);
        assert_eq!(tok.special_tokens(), &SpecialTokens::default());
        assert_eq!(tok.encode("hi").expect("text should be encodable"), vec![2, 5, 3]);
    }

    #[test]
    fn test_from_missing_file_errors() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let result = BertTokenizer::from_file(dir.path().join("vocab.txt"));
        assert!(matches!(result, Err(TokenizerInitError::Vocab(_))));
    }

    #[test]
    fn test_shared_across_threads() {
        let tok = make_tokenizer(BertConfig::default().with_lower_case(true));
        let expected = tok.encode("The quick fox.").expect("text should be encodable");
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| tok.encode("The quick fox.")))
                .collect();
            for handle in handles {
                let ids = handle
                    .join()
                    .expect("thread should not panic")
                    .expect("text should be encodable");
                assert_eq!(ids, expected);
            }
        });
    }

    fn arb_text() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            proptest::sample::select(vec![
                "the", "The", "quick", "fox", "jumps", "b", "bb", "中文", "x", ",", "!?", " ", "\t",
                "\u{0}", "é",
            ]),
            0..20,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn prop_tokenize_is_basic_then_wordpiece(text in arb_text(), lower in any::<bool>()) {
            let config = BertConfig::default().with_lower_case(lower);
            let tok = make_tokenizer(config);
            let basic = BasicTokenizer::new(lower, HashSet::new(), true);
            let wordpiece = WordpieceTokenizer::new(Arc::clone(&tok.vocab), "[UNK]");

            let expected: Vec<String> = basic
                .tokenize(&text)
                .iter()
                .flat_map(|w| wordpiece.tokenize(w))
                .collect();
            prop_assert_eq!(tok.tokenize(&text), expected);
        }

        #[test]
        fn prop_encode_shape(text in arb_text()) {
            let tok = make_tokenizer(BertConfig::default());
            let ids = tok.encode(&text).expect("every token should be in the vocabulary");
            prop_assert_eq!(ids.len(), tok.tokenize(&text).len() + 2);
            prop_assert_eq!(ids.first().copied(), Some(2));
            prop_assert_eq!(ids.last().copied(), Some(3));
        }

        #[test]
        fn prop_batch_mask_matches_lengths(texts in proptest::collection::vec(arb_text(), 1..6)) {
            let tok = make_tokenizer(BertConfig::default());
            let batch = tok.encode_batch(&texts).expect("batch should be encodable");
            let max_len = batch.lengths().iter().copied().max().unwrap_or(0);

            prop_assert_eq!(batch.shape(), (texts.len(), max_len));
            prop_assert_eq!(batch.attention_mask.dim(), batch.input_ids.dim());
            prop_assert_eq!(batch.token_type_ids.dim(), batch.input_ids.dim());
            for (row, text) in texts.iter().enumerate() {
                let encoded = tok.encode(text).expect("text should be encodable");
                let mask_sum: i64 = batch.attention_mask.row(row).sum();
                prop_assert_eq!(mask_sum as usize, encoded.len());
                prop_assert_eq!(batch.lengths()[row], encoded.len());
            }
            prop_assert!(batch.token_type_ids.iter().all(|&t| t == 0));
        }
    }
}
