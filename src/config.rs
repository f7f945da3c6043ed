//! Tokenizer configuration.
//!
//! [`BertConfig`] can be built in code (`Default` plus `with_*` setters) or
//! read from a `tokenizer_config.json` style document. Unknown keys are
//! ignored so configs exported alongside a model load unchanged.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Default per-word length cutoff before a word becomes `[UNK]`.
pub const DEFAULT_MAX_INPUT_CHARS_PER_WORD: usize = 100;

/// Default model sequence length. Declared only; sequences are never truncated.
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 512;

/// Reserved vocabulary entries the pipeline relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSpecialTokens")]
pub struct SpecialTokens {
    /// Sequence-start marker.
    #[serde(rename = "cls_token")]
    pub cls: String,
    /// Sequence-end marker.
    #[serde(rename = "sep_token")]
    pub sep: String,
    #[serde(rename = "pad_token")]
    pub pad: String,
    /// Out-of-vocabulary marker produced by the WordPiece stage.
    #[serde(rename = "unk_token")]
    pub unk: String,
    /// Masked-LM placeholder, unused by the pipeline.
    #[serde(rename = "mask_token")]
    pub mask: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            cls: "[CLS]".to_string(),
            sep: "[SEP]".to_string(),
            pad: "[PAD]".to_string(),
            unk: "[UNK]".to_string(),
            mask: "[MASK]".to_string(),
        }
    }
}

impl SpecialTokens {
    /// All five special token strings, in `cls, sep, pad, unk, mask` order.
    pub fn all(&self) -> [&str; 5] {
        [&self.cls, &self.sep, &self.pad, &self.unk, &self.mask]
    }
}

/// Either `"[UNK]"` or the added-token form `{"content": "[UNK]", ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenRepr {
    Plain(String),
    Added { content: String },
}

impl TokenRepr {
    fn into_content(self) -> String {
        match self {
            TokenRepr::Plain(s) => s,
            TokenRepr::Added { content } => content,
        }
    }
}

/// Special tokens as written in a config; absent and `null` entries both
/// fall back to the defaults.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawSpecialTokens {
    cls_token: Option<TokenRepr>,
    sep_token: Option<TokenRepr>,
    pad_token: Option<TokenRepr>,
    unk_token: Option<TokenRepr>,
    mask_token: Option<TokenRepr>,
}

impl From<RawSpecialTokens> for SpecialTokens {
    fn from(raw: RawSpecialTokens) -> Self {
        let defaults = SpecialTokens::default();
        let pick = |token: Option<TokenRepr>, default: String| {
            token.map(TokenRepr::into_content).unwrap_or(default)
        };
        Self {
            cls: pick(raw.cls_token, defaults.cls),
            sep: pick(raw.sep_token, defaults.sep),
            pad: pick(raw.pad_token, defaults.pad),
            unk: pick(raw.unk_token, defaults.unk),
            mask: pick(raw.mask_token, defaults.mask),
        }
    }
}

/// Reads `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts any JSON number. Exports mark an unbounded length with a huge
/// float (`1e30`), which saturates to `usize::MAX`. `null` keeps the default.
fn sequence_length<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LengthRepr {
        Int(u64),
        Float(f64),
    }

    Ok(match Option::<LengthRepr>::deserialize(deserializer)? {
        Some(LengthRepr::Int(n)) => usize::try_from(n).unwrap_or(usize::MAX),
        // float to int casts saturate; NaN and negatives become 0
        Some(LengthRepr::Float(f)) => f as usize,
        None => DEFAULT_MAX_SEQUENCE_LENGTH,
    })
}

/// Options recognized by [`crate::BertTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BertConfig {
    /// Lowercase and strip accents from every word not in `never_split`.
    pub do_lower_case: bool,
    /// Run the basic (normalize + punctuation) stage before WordPiece.
    pub do_basic_tokenize: bool,
    /// Words exempt from lowercasing and punctuation splitting.
    #[serde(deserialize_with = "null_as_default")]
    pub never_split: HashSet<String>,
    /// Surround CJK ideographs with whitespace so each becomes a token.
    pub tokenize_chinese_chars: bool,
    pub max_input_chars_per_word: usize,
    /// Sequences longer than this are logged, not truncated.
    #[serde(alias = "model_max_length", deserialize_with = "sequence_length")]
    pub max_sequence_length: usize,
    #[serde(flatten)]
    pub special_tokens: SpecialTokens,
}

impl Default for BertConfig {
    fn default() -> Self {
        Self {
            do_lower_case: false,
            do_basic_tokenize: true,
            never_split: HashSet::new(),
            tokenize_chinese_chars: true,
            max_input_chars_per_word: DEFAULT_MAX_INPUT_CHARS_PER_WORD,
            max_sequence_length: DEFAULT_MAX_SEQUENCE_LENGTH,
            special_tokens: SpecialTokens::default(),
        }
    }
}

impl BertConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `content` is not valid JSON or a
    /// recognized field has the wrong type.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its content is not a valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn with_lower_case(mut self, do_lower_case: bool) -> Self {
        self.do_lower_case = do_lower_case;
        self
    }

    pub fn with_basic_tokenize(mut self, do_basic_tokenize: bool) -> Self {
        self.do_basic_tokenize = do_basic_tokenize;
        self
    }

    /// Adds words to the `never_split` set.
    pub fn with_never_split<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.never_split.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_chinese_chars(mut self, tokenize_chinese_chars: bool) -> Self {
        self.tokenize_chinese_chars = tokenize_chinese_chars;
        self
    }

    pub fn with_max_input_chars_per_word(mut self, max_chars: usize) -> Self {
        self.max_input_chars_per_word = max_chars;
        self
    }

    pub fn with_max_sequence_length(mut self, max_len: usize) -> Self {
        self.max_sequence_length = max_len;
        self
    }

    /// Replaces all five special tokens.
    pub fn with_special_tokens(mut self, special_tokens: SpecialTokens) -> Self {
        self.special_tokens = special_tokens;
        self
    }
}
