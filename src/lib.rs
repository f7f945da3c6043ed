//! BERT WordPiece tokenizer.
//!
//! Converts raw UTF-8 text into the token ids a pretrained BERT model
//! expects, reproducing the reference segmentation exactly:
//!
//! 1. [`normalizer`] cleans the text and spaces out CJK ideographs.
//! 2. [`BasicTokenizer`] splits on whitespace and punctuation, optionally
//!    lowercasing and stripping accents.
//! 3. [`WordpieceTokenizer`] cuts each word into vocabulary pieces.
//! 4. [`BertTokenizer`] ties the stages together and produces `[CLS]`/`[SEP]`
//!    wrapped ids and padded [`EncodedBatch`]es for the inference engine.
//!
//! With the `python` feature the crate also builds the `_berttok_rs` PyO3
//! extension module.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod basic;
pub mod bert;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;
pub mod vocab;
pub mod wordpiece;

#[cfg(feature = "python")]
mod python;

pub use basic::BasicTokenizer;
pub use bert::{BertTokenizer, EncodedBatch};
pub use config::{BertConfig, SpecialTokens};
pub use error::{ConfigError, EncodeError, TokenizerInitError, VocabLoadError};
pub use types::{ModelInput, TokenId};
pub use vocab::Vocabulary;
pub use wordpiece::WordpieceTokenizer;

/// Splits text into a sequence of token strings.
///
/// Implemented by each pipeline stage on its own; no state is shared between
/// implementations.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}
