//! Error types for vocabulary loading, configuration and encoding.

use std::{io, path::PathBuf};

use indicatif::style::TemplateError;
use thiserror::Error;

use crate::types::TokenId;

/// Errors that can occur while loading a vocabulary file.
///
/// Loading is all-or-nothing: no partially populated vocabulary is ever
/// returned alongside one of these.
#[derive(Debug, Error)]
pub enum VocabLoadError {
    /// The vocabulary file could not be opened or read (this includes
    /// invalid UTF-8 in a line).
    #[error("failed to read vocabulary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur while reading a tokenizer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tokenizer config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document is not valid JSON or a field has the wrong type.
    #[error("invalid tokenizer config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur when initializing a tokenizer.
#[derive(Debug, Error)]
pub enum TokenizerInitError {
    #[error(transparent)]
    Vocab(#[from] VocabLoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur when turning text or tokens into ids (and back).
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A token (a special token, or a produced subword) is not in the
    /// vocabulary.
    #[error("unknown token: {0:?}")]
    UnknownToken(String),
    /// Token ID not found in vocabulary.
    #[error("unknown token id: {0}")]
    UnknownId(TokenId),
    /// Progress bar template string was invalid.
    #[error("template parsing failed: {0}")]
    ProgressBarSetup(#[from] TemplateError),
}
