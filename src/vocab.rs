//! Vocabulary loading and token <-> id lookup.
//!
//! A vocabulary file is plain UTF-8 text with one token per line and no
//! header. The zero-based line number of a token is its id.

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::{debug, warn};

use crate::{error::VocabLoadError, types::TokenId};

/// Immutable token <-> id table.
///
/// Built once and then shared read-only (usually behind an `Arc`) by every
/// tokenizer stage that needs it.
///
/// # Duplicate lines
///
/// When a token string appears on several lines, the last line wins: the
/// forward map points at the later id and the reverse map only knows that
/// later id. The earlier ids resolve to no token. Such files are accepted
/// with a warning, since published BERT vocabularies are loaded this way by
/// the reference tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    token_to_id: HashMap<String, TokenId>,
    id_to_token: HashMap<TokenId, String>,
    /// Number of lines whose token was already seen on an earlier line.
    duplicates: usize,
}

impl Vocabulary {
    /// Loads a vocabulary file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of a newline-delimited UTF-8 vocabulary file.
    ///
    /// # Errors
    ///
    /// Returns [`VocabLoadError::Io`] if the file cannot be opened or any line
    /// cannot be read. No partial vocabulary is returned in that case.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VocabLoadError> {
        let path = path.as_ref();
        let io_err = |source: io::Error| VocabLoadError::Io {
            path: path.to_path_buf(),
            source,
        };

        // the file is closed when `reader` drops, on success and on error.
        let reader = BufReader::new(File::open(path).map_err(io_err)?);
        let vocab = Self::from_reader(reader).map_err(io_err)?;

        debug!(
            "loaded vocabulary {} ({} tokens)",
            path.display(),
            vocab.size()
        );
        Ok(vocab)
    }

    /// Reads a vocabulary from any buffered reader, one token per line.
    ///
    /// Only the line terminator (`\n` or `\r\n`) is removed from each line.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if a read fails or a line is not
    /// valid UTF-8.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Builds a vocabulary from tokens given in id order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut token_to_id = HashMap::new();
        let mut duplicates = 0;

        for (id, line) in lines.into_iter().enumerate() {
            if token_to_id.insert(line.into(), id).is_some() {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            warn!(
                "vocabulary has {duplicates} duplicate line(s); later ids win and earlier ids resolve to no token"
            );
        }

        let id_to_token = token_to_id
            .iter()
            .map(|(token, &id)| (id, token.clone()))
            .collect();

        Self {
            token_to_id,
            id_to_token,
            duplicates,
        }
    }

    /// Returns the id of `token`, if present.
    #[inline]
    pub fn id_of(&self, token: &str) -> Option<TokenId> {
        self.token_to_id.get(token).copied()
    }

    /// Returns the token with id `id`, if any.
    pub fn token_of(&self, id: TokenId) -> Option<&str> {
        self.id_to_token.get(&id).map(String::as_str)
    }

    /// Returns `true` if `token` is in the vocabulary.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Number of distinct tokens.
    ///
    /// Equals the number of lines of the source unless it had duplicates.
    pub fn size(&self) -> usize {
        self.token_to_id.len()
    }

    /// Number of source lines that repeated an earlier token.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}
