//! Type aliases and shared types for the BERT tokenization pipeline.
//!
//! These type aliases provide semantic clarity throughout the codebase.

/// Represents a token identifier in the vocabulary.
///
/// Token IDs are the zero-based line numbers of the vocabulary file.
pub type TokenId = usize;

/// Integer type of the arrays handed to the inference engine.
///
/// BERT exports consume `int64` tensors for every input.
pub type ModelInput = i64;

/// Value written into `input_ids` past the end of a shorter row.
///
/// This is the literal `0`, not the vocabulary's `[PAD]` id. Both agree for
/// every stock BERT vocabulary.
pub const INPUT_PAD_VALUE: ModelInput = 0;

/// Prefix marking a WordPiece that continues the previous piece of a word.
pub const CONTINUATION_PREFIX: &str = "##";
