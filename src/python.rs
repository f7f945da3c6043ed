//! PyO3 bindings.
//!
//! Exposes [`BertTokenizer`] to Python as `RustBertTokenizer`. Batch outputs
//! are returned as plain nested lists keyed by model input name, ready to be
//! wrapped in whatever tensor type the caller's inference engine wants.

use std::collections::HashMap;

use pyo3::{
    exceptions::{PyIOError, PyValueError},
    prelude::*,
};

use crate::{
    config::BertConfig,
    error::{EncodeError, TokenizerInitError},
    types::{ModelInput, TokenId},
    BertTokenizer, Tokenizer,
};

impl From<TokenizerInitError> for PyErr {
    fn from(e: TokenizerInitError) -> Self {
        match e {
            TokenizerInitError::Vocab(_) => PyIOError::new_err(e.to_string()),
            TokenizerInitError::Config(_) => PyValueError::new_err(e.to_string()),
        }
    }
}

impl From<EncodeError> for PyErr {
    fn from(e: EncodeError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}

/// Python wrapper for the BERT tokenizer.
#[pyclass]
pub struct RustBertTokenizer {
    tokenizer: BertTokenizer,
}

#[pymethods]
impl RustBertTokenizer {
    #[new]
    #[pyo3(signature = (vocab_file, config_json=None))]
    fn new(vocab_file: &str, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => BertConfig::from_json_str(json).map_err(TokenizerInitError::from)?,
            None => BertConfig::default(),
        };
        Ok(RustBertTokenizer {
            tokenizer: BertTokenizer::from_file_with_config(vocab_file, config)?,
        })
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    fn encode(&self, text: &str) -> PyResult<Vec<TokenId>> {
        Ok(self.tokenizer.encode(text)?)
    }

    #[pyo3(signature = (texts, show_progress=false))]
    fn encode_batch(
        &self,
        py: Python<'_>,
        texts: Vec<String>,
        show_progress: bool,
    ) -> PyResult<HashMap<&'static str, Vec<Vec<ModelInput>>>> {
        // release the GIL while rayon workers encode
        let batch = py.allow_threads(|| {
            self.tokenizer
                .encode_batch_with_progress(&texts, show_progress)
        })?;

        Ok(batch
            .named()
            .into_iter()
            .map(|(name, array)| {
                let rows = array.outer_iter().map(|row| row.to_vec()).collect();
                (name, rows)
            })
            .collect())
    }

    fn decode(&self, tokens: Vec<String>) -> String {
        self.tokenizer.decode(&tokens)
    }

    fn convert_ids_to_tokens(&self, ids: Vec<TokenId>) -> PyResult<Vec<String>> {
        Ok(self.tokenizer.convert_ids_to_tokens(&ids)?)
    }

    fn vocab_size(&self) -> usize {
        self.tokenizer.vocab_size()
    }
}

#[pymodule]
fn _berttok_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<RustBertTokenizer>()?;
    Ok(())
}
