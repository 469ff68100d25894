//! Vocabulary lookup for review text.
//!
//! A [`Vocabulary`] is the fixed token → id mapping produced when the
//! classifier was trained. It is loaded once at startup and never mutated at
//! request time; [`Vocabulary::encode`] is a pure function over it.

use crate::error::{PipelineError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Punctuation stripped before splitting, matching the filter set the
/// vocabulary was built with. Apostrophes are intentionally kept.
const FILTERS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=', '>',
    '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Candidate OOV token names probed when loading a `tokenizer.json`.
const OOV_TOKENS: &[&str] = &["<OOV>", "[UNK]", "<unk>"];

/// Token names allowed to occupy the reserved pad id 0.
const PAD_TOKENS: &[&str] = &["<pad>", "<PAD>", "[PAD]"];

#[derive(Deserialize)]
struct RawWordIndex {
    word_index: HashMap<String, u32>,
    #[serde(default = "default_oov_token")]
    oov_token: String,
}

fn default_oov_token() -> String {
    "<OOV>".to_string()
}

/// Immutable token → id mapping with a reserved out-of-vocabulary id.
///
/// Id 0 is reserved for padding and never assigned to a token.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    index: HashMap<String, u32>,
    oov_id: u32,
}

impl Vocabulary {
    /// Creates a vocabulary from an explicit word index and OOV id.
    pub fn new(index: HashMap<String, u32>, oov_id: u32) -> Self {
        Self { index, oov_id }
    }

    /// Loads a JSON word-index export:
    /// `{"word_index": {"the": 1, ...}, "oov_token": "<OOV>"}`.
    ///
    /// The OOV token must itself appear in the word index; a vocabulary
    /// without a resolvable OOV id is considered corrupt.
    pub fn from_word_index_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw: RawWordIndex =
            serde_json::from_str(&std::fs::read_to_string(path).map_err(|e| {
                PipelineError::Artifact(format!(
                    "Failed to read vocabulary from '{}': {e}",
                    path.display()
                ))
            })?)?;

        let oov_id = raw.word_index.get(&raw.oov_token).copied().ok_or_else(|| {
            PipelineError::Artifact(format!(
                "OOV token '{}' missing from word index in '{}'",
                raw.oov_token,
                path.display()
            ))
        })?;

        Ok(Self {
            index: raw.word_index,
            oov_id,
        })
    }

    /// Loads the vocabulary table of a Hugging Face `tokenizer.json`.
    ///
    /// Only the vocab table and the unknown-token id are taken from the
    /// file; encoding always uses this crate's whitespace/punctuation
    /// scheme.
    ///
    /// Id 0 is reserved for padding. A vocab table that maps a real token
    /// (anything other than a padding token) to 0 would make that token
    /// indistinguishable from filler, so such a file is rejected as
    /// corrupt.
    pub fn from_tokenizer_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            PipelineError::Artifact(format!(
                "Failed to load tokenizer from '{}': {e}",
                path.display()
            ))
        })?;

        let oov_id = OOV_TOKENS
            .iter()
            .find_map(|t| tokenizer.token_to_id(t))
            .ok_or_else(|| {
                PipelineError::Artifact(format!(
                    "No OOV token (one of {}) in '{}'",
                    OOV_TOKENS.join(", "),
                    path.display()
                ))
            })?;

        let index = tokenizer.get_vocab(true);
        if let Some((token, _)) = index
            .iter()
            .find(|(token, id)| **id == 0 && !PAD_TOKENS.contains(&token.as_str()))
        {
            return Err(PipelineError::Artifact(format!(
                "Token '{}' maps to the reserved pad id 0 in '{}'",
                token,
                path.display()
            )));
        }

        Ok(Self { index, oov_id })
    }

    /// The reserved id substituted for tokens absent from the index.
    pub fn oov_id(&self) -> u32 {
        self.oov_id
    }

    /// Number of tokens in the index.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maps raw text to an ordered id sequence, one id per token.
    ///
    /// Lowercases, strips the punctuation filter set, splits on whitespace,
    /// and substitutes the OOV id for unknown tokens. Pure and total: no
    /// input can make it fail.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        text.to_lowercase()
            .split(|c: char| c.is_whitespace() || FILTERS.contains(&c))
            .filter(|token| !token.is_empty())
            .map(|token| self.index.get(token).copied().unwrap_or(self.oov_id))
            .collect()
    }
}
