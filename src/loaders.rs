//! Artifact location and loading.
//!
//! The pipeline depends on two startup artifacts: the vocabulary and the
//! classifier weights. Both can live in a local directory or in a Hugging
//! Face Hub repository; either way they are loaded exactly once when the
//! pipeline is built and treated as read-only afterwards.

use crate::error::{PipelineError, Result};
use crate::vocab::Vocabulary;
use hf_hub::{api::sync::Api, Repo, RepoType};
use std::path::{Path, PathBuf};

/// Hugging Face style tokenizer file, preferred vocabulary artifact.
pub const TOKENIZER_FILE: &str = "tokenizer.json";
/// Plain word-index export, fallback vocabulary artifact.
pub const VOCABULARY_FILE: &str = "vocabulary.json";
/// Classifier weights.
pub const WEIGHTS_FILE: &str = "model.safetensors";
/// Classifier hyperparameters.
pub const CONFIG_FILE: &str = "config.json";

/// Where the startup artifacts come from.
#[derive(Debug, Clone)]
pub enum ArtifactSource {
    /// A local directory containing the artifact files.
    Dir(PathBuf),
    /// A Hugging Face Hub model repository, fetched with the sync API.
    HfHub(String),
}

impl ArtifactSource {
    /// Artifacts in a local directory.
    pub fn dir(path: impl AsRef<Path>) -> Self {
        ArtifactSource::Dir(path.as_ref().to_path_buf())
    }

    /// Artifacts in a Hugging Face Hub repository.
    pub fn hf_hub(repo_id: impl Into<String>) -> Self {
        ArtifactSource::HfHub(repo_id.into())
    }

    /// Resolves a single artifact file to a local path, downloading it
    /// first for hub sources.
    pub fn locate(&self, filename: &str) -> Result<PathBuf> {
        match self {
            ArtifactSource::Dir(dir) => {
                let path = dir.join(filename);
                if !path.is_file() {
                    return Err(PipelineError::Artifact(format!(
                        "Missing artifact '{}' in '{}'",
                        filename,
                        dir.display()
                    )));
                }
                Ok(path)
            }
            ArtifactSource::HfHub(repo_id) => {
                let api = Api::new()?;
                let repo = api.repo(Repo::new(repo_id.clone(), RepoType::Model));
                Ok(repo.get(filename)?)
            }
        }
    }
}

/// Loads the vocabulary artifact: tries [`TOKENIZER_FILE`] first, falls
/// back to [`VOCABULARY_FILE`].
pub fn load_vocabulary(source: &ArtifactSource) -> Result<Vocabulary> {
    match source.locate(TOKENIZER_FILE) {
        Ok(path) => Vocabulary::from_tokenizer_file(path),
        Err(_) => Vocabulary::from_word_index_file(source.locate(VOCABULARY_FILE)?),
    }
}
