//! Concrete classifier implementations.

pub(crate) mod embedding_classifier;

pub use embedding_classifier::{ClassifierConfig, EmbeddingPoolClassifier};
