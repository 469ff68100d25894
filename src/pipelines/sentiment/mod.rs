//! Movie review sentiment pipeline.
//!
//! Classify a single review as `Positive` or `Negative`, returning both the
//! discrete label and the classifier's raw confidence score.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use review_sentiment::sentiment::{ArtifactSource, SentimentPipelineBuilder};
//!
//! # fn main() -> review_sentiment::error::Result<()> {
//! let pipeline =
//!     SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir("artifacts")).build()?;
//!
//! let output = pipeline.predict("An instant classic. Loved every minute.")?;
//! println!(
//!     "Sentiment: {} (confidence: {:.4})",
//!     output.prediction.sentiment, output.prediction.score
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Artifacts
//!
//! The pipeline needs two pre-built artifacts, loaded once at build time
//! and immutable afterwards:
//!
//! | Artifact | File | Loaded with |
//! |----------|------|-------------|
//! | Classifier | `model.safetensors` + `config.json` | Candle |
//! | Vocabulary | `tokenizer.json` or `vocabulary.json` | `tokenizers` / serde |
//!
//! Both can live in a local directory ([`ArtifactSource::dir`]) or a
//! Hugging Face Hub repository ([`ArtifactSource::hf_hub`]).

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::loaders::ArtifactSource;
pub use crate::normalize::{pad_to_length, PAD_ID};
pub use crate::pipelines::stats::PipelineStats;
pub use crate::vocab::Vocabulary;
pub use builder::SentimentPipelineBuilder;
pub use model::SentimentScorer;
pub use pipeline::{Output, Prediction, ReviewSentimentPipeline, Sentiment, DEFAULT_THRESHOLD};

/// Only for generic annotations. Use
/// [`SentimentPipelineBuilder::embedding_classifier`].
pub type EmbeddingClassifier = crate::models::EmbeddingPoolClassifier;
