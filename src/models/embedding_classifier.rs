//! Embedding-pool classifier.
//!
//! Candle port of the frozen review classifier: an embedding table, mean
//! pooling over the sequence axis, one ReLU hidden layer, and a single
//! sigmoid output unit. The weights are an opaque pre-trained artifact;
//! this module only reconstructs the forward pass.

use crate::error::{PipelineError, Result};
use crate::loaders::{ArtifactSource, CONFIG_FILE, WEIGHTS_FILE};
use crate::pipelines::sentiment::model::SentimentScorer;
use crate::vocab::Vocabulary;
use candle_core::{DType, Device, Module, Tensor};
use candle_nn::{ops::sigmoid, Embedding, Linear, VarBuilder};
use serde::Deserialize;

fn default_max_len() -> usize {
    200
}

/// Classifier hyperparameters, read from `config.json` next to the weights.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Embedding table rows, including the pad and OOV ids.
    pub vocab_size: usize,
    /// Embedding dimension.
    pub embedding_dim: usize,
    /// Hidden layer width.
    pub hidden_dim: usize,
    /// Trained input length; every scored sequence must have exactly this
    /// many ids.
    #[serde(default = "default_max_len")]
    pub max_len: usize,
}

/// A pre-trained binary sentiment classifier over fixed-length id sequences.
///
/// Scores one normalized sequence at a time, returning a probability-like
/// scalar in `[0, 1]`.
#[derive(Debug)]
pub struct EmbeddingPoolClassifier {
    embedding: Embedding,
    dense: Linear,
    output: Linear,
    max_len: usize,
    device: Device,
}

impl EmbeddingPoolClassifier {
    /// Loads config and weights from `source` and builds the network on
    /// `device`.
    pub fn new(source: &ArtifactSource, device: Device) -> Result<Self> {
        let (config, vb) = load_weights(source, &device)?;

        // Weight tensors missing or mismatching the config are a corrupt
        // startup artifact, not a scoring failure.
        let bad_weights =
            |e: candle_core::Error| PipelineError::Artifact(format!("Corrupt classifier weights: {e}"));

        let embedding = candle_nn::embedding(
            config.vocab_size,
            config.embedding_dim,
            vb.pp("embedding"),
        )
        .map_err(bad_weights)?;
        let dense = candle_nn::linear(config.embedding_dim, config.hidden_dim, vb.pp("dense"))
            .map_err(bad_weights)?;
        let output = candle_nn::linear(config.hidden_dim, 1, vb.pp("output")).map_err(bad_weights)?;

        Ok(Self {
            embedding,
            dense,
            output,
            max_len: config.max_len,
            device,
        })
    }

    /// The device the classifier runs on.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// The trained input length.
    pub fn input_len(&self) -> usize {
        self.max_len
    }

    /// Runs the forward pass over one normalized sequence.
    pub fn score(&self, input_ids: &[u32]) -> Result<f32> {
        if input_ids.len() != self.max_len {
            return Err(PipelineError::Unexpected(format!(
                "Classifier expects {} ids, got {}",
                self.max_len,
                input_ids.len()
            )));
        }

        let input = Tensor::new(input_ids, &self.device)?.unsqueeze(0)?;
        let embedded = self.embedding.forward(&input)?; // [1, L, D]
        let pooled = embedded.mean(1)?; // [1, D]
        let hidden = self.dense.forward(&pooled)?.relu()?;
        let logit = self.output.forward(&hidden)?; // [1, 1]
        let score = sigmoid(&logit)?.squeeze(1)?.squeeze(0)?.to_scalar::<f32>()?;

        Ok(score)
    }
}

impl SentimentScorer for EmbeddingPoolClassifier {
    type Options = ArtifactSource;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        EmbeddingPoolClassifier::new(&options, device)
    }

    fn score(&self, input_ids: &[u32]) -> Result<f32> {
        self.score(input_ids)
    }

    fn input_len(&self) -> usize {
        self.input_len()
    }

    fn get_vocabulary(options: Self::Options) -> Result<Vocabulary> {
        crate::loaders::load_vocabulary(&options)
    }

    fn device(&self) -> &Device {
        self.device()
    }
}

fn load_weights(
    source: &ArtifactSource,
    device: &Device,
) -> Result<(ClassifierConfig, VarBuilder<'static>)> {
    let config_path = source.locate(CONFIG_FILE)?;
    let weights_path = source.locate(WEIGHTS_FILE)?;

    let config: ClassifierConfig = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;

    let vb = unsafe {
        VarBuilder::from_mmaped_safetensors(&[&weights_path], DType::F32, device).map_err(|e| {
            PipelineError::Artifact(format!(
                "Failed to load classifier weights from '{}': {e}",
                weights_path.display()
            ))
        })?
    };

    Ok((config, vb))
}
