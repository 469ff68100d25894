use super::model::SentimentScorer;
use super::pipeline::{ReviewSentimentPipeline, DEFAULT_THRESHOLD};
use crate::error::Result;
use crate::loaders::ArtifactSource;
use crate::models::EmbeddingPoolClassifier;
use crate::pipelines::utils::DeviceRequest;

/// Builder for creating [`ReviewSentimentPipeline`] instances.
///
/// Loads both startup artifacts (classifier weights and vocabulary)
/// exactly once in [`build`](Self::build); the finished pipeline owns them
/// for the rest of the process lifetime.
///
/// Use [`Self::embedding_classifier`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use review_sentiment::sentiment::{ArtifactSource, SentimentPipelineBuilder};
/// # fn main() -> review_sentiment::error::Result<()> {
/// let pipeline =
///     SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir("artifacts"))
///         .cpu()
///         .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SentimentPipelineBuilder<M: SentimentScorer> {
    options: M::Options,
    device_request: DeviceRequest,
    threshold: f32,
}

impl<M: SentimentScorer> SentimentPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self {
            options,
            device_request: DeviceRequest::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Use CPU for inference (default).
    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    /// Use a specific CUDA GPU for inference.
    pub fn cuda(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    /// Override the decision threshold (default 0.5). The boundary stays
    /// inclusive on the positive side.
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builds the pipeline with configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if either artifact is missing or corrupt, or if
    /// device initialization fails. Both conditions are fatal: a pipeline
    /// is never constructed with partial artifacts.
    pub fn build(self) -> Result<ReviewSentimentPipeline<M>> {
        let device = self.device_request.resolve()?;
        let vocabulary = M::get_vocabulary(self.options.clone())?;
        let model = M::new(self.options, device)?;

        Ok(ReviewSentimentPipeline::with_threshold(
            model,
            vocabulary,
            self.threshold,
        ))
    }
}

impl SentimentPipelineBuilder<EmbeddingPoolClassifier> {
    /// Creates a builder for the embedding-pool review classifier, loading
    /// its artifacts from `source`.
    pub fn embedding_classifier(source: ArtifactSource) -> Self {
        Self::new(source)
    }
}
