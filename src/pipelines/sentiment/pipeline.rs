use super::model::SentimentScorer;
use crate::error::{PipelineError, Result};
use crate::normalize;
use crate::pipelines::stats::PipelineStats;
use crate::vocab::Vocabulary;

/// Default decision threshold applied to the classifier's scalar output.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

// ============ Output types ============

/// Discrete sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    /// Score at or above the threshold.
    Positive,
    /// Score below the threshold.
    Negative,
}

impl Sentiment {
    /// Applies the decision threshold to a score. The boundary is
    /// inclusive on the positive side: a score exactly at the threshold is
    /// `Positive`.
    pub fn from_score(score: f32, threshold: f32) -> Self {
        if score >= threshold {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        };
        write!(f, "{name}")
    }
}

/// A sentiment prediction with label and confidence score.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// The predicted sentiment.
    pub sentiment: Sentiment,
    /// The classifier's raw score (0.0 to 1.0).
    pub score: f32,
}

/// Output from [`ReviewSentimentPipeline::predict`].
#[derive(Debug)]
pub struct Output {
    /// Sentiment prediction.
    pub prediction: Prediction,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Pipeline ============

/// Classifies a single movie review as positive or negative.
///
/// Holds the two startup artifacts (classifier and vocabulary) for the
/// lifetime of the process; `predict` is a stateless single-pass
/// computation over them, so a pipeline can be shared across threads as
/// long as the scorer is safe for concurrent read-only invocation.
///
/// Construct with [`SentimentPipelineBuilder`](super::SentimentPipelineBuilder),
/// or with [`Self::new`] when the artifacts are already loaded.
///
/// # Examples
///
/// ```rust,no_run
/// use review_sentiment::sentiment::{ArtifactSource, SentimentPipelineBuilder};
///
/// # fn main() -> review_sentiment::error::Result<()> {
/// let pipeline =
///     SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir("artifacts")).build()?;
///
/// let output = pipeline.predict("A moving, beautifully shot film.")?;
/// println!(
///     "{} (confidence: {:.4})",
///     output.prediction.sentiment, output.prediction.score
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReviewSentimentPipeline<M: SentimentScorer> {
    pub(crate) model: M,
    pub(crate) vocabulary: Vocabulary,
    pub(crate) threshold: f32,
}

impl<M: SentimentScorer> ReviewSentimentPipeline<M> {
    /// Builds a pipeline from already-loaded artifacts with the default
    /// threshold.
    pub fn new(model: M, vocabulary: Vocabulary) -> Self {
        Self {
            model,
            vocabulary,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Builds a pipeline from already-loaded artifacts with a custom
    /// decision threshold.
    pub fn with_threshold(model: M, vocabulary: Vocabulary, threshold: f32) -> Self {
        Self {
            model,
            vocabulary,
            threshold,
        }
    }

    /// Classifies one review.
    ///
    /// Empty or whitespace-only input is rejected with
    /// [`PipelineError::InvalidInput`] before any scoring happens.
    /// Otherwise the text is encoded, normalized to the classifier's fixed
    /// input length, scored exactly once, and thresholded.
    pub fn predict(&self, review: &str) -> Result<Output> {
        let stats_builder = PipelineStats::start();

        if review.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "Review text is empty; nothing to classify".to_string(),
            ));
        }

        let token_ids = self.vocabulary.encode(review);
        let input = normalize::pad_to_length(&token_ids, self.model.input_len());
        let score = self.model.score(&input)?;

        let prediction = Prediction {
            sentiment: Sentiment::from_score(score, self.threshold),
            score,
        };

        Ok(Output {
            prediction,
            stats: stats_builder.finish(token_ids.len()),
        })
    }

    /// The decision threshold in effect.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns the device (CPU/GPU) the classifier is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}
