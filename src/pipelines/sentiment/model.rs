use crate::error::Result;
use crate::vocab::Vocabulary;

/// The seam between the pipeline and an opaque pre-trained classifier.
///
/// Implementations score one normalized id sequence at a time and report
/// the fixed input length they were trained with. The pipeline guarantees
/// every sequence handed to [`score`](Self::score) has exactly
/// [`input_len`](Self::input_len) elements.
pub trait SentimentScorer {
    /// Options identifying the artifacts to load (e.g. an
    /// [`ArtifactSource`](crate::loaders::ArtifactSource)).
    type Options: std::fmt::Debug + Clone;

    /// Loads the classifier artifacts and builds the scorer on `device`.
    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Scores one normalized sequence, returning a scalar in `[0, 1]`.
    ///
    /// Invoked exactly once per request, synchronously; failures are
    /// surfaced to the caller without retry or fallback.
    fn score(&self, input_ids: &[u32]) -> Result<f32>;

    /// The fixed sequence length the classifier was trained with.
    fn input_len(&self) -> usize;

    /// Loads the vocabulary that matches the classifier artifacts.
    fn get_vocabulary(options: Self::Options) -> Result<Vocabulary>;

    /// The device the scorer runs on.
    fn device(&self) -> &candle_core::Device;
}
