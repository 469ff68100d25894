//! Movie review sentiment classification, powered by [Candle](https://github.com/huggingface/candle).
//!
//! Feed a review in, get a `Positive`/`Negative` label and a confidence
//! score back. The heavy lifting is two pre-trained startup artifacts (a
//! classifier and its vocabulary); this crate provides the encoding
//! pipeline around them: tokenize, normalize to a fixed length, score,
//! threshold.

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod loaders;
pub(crate) mod models;
pub(crate) mod normalize;
pub(crate) mod pipelines;
pub(crate) mod vocab;

// ============ Public API ============

pub mod error;

pub use pipelines::sentiment;
