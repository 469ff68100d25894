//! End-to-end tests over on-disk artifacts.
//!
//! Builds a real (tiny) classifier artifact set in a temp directory and
//! runs the full pipeline on CPU: vocabulary load, encoding,
//! normalization, Candle forward pass, decision threshold.

use candle_core::{Device, Tensor};
use review_sentiment::error::{PipelineError, Result};
use review_sentiment::sentiment::{ArtifactSource, Sentiment, SentimentPipelineBuilder};
use std::collections::HashMap;
use std::path::Path;

const MAX_LEN: usize = 16;
const VOCAB_SIZE: usize = 8;
const EMBEDDING_DIM: usize = 4;
const HIDDEN_DIM: usize = 3;

/// Writes a complete artifact directory whose classifier is analytically
/// predictable: the embedding table is all zeros, so every input pools to
/// the zero vector and the network outputs `sigmoid(output_bias)`.
fn write_artifacts(dir: &Path, output_bias: f32) -> Result<()> {
    let device = Device::Cpu;

    let tensors = HashMap::from([
        (
            "embedding.weight".to_string(),
            Tensor::zeros((VOCAB_SIZE, EMBEDDING_DIM), candle_core::DType::F32, &device)?,
        ),
        (
            "dense.weight".to_string(),
            Tensor::zeros((HIDDEN_DIM, EMBEDDING_DIM), candle_core::DType::F32, &device)?,
        ),
        (
            "dense.bias".to_string(),
            Tensor::zeros(HIDDEN_DIM, candle_core::DType::F32, &device)?,
        ),
        (
            "output.weight".to_string(),
            Tensor::zeros((1, HIDDEN_DIM), candle_core::DType::F32, &device)?,
        ),
        (
            "output.bias".to_string(),
            Tensor::new(&[output_bias], &device)?,
        ),
    ]);
    candle_core::safetensors::save(&tensors, dir.join("model.safetensors"))?;

    std::fs::write(
        dir.join("config.json"),
        format!(
            r#"{{"vocab_size": {VOCAB_SIZE}, "embedding_dim": {EMBEDDING_DIM}, "hidden_dim": {HIDDEN_DIM}, "max_len": {MAX_LEN}}}"#
        ),
    )
    .map_err(|e| PipelineError::Artifact(e.to_string()))?;

    std::fs::write(
        dir.join("vocabulary.json"),
        r#"{"word_index": {"<OOV>": 1, "great": 2, "movie": 3, "terrible": 4}, "oov_token": "<OOV>"}"#,
    )
    .map_err(|e| PipelineError::Artifact(e.to_string()))?;

    Ok(())
}

#[test]
fn predicts_from_on_disk_artifacts() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| PipelineError::Artifact(e.to_string()))?;
    // sigmoid(2) ~ 0.88
    write_artifacts(dir.path(), 2.0)?;

    let pipeline =
        SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path()))
            .cpu()
            .build()?;

    let output = pipeline.predict("a great movie")?;
    assert_eq!(output.prediction.sentiment, Sentiment::Positive);
    assert!((output.prediction.score - 0.8808).abs() < 1e-3);
    assert_eq!(output.stats.input_tokens, 3);
    Ok(())
}

#[test]
fn negative_score_below_threshold() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| PipelineError::Artifact(e.to_string()))?;
    // sigmoid(-2) ~ 0.12
    write_artifacts(dir.path(), -2.0)?;

    let pipeline =
        SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path())).build()?;

    let output = pipeline.predict("terrible movie")?;
    assert_eq!(output.prediction.sentiment, Sentiment::Negative);
    assert!(output.prediction.score < 0.5);
    Ok(())
}

#[test]
fn score_exactly_at_threshold_is_positive() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| PipelineError::Artifact(e.to_string()))?;
    // sigmoid(0) = 0.5 exactly
    write_artifacts(dir.path(), 0.0)?;

    let pipeline =
        SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path())).build()?;

    let output = pipeline.predict("great movie")?;
    assert!((output.prediction.score - 0.5).abs() < 1e-6);
    assert_eq!(output.prediction.sentiment, Sentiment::Positive);
    Ok(())
}

#[test]
fn review_longer_than_max_len_is_scored() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| PipelineError::Artifact(e.to_string()))?;
    write_artifacts(dir.path(), 1.0)?;

    let pipeline =
        SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path())).build()?;

    // 50 tokens against a trained length of 16: post-truncation applies.
    let review = "great movie ".repeat(25);
    let output = pipeline.predict(&review)?;
    assert!(output.prediction.score > 0.5);
    assert_eq!(output.stats.input_tokens, 50);
    Ok(())
}

#[test]
fn unknown_words_do_not_fail_the_request() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| PipelineError::Artifact(e.to_string()))?;
    write_artifacts(dir.path(), 1.0)?;

    let pipeline =
        SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path())).build()?;

    let output = pipeline.predict("unquestionably spellbinding cinematography")?;
    assert!(output.prediction.score >= 0.0 && output.prediction.score <= 1.0);
    Ok(())
}

#[test]
fn empty_review_never_reaches_the_classifier() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| PipelineError::Artifact(e.to_string()))?;
    write_artifacts(dir.path(), 0.0)?;

    let pipeline =
        SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path())).build()?;

    let err = pipeline.predict("   ").unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));
    Ok(())
}

#[test]
fn missing_artifacts_fail_at_build_time() {
    let dir = tempfile::tempdir().unwrap();

    let err = SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path()))
        .build()
        .unwrap_err();
    assert!(matches!(err, PipelineError::Artifact(_)));
}

#[test]
fn corrupt_weights_fail_at_build_time() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| PipelineError::Artifact(e.to_string()))?;
    write_artifacts(dir.path(), 0.0)?;
    std::fs::write(dir.path().join("model.safetensors"), b"not a safetensors file")
        .map_err(|e| PipelineError::Artifact(e.to_string()))?;

    let err = SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path()))
        .build()
        .unwrap_err();
    assert!(matches!(err, PipelineError::Artifact(_)));
    Ok(())
}

#[test]
fn weights_mismatching_config_fail_at_build_time() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| PipelineError::Artifact(e.to_string()))?;
    write_artifacts(dir.path(), 0.0)?;
    // Claim a wider embedding than the saved tensors actually have.
    std::fs::write(
        dir.path().join("config.json"),
        format!(
            r#"{{"vocab_size": {VOCAB_SIZE}, "embedding_dim": 64, "hidden_dim": {HIDDEN_DIM}, "max_len": {MAX_LEN}}}"#
        ),
    )
    .map_err(|e| PipelineError::Artifact(e.to_string()))?;

    let err = SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path()))
        .build()
        .unwrap_err();
    assert!(matches!(err, PipelineError::Artifact(_)));
    Ok(())
}

#[test]
fn corrupt_config_fails_at_build_time() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| PipelineError::Artifact(e.to_string()))?;
    write_artifacts(dir.path(), 0.0)?;
    std::fs::write(dir.path().join("config.json"), "not json")
        .map_err(|e| PipelineError::Artifact(e.to_string()))?;

    let err = SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(dir.path()))
        .build()
        .unwrap_err();
    assert!(matches!(err, PipelineError::Artifact(_)));
    Ok(())
}
