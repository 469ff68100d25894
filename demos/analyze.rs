use review_sentiment::error::Result;
use review_sentiment::sentiment::{ArtifactSource, SentimentPipelineBuilder};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let artifacts = args.next().unwrap_or_else(|| "artifacts".to_string());
    let review = args.collect::<Vec<_>>().join(" ");

    // Caller-side validation: the pipeline is never invoked for empty input.
    if review.trim().is_empty() {
        eprintln!("Usage: analyze <artifacts-dir> <review text>");
        eprintln!("Please enter some review text!");
        std::process::exit(1);
    }

    println!("Building pipeline...");

    let pipeline =
        SentimentPipelineBuilder::embedding_classifier(ArtifactSource::dir(&artifacts)).build()?;

    let output = pipeline.predict(&review)?;

    println!("\n=== Prediction Result ===");
    println!("Review: \"{review}\"");
    println!("Sentiment: {}", output.prediction.sentiment);
    println!("Confidence Score: {:.4}", output.prediction.score);
    println!(
        "Completed in {:.2}ms ({} tokens)",
        output.stats.total_time.as_secs_f64() * 1000.0,
        output.stats.input_tokens
    );

    Ok(())
}
