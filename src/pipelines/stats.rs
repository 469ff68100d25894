//! Execution statistics reported alongside each prediction.

use std::time::{Duration, Instant};

/// Statistics for one pipeline invocation.
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Total execution time, including encoding and scoring.
    pub total_time: Duration,
    /// Number of vocabulary tokens found in the input, before padding or
    /// truncation.
    pub input_tokens: usize,
}

impl PipelineStats {
    /// Create a new stats tracker (call at start of operation).
    pub(crate) fn start() -> PipelineStatsBuilder {
        PipelineStatsBuilder {
            start_time: Instant::now(),
        }
    }
}

/// Builder for [`PipelineStats`] - tracks timing from creation to finalize.
pub(crate) struct PipelineStatsBuilder {
    start_time: Instant,
}

impl PipelineStatsBuilder {
    /// Finalize stats with the number of input tokens seen.
    pub fn finish(self, input_tokens: usize) -> PipelineStats {
        PipelineStats {
            total_time: self.start_time.elapsed(),
            input_tokens,
        }
    }
}
