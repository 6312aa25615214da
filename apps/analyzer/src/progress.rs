//! Progress reporting seam between the pipeline and the external task runner.
//!
//! The pipeline reports four fixed checkpoints; the runner owns surfacing
//! them to a polling client.

/// Checkpoint percentages and the stage messages reported at each.
pub const CHECKPOINTS: [(u8, &str); 4] = [
    (10, "Starting analysis..."),
    (30, "Extracting text..."),
    (80, "Finalizing analysis..."),
    (100, "Analysis complete!"),
];

/// Receives progress checkpoints during an analysis run. Implemented by the
/// task runner; the pipeline only calls `report`.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8, message: &str);
}

/// Sink that drops all checkpoints. Used when no runner is attached.
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn report(&self, _percent: u8, _message: &str) {}
}

/// Sink that forwards checkpoints to the tracing log. The CLI driver uses
/// this in place of a real job tracker.
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&self, percent: u8, message: &str) {
        tracing::info!(percent, "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Sink that records every checkpoint, for orchestrator tests.
    pub struct CollectingProgress(pub Mutex<Vec<(u8, String)>>);

    impl ProgressSink for CollectingProgress {
        fn report(&self, percent: u8, message: &str) {
            self.0
                .lock()
                .unwrap()
                .push((percent, message.to_string()));
        }
    }

    #[test]
    fn test_checkpoints_are_ordered_and_end_at_100() {
        let percents: Vec<u8> = CHECKPOINTS.iter().map(|(p, _)| *p).collect();
        assert_eq!(percents, vec![10, 30, 80, 100]);
    }

    #[test]
    fn test_collecting_sink_records_reports() {
        let sink = CollectingProgress(Mutex::new(Vec::new()));
        sink.report(10, "Starting analysis...");
        sink.report(100, "Analysis complete!");
        let seen = sink.0.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (10, "Starting analysis...".to_string()));
    }
}
