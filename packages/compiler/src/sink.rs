use crate::request::BatchUpdate;
use std::convert::Infallible;

/// Applies compiled requests to a target document
///
/// Implementations replay `batch.requests` in the given order. Whether a
/// batch is applied atomically is up to the implementation.
pub trait ReplaySink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn apply(&mut self, batch: &BatchUpdate) -> Result<(), Self::Error>;
}

/// Sink that keeps every batch it receives, for testing
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub batches: Vec<BatchUpdate>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of requests received across all batches
    pub fn request_count(&self) -> usize {
        self.batches.iter().map(BatchUpdate::len).sum()
    }
}

impl ReplaySink for RecordingSink {
    type Error = Infallible;

    fn apply(&mut self, batch: &BatchUpdate) -> Result<(), Self::Error> {
        self.batches.push(batch.clone());
        Ok(())
    }
}
