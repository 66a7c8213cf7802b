//! # Sync pipeline
//!
//! Load → Compile → Replay. A document that fails to compile never reaches
//! the sink. Clearing the target beforehand and recovering from a sink that
//! fails midway are left to the caller.

use crate::compiler::{compile_document, CompileStats};
use crate::error::CompileError;
use crate::options::CompileOptions;
use crate::sink::ReplaySink;
use docsync_model::{DocumentSource, ModelError};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to load document: {0}")]
    Load(#[from] ModelError),

    #[error("Failed to compile document: {0}")]
    Compile(#[from] CompileError),

    #[error("Failed to replay requests: {0}")]
    Replay(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub requests_sent: usize,
    /// Body index just past the replayed content
    pub end_index: usize,
    pub stats: CompileStats,
}

/// Compile the document `source` provides and replay it into `sink`
///
/// An empty request list is not sent.
#[instrument(skip_all)]
pub fn sync<S, K>(source: &S, sink: &mut K, options: &CompileOptions) -> Result<SyncReport, SyncError>
where
    S: DocumentSource + ?Sized,
    K: ReplaySink + ?Sized,
{
    let document = source.load()?;
    let compilation = compile_document(&document, options)?;

    let report = SyncReport {
        requests_sent: compilation.requests.len(),
        end_index: compilation.end_index,
        stats: compilation.stats,
    };

    let batch = compilation.into_batch();
    if !batch.is_empty() {
        sink.apply(&batch)
            .map_err(|err| SyncError::Replay(Box::new(err)))?;
    }

    info!(requests = report.requests_sent, "Replayed document");

    Ok(report)
}
