use std::path::PathBuf;

use anyhow::Result;

/// Sink for decoded signed documents.
pub trait ReceivedDocumentStore: Send + Sync {
    /// Persists `bytes` for the given agreement and returns where they landed.
    fn save(&self, agreement_id: &str, bytes: &[u8]) -> Result<PathBuf>;
}
