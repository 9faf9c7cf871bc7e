use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::DocumentTarget;

use super::received_document_store_trait::ReceivedDocumentStore;

const MAX_ID_CHARS: usize = 64;

/// FS adapter for received signed documents.
///
/// In `Fixed` mode every document overwrites the same file. Concurrent
/// writers are not serialized, so the last rename wins; the temp-file swap
/// only guarantees the file is never observed half-written.
pub struct ReceivedDocumentFsAdapter {
    target: DocumentTarget,
}

impl ReceivedDocumentFsAdapter {
    pub fn new(target: DocumentTarget) -> Self {
        Self { target }
    }

    fn destination(&self, agreement_id: &str) -> PathBuf {
        match &self.target {
            DocumentTarget::Fixed(path) => path.clone(),
            DocumentTarget::UniqueIn(dir) => dir.join(format!(
                "{}_{}_{}.pdf",
                sanitize_id(agreement_id),
                Utc::now().format("%Y%m%dT%H%M%S%.3fZ"),
                Uuid::new_v4().simple()
            )),
        }
    }
}

impl ReceivedDocumentStore for ReceivedDocumentFsAdapter {
    fn save(&self, agreement_id: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.destination(agreement_id);
        write_atomic(&path, bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "Stored received document");
        Ok(path)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = parent_dir(path);
    fs::create_dir_all(&dir).context("Failed to create document directory")?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let tmp_path = dir.join(format!(".{}.{}.tmp", file_name, Uuid::new_v4().simple()));

    let result = (|| -> Result<()> {
        let mut f = File::create(&tmp_path).context("Failed to create temp document file")?;
        f.write_all(bytes).context("Failed to write document bytes")?;
        f.flush()?;
        f.sync_all().context("Failed to sync temp document file")?;
        fs::rename(&tmp_path, path).context("Failed to finalize document file")?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result?;

    #[cfg(unix)]
    {
        let dir_file = File::open(&dir).context("Failed to open document directory")?;
        dir_file.sync_all().context("Failed to sync document directory")?;
    }

    Ok(())
}

/// Restricts an agreement id to characters that are safe in a file name.
fn sanitize_id(agreement_id: &str) -> String {
    let cleaned: String = agreement_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_ID_CHARS)
        .collect();

    if cleaned.is_empty() {
        "agreement".to_string()
    } else {
        cleaned
    }
}
