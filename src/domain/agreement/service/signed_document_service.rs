use anyhow::{Context, Result};
use base64::prelude::*;

/// Decodes a base64 document from a webhook payload.
///
/// Standard alphabet with padding. ASCII whitespace is dropped first since
/// some encoders wrap long payloads.
pub fn decode_document(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    BASE64_STANDARD
        .decode(compact.as_bytes())
        .context("signedDocumentInfo.document is not valid base64")
}

/// Detects the file type from magic bytes, ignoring any file name.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    infer::get(bytes).map(|kind| kind.mime_type())
}
