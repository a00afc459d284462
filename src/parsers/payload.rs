use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ConversationDocument;

/// Read and decode a conversation payload file.
///
/// Returns an error for a missing/unreadable file or malformed JSON; in
/// both cases the error chain starts with `Error reading JSON` so the
/// binary's single-line report names the underlying cause.
pub fn load_payload(path: &Path) -> Result<ConversationDocument> {
    let raw = fs::read_to_string(path).context("Error reading JSON")?;
    serde_json::from_str(&raw).context("Error reading JSON")
}
