//! Export/import of the downloadable painting file.
//!
//! Pure translators between a [`PaintingDocument`] and the `.json` artifact
//! the host offers for download (or receives from a file picker). The actual
//! browser download / file-read side effects belong to the host; this layer
//! only produces and consumes the payload text.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use crate::doc::{DocumentError, PaintingDocument};

/// A downloadable artifact: suggested file name plus file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    /// Suggested download name, `<painting name>.json`.
    pub file_name: String,
    /// Pretty-printed JSON transport form of the document.
    pub contents: String,
}

/// Serialize a document into its downloadable payload.
///
/// # Errors
///
/// Returns [`DocumentError::MalformedJson`] if the snapshot cannot be
/// serialized. The snapshot is plain data, so this does not happen in
/// practice.
pub fn export_payload(doc: &PaintingDocument) -> Result<FilePayload, DocumentError> {
    let contents = serde_json::to_string_pretty(&doc.snapshot())?;
    Ok(FilePayload { file_name: format!("{}.json", doc.name()), contents })
}

/// Parse raw file text into a transport-form value.
///
/// Field validation is delegated to [`PaintingDocument::replace_from`]; on
/// any failure the caller must leave its current document untouched.
///
/// # Errors
///
/// Returns [`DocumentError::MalformedJson`] when the text is not valid JSON.
pub fn import_payload(raw: &str) -> Result<serde_json::Value, DocumentError> {
    Ok(serde_json::from_str(raw)?)
}
