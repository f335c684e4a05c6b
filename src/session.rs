//! Host-facing session facade.
//!
//! Owns everything the rendering surface binds its controls to: the live
//! painting document, the selectable user roster, and the current user
//! selection. The host translates pointer/drag events and button clicks into
//! calls on [`Session`]; it never mutates the document directly. Keeping this
//! layer free of browser types means the whole flow is testable headless.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::doc::{DocumentError, PaintingDocument, PlacedShape, ShapeId, ShapeKind};
use crate::file::{self, FilePayload};
use crate::net::client::{RemoteClient, RemoteError};
use crate::net::types::User;

/// One editing session: a document, the user roster, and the selected user.
#[derive(Debug)]
pub struct Session {
    /// The live painting document.
    pub doc: PaintingDocument,
    /// Read-only user roster fetched once at startup.
    pub users: Vec<User>,
    /// Currently selected user id, if any. Remote save/load is keyed by it.
    pub selected_user: Option<i64>,
    remote: RemoteClient,
}

impl Session {
    /// Start a session with an empty document against the given client.
    #[must_use]
    pub fn new(remote: RemoteClient) -> Self {
        Self {
            doc: PaintingDocument::new(),
            users: Vec::new(),
            selected_user: None,
            remote,
        }
    }

    /// Fetch the user roster once at startup. Failure is logged and leaves
    /// the roster empty; nothing is surfaced to the user.
    pub async fn load_users(&mut self) {
        match self.remote.fetch_users().await {
            Ok(users) => self.users = users,
            Err(e) => tracing::error!(error = %e, "user roster fetch failed"),
        }
    }

    /// Select the user that remote saves and loads are keyed by.
    pub fn select_user(&mut self, user_id: i64) {
        self.selected_user = Some(user_id);
    }

    // --- Document handlers ---

    /// Drop handler: place a shape at the drop location.
    pub fn add_shape_at(&mut self, kind: ShapeKind, x: f64, y: f64) -> PlacedShape {
        self.doc.add_shape(kind, x, y)
    }

    /// Remove a placed shape, returning it if it was present.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<PlacedShape> {
        self.doc.remove_shape(id)
    }

    /// Rename the painting.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.doc.rename(name);
    }

    // --- Persistence handlers ---

    /// Build the downloadable export payload for the current document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MalformedJson`] if serialization fails (plain
    /// data, so not in practice).
    pub fn export(&self) -> Result<FilePayload, DocumentError> {
        file::export_payload(&self.doc)
    }

    /// Replace the document wholesale from imported file text.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] when the text is not valid JSON or lacks
    /// required fields; the current document is left untouched.
    pub fn import(&mut self, raw: &str) -> Result<(), DocumentError> {
        let value = file::import_payload(raw)?;
        self.doc.replace_from(value)
    }

    /// Save the current document for the selected user.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] when no user is selected, another request is
    /// in flight, or the store rejects the save.
    pub async fn save_to_backend(&self) -> Result<(), RemoteError> {
        self.remote.save(self.selected_user, &self.doc.snapshot()).await
    }

    /// Load the selected user's latest painting, replacing the document.
    /// The document only mutates after a confirmed successful response.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] when no user is selected, another request is
    /// in flight, the store has no painting for the user, or the load fails.
    pub async fn load_from_backend(&mut self) -> Result<(), RemoteError> {
        let snapshot = self.remote.load_latest(self.selected_user).await?;
        self.doc.restore(snapshot);
        Ok(())
    }
}
