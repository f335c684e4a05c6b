//! Document model: shape kinds, placed shapes, and the painting document.
//!
//! This module defines the data types that describe what is on the canvas
//! (`PlacedShape`, `ShapeKind`), the plain-data transport form used for file
//! and network exchange (`DocumentSnapshot`), and the aggregate that owns the
//! live composition (`PaintingDocument`).
//!
//! Data flows into this layer from the host UI (drop events become
//! `add_shape` calls) and from the persistence adapters (imports and backend
//! loads become whole-document replacement). The host reads `shapes` in
//! insertion order to determine draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DEFAULT_PAINTING_NAME;

/// Unique identifier for a placed shape.
pub type ShapeId = Uuid;

/// The kind of a placed shape. Closed set; the palette offers exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Circle centered on its drop point.
    Circle,
    /// Axis-aligned square.
    Square,
    /// Upward-pointing triangle.
    Triangle,
}

impl ShapeKind {
    /// Every placeable kind, in palette order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];
}

/// One shape instance on the canvas, as stored in the document and on the
/// wire. `id` is assigned at creation and never reused; `kind`, `x`, and `y`
/// are fixed at placement (there is no move or resize operation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedShape {
    /// Unique identifier for this shape within its document.
    pub id: ShapeId,
    /// Which primitive this is.
    pub kind: ShapeKind,
    /// Pixels right of the canvas origin at drop time.
    pub x: f64,
    /// Pixels below the canvas origin at drop time.
    pub y: f64,
}

/// Plain-data transport form of a document: exactly what gets written to an
/// exported file and what a backend load decodes into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Human-readable painting name.
    pub name: String,
    /// Placed shapes in insertion (= draw) order.
    pub shapes: Vec<PlacedShape>,
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Input was not valid JSON, or a field failed best-effort typed parsing.
    #[error("malformed document: {0}")]
    MalformedJson(#[from] serde_json::Error),
    /// Input parsed as JSON but lacks a required top-level field.
    #[error("malformed document: missing `{0}`")]
    MissingField(&'static str),
}

/// The named, ordered collection of placed shapes representing one artwork.
///
/// Lives for the whole session: created empty with the default name, mutated
/// by add/remove/rename, and replaced wholesale by import or backend load.
#[derive(Debug, Clone)]
pub struct PaintingDocument {
    name: String,
    shapes: Vec<PlacedShape>,
}

impl PaintingDocument {
    /// Create an empty document with the default name.
    #[must_use]
    pub fn new() -> Self {
        Self { name: DEFAULT_PAINTING_NAME.to_owned(), shapes: Vec::new() }
    }

    /// Place a new shape at the given canvas coordinates and return it.
    ///
    /// Coordinates are unconstrained; off-canvas values simply render
    /// off-view. The returned shape carries its freshly generated id.
    pub fn add_shape(&mut self, kind: ShapeKind, x: f64, y: f64) -> PlacedShape {
        let shape = PlacedShape { id: Uuid::new_v4(), kind, x, y };
        self.shapes.push(shape.clone());
        shape
    }

    /// Remove the shape with the given id, returning it if it was present.
    /// Removing an absent id is a no-op, not an error.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<PlacedShape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    /// Replace the painting name. The empty string is accepted.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }

    /// Per-kind shape counts. Every kind in [`ShapeKind::ALL`] is present,
    /// with value 0 for kinds not currently placed.
    #[must_use]
    pub fn count_by_kind(&self) -> HashMap<ShapeKind, usize> {
        let mut counts: HashMap<ShapeKind, usize> =
            ShapeKind::ALL.iter().map(|kind| (*kind, 0)).collect();
        for shape in &self.shapes {
            *counts.entry(shape.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Project the document into its transport form. Pure; no mutation.
    #[must_use]
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot { name: self.name.clone(), shapes: self.shapes.clone() }
    }

    /// Replace name and shapes from an already-decoded snapshot.
    pub fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.name = snapshot.name;
        self.shapes = snapshot.shapes;
    }

    /// Replace the whole document from an untrusted transport-form value.
    ///
    /// Both `name` and `shapes` must be present and well-typed; shape ids are
    /// taken verbatim from the input. On failure the document is left
    /// completely unchanged — the replacement is atomic.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingField`] when `name` or `shapes` is
    /// absent, and [`DocumentError::MalformedJson`] when the value fails
    /// typed parsing.
    pub fn replace_from(&mut self, value: serde_json::Value) -> Result<(), DocumentError> {
        if value.get("name").is_none() {
            return Err(DocumentError::MissingField("name"));
        }
        if value.get("shapes").is_none() {
            return Err(DocumentError::MissingField("shapes"));
        }
        let snapshot: DocumentSnapshot = serde_json::from_value(value)?;
        self.restore(snapshot);
        Ok(())
    }

    /// The painting name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placed shapes in insertion (= draw) order.
    #[must_use]
    pub fn shapes(&self) -> &[PlacedShape] {
        &self.shapes
    }

    /// Number of shapes currently placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if no shapes are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for PaintingDocument {
    fn default() -> Self {
        Self::new()
    }
}
