//! Wire types shared with the painting store backend.
//!
//! All of these are camelCase on the wire, matching the store's JSON schema.

use serde::{Deserialize, Serialize};

/// A selectable user, as returned by `GET /users`. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
}

/// Body of `POST /paintings`.
///
/// `shapes_data` carries the shapes array re-encoded as a JSON string — the
/// store persists it as opaque text, so the double encoding is part of the
/// wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePaintingRequest {
    pub user_id: i64,
    pub title: String,
    pub shapes_data: String,
}

/// One stored painting, as returned by `GET /paintings/{userId}`.
///
/// The store returns more fields (record id, owner, timestamps); only these
/// two are consumed, the rest are ignored at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintingRecord {
    pub title: String,
    pub shapes_data: String,
}
