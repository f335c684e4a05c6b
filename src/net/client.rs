//! HTTP client for the painting store backend.
//!
//! DESIGN
//! ======
//! Each operation issues exactly one request against the store: `save` posts
//! the document keyed by the selected user, `load_latest` fetches that user's
//! stored paintings and decodes the first record. The snapshot is serialized
//! before the request is sent, so a save reflects document state at call
//! time, not at response time. A per-client in-flight flag rejects a second
//! save/load while one is outstanding, so rapid repeated clicks cannot race.
//! No retry, no cancellation, no timeout beyond transport defaults.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::consts::{API_URL_ENV, DEFAULT_API_URL};
use crate::doc::DocumentSnapshot;
use crate::net::types::{PaintingRecord, SavePaintingRequest, User};

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// Save/load attempted without a chosen user. No request is issued.
    #[error("no user selected")]
    NoUserSelected,
    /// Non-2xx response or transport failure during save; the two are not
    /// distinguished.
    #[error("save failed: {0}")]
    SaveFailed(String),
    /// Non-2xx response, transport failure, or undecodable body during load.
    #[error("load failed: {0}")]
    LoadFailed(String),
    /// The store holds no painting for this user.
    #[error("no painting found for user {0}")]
    NoPaintingFound(i64),
    /// A save or load is already outstanding on this client.
    #[error("a save or load is already in flight")]
    RequestInFlight,
}

/// Client for the painting store's REST API.
#[derive(Debug)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when an accepted request resolves, success or
/// failure alike.
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl RemoteClient {
    /// Create a client against the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http: reqwest::Client::new(), base_url, in_flight: AtomicBool::new(false) }
    }

    /// Create a client from `EASEL_API_URL`, falling back to the default
    /// store address.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        Self::new(base_url)
    }

    /// The base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn begin_request(&self) -> Result<FlightGuard<'_>, RemoteError> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(RemoteError::RequestInFlight);
        }
        Ok(FlightGuard { flag: &self.in_flight })
    }

    /// Fetch the selectable user roster from `GET /users`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::LoadFailed`] on a non-2xx response, transport
    /// failure, or undecodable body.
    pub async fn fetch_users(&self) -> Result<Vec<User>, RemoteError> {
        let response = self
            .http
            .get(format!("{}/users", self.base_url))
            .send()
            .await
            .map_err(|e| RemoteError::LoadFailed(e.to_string()))?;
        if !response.status().is_success() {
            return Err(RemoteError::LoadFailed(format!("status {}", response.status())));
        }
        response
            .json()
            .await
            .map_err(|e| RemoteError::LoadFailed(e.to_string()))
    }

    /// Save a document snapshot for the selected user via `POST /paintings`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::NoUserSelected`] (before any request) when no
    /// user is chosen, [`RemoteError::RequestInFlight`] while another
    /// save/load is outstanding, and [`RemoteError::SaveFailed`] for every
    /// non-2xx response or transport failure.
    pub async fn save(
        &self,
        user_id: Option<i64>,
        snapshot: &DocumentSnapshot,
    ) -> Result<(), RemoteError> {
        let user_id = user_id.ok_or(RemoteError::NoUserSelected)?;
        let _guard = self.begin_request()?;

        // The store keeps shapes as opaque text: the array is serialized here
        // and embedded as a string field.
        let shapes_data = serde_json::to_string(&snapshot.shapes)
            .map_err(|e| RemoteError::SaveFailed(e.to_string()))?;
        let request =
            SavePaintingRequest { user_id, title: snapshot.name.clone(), shapes_data };

        let response = self
            .http
            .post(format!("{}/paintings", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| RemoteError::SaveFailed(e.to_string()))?;
        if !response.status().is_success() {
            return Err(RemoteError::SaveFailed(format!("status {}", response.status())));
        }
        Ok(())
    }

    /// Fetch the selected user's most recent painting via
    /// `GET /paintings/{userId}` and decode it into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::NoUserSelected`] (before any request) when no
    /// user is chosen, [`RemoteError::RequestInFlight`] while another
    /// save/load is outstanding, [`RemoteError::NoPaintingFound`] when the
    /// store returns an empty list, and [`RemoteError::LoadFailed`] for
    /// non-2xx responses, transport failures, or undecodable bodies.
    pub async fn load_latest(&self, user_id: Option<i64>) -> Result<DocumentSnapshot, RemoteError> {
        let user_id = user_id.ok_or(RemoteError::NoUserSelected)?;
        let _guard = self.begin_request()?;

        let response = self
            .http
            .get(format!("{}/paintings/{user_id}", self.base_url))
            .send()
            .await
            .map_err(|e| RemoteError::LoadFailed(e.to_string()))?;
        if !response.status().is_success() {
            return Err(RemoteError::LoadFailed(format!("status {}", response.status())));
        }

        let records: Vec<PaintingRecord> = response
            .json()
            .await
            .map_err(|e| RemoteError::LoadFailed(e.to_string()))?;
        // First record is assumed most recent; the store keeps one per user.
        let Some(record) = records.into_iter().next() else {
            return Err(RemoteError::NoPaintingFound(user_id));
        };

        // Inverse of the save-side double encoding.
        let shapes = serde_json::from_str(&record.shapes_data)
            .map_err(|e| RemoteError::LoadFailed(e.to_string()))?;
        Ok(DocumentSnapshot { name: record.title, shapes })
    }
}
