//! Shared constants for the easel crate.

/// Name a freshly created painting starts with, before the user renames it.
pub const DEFAULT_PAINTING_NAME: &str = "Untitled Painting";

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "EASEL_API_URL";

/// Backend base URL used when [`API_URL_ENV`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:9090";
