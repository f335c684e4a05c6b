//! Painting document core for the easel drawing tool.
//!
//! This crate owns everything below the rendering surface: the in-memory
//! painting document (placed shapes plus a display name), its file transport
//! form, and the client that syncs paintings to the backend store. The host
//! UI layer is responsible only for wiring pointer/drag events to
//! [`session::Session`] and presenting the resulting state; it performs no
//! document mutation of its own.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Host-facing facade: document, user roster, save/load handlers |
//! | [`doc`] | Shape kinds, placed shapes, and the painting document |
//! | [`file`] | Export/import of the downloadable `.json` payload |
//! | [`net`] | Wire types and the HTTP client for the painting store |
//! | [`consts`] | Shared constants (default name, backend base URL) |

pub mod consts;
pub mod doc;
pub mod file;
pub mod net;
pub mod session;
