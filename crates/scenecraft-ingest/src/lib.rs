//! Ingestion of remote generation responses.
//!
//! The generation collaborator returns free text that should contain a
//! JSON scene description. Everything here treats that text as
//! untrusted: the payload is isolated with an explicit brace-extraction
//! step, validated against the expected shape before any field access,
//! and rejected with a recoverable [`IngestError`] on any mismatch so
//! the previously displayed scene stays untouched.

pub mod payload;
pub mod summary;

pub use payload::{extract_payload, parse_scene};
pub use summary::scene_summary;
