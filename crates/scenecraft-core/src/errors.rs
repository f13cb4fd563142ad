//! Error types for the Scenecraft engine.

use thiserror::Error;

/// Top-level error type for the Scenecraft engine.
#[derive(Debug, Error)]
pub enum ScenecraftError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors while ingesting a remote generation response.
///
/// Any of these leaves the previously displayed scene untouched.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Response was empty")]
    EmptyResponse,

    #[error("No structured payload found in response")]
    NoPayload,

    #[error("Malformed payload: {reason}")]
    Malformed { reason: String },

    #[error("Payload has no nodes array")]
    MissingNodes,
}

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Zero eligible nodes after group filtering. Callers treat this as
    /// a silent no-op, not a failure.
    #[error("Nothing to export")]
    NothingToExport,

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive packaging failed: {reason}")]
    Archive { reason: String },
}

/// Errors at the remote collaborator boundary.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("A generation request is already in flight")]
    Busy,

    #[error("Remote call failed: {reason}")]
    Remote { reason: String },
}
