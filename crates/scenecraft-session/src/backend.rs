//! The remote-collaborator boundary.

use scenecraft_core::BackendError;

/// One outgoing generation request: the user's instruction plus a
/// bounded JSON summary of the existing nodes (name, group, position,
/// scale) and, when the user attached an image, the analysis text
/// produced for it.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub instruction: String,
    pub scene_summary: String,
    pub image_context: Option<String>,
}

/// Remote generation and image-analysis collaborators.
///
/// Both calls are one-shot request/response: no retry, no backpressure,
/// no cancellation. A call runs to completion or failure; any timeout
/// is the remote side's business.
pub trait GenerationBackend {
    /// Ask the remote model for a new scene. Returns the raw response
    /// text, which may wrap the structured payload in prose.
    fn generate(&self, request: &GenerationRequest) -> Result<String, BackendError>;

    /// Describe an image (base64-encoded bytes, embedded in the
    /// request). The description is free text and is never parsed as
    /// structured data.
    fn analyze_image(&self, image_base64: &str) -> Result<String, BackendError>;
}
