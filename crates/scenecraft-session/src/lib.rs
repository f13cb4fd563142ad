//! Session state and orchestration for Scenecraft.
//!
//! A session owns the single source of truth for the scene graph (a
//! replace-wholesale store, no node-level mutation), the conversation
//! history, and the busy flag that keeps at most one generation request
//! in flight. Remote collaborators sit behind the [`GenerationBackend`]
//! trait; their failures are contained here and surfaced as
//! conversational messages, never as faults in the render or export
//! paths.

pub mod backend;
pub mod session;
pub mod store;

pub use backend::{GenerationBackend, GenerationRequest};
pub use session::Session;
pub use store::{ChatLog, SceneStore};
