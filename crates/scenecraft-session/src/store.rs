//! Scene and conversation state containers.

use scenecraft_core::{ChatMessage, SceneData};

/// Single source of truth for the scene graph.
///
/// The scene is swapped wholesale when a generation response arrives;
/// there is deliberately no per-node mutation API, so an export always
/// reads a consistent snapshot.
#[derive(Debug, Default)]
pub struct SceneStore {
    scene: SceneData,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the current scene.
    pub fn scene(&self) -> &SceneData {
        &self.scene
    }

    /// Replace the scene wholesale, returning the displaced one.
    pub fn replace(&mut self, scene: SceneData) -> SceneData {
        std::mem::replace(&mut self.scene, scene)
    }
}

/// Ordered conversation history.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
