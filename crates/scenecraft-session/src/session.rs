//! Orchestration of generation, analysis, and export.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use scenecraft_core::{
    BackendError, ChatMessage, ExportError, Role, SceneData, ScenecraftError,
};
use scenecraft_export::export_archive;
use scenecraft_ingest::{parse_scene, scene_summary};
use uuid::Uuid;

use crate::backend::{GenerationBackend, GenerationRequest};
use crate::store::{ChatLog, SceneStore};

/// A user session: scene store, conversation, and the single-flight
/// busy flag.
#[derive(Debug, Default)]
pub struct Session {
    store: SceneStore,
    chat: ChatLog,
    busy: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &SceneData {
        self.store.scene()
    }

    pub fn chat(&self) -> &[ChatMessage] {
        self.chat.messages()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Run one generation round: record the user message, optionally
    /// analyze an attached image, call the remote model, and replace the
    /// scene if its response ingests cleanly.
    ///
    /// Remote or ingestion failures are contained: they become a system
    /// message in the conversation and the prior scene stays displayed.
    /// The busy flag is cleared on every exit path. The only hard error
    /// is [`BackendError::Busy`], returned when a request is already in
    /// flight.
    pub fn generate(
        &mut self,
        backend: &dyn GenerationBackend,
        instruction: &str,
        image: Option<&[u8]>,
        timestamp: u64,
    ) -> Result<(), BackendError> {
        if self.busy {
            return Err(BackendError::Busy);
        }
        self.busy = true;

        let mut user_msg = message(Role::User, instruction, timestamp);
        let image_base64 = image.map(|bytes| BASE64.encode(bytes));
        if let Some(encoded) = &image_base64 {
            user_msg = user_msg.with_image(encoded.clone());
        }
        self.chat.push(user_msg);

        let outcome = self.run_generation(backend, instruction, image_base64, timestamp);
        self.busy = false;

        if let Err(err) = outcome {
            log::warn!("generation failed: {err}");
            let notice = message(
                Role::System,
                format!("Sorry, I couldn't update the scene: {err}"),
                timestamp,
            );
            self.chat.push(notice);
        }
        Ok(())
    }

    fn run_generation(
        &mut self,
        backend: &dyn GenerationBackend,
        instruction: &str,
        image_base64: Option<String>,
        timestamp: u64,
    ) -> Result<(), ScenecraftError> {
        let image_context = match image_base64 {
            Some(encoded) => Some(backend.analyze_image(&encoded)?),
            None => None,
        };

        let request = GenerationRequest {
            instruction: instruction.to_string(),
            scene_summary: scene_summary(self.store.scene()),
            image_context,
        };

        let raw = backend.generate(&request)?;
        // Fails without touching the current scene.
        let scene = parse_scene(&raw)?;

        log::info!("scene replaced: {} nodes", scene.node_count());
        let reply = scene
            .ai_reasoning
            .clone()
            .unwrap_or_else(|| format!("Scene updated with {} objects.", scene.node_count()));
        self.store.replace(scene);
        self.chat.push(message(Role::Ai, reply, timestamp));
        Ok(())
    }

    /// Export the current scene as a downloadable archive.
    ///
    /// Returns `None` when no node matches (the silent no-op path);
    /// otherwise the archive bytes and suggested file name.
    pub fn export(
        &self,
        group_filter: Option<&str>,
        timestamp: &str,
    ) -> Result<Option<(Vec<u8>, String)>, ExportError> {
        match export_archive(&self.store.scene().nodes, group_filter, timestamp) {
            Ok(archive) => Ok(Some(archive)),
            Err(ExportError::NothingToExport) => {
                log::info!("export requested with no eligible nodes");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

}

fn message(role: Role, text: impl Into<String>, timestamp: u64) -> ChatMessage {
    ChatMessage::new(Uuid::new_v4().to_string(), role, text, timestamp)
}
