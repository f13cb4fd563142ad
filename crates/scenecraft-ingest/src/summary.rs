//! Compact scene summaries for outgoing generation requests.

use glam::Vec3;
use scenecraft_core::SceneData;
use serde::Serialize;

/// The bounded per-node shape sent back to the generation collaborator:
/// name, group, position, and scale only. Materials and rotations are
/// deliberately omitted to keep the request payload small.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeSummary<'a> {
    name: &'a str,
    group: &'a str,
    position: Vec3,
    scale: Vec3,
}

/// Serialize the current scene into the summary JSON embedded in the
/// next generation request.
pub fn scene_summary(scene: &SceneData) -> String {
    let summaries: Vec<NodeSummary<'_>> = scene
        .nodes
        .iter()
        .map(|n| NodeSummary {
            name: &n.name,
            group: &n.group,
            position: n.position,
            scale: n.scale,
        })
        .collect();

    // Serializing these borrowed plain structs cannot fail.
    serde_json::to_string(&summaries).unwrap_or_else(|_| "[]".to_string())
}
