//! Schema-constrained parsing of the generation response.

use glam::Vec3;
use scenecraft_core::{
    is_valid_hex_color, normalize_group, Environment, GeometryType, IngestError, PbrMaterial,
    SceneData, SceneNode,
};
use serde::Deserialize;
use uuid::Uuid;

/// Isolate the structured payload from surrounding prose: everything
/// from the first `{` to the last `}`.
///
/// Remote models routinely wrap their JSON in commentary or code
/// fences; this is the single, testable recovery step for that.
pub fn extract_payload(raw: &str) -> Result<&str, IngestError> {
    if raw.trim().is_empty() {
        return Err(IngestError::EmptyResponse);
    }
    let start = raw.find('{').ok_or(IngestError::NoPayload)?;
    let end = raw.rfind('}').ok_or(IngestError::NoPayload)?;
    if end < start {
        return Err(IngestError::NoPayload);
    }
    Ok(&raw[start..=end])
}

/// The wire shape of a generated node: a [`SceneNode`] minus the id,
/// which is assigned locally.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodePayload {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    group: Option<String>,
    #[serde(rename = "type")]
    geometry: GeometryType,
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    #[serde(default)]
    segments: Option<u32>,
    #[serde(default = "default_material")]
    material: PbrMaterial,
    #[serde(default)]
    shape_path: Option<Vec<[f32; 2]>>,
}

fn default_material() -> PbrMaterial {
    PbrMaterial::flat("#CCCCCC")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenePayload {
    nodes: Vec<NodePayload>,
    #[serde(default)]
    environment: Environment,
    #[serde(default = "default_ambient")]
    ambient_light_intensity: f32,
    #[serde(default)]
    ai_reasoning: Option<String>,
}

fn default_ambient() -> f32 {
    0.5
}

/// Parse a raw generation response into a validated [`SceneData`].
///
/// Fails without side effects: callers keep their current scene on any
/// error. A payload parseable as JSON but lacking a `nodes` array is
/// reported distinctly as [`IngestError::MissingNodes`].
pub fn parse_scene(raw: &str) -> Result<SceneData, IngestError> {
    let payload = extract_payload(raw)?;

    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| IngestError::Malformed { reason: e.to_string() })?;

    if !value.get("nodes").map_or(false, |n| n.is_array()) {
        return Err(IngestError::MissingNodes);
    }

    let scene: ScenePayload = serde_json::from_value(value)
        .map_err(|e| IngestError::Malformed { reason: e.to_string() })?;

    Ok(realize(scene))
}

fn realize(payload: ScenePayload) -> SceneData {
    SceneData {
        nodes: payload.nodes.into_iter().map(realize_node).collect(),
        environment: payload.environment,
        ambient_light_intensity: payload.ambient_light_intensity,
        ai_reasoning: payload.ai_reasoning,
    }
}

fn realize_node(node: NodePayload) -> SceneNode {
    // Name-plus-uuid keeps ids unique even for repeated names.
    let id = match node.id {
        Some(id) if !id.trim().is_empty() => id,
        _ => format!("{}-{}", node.name, Uuid::new_v4()),
    };

    // A closed outline needs at least 3 points; anything shorter is
    // dropped so the node degrades to its cube approximation.
    let shape_path = match node.shape_path {
        Some(path) if path.len() >= 3 => Some(path),
        Some(path) => {
            log::warn!(
                "dropping degenerate shape path ({} points) on node '{}'",
                path.len(),
                node.name
            );
            None
        }
        None => None,
    };

    if !is_valid_hex_color(&node.material.color) {
        log::warn!(
            "node '{}' has non-hex color '{}'",
            node.name,
            node.material.color
        );
    }

    SceneNode {
        id,
        name: node.name,
        group: normalize_group(node.group.as_deref()),
        geometry: node.geometry,
        position: node.position,
        rotation: node.rotation,
        scale: node.scale,
        segments: node.segments,
        material: node.material,
        shape_path,
    }
}
