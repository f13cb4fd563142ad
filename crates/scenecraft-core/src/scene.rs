//! Scene graph records: nodes, whole-scene snapshots, and the closed
//! primitive-kind enumeration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::material::PbrMaterial;

/// Group name assigned to nodes with no explicit assembly.
pub const UNGROUPED: &str = "Ungrouped";

/// Normalize a raw group label: empty or whitespace-only becomes
/// [`UNGROUPED`].
pub fn normalize_group(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => UNGROUPED.to_string(),
    }
}

/// The closed set of primitive and construction kinds a node can carry.
///
/// Consumers must pattern-match exhaustively so that adding a kind forces
/// every match site to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryType {
    Box,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Icosahedron,
    Dodecahedron,
    Tetrahedron,
    Extrusion,
    Wedge,
    Plane,
    Wall,
    Roof,
    Floor,
    Window,
    Pillar,
    Stairs,
    TreeComplex,
}

impl GeometryType {
    /// Wire/display name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Box => "box",
            GeometryType::Sphere => "sphere",
            GeometryType::Cylinder => "cylinder",
            GeometryType::Cone => "cone",
            GeometryType::Torus => "torus",
            GeometryType::Icosahedron => "icosahedron",
            GeometryType::Dodecahedron => "dodecahedron",
            GeometryType::Tetrahedron => "tetrahedron",
            GeometryType::Extrusion => "extrusion",
            GeometryType::Wedge => "wedge",
            GeometryType::Plane => "plane",
            GeometryType::Wall => "wall",
            GeometryType::Roof => "roof",
            GeometryType::Floor => "floor",
            GeometryType::Window => "window",
            GeometryType::Pillar => "pillar",
            GeometryType::Stairs => "stairs",
            GeometryType::TreeComplex => "tree_complex",
        }
    }
}

/// Lighting preset for the interactive viewport. Rendering-only; the
/// export path never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    City,
    Sunset,
    Dawn,
    Night,
    Warehouse,
    Forest,
    Apartment,
    Studio,
    Park,
    Lobby,
}

/// A single placed object instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Unique opaque identifier, assigned at ingestion, never reused.
    pub id: String,
    /// Human-readable label. Not enforced unique; the exporter
    /// disambiguates duplicates positionally.
    pub name: String,
    /// Logical assembly name. Always non-empty after ingestion.
    #[serde(default = "default_group")]
    pub group: String,
    #[serde(rename = "type")]
    pub geometry: GeometryType,
    /// World-space center.
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    /// Full extent per axis (primitives are authored spanning [-1, 1]).
    pub scale: Vec3,
    /// Tessellation density for curved primitives; `None` means the
    /// renderer's smooth default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<u32>,
    pub material: PbrMaterial,
    /// Closed 2D outline consumed only by the extrusion kind. At least
    /// 3 points when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_path: Option<Vec<[f32; 2]>>,
}

fn default_group() -> String {
    UNGROUPED.to_string()
}

impl SceneNode {
    /// Create a node with identity placement and a flat default material.
    pub fn new(id: impl Into<String>, name: impl Into<String>, geometry: GeometryType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: default_group(),
            geometry,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            segments: None,
            material: PbrMaterial::flat("#CCCCCC"),
            shape_path: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        self.group = normalize_group(Some(group.as_str()));
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_material(mut self, material: PbrMaterial) -> Self {
        self.material = material;
        self
    }
}

/// A whole-scene snapshot. Replaced wholesale on every successful
/// generation response; never mutated node-by-node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneData {
    pub nodes: Vec<SceneNode>,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_ambient")]
    pub ambient_light_intensity: f32,
    /// Free-text rationale passed through from the generation
    /// collaborator, shown in the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_reasoning: Option<String>,
}

fn default_ambient() -> f32 {
    0.5
}

impl SceneData {
    /// An empty scene with default lighting.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            environment: Environment::default(),
            ambient_light_intensity: default_ambient(),
            ai_reasoning: None,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check that node ids are unique within the scene.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.nodes.len());
        self.nodes.iter().all(|n| seen.insert(n.id.as_str()))
    }
}

impl Default for SceneData {
    fn default() -> Self {
        Self::empty()
    }
}
