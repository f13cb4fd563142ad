//! Wavefront OBJ emission, one document per logical group.
//!
//! Vertex indices are one-based and local to each document: a running
//! counter starts at 1 per group and advances by the vertex count of
//! each serialized node (8 for cube topology, 4 for quad).

use indexmap::IndexMap;
use scenecraft_core::{ExportError, SceneNode};
use scenecraft_geometry::{synthesize, world_vertices};

/// Tool name written into every document header.
pub const TOOL_NAME: &str = "Scenecraft";

/// Material identifier for a `usemtl` line: the leading `#` of the hex
/// color is replaced by a fixed prefix, so `#FF5733` becomes
/// `Mat_FF5733`. A color with no `#` is prefixed as-is, keeping the
/// line legal.
pub fn material_identifier(color: &str) -> String {
    format!("Mat_{}", color.strip_prefix('#').unwrap_or(color))
}

/// Serialize eligible nodes into one OBJ document per distinct group.
///
/// Groups keep their encounter order from the node list, and nodes keep
/// their order within each group. A filter restricts serialization to a
/// single group; zero eligible nodes after filtering yields
/// [`ExportError::NothingToExport`] so callers can no-op instead of
/// producing an empty archive.
pub fn export_group_documents(
    nodes: &[SceneNode],
    group_filter: Option<&str>,
) -> Result<IndexMap<String, String>, ExportError> {
    let mut groups: IndexMap<&str, Vec<&SceneNode>> = IndexMap::new();
    for node in nodes {
        if let Some(filter) = group_filter {
            if node.group != filter {
                continue;
            }
        }
        groups.entry(node.group.as_str()).or_default().push(node);
    }

    if groups.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut documents = IndexMap::with_capacity(groups.len());
    for (group, members) in &groups {
        documents.insert(group.to_string(), serialize_group(group, members));
    }
    Ok(documents)
}

fn serialize_group(group: &str, members: &[&SceneNode]) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("# Group: {}\n", group));
    doc.push_str(&format!("# Exported by {}\n", TOOL_NAME));

    // OBJ convention: one-based, document-local vertex numbering.
    let mut next_index: u32 = 1;

    for (i, node) in members.iter().enumerate() {
        let mesh = synthesize(node.geometry);

        doc.push_str(&format!("o {}_{}\n", node.name, i));
        doc.push_str(&format!(
            "usemtl {}\n",
            material_identifier(&node.material.color)
        ));

        for v in world_vertices(node) {
            doc.push_str(&format!("v {:.4} {:.4} {:.4}\n", v.x, v.y, v.z));
        }

        for face in mesh.faces {
            doc.push_str(&format!(
                "f {} {} {} {}\n",
                face[0] + next_index,
                face[1] + next_index,
                face[2] + next_index,
                face[3] + next_index,
            ));
        }

        next_index += mesh.vertex_count() as u32;
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use scenecraft_core::GeometryType;

    fn node(name: &str, group: &str, kind: GeometryType) -> SceneNode {
        SceneNode::new(name, name, kind).with_group(group)
    }

    #[test]
    fn test_material_identifier() {
        assert_eq!(material_identifier("#FF5733"), "Mat_FF5733");
        assert_eq!(material_identifier("8B4513"), "Mat_8B4513");
    }

    #[test]
    fn test_empty_after_filter_is_nothing_to_export() {
        let nodes = vec![node("Crate", "Props", GeometryType::Box)];
        let result = export_group_documents(&nodes, Some("Terrain"));
        assert!(matches!(result, Err(ExportError::NothingToExport)));

        let result = export_group_documents(&[], None);
        assert!(matches!(result, Err(ExportError::NothingToExport)));
    }

    #[test]
    fn test_single_box_document() {
        let n = node("Crate", "Props", GeometryType::Box)
            .with_position(Vec3::new(0.0, 0.5, 0.0));
        let docs = export_group_documents(std::slice::from_ref(&n), None).unwrap();
        assert_eq!(docs.len(), 1);

        let doc = &docs["Props"];
        assert!(doc.starts_with("# Group: Props\n# Exported by Scenecraft\n"));
        assert!(doc.contains("o Crate_0\n"));
        assert!(doc.contains("usemtl Mat_CCCCCC\n"));

        // 8 vertices at (±0.5, 0.5 ± 0.5, ±0.5), 4 decimal places.
        assert_eq!(doc.matches("\nv ").count(), 8);
        assert!(doc.contains("v -0.5000 0.0000 -0.5000\n"));
        assert!(doc.contains("v 0.5000 1.0000 0.5000\n"));

        // 6 quad faces using indices 1-8 only.
        let faces: Vec<&str> = doc
            .lines()
            .filter(|l| l.starts_with("f "))
            .collect();
        assert_eq!(faces.len(), 6);
        for face in faces {
            for idx in face[2..].split_whitespace() {
                let idx: u32 = idx.parse().unwrap();
                assert!((1..=8).contains(&idx));
            }
        }
    }

    #[test]
    fn test_plane_winding() {
        let n = node("Ground", "Terrain", GeometryType::Plane)
            .with_scale(Vec3::new(2.0, 2.0, 1.0));
        let docs = export_group_documents(std::slice::from_ref(&n), None).unwrap();
        let doc = &docs["Terrain"];

        assert!(doc.contains("v -1.0000 -1.0000 0.0000\n"));
        assert!(doc.contains("v 1.0000 1.0000 0.0000\n"));
        assert!(doc.contains("f 1 2 4 3\n"));
    }

    #[test]
    fn test_running_counter_across_nodes() {
        // 1 + 8N + 4M after N cubes and M quads.
        let nodes = vec![
            node("Wall", "House", GeometryType::Wall),
            node("Window", "House", GeometryType::Window),
            node("Roof", "House", GeometryType::Roof),
        ];
        let docs = export_group_documents(&nodes, None).unwrap();
        let doc = &docs["House"];

        // Second node (quad) starts at 9, third (cube) at 13.
        assert!(doc.contains("f 9 10 12 11\n"));
        let max: u32 = doc
            .lines()
            .filter(|l| l.starts_with("f "))
            .flat_map(|l| l[2..].split_whitespace())
            .map(|s| s.parse().unwrap())
            .max()
            .unwrap();
        assert_eq!(max, 8 + 4 + 8);
    }

    #[test]
    fn test_groups_keep_encounter_order() {
        let nodes = vec![
            node("A", "Zeta", GeometryType::Box),
            node("B", "Alpha", GeometryType::Box),
            node("C", "Zeta", GeometryType::Box),
        ];
        let docs = export_group_documents(&nodes, None).unwrap();
        let order: Vec<&String> = docs.keys().collect();
        assert_eq!(order, ["Zeta", "Alpha"]);

        // Both Zeta nodes land in one document, in input order.
        let zeta = &docs["Zeta"];
        assert!(zeta.contains("o A_0\n"));
        assert!(zeta.contains("o C_1\n"));
    }

    #[test]
    fn test_filter_matches_full_export_subset() {
        let nodes = vec![
            node("A", "Props", GeometryType::Box),
            node("B", "Terrain", GeometryType::Plane),
            node("C", "Props", GeometryType::Sphere),
        ];
        let full = export_group_documents(&nodes, None).unwrap();
        let filtered = export_group_documents(&nodes, Some("Props")).unwrap();

        assert_eq!(filtered.len(), 1);
        // Index locality: the filtered document is byte-identical to the
        // same group's document from the full export.
        assert_eq!(filtered["Props"], full["Props"]);
    }

    #[test]
    fn test_export_is_idempotent() {
        let nodes = vec![
            node("A", "Props", GeometryType::Box).with_rotation(Vec3::new(0.3, 0.1, 0.9)),
            node("B", "Terrain", GeometryType::Plane),
        ];
        let first = export_group_documents(&nodes, None).unwrap();
        let second = export_group_documents(&nodes, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_names_disambiguated() {
        let nodes = vec![
            node("Pillar", "House", GeometryType::Pillar),
            node("Pillar", "House", GeometryType::Pillar),
        ];
        let docs = export_group_documents(&nodes, None).unwrap();
        let doc = &docs["House"];
        assert!(doc.contains("o Pillar_0\n"));
        assert!(doc.contains("o Pillar_1\n"));
    }
}
