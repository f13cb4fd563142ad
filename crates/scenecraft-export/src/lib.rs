//! Export formats for Scenecraft scenes.
//!
//! The export path serializes a scene snapshot into one OBJ document
//! per logical group, then packages the documents as a zip archive for
//! download. Geometry is deliberately coarse (bounding cube or quad per
//! node); the viewport, not the exporter, owns high-fidelity rendering.

pub mod archive;
pub mod obj;

pub use archive::{archive_name, pack_archive};
pub use obj::{export_group_documents, material_identifier, TOOL_NAME};

use indexmap::IndexMap;
use scenecraft_core::{ExportError, SceneNode};

/// Serialize and package in one step: OBJ documents per group, zipped.
///
/// Returns the archive bytes and the suggested archive file name.
pub fn export_archive(
    nodes: &[SceneNode],
    group_filter: Option<&str>,
    timestamp: &str,
) -> Result<(Vec<u8>, String), ExportError> {
    let documents: IndexMap<String, String> = export_group_documents(nodes, group_filter)?;
    let name = archive_name(&documents, timestamp);
    let bytes = pack_archive(&documents)?;
    Ok((bytes, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenecraft_core::GeometryType;

    #[test]
    fn test_export_archive_empty_scene() {
        let result = export_archive(&[], None, "20240101");
        assert!(matches!(result, Err(ExportError::NothingToExport)));
    }

    #[test]
    fn test_export_archive_single_group() {
        let nodes = vec![SceneNode::new("a", "Crate", GeometryType::Box).with_group("Props")];
        let (bytes, name) = export_archive(&nodes, None, "20240101").unwrap();

        assert_eq!(name, "Props.zip");
        // Zip local-file signature.
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_export_archive_full_project_name() {
        let nodes = vec![
            SceneNode::new("a", "Crate", GeometryType::Box).with_group("Props"),
            SceneNode::new("b", "Ground", GeometryType::Plane).with_group("Terrain"),
        ];
        let (_, name) = export_archive(&nodes, None, "20240102-120000").unwrap();
        assert_eq!(name, "Full_Project_20240102-120000.zip");
    }
}
