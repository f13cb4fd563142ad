//! Local-space export topologies for each primitive kind.

use glam::Vec3;
use scenecraft_core::GeometryType;

/// 8 corners of the unit cube, spanning [-1, 1] on each axis.
const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0), // 0: left-bottom-back
    Vec3::new(1.0, -1.0, -1.0),  // 1: right-bottom-back
    Vec3::new(1.0, 1.0, -1.0),   // 2: right-top-back
    Vec3::new(-1.0, 1.0, -1.0),  // 3: left-top-back
    Vec3::new(-1.0, -1.0, 1.0),  // 4: left-bottom-front
    Vec3::new(1.0, -1.0, 1.0),   // 5: right-bottom-front
    Vec3::new(1.0, 1.0, 1.0),    // 6: right-top-front
    Vec3::new(-1.0, 1.0, 1.0),   // 7: left-top-front
];

/// Cube quad faces, zero-based, wound counter-clockwise seen from
/// outside. This winding is the export contract.
const CUBE_FACES: [[u32; 4]; 6] = [
    [0, 1, 5, 4], // bottom
    [3, 7, 6, 2], // top
    [4, 5, 6, 7], // front
    [1, 0, 3, 2], // back
    [0, 4, 7, 3], // left
    [1, 2, 6, 5], // right
];

/// Unit quad in the XY plane, spanning [-1, 1].
const QUAD_VERTICES: [Vec3; 4] = [
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
];

/// Single quad face, counter-clockwise with a +Z normal.
const QUAD_FACES: [[u32; 4]; 1] = [[0, 1, 3, 2]];

/// A local-space export mesh: unit-extent vertices plus quad faces
/// indexing into them (zero-based).
#[derive(Debug, Clone, Copy)]
pub struct LocalMesh {
    pub vertices: &'static [Vec3],
    pub faces: &'static [[u32; 4]],
}

impl LocalMesh {
    pub const fn cube() -> Self {
        Self {
            vertices: &CUBE_VERTICES,
            faces: &CUBE_FACES,
        }
    }

    pub const fn quad() -> Self {
        Self {
            vertices: &QUAD_VERTICES,
            faces: &QUAD_FACES,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Local-space export topology for a primitive kind.
///
/// Every kind collapses to one of exactly two topologies: flat kinds
/// (plane, window) become a quad, everything else its bounding cube.
/// Extrusion and tree_complex degrade to the cube too, even though the
/// viewport renders them with bespoke geometry.
pub fn synthesize(kind: GeometryType) -> LocalMesh {
    match kind {
        GeometryType::Plane | GeometryType::Window => LocalMesh::quad(),
        GeometryType::Box
        | GeometryType::Sphere
        | GeometryType::Cylinder
        | GeometryType::Cone
        | GeometryType::Torus
        | GeometryType::Icosahedron
        | GeometryType::Dodecahedron
        | GeometryType::Tetrahedron
        | GeometryType::Extrusion
        | GeometryType::Wedge
        | GeometryType::Wall
        | GeometryType::Roof
        | GeometryType::Floor
        | GeometryType::Pillar
        | GeometryType::Stairs
        | GeometryType::TreeComplex => LocalMesh::cube(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_sizes() {
        let cube = synthesize(GeometryType::Sphere);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.faces.len(), 6);

        let quad = synthesize(GeometryType::Plane);
        assert_eq!(quad.vertex_count(), 4);
        assert_eq!(quad.faces.len(), 1);

        assert_eq!(synthesize(GeometryType::Window).vertex_count(), 4);
        assert_eq!(synthesize(GeometryType::TreeComplex).vertex_count(), 8);
        assert_eq!(synthesize(GeometryType::Extrusion).vertex_count(), 8);
    }

    #[test]
    fn test_face_indices_in_range() {
        for mesh in [LocalMesh::cube(), LocalMesh::quad()] {
            for face in mesh.faces {
                for &i in face {
                    assert!((i as usize) < mesh.vertex_count());
                }
            }
        }
    }

    /// Every cube face must be wound counter-clockwise seen from outside,
    /// i.e. its normal points away from the origin.
    #[test]
    fn test_cube_winding_outward() {
        let mesh = LocalMesh::cube();
        for face in mesh.faces {
            let [a, b, c, _] = face.map(|i| mesh.vertices[i as usize]);
            let normal = (b - a).cross(c - b);
            let center = face
                .iter()
                .map(|&i| mesh.vertices[i as usize])
                .sum::<glam::Vec3>()
                / 4.0;
            assert!(
                normal.dot(center) > 0.0,
                "face {:?} wound inward",
                face
            );
        }
    }

    #[test]
    fn test_quad_normal_faces_forward() {
        let mesh = LocalMesh::quad();
        let [a, b, c, _] = mesh.faces[0].map(|i| mesh.vertices[i as usize]);
        let normal = (b - a).cross(c - b);
        assert!(normal.z > 0.0);
    }
}
