//! Export geometry for Scenecraft scenes.
//!
//! The interactive viewport renders every primitive kind with its true
//! high-fidelity geometry; this crate produces the deliberately coarse
//! export topology instead: every node collapses to either a unit quad
//! (4 vertices, 1 face) or a unit cube (8 vertices, 6 faces), which the
//! transform engine then places in world space.

pub mod primitives;
pub mod transform;

pub use primitives::{synthesize, LocalMesh};
pub use transform::{world_point, world_vertices};
