//! Core types for the Scenecraft engine.
//!
//! This crate provides the foundational types used across all other
//! scenecraft crates:
//! - Scene graph records (nodes, materials, whole-scene snapshots)
//! - The closed primitive-kind enumeration
//! - Conversation/message types
//! - Error types

pub mod chat;
pub mod errors;
pub mod material;
pub mod scene;

pub use chat::*;
pub use errors::*;
pub use material::*;
pub use scene::*;
