#![warn(missing_docs)]
//! Scene graph: transform nodes in an explicit arena.
//!
//! Nodes are addressed by opaque [`NodeId`] handles owned by a single
//! [`Scene`]. There is no global registry; every operation that needs node
//! lookup takes the scene explicitly, which makes teardown and reset a matter
//! of dropping the scene.

pub mod node;
pub mod scene;

// Re-export commonly used types
pub use node::{Node, NodeId, NodeKind, Transform};
pub use scene::Scene;
