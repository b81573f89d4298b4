//! Tree generation for tree-gen
//!
//! Builds complete, regular N-ary trees: every node has exactly `growth_rate`
//! children down to a fixed `depth`, and each child's contents are derived
//! from its parent's through a pluggable [`ContentUpdate`]. Any node's
//! root-to-node path can be reconstructed afterwards.
//!
//! # Core Concepts
//!
//! - **Node**: immutable record of contents, level, parent link and sibling index
//! - **Tree**: arena owning every node, organized by level
//! - **TreeGenerator**: breadth-first, level-by-level expansion
//! - **Levels**: lazy variant yielding one level at a time
//!
//! # Example
//!
//! ```
//! use tree_gen::{GeneratorConfig, TreeGenerator};
//!
//! let generator = TreeGenerator::new(GeneratorConfig::new(2, 2)).with_update(|n: &u32| n + 1);
//! let tree = generator.generate(0u32);
//!
//! assert_eq!(tree.level(2).unwrap().len(), 4);
//!
//! let leaf = &tree.leaves()[2];
//! let path: Vec<u32> = tree.path_to_root(leaf).iter().map(|n| *n.contents()).collect();
//! assert_eq!(path, vec![0, 1, 2]);
//! ```

mod config;
mod error;
mod generator;
mod levels;
mod node;
mod tree;
mod update;

pub use config::GeneratorConfig;
pub use error::ConfigError;
pub use generator::{generate, TreeGenerator};
pub use levels::Levels;
pub use node::{Node, NodeId};
pub use tree::Tree;
pub use update::{ContentUpdate, Identity};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::GeneratorConfig;
    pub use crate::generator::{generate, TreeGenerator};
    pub use crate::node::{Node, NodeId};
    pub use crate::tree::Tree;
    pub use crate::update::{ContentUpdate, Identity};
}
