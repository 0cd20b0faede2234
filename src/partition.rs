//! src/partition.rs
//!
//! Top-level `partition` module: the splittable layout tree and its parts.

pub mod color;
pub mod config;
pub mod error;
pub mod id;
pub mod node;
pub mod tree;

/// Re-exports
pub use color::{ColorSource, RandomColors};
pub use config::LayoutConfig;
pub use error::PartitionError;
pub use id::PanelId;
pub use node::{Child, Orientation, Partition, State, TOTAL_SHARE};
pub use tree::PartitionTree;
