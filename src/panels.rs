//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod divider;
pub mod leaf;
pub mod status;

pub use divider::DividerPanel;
pub use leaf::LeafPanel;
pub use status::StatusPanel;
