//! src/ui.rs
//!
//! Top-level UI module re-exporting node, hit-test and drag helpers.

pub mod drag;
pub mod hit;
pub mod node;

pub use drag::Drag;
pub use hit::{Action, HitMap, Target};
pub use node::{Node, Panel, group, leaf, split};
