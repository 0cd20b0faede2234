//! src/partition/config.rs
//!
//! Tunables for splitting, resizing and drawing partitions.

use std::time::Duration;

use super::node::TOTAL_SHARE;

#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Smallest share (percent) a resize may leave to either child.
    pub min_share: u16,

    /// Show the id and color label in the corner of every leaf.
    pub show_labels: bool,

    /// Upper bound on how long the event loop waits for input before redrawing.
    pub frame_time: Duration,
}

impl LayoutConfig {
    /// Create a new `LayoutConfig`. `min_share` is capped at half the total.
    pub fn new(min_share: u16, show_labels: bool, frame_time: Duration) -> Self {
        Self {
            min_share: min_share.min(TOTAL_SHARE / 2),
            show_labels,
            frame_time,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_share: 5,
            show_labels: true,
            frame_time: Duration::from_millis(50),
        }
    }
}
