//! src/partition/id.rs
//!
//! Hierarchical partition identifiers (`root`, `root-1`, `root-1-2`, ...).

use std::fmt;

/// Identity of a partition, derived from its parent's id and its position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(String);

impl PanelId {
    /// Id of the root partition.
    pub fn root() -> Self {
        Self("root".to_string())
    }

    /// Id of the child at `index` (0 or 1): `<self>-1` or `<self>-2`.
    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}-{}", self.0, index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
