//! src/partition/error.rs
//!
//! Rejections reported by partition tree operations.

use thiserror::Error;

use super::id::PanelId;

/// Why a tree operation was refused. The tree is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("no partition with id {0}")]
    NotFound(PanelId),

    #[error("partition {0} is already split")]
    AlreadySplit(PanelId),

    #[error("partition {0} is not split")]
    NotSplit(PanelId),

    #[error("partition {id} has no child at index {index}")]
    InvalidChild { id: PanelId, index: usize },

    #[error("the root partition cannot be removed")]
    RootRemoval,
}
