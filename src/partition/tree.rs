//! src/partition/tree.rs
//!
//! The partition tree: owns every partition, hands out fresh colors, and
//! applies split / resize / remove by id.
//!
//! # Operations
//! - **split**: a leaf becomes a split with two fresh leaves `<id>-1` and
//!   `<id>-2`, each at half the total share.
//! - **resize**: sets one child's share and gives the sibling the rest of the
//!   total. Shares are clamped so neither side drops below `min_share`.
//! - **remove**: drops a node and its subtree. Its parent adopts the surviving
//!   sibling's color and state, keeping its own id, so a split never holds a
//!   single child. Ids below the parent are re-derived from their new
//!   position, so every id stays `<parent id>-<position>`.
//!
//! Every rejected call returns a [`PartitionError`] and leaves the tree as it was.

use std::mem;

use super::color::ColorSource;
use super::error::PartitionError;
use super::id::PanelId;
use super::node::{Child, Orientation, Partition, State, TOTAL_SHARE};

pub struct PartitionTree {
    root: Partition,
    colors: Box<dyn ColorSource>,
    min_share: u16,
}

impl PartitionTree {
    /// A tree holding a single leaf with id `root`.
    pub fn new(mut colors: Box<dyn ColorSource>, min_share: u16) -> Self {
        let root = Partition::leaf(PanelId::root(), colors.next_color());
        Self {
            root,
            colors,
            min_share: min_share.min(TOTAL_SHARE / 2),
        }
    }

    pub fn root(&self) -> &Partition {
        &self.root
    }

    pub fn get(&self, id: &PanelId) -> Option<&Partition> {
        self.root.find(id)
    }

    /// Leaf ids in drawing order (first child before second).
    pub fn leaves(&self) -> Vec<&PanelId> {
        let mut out = Vec::new();
        self.root.collect_leaves(&mut out);
        out
    }

    /// Number of partitions, splits included.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// Always false: the root partition cannot be removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn split(&mut self, id: &PanelId, orientation: Orientation) -> Result<(), PartitionError> {
        let node = self
            .root
            .find_mut(id)
            .ok_or_else(|| PartitionError::NotFound(id.clone()))?;
        if !node.is_leaf() {
            return Err(PartitionError::AlreadySplit(id.clone()));
        }

        let half = TOTAL_SHARE / 2;
        let first = Partition::leaf(node.id.child(0), self.colors.next_color());
        let second = Partition::leaf(node.id.child(1), self.colors.next_color());
        node.state = State::Split {
            orientation,
            children: Box::new([
                Child {
                    size: half,
                    node: first,
                },
                Child {
                    size: TOTAL_SHARE - half,
                    node: second,
                },
            ]),
        };

        tracing::info!(%id, orientation = orientation.label(), "split partition");
        Ok(())
    }

    /// Set the share of child `index` of split `id`; the sibling gets the remainder.
    ///
    /// Returns the resulting `(first, second)` shares.
    pub fn resize(
        &mut self,
        id: &PanelId,
        index: usize,
        size: u16,
    ) -> Result<(u16, u16), PartitionError> {
        let node = self
            .root
            .find_mut(id)
            .ok_or_else(|| PartitionError::NotFound(id.clone()))?;
        let State::Split { children, .. } = &mut node.state else {
            return Err(PartitionError::NotSplit(id.clone()));
        };
        if index > 1 {
            return Err(PartitionError::InvalidChild {
                id: id.clone(),
                index,
            });
        }

        let total = children[0].size + children[1].size;
        let min = self.min_share.min(total / 2);
        let size = size.clamp(min, total - min);
        children[index].size = size;
        children[1 - index].size = total - size;

        let shares = (children[0].size, children[1].size);
        tracing::debug!(%id, index, first = shares.0, second = shares.1, "resized split");
        Ok(shares)
    }

    pub fn remove(&mut self, id: &PanelId) -> Result<(), PartitionError> {
        if &self.root.id == id {
            return Err(PartitionError::RootRemoval);
        }
        let (parent, index) = self
            .root
            .parent_of_mut(id)
            .ok_or_else(|| PartitionError::NotFound(id.clone()))?;

        if let State::Split { children, .. } = mem::replace(&mut parent.state, State::Leaf) {
            let [first, second] = *children;
            let survivor = if index == 0 { second } else { first };
            parent.color = survivor.node.color;
            parent.state = survivor.node.state;
            let parent_id = parent.id.clone();
            parent.relabel(parent_id);
        }

        tracing::info!(%id, parent = %parent.id, "removed partition");
        Ok(())
    }
}
