//! src/partition/node.rs
//!
//! A single partition: either a colored leaf or a two-way split.

use ratatui::style::Color;

use super::id::PanelId;

/// Sum of the two children's shares in every split.
pub const TOTAL_SHARE: u16 = 100;

/// Axis along which a split places its two children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children side by side; the divider runs top to bottom.
    Vertical,
    /// Children stacked; the divider runs left to right.
    Horizontal,
}

impl Orientation {
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

/// One side of a split: its share of the parent and the owned subtree.
#[derive(Clone, Debug)]
pub struct Child {
    pub size: u16,
    pub node: Partition,
}

#[derive(Clone, Debug)]
pub enum State {
    Leaf,
    Split {
        orientation: Orientation,
        children: Box<[Child; 2]>,
    },
}

#[derive(Clone, Debug)]
pub struct Partition {
    pub id: PanelId,
    /// Assigned at creation; only shown while the partition is a leaf.
    pub color: Color,
    pub state: State,
}

impl Partition {
    pub fn leaf(id: PanelId, color: Color) -> Self {
        Self {
            id,
            color,
            state: State::Leaf,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.state, State::Leaf)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match &self.state {
            State::Leaf => None,
            State::Split { orientation, .. } => Some(*orientation),
        }
    }

    /// Both children of a split, empty for a leaf.
    pub fn children(&self) -> &[Child] {
        match &self.state {
            State::Leaf => &[],
            State::Split { children, .. } => children.as_slice(),
        }
    }

    /// Shares of the two children, if split.
    pub fn sizes(&self) -> Option<(u16, u16)> {
        match &self.state {
            State::Leaf => None,
            State::Split { children, .. } => Some((children[0].size, children[1].size)),
        }
    }

    pub(crate) fn find(&self, id: &PanelId) -> Option<&Partition> {
        if &self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.node.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: &PanelId) -> Option<&mut Partition> {
        if &self.id == id {
            return Some(self);
        }
        match &mut self.state {
            State::Leaf => None,
            State::Split { children, .. } => {
                children.iter_mut().find_map(|c| c.node.find_mut(id))
            }
        }
    }

    /// Parent of the node with `id`, together with that node's child index.
    pub(crate) fn parent_of_mut(&mut self, id: &PanelId) -> Option<(&mut Partition, usize)> {
        let index = self.children().iter().position(|c| &c.node.id == id);
        if let Some(index) = index {
            return Some((self, index));
        }
        match &mut self.state {
            State::Leaf => None,
            State::Split { children, .. } => {
                children.iter_mut().find_map(|c| c.node.parent_of_mut(id))
            }
        }
    }

    /// Give this node `id` and re-derive every descendant id from it.
    pub(crate) fn relabel(&mut self, id: PanelId) {
        if let State::Split { children, .. } = &mut self.state {
            for (index, child) in children.iter_mut().enumerate() {
                child.node.relabel(id.child(index));
            }
        }
        self.id = id;
    }

    pub(crate) fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a PanelId>) {
        match &self.state {
            State::Leaf => out.push(&self.id),
            State::Split { children, .. } => {
                for child in children.iter() {
                    child.node.collect_leaves(out);
                }
            }
        }
    }

    pub(crate) fn count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node.count()).sum::<usize>()
    }

    pub(crate) fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|c| c.node.depth())
            .max()
            .unwrap_or(0)
    }
}
