//! src/ui/hit.rs
//!
//! Interactive regions recorded while drawing, looked up on mouse input.

use ratatui::layout::{Position, Rect};

use crate::partition::{Orientation, PanelId};

/// What a leaf button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Split(Orientation),
    Remove,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Button {
        rect: Rect,
        id: PanelId,
        action: Action,
    },
    Divider {
        rect: Rect,
        split: PanelId,
        orientation: Orientation,
        /// Full area of the split the divider belongs to.
        area: Rect,
    },
}

impl Target {
    pub fn rect(&self) -> Rect {
        match self {
            Target::Button { rect, .. } | Target::Divider { rect, .. } => *rect,
        }
    }
}

/// Targets from the last drawn frame, in drawing order.
#[derive(Debug, Default)]
pub struct HitMap {
    targets: Vec<Target>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn push(&mut self, target: Target) {
        self.targets.push(target);
    }

    pub fn extend(&mut self, targets: impl IntoIterator<Item = Target>) {
        self.targets.extend(targets);
    }

    /// Topmost target under the cell `(column, row)`.
    pub fn at(&self, column: u16, row: u16) -> Option<&Target> {
        let pos = Position::new(column, row);
        self.targets.iter().rev().find(|t| t.rect().contains(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_targets_win() {
        let mut hits = HitMap::new();
        hits.push(Target::Button {
            rect: Rect::new(0, 0, 10, 10),
            id: PanelId::root(),
            action: Action::Remove,
        });
        hits.push(Target::Button {
            rect: Rect::new(2, 2, 3, 1),
            id: PanelId::root(),
            action: Action::Split(Orientation::Vertical),
        });

        let hit = hits.at(3, 2).unwrap();
        assert!(matches!(
            hit,
            Target::Button {
                action: Action::Split(Orientation::Vertical),
                ..
            }
        ));
        assert!(matches!(
            hits.at(0, 0),
            Some(Target::Button {
                action: Action::Remove,
                ..
            })
        ));
        assert!(hits.at(10, 10).is_none());
    }
}
