//! src/ui/node.rs
//!
//! Recursive layout Node + Panel trait used to draw each frame. Drawing a
//! node also records its interactive targets into a [`HitMap`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::hit::{HitMap, Target};
use crate::partition::{Orientation, PanelId};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);

    /// Clickable regions this panel exposes when drawn at `area`.
    fn targets(&self, _area: Rect) -> Vec<Target> {
        Vec::new()
    }
}

/// Draggable divider owned by a group: the split it resizes and its axis.
pub struct Handle {
    pub split: PanelId,
    pub orientation: Orientation,
}

/// Node tree used to compose the UI each frame.
pub enum Node {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node>,
        /// When set, the middle child is the divider of this split.
        handle: Option<Handle>,
    },
    Leaf {
        panel: Box<dyn Panel>,
    },
}

impl Node {
    /// Draw the node into the given area, collecting hit targets.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect, hits: &mut HitMap) {
        match self {
            Node::Group {
                direction,
                constraints,
                children,
                handle,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk, hits);
                }
                if let (Some(handle), Some(rect)) = (handle, chunks.get(1)) {
                    if rect.area() > 0 {
                        hits.push(Target::Divider {
                            rect: *rect,
                            split: handle.split.clone(),
                            orientation: handle.orientation,
                            area,
                        });
                    }
                }
            }
            Node::Leaf { panel } => {
                panel.draw(f, area);
                hits.extend(panel.targets(area));
            }
        }
    }
}

/// Helper: create a group node.
pub fn group(direction: Direction, constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    Node::Group {
        direction,
        constraints,
        children,
        handle: None,
    }
}

/// Helper: create the group for a two-way split with a one-cell divider.
pub fn split(
    id: PanelId,
    orientation: Orientation,
    sizes: (u16, u16),
    first: Node,
    divider: Node,
    second: Node,
) -> Node {
    let direction = match orientation {
        Orientation::Vertical => Direction::Horizontal,
        Orientation::Horizontal => Direction::Vertical,
    };
    Node::Group {
        direction,
        constraints: vec![
            Constraint::Fill(sizes.0),
            Constraint::Length(super::drag::DIVIDER),
            Constraint::Fill(sizes.1),
        ],
        children: vec![first, divider, second],
        handle: Some(Handle {
            split: id,
            orientation,
        }),
    }
}

/// Helper: create a leaf node.
pub fn leaf(panel: Box<dyn Panel>) -> Node {
    Node::Leaf { panel }
}
