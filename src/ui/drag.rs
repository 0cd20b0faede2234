//! src/ui/drag.rs
//!
//! Divider dragging: turns pointer positions into a share for the first
//! child of the split being dragged.

use ratatui::layout::Rect;

use crate::partition::{Orientation, PanelId, TOTAL_SHARE};

/// Thickness of a divider in cells.
pub const DIVIDER: u16 = 1;

/// A divider drag in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drag {
    pub split: PanelId,
    pub orientation: Orientation,
    /// Area of the split when the drag started.
    pub area: Rect,
}

impl Drag {
    pub fn new(split: PanelId, orientation: Orientation, area: Rect) -> Self {
        Self {
            split,
            orientation,
            area,
        }
    }

    /// Share of the first child if the divider sat at `(column, row)`.
    pub fn share_at(&self, column: u16, row: u16) -> u16 {
        let (start, len, pos) = match self.orientation {
            Orientation::Vertical => (self.area.x, self.area.width, column),
            Orientation::Horizontal => (self.area.y, self.area.height, row),
        };
        let avail = u32::from(len.saturating_sub(DIVIDER).max(1));
        let offset = u32::from(pos.saturating_sub(start)).min(avail);
        let share = (offset * u32::from(TOTAL_SHARE) + avail / 2) / avail;
        share as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_split_follows_the_column() {
        let drag = Drag::new(PanelId::root(), Orientation::Vertical, Rect::new(10, 0, 101, 20));
        assert_eq!(drag.share_at(10, 5), 0);
        assert_eq!(drag.share_at(40, 5), 30);
        assert_eq!(drag.share_at(110, 5), 100);
    }

    #[test]
    fn horizontal_split_follows_the_row() {
        let drag = Drag::new(PanelId::root(), Orientation::Horizontal, Rect::new(0, 4, 80, 21));
        assert_eq!(drag.share_at(79, 14), 50);
        assert_eq!(drag.share_at(0, 0), 0);
        assert_eq!(drag.share_at(0, 200), 100);
    }
}
