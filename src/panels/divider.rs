//! src/panels/divider.rs
//!
//! Divider bar drawn between the two children of a split.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
};

use crate::partition::Orientation;

pub struct DividerPanel {
    pub orientation: Orientation,
}

impl DividerPanel {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }
}

impl crate::ui::Panel for DividerPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let symbol = match self.orientation {
            Orientation::Vertical => "┃",
            Orientation::Horizontal => "━",
        };
        let style = Style::default().fg(Color::DarkGray).bg(Color::Gray);
        let buf = f.buffer_mut();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}
