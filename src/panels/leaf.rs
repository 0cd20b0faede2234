//! src/panels/leaf.rs
//!
//! Leaf partition panel: fills its region with the partition color and
//! centers the split / remove buttons.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::partition::color::{contrast, hex};
use crate::partition::{Orientation, PanelId};
use crate::ui::{Action, Target};

const BUTTON_WIDTH: u16 = 3;
const BUTTON_GAP: u16 = 1;
const BUTTONS: [Action; 3] = [
    Action::Split(Orientation::Vertical),
    Action::Split(Orientation::Horizontal),
    Action::Remove,
];

pub struct LeafPanel {
    pub id: PanelId,
    pub color: Color,
    pub show_label: bool,
}

impl LeafPanel {
    pub fn new(id: PanelId, color: Color, show_label: bool) -> Self {
        Self {
            id,
            color,
            show_label,
        }
    }

    /// Button rectangles centered in `area`; none if they do not fit.
    fn buttons(area: Rect) -> Vec<(Action, Rect)> {
        let count = BUTTONS.len() as u16;
        let width = count * BUTTON_WIDTH + (count - 1) * BUTTON_GAP;
        if area.width < width || area.height == 0 {
            return Vec::new();
        }
        let x = area.x + (area.width - width) / 2;
        let y = area.y + area.height / 2;
        BUTTONS
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let offset = i as u16 * (BUTTON_WIDTH + BUTTON_GAP);
                (*action, Rect::new(x + offset, y, BUTTON_WIDTH, 1))
            })
            .collect()
    }

    fn button_style(action: Action) -> (&'static str, Style) {
        let (text, bg) = match action {
            Action::Split(Orientation::Vertical) => (" V ", Color::Blue),
            Action::Split(Orientation::Horizontal) => (" H ", Color::Green),
            Action::Remove => (" - ", Color::Red),
        };
        let style = Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        (text, style)
    }
}

impl crate::ui::Panel for LeafPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(Block::default().style(Style::default().bg(self.color)), area);

        // keep the label off the button row
        if self.show_label && area.height >= 3 {
            let label = format!("{} {}", self.id, hex(self.color));
            let style = Style::default().fg(contrast(self.color)).bg(self.color);
            f.render_widget(
                Paragraph::new(label).style(style),
                Rect::new(area.x, area.y, area.width, 1),
            );
        }

        for (action, rect) in Self::buttons(area) {
            let (text, style) = Self::button_style(action);
            f.render_widget(Paragraph::new(text).style(style), rect);
        }
    }

    fn targets(&self, area: Rect) -> Vec<Target> {
        Self::buttons(area)
            .into_iter()
            .map(|(action, rect)| Target::Button {
                rect,
                id: self.id.clone(),
                action,
            })
            .collect()
    }
}
