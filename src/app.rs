//! src/app.rs
//!
//! Interactive partition layout in the terminal.
//!
//! # Top-Level Application (`app.rs`)
//!
//! Builds the partition tree, turns it into a frame of panels every loop
//! iteration, and maps mouse input back onto tree operations.
//!
//! ## Overview
//! The screen starts as one colored panel (`root`). Every leaf panel shows
//! three buttons in its center:
//! - **V**: split into two panels side by side.
//! - **H**: split into two panels stacked on top of each other.
//! - **-**: remove the panel. Its sibling takes over the parent's space.
//!   The root panel cannot be removed.
//!
//! The bar between two panels of a split is a divider: press on it and drag
//! to move it. Shares are clamped so neither side shrinks below
//! `--min-share` percent.
//!
//! # Keyboard Controls
//!
//! - **q** / **Esc** / **Ctrl-C**: Quit and restore terminal state.
//!
//! # Command Line
//!
//! ```text
//! partition-tui [--seed <u64>] [--min-share <0..=50>] [--hide-ids]
//!               [--log-file <path>] [--log-level <level>]
//! ```
//!
//! `--seed` makes panel colors reproducible. Logs are only written when
//! `--log-file` is given, since the terminal itself is taken by the UI.
//!
//! # Frame Pipeline
//!
//! 1. `frame_tree()` converts the partition tree into a `ui::Node` tree:
//!    one group per split (first child, divider, second child) and one
//!    `LeafPanel` per leaf, plus the status bar at the bottom.
//! 2. Drawing that node tree also fills a `HitMap` with every button and
//!    divider rectangle.
//! 3. Mouse events are hit-tested against that map. Once the tree changes or
//!    the terminal is resized the map is cleared, so clicks arriving before
//!    the next draw are dropped instead of landing on stale rectangles.

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::{Constraint, Direction};
use ratatui::{DefaultTerminal, Frame};

use crate::cli::Args;
use crate::logging;
use crate::panels::{DividerPanel, LeafPanel, StatusPanel};
use crate::partition::{
    ColorSource, LayoutConfig, Partition, PartitionError, PartitionTree, RandomColors, State,
};
use crate::ui::{Action, Drag, HitMap, Node, Panel, Target, group, leaf, split};

pub struct App {
    tree: PartitionTree,
    config: LayoutConfig,
    hits: HitMap,
    drag: Option<Drag>,
    running: bool,
}

impl App {
    pub fn new(tree: PartitionTree, config: LayoutConfig) -> Self {
        Self {
            tree,
            config,
            hits: HitMap::new(),
            drag: None,
            running: true,
        }
    }

    pub fn tree(&self) -> &PartitionTree {
        &self.tree
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draw the whole screen and refresh the hit map.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let root = self.frame_tree();
        self.hits.clear();
        let area = f.area();
        root.draw(f, area, &mut self.hits);
    }

    fn frame_tree(&self) -> Node {
        let status = format!(
            " V/H split  - remove  drag dividers to resize  q quit | {} panels, depth {}",
            self.tree.leaves().len(),
            self.tree.depth()
        );
        group(
            Direction::Vertical,
            vec![Constraint::Min(0), Constraint::Length(1)],
            vec![
                partition_node(self.tree.root(), &self.config),
                leaf(Box::new(StatusPanel::new(&status)) as Box<dyn Panel>),
            ],
        )
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Mouse(mouse) => self.on_mouse(mouse),
            Event::Resize(..) => {
                // rects from the last frame no longer apply
                self.drag = None;
                self.hits.clear();
            }
            _ => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            _ => {}
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        tracing::trace!(?mouse.kind, mouse.column, mouse.row, "mouse");
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(target) = self.hits.at(mouse.column, mouse.row).cloned() else {
                    return;
                };
                match target {
                    Target::Button { id, action, .. } => {
                        let result = match action {
                            Action::Split(orientation) => self.tree.split(&id, orientation),
                            Action::Remove => self.tree.remove(&id),
                        };
                        self.applied(result);
                    }
                    Target::Divider {
                        split,
                        orientation,
                        area,
                        ..
                    } => {
                        self.drag = Some(Drag::new(split, orientation, area));
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = &self.drag {
                    let share = drag.share_at(mouse.column, mouse.row);
                    let result = self.tree.resize(&drag.split, 0, share).map(|_| ());
                    self.applied(result);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag = None;
            }
            _ => {}
        }
    }

    fn applied(&mut self, result: Result<(), PartitionError>) {
        match result {
            Ok(()) => self.hits.clear(),
            Err(e) => tracing::debug!(error = %e, "ignored layout request"),
        }
    }

    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while self.running {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(self.config.frame_time)? {
                self.handle_event(event::read()?);
                while self.running && event::poll(Duration::ZERO)? {
                    self.handle_event(event::read()?);
                }
            }
        }
        Ok(())
    }
}

/// Frame node for one partition and everything below it.
fn partition_node(partition: &Partition, config: &LayoutConfig) -> Node {
    match &partition.state {
        State::Leaf => leaf(Box::new(LeafPanel::new(
            partition.id.clone(),
            partition.color,
            config.show_labels,
        )) as Box<dyn Panel>),
        State::Split {
            orientation,
            children,
        } => split(
            partition.id.clone(),
            *orientation,
            (children[0].size, children[1].size),
            partition_node(&children[0].node, config),
            leaf(Box::new(DividerPanel::new(*orientation)) as Box<dyn Panel>),
            partition_node(&children[1].node, config),
        ),
    }
}

fn release_mouse() {
    if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
        tracing::warn!(error = %e, "failed to disable mouse capture");
    }
}

/// Run `cleanup` before whatever panic hook is currently installed.
fn chain_panic_hook<F>(cleanup: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        cleanup();
        previous(info);
    }));
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.log_level)?;

    let config = args.layout_config();
    let colors: Box<dyn ColorSource> = match args.seed {
        Some(seed) => Box::new(RandomColors::seeded(seed)),
        None => Box::new(RandomColors::new()),
    };
    let tree = PartitionTree::new(colors, config.min_share);
    let mut app = App::new(tree, config);
    tracing::info!(seed = ?args.seed, "starting");

    // UI setup
    let mut terminal = ratatui::init();
    chain_panic_hook(release_mouse);
    let result = execute!(io::stdout(), EnableMouseCapture)
        .map_err(Report::from)
        .and_then(|()| app.run_loop(&mut terminal));

    release_mouse();
    ratatui::restore();
    tracing::info!("exiting");
    result
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    use super::*;
    use crate::partition::color::FixedColors;
    use crate::partition::{Orientation, PanelId};

    fn app() -> App {
        let config = LayoutConfig::default();
        let tree = PartitionTree::new(Box::new(FixedColors::counting()), config.min_share);
        App::new(tree, config)
    }

    fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) {
        terminal.draw(|f| app.draw(f)).unwrap();
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn click(app: &mut App, target: &Target) {
        let rect = target.rect();
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y));
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), rect.x, rect.y));
    }

    fn button(app: &App, id: &str, action: Action) -> Target {
        app.hits()
            .iter()
            .find(|t| {
                matches!(t, Target::Button { id: tid, action: a, .. } if tid.as_str() == id && *a == action)
            })
            .cloned()
            .unwrap()
    }

    fn divider(app: &App, split: &str) -> Target {
        app.hits()
            .iter()
            .find(|t| matches!(t, Target::Divider { split: s, .. } if s.as_str() == split))
            .cloned()
            .unwrap()
    }

    #[test]
    fn root_fills_the_screen_above_the_status_bar() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        draw(&mut app, &mut terminal);

        let buf = terminal.backend().buffer();
        assert_eq!(buf.cell((0, 0)).unwrap().bg, Color::from_u32(1));
        assert_eq!(buf.cell((39, 10)).unwrap().bg, Color::from_u32(1));
        assert_eq!(buf.cell((0, 11)).unwrap().bg, Color::Gray);

        // V, H and - for the root only
        assert_eq!(app.hits().iter().count(), 3);
    }

    #[test]
    fn clicking_split_buttons_splits_the_leaf() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        draw(&mut app, &mut terminal);

        let v = button(&app, "root", Action::Split(Orientation::Vertical));
        click(&mut app, &v);

        let root = app.tree().root();
        assert_eq!(root.orientation(), Some(Orientation::Vertical));
        assert_eq!(root.sizes(), Some((50, 50)));
        // stale targets are dropped until the next draw
        assert!(app.hits().is_empty());

        draw(&mut app, &mut terminal);
        let h = button(&app, "root-2", Action::Split(Orientation::Horizontal));
        click(&mut app, &h);
        let leaves: Vec<&str> = app.tree().leaves().iter().map(|i| i.as_str()).collect();
        assert_eq!(leaves, ["root-1", "root-2-1", "root-2-2"]);
    }

    #[test]
    fn split_draws_children_side_by_side() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(41, 12)).unwrap();
        draw(&mut app, &mut terminal);
        let v = button(&app, "root", Action::Split(Orientation::Vertical));
        click(&mut app, &v);
        draw(&mut app, &mut terminal);

        let Target::Divider { rect, area, .. } = divider(&app, "root") else {
            unreachable!();
        };
        assert_eq!(rect.width, 1);
        assert_eq!(rect.height, 11);
        assert_eq!(area, ratatui::layout::Rect::new(0, 0, 41, 11));

        let buf = terminal.backend().buffer();
        assert_eq!(buf.cell((0, 5)).unwrap().bg, Color::from_u32(2));
        assert_eq!(buf.cell((40, 5)).unwrap().bg, Color::from_u32(3));
        assert_eq!(buf.cell((rect.x, 5)).unwrap().bg, Color::Gray);
    }

    #[test]
    fn dragging_a_divider_resizes_the_split() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(41, 12)).unwrap();
        draw(&mut app, &mut terminal);
        let v = button(&app, "root", Action::Split(Orientation::Vertical));
        click(&mut app, &v);
        draw(&mut app, &mut terminal);

        let rect = divider(&app, "root").rect();
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), rect.x, 3));
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 3));
        assert_eq!(app.tree().root().sizes(), Some((30, 70)));

        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 0, 3));
        assert_eq!(app.tree().root().sizes(), Some((5, 95)));

        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 3));
        app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 36, 3));
        assert_eq!(app.tree().root().sizes(), Some((5, 95)));
    }

    #[test]
    fn removing_a_leaf_collapses_its_parent() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        draw(&mut app, &mut terminal);
        let h = button(&app, "root", Action::Split(Orientation::Horizontal));
        click(&mut app, &h);
        draw(&mut app, &mut terminal);

        let remove = button(&app, "root-2", Action::Remove);
        click(&mut app, &remove);

        let root = app.tree().root();
        assert!(root.is_leaf());
        assert_eq!(root.id, PanelId::root());
        assert_eq!(root.color, Color::from_u32(2));
    }

    #[test]
    fn removing_the_root_does_nothing() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        draw(&mut app, &mut terminal);

        let remove = button(&app, "root", Action::Remove);
        click(&mut app, &remove);

        assert!(app.tree().root().is_leaf());
        assert_eq!(app.tree().len(), 1);
        // nothing changed, so the targets stay valid
        assert_eq!(app.hits().iter().count(), 3);
    }

    #[test]
    fn clicks_outside_targets_are_ignored() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        draw(&mut app, &mut terminal);

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0));
        assert_eq!(app.tree().len(), 1);
    }

    #[test]
    fn clicks_after_a_resize_wait_for_the_next_draw() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        draw(&mut app, &mut terminal);
        let v = button(&app, "root", Action::Split(Orientation::Vertical)).rect();

        app.handle_event(Event::Resize(20, 6));
        assert!(app.hits().is_empty());
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), v.x, v.y));
        assert_eq!(app.tree().leaves().len(), 1);

        terminal.backend_mut().resize(20, 6);
        draw(&mut app, &mut terminal);
        let v = button(&app, "root", Action::Split(Orientation::Vertical)).rect();
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), v.x, v.y));
        assert_eq!(app.tree().leaves().len(), 2);
    }

    #[test]
    fn panic_hook_runs_cleanup_first() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let cleaned = Arc::new(AtomicBool::new(false));
        let flag = cleaned.clone();
        chain_panic_hook(move || flag.store(true, Ordering::SeqCst));

        let result = panic::catch_unwind(|| -> u8 { panic!("boom") });
        // back to the default hook
        drop(panic::take_hook());

        assert!(result.is_err());
        assert!(cleaned.load(Ordering::SeqCst));
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        assert!(app.is_running());
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!app.is_running());
    }
}
