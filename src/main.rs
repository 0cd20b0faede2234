//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

fn main() -> color_eyre::Result<()> {
    partition_tui::app::run()
}
