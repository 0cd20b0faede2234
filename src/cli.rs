//! src/cli.rs
//!
//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::partition::LayoutConfig;

/// Split the terminal into resizable, recursively splittable panels.
///
/// Click V or H inside a panel to split it, - to remove it, and drag the
/// dividers to resize. Press q to quit.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Seed for panel colors; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest share (percent) a resize may leave to either side of a split.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(0..=50))]
    pub min_share: u16,

    /// Hide the id and color label on each panel.
    #[arg(long)]
    pub hide_ids: bool,

    /// Write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Maximum log level written to the log file.
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,
}

impl Args {
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::new(
            self.min_share,
            !self.hide_ids,
            LayoutConfig::default().frame_time,
        )
    }
}
