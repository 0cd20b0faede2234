//! src/lib.rs
//!
//! Recursively splittable, resizable panel layout for the terminal.

pub mod app;
pub mod cli;
pub mod logging;
pub mod panels;
pub mod partition;
pub mod ui;
