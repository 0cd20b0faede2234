//! src/partition/color.rs
//!
//! Display colors for partitions. Generation sits behind [`ColorSource`] so
//! the tree never reaches for a global random generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;

/// Produces a display color on demand.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Pseudo-random 24-bit colors.
#[derive(Debug)]
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        let value: u32 = self.rng.random_range(0..0xFF_FFFF);
        Color::from_u32(value)
    }
}

/// `#rrggbb` form of an RGB color; other colors fall back to their name.
pub fn hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        other => other.to_string(),
    }
}

/// Black or white, whichever reads better on `background`.
pub fn contrast(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) => {
            // ITU-R BT.601 luma
            let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
            if luma > 128_000 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => Color::White,
    }
}

/// Cycles through a fixed list of colors.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedColors {
    colors: Vec<Color>,
    next: usize,
}

#[cfg(test)]
impl FixedColors {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors, next: 0 }
    }

    /// `#000001`, `#000002`, ... in creation order.
    pub fn counting() -> Self {
        Self::new((1..=4096).map(Color::from_u32).collect())
    }
}

#[cfg(test)]
impl ColorSource for FixedColors {
    fn next_color(&mut self) -> Color {
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color
    }
}
