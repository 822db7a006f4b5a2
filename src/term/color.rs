//! ANSI color palette for the rain effect.
//!
//! Streams draw from the five bright foreground colors. The reset sequence
//! closes every styled cell and is never eligible for random selection.

use rand::Rng;

/// Escape sequence that returns the terminal to its default style.
pub const RESET: &str = "\x1b[0m";

/// Foreground colors a stream can be born with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
}

impl Color {
    /// Every color eligible for random selection.
    pub const PALETTE: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
    ];

    /// The escape sequence that switches the foreground to this color.
    pub fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[91m",
            Color::Green => "\x1b[92m",
            Color::Yellow => "\x1b[93m",
            Color::Blue => "\x1b[94m",
            Color::Magenta => "\x1b[95m",
        }
    }

    /// Draws a color uniformly from the palette.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::PALETTE[rng.gen_range(0..Self::PALETTE.len())]
    }
}
