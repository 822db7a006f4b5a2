//! Animation tunables.
//!
//! The two knobs the effect exposes: how long to pause between frames and
//! how busy the screen looks. Both are fixed for the lifetime of a run;
//! there are no flags, config files, or environment variables.

use std::time::Duration;

/// Default pause between frames.
const DEFAULT_SCROLL_SPEED: Duration = Duration::from_millis(150);

/// Default per-column, per-tick spawn probability.
const DEFAULT_BUSYNESS: f64 = 0.02;

/// Animation configuration.
///
/// `busyness` is a probability in `[0, 1]`: 0 leaves the screen blank,
/// 1 fills every empty column on every tick.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Pause between frames.
    pub scroll_speed: Duration,
    /// Probability that an idle column spawns a stream on a given tick.
    pub busyness: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_speed: DEFAULT_SCROLL_SPEED,
            busyness: DEFAULT_BUSYNESS,
        }
    }
}

impl Config {
    /// Creates a new Config, clamping `busyness` into `[0, 1]`.
    pub fn new(scroll_speed: Duration, busyness: f64) -> Self {
        Self {
            scroll_speed,
            busyness: busyness.clamp(0.0, 1.0),
        }
    }
}
