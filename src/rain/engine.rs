//! Frame generation and pacing.
//!
//! `FrameEngine` owns all mutable animation state: the column map, the
//! fixed terminal width, the tunables, and the random source. Each tick
//! fills idle columns, emits one output line, and advances every visible
//! stream.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use rand::Rng;

use crate::config::Config;
use crate::rain::columns::ColumnMap;
use crate::rain::error::EngineError;
use crate::term::color;

/// Drives the animation: fill, render, advance, sleep.
#[derive(Debug)]
pub struct FrameEngine<R> {
    columns: ColumnMap,
    width: usize,
    config: Config,
    rng: R,
}

impl<R: Rng> FrameEngine<R> {
    /// Creates an engine for a terminal `width` columns wide.
    pub fn new(width: usize, config: Config, rng: R) -> Self {
        Self {
            columns: ColumnMap::new(),
            width,
            config,
            rng,
        }
    }

    /// The column state store.
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Runs one full tick: fill idle columns, then render one line to
    /// `out`.
    pub fn tick(&mut self, out: &mut impl Write) -> Result<(), EngineError> {
        self.columns
            .fill(self.width, self.config.busyness, &mut self.rng);
        self.render_tick(out)
    }

    /// Emits one character per column, then advances or retires streams.
    ///
    /// A column with a stream renders the digit under its cursor wrapped
    /// in the stream's color code and a reset, with no separators; an idle
    /// column renders a single space. The line is flushed immediately so
    /// the frame is visible before the inter-tick sleep.
    pub fn render_tick(&mut self, out: &mut impl Write) -> Result<(), EngineError> {
        for col in 0..self.width {
            let exhausted = match self.columns.get_mut(col) {
                Some(stream) => {
                    write!(
                        out,
                        "{}{}{}",
                        stream.color().code(),
                        stream.current_digit(),
                        color::RESET
                    )?;
                    stream.advance()
                }
                None => {
                    out.write_all(b" ")?;
                    false
                }
            };
            if exhausted {
                self.columns.remove(col);
            }
        }
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    /// Loops tick + sleep until `stop` is raised or the output dies.
    ///
    /// `stop` is checked once per frame, so an interrupt lands within one
    /// scroll-speed delay. The animation has no exit condition of its own.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self, out: &mut impl Write, stop: &AtomicBool) -> Result<(), EngineError> {
        tracing::debug!(
            width = self.width,
            busyness = self.config.busyness,
            scroll_speed_ms = self.config.scroll_speed.as_millis() as u64,
            "starting animation loop"
        );
        while !stop.load(Ordering::Relaxed) {
            self.tick(out)?;
            thread::sleep(self.config.scroll_speed);
        }
        Ok(())
    }
}
