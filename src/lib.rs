//! Scrolling colorized binary rain for the terminal.
//!
//! Each column of the terminal animates its own randomly drawn binary
//! number: one digit per frame, top to bottom, in a randomly assigned
//! color. Idle columns occasionally spawn a fresh number, governed by the
//! busyness tunable; the scroll speed tunable paces the frames.
//!
//! # Architecture
//!
//! - [`config`]: the two tunables (scroll speed, busyness)
//! - [`term`]: terminal width query and the ANSI color palette
//! - [`rain`]: the animation core — column state store and frame engine
//!
//! # Usage
//!
//! ```no_run
//! use std::io;
//! use std::sync::atomic::AtomicBool;
//!
//! use binrain::{Config, FrameEngine};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let rng = StdRng::seed_from_u64(7);
//! let mut engine = FrameEngine::new(binrain::term::width(), Config::default(), rng);
//! let stop = AtomicBool::new(false);
//! engine.run(&mut io::stdout().lock(), &stop).unwrap();
//! ```

pub mod config;
pub mod rain;
pub mod term;

pub use config::Config;
pub use rain::{ColumnMap, ColumnStream, EngineError, FrameEngine};
pub use term::{Color, RESET};
