//! Entry point: wires interrupt handling, width discovery, and the engine.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use binrain::{term, Config, FrameEngine};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::Relaxed))?;

    let width = term::width();
    let mut engine = FrameEngine::new(width, Config::default(), StdRng::from_entropy());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    engine.run(&mut out, &stop)?;
    Ok(())
}
