//! Animation failure surface.

/// Errors that can occur while driving the animation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The output stream rejected a write or flush. There is no recovery
    /// once the terminal or pipe is gone, so this ends the run.
    #[error("terminal output failed: {0}")]
    Output(#[from] std::io::Error),
}
