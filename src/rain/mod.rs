//! The animation core.
//!
//! One binary number animates per terminal column, one digit per tick:
//!
//! - `stream`: a column's in-flight binary number (digits, cursor, color)
//! - `columns`: the sparse column-to-stream store and its per-tick fill
//! - `engine`: frame rendering, state advancement, and the pacing loop
//! - `error`: failure surface (output errors only)

pub mod columns;
pub mod engine;
pub mod error;
pub mod stream;

pub use columns::ColumnMap;
pub use engine::FrameEngine;
pub use error::EngineError;
pub use stream::ColumnStream;
