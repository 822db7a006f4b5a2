//! Sparse store of in-flight streams, keyed by column index.

use std::collections::HashMap;

use rand::Rng;

use crate::rain::stream::ColumnStream;

/// Maps column index to the stream animating there.
///
/// Columns with no entry render as blanks. Every stored stream has at
/// least one digit left to show; streams are removed the tick their last
/// digit renders.
#[derive(Debug, Default)]
pub struct ColumnMap {
    streams: HashMap<usize, ColumnStream>,
}

impl ColumnMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives every empty column a chance to start a new stream.
    ///
    /// Each column in `0..width` with no entry runs one Bernoulli trial
    /// with success probability `busyness`; winners get a freshly drawn
    /// stream. Occupied columns are left untouched.
    pub fn fill<R: Rng + ?Sized>(&mut self, width: usize, busyness: f64, rng: &mut R) {
        for col in 0..width {
            if self.streams.contains_key(&col) {
                continue;
            }
            if rng.gen_bool(busyness) {
                if let Some(stream) = ColumnStream::generate(rng) {
                    tracing::trace!(
                        col,
                        digits = stream.digits(),
                        color = ?stream.color(),
                        "stream spawned"
                    );
                    self.streams.insert(col, stream);
                }
            }
        }
    }

    /// The stream at `col`, if one is animating.
    pub fn get(&self, col: usize) -> Option<&ColumnStream> {
        self.streams.get(&col)
    }

    pub(crate) fn get_mut(&mut self, col: usize) -> Option<&mut ColumnStream> {
        self.streams.get_mut(&col)
    }

    pub(crate) fn remove(&mut self, col: usize) {
        self.streams.remove(&col);
    }

    /// Number of columns currently animating.
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// True when no column is animating.
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Iterates over `(column, stream)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ColumnStream)> {
        self.streams.iter().map(|(&col, stream)| (col, stream))
    }
}
