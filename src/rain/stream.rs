//! A single column's animated binary number.

use rand::Rng;

use crate::term::Color;

/// Range the stream's number is drawn from.
///
/// The low bound keeps every stream at least 4 digits tall, the high bound
/// caps it at 12. The range excludes 0, so a drawn stream always has at
/// least one digit (see [`ColumnStream::generate`]).
const VALUE_RANGE: std::ops::RangeInclusive<u32> = 8..=2048;

/// One in-flight binary number scrolling down a column.
///
/// `digits` never changes after creation; `position` walks it front to
/// back, one digit per tick. The color is assigned at birth and kept for
/// the stream's whole lifetime.
#[derive(Debug, Clone)]
pub struct ColumnStream {
    digits: String,
    position: usize,
    color: Color,
}

impl ColumnStream {
    /// Draws a fresh stream from `rng`.
    ///
    /// Returns `None` when the drawn value converts to an empty digit
    /// string. The draw range excludes 0, so that only happens if the
    /// range is ever widened; skipping creation keeps an exhausted-at-birth
    /// stream out of the column map.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        let digits = binary_digits(rng.gen_range(VALUE_RANGE));
        if digits.is_empty() {
            return None;
        }
        Some(Self {
            digits,
            position: 0,
            color: Color::random(rng),
        })
    }

    /// The digit under the cursor.
    pub fn current_digit(&self) -> char {
        self.digits.as_bytes()[self.position] as char
    }

    /// The full digit string, most significant digit first.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Zero-based cursor into the digit string.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The stream's fixed color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Moves the cursor past the digit just rendered.
    ///
    /// Returns `true` when that digit was the last one and the stream
    /// should be retired from the map.
    pub(crate) fn advance(&mut self) -> bool {
        self.position += 1;
        self.position == self.digits.len()
    }
}

/// Binary representation of `value`, most significant digit first.
///
/// No leading zeros; 0 converts to the empty string.
fn binary_digits(mut value: u32) -> String {
    let mut digits = String::new();
    while value > 0 {
        digits.insert(0, if value % 2 == 1 { '1' } else { '0' });
        value /= 2;
    }
    digits
}
