//! Shared helpers for integration tests.

use binrain::FrameEngine;
use rand::Rng;

/// Strips ANSI escape sequences (`ESC` up to the terminating letter) from
/// `line`, leaving only the visible characters.
pub fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for esc in chars.by_ref() {
                if esc.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Number of visible characters in `line` once escapes are stripped.
pub fn visible_width(line: &str) -> usize {
    strip_ansi(line).chars().count()
}

/// Runs one tick and returns the rendered line as a string.
pub fn tick_line<R: Rng>(engine: &mut FrameEngine<R>) -> String {
    let mut buf = Vec::new();
    engine.tick(&mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("output is valid UTF-8")
}
