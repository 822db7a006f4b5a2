//! End-to-end frame engine behavior.

use std::time::Duration;

use binrain::{Color, Config, FrameEngine, RESET};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::helpers::{strip_ansi, tick_line, visible_width};

fn config(busyness: f64) -> Config {
    Config::new(Duration::ZERO, busyness)
}

#[test]
fn every_line_shows_exactly_width_visible_characters() {
    let mut engine = FrameEngine::new(23, config(0.3), StdRng::seed_from_u64(42));

    for tick in 0..100 {
        let line = tick_line(&mut engine);
        let line = line.strip_suffix('\n').expect("line terminator");
        assert_eq!(visible_width(line), 23, "tick {}", tick);
    }
}

#[test]
fn zero_busyness_renders_blank_lines_indefinitely() {
    let mut engine = FrameEngine::new(3, config(0.0), StdRng::seed_from_u64(5));

    for _ in 0..25 {
        assert_eq!(tick_line(&mut engine), "   \n");
    }
    assert!(engine.columns().is_empty());
}

#[test]
fn full_busyness_fills_every_column() {
    let mut engine = FrameEngine::new(12, config(1.0), StdRng::seed_from_u64(6));

    let line = tick_line(&mut engine);
    let visible = strip_ansi(line.trim_end_matches('\n'));

    assert_eq!(visible.len(), 12);
    assert!(visible.chars().all(|c| c == '0' || c == '1'));
}

#[test]
fn seeded_runs_are_reproducible() {
    let mut first = FrameEngine::new(40, config(0.1), StdRng::seed_from_u64(1234));
    let mut second = FrameEngine::new(40, config(0.1), StdRng::seed_from_u64(1234));

    for tick in 0..200 {
        assert_eq!(
            tick_line(&mut first),
            tick_line(&mut second),
            "diverged at tick {}",
            tick
        );
    }
}

#[test]
fn cursor_invariant_holds_after_every_tick() {
    let mut engine = FrameEngine::new(30, config(0.25), StdRng::seed_from_u64(77));

    for _ in 0..150 {
        tick_line(&mut engine);
        for (col, stream) in engine.columns().iter() {
            assert!(
                stream.position() < stream.digits().len(),
                "column {} cursor out of range",
                col
            );
        }
    }
}

#[test]
fn fixed_draws_render_the_documented_cycle() {
    // All-zero rng: every draw is the range minimum, so each stream is a
    // red "1000". Four ticks drain it; the fifth respawns and repeats.
    let mut engine = FrameEngine::new(5, config(1.0), StepRng::new(0, 0));
    let line = |digit: char| format!("{}{}{}", Color::Red.code(), digit, RESET).repeat(5) + "\n";

    assert_eq!(tick_line(&mut engine), line('1'));
    assert_eq!(tick_line(&mut engine), line('0'));
    assert_eq!(tick_line(&mut engine), line('0'));
    assert_eq!(tick_line(&mut engine), line('0'));
    assert_eq!(tick_line(&mut engine), line('1'));
}

#[test]
fn streams_never_survive_their_last_digit() {
    let mut engine = FrameEngine::new(8, config(1.0), StepRng::new(0, 0));

    for _ in 0..3 {
        tick_line(&mut engine);
        assert_eq!(engine.columns().len(), 8);
    }

    // The fourth tick renders the final digit and retires every stream.
    tick_line(&mut engine);
    assert!(engine.columns().is_empty());
}
