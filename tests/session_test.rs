//! Integration tests for whole sessions and the scrolling landscape.

use crossterm::event::KeyCode;

use tui_runner::core::{ConfigError, GameConfig, GameState};
use tui_runner::engine::{run_session, NoSleep};
use tui_runner::input::ScriptedKeys;
use tui_runner::term::MemorySink;
use tui_runner::types::{CellKind, EndCause, MIN_FRAME_DELAY_MS};

fn play(seed: u32, jumps: &[u64]) -> (tui_runner::engine::SessionOutcome, MemorySink) {
    let config = GameConfig::new(72, 24, seed).with_frame_delay_ms(0);
    let mut keys = ScriptedKeys::new();
    for &frame in jumps {
        keys = keys.press_at(frame, KeyCode::Char(' '));
    }
    let mut sink = MemorySink::new();
    let out = run_session(config, keys, &mut sink, NoSleep::new()).unwrap();
    (out, sink)
}

#[test]
fn same_seed_and_keys_replay_identically() {
    let jumps = [30, 55, 90, 140];
    let (a, sink_a) = play(2024, &jumps);
    let (b, sink_b) = play(2024, &jumps);
    assert_eq!(a, b);
    assert_eq!(sink_a.frames(), sink_b.frames());
}

#[test]
fn different_seeds_give_different_landscapes() {
    let a = GameState::new(GameConfig::new(72, 24, 1)).unwrap();
    let b = GameState::new(GameConfig::new(72, 24, 2)).unwrap();
    assert_ne!(a.map().to_lines(), b.map().to_lines());
}

#[test]
fn every_session_ends_in_a_collision_without_input() {
    for seed in 0..20 {
        let (out, _) = play(seed, &[]);
        assert_eq!(out.cause, EndCause::Collision);
        assert_eq!(out.score as u64, out.frames * 2);
    }
}

#[test]
fn scrolling_shifts_rows_left_and_keeps_surface() {
    let config = GameConfig::new(60, 20, 99).with_frame_delay_ms(0);
    let mut gs = GameState::new(config).unwrap();
    let surface = gs.layout().surface_row as usize;
    let band = gs.layout().band();

    for _ in 0..50 {
        let before = gs.map().to_lines();
        gs.scroll();
        let after = gs.map().to_lines();

        for (row, (b, a)) in before.iter().zip(&after).enumerate() {
            assert_eq!(a.chars().count(), 60);
            if band.contains(&(row as u16)) {
                assert!(a.chars().all(|c| c == ' '), "band not cleared: {:?}", a);
            } else {
                let shifted: String = b.chars().skip(1).collect();
                assert_eq!(&a[..59], shifted.as_str(), "row {}", row);
            }
        }
        assert_eq!(
            gs.map().get(surface, 59),
            CellKind::Surface,
            "surface edge after scroll"
        );

        let _ = gs.tick(false);
        if gs.game_over() {
            break;
        }
    }
}

#[test]
fn sky_holds_only_stars_and_ground_only_grass_or_gravel() {
    let mut gs = GameState::new(GameConfig::new(50, 30, 5).with_frame_delay_ms(0)).unwrap();
    for _ in 0..80 {
        gs.scroll();
        let _ = gs.tick(false);
        if gs.game_over() {
            break;
        }
    }
    let layout = *gs.layout();
    for row in 0..layout.height {
        let cells = gs.map().row(row as usize);
        if layout.is_sky_row(row) {
            assert!(cells
                .iter()
                .all(|&k| matches!(k, CellKind::Empty | CellKind::Star)));
        } else if layout.is_ground_row(row) {
            assert!(cells
                .iter()
                .all(|&k| matches!(k, CellKind::Grass | CellKind::Gravel)));
        } else if row == layout.surface_row {
            assert!(cells.iter().all(|&k| k == CellKind::Surface));
        }
    }
}

#[test]
fn long_runs_speed_up_but_respect_the_floor() {
    let config = GameConfig::new(80, 32, 1)
        .with_frame_delay_ms(12)
        .with_spawn_gap(2000, 2000);
    let keys = ScriptedKeys::new().press_at(1900, KeyCode::Esc);
    let mut sleeper = NoSleep::new();
    let out = run_session(config, keys, MemorySink::without_hud(), &mut sleeper).unwrap();

    assert_eq!(out.cause, EndCause::Quit);
    let delays = sleeper.requested();
    assert_eq!(delays.first(), Some(&12));
    assert!(delays.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(delays.last(), Some(&MIN_FRAME_DELAY_MS));
}

#[test]
fn invalid_configs_are_refused() {
    let too_small = GameState::new(GameConfig::new(20, 10, 1)).unwrap_err();
    assert!(matches!(too_small, ConfigError::ViewportTooSmall { .. }));
    assert_eq!(too_small.code(), "viewport_too_small");

    let inverted = GameState::new(GameConfig::new(80, 32, 1).with_spawn_gap(9, 3)).unwrap_err();
    assert!(matches!(inverted, ConfigError::SpawnGapInverted { min: 9, max: 3 }));

    let high = GameState::new(GameConfig::new(80, 32, 1).with_jump(40, 1)).unwrap_err();
    assert!(matches!(high, ConfigError::InvalidJump { .. }));

    let slow = GameState::new(GameConfig::new(80, 32, 1).with_frame_delay_ms(u64::MAX / 10))
        .unwrap_err();
    assert!(matches!(slow, ConfigError::FrameDelayTooLong { .. }));
}

#[test]
fn full_range_spawn_gap_draws_without_overflow() {
    let config = GameConfig::new(80, 32, 3)
        .with_frame_delay_ms(0)
        .with_spawn_gap(0, u32::MAX);
    let mut gs = GameState::new(config).unwrap();
    for _ in 0..20 {
        gs.scroll();
        let _ = gs.tick(false);
        if gs.game_over() {
            break;
        }
    }
    assert!(gs.frame() > 0);
}
