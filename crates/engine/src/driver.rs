//! The fixed per-frame game loop.
//!
//! One iteration is one frame:
//!
//! 1. render the current state to the [`FrameSink`]
//! 2. scroll the landscape and clear the play band
//! 3. poll at most one key (quit ends the session, jump requests a jump)
//! 4. advance the player, step the obstacle, collision-gated draw, score
//! 5. sleep the frame delay, unless the frame ended the game
//!
//! The key source is polled exactly once per frame, so scripted keys line up
//! with frame numbers.

use anyhow::{Context, Result};

use crate::core::{GameConfig, GameState};
use crate::input::{handle_key_event, KeySource};
use crate::sleep::Sleeper;
use crate::term::FrameSink;
use crate::types::{EndCause, GameAction};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub score: u32,
    /// Frames completed before the session ended.
    pub frames: u64,
    pub cause: EndCause,
}

/// Run one session from a fresh [`GameState`] until collision or quit.
///
/// An invalid config is refused before anything is rendered.
pub fn run_session<K, F, S>(
    config: GameConfig,
    keys: K,
    sink: F,
    sleeper: S,
) -> Result<SessionOutcome>
where
    K: KeySource,
    F: FrameSink,
    S: Sleeper,
{
    let state = GameState::new(config).context("invalid game configuration")?;
    run_state(state, keys, sink, sleeper)
}

/// Drive an existing state to the end of its session.
pub fn run_state<K, F, S>(
    mut state: GameState,
    mut keys: K,
    mut sink: F,
    mut sleeper: S,
) -> Result<SessionOutcome>
where
    K: KeySource,
    F: FrameSink,
    S: Sleeper,
{
    loop {
        sink.write_frame(&state)
            .with_context(|| format!("render frame {}", state.frame()))?;

        state.scroll();

        let mut jump = false;
        if let Some(key) = keys.poll_key().context("poll keyboard")? {
            match handle_key_event(key) {
                Some(GameAction::Quit) => {
                    return Ok(finish(&state, EndCause::Quit));
                }
                Some(GameAction::Jump) => jump = true,
                Some(action @ GameAction::Restart) => {
                    log::debug!("{} ignored in frame {}", action.as_str(), state.frame());
                }
                None => {}
            }
        }

        let outcome = state.tick(jump);
        if outcome.collision {
            // Show the crash: obstacle painted, player not drawn.
            sink.write_frame(&state).context("render final frame")?;
            return Ok(finish(&state, EndCause::Collision));
        }

        sleeper.sleep_millis(state.frame_delay_ms());
    }
}

fn finish(state: &GameState, cause: EndCause) -> SessionOutcome {
    let outcome = SessionOutcome {
        score: state.score(),
        frames: state.frame(),
        cause,
    };
    log::info!(
        "session end: {:?} after {} frames, score {}",
        outcome.cause,
        outcome.frames,
        outcome.score
    );
    outcome
}

/// Wait on the game-over screen for a restart or quit key.
///
/// Keys queued while the player was still playing (usually jump presses) are
/// dropped first; a pending restart or quit key is left in place and answered.
/// Returns `true` to start a new session.
pub fn await_restart<K, S>(mut keys: K, mut sleeper: S, poll_ms: u64) -> Result<bool>
where
    K: KeySource,
    S: Sleeper,
{
    while let Some(key) = keys.peek_key()? {
        if matches!(
            handle_key_event(key),
            Some(GameAction::Restart | GameAction::Quit)
        ) {
            break;
        }
        keys.poll_key()?;
    }

    loop {
        match keys.poll_key()?.and_then(handle_key_event) {
            Some(GameAction::Restart) => return Ok(true),
            Some(GameAction::Quit) => return Ok(false),
            Some(GameAction::Jump) | None => sleeper.sleep_millis(poll_ms),
        }
    }
}
