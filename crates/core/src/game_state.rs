//! Game state module - the per-session aggregate
//!
//! Ties together the map, player, obstacle, score and RNG. A frame is split in
//! two calls so the driver can poll input in between:
//!
//! 1. [`GameState::scroll`] - scroll the landscape and clear the play band
//! 2. [`GameState::tick`] - jump request, player advance, obstacle paint,
//!    collision-gated player draw, score
//!
//! Painting before the scroll would shift or erase the fresh entities, so
//! `tick` refuses to run unless `scroll` ran first in the same frame.

use crate::config::{ConfigError, GameConfig, Layout};
use crate::map::Map;
use crate::obstacle::Obstacle;
use crate::player::{DrawResult, Player};
use crate::rng::SimpleRng;
use crate::scoring::{frame_delay_ms, Progress};

/// What happened during one [`GameState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// A jump request was accepted this frame.
    pub jump_started: bool,
    /// The obstacle was painted this frame.
    pub obstacle_painted: bool,
    /// The player hit the obstacle; the game is over.
    pub collision: bool,
    /// Difficulty went up after this frame's score.
    pub difficulty_raised: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    layout: Layout,
    rng: SimpleRng,
    map: Map,
    player: Player,
    obstacle: Obstacle,
    progress: Progress,
    /// Completed (non-terminal) frames.
    frame: u64,
    scrolled: bool,
    game_over: bool,
}

impl GameState {
    /// Validate the config and build the initial landscape.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let layout = config.validate()?;
        let mut rng = SimpleRng::new(config.seed);
        let map = Map::generate(layout, &mut rng)?;
        let player = Player::new(
            layout.ground_row,
            config.player_column,
            config.rise_frames,
            config.hover_frames,
        );
        let obstacle = Obstacle::new(
            &layout,
            config.min_spawn_gap,
            config.max_spawn_gap,
            &mut rng,
        );

        log::info!(
            "session start: {}x{} seed {} delay {}ms",
            layout.width,
            layout.height,
            config.seed,
            config.frame_delay_ms
        );

        Ok(Self {
            progress: Progress::new(config.score_step),
            config,
            layout,
            rng,
            map,
            player,
            obstacle,
            frame: 0,
            scrolled: false,
            game_over: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn difficulty(&self) -> u32 {
        self.progress.difficulty()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Delay to sleep after the current frame.
    pub fn frame_delay_ms(&self) -> u64 {
        frame_delay_ms(self.config.frame_delay_ms, self.progress.difficulty())
    }

    /// Scroll the landscape one column and clear the play band.
    pub fn scroll(&mut self) {
        assert!(!self.game_over, "scroll after game over");
        self.map.scroll_left(&mut self.rng);
        self.map.clear_band();
        self.scrolled = true;
    }

    /// Advance the simulation for the rest of the frame.
    pub fn tick(&mut self, jump_requested: bool) -> FrameOutcome {
        assert!(!self.game_over, "tick after game over");
        assert!(self.scrolled, "tick without scroll in frame {}", self.frame);
        self.scrolled = false;

        let mut outcome = FrameOutcome {
            jump_started: jump_requested && self.player.request_jump(),
            ..FrameOutcome::default()
        };

        self.player.advance();
        outcome.obstacle_painted =
            self.obstacle
                .step(&mut self.map, &mut self.rng, self.progress.difficulty());

        if self.player.try_draw(&mut self.map) == DrawResult::Collision {
            self.game_over = true;
            outcome.collision = true;
            log::info!(
                "collision at frame {} ({} player, obstacle center {}), score {}",
                self.frame,
                self.player.phase().as_str(),
                self.obstacle.center() + 1,
                self.progress.score()
            );
            return outcome;
        }

        outcome.difficulty_raised = self.progress.advance();
        self.frame += 1;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellKind, JumpPhase, SCORE_STEP};

    fn state(gap: u32) -> GameState {
        let cfg = GameConfig::new(80, 32, 4)
            .with_frame_delay_ms(0)
            .with_spawn_gap(gap, gap);
        GameState::new(cfg).unwrap()
    }

    #[test]
    fn rejects_invalid_config_before_building() {
        let err = GameState::new(GameConfig::new(10, 10, 1)).unwrap_err();
        assert!(matches!(err, ConfigError::ViewportTooSmall { .. }));
    }

    #[test]
    #[should_panic(expected = "tick without scroll")]
    fn tick_requires_scroll() {
        let mut s = state(50);
        s.tick(false);
    }

    #[test]
    #[should_panic(expected = "tick without scroll")]
    fn scroll_is_needed_every_frame() {
        let mut s = state(50);
        s.scroll();
        s.tick(false);
        s.tick(false);
    }

    #[test]
    fn quiet_frame_draws_player_and_scores() {
        let mut s = state(50);
        s.scroll();
        let out = s.tick(false);
        assert!(!out.collision);
        assert!(!out.obstacle_painted);
        assert_eq!(s.score(), SCORE_STEP);
        assert_eq!(s.frame(), 1);

        let ground = s.layout().ground_row as usize;
        let col = s.player().column() as usize;
        assert!(s.map().get(ground, col).is_player());
        assert_eq!(s.map().get(ground - 2, col), CellKind::PlayerHead);
    }

    #[test]
    fn jump_request_is_forwarded_once() {
        let mut s = state(500);
        s.scroll();
        assert!(s.tick(true).jump_started);
        assert_eq!(s.player().phase(), JumpPhase::Ascending);
        assert_eq!(s.player().height(), 1);

        s.scroll();
        assert!(!s.tick(true).jump_started);
        assert_eq!(s.player().height(), 2);
    }

    #[test]
    fn collision_is_terminal_and_freezes_score() {
        let mut s = state(0);
        let mut frames = 0;
        while !s.game_over() {
            s.scroll();
            let out = s.tick(false);
            frames += 1;
            assert!(frames < 1000, "never collided");
            if out.collision {
                break;
            }
        }
        assert!(s.game_over());
        assert_eq!(s.score() as u64, s.frame() * SCORE_STEP as u64);
    }

    #[test]
    #[should_panic(expected = "after game over")]
    fn no_frames_after_game_over() {
        let mut s = state(0);
        while !s.game_over() {
            s.scroll();
            s.tick(false);
        }
        s.scroll();
    }

    #[test]
    fn band_is_redrawn_each_frame() {
        let mut s = state(500);
        for _ in 0..5 {
            s.scroll();
            s.tick(false);
        }
        let band = s.layout().band();
        let players = band
            .flat_map(|row| s.map().row(row as usize).to_vec())
            .filter(|k| k.is_player())
            .count();
        assert_eq!(players, 5);
    }
}
