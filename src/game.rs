//! Round driver
//!
//! Owns the world state plus the platform seams and runs one display frame
//! at a time: compose the frame, advance the simulation, then handle a round
//! end (persist best score, notify, reset). Platforms only schedule
//! [`Game::frame`] and forward key events.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::best_score::BestScore;
use crate::config::GameConfig;
use crate::platform::{Notifier, Storage};
use crate::renderer::{Frame, compose};
use crate::sim::{Autopilot, GameState, Key, KeyEdge, RoundOutcome, apply_key, tick};

/// Loss notification text
pub const GAME_OVER_MESSAGE: &str = "GAME OVER";
/// Win notification text
pub const WIN_MESSAGE: &str = "YOU WIN!";

pub struct Game<S: Storage, N: Notifier> {
    /// Current round
    pub state: GameState,
    config: GameConfig,
    storage: S,
    notifier: N,
    /// Source of per-round seeds
    rng: Pcg32,
    /// 1-based round counter
    round: u32,
}

impl<S: Storage, N: Notifier> Game<S, N> {
    /// Start the first round; `seed` makes the whole run reproducible
    pub fn new(config: GameConfig, surface: Vec2, storage: S, notifier: N, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = Self::start_round(&config, surface, &storage, &mut rng);
        log::info!(
            "Round 1 started ({}x{}, seed {}, best {})",
            surface.x,
            surface.y,
            state.seed,
            state.best_score
        );

        Self {
            state,
            config,
            storage,
            notifier,
            rng,
            round: 1,
        }
    }

    fn start_round(config: &GameConfig, surface: Vec2, storage: &S, rng: &mut Pcg32) -> GameState {
        let best = BestScore::load(storage);
        GameState::new(config, surface, best.value, rng.next_u64())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Forward a key edge to the paddle
    pub fn key(&mut self, key: Key, edge: KeyEdge) {
        apply_key(&mut self.state.paddle, key, edge);
    }

    /// One display frame: compose from the current state, then update
    ///
    /// The returned frame shows the state before this frame's update.
    pub fn frame(&mut self) -> (Frame, Option<RoundOutcome>) {
        let frame = compose(&self.state);
        let outcome = self.update();
        (frame, outcome)
    }

    /// One display frame, presenting the composed frame before the update
    ///
    /// `present` runs exactly once, before any round-end notification.
    pub fn frame_with(&mut self, present: impl FnOnce(&Frame)) -> Option<RoundOutcome> {
        let frame = compose(&self.state);
        present(&frame);
        self.update()
    }

    /// Advance one frame and handle a round end
    pub fn update(&mut self) -> Option<RoundOutcome> {
        let outcome = tick(&mut self.state)?;
        self.finish_round(outcome);
        Some(outcome)
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        log::info!(
            "Round {} ended: {:?} (score {}, best {}, {} frames)",
            self.round,
            outcome,
            self.state.score,
            self.state.best_score,
            self.state.time_ticks
        );

        match outcome {
            RoundOutcome::Lost { new_best } => {
                if new_best {
                    BestScore::new(self.state.best_score).save(&mut self.storage);
                }
                self.notifier.notify(GAME_OVER_MESSAGE);
            }
            RoundOutcome::Won => {
                self.notifier.notify(WIN_MESSAGE);
            }
        }

        self.reset();
    }

    /// Throw the round away and start over from the initial layout
    ///
    /// The best score is re-read from storage; held keys are forgotten.
    pub fn reset(&mut self) {
        self.state = Self::start_round(&self.config, self.state.surface, &self.storage, &mut self.rng);
        self.round += 1;
        log::info!(
            "Round {} started (seed {}, best {})",
            self.round,
            self.state.seed,
            self.state.best_score
        );
    }
}

/// Totals from a headless run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    /// Rounds cut off at the frame cap
    pub abandoned: u32,
    pub frames: u64,
}

/// Play `rounds` rounds back-to-back with the autopilot
///
/// A round that runs past `max_frames` (the ball can settle into a loop that
/// never reaches the remaining bricks) is abandoned and reset.
pub fn run_headless<S: Storage, N: Notifier>(
    game: &mut Game<S, N>,
    pilot: &mut Autopilot,
    rounds: u32,
    max_frames: u64,
) -> RunSummary {
    let mut summary = RunSummary::default();

    while summary.rounds < rounds {
        for (key, edge) in pilot.steer(&game.state) {
            game.key(key, edge);
        }

        let (_frame, outcome) = game.frame();
        summary.frames += 1;

        match outcome {
            Some(RoundOutcome::Won) => summary.wins += 1,
            Some(RoundOutcome::Lost { .. }) => summary.losses += 1,
            None if game.state.time_ticks >= max_frames => {
                log::warn!(
                    "Round {} abandoned after {} frames (score {})",
                    game.round(),
                    game.state.time_ticks,
                    game.state.score
                );
                game.reset();
                summary.abandoned += 1;
            }
            None => continue,
        }

        pilot.reset();
        summary.rounds += 1;
    }

    summary
}
