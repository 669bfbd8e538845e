//! An episodic environment around [`CubeState`], exposing the reset/step/observe contract a
//! training loop drives. Actions are the discrete indices of [`QuarterTurn::ALL`].

use crate::cube::{CubeState, QuarterTurn};
use crate::error::CubeError;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Settings for a [`CubeEnv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvConfig {
    /// Edge length N of the cube.
    pub size: usize,
    /// Number of random quarter turns applied by [`CubeEnv::reset`].
    pub scramble_moves: usize,
    /// Steps after which an unsolved episode is truncated. `None` never truncates.
    pub max_episode_steps: Option<usize>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        EnvConfig {
            size: 3,
            scramble_moves: 10,
            max_episode_steps: Some(500),
        }
    }
}

/// The outcome of a single [`CubeEnv::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Facelet vector after the move.
    pub observation: Vec<u8>,
    /// 1.0 if the move solved the cube, else 0.0.
    pub reward: f32,
    /// Whether the cube is solved.
    pub terminated: bool,
    /// Whether the episode hit its step limit without being solved.
    pub truncated: bool,
}

/// A cube environment owning its random source. Scrambles draw from `rng`, so a seeded
/// generator makes whole episodes reproducible.
#[derive(Debug, Clone)]
pub struct CubeEnv<R> {
    config: EnvConfig,
    cube: CubeState,
    rng: R,
    steps: usize,
}

impl CubeEnv<StdRng> {
    /// An environment scrambling from operating system entropy.
    pub fn from_entropy(config: EnvConfig) -> Self {
        CubeEnv::new(config, StdRng::from_entropy())
    }

    /// An environment with a reproducible scramble source.
    pub fn seeded(config: EnvConfig, seed: u64) -> Self {
        CubeEnv::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CubeEnv<R> {
    /// Number of discrete actions.
    pub const ACTION_COUNT: usize = QuarterTurn::ALL.len();

    /// Create an environment holding a solved cube. Call [`reset`](Self::reset) to start an
    /// episode.
    pub fn new(config: EnvConfig, rng: R) -> Self {
        CubeEnv {
            cube: CubeState::solved(config.size),
            config,
            rng,
            steps: 0,
        }
    }

    /// Start an episode from a cube scrambled with the configured number of moves.
    pub fn reset(&mut self) -> &[u8] {
        self.reset_with(self.config.scramble_moves)
    }

    /// Start an episode from a cube scrambled with `scramble_moves` moves.
    pub fn reset_with(&mut self, scramble_moves: usize) -> &[u8] {
        self.cube = CubeState::scrambled(self.config.size, scramble_moves, &mut self.rng);
        self.steps = 0;
        debug!(
            "reset episode with {} scramble moves, solved: {}",
            scramble_moves,
            self.cube.is_solved()
        );
        self.cube.facelets()
    }

    /// Apply the quarter turn with the given action index. An invalid index fails with
    /// [`CubeError::InvalidAction`] without using up a step.
    pub fn step(&mut self, action: usize) -> Result<Step, CubeError> {
        let mv = QuarterTurn::from_action(action)?;
        self.cube.apply_move(mv);
        self.steps += 1;

        let terminated = self.cube.is_solved();
        let truncated = !terminated
            && self
                .config
                .max_episode_steps
                .is_some_and(|max| self.steps >= max);
        trace!("step {}: {} (solved: {})", self.steps, mv, terminated);
        if terminated || truncated {
            debug!(
                "episode ended after {} steps, solved: {}",
                self.steps, terminated
            );
        }

        Ok(Step {
            observation: self.cube.facelets().to_vec(),
            reward: if terminated { 1.0 } else { 0.0 },
            terminated,
            truncated,
        })
    }

    /// The current facelet vector.
    pub fn observation(&self) -> &[u8] {
        self.cube.facelets()
    }

    /// Length of every observation, 6·N².
    pub fn observation_len(&self) -> usize {
        6 * self.config.size * self.config.size
    }

    /// The cube being played.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// The environment's settings.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Steps taken since the last reset.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    #[test_log::test]
    fn reset_scrambles_and_inverse_action_solves() {
        let mut env = CubeEnv::seeded(
            EnvConfig {
                scramble_moves: 1,
                ..EnvConfig::default()
            },
            11,
        );
        let obs = env.reset().to_vec();
        assert_eq!(obs.len(), env.observation_len());
        assert!(!env.cube().is_solved());

        // Find the single move that undoes the scramble.
        let undo = QuarterTurn::ALL
            .into_iter()
            .find(|&mv| {
                let mut cube = env.cube().clone();
                cube.apply_move(mv);
                cube.is_solved()
            })
            .unwrap();
        let step = env.step(undo.action()).unwrap();
        assert!(step.terminated);
        assert!(!step.truncated);
        assert_eq!(step.reward, 1.0);
        assert_eq!(step.observation, CubeState::solved(3).into_facelets());
    }

    #[test_log::test]
    fn step_reward_tracks_solved_state() {
        let mut env = CubeEnv::seeded(EnvConfig::default(), 0);
        env.reset_with(0);
        assert!(env.cube().is_solved());

        let turn = QuarterTurn::ALL[4];
        let step = env.step(turn.action()).unwrap();
        assert!(!step.terminated);
        assert_eq!(step.reward, 0.0);

        let step = env.step(turn.inverse().action()).unwrap();
        assert!(step.terminated);
        assert_eq!(step.reward, 1.0);
        assert_eq!(env.steps(), 2);
    }

    #[test]
    fn invalid_action_leaves_cube_unchanged() {
        let mut env = CubeEnv::seeded(EnvConfig::default(), 5);
        env.reset();
        let before = env.cube().clone();
        assert_eq!(env.step(12), Err(CubeError::InvalidAction(12)));
        assert_eq!(env.cube(), &before);
        assert_eq!(env.steps(), 0);
    }

    #[test]
    fn same_seed_same_episode() {
        let config = EnvConfig {
            size: 4,
            scramble_moves: 25,
            max_episode_steps: None,
        };
        let mut a = CubeEnv::seeded(config, 99);
        let mut b = CubeEnv::seeded(config, 99);
        assert_eq!(a.reset(), b.reset());
        for action in [0, 5, 11, 3] {
            assert_eq!(a.step(action), b.step(action));
        }
    }

    #[test]
    fn truncates_at_step_limit() {
        let config = EnvConfig {
            size: 3,
            scramble_moves: 0,
            max_episode_steps: Some(3),
        };
        let mut env = CubeEnv::seeded(config, 1);
        env.reset();

        // R R R leaves the cube one R' away from solved.
        assert!(!env.step(6).unwrap().truncated);
        assert!(!env.step(6).unwrap().truncated);
        let last = env.step(6).unwrap();
        assert!(last.truncated);
        assert!(!last.terminated);
    }

    #[test]
    fn solving_on_the_last_step_is_not_truncation() {
        let config = EnvConfig {
            size: 2,
            scramble_moves: 0,
            max_episode_steps: Some(4),
        };
        let mut env = CubeEnv::seeded(config, 1);
        env.reset();
        for _ in 0..3 {
            env.step(0).unwrap();
        }
        let last = env.step(0).unwrap();
        assert!(last.terminated);
        assert!(!last.truncated);
    }

    #[test]
    fn entropy_env_resets() {
        let mut env = CubeEnv::from_entropy(EnvConfig::default());
        assert_eq!(env.reset().len(), 54);
        assert_eq!(env.cube().color_counts(), [9; 6]);
        assert_eq!(CubeEnv::<StdRng>::ACTION_COUNT, 12);
    }
}
