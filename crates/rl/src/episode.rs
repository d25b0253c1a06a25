use cube::{CubeError, CubeState, Rotation, Scrambler};

use crate::env::{Env, StepInfo};

/// Actions accepted before an episode terminates by the move cap.
pub const MAX_STEPS: u32 = 100;

/// Episode controller for the 2x2x2 cube.
///
/// Owns one [`CubeState`] plus the episode counters. [`reset`](Env::reset)
/// scrambles a fresh cube; [`step`](Env::step) applies one rotation and
/// evaluates the solved and move-cap conditions. Rewards are `-1.0` per
/// unsolved step and `0.0` on the step that solves the cube.
///
/// A single controller is not meant for concurrent stepping; independent
/// controllers share no state and may run on separate threads.
pub struct PocketCubeEnv {
    state: CubeState,
    scrambler: Scrambler,
    steps: u32,
    done: bool,
}

impl PocketCubeEnv {
    /// An environment whose scrambles are seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Scrambler::new())
    }

    /// A seeded environment; scrambles replay identically per seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(Scrambler::with_seed(seed))
    }

    /// Starts from a caller-supplied cube instead of a scramble, with the
    /// counters as after a reset. The next [`reset`](Env::reset) scrambles
    /// as usual.
    #[must_use]
    pub fn from_state(state: CubeState) -> Self {
        Self {
            state,
            scrambler: Scrambler::new(),
            steps: 0,
            done: false,
        }
    }

    fn from_parts(scrambler: Scrambler) -> Self {
        Self {
            state: CubeState::solved(),
            scrambler,
            steps: 0,
            done: false,
        }
    }

    /// The cube as of the last reset or step.
    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Actions accepted since the last reset.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Whether the current episode has terminated.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Default for PocketCubeEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for PocketCubeEnv {
    type Obs = CubeState;

    fn reset(&mut self) -> CubeState {
        self.state = self.scrambler.scramble();
        self.steps = 0;
        self.done = false;
        self.state
    }

    fn step(&mut self, action: usize) -> Result<(CubeState, f32, bool, StepInfo), CubeError> {
        let rotation = Rotation::from_index(action)?;

        // The turn is applied even after termination; only the reward
        // cascade below distinguishes a spent episode.
        self.state = rotation.apply(&self.state);
        self.steps += 1;

        let reward = if self.state.is_solved() {
            self.done = true;
            0.0
        } else if self.steps == MAX_STEPS {
            self.done = true;
            -1.0
        } else if !self.done {
            -1.0
        } else {
            tracing::info!("episode already ended; call reset() to play again");
            -1.0
        };

        Ok((self.state, reward, self.done, StepInfo::default()))
    }

    fn num_actions(&self) -> usize {
        Rotation::COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::{Env, PocketCubeEnv};
    use cube::PINNED_POSITIONS;

    #[test]
    fn reset_scrambles_and_clears_counters() {
        let mut env = PocketCubeEnv::with_seed(17);
        let state = env.reset();
        assert_eq!(env.steps(), 0);
        assert!(!env.is_done());
        assert_eq!(env.num_actions(), 6);

        let flat = state.to_flat();
        for (p, expected) in PINNED_POSITIONS.iter().zip([2u8, 3, 4]) {
            assert_eq!(flat[*p], expected);
        }
    }

    #[test]
    fn invalid_action_leaves_the_episode_untouched() {
        let mut env = PocketCubeEnv::with_seed(17);
        let before = env.reset();
        assert!(env.step(6).is_err());
        assert_eq!(env.state(), &before);
        assert_eq!(env.steps(), 0);
        assert!(!env.is_done());
    }

    #[test]
    fn seeded_envs_replay_the_same_scramble() {
        let mut a = PocketCubeEnv::with_seed(40);
        let mut b = PocketCubeEnv::with_seed(40);
        assert_eq!(a.reset(), b.reset());
    }
}
