use cube::CubeError;

/// Auxiliary per-step diagnostics.
///
/// Nothing is reported yet; the container exists so the step contract has
/// a stable shape when diagnostics are added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInfo {}

/// Episodic environment over discrete action codes.
///
/// Inspired by classic frameworks like OpenAI Gym: each call to [`step`]
/// applies one action and returns the new observation, a scalar reward,
/// whether the episode has terminated, and auxiliary info. [`reset`]
/// starts a fresh episode and is always legal.
///
/// [`step`]: Env::step
/// [`reset`]: Env::reset
pub trait Env {
    /// Observation returned to the driver.
    type Obs;

    /// Starts a fresh episode and returns its initial observation.
    fn reset(&mut self) -> Self::Obs;

    /// Applies one action.
    ///
    /// Returns `(obs, reward, done, info)`. Stepping a terminated episode
    /// is permitted; it keeps returning the penalty reward with `done`
    /// still set until the driver calls [`reset`](Env::reset).
    ///
    /// # Errors
    ///
    /// Rejects action codes outside `0..num_actions()`.
    fn step(&mut self, action: usize) -> Result<(Self::Obs, f32, bool, StepInfo), CubeError>;

    /// Number of discrete actions the environment accepts.
    fn num_actions(&self) -> usize;
}
