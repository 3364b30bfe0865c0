//! Environment.
use super::{ActionSpace, GoalObs, Step};
use anyhow::Result;

/// A goal-conditioned environment.
///
/// Observations are [`GoalObs`] and actions are flat `f32` vectors living in
/// [`GoalEnv::action_space`]. Errors raised by implementations are not translated;
/// they propagate to the caller unchanged.
pub trait GoalEnv {
    /// Configurations.
    type Config: Clone;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Starts a new episode and returns its initial observation.
    fn reset(&mut self) -> Result<GoalObs>;

    /// Performes an environment step.
    fn step(&mut self, act: &[f32]) -> Result<Step>;

    /// Renders the current state.
    fn render(&mut self) -> Result<()>;

    /// Action space of the environment.
    fn action_space(&self) -> &ActionSpace;

    /// Mutable access to the action space, used for seeding its sampler.
    fn action_space_mut(&mut self) -> &mut ActionSpace;

    /// The maximum number of steps in an episode.
    fn max_episode_steps(&self) -> usize;
}

/// Dimensions of an environment, needed to build a policy network.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvParams {
    /// Dimension of the observation.
    pub obs: usize,

    /// Dimension of the goal.
    pub goal: usize,

    /// Dimension of the action.
    pub action: usize,

    /// Upper bound of the first action element.
    pub action_max: f32,
}

impl EnvParams {
    /// Reads the dimensions from an observation of `env` and its action space.
    pub fn from_env<E: GoalEnv>(env: &E, obs: &GoalObs) -> Self {
        let space = env.action_space();
        Self {
            obs: obs.observation.len(),
            goal: obs.desired_goal.len(),
            action: space.dim(),
            action_max: space.high().first().copied().unwrap_or(1.0),
        }
    }
}
