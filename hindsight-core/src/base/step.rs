//! Environment step.
use super::GoalObs;

/// Additional information returned with every step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepInfo {
    /// `true` if the achieved goal is within the success threshold of the desired goal.
    pub is_success: bool,

    /// Number of colliding substeps accumulated in the current episode.
    pub collisions: usize,
}

/// Result of applying an action to a [`GoalEnv`](super::GoalEnv).
#[derive(Clone, Debug)]
pub struct Step {
    /// Observation after the action.
    pub obs: GoalObs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if the episode has ended, either terminated or truncated.
    pub is_done: bool,

    /// Information defined by the environment.
    pub info: StepInfo,
}

impl Step {
    /// Constructs a [`Step`] object.
    pub fn new(obs: GoalObs, reward: f32, is_done: bool, info: StepInfo) -> Self {
        Step {
            obs,
            reward,
            is_done,
            info,
        }
    }

    #[inline]
    /// Whether the episode ended with this step.
    pub fn is_done(&self) -> bool {
        self.is_done
    }
}
