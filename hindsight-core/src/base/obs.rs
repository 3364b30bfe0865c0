//! Observation of a goal-conditioned environment.

/// Observation of a goal-conditioned environment.
///
/// Mirrors the dictionary observation of goal-based gym environments: the proprioceptive
/// `observation`, the goal the agent currently achieves and the goal it is asked to reach.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalObs {
    /// Observation of the agent itself.
    pub observation: Vec<f32>,

    /// Goal actually reached at this step.
    pub achieved_goal: Vec<f32>,

    /// Goal the episode targets.
    pub desired_goal: Vec<f32>,
}

impl GoalObs {
    /// Constructs a [`GoalObs`].
    pub fn new(observation: Vec<f32>, achieved_goal: Vec<f32>, desired_goal: Vec<f32>) -> Self {
        Self {
            observation,
            achieved_goal,
            desired_goal,
        }
    }
}
