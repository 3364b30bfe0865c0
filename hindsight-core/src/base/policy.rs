//! Policy.
use super::ActionSpace;

/// A policy on a goal-conditioned environment.
///
/// Policy is a mapping from a normalized network input, the concatenation of observation and
/// goal, to an action. Implementations run in inference mode; no learning takes place.
pub trait Policy {
    /// Sample an action given a normalized input.
    fn sample(&mut self, input: &[f32]) -> Vec<f32>;
}

/// A policy ignoring its input and drawing actions uniformly from an action space.
pub struct RandomPolicy {
    space: ActionSpace,
}

impl RandomPolicy {
    /// Constructs a [`RandomPolicy`] sampling from `space`.
    pub fn new(space: ActionSpace) -> Self {
        Self { space }
    }
}

impl Policy for RandomPolicy {
    fn sample(&mut self, _input: &[f32]) -> Vec<f32> {
        self.space.sample()
    }
}
