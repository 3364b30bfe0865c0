//! Actor network of a goal-conditioned agent.
use crate::{Mat, Mlp};
use hindsight_core::{error::HindsightError, EnvParams, Policy};
use std::collections::BTreeMap;

const W_NAMES: [&str; 4] = ["fc1.weight", "fc2.weight", "fc3.weight", "action_out.weight"];
const B_NAMES: [&str; 4] = ["fc1.bias", "fc2.bias", "fc3.bias", "action_out.bias"];

/// Deterministic actor: three ReLU layers and a `tanh` head scaled by `action_max`.
///
/// Takes the concatenation of the normalized observation and goal.
pub struct Actor {
    mlp: Mlp,
    action_max: f32,
}

impl Actor {
    /// Builds the actor from a state dict with layers `fc1`, `fc2`, `fc3` and `action_out`.
    ///
    /// The network must take `obs + goal` inputs and emit `action` outputs.
    pub fn from_state_dict(
        params: &BTreeMap<String, Mat>,
        env_params: &EnvParams,
    ) -> Result<Self, HindsightError> {
        let mlp = Mlp::from_named(params, &W_NAMES, &B_NAMES)?;
        let input_dim = env_params.obs + env_params.goal;

        if mlp.input_dim() != input_dim {
            return Err(HindsightError::Checkpoint(format!(
                "Actor takes {} inputs, environment provides {}",
                mlp.input_dim(),
                input_dim
            )));
        }
        if mlp.output_dim() != env_params.action {
            return Err(HindsightError::Checkpoint(format!(
                "Actor emits {} actions, environment expects {}",
                mlp.output_dim(),
                env_params.action
            )));
        }

        Ok(Self {
            mlp,
            action_max: env_params.action_max,
        })
    }

    /// Computes the action for a normalized input.
    pub fn forward(&self, input: &[f32]) -> Vec<f32> {
        let x: Mat = input.to_vec().into();
        self.mlp.forward(&x).scale(self.action_max).into()
    }
}

impl Policy for Actor {
    fn sample(&mut self, input: &[f32]) -> Vec<f32> {
        self.forward(input)
    }
}
