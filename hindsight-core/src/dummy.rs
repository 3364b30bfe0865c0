//! Scripted environment and policy, used for tests.
use crate::{ActionSpace, GoalEnv, GoalObs, Policy, Step, StepInfo};
use anyhow::Result;

/// Configuration of [`ScriptedEnv`].
#[derive(Clone, Debug)]
pub struct ScriptedEnvConfig {
    /// Dimension of observations.
    pub obs_dim: usize,

    /// Dimension of goals.
    pub goal_dim: usize,

    /// Dimension of actions.
    pub act_dim: usize,

    /// Step of an episode, counted from 1, at which done is reported. Never if `None`.
    pub done_at: Option<usize>,

    /// Step of an episode, counted from 1, from which success is reported. Never if `None`.
    pub success_from: Option<usize>,

    /// Value returned by [`GoalEnv::max_episode_steps`].
    pub max_episode_steps: usize,
}

impl Default for ScriptedEnvConfig {
    fn default() -> Self {
        Self {
            obs_dim: 2,
            goal_dim: 3,
            act_dim: 3,
            done_at: None,
            success_from: None,
            max_episode_steps: 50,
        }
    }
}

/// Environment following a fixed script.
///
/// The achieved goal after the `t`-th step of an episode has every element equal to `t`.
/// The desired goal of the `k`-th episode has every element equal to `-(k + 1)`.
pub struct ScriptedEnv {
    config: ScriptedEnvConfig,
    action_space: ActionSpace,
    t: usize,
    n_resets: usize,
    n_steps: usize,
    n_renders: usize,
}

impl ScriptedEnv {
    /// Total number of steps over all episodes.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Total number of resets.
    pub fn n_resets(&self) -> usize {
        self.n_resets
    }

    /// Total number of calls to [`GoalEnv::render`].
    pub fn n_renders(&self) -> usize {
        self.n_renders
    }

    fn obs(&self) -> GoalObs {
        let c = &self.config;
        GoalObs::new(
            vec![self.t as f32; c.obs_dim],
            vec![self.t as f32; c.goal_dim],
            vec![-(self.n_resets as f32); c.goal_dim],
        )
    }
}

impl GoalEnv for ScriptedEnv {
    type Config = ScriptedEnvConfig;

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            action_space: ActionSpace::symmetric(config.act_dim, 1.0),
            config: config.clone(),
            t: 0,
            n_resets: 0,
            n_steps: 0,
            n_renders: 0,
        })
    }

    fn reset(&mut self) -> Result<GoalObs> {
        self.t = 0;
        self.n_resets += 1;
        Ok(self.obs())
    }

    fn step(&mut self, act: &[f32]) -> Result<Step> {
        anyhow::ensure!(
            act.len() == self.config.act_dim,
            "action of length {} given, expected {}",
            act.len(),
            self.config.act_dim
        );
        self.t += 1;
        self.n_steps += 1;
        let is_done = self.config.done_at.map_or(false, |t| self.t >= t);
        let is_success = self.config.success_from.map_or(false, |t| self.t >= t);
        let info = StepInfo {
            is_success,
            collisions: 0,
        };
        Ok(Step::new(self.obs(), -1.0, is_done, info))
    }

    fn render(&mut self) -> Result<()> {
        self.n_renders += 1;
        Ok(())
    }

    fn action_space(&self) -> &ActionSpace {
        &self.action_space
    }

    fn action_space_mut(&mut self) -> &mut ActionSpace {
        &mut self.action_space
    }

    fn max_episode_steps(&self) -> usize {
        self.config.max_episode_steps
    }
}

/// Policy returning the same action regardless of its input.
pub struct ConstantPolicy {
    act: Vec<f32>,
    inputs: Vec<Vec<f32>>,
}

impl ConstantPolicy {
    /// Constructs a [`ConstantPolicy`].
    pub fn new(act: Vec<f32>) -> Self {
        Self {
            act,
            inputs: Vec::new(),
        }
    }

    /// Inputs received so far.
    pub fn inputs(&self) -> &[Vec<f32>] {
        &self.inputs
    }
}

impl Policy for ConstantPolicy {
    fn sample(&mut self, input: &[f32]) -> Vec<f32> {
        self.inputs.push(input.to_vec());
        self.act.clone()
    }
}
