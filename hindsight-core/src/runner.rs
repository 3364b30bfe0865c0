//! Rollout of a policy over a fixed number of episodes.
use crate::{GoalEnv, Normalizer, Policy, Trajectory};
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

/// Configuration of [`EpisodeRunner`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// The number of episodes.
    pub demo_length: usize,

    /// The maximum number of steps in an episode.
    pub max_episode_steps: usize,

    /// Calls [`GoalEnv::render`] before every step if `true`.
    pub render: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            demo_length: 10,
            max_episode_steps: 50,
            render: false,
        }
    }
}

impl RunnerConfig {
    /// Sets the number of episodes.
    pub fn demo_length(mut self, v: usize) -> Self {
        self.demo_length = v;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_episode_steps(mut self, v: usize) -> Self {
        self.max_episode_steps = v;
        self
    }

    /// Enables rendering.
    pub fn render(mut self, v: bool) -> Self {
        self.render = v;
        self
    }
}

/// Outcome of a single episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    /// Index of the episode.
    pub episode: usize,

    /// The number of steps taken.
    pub length: usize,

    /// Success flag of the last step, `false` if no step was taken.
    pub is_success: bool,
}

/// Everything collected by [`EpisodeRunner::run`].
#[derive(Clone, Debug, Default)]
pub struct Rollout {
    /// Goals and achieved goals over all episodes.
    pub trajectory: Trajectory,

    /// One summary per episode.
    pub episodes: Vec<EpisodeSummary>,
}

/// Runs a policy in an environment and collects goal trajectories.
///
/// Each step the current observation and the desired goal of the episode are normalized,
/// fed to the policy and the resulting action is applied to the environment. An episode ends
/// when the environment reports done or after `max_episode_steps` steps.
pub struct EpisodeRunner {
    config: RunnerConfig,
}

impl EpisodeRunner {
    /// Constructs an [`EpisodeRunner`].
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Configuration of the runner.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Runs `demo_length` episodes.
    ///
    /// Errors of the normalizer, for example an observation not matching the statistics, and
    /// errors of the environment abort the run.
    pub fn run<E, P>(
        &self,
        env: &mut E,
        policy: &mut P,
        normalizer: &Normalizer,
    ) -> Result<Rollout>
    where
        E: GoalEnv,
        P: Policy + ?Sized,
    {
        let mut rollout = Rollout::default();

        for episode in 0..self.config.demo_length {
            let trajectory = &mut rollout.trajectory;
            let summary = self.run_episode(episode, env, policy, normalizer, trajectory)?;
            info!(
                "Episode {}, length {}, is success: {}",
                summary.episode, summary.length, summary.is_success
            );
            rollout.episodes.push(summary);
        }

        Ok(rollout)
    }

    fn run_episode<E, P>(
        &self,
        episode: usize,
        env: &mut E,
        policy: &mut P,
        normalizer: &Normalizer,
        trajectory: &mut Trajectory,
    ) -> Result<EpisodeSummary>
    where
        E: GoalEnv,
        P: Policy + ?Sized,
    {
        let init = env.reset()?;
        trajectory.push_achieved_goal(init.achieved_goal);
        trajectory.push_goal(init.desired_goal.clone());

        let g = init.desired_goal;
        let mut obs = init.observation;
        let mut length = 0;
        let mut is_success = false;

        for _ in 0..self.config.max_episode_steps {
            length += 1;
            if self.config.render {
                env.render()?;
            }

            let inputs = normalizer.normalize(&obs, &g)?;
            let act = policy.sample(&inputs);
            let step = env.step(&act)?;

            is_success = step.info.is_success;
            trajectory.push_achieved_goal(step.obs.achieved_goal);
            obs = step.obs.observation;

            if step.is_done {
                break;
            }
        }

        Ok(EpisodeSummary {
            episode,
            length,
            is_success,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dummy::{ConstantPolicy, ScriptedEnv, ScriptedEnvConfig},
        ClipConfig, NormStats,
    };

    fn normalizer() -> Normalizer {
        let stats = NormStats::new(vec![0.0; 2], vec![1.0; 2], vec![0.0; 3], vec![1.0; 3]).unwrap();
        Normalizer::new(stats, ClipConfig::default()).unwrap()
    }

    #[test]
    fn test_step_limit() -> Result<()> {
        let mut env = ScriptedEnv::build(&ScriptedEnvConfig::default(), 0)?;
        let mut policy = ConstantPolicy::new(vec![0.1; 3]);
        let config = RunnerConfig::default().demo_length(1).max_episode_steps(5);
        let runner = EpisodeRunner::new(config);
        let rollout = runner.run(&mut env, &mut policy, &normalizer())?;

        assert_eq!(rollout.episodes[0].length, 5);
        assert_eq!(rollout.trajectory.achieved_goals().len(), 6);
        assert_eq!(rollout.trajectory.goals().len(), 1);
        assert_eq!(env.n_steps(), 5);
        Ok(())
    }

    #[test]
    fn test_zero_step_budget() -> Result<()> {
        let mut env = ScriptedEnv::build(&ScriptedEnvConfig::default(), 0)?;
        let mut policy = ConstantPolicy::new(vec![0.0; 3]);
        let config = RunnerConfig::default().demo_length(1).max_episode_steps(0);
        let runner = EpisodeRunner::new(config);
        let rollout = runner.run(&mut env, &mut policy, &normalizer())?;

        assert_eq!(rollout.episodes[0].length, 0);
        assert!(!rollout.episodes[0].is_success);
        assert_eq!(rollout.trajectory.achieved_goals().len(), 1);
        Ok(())
    }

    #[test]
    fn test_mismatched_observation_aborts() {
        let stats = NormStats::new(vec![0.0; 4], vec![1.0; 4], vec![0.0; 3], vec![1.0; 3]).unwrap();
        let normalizer = Normalizer::new(stats, ClipConfig::default()).unwrap();
        let mut env = ScriptedEnv::build(&ScriptedEnvConfig::default(), 0).unwrap();
        let mut policy = ConstantPolicy::new(vec![0.0; 3]);
        let runner = EpisodeRunner::new(RunnerConfig::default().demo_length(2));

        assert!(runner.run(&mut env, &mut policy, &normalizer).is_err());
        assert_eq!(env.n_steps(), 0);
    }
}
