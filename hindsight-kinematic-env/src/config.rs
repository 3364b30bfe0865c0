//! Configuration of [`ManipulatorEnv`](super::ManipulatorEnv).
use anyhow::Result;
use hindsight_core::error::HindsightError;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

/// Reward of a step.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    /// `-1` until the goal is reached, `0` afterwards.
    Sparse,

    /// Negative distance between the end-effector and the goal.
    Dense,
}

/// Where desired goals come from.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GoalSet {
    /// A reachable point drawn at every reset.
    Random,

    /// Fixed points, one per reset, cycled in order.
    Fixed(Vec<[f32; 3]>),
}

/// Configuration of [`ManipulatorEnv`](super::ManipulatorEnv).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ManipulatorEnvConfig {
    /// An episode is successful when the end-effector is this close to the goal.
    pub distance_threshold: f32,

    /// Reward of a step.
    pub reward_type: RewardType,

    /// Joint velocity for an action of magnitude 1, in degrees per second.
    pub max_angles_vel: f32,

    /// The number of joints.
    pub num_joints: usize,

    /// The number of segments; joints are split evenly among them.
    pub num_segments: usize,

    /// Drives all joints of a segment with shared pitch and yaw commands.
    pub cc_model: bool,

    /// Restricts the arm to the XZ plane.
    pub plane_model: bool,

    /// Source of desired goals.
    pub goal_set: GoalSet,

    /// The maximum number of steps in an episode.
    pub max_episode_steps: usize,

    /// An episode terminates after this many substeps with the arm below its base.
    pub collision_cnt: usize,

    /// Disables rendering.
    pub headless_mode: bool,

    /// Scene overriding the base position and link lengths.
    pub scene_file: Option<PathBuf>,

    /// Integration substeps per step.
    pub n_substeps: usize,

    /// Starts episodes from random joint angles instead of the upright pose.
    pub random_initial_state: bool,
}

impl Default for ManipulatorEnvConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 0.02,
            reward_type: RewardType::Sparse,
            max_angles_vel: 10.0,
            num_joints: 6,
            num_segments: 2,
            cc_model: false,
            plane_model: false,
            goal_set: GoalSet::Random,
            max_episode_steps: 100,
            collision_cnt: 15,
            headless_mode: true,
            scene_file: None,
            n_substeps: 100,
            random_initial_state: false,
        }
    }
}

impl ManipulatorEnvConfig {
    /// Sets the success threshold.
    pub fn distance_threshold(mut self, v: f32) -> Self {
        self.distance_threshold = v;
        self
    }

    /// Sets the reward type.
    pub fn reward_type(mut self, v: RewardType) -> Self {
        self.reward_type = v;
        self
    }

    /// Sets the maximum joint velocity in degrees per second.
    pub fn max_angles_vel(mut self, v: f32) -> Self {
        self.max_angles_vel = v;
        self
    }

    /// Sets the number of joints.
    pub fn num_joints(mut self, v: usize) -> Self {
        self.num_joints = v;
        self
    }

    /// Sets the number of segments.
    pub fn num_segments(mut self, v: usize) -> Self {
        self.num_segments = v;
        self
    }

    /// Enables the constant-curvature model.
    pub fn cc_model(mut self, v: bool) -> Self {
        self.cc_model = v;
        self
    }

    /// Enables the planar model.
    pub fn plane_model(mut self, v: bool) -> Self {
        self.plane_model = v;
        self
    }

    /// Sets the source of desired goals.
    pub fn goal_set(mut self, v: GoalSet) -> Self {
        self.goal_set = v;
        self
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_episode_steps(mut self, v: usize) -> Self {
        self.max_episode_steps = v;
        self
    }

    /// Sets the number of colliding substeps terminating an episode.
    pub fn collision_cnt(mut self, v: usize) -> Self {
        self.collision_cnt = v;
        self
    }

    /// Disables rendering.
    pub fn headless_mode(mut self, v: bool) -> Self {
        self.headless_mode = v;
        self
    }

    /// Sets the scene file.
    pub fn scene_file(mut self, v: Option<PathBuf>) -> Self {
        self.scene_file = v;
        self
    }

    /// Sets the number of substeps.
    pub fn n_substeps(mut self, v: usize) -> Self {
        self.n_substeps = v;
        self
    }

    /// Starts episodes from random joint angles.
    pub fn random_initial_state(mut self, v: bool) -> Self {
        self.random_initial_state = v;
        self
    }

    /// The number of joints in a segment.
    pub fn joints_per_segment(&self) -> usize {
        self.num_joints / self.num_segments.max(1)
    }

    /// Dimension of actions.
    pub fn action_dim(&self) -> usize {
        match (self.cc_model, self.plane_model) {
            (false, _) => self.num_joints,
            (true, true) => self.num_segments,
            (true, false) => 2 * self.num_segments,
        }
    }

    /// Checks the consistency of the configuration.
    pub fn validate(&self) -> Result<(), HindsightError> {
        let fail = |msg: String| Err(HindsightError::InvalidConfig(msg));

        if !(self.distance_threshold > 0.0) {
            return fail(format!(
                "distance_threshold must be positive, got {}",
                self.distance_threshold
            ));
        }
        if !(self.max_angles_vel > 0.0) {
            return fail(format!(
                "max_angles_vel must be positive, got {}",
                self.max_angles_vel
            ));
        }
        if self.num_joints == 0 || self.num_segments == 0 {
            return fail("num_joints and num_segments must be positive".to_string());
        }
        if self.num_joints % self.num_segments != 0 {
            return fail(format!(
                "{} joints cannot be split into {} segments",
                self.num_joints, self.num_segments
            ));
        }
        if self.cc_model && !self.plane_model && self.joints_per_segment() < 2 {
            return fail("cc_model needs at least 2 joints per segment".to_string());
        }
        if self.max_episode_steps == 0 || self.collision_cnt == 0 || self.n_substeps == 0 {
            return fail(
                "max_episode_steps, collision_cnt and n_substeps must be positive".to_string(),
            );
        }
        if let GoalSet::Fixed(goals) = &self.goal_set {
            if goals.is_empty() {
                return fail("goal_set is an empty list".to_string());
            }
        }
        Ok(())
    }

    /// Constructs [`ManipulatorEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`ManipulatorEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_config() -> Result<()> {
        let config = ManipulatorEnvConfig::default()
            .reward_type(RewardType::Dense)
            .goal_set(GoalSet::Fixed(vec![[0.1, 0.2, 0.3], [0.0, 0.0, 0.9]]))
            .scene_file(Some("scene.yaml".into()));

        let dir = TempDir::new("manipulator_env_config")?;
        let path = dir.path().join("env.yaml");
        config.save(&path)?;
        let config_ = ManipulatorEnvConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ManipulatorEnvConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let base = ManipulatorEnvConfig::default();
        let invalid = vec![
            base.clone().distance_threshold(0.0),
            base.clone().max_angles_vel(-1.0),
            base.clone().num_joints(0),
            base.clone().num_joints(5).num_segments(2),
            base.clone().num_joints(2).num_segments(2).cc_model(true),
            base.clone().max_episode_steps(0),
            base.clone().collision_cnt(0),
            base.clone().n_substeps(0),
            base.clone().goal_set(GoalSet::Fixed(vec![])),
        ];
        for config in invalid {
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_action_dim() {
        let base = ManipulatorEnvConfig::default().num_joints(6).num_segments(3);
        assert_eq!(base.action_dim(), 6);
        assert_eq!(base.clone().cc_model(true).action_dim(), 6);
        assert_eq!(base.clone().cc_model(true).plane_model(true).action_dim(), 3);
        assert_eq!(base.num_segments(1).cc_model(true).action_dim(), 2);
    }
}
