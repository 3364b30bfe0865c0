//! Kinematic manipulator environment.
use crate::{
    kinematics::{distance, link_positions, JointAxis},
    GoalSet, ManipulatorEnvConfig, RewardType, Scene,
};
use anyhow::Result;
use hindsight_core::{ActionSpace, GoalEnv, GoalObs, Step, StepInfo};
use log::{debug, info, warn};
use std::f32::consts::FRAC_PI_2;

/// Duration of a substep in seconds.
const TIMESTEP: f32 = 0.002;

/// Joint angles are limited to `[-JOINT_LIMIT, JOINT_LIMIT]`.
const JOINT_LIMIT: f32 = FRAC_PI_2;

/// Attempts to draw a random goal that keeps the arm above its base.
const MAX_GOAL_TRIALS: usize = 100;

/// Serial manipulator reaching for goals, driven by joint velocity commands.
///
/// The observation is the concatenation of joint angles, joint velocities and the
/// end-effector position. Actions in `[-1, 1]` are scaled to
/// [`max_angles_vel`](ManipulatorEnvConfig::max_angles_vel).
pub struct ManipulatorEnv {
    config: ManipulatorEnvConfig,
    scene: Scene,
    axes: Vec<JointAxis>,
    action_space: ActionSpace,
    rng: fastrand::Rng,

    q: Vec<f32>,
    qdot: Vec<f32>,
    goal: [f32; 3],
    t: usize,
    collisions: usize,
    n_resets: usize,
}

impl ManipulatorEnv {
    /// Current joint angles.
    pub fn joint_angles(&self) -> &[f32] {
        &self.q
    }

    /// Position of the end-effector.
    pub fn end_effector(&self) -> [f32; 3] {
        self.end_effector_at(&self.q)
    }

    /// Scene of the arm.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    fn end_effector_at(&self, q: &[f32]) -> [f32; 3] {
        let ps = link_positions(&self.scene.base, &self.axes, &self.scene.link_lengths, q);
        ps[ps.len() - 1]
    }

    fn is_collided(&self, q: &[f32]) -> bool {
        link_positions(&self.scene.base, &self.axes, &self.scene.link_lengths, q)
            .iter()
            .any(|p| p[2] < self.scene.base[2])
    }

    /// Spreads a command vector over the joints.
    ///
    /// Without the constant-curvature model commands map one to one. With it, every segment
    /// takes one command per joint axis, shared by the joints of the segment with that axis.
    fn expand(&self, cmd: &[f32]) -> Vec<f32> {
        if !self.config.cc_model {
            return cmd.to_vec();
        }
        let per_segment = self.config.joints_per_segment();
        let n_cmds = self.config.action_dim() / self.config.num_segments;
        (0..self.config.num_joints)
            .map(|j| cmd[(j / per_segment) * n_cmds + (j % per_segment) % n_cmds])
            .collect()
    }

    /// Joint angles drawn uniformly in the joint limits, consistent with the command coupling.
    fn sample_angles(&mut self) -> Vec<f32> {
        let rng = &mut self.rng;
        let cmd: Vec<f32> = (0..self.config.action_dim())
            .map(|_| JOINT_LIMIT * (2.0 * rng.f32() - 1.0))
            .collect();
        self.expand(&cmd)
    }

    fn sample_goal(&mut self) -> [f32; 3] {
        if let GoalSet::Fixed(goals) = &self.config.goal_set {
            return goals[self.n_resets % goals.len()];
        }

        let q = self.sample_free_angles(MAX_GOAL_TRIALS);
        self.end_effector_at(&q)
    }

    /// Draws joint angles keeping the arm above its base, the upright pose if every draw fails.
    fn sample_free_angles(&mut self, max_trials: usize) -> Vec<f32> {
        for _ in 0..max_trials {
            let q = self.sample_angles();
            if !self.is_collided(&q) {
                return q;
            }
        }
        warn!(
            "No goal above the base found in {} trials, using the upright pose",
            max_trials
        );
        vec![0.0; self.config.num_joints]
    }

    fn obs(&self) -> GoalObs {
        let ee = self.end_effector();
        let observation = self
            .q
            .iter()
            .chain(self.qdot.iter())
            .chain(ee.iter())
            .copied()
            .collect();
        GoalObs::new(observation, ee.to_vec(), self.goal.to_vec())
    }
}

impl GoalEnv for ManipulatorEnv {
    type Config = ManipulatorEnvConfig;

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        config.validate()?;
        let scene = match &config.scene_file {
            Some(path) => {
                info!("Loading scene from {:?}", path);
                Scene::load(path)?
            }
            None => Scene::uniform(config.num_joints),
        };
        scene.validate(config.num_joints)?;

        // Joints alternate pitch and yaw within each segment.
        let per_segment = config.joints_per_segment();
        let axes = (0..config.num_joints)
            .map(|j| match config.plane_model || (j % per_segment) % 2 == 0 {
                true => JointAxis::Pitch,
                false => JointAxis::Yaw,
            })
            .collect();

        Ok(Self {
            action_space: ActionSpace::symmetric(config.action_dim(), 1.0),
            rng: fastrand::Rng::with_seed(seed as u64),
            q: vec![0.0; config.num_joints],
            qdot: vec![0.0; config.num_joints],
            goal: scene.base,
            t: 0,
            collisions: 0,
            n_resets: 0,
            config: config.clone(),
            scene,
            axes,
        })
    }

    fn reset(&mut self) -> Result<GoalObs> {
        self.goal = self.sample_goal();
        self.n_resets += 1;
        self.q = match self.config.random_initial_state {
            true => self.sample_angles(),
            false => vec![0.0; self.config.num_joints],
        };
        self.qdot = vec![0.0; self.config.num_joints];
        self.t = 0;
        self.collisions = 0;
        Ok(self.obs())
    }

    fn step(&mut self, act: &[f32]) -> Result<Step> {
        anyhow::ensure!(
            act.len() == self.action_space.dim(),
            "action of length {} given, expected {}",
            act.len(),
            self.action_space.dim()
        );

        let max_vel = self.config.max_angles_vel.to_radians();
        let cmd: Vec<f32> = act.iter().map(|a| a.clamp(-1.0, 1.0) * max_vel).collect();
        self.qdot = self.expand(&cmd);

        for _ in 0..self.config.n_substeps {
            for (q, qdot) in self.q.iter_mut().zip(self.qdot.iter()) {
                *q = (*q + qdot * TIMESTEP).clamp(-JOINT_LIMIT, JOINT_LIMIT);
            }
            if self.is_collided(&self.q) {
                self.collisions += 1;
            }
        }
        self.t += 1;

        let d = distance(&self.end_effector(), &self.goal);
        let is_success = d <= self.config.distance_threshold;
        let reward = match self.config.reward_type {
            RewardType::Sparse => -((!is_success) as i32 as f32),
            RewardType::Dense => -d,
        };
        let is_done =
            self.t >= self.config.max_episode_steps || self.collisions >= self.config.collision_cnt;
        let info = StepInfo {
            is_success,
            collisions: self.collisions,
        };

        Ok(Step::new(self.obs(), reward, is_done, info))
    }

    fn render(&mut self) -> Result<()> {
        if self.config.headless_mode {
            return Ok(());
        }
        let ps = link_positions(&self.scene.base, &self.axes, &self.scene.link_lengths, &self.q);
        debug!("t = {}, links = {:?}, goal = {:?}", self.t, ps, self.goal);
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
