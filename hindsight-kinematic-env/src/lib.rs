//! Kinematic serial manipulator reaching for 3-D goals.
//!
//! [`ManipulatorEnv`] implements [`GoalEnv`](hindsight_core::GoalEnv). Joint velocities are
//! commanded directly and integrated over substeps; there are no dynamics. The arm starts
//! pointing up from its base, joints pitch and yaw in turn, and the end-effector position is
//! the achieved goal.
mod base;
mod config;
mod kinematics;
mod scene;
pub use base::ManipulatorEnv;
pub use config::{GoalSet, ManipulatorEnvConfig, RewardType};
pub use scene::Scene;
