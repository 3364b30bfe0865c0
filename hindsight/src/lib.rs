//! Demonstration of goal-conditioned policies trained with hindsight experience replay.
//!
//! The workspace consists of the following crates:
//!
//! * `hindsight-core` provides the environment and policy traits, the normalization of
//!   network inputs, the episode runner and the axis utility of 3-D plots.
//! * `hindsight-policy-no-backend` loads the actor network and the normalization statistics
//!   from a checkpoint and evaluates the actor without a deep learning backend.
//! * `hindsight-kinematic-env` is a kinematic serial manipulator with goal observations.
//! * `hindsight` (this crate) renders trajectories and hosts the `her_demo` example, which
//!   runs a trained actor in the manipulator and plots the goal and achieved paths.
mod visualizer;
pub use visualizer::{CsvVisualizer, SvgVisualizer};
