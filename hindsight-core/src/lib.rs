#![warn(missing_docs)]
//! Core of the goal-conditioned policy demonstration.
//!
//! The crate hosts the pieces of a demonstration run that do not depend on a particular
//! simulator, network backend or plotting library:
//!
//! * [`Normalizer`] clips and standardizes observations and goals into network inputs,
//! * [`EpisodeRunner`] rolls out a [`Policy`] in a [`GoalEnv`] and collects a [`Trajectory`],
//! * [`AxisLimits`] computes equal-scale limits for 3-D plots,
//! * [`Visualizer`] is the one-way sink receiving the finished trajectory.
pub mod dummy;
pub mod error;

mod axes;
mod base;
mod normalizer;
mod runner;
mod trajectory;
mod visualizer;

pub use axes::AxisLimits;
pub use base::{ActionSpace, EnvParams, GoalEnv, GoalObs, Policy, RandomPolicy, Step, StepInfo};
pub use normalizer::{ClipConfig, NormStats, Normalizer};
pub use runner::{EpisodeRunner, EpisodeSummary, Rollout, RunnerConfig};
pub use trajectory::Trajectory;
pub use visualizer::{NullVisualizer, PlotOptions, Visualizer};
