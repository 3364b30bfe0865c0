//! Core functionalities.
mod action_space;
mod env;
mod obs;
mod policy;
mod step;
pub use action_space::ActionSpace;
pub use env::{EnvParams, GoalEnv};
pub use obs::GoalObs;
pub use policy::{Policy, RandomPolicy};
pub use step::{Step, StepInfo};
