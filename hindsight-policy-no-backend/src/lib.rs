//! Goal-conditioned actor evaluated without a deep learning backend.
//!
//! Weights trained elsewhere are stored in a [`Checkpoint`] together with the normalization
//! statistics of observations and goals. [`Actor`] rebuilds the network from the named
//! parameters and implements [`Policy`](hindsight_core::Policy) with plain matrix products.
mod actor;
mod checkpoint;
mod mat;
mod mlp;
pub use actor::Actor;
pub use checkpoint::Checkpoint;
pub use mat::Mat;
pub use mlp::Mlp;
