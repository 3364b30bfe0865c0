//! Normalization statistics and actor parameters saved after training.
use crate::Mat;
use anyhow::Result;
use hindsight_core::{error::HindsightError, NormStats};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    io::{Read, Write},
    path::Path,
};

/// Normalization statistics and named actor parameters, in this order.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Checkpoint {
    /// Mean of observations.
    pub o_mean: Vec<f32>,

    /// Standard deviation of observations.
    pub o_std: Vec<f32>,

    /// Mean of goals.
    pub g_mean: Vec<f32>,

    /// Standard deviation of goals.
    pub g_std: Vec<f32>,

    /// Parameters of the actor network by name.
    pub params: BTreeMap<String, Mat>,
}

impl Checkpoint {
    /// Constructs a [`Checkpoint`].
    pub fn new(stats: NormStats, params: BTreeMap<String, Mat>) -> Self {
        Self {
            o_mean: stats.o_mean,
            o_std: stats.o_std,
            g_mean: stats.g_mean,
            g_std: stats.g_std,
            params,
        }
    }

    /// Loads a checkpoint serialized with `bincode`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let checkpoint_error =
            |e: String| HindsightError::Checkpoint(format!("{:?}: {}", path, e));

        let mut file = fs::OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|e| checkpoint_error(e.to_string()))?;
        let mut buf = Vec::<u8>::new();
        file.read_to_end(&mut buf).map_err(|e| checkpoint_error(e.to_string()))?;
        let checkpoint: Self =
            bincode::deserialize(&buf[..]).map_err(|e| checkpoint_error(e.to_string()))?;
        info!("Loaded checkpoint from {:?}", path);
        Ok(checkpoint)
    }

    /// Saves the checkpoint with `bincode`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = fs::File::create(path.as_ref())?;
        file.write_all(&bincode::serialize(self)?)?;
        info!("Saved checkpoint in {:?}", path.as_ref());
        Ok(())
    }

    /// Normalization statistics of the checkpoint.
    pub fn norm_stats(&self) -> Result<NormStats, HindsightError> {
        NormStats::new(
            self.o_mean.clone(),
            self.o_std.clone(),
            self.g_mean.clone(),
            self.g_std.clone(),
        )
    }
}
