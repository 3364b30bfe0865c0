//! Geometry of the arm.
use anyhow::Result;
use hindsight_core::error::HindsightError;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// Base position and link lengths of the arm.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Scene {
    /// Position of the first joint. The arm must stay above it.
    pub base: [f32; 3],

    /// Length of the link after each joint.
    pub link_lengths: Vec<f32>,
}

impl Scene {
    /// Arm of total length 1 at the origin, with `num_joints` links of equal length.
    pub fn uniform(num_joints: usize) -> Self {
        Self {
            base: [0.0; 3],
            link_lengths: vec![1.0 / num_joints as f32; num_joints],
        }
    }

    /// Loads a scene from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let scene = serde_yaml::from_reader(rdr)?;
        Ok(scene)
    }

    /// Checks that the scene has one positive link length per joint.
    pub fn validate(&self, num_joints: usize) -> Result<(), HindsightError> {
        if self.link_lengths.len() != num_joints {
            return Err(HindsightError::InvalidConfig(format!(
                "scene has {} links for {} joints",
                self.link_lengths.len(),
                num_joints
            )));
        }
        if self.link_lengths.iter().any(|l| !(*l > 0.0)) {
            return Err(HindsightError::InvalidConfig(
                "link lengths must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Total length of the arm.
    pub fn reach(&self) -> f32 {
        self.link_lengths.iter().sum()
    }
}
