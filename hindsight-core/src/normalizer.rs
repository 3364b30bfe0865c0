//! Normalization of observations and goals into network inputs.
use crate::error::HindsightError;
use serde::{Deserialize, Serialize};

/// Mean and standard deviation of observations and goals, computed during training.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormStats {
    /// Mean of observations.
    pub o_mean: Vec<f32>,

    /// Standard deviation of observations.
    pub o_std: Vec<f32>,

    /// Mean of goals.
    pub g_mean: Vec<f32>,

    /// Standard deviation of goals.
    pub g_std: Vec<f32>,
}

impl NormStats {
    /// Constructs [`NormStats`], checking that means and standard deviations agree in length.
    ///
    /// Standard deviations are expected to be strictly positive; this is not checked.
    pub fn new(
        o_mean: Vec<f32>,
        o_std: Vec<f32>,
        g_mean: Vec<f32>,
        g_std: Vec<f32>,
    ) -> Result<Self, HindsightError> {
        check_len("o_std", o_mean.len(), o_std.len())?;
        check_len("g_std", g_mean.len(), g_std.len())?;
        Ok(Self {
            o_mean,
            o_std,
            g_mean,
            g_std,
        })
    }

    /// Dimension of observations.
    pub fn obs_dim(&self) -> usize {
        self.o_mean.len()
    }

    /// Dimension of goals.
    pub fn goal_dim(&self) -> usize {
        self.g_mean.len()
    }
}

/// Clip bounds applied before and after standardization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Magnitude raw observations and goals are clipped to.
    pub clip_obs: f32,

    /// Magnitude standardized values are clipped to.
    pub clip_range: f32,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            clip_obs: 200.0,
            clip_range: 5.0,
        }
    }
}

impl ClipConfig {
    /// Sets the clip bound of raw values.
    pub fn clip_obs(mut self, v: f32) -> Self {
        self.clip_obs = v;
        self
    }

    /// Sets the clip bound of standardized values.
    pub fn clip_range(mut self, v: f32) -> Self {
        self.clip_range = v;
        self
    }

    fn validate(&self) -> Result<(), HindsightError> {
        if !(self.clip_obs > 0.0) || !(self.clip_range > 0.0) {
            return Err(HindsightError::InvalidConfig(format!(
                "clip bounds must be positive, got {:?}",
                self
            )));
        }
        Ok(())
    }
}

/// Maps raw `(observation, goal)` pairs into bounded network inputs.
///
/// Both parts are clipped to `[-clip_obs, clip_obs]`, standardized with the training
/// statistics, clipped again to `[-clip_range, clip_range]` and concatenated, observation first.
#[derive(Clone, Debug)]
pub struct Normalizer {
    stats: NormStats,
    clip: ClipConfig,
}

impl Normalizer {
    /// Constructs a [`Normalizer`].
    pub fn new(stats: NormStats, clip: ClipConfig) -> Result<Self, HindsightError> {
        clip.validate()?;
        Ok(Self { stats, clip })
    }

    /// Statistics used for standardization.
    pub fn stats(&self) -> &NormStats {
        &self.stats
    }

    /// Length of the vectors returned by [`Normalizer::normalize`].
    pub fn input_dim(&self) -> usize {
        self.stats.obs_dim() + self.stats.goal_dim()
    }

    /// Normalizes an observation and a goal into a single input vector.
    pub fn normalize(&self, o: &[f32], g: &[f32]) -> Result<Vec<f32>, HindsightError> {
        check_len("observation", self.stats.obs_dim(), o.len())?;
        check_len("goal", self.stats.goal_dim(), g.len())?;

        let mut inputs = Vec::with_capacity(self.input_dim());
        inputs.extend(self.standardize(o, &self.stats.o_mean, &self.stats.o_std));
        inputs.extend(self.standardize(g, &self.stats.g_mean, &self.stats.g_std));
        Ok(inputs)
    }

    fn standardize<'a>(
        &'a self,
        x: &'a [f32],
        mean: &'a [f32],
        std: &'a [f32],
    ) -> impl Iterator<Item = f32> + 'a {
        let ClipConfig {
            clip_obs,
            clip_range,
        } = self.clip;
        x.iter()
            .zip(mean.iter().zip(std.iter()))
            .map(move |(x, (m, s))| {
                let x = x.clamp(-clip_obs, clip_obs);
                ((x - m) / s).clamp(-clip_range, clip_range)
            })
    }
}

fn check_len(name: &str, expected: usize, actual: usize) -> Result<(), HindsightError> {
    if expected != actual {
        return Err(HindsightError::InvalidInput {
            name: name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn normalizer(clip_obs: f32, clip_range: f32) -> Normalizer {
        let stats = NormStats::new(
            vec![0.0, 1.0, -1.0],
            vec![1.0, 2.0, 0.5],
            vec![0.5, 0.5],
            vec![0.1, 1.0],
        )
        .unwrap();
        let clip = ClipConfig::default()
            .clip_obs(clip_obs)
            .clip_range(clip_range);
        Normalizer::new(stats, clip).unwrap()
    }

    #[test]
    fn test_standardize() {
        let n = normalizer(200.0, 5.0);
        let x = n.normalize(&[1.0, 3.0, -0.5], &[0.6, 1.5]).unwrap();
        let expected = [1.0, 1.0, 1.0, 1.0, 1.0];
        assert_eq!(x.len(), 5);
        for (a, b) in x.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-5, "{:?}", x);
        }
    }

    #[test]
    fn test_output_is_observation_then_goal() {
        let n = normalizer(200.0, 5.0);
        let x = n.normalize(&[0.0, 1.0, -1.0], &[0.5, 0.5]).unwrap();
        assert_eq!(x, vec![0.0; 5]);
        let x = n.normalize(&[0.0, 1.0, -1.0], &[0.6, 0.5]).unwrap();
        assert!((x[3] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_both_clips_apply() {
        // The raw value 1000 is clipped to 10 first, standardized to 10 and clipped to 3.
        let n = normalizer(10.0, 3.0);
        let x = n
            .normalize(&[1000.0, -1000.0, 0.0], &[1000.0, -1000.0])
            .unwrap();
        assert!(x.iter().all(|v| (-3.0..=3.0).contains(v)));
        assert_eq!(x[0], 3.0);
        assert_eq!(x[1], -3.0);

        // The raw bound alone decides when the standardized value stays in range.
        let n = normalizer(0.5, 100.0);
        let x = n.normalize(&[2.0, 0.0, 0.0], &[0.5, 0.5]).unwrap();
        assert!((x[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_length_mismatch() {
        let n = normalizer(200.0, 5.0);
        match n.normalize(&[0.0, 0.0], &[0.0, 0.0]) {
            Err(HindsightError::InvalidInput {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            r => panic!("unexpected result: {:?}", r),
        }
        assert!(n.normalize(&[0.0; 3], &[0.0; 3]).is_err());
    }

    #[test]
    fn test_deterministic() {
        let n = normalizer(200.0, 5.0);
        let o = [0.3, -7.0, 12.0];
        let g = [0.1, 0.2];
        assert_eq!(n.normalize(&o, &g).unwrap(), n.normalize(&o, &g).unwrap());
    }

    #[test]
    fn test_invalid_stats_and_clip() {
        assert!(NormStats::new(vec![0.0; 2], vec![1.0; 3], vec![0.0], vec![1.0]).is_err());
        let stats = NormStats::new(vec![0.0], vec![1.0], vec![0.0], vec![1.0]).unwrap();
        assert!(Normalizer::new(stats, ClipConfig::default().clip_range(0.0)).is_err());
    }
}
