//! Continuous action space.

/// Box-shaped continuous action space with a seedable sampler.
#[derive(Clone, Debug)]
pub struct ActionSpace {
    shape: Vec<usize>,
    low: Vec<f32>,
    high: Vec<f32>,
    rng: fastrand::Rng,
}

impl ActionSpace {
    /// Constructs an action space with symmetric bounds `[-high, high]` on every dimension.
    pub fn symmetric(dim: usize, high: f32) -> Self {
        Self {
            shape: vec![dim],
            low: vec![-high; dim],
            high: vec![high; dim],
            rng: fastrand::Rng::new(),
        }
    }

    /// Seeds the sampler.
    pub fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Shape of an action.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Upper bounds of an action.
    pub fn high(&self) -> &[f32] {
        &self.high
    }

    /// Lower bounds of an action.
    pub fn low(&self) -> &[f32] {
        &self.low
    }

    /// Number of elements in an action.
    pub fn dim(&self) -> usize {
        self.shape.iter().product()
    }

    /// Samples an action uniformly from the box.
    pub fn sample(&mut self) -> Vec<f32> {
        let rng = &mut self.rng;
        self.low
            .iter()
            .zip(self.high.iter())
            .map(|(lo, hi)| lo + (hi - lo) * rng.f32())
            .collect()
    }
}
