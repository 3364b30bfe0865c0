//! Goal and achieved-goal paths collected over a demonstration run.
use crate::error::HindsightError;
use ndarray::{Array1, Array2};

/// Desired goals and achieved goals collected over all episodes of a run.
///
/// The desired goal of every episode is pushed once at reset. The achieved goal is pushed at
/// reset and after every step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    goals: Vec<Vec<f32>>,
    achieved_goals: Vec<Vec<f32>>,
}

impl Trajectory {
    /// Constructs an empty [`Trajectory`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a desired goal.
    pub fn push_goal(&mut self, g: Vec<f32>) {
        self.goals.push(g);
    }

    /// Appends an achieved goal.
    pub fn push_achieved_goal(&mut self, ag: Vec<f32>) {
        self.achieved_goals.push(ag);
    }

    /// Desired goals in insertion order.
    pub fn goals(&self) -> &[Vec<f32>] {
        &self.goals
    }

    /// Achieved goals in insertion order.
    pub fn achieved_goals(&self) -> &[Vec<f32>] {
        &self.achieved_goals
    }

    /// Desired goals as a matrix, one row per goal.
    pub fn goal_matrix(&self) -> Result<Array2<f32>, HindsightError> {
        to_matrix("goals", &self.goals)
    }

    /// Achieved goals as a matrix, one row per goal.
    pub fn achieved_goal_matrix(&self) -> Result<Array2<f32>, HindsightError> {
        to_matrix("achieved goals", &self.achieved_goals)
    }

    /// Stacks desired goals on top of achieved goals for a labeled scatter plot.
    ///
    /// Labels are `1` for desired goals and `2` for achieved goals.
    pub fn scatter_data(&self) -> Result<(Array2<f32>, Array1<u8>), HindsightError> {
        let rows: Vec<Vec<f32>> = self
            .goals
            .iter()
            .chain(self.achieved_goals.iter())
            .cloned()
            .collect();
        let labels = std::iter::repeat(1u8)
            .take(self.goals.len())
            .chain(std::iter::repeat(2u8).take(self.achieved_goals.len()))
            .collect();
        Ok((to_matrix("scatter points", &rows)?, labels))
    }
}

fn to_matrix(name: &str, rows: &[Vec<f32>]) -> Result<Array2<f32>, HindsightError> {
    let ncols = rows.first().map(|r| r.len()).unwrap_or(0);
    if let Some(r) = rows.iter().find(|r| r.len() != ncols) {
        return Err(HindsightError::Shape(format!(
            "{} have rows of length {} and {}",
            name,
            ncols,
            r.len()
        )));
    }
    let data = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), ncols), data)
        .map_err(|e| HindsightError::Shape(e.to_string()))
}
