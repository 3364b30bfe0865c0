//! One-way sink for finished trajectories.
use crate::Trajectory;
use anyhow::Result;

/// Display options of the trajectory plots.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    /// Window the plots are sent to. File-based visualizers use it as a file stem.
    pub window: String,

    /// Title of the plots.
    pub title: String,

    /// Legend labels of desired goals and achieved goals, in this order.
    pub legend: [String; 2],

    /// Marker size of scatter points.
    pub marker_size: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            window: "path".to_string(),
            title: "path".to_string(),
            legend: ["goal_path".to_string(), "achieved_path".to_string()],
            marker_size: 5,
        }
    }
}

/// Receives the trajectory of a finished run and renders it somewhere.
///
/// Rendering is a side effect; nothing flows back into the run. Backend failures are
/// returned unchanged.
pub trait Visualizer {
    /// Renders a labeled scatter of both point sets and a 3-D plot of both paths.
    fn show(&mut self, trajectory: &Trajectory, options: &PlotOptions) -> Result<()>;
}

/// A visualizer that discards any trajectory.
pub struct NullVisualizer {}

impl Visualizer for NullVisualizer {
    fn show(&mut self, _trajectory: &Trajectory, _options: &PlotOptions) -> Result<()> {
        Ok(())
    }
}
