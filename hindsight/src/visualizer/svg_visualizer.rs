use anyhow::Result;
use hindsight_core::{AxisLimits, PlotOptions, Trajectory, Visualizer};
use log::info;
use ndarray::{Array2, Axis};
use plotters::prelude::*;
use std::{
    ops::Range,
    path::{Path, PathBuf},
};

type Point = (f32, f32, f32);

/// Renders trajectories as SVG files with [`plotters`].
///
/// Two files are written per call: `<window>_scatter.svg`, both point sets as labeled
/// markers, and `<window>_paths.svg`, both paths as lines in equally scaled axes.
pub struct SvgVisualizer {
    dir: PathBuf,
    size: (u32, u32),
}

impl SvgVisualizer {
    /// Constructs a [`SvgVisualizer`] writing into `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            size: (800, 800),
        }
    }

    /// Sets the size of the images in pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    fn draw_scatter(
        &self,
        path: &Path,
        goals: &[Point],
        achieved: &[Point],
        limits: &AxisLimits,
        options: &PlotOptions,
    ) -> Result<()> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&options.title, ("sans-serif", 20))
            .margin(20)
            .build_cartesian_3d(
                plot_range(limits.x),
                plot_range(limits.y),
                plot_range(limits.z),
            )?;
        chart.configure_axes().draw()?;

        let size = options.marker_size;
        chart
            .draw_series(goals.iter().map(|p| Circle::new(*p, size, BLUE.filled())))?
            .label(&options.legend[0])
            .legend(move |(x, y)| Circle::new((x, y), size, BLUE.filled()));
        chart
            .draw_series(achieved.iter().map(|p| Circle::new(*p, size, RED.filled())))?
            .label(&options.legend[1])
            .legend(move |(x, y)| Circle::new((x, y), size, RED.filled()));

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()?;
        root.present()?;
        Ok(())
    }

    fn draw_paths(
        &self,
        path: &Path,
        goals: &[Point],
        achieved: &[Point],
        limits: &AxisLimits,
        options: &PlotOptions,
    ) -> Result<()> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&options.title, ("sans-serif", 20))
            .margin(20)
            .build_cartesian_3d(
                plot_range(limits.x),
                plot_range(limits.y),
                plot_range(limits.z),
            )?;
        chart.configure_axes().draw()?;

        chart
            .draw_series(LineSeries::new(goals.iter().copied(), &BLUE))?
            .label(&options.legend[0])
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
        chart
            .draw_series(LineSeries::new(achieved.iter().copied(), &RED))?
            .label(&options.legend[1])
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()?;
        root.present()?;
        Ok(())
    }
}

impl Visualizer for SvgVisualizer {
    fn show(&mut self, trajectory: &Trajectory, options: &PlotOptions) -> Result<()> {
        let goals = trajectory.goal_matrix()?;
        let achieved = trajectory.achieved_goal_matrix()?;
        let limits = match AxisLimits::from_points(&[&goals, &achieved]) {
            Some(limits) => limits,
            None => {
                info!("Nothing to plot, trajectory has no 3-D points");
                return Ok(());
            }
        };
        let (goals, achieved) = (points(&goals), points(&achieved));

        let path = self.dir.join(format!("{}_scatter.svg", options.window));
        self.draw_scatter(&path, &goals, &achieved, &limits, options)?;
        info!("Saved scatter plot in {:?}", path);

        let path = self.dir.join(format!("{}_paths.svg", options.window));
        self.draw_paths(&path, &goals, &achieved, &limits.equalize(), options)?;
        info!("Saved path plot in {:?}", path);

        Ok(())
    }
}

/// First three coordinates of every row.
fn points(m: &Array2<f32>) -> Vec<Point> {
    if m.ncols() < 3 {
        return vec![];
    }
    m.axis_iter(Axis(0))
        .map(|r| (r[0], r[1], r[2]))
        .collect()
}

/// Widens collapsed axes so that the chart has a positive extent on every axis.
fn plot_range((lo, hi): (f32, f32)) -> Range<f32> {
    match hi - lo > f32::EPSILON {
        true => lo..hi,
        false => lo - 0.5..hi + 0.5,
    }
}
