use anyhow::Result;
use hindsight_core::{PlotOptions, Trajectory, Visualizer};
use log::info;
use std::path::{Path, PathBuf};

/// Writes the labeled scatter points of a trajectory to `<window>.csv`.
///
/// Each row holds the label, `1` for desired goals and `2` for achieved goals, followed by the
/// coordinates of the point.
pub struct CsvVisualizer {
    dir: PathBuf,
}

impl CsvVisualizer {
    /// Constructs a [`CsvVisualizer`] writing into `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl Visualizer for CsvVisualizer {
    fn show(&mut self, trajectory: &Trajectory, options: &PlotOptions) -> Result<()> {
        let (x, y) = trajectory.scatter_data()?;
        let path = self.dir.join(format!("{}.csv", options.window));
        let mut wtr = csv::Writer::from_path(&path)?;

        let mut header = vec!["label".to_string()];
        header.extend((0..x.ncols()).map(|i| format!("x{}", i)));
        wtr.write_record(&header)?;

        for (label, row) in y.iter().zip(x.outer_iter()) {
            let mut record = vec![label.to_string()];
            record.extend(row.iter().map(|v| v.to_string()));
            wtr.write_record(&record)?;
        }
        wtr.flush()?;

        info!("Wrote {} points to {:?}", y.len(), path);
        Ok(())
    }
}
