//! Visualizers writing trajectories to files.
mod csv_visualizer;
mod svg_visualizer;
pub use csv_visualizer::CsvVisualizer;
pub use svg_visualizer::SvgVisualizer;
