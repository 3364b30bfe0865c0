//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum HindsightError {
    /// An observation or goal does not match the loaded statistics.
    #[error("Invalid input: {name} has length {actual}, expected {expected}")]
    InvalidInput {
        /// Name of the offending vector.
        name: String,
        /// Length given by the statistics.
        expected: usize,
        /// Length of the vector passed in.
        actual: usize,
    },

    /// A configuration was rejected at construction.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Checkpoint is missing, malformed or inconsistent with the environment.
    #[error("Checkpoint error: {0}")]
    Checkpoint(String),

    /// Rows of a trajectory have different lengths.
    #[error("Shape error: {0}")]
    Shape(String),
}
