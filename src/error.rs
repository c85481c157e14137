//! Error types.

use thiserror::Error;

/// Errors raised when constructing a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Bucket capacity must be at least 1")]
    ZeroCapacity,

    #[error("Invalid boundary: half extents must be non-negative, got {half_width}x{half_height}")]
    InvalidBoundary { half_width: f64, half_height: f64 },
}

/// Errors raised by the point generators.
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("Unknown distribution: {0}")]
    Unknown(String),

    #[error("Invalid spread: {0}")]
    InvalidSpread(#[from] rand_distr::NormalError),

    #[error("Cluster size must be at least 1")]
    EmptyCluster,

    #[error("Extent must be positive, got {0}")]
    InvalidExtent(f64),
}

/// Errors raised while reading or writing CSV output.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors found when validating a loaded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tree.capacity must be at least 1")]
    ZeroCapacity,

    #[error("{0} has a negative or NaN half extent")]
    InvalidRect(&'static str),

    #[error("sweep.point_counts is empty")]
    NoPointCounts,
}
