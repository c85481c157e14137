//! Benchmark configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::distribution::DistributionParams;
use crate::error::ConfigError;
use crate::geometry::Rect;

pub const CONFIG_FILE: &str = "quadbench.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
    #[serde(default)]
    pub distribution: DistributionParams,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from `quadbench.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml(&contents)?
        } else {
            info!("No {} found, using defaults", path.display());
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tree.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.tree.boundary.to_rect().is_valid() {
            return Err(ConfigError::InvalidRect("tree.boundary"));
        }
        if !self.sweep.query.to_rect().is_valid() {
            return Err(ConfigError::InvalidRect("sweep.query"));
        }
        if self.sweep.point_counts.is_empty() {
            return Err(ConfigError::NoPointCounts);
        }
        Ok(())
    }
}

/// Rectangle as it appears in the config file: centre plus half extents.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RectConfig {
    pub x: f64,
    pub y: f64,
    pub half_width: f64,
    pub half_height: f64,
}

impl RectConfig {
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.half_width, self.half_height)
    }
}

/// Tree shape settings shared by every run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TreeConfig {
    /// Bucket capacity of the bucket quadtree.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default = "default_boundary")]
    pub boundary: RectConfig,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            boundary: default_boundary(),
        }
    }
}

fn default_boundary() -> RectConfig {
    RectConfig {
        x: 0.0,
        y: 0.0,
        half_width: 200.0,
        half_height: 200.0,
    }
}
fn default_capacity() -> usize {
    4
}

/// Which runs to make.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweepConfig {
    #[serde(default = "default_point_counts")]
    pub point_counts: Vec<usize>,
    /// Fixed RNG seed; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// The timed range query.
    #[serde(default = "default_query")]
    pub query: RectConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            point_counts: default_point_counts(),
            seed: None,
            query: default_query(),
        }
    }
}

fn default_point_counts() -> Vec<usize> {
    vec![100, 500, 1000, 5000, 10000, 20000, 50000]
}
fn default_query() -> RectConfig {
    RectConfig {
        x: 0.0,
        y: 0.0,
        half_width: 50.0,
        half_height: 50.0,
    }
}

/// Where the CSV files go.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,
    #[serde(default = "default_structure_path")]
    pub structure_path: PathBuf,
    /// Uniform points in the dumped point quadtree.
    #[serde(default = "default_structure_points")]
    pub structure_points: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
            structure_path: default_structure_path(),
            structure_points: default_structure_points(),
        }
    }
}

fn default_results_path() -> PathBuf {
    PathBuf::from("results.csv")
}
fn default_structure_path() -> PathBuf {
    PathBuf::from("pointquadtree_structure.csv")
}
fn default_structure_points() -> usize {
    1000
}
