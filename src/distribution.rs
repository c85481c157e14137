//! Synthetic point sets for the benchmark sweep.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::{Distribution as _, Normal};
use serde::{Deserialize, Serialize};

use crate::error::DistributionError;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Distribution {
    #[serde(rename = "uniforme")]
    Uniform,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "clusters")]
    Clusters,
}

/// Generator parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DistributionParams {
    /// Uniform draws fall in `[-uniform_extent, uniform_extent)` on both axes.
    #[serde(default = "default_extent")]
    pub uniform_extent: f64,
    #[serde(default = "default_normal_std_dev")]
    pub normal_std_dev: f64,
    /// Points per cluster; the last cluster may be partial.
    #[serde(default = "default_cluster_size")]
    pub cluster_size: usize,
    /// Cluster centres fall in `[-cluster_extent, cluster_extent)`.
    #[serde(default = "default_extent")]
    pub cluster_extent: f64,
    #[serde(default = "default_cluster_std_dev")]
    pub cluster_std_dev: f64,
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self {
            uniform_extent: default_extent(),
            normal_std_dev: default_normal_std_dev(),
            cluster_size: default_cluster_size(),
            cluster_extent: default_extent(),
            cluster_std_dev: default_cluster_std_dev(),
        }
    }
}

fn default_extent() -> f64 {
    200.0
}
fn default_normal_std_dev() -> f64 {
    50.0
}
fn default_cluster_size() -> usize {
    100
}
fn default_cluster_std_dev() -> f64 {
    20.0
}

impl Distribution {
    pub const ALL: [Distribution; 3] = [
        Distribution::Uniform,
        Distribution::Normal,
        Distribution::Clusters,
    ];

    /// Name used in config files and result rows.
    pub fn name(self) -> &'static str {
        match self {
            Distribution::Uniform => "uniforme",
            Distribution::Normal => "normal",
            Distribution::Clusters => "clusters",
        }
    }

    /// Draws exactly `count` fresh points.
    pub fn generate<R: Rng + ?Sized>(
        self,
        count: usize,
        params: &DistributionParams,
        rng: &mut R,
    ) -> Result<Vec<Point>, DistributionError> {
        let mut points = Vec::with_capacity(count);

        match self {
            Distribution::Uniform => {
                let extent = positive(params.uniform_extent)?;
                for _ in 0..count {
                    points.push(Point::new(
                        rng.gen_range(-extent..extent),
                        rng.gen_range(-extent..extent),
                    ));
                }
            }
            Distribution::Normal => {
                let normal = Normal::new(0.0, params.normal_std_dev)?;
                for _ in 0..count {
                    points.push(Point::new(normal.sample(rng), normal.sample(rng)));
                }
            }
            Distribution::Clusters => {
                if params.cluster_size == 0 {
                    return Err(DistributionError::EmptyCluster);
                }
                let spread = Normal::new(0.0, params.cluster_std_dev)?;
                let extent = positive(params.cluster_extent)?;
                let mut centre = (0.0, 0.0);
                for i in 0..count {
                    if i % params.cluster_size == 0 {
                        centre = (rng.gen_range(-extent..extent), rng.gen_range(-extent..extent));
                    }
                    points.push(Point::new(
                        centre.0 + spread.sample(rng),
                        centre.1 + spread.sample(rng),
                    ));
                }
            }
        }

        Ok(points)
    }
}

// `gen_range` panics on an empty range.
fn positive(extent: f64) -> Result<f64, DistributionError> {
    if extent > 0.0 {
        Ok(extent)
    } else {
        Err(DistributionError::InvalidExtent(extent))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Distribution::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| DistributionError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_names_round_trip() {
        for distribution in Distribution::ALL {
            assert_eq!(distribution.name().parse::<Distribution>().unwrap(), distribution);
        }
        assert!(matches!(
            "gaussian".parse::<Distribution>(),
            Err(DistributionError::Unknown(_))
        ));
    }

    #[test]
    fn test_uniform_range_and_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = Distribution::Uniform
            .generate(1000, &DistributionParams::default(), &mut rng)
            .unwrap();

        assert_eq!(points.len(), 1000);
        assert!(points
            .iter()
            .all(|p| (-200.0..200.0).contains(&p.x()) && (-200.0..200.0).contains(&p.y())));
    }

    #[test]
    fn test_normal_is_centred() {
        let mut rng = StdRng::seed_from_u64(11);
        let points = Distribution::Normal
            .generate(5000, &DistributionParams::default(), &mut rng)
            .unwrap();

        let mean_x = points.iter().map(|p| p.x()).sum::<f64>() / points.len() as f64;
        let mean_y = points.iter().map(|p| p.y()).sum::<f64>() / points.len() as f64;
        assert!(mean_x.abs() < 5.0, "mean x was {mean_x}");
        assert!(mean_y.abs() < 5.0, "mean y was {mean_y}");
    }

    #[test]
    fn test_clusters_exact_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = DistributionParams {
            cluster_size: 10,
            ..DistributionParams::default()
        };

        let points = Distribution::Clusters.generate(55, &params, &mut rng).unwrap();
        assert_eq!(points.len(), 55);

        let small = Distribution::Clusters.generate(3, &params, &mut rng).unwrap();
        assert_eq!(small.len(), 3);
    }

    #[test]
    fn test_clusters_stay_near_centre() {
        let mut rng = StdRng::seed_from_u64(5);
        let params = DistributionParams {
            cluster_size: 50,
            cluster_std_dev: 1.0,
            ..DistributionParams::default()
        };

        let points = Distribution::Clusters.generate(50, &params, &mut rng).unwrap();
        let (cx, cy) = (points[0].x(), points[0].y());
        assert!(points
            .iter()
            .all(|p| (p.x() - cx).abs() < 12.0 && (p.y() - cy).abs() < 12.0));
    }

    #[test]
    fn test_invalid_params() {
        let mut rng = StdRng::seed_from_u64(1);
        let negative = DistributionParams {
            normal_std_dev: -1.0,
            ..DistributionParams::default()
        };
        assert!(matches!(
            Distribution::Normal.generate(10, &negative, &mut rng),
            Err(DistributionError::InvalidSpread(_))
        ));

        let empty = DistributionParams {
            cluster_size: 0,
            ..DistributionParams::default()
        };
        assert!(matches!(
            Distribution::Clusters.generate(10, &empty, &mut rng),
            Err(DistributionError::EmptyCluster)
        ));

        let flat = DistributionParams {
            uniform_extent: 0.0,
            ..DistributionParams::default()
        };
        assert!(matches!(
            Distribution::Uniform.generate(10, &flat, &mut rng),
            Err(DistributionError::InvalidExtent(_))
        ));
    }

    #[test]
    fn test_seeded_generation_repeats() {
        let params = DistributionParams::default();
        let a = Distribution::Clusters
            .generate(300, &params, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = Distribution::Clusters
            .generate(300, &params, &mut StdRng::seed_from_u64(42))
            .unwrap();

        assert!(a.iter().zip(&b).all(|(p, q)| p.x() == q.x() && p.y() == q.y()));
        // Same coordinates, different identities.
        assert!(a.iter().zip(&b).all(|(p, q)| p.id() != q.id()));
    }
}
