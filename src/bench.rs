//! Timing harness: builds both trees over the same point sets and times one
//! range query on each.

use std::time::{Duration, Instant};

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::distribution::Distribution;
use crate::export::{save_structure, BenchRecord};
use crate::geometry::{Point, Rect};
use crate::index::SpatialIndex;
use crate::point_quadtree::PointQuadtree;
use crate::quadtree::QuadTree;

pub fn rng_for(config: &Config) -> StdRng {
    match config.sweep.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Inserts every point, returning how many the tree accepted.
pub fn populate<T: SpatialIndex + ?Sized>(tree: &mut T, points: &[Point]) -> usize {
    points.iter().filter(|point| tree.insert(**point)).count()
}

/// Runs one range query, returning the hit count and the elapsed time.
pub fn timed_query<T: SpatialIndex + ?Sized>(tree: &T, range: &Rect) -> (usize, Duration) {
    let mut found = Vec::new();
    let start = Instant::now();
    tree.query_into(range, &mut found);
    let elapsed = start.elapsed();
    (found.len(), elapsed)
}

/// Runs the full sweep: every distribution against every point count.
pub fn run<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> anyhow::Result<Vec<BenchRecord>> {
    let boundary = config.tree.boundary.to_rect();
    let range = config.sweep.query.to_rect();
    let mut records = Vec::new();

    for distribution in Distribution::ALL {
        for &num_points in &config.sweep.point_counts {
            let points = distribution
                .generate(num_points, &config.distribution, rng)
                .with_context(|| format!("generating {} {} points", num_points, distribution))?;

            let mut qt = QuadTree::new(boundary, config.tree.capacity)?;
            let mut pqt = PointQuadtree::new(boundary)?;

            let qt_accepted = populate(&mut qt, &points);
            let pqt_accepted = populate(&mut pqt, &points);
            debug!(
                "{} ({} points): quadtree accepted {}, point quadtree accepted {}",
                distribution, num_points, qt_accepted, pqt_accepted
            );
            debug!(
                "{} ({} points): quadtree depth {}, point quadtree depth {}",
                distribution,
                num_points,
                qt.depth(),
                pqt.depth()
            );

            let (qt_found, qt_time) = timed_query(&qt, &range);
            info!(
                "{} - Quadtree ({} points): {} found in {:.9}s",
                distribution,
                num_points,
                qt_found,
                qt_time.as_secs_f64()
            );

            let (pqt_found, pqt_time) = timed_query(&pqt, &range);
            info!(
                "{} - PointQuadtree ({} points): {} found in {:.9}s",
                distribution,
                num_points,
                pqt_found,
                pqt_time.as_secs_f64()
            );

            records.push(BenchRecord {
                distribution: distribution.name().to_string(),
                num_points,
                quadtree_time: qt_time.as_secs_f64(),
                pointquadtree_time: pqt_time.as_secs_f64(),
            });
        }
    }

    Ok(records)
}

/// Builds a point quadtree from uniform points, dumps its structure, then
/// removes one queried point to show removal on a populated tree.
pub fn export_structure<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> anyhow::Result<()> {
    let points = Distribution::Uniform.generate(
        config.output.structure_points,
        &config.distribution,
        rng,
    )?;
    info!("Generated {} points", points.len());

    let mut pqt = PointQuadtree::new(config.tree.boundary.to_rect())?;
    let accepted = populate(&mut pqt, &points);
    info!("Inserted {} points into the point quadtree", accepted);

    let path = &config.output.structure_path;
    save_structure(path, &pqt)
        .with_context(|| format!("writing structure to {}", path.display()))?;
    info!("Saved point quadtree structure to {}", path.display());

    let range = config.sweep.query.to_rect();
    let target = pqt.query(&range).first().map(|point| **point);
    match target {
        Some(point) => {
            let removed = pqt.remove(&point);
            info!(
                "Point ({:.3}, {:.3}) {}",
                point.x(),
                point.y(),
                if removed { "removed" } else { "not found" }
            );
        }
        None => warn!("Query range holds no points, nothing to remove"),
    }

    Ok(())
}
