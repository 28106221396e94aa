//! Seed-based color quantization ("stained glass" mosaic)
//!
//! Distinct seed pixels are drawn at random, every pixel joins the cluster of
//! its nearest seed, and each cluster is flattened to its average color.

use std::collections::HashSet;

use ndarray::Array2;
use tracing::debug;

use crate::io::error::{Result, invalid_parameter};
use crate::math::random::RandomSource;
use crate::math::rounding::{clamp_channel, rounded_mean};
use crate::pixel::{PixelBuffer, Point, Rgb};

/// Per-cluster channel sums and member count
#[derive(Debug, Clone, Copy, Default)]
struct ClusterTally {
    sums: [u64; 3],
    members: u64,
}

impl ClusterTally {
    fn add(&mut self, rgb: Rgb) {
        for (sum, value) in self.sums.iter_mut().zip(rgb) {
            *sum += u64::from(value);
        }
        self.members += 1;
    }

    fn average(&self) -> Rgb {
        self.sums.map(|sum| clamp_channel(rounded_mean(sum, self.members)))
    }
}

/// Quantize `source` into `seed_count` nearest-seed clusters
///
/// # Errors
///
/// Returns `InvalidArgument` if `seed_count` is zero or exceeds the number
/// of pixels in `source`
pub fn mosaic(
    source: &PixelBuffer,
    seed_count: usize,
    random: &mut dyn RandomSource,
) -> Result<PixelBuffer> {
    validate_seed_count(source, seed_count)?;
    let (width, height) = (source.width(), source.height());
    debug!(width, height, seed_count, "Applying mosaic");

    let seeds = pick_seeds(source, seed_count, random);

    let mut tallies = vec![ClusterTally::default(); seeds.len()];
    let mut assignment = Array2::<usize>::zeros((height, width));
    for ((row, col), cluster) in assignment.indexed_iter_mut() {
        let nearest = Point::new(row, col).nearest(&seeds).unwrap_or(0);
        *cluster = nearest;
        if let (Some(tally), Some(rgb)) = (tallies.get_mut(nearest), source.pixel(row, col)) {
            tally.add(rgb);
        }
    }

    let averages: Vec<Rgb> = tallies.iter().map(ClusterTally::average).collect();

    Ok(PixelBuffer::fill_with(width, height, |row, col| {
        assignment
            .get((row, col))
            .and_then(|&cluster| averages.get(cluster))
            .copied()
            .unwrap_or([0; 3])
    }))
}

/// Check a seed count against the pixels available in `source`
///
/// # Errors
///
/// Returns `InvalidArgument` if `seed_count` is zero or exceeds the pixel count
pub fn validate_seed_count(source: &PixelBuffer, seed_count: usize) -> Result<()> {
    if seed_count < 1 {
        return Err(invalid_parameter(
            "seed_count",
            &seed_count,
            &"mosaic needs at least one seed",
        ));
    }
    let pixel_count = source.pixel_count();
    if seed_count > pixel_count {
        return Err(invalid_parameter(
            "seed_count",
            &seed_count,
            &format!("cannot exceed the {pixel_count} pixels in the image"),
        ));
    }
    Ok(())
}

/// Draw `seed_count` distinct coordinates, redrawing duplicates
///
/// Expected draws grow sharply as `seed_count` approaches the pixel count.
/// Out-of-range draws are discarded like duplicates.
fn pick_seeds(
    source: &PixelBuffer,
    seed_count: usize,
    random: &mut dyn RandomSource,
) -> Vec<Point> {
    let (width, height) = (source.width(), source.height());
    let mut seen = HashSet::with_capacity(seed_count);
    let mut seeds = Vec::with_capacity(seed_count);
    while seeds.len() < seed_count {
        let point = random.draw_point(height, width);
        if point.row < height && point.col < width && seen.insert(point) {
            seeds.push(point);
        }
    }
    seeds
}
