//! Edge-biased vertex selection.
//!
//! Each candidate cell costs exactly one uniform `f32` draw and is selected
//! when the draw is below its probability. Draw order is part of the output
//! contract for a fixed seed:
//!
//! 1. left and right columns, row by row (`x = 0` then `x = W - 1`);
//! 2. top and bottom rows, column by column (`y = 0` then `y = H - 1`);
//! 3. interior cells in raster order;
//! 4. the four corners, forced without a draw.
//!
//! Corners therefore go through both border rules before being forced.
//! Selection only marks cells, it never clears them.

use lp_core::{ImageView, Point2i, Rgba};
use rand::Rng;

use crate::OwnerGrid;

/// Selection probability for every border cell.
pub const BORDER_PROBABILITY: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerParams {
    /// Interior cells whose R, G and B gradients are all `>=` this are edges.
    pub edge_threshold: f32,
    pub edge_probability: f32,
    pub non_edge_probability: f32,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            edge_threshold: 0.5,
            edge_probability: 0.05,
            non_edge_probability: 0.002,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleStats {
    /// Uniform draws consumed from the random stream.
    pub draws: usize,
    /// Interior cells classified as edges.
    pub edge_cells: usize,
    /// Distinct seeds in the returned grid.
    pub seeds: usize,
}

pub fn sample_vertices<R: Rng + ?Sized>(
    gradient: &ImageView<'_, Rgba>,
    params: &SamplerParams,
    rng: &mut R,
) -> (OwnerGrid, SampleStats) {
    let (w, h) = (gradient.width(), gradient.height());
    let mut grid = OwnerGrid::unassigned(w, h);
    let mut stats = SampleStats::default();
    if w == 0 || h == 0 {
        return (grid, stats);
    }

    let (last_x, last_y) = ((w - 1) as i32, (h - 1) as i32);
    let mut select = |grid: &mut OwnerGrid, p: Point2i, prob: f32, stats: &mut SampleStats| {
        stats.draws += 1;
        if rng.random::<f32>() < prob {
            grid.mark_seed(p);
        }
    };

    for y in 0..h as i32 {
        for x in [0, last_x] {
            select(&mut grid, Point2i::new(x, y), BORDER_PROBABILITY, &mut stats);
        }
    }

    for x in 0..w as i32 {
        for y in [0, last_y] {
            select(&mut grid, Point2i::new(x, y), BORDER_PROBABILITY, &mut stats);
        }
    }

    for y in 1..last_y {
        for x in 1..last_x {
            let p = Point2i::new(x, y);
            let is_edge = gradient
                .get_point(p)
                .is_some_and(|g| g.rgb_all_ge(params.edge_threshold));
            let prob = if is_edge {
                stats.edge_cells += 1;
                params.edge_probability
            } else {
                params.non_edge_probability
            };
            select(&mut grid, p, prob, &mut stats);
        }
    }

    for corner in [
        Point2i::new(0, 0),
        Point2i::new(0, last_y),
        Point2i::new(last_x, 0),
        Point2i::new(last_x, last_y),
    ] {
        grid.mark_seed(corner);
    }

    stats.seeds = grid.seed_count();
    (grid, stats)
}
