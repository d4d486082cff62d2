//! Approximate nearest-seed partition by jump flooding.
//!
//! Pass `k` uses step `s_k`, starting at `max(W, H) / 2` and halving with
//! integer division down to `1`. In each pass every pixel `p`, in raster
//! order, looks at `p + s * d` for the eight unit directions `d` and adopts
//! the neighbour's owner when `p` has none or when that owner is strictly
//! closer to `p` (Manhattan distance).
//!
//! Updates happen in a single buffer, so a pixel can read owners written
//! earlier in the same pass. This converges slightly differently from the
//! double-buffered textbook variant; results are only reproducible against
//! another single-buffer implementation.
//!
//! Unassigned neighbours are never adopted. Once `(0, 0)` owns itself, the
//! final `s = 1` pass reaches every pixel through its already-visited
//! left/up neighbours, so no sentinel survives.

use lp_core::Point2i;

use crate::OwnerGrid;

/// Unit directions, scaled by the current step. Order is fixed.
pub const FLOOD_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 0),
    (0, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloodStats {
    pub passes: usize,
    /// Owner writes across all passes.
    pub adoptions: usize,
}

pub fn jump_flood(grid: &mut OwnerGrid) -> FloodStats {
    let mut stats = FloodStats::default();
    let mut step = grid.width().max(grid.height()) / 2;
    while step >= 1 {
        stats.adoptions += flood_pass(grid, step as i32);
        stats.passes += 1;
        step /= 2;
    }
    stats
}

fn flood_pass(grid: &mut OwnerGrid, step: i32) -> usize {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let mut adoptions = 0;

    for y in 0..h {
        for x in 0..w {
            let p = Point2i::new(x, y);
            for (dx, dy) in FLOOD_DIRECTIONS {
                let q = p + Point2i::new(dx * step, dy * step);
                let Some(candidate) = grid.owner(q) else {
                    continue;
                };

                let Some(cell) = grid.cells.get_point_mut(p) else {
                    continue;
                };
                let closer = match *cell {
                    None => true,
                    Some(current) => p.manhattan(candidate) < p.manhattan(current),
                };
                if closer {
                    *cell = Some(candidate);
                    adoptions += 1;
                }
            }
        }
    }

    adoptions
}

#[cfg(test)]
mod tests {
    use lp_core::Point2i;

    use crate::flood::jump_flood;
    use crate::{OwnerGrid, SamplerParams, sample_vertices, seeded_rng};

    fn corners(w: usize, h: usize) -> Vec<Point2i> {
        let (x1, y1) = (w as i32 - 1, h as i32 - 1);
        vec![
            Point2i::new(0, 0),
            Point2i::new(x1, 0),
            Point2i::new(0, y1),
            Point2i::new(x1, y1),
        ]
    }

    fn assert_nearest(grid: &OwnerGrid, seeds: &[Point2i]) {
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let p = Point2i::new(x, y);
                let owner = grid.owner(p).expect("resolved");
                let best = seeds
                    .iter()
                    .map(|s| p.manhattan(*s))
                    .min()
                    .expect("non-empty seeds");
                assert_eq!(p.manhattan(owner), best, "pixel {p:?} owned by {owner:?}");
            }
        }
    }

    #[test]
    fn single_seed_owns_everything() {
        let seed = Point2i::new(5, 2);
        let mut grid = OwnerGrid::from_seeds(11, 7, &[seed]);
        let stats = jump_flood(&mut grid);

        assert!(grid.is_resolved());
        assert!(grid.cells().data().iter().all(|c| *c == Some(seed)));
        assert_eq!(stats.passes, 3);
    }

    #[test]
    fn corner_seeds_resolve_exactly() {
        for (w, h) in [(2, 2), (4, 4), (5, 3), (17, 9), (32, 20), (2, 7)] {
            let seeds = corners(w, h);
            let mut grid = OwnerGrid::from_seeds(w, h, &seeds);
            jump_flood(&mut grid);

            assert_eq!(grid.unassigned_count(), 0, "{w}x{h}");
            assert_nearest(&grid, &seeds);
        }
    }

    #[test]
    fn origin_alone_reaches_every_pixel() {
        let mut grid = OwnerGrid::from_seeds(13, 21, &[Point2i::new(0, 0)]);
        jump_flood(&mut grid);
        assert!(grid.is_resolved());
    }

    #[test]
    fn resolved_grid_is_a_fixed_point() {
        let lattice = |w: usize, h: usize, s: usize| {
            let mut seeds = Vec::new();
            for y in (0..h).step_by(s) {
                for x in (0..w).step_by(s) {
                    seeds.push(Point2i::new(x as i32, y as i32));
                }
            }
            seeds
        };

        let cases = [
            (16, 16, vec![Point2i::new(8, 8)]),
            (17, 9, corners(17, 9)),
            (24, 16, lattice(24, 16, 4)),
            (20, 20, lattice(20, 20, 5)),
        ];

        for (w, h, seeds) in cases {
            let mut grid = OwnerGrid::from_seeds(w, h, &seeds);
            jump_flood(&mut grid);
            let resolved = grid.clone();

            let stats = jump_flood(&mut grid);
            assert_eq!(grid, resolved, "{w}x{h}");
            assert_eq!(stats.adoptions, 0);
        }
    }

    #[test]
    fn sampled_grids_resolve_to_existing_seeds() {
        let grad = lp_core::Image::new_fill(37, 23, lp_core::Rgba::gray(1.0));
        let params = SamplerParams {
            edge_threshold: 0.5,
            edge_probability: 0.05,
            non_edge_probability: 0.0,
        };

        for seed in 0..8 {
            let mut rng = seeded_rng(Some(seed));
            let (mut grid, _) = sample_vertices(&grad.as_view(), &params, &mut rng);
            let seeds: Vec<_> = grid.seeds().collect();
            jump_flood(&mut grid);

            assert!(grid.is_resolved());
            for owner in grid.cells().data().iter().flatten() {
                assert!(seeds.contains(owner));
            }
            for s in &seeds {
                assert!(grid.is_seed(*s), "seed {s:?} lost ownership of itself");
            }
        }
    }

    #[test]
    fn flat_4x4_resolves_from_border_seeds_only() {
        let grad = lp_core::Image::new_fill(4, 4, lp_core::Rgba::default());
        let params = SamplerParams {
            edge_threshold: 0.1,
            edge_probability: 0.0,
            non_edge_probability: 0.0,
        };

        for seed in 0..64 {
            let mut rng = seeded_rng(Some(seed));
            let (mut grid, stats) = sample_vertices(&grad.as_view(), &params, &mut rng);
            assert_eq!(stats.edge_cells, 0);
            jump_flood(&mut grid);

            assert!(grid.is_resolved(), "seed {seed}");
            for s in corners(4, 4) {
                assert!(grid.is_seed(s), "seed {seed}: corner {s:?}");
            }
            for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
                assert!(!grid.is_seed(Point2i::new(x, y)), "seed {seed}: interior ({x}, {y})");
            }
        }
    }

    #[test]
    fn seedless_grid_stays_unassigned() {
        let mut grid = OwnerGrid::unassigned(6, 4);
        let stats = jump_flood(&mut grid);
        assert_eq!(grid.unassigned_count(), 24);
        assert_eq!(stats.adoptions, 0);
    }
}
