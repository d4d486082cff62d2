//! The five-stage low-poly filter.

use std::time::Instant;

use log::{debug, warn};
use lp_core::{Image, ImageView, Rgba};
use lp_edge::gradient_l1;
use lp_region::{jump_flood, sample_vertices};
use lp_tri::{draw_wireframe, extract_triangles, rasterize};
use rand::Rng;
use serde::Serialize;

use crate::LowPolyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LowPolyStats {
    /// Seeds placed by the sampler, corners included.
    pub seeds: usize,
    pub triangles: usize,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone)]
pub struct LowPolyOutput {
    pub image: Image<Rgba>,
    pub stats: LowPolyStats,
}

/// Stylizes `src` into flat-shaded triangles.
///
/// All randomness comes from `rng`; the same image, configuration and
/// generator state always produce the same output.
pub fn lowpolify<R: Rng + ?Sized>(
    src: &ImageView<'_, Rgba>,
    cfg: &LowPolyConfig,
    rng: &mut R,
) -> Image<Rgba> {
    lowpolify_with_stats(src, cfg, rng).image
}

pub fn lowpolify_with_stats<R: Rng + ?Sized>(
    src: &ImageView<'_, Rgba>,
    cfg: &LowPolyConfig,
    rng: &mut R,
) -> LowPolyOutput {
    let (w, h) = (src.width(), src.height());
    let mut stats = LowPolyStats {
        width: w,
        height: h,
        ..LowPolyStats::default()
    };

    if !cfg.enabled {
        debug!("lowpoly disabled, passing {w}x{h} image through");
        return LowPolyOutput {
            image: src.to_image(),
            stats,
        };
    }
    if w < 2 || h < 2 {
        warn!("lowpoly needs at least 2x2 pixels, got {w}x{h}; image left unchanged");
        return LowPolyOutput {
            image: src.to_image(),
            stats,
        };
    }

    let t0 = Instant::now();
    let gradient = gradient_l1(src);
    debug!("gradient {w}x{h}: {:.2} ms", elapsed_ms(t0));

    let t0 = Instant::now();
    let (mut grid, sampled) = sample_vertices(&gradient.as_view(), &cfg.sampler_params(), rng);
    debug!(
        "sampled {} seeds ({} edge cells, {} draws): {:.2} ms",
        sampled.seeds,
        sampled.edge_cells,
        sampled.draws,
        elapsed_ms(t0)
    );

    let t0 = Instant::now();
    let flood = jump_flood(&mut grid);
    debug!(
        "jump flood: {} passes, {} adoptions, {} unassigned: {:.2} ms",
        flood.passes,
        flood.adoptions,
        grid.unassigned_count(),
        elapsed_ms(t0)
    );

    let t0 = Instant::now();
    let triangles = extract_triangles(&grid);
    debug!("extracted {} triangles: {:.2} ms", triangles.len(), elapsed_ms(t0));

    let t0 = Instant::now();
    let mut image = rasterize(&triangles, src);
    if cfg.draw_wireframe {
        draw_wireframe(&mut image, &triangles);
    }
    debug!("rasterized: {:.2} ms", elapsed_ms(t0));

    stats.seeds = sampled.seeds;
    stats.triangles = triangles.len();
    LowPolyOutput { image, stats }
}

fn elapsed_ms(t0: Instant) -> f64 {
    t0.elapsed().as_secs_f64() * 1e3
}

#[cfg(test)]
mod tests {
    use lp_core::{Image, Point2i, Rgba};
    use lp_edge::gradient_l1;
    use lp_region::{jump_flood, sample_vertices, seeded_rng};
    use lp_tri::WIREFRAME_COLOR;

    use crate::{LowPolyConfig, lowpolify, lowpolify_with_stats};

    fn stripes(w: usize, h: usize) -> Image<Rgba> {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                let v = if (x / 4 + y / 3) % 2 == 0 { 1.0 } else { 0.0 };
                data.push(Rgba::new(v, 0.5 * v, x as f32 / w as f32, 1.0));
            }
        }
        Image::from_vec(w, h, data).expect("valid image")
    }

    #[test]
    fn output_keeps_dimensions() {
        let src = stripes(23, 17);
        let cfg = LowPolyConfig::default();
        let out = lowpolify_with_stats(&src.as_view(), &cfg, &mut seeded_rng(Some(5)));

        assert_eq!(out.image.width(), 23);
        assert_eq!(out.image.height(), 17);
        assert_eq!((out.stats.width, out.stats.height), (23, 17));
        assert!(out.stats.seeds >= 4);
        assert!(out.stats.triangles > 0);
    }

    #[test]
    fn disabled_returns_input() {
        let src = stripes(12, 9);
        let cfg = LowPolyConfig {
            enabled: false,
            ..LowPolyConfig::default()
        };
        let out = lowpolify_with_stats(&src.as_view(), &cfg, &mut seeded_rng(Some(1)));

        assert_eq!(out.image, src);
        assert_eq!(out.stats.seeds, 0);
        assert_eq!(out.stats.triangles, 0);
    }

    #[test]
    fn undersized_images_pass_through() {
        for (w, h) in [(1, 8), (8, 1), (0, 0)] {
            let src = Image::new_fill(w, h, Rgba::gray(0.3));
            let cfg = LowPolyConfig::default();
            let out = lowpolify(&src.as_view(), &cfg, &mut seeded_rng(Some(1)));
            assert_eq!(out, src, "{w}x{h}");
        }
    }

    #[test]
    fn same_seed_same_output() {
        let src = stripes(40, 30);
        let cfg = LowPolyConfig {
            edge_probability: 0.2,
            non_edge_probability: 0.01,
            ..LowPolyConfig::default()
        };

        let a = lowpolify_with_stats(&src.as_view(), &cfg, &mut seeded_rng(Some(99)));
        let b = lowpolify_with_stats(&src.as_view(), &cfg, &mut seeded_rng(Some(99)));
        assert_eq!(a.image, b.image);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn black_4x4_without_interior_seeds() {
        let src = Image::new_fill(4, 4, Rgba::new(0.0, 0.0, 0.0, 1.0));
        let cfg = LowPolyConfig {
            edge_threshold: 0.1,
            edge_probability: 0.0,
            non_edge_probability: 0.0,
            ..LowPolyConfig::default()
        };

        let a = lowpolify_with_stats(&src.as_view(), &cfg, &mut seeded_rng(Some(42)));
        let b = lowpolify_with_stats(&src.as_view(), &cfg, &mut seeded_rng(Some(42)));

        assert_eq!(a.stats, b.stats);
        assert!(a.stats.seeds >= 4 && a.stats.seeds <= 12);
        assert!(a.stats.triangles <= 18);
        for px in a.image.data() {
            assert!(*px == Rgba::new(0.0, 0.0, 0.0, 1.0) || *px == Rgba::default());
        }

        // Black RGB never reaches the threshold, so no interior cell seeds.
        let gradient = gradient_l1(&src.as_view());
        let params = cfg.sampler_params();
        let mut rng = seeded_rng(Some(42));
        let (mut grid, sampled) = sample_vertices(&gradient.as_view(), &params, &mut rng);
        jump_flood(&mut grid);
        assert_eq!(sampled.edge_cells, 0);
        assert_eq!(sampled.seeds, a.stats.seeds);
        assert!(grid.is_resolved());
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert!(!grid.is_seed(Point2i::new(x, y)));
        }
    }

    #[test]
    fn two_by_two_is_two_triangles() {
        let data = vec![
            Rgba::new(0.9, 0.1, 0.1, 1.0),
            Rgba::new(0.1, 0.9, 0.1, 1.0),
            Rgba::new(0.1, 0.1, 0.9, 1.0),
            Rgba::gray(0.5),
        ];
        let src = Image::from_vec(2, 2, data).expect("valid image");
        let cfg = LowPolyConfig::default();
        let out = lowpolify_with_stats(&src.as_view(), &cfg, &mut seeded_rng(Some(0)));

        assert_eq!(out.stats.seeds, 4);
        assert_eq!(out.stats.triangles, 2);
        // Both centroids truncate to the origin.
        assert!(out.image.data().iter().all(|px| *px == Rgba::new(0.9, 0.1, 0.1, 1.0)));
    }

    #[test]
    fn wireframe_overwrites_edges() {
        let src = Image::new_fill(2, 2, Rgba::gray(0.7));
        let cfg = LowPolyConfig {
            draw_wireframe: true,
            ..LowPolyConfig::default()
        };
        let out = lowpolify(&src.as_view(), &cfg, &mut seeded_rng(Some(0)));
        assert!(out.data().iter().all(|px| *px == WIREFRAME_COLOR));
    }

    #[test]
    fn uniform_image_keeps_its_color() {
        let color = Rgba::new(0.2, 0.4, 0.6, 1.0);
        let src = Image::new_fill(31, 19, color);
        let cfg = LowPolyConfig::default();
        let out = lowpolify(&src.as_view(), &cfg, &mut seeded_rng(Some(8)));

        assert!(out.data().iter().all(|px| *px == color || *px == Rgba::default()));
        assert!(out.data().iter().any(|px| *px == color));
    }
}
