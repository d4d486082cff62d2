//! Example: stylize one image into flat-shaded triangles.
//!
//! Loads any format the `image` crate decodes, runs the low-poly filter with
//! the requested knobs and writes the result as PNG. The seed is printed so a
//! run can be reproduced with `--seed`.
//!
//! Run from the workspace root:
//!   cargo run -p lowpoly --example stylize -- --help
//!   cargo run -p lowpoly --example stylize -- --input photo.jpg --seed 7

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lowpoly::{LowPolyConfig, lowpolify_with_stats, rgba8_to_f32, seeded_rng, time_seed, to_rgba8};

#[derive(Parser, Debug)]
#[command(about = "Turn an image into a low-poly rendering")]
struct Args {
    #[arg(long)]
    input: PathBuf,

    /// Output PNG (default: <input stem>_lowpoly.png next to input)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Minimum R, G and B gradient for a pixel to count as an edge
    #[arg(long, default_value_t = 0.5)]
    edge_threshold: f32,

    #[arg(long, default_value_t = 0.05)]
    edge_probability: f32,

    #[arg(long, default_value_t = 0.002)]
    non_edge_probability: f32,

    /// Overlay triangle edges
    #[arg(long)]
    wireframe: bool,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let out_path = args.out.clone().unwrap_or_else(|| {
        let stem = args.input.file_stem().unwrap_or_default().to_string_lossy();
        args.input.with_file_name(format!("{stem}_lowpoly.png"))
    });

    let cfg = LowPolyConfig {
        edge_threshold: args.edge_threshold,
        edge_probability: args.edge_probability,
        non_edge_probability: args.non_edge_probability,
        draw_wireframe: args.wireframe,
        ..LowPolyConfig::default()
    };
    cfg.validate().context("invalid parameters")?;

    let rgba = image::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?
        .to_rgba8();
    let (w, h) = rgba.dimensions();
    let src = rgba8_to_f32(w as usize, h as usize, rgba.as_raw())
        .context("converting input pixels")?;

    let seed = args.seed.unwrap_or_else(time_seed);
    let t0 = Instant::now();
    let out = lowpolify_with_stats(&src.as_view(), &cfg, &mut seeded_rng(Some(seed)));
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    println!(
        "{w}x{h}: {} seeds, {} triangles in {elapsed_ms:.2} ms (seed {seed})",
        out.stats.seeds, out.stats.triangles
    );

    let bytes = to_rgba8(&out.image.as_view());
    let png = image::RgbaImage::from_raw(w, h, bytes).context("building output image")?;
    png.save(&out_path)
        .with_context(|| format!("writing {}", out_path.display()))?;

    println!("written to {}", out_path.display());
    Ok(())
}
