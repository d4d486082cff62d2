use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::{DynamicImage, Rgb, RgbImage, RgbaImage};
use log::{info, warn};
use lowpoly::{
    Image, LowPolyConfig, LowPolyStats, OwnerGrid, Point2i, Rgba, draw_wireframe,
    extract_triangles, gradient_l1, jump_flood, lowpolify_with_stats, paint_regions, rasterize,
    rgba8_to_f32, sample_vertices, seeded_rng, time_seed, to_rgba8,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "lp_gallery")]
#[command(about = "Run the low-poly filter on image files and dump its artifacts")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stylize the input and write `lowpoly.png` with `meta.json`.
    #[command(name = "render")]
    Render(CommonArgs),
    /// Like `render`, plus `gradient.png` and `regions.png`.
    #[command(name = "stages")]
    Stages(CommonArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "docs/fig/raw")]
    out: PathBuf,
    /// JSON file with a (possibly partial) `LowPolyConfig`.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed RNG seed; time-seeded when omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    overrides: ConfigOverrides,
}

#[derive(Args, Debug, Clone, Default)]
struct ConfigOverrides {
    #[arg(long)]
    edge_threshold: Option<f32>,
    #[arg(long)]
    edge_probability: Option<f32>,
    #[arg(long)]
    non_edge_probability: Option<f32>,
    #[arg(long)]
    wireframe: bool,
    #[arg(long)]
    disabled: bool,
}

impl ConfigOverrides {
    fn apply(&self, cfg: &mut LowPolyConfig) {
        if let Some(v) = self.edge_threshold {
            cfg.edge_threshold = v;
        }
        if let Some(v) = self.edge_probability {
            cfg.edge_probability = v;
        }
        if let Some(v) = self.non_edge_probability {
            cfg.non_edge_probability = v;
        }
        cfg.draw_wireframe |= self.wireframe;
        cfg.enabled &= !self.disabled;
    }
}

#[derive(Debug, Clone, Default, Serialize)]
struct StageTimings {
    gradient_ms: f64,
    sample_ms: f64,
    flood_ms: f64,
    extract_ms: f64,
    raster_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
struct MetaRender {
    input: String,
    config: LowPolyConfig,
    seed: u64,
    stats: LowPolyStats,
    total_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
struct MetaStages {
    input: String,
    config: LowPolyConfig,
    seed: u64,
    stats: LowPolyStats,
    edge_cells: usize,
    draws: usize,
    flood_passes: usize,
    flood_adoptions: usize,
    timings: StageTimings,
    total_ms: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Render(args) => run_render(args),
        Command::Stages(args) => run_stages(args),
    }
}

fn run_render(args: CommonArgs) -> Result<()> {
    let case_dir = prepare_case(&args, "render")?;
    let cfg = load_config(args.config.as_deref(), &args.overrides)?;
    let img = load_input_rgba(&args.input)?;
    let seed = args.seed.unwrap_or_else(time_seed);

    let t0 = Instant::now();
    let out = lowpolify_with_stats(&img.as_view(), &cfg, &mut seeded_rng(Some(seed)));
    let total_ms = elapsed_ms(t0);
    info!(
        "{}x{}: {} seeds, {} triangles in {total_ms:.2} ms (seed {seed})",
        out.stats.width, out.stats.height, out.stats.seeds, out.stats.triangles
    );

    save_rgba(case_dir.join("lowpoly.png"), &out.image)?;
    write_meta(
        &case_dir,
        &MetaRender {
            input: args.input.display().to_string(),
            config: cfg,
            seed,
            stats: out.stats,
            total_ms,
        },
    )?;

    Ok(())
}

fn run_stages(args: CommonArgs) -> Result<()> {
    let case_dir = prepare_case(&args, "stages")?;
    let cfg = load_config(args.config.as_deref(), &args.overrides)?;
    let img = load_input_rgba(&args.input)?;
    let seed = args.seed.unwrap_or_else(time_seed);

    if img.width() < 2 || img.height() < 2 {
        bail!(
            "stages needs at least a 2x2 image, got {}x{}.",
            img.width(),
            img.height()
        );
    }
    if !cfg.enabled {
        warn!("config has enabled=false; running every stage anyway");
    }

    let src = img.as_view();
    let mut rng = seeded_rng(Some(seed));
    let mut timings = StageTimings::default();
    let total = Instant::now();

    let t0 = Instant::now();
    let gradient = gradient_l1(&src);
    timings.gradient_ms = elapsed_ms(t0);

    let t0 = Instant::now();
    let params = cfg.sampler_params();
    let (mut grid, sampled) = sample_vertices(&gradient.as_view(), &params, &mut rng);
    timings.sample_ms = elapsed_ms(t0);
    let seeds: Vec<_> = grid.seeds().collect();

    let t0 = Instant::now();
    let flood = jump_flood(&mut grid);
    timings.flood_ms = elapsed_ms(t0);

    let t0 = Instant::now();
    let triangles = extract_triangles(&grid);
    timings.extract_ms = elapsed_ms(t0);

    let t0 = Instant::now();
    let mut rendered = rasterize(&triangles, &src);
    if cfg.draw_wireframe {
        draw_wireframe(&mut rendered, &triangles);
    }
    timings.raster_ms = elapsed_ms(t0);
    let total_ms = elapsed_ms(total);

    info!(
        "{} seeds, {} flood passes, {} triangles in {total_ms:.2} ms (seed {seed})",
        seeds.len(),
        flood.passes,
        triangles.len()
    );

    let gradient_vis = gradient
        .data()
        .iter()
        .map(|g| g.r + g.g + g.b)
        .collect::<Vec<_>>();
    save_luma_raw(
        case_dir.join("gradient.png"),
        gradient.width(),
        gradient.height(),
        f32_to_u8_vis(&gradient_vis),
    )?;
    save_regions(case_dir.join("regions.png"), &grid, &img, &seeds)?;
    save_rgba(case_dir.join("lowpoly.png"), &rendered)?;

    write_meta(
        &case_dir,
        &MetaStages {
            input: args.input.display().to_string(),
            config: cfg,
            seed,
            stats: LowPolyStats {
                seeds: sampled.seeds,
                triangles: triangles.len(),
                width: img.width(),
                height: img.height(),
            },
            edge_cells: sampled.edge_cells,
            draws: sampled.draws,
            flood_passes: flood.passes,
            flood_adoptions: flood.adoptions,
            timings,
            total_ms,
        },
    )?;

    Ok(())
}

fn prepare_case(args: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    require_file(&args.input, "input")?;
    if let Some(config) = &args.config {
        require_file(config, "config")?;
    }

    let case_dir = args.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    fs::copy(&args.input, case_dir.join("input.png")).with_context(|| {
        format!(
            "copying input {} -> {}",
            args.input.display(),
            case_dir.join("input.png").display()
        )
    })?;

    Ok(case_dir)
}

/// File config first, then command-line overrides, then validation.
fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<LowPolyConfig> {
    let mut cfg = match path {
        Some(path) => read_config(path)?,
        None => LowPolyConfig::default(),
    };
    overrides.apply(&mut cfg);
    cfg.validate().context("validating low-poly config")?;
    Ok(cfg)
}

/// Missing keys fall back to their defaults.
fn read_config(path: &Path) -> Result<LowPolyConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing low-poly config {}", path.display()))
}

fn load_input_rgba(path: &Path) -> Result<Image<Rgba>> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let rgba = dyn_img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let data = rgba.into_raw();

    rgba8_to_f32(w as usize, h as usize, &data)
        .with_context(|| format!("constructing rgba image from {}", path.display()))
}

fn to_rgba_image(img: &Image<Rgba>) -> Result<RgbaImage> {
    RgbaImage::from_raw(
        img.width() as u32,
        img.height() as u32,
        to_rgba8(&img.as_view()),
    )
    .context("constructing RgbaImage from raw bytes")
}

fn save_rgba(path: PathBuf, img: &Image<Rgba>) -> Result<()> {
    to_rgba_image(img)?
        .save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn save_luma_raw(path: PathBuf, width: usize, height: usize, data: Vec<u8>) -> Result<()> {
    let gray = image::GrayImage::from_raw(width as u32, height as u32, data)
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

/// Region mosaic with a red dot on every seed.
fn save_regions(
    path: PathBuf,
    grid: &OwnerGrid,
    src: &Image<Rgba>,
    seeds: &[Point2i],
) -> Result<()> {
    let mosaic = paint_regions(grid, &src.as_view());
    let mut rgb = DynamicImage::ImageRgba8(to_rgba_image(&mosaic)?).to_rgb8();
    for s in seeds {
        draw_dot(&mut rgb, s.x, s.y, Rgb([255, 64, 64]));
    }
    rgb.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn f32_to_u8_vis(data: &[f32]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut min_v = f32::INFINITY;
    let mut max_v = f32::NEG_INFINITY;
    for &v in data {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }

    if (max_v - min_v).abs() < 1e-12 {
        return vec![0u8; data.len()];
    }

    let scale = 255.0 / (max_v - min_v);
    data.iter()
        .map(|&v| ((v - min_v) * scale).round().clamp(0.0, 255.0) as u8)
        .collect()
}

fn draw_dot(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || ny < 0 {
                continue;
            }
            let (ux, uy) = (nx as u32, ny as u32);
            if ux >= img.width() || uy >= img.height() {
                continue;
            }
            img.put_pixel(ux, uy, color);
        }
    }
}

fn write_meta(case_dir: &Path, meta: &impl Serialize) -> Result<()> {
    let path = case_dir.join("meta.json");
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, meta)
        .with_context(|| format!("serializing run metadata to {}", path.display()))?;
    out.flush().with_context(|| format!("flushing {}", path.display()))
}

fn elapsed_ms(t0: Instant) -> f64 {
    t0.elapsed().as_secs_f64() * 1e3
}

fn require_file(path: &Path, what: &str) -> Result<()> {
    let meta = fs::metadata(path).with_context(|| format!("{what} {} not found", path.display()))?;
    if !meta.is_file() {
        bail!("{what} {} is a directory or special file", path.display());
    }
    Ok(())
}
