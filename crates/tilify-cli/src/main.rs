use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use globset::{Glob, GlobSet, GlobSetBuilder};
use image::{DynamicImage, ImageReader};
use serde::Deserialize;
use tilify_core::{InputImage, TilifyConfig, pack_images, pack_layout, to_json_layout};
use tracing::{error, info};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "tilify",
    about = "Pack a folder of images into a single tiled canvas",
    version,
    author
)]
struct Cli {
    // Input/Output
    /// Input file or directory
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output image path
    #[arg(short, long, default_value = "result.png", help_heading = "Input/Output")]
    out: PathBuf,
    /// YAML config file path (overrides canvas options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,
    /// Include patterns (glob). If set, only files matching any pattern are considered
    #[arg(long, help_heading = "Input/Output")]
    include: Vec<String>,
    /// Exclude patterns (glob). Files matching any pattern will be ignored
    #[arg(long, help_heading = "Input/Output")]
    exclude: Vec<String>,

    // Canvas
    /// Canvas width
    #[arg(long, default_value_t = 800, help_heading = "Canvas")]
    width: u32,
    /// Canvas height
    #[arg(long, default_value_t = 100, help_heading = "Canvas")]
    height: u32,
    /// Background color as #RRGGBB or #RRGGBBAA
    #[arg(long, help_heading = "Canvas")]
    background: Option<String>,

    // Export
    /// Write the layout (absolute placements, JSON) to this file
    #[arg(long, help_heading = "Export")]
    json: Option<PathBuf>,
    /// Compute the layout only: no decoding, no output image (requires --json)
    #[arg(long, default_value_t = false, help_heading = "Export")]
    layout_only: bool,

    // Logging/UX
    /// Show a progress bar while loading images
    #[arg(long, default_value_t = true, action = ArgAction::Set, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging/UX")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = build_config(cli)?;
    let paths = gather_paths(&cli.input, &cli.include, &cli.exclude)?;
    info!(count = paths.len(), "found input images");

    if cli.layout_only {
        let json_path = cli
            .json
            .as_ref()
            .context("--layout-only requires --json")?;
        let mut sizes: Vec<(String, u32, u32)> = Vec::with_capacity(paths.len());
        for p in &paths {
            match image::image_dimensions(p) {
                Ok((w, h)) => sizes.push((key_for(p), w, h)),
                Err(e) => error!(?p, error = %e, "skip image"),
            }
        }
        let out = pack_layout(sizes, cfg)?;
        let stats = out.layout.stats();
        info!(
            placed = stats.num_tiles,
            unplaced = out.unplaced.len(),
            occupancy = format!("{:.2}%", stats.occupancy * 100.0),
            "stats"
        );
        write_json(json_path, &out.layout)?;
        return Ok(());
    }

    let inputs = load_images_with_progress(&paths, cli.progress && !cli.quiet)?;
    let out = pack_images(inputs, cfg)?;

    let stats = out.stats();
    info!(
        placed = stats.num_tiles,
        unplaced = out.unplaced.len(),
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        "stats"
    );

    out.rgba
        .save(&cli.out)
        .with_context(|| format!("write {}", cli.out.display()))?;
    info!(out = ?cli.out, "canvas written");

    if let Some(json_path) = &cli.json {
        write_json(json_path, &out.layout)?;
    }
    Ok(())
}

fn write_json(path: &Path, layout: &tilify_core::Region<String>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&to_json_layout(layout))?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(json = ?path, "layout written");
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<TilifyConfig> {
    let mut cfg = TilifyConfig {
        width: cli.width,
        height: cli.height,
        ..Default::default()
    };
    if let Some(s) = &cli.background {
        cfg.background_color = parse_color(s)?;
    }
    // A config file sets canvas options en bloc over the flag values.
    if let Some(path) = &cli.config {
        let file =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)?;
        cfg = y.into_tilify_config(cfg);
    }
    Ok(cfg)
}

fn parse_color(s: &str) -> anyhow::Result<[u8; 4]> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 && hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        anyhow::bail!("expected #RRGGBB or #RRGGBBAA, got {}", s);
    }
    let byte = |i: usize| -> anyhow::Result<u8> {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .with_context(|| format!("invalid hex color component in {}", s))
    };
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok([byte(0)?, byte(2)?, byte(4)?, a])
}

fn gather_paths(
    input: &Path,
    include: &[String],
    exclude: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let include = build_globset(include)?;
    let exclude = build_globset(exclude)?;
    let keep = |p: &Path| -> bool {
        let s = p.to_string_lossy().replace('\\', "/");
        if let Some(ex) = &exclude {
            if ex.is_match(&s) {
                return false;
            }
        }
        if let Some(inc) = &include {
            if !inc.is_match(&s) {
                return false;
            }
        }
        is_image(p)
    };
    let mut list: Vec<PathBuf> = Vec::new();
    if input.is_file() {
        if keep(input) {
            list.push(input.to_path_buf());
        }
    } else {
        // Sorted walk: the pool order (and with it tie-breaking) must not
        // depend on filesystem iteration order.
        for entry in WalkDir::new(input)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let p = entry.path();
            if p.is_file() && keep(p) {
                list.push(p.to_path_buf());
            }
        }
    }
    Ok(list)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut b = GlobSetBuilder::new();
    for pat in patterns {
        b.add(Glob::new(pat)?);
    }
    Ok(Some(b.build()?))
}

fn is_image(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "bmp" | "tga" | "gif")
    )
}

fn key_for(p: &Path) -> String {
    p.to_string_lossy().replace('\\', "/")
}

fn load_images_with_progress(paths: &[PathBuf], progress: bool) -> anyhow::Result<Vec<InputImage>> {
    use indicatif::{ProgressBar, ProgressStyle};
    let bar = if progress {
        let b = ProgressBar::new(paths.len() as u64);
        b.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} loading {pos}/{len} [{elapsed_precise}] {wide_msg}",
            )
            .unwrap(),
        );
        Some(b)
    } else {
        None
    };
    let mut list = Vec::with_capacity(paths.len());
    for p in paths {
        let msg = p.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if let Some(b) = &bar {
            b.set_message(msg.to_string());
        }
        match load_image(p) {
            Ok(img) => list.push(InputImage {
                key: key_for(p),
                image: img,
            }),
            Err(e) => {
                error!(?p, error = %e, "skip image");
            }
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok(list)
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    width: Option<u32>,
    height: Option<u32>,
    background_color: Option<[u8; 4]>,
}

impl YamlConfig {
    fn into_tilify_config(self, mut cfg: TilifyConfig) -> TilifyConfig {
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.background_color {
            cfg.background_color = v;
        }
        cfg
    }
}
