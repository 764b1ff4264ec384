//! silhouette CLI - batch silhouette extraction.
//!
//! For every input image writes `<stem>_color.png` and `<stem>_gray.png`
//! into the output directory. Set `RUST_LOG=debug` to trace the stages.

use clap::Parser;
use silhouette_color::ThresholdBand;
use silhouette_core::Image;
use silhouette_extract::{SegmentationConfig, SegmentationPipeline};
use silhouette_io::{ImageFormat, read_image, write_image};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "silhouette")]
#[command(about = "Extract the animal silhouette from photographs onto a white background")]
#[command(version)]
struct Cli {
    /// Input images (PNG or binary PNM).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory the cropped images are written to.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Band of the Lab/Luv/red feature, as MIN,MAX.
    #[arg(long, value_parser = parse_band)]
    band_a: Option<ThresholdBand>,

    /// Band of the XYZ Z feature, as MIN,MAX.
    #[arg(long, value_parser = parse_band)]
    band_b: Option<ThresholdBand>,

    /// Background flood fill seed, as X,Y.
    #[arg(long, value_parser = parse_point)]
    seed: Option<(u32, u32)>,
}

fn parse_pair<T: std::str::FromStr>(s: &str) -> Result<(T, T), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated values, got {s:?}"))?;
    let a = a.trim().parse().map_err(|_| format!("invalid number {a:?}"))?;
    let b = b.trim().parse().map_err(|_| format!("invalid number {b:?}"))?;
    Ok((a, b))
}

fn parse_band(s: &str) -> Result<ThresholdBand, String> {
    let (min, max) = parse_pair::<u8>(s)?;
    ThresholdBand::new(min, max).map_err(|e| e.to_string())
}

fn parse_point(s: &str) -> Result<(u32, u32), String> {
    parse_pair(s)
}

impl Cli {
    fn config(&self) -> SegmentationConfig {
        let mut config = SegmentationConfig::default();
        if let Some(band) = self.band_a {
            config = config.with_band_a(band);
        }
        if let Some(band) = self.band_b {
            config = config.with_band_b(band);
        }
        if let Some((x, y)) = self.seed {
            config = config.with_flood_seed(x, y);
        }
        config
    }
}

fn output_path(out_dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    out_dir.join(format!("{stem}_{suffix}.{}", ImageFormat::Png.extension()))
}

fn process(pipeline: &SegmentationPipeline, input: &Path, out_dir: &Path) -> CliResult<()> {
    log::info!("Processing image: {}", input.display());
    let mut image: Image = read_image(input)?;
    if image.is_gray() {
        image = image.gray_to_rgb()?;
    }

    let extraction = pipeline.run(&image)?;
    let b = extraction.bounding_box;
    log::info!(
        "Silhouette at ({}, {})-({}, {}), crop {}x{}",
        b.x_min,
        b.y_min,
        b.x_max,
        b.y_max,
        extraction.color.width(),
        extraction.color.height()
    );

    for (image, suffix) in [(&extraction.color, "color"), (&extraction.gray, "gray")] {
        let path = output_path(out_dir, input, suffix);
        write_image(image, &path, ImageFormat::Png)?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn run(cli: &Cli) -> CliResult<usize> {
    let pipeline = SegmentationPipeline::new(cli.config())?;
    std::fs::create_dir_all(&cli.out_dir)?;

    let mut failed = 0;
    for input in &cli.inputs {
        if let Err(e) = process(&pipeline, input, &cli.out_dir) {
            log::error!("Could not extract a silhouette from {}: {}", input.display(), e);
            failed += 1;
        }
    }
    Ok(failed)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            log::error!("{} of {} images failed", failed, cli.inputs.len());
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
