use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Args;
use dermi_core::client::ProcessClient;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::summary;

#[derive(Args)]
pub struct ProcessArgs {
    /// Image file to upload
    pub file: PathBuf,

    /// Analysis endpoint URL (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print color channels exactly as returned, without rounding
    #[arg(long)]
    pub raw: bool,

    /// Write the processed image returned by the endpoint to this path
    #[arg(long)]
    pub save_image: Option<PathBuf>,
}

pub fn run(args: &ProcessArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(ref endpoint) = args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if args.raw {
        config.round_color_channels = false;
    }

    let client = ProcessClient::new(config)?;
    debug!(endpoint = %client.config().endpoint, "resolved configuration");

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Uploading {}", args.file.display()));

    let start = Instant::now();
    let result = client.process_file(&args.file);
    pb.finish_and_clear();

    let analysis =
        result.with_context(|| format!("Processing {} failed", args.file.display()))?;
    summary::print_analysis(&analysis, client.config(), start.elapsed());

    if let Some(ref path) = args.save_image {
        let image = analysis
            .image
            .as_ref()
            .context("The endpoint returned no image to save")?;
        std::fs::write(path, image.to_jpeg_bytes()?)
            .with_context(|| format!("Failed to write image to {}", path.display()))?;
        println!("Processed image saved to {}", path.display());
    }

    Ok(())
}
