use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::Style;
use dermi_core::client::ProcessClient;

#[derive(Args)]
pub struct PingArgs {
    /// Analysis endpoint URL (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &PingArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(ref endpoint) = args.endpoint {
        config.endpoint = endpoint.clone();
    }

    let client = ProcessClient::new(config)?;
    let url = client.probe_url()?;

    println!("Probing {url}");
    client
        .probe()
        .with_context(|| format!("Endpoint {url} is unreachable"))?;
    println!("{}", Style::new().green().apply_to("Endpoint is healthy"));

    Ok(())
}
