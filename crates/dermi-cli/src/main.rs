mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dermi", about = "Skin image analysis client")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and print the returned metrics
    Process(commands::process::ProcessArgs),
    /// Check that the analysis endpoint is reachable
    Ping(commands::ping::PingArgs),
    /// Print or save a default configuration file
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Ping(args) => commands::ping::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
