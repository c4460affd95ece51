//! Launcher for the air-conditioner control panel.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Conditioner - air-conditioner control panel simulator
#[derive(Parser, Debug)]
#[command(name = "conditioner", version, about)]
struct Args {
    /// Settings file to restore from and save to
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Start from the default settings, ignoring the stored ones
    #[arg(long)]
    reset: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut options = conditioner_gui::GuiOptions {
        reset: args.reset,
        ..Default::default()
    };
    if let Some(path) = args.settings {
        options = options.with_settings_path(path);
    }
    conditioner_gui::run(options)
}
