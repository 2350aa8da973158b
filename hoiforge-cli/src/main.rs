use clap::Parser;
use std::path::PathBuf;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "hoiforge")]
#[command(about = "Hearts of Iron IV modding toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file to use instead of config/settings.json next to the executable
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let store = match cli.config {
        Some(path) => hoiforge::settings::SettingsStore::new(path),
        None => hoiforge::settings::SettingsStore::at_default_location(),
    };

    cli.command.execute(&store)?;

    Ok(())
}
