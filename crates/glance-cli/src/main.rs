mod args;
mod commands;
mod sink;
mod summary;
mod transport;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glance", about = "Viewport mapping and OCR overlay tool")]
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
    /// Show image file metadata
    Info(commands::info::InfoArgs),
    /// Map points and rectangles between window and image space
    Map(commands::map::MapArgs),
    /// Pan offset that brings a media edge into view
    Edge(commands::edge::EdgeArgs),
    /// Find text-like regions in an image
    Detect(commands::detect::DetectArgs),
    /// Recognize and translate screen selections
    Select(commands::select::SelectArgs),
    /// Auto-scan whole images for text
    Scan(commands::scan::ScanArgs),
    /// Print the default overlay config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Map(args) => commands::map::run(args),
        Commands::Edge(args) => commands::edge::run(args),
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Select(args) => commands::select::run(args),
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
