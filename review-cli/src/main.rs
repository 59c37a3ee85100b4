//! Review Tracker CLI - Command line interface for slide and demo reviews
//!
//! Walks through slides or demo URLs one at a time, records remarks, and saves
//! a plain-text review report once every item has been reviewed.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use review_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{DemosArgs, SlidesArgs};

/// Review Tracker: sequential review of slides and demos
#[derive(Parser, Debug)]
#[command(name = "review-tracker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory the review report is written to (overrides config and env)
    #[arg(long, global = true, env = "REVIEW_TRACKER_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Largest number of items accepted (overrides config and env)
    #[arg(long, global = true, env = "REVIEW_TRACKER_MAX_ITEMS")]
    max_items: Option<usize>,

    /// Print the report instead of writing a file
    #[arg(long, global = true)]
    stdout: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Review presentation slides
    #[command(visible_alias = "s")]
    Slides(SlidesArgs),

    /// Review demo URLs from a sheet
    #[command(visible_alias = "d")]
    Demos(DemosArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the interactive prompt stays readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.max_items, cli.output_dir.clone(), cli.stdout)?;

    if cli.verbose {
        tracing::info!(
            max_items = config.intake.max_items,
            output_dir = %config.export.output_dir.display(),
            stdout = config.export.stdout,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("review-tracker {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Slides(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Demos(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Config) => {
            println!("Review Tracker Configuration");
            println!("============================");
            println!();
            println!("Intake Settings:");
            println!("  max_items: {}", config.intake.max_items);
            println!();
            println!("Export Settings:");
            println!("  output_dir: {}", config.export.output_dir.display());
            println!("  stdout: {}", config.export.stdout);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Review Tracker - What are you going to review?");
            println!();
            println!("  review-tracker slides --count <N>   Slide Review Tracker");
            println!("  review-tracker demos --file <PATH>  Demo Review Tracker");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
