//! Headless RoboSoccer CLI
//!
//! Plays a match without a window and reports the result.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use robo_core::{GameMode, MatchSummary, SessionConfig, TeamSide};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "robo_cli")]
#[command(about = "Run 2v2 soccer matches headless", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Play one match and print the summary
    Run {
        /// Game mode (man_vs_man, bot_vs_man, bot_vs_bot)
        #[arg(long)]
        mode: Option<GameMode>,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many frames instead of the full match
        #[arg(long)]
        frames: Option<u64>,

        /// Session config JSON (defaults to $ROBO_SESSION_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the data feed as JSON lines
        #[arg(long)]
        feed: Option<PathBuf>,

        /// Write an export document
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { mode, seed, frames, config, feed, export } => {
            let session = match config {
                Some(path) => SessionConfig::from_path(&path)?,
                None => SessionConfig::from_env()?,
            };

            let mut options = robo_cli::RunOptions::from_config(&session);
            if let Some(mode) = mode {
                options.mode = mode;
            }
            if let Some(seed) = seed {
                options.seed = seed;
            }
            options.frames = frames;
            options.feed_path = feed;
            options.export_path = export;

            println!("Running {} (seed {})", options.mode, options.seed);
            let summary = robo_cli::run_headless(&options)?;
            print_summary(&summary);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_summary(summary: &MatchSummary) {
    println!("\nFinal score: Blue {} - {} Red", summary.score_blue, summary.score_red);
    match summary.winner() {
        Some(team) => println!("   Winner:     {team}"),
        None => println!("   Winner:     draw"),
    }
    println!(
        "   Possession: Blue {:.1}% / Red {:.1}%",
        summary.possession_blue_pct,
        summary.possession_red_pct
    );
    println!(
        "   Passes:     Blue {} / Red {}",
        summary.passes.get(TeamSide::Blue),
        summary.passes.get(TeamSide::Red)
    );
    println!("   Restarts:   {}", summary.restarts.total());
    println!(
        "   Played:     {} frames ({:.1}s)",
        summary.frames,
        summary.duration.as_secs_f32()
    );
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("robo_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
