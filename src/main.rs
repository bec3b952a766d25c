//! CodeBreaker - CLI
//!
//! Interactive code-guessing game with an append-only score book.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{PlayConfig, run_play, run_scores},
    interactive::Console,
    round::RoundEngine,
    scorebook::DEFAULT_SCORES_FILE,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Guess the hidden four-digit code (digits 1-6) in three attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File that saved results are appended to
    #[arg(long, global = true, default_value = DEFAULT_SCORES_FILE)]
    scores_file: PathBuf,

    /// Seed for secrets and hints (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Show the secret after a lost round
    #[arg(long, global = true)]
    reveal: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,

    /// List saved scores, best first
    Scores,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli),
        Commands::Scores => run_scores_command(&cli),
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let config = PlayConfig::new(&cli.scores_file).with_reveal_secret(cli.reveal);
    let mut engine = RoundEngine::new(build_rng(cli.seed));

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    run_play(&config, &mut engine, &mut console).context("game session ended unexpectedly")?;
    Ok(())
}

fn run_scores_command(cli: &Cli) -> Result<()> {
    run_scores(&cli.scores_file, &mut io::stdout())
        .with_context(|| format!("failed to read scores from {}", cli.scores_file.display()))?;
    Ok(())
}
