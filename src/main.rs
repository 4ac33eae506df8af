//! tenpin - score ten-pin bowling games from the command line
//!
//! Each game is printed in normalized notation with its total. Games that
//! fail to parse or score are reported on stderr and make the exit status 1.

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tenpin_score::Game;

#[derive(Parser)]
#[command(name = "tenpin")]
#[command(about = "Score ten-pin bowling games written in standard notation")]
#[command(version)]
struct Cli {
    /// Games to score, e.g. "X7/9-X-88/-6X8/X11" (one per line on stdin when omitted)
    games: Vec<String>,

    /// Print a frame-by-frame scorecard
    #[arg(long)]
    frames: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();

    let games = if cli.games.is_empty() {
        read_games(io::stdin().lock())?
    } else {
        cli.games
    };

    let mut failed = false;
    for input in &games {
        if let Err(e) = Game::parse(input).and_then(|game| report(&game, cli.frames)) {
            eprintln!("{input}: error: {e}");
            failed = true;
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn read_games(reader: impl BufRead) -> Result<Vec<String>> {
    let mut games = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read games from stdin")?;
        if !line.trim().is_empty() {
            games.push(line);
        }
    }
    Ok(games)
}

fn report(game: &Game, frames: bool) -> Result<(), tenpin_score::Error> {
    let scored = game.frames()?;
    let total = scored.last().map_or(0, |f| f.running_total);

    if frames {
        println!("{game}");
        for frame in &scored {
            println!("  {frame}");
        }
        println!("  total {total}");
    } else {
        println!("{game}: {total}");
    }

    Ok(())
}
