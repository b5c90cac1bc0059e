mod config;
mod render;

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use twenty48_core::{Board, Move};

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the tile generator (overrides the config file)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match &cli.config {
        Some(path) => config::Config::from_toml(path)?,
        None => config::Config::default(),
    };

    let mut rng = match cli.seed.or(config.seed) {
        Some(seed) => {
            debug!("seeding tile generator with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // Two spawns before the first render, then hand the board to the
    // redraw thread behind a mutex: moves and renders never interleave.
    let board = Arc::new(Mutex::new(Board::new_game(&mut rng)));
    let stop = Arc::new(AtomicBool::new(false));
    let tick = Duration::from_millis(config.render.tick_ms);
    let render_handle = {
        let board = Arc::clone(&board);
        let stop = Arc::clone(&stop);
        thread::spawn(move || render::run(board, tick, stop))
    };

    info!("enter a direction (up/down/left/right or wasd), q to quit");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        if matches!(token, "q" | "quit" | "exit") {
            break;
        }
        // One submitted line is one discrete move request.
        match token.parse::<Move>() {
            Ok(direction) => {
                let mut board = board.lock().expect("board lock poisoned");
                if !board.step(direction, &mut rng) {
                    debug!("move {direction:?} changed nothing");
                }
            }
            Err(err) => warn!("{err}"),
        }
    }

    stop.store(true, Ordering::Relaxed);
    let _ = render_handle.join();
    Ok(())
}
