use std::io;

use anyhow::Result;
use tracing::info;

use draughts_cli::Game;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("draughts starting");

    println!("Welcome to draughts!");
    let stdin = io::stdin();
    let mut game = Game::new(stdin.lock(), io::stdout());
    game.run()?;
    println!("Game Over!");

    Ok(())
}
