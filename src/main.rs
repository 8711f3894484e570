mod config;
mod game;
mod logger;
mod snake;
mod state;
mod term;
mod viewport;

use std::process::exit;

use log::{error, info, LevelFilter};

pub type TermInt = u16;
/// World coordinates. Signed, since the head can step onto the wall at -1.
pub type Coords = (i32, i32);

fn run() -> anyhow::Result<()> {
    // The game still runs without a log file
    if let Err(err) = logger::init_log(LevelFilter::Info, logger::LOG_FILE) {
        eprintln!("Logging disabled: {:#}", err);
    }
    info!("Snake start...");

    let status = game::SnakeGame::new(config::GameConfig::default()).run()?;
    info!("Snake exit: {:?}", status);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        error!("{:#}", err);
        eprintln!("Some error happened: {:#}", err);
        exit(1);
    }
}
