pub mod action;
pub mod app;
pub mod canvas;
pub mod cli;
pub mod components;
pub mod config;
pub mod constants;
pub mod director;
pub mod pattern;
pub mod scenes;
pub mod tree;
pub mod tui;
pub mod utils;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::{
    app::App,
    cli::Cli,
    constants::{FRAME_RATE, TICK_RATE},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = Cli::parse();
    let mut app = App::new(args.name, TICK_RATE, FRAME_RATE)?;
    app.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
