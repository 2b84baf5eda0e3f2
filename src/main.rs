//! # Mazecast Main Entry Point
//!
//! Builds the maze, spawns the player, and runs the macroquad frame loop:
//! poll input, update the player, render the columns, present.

use clap::Parser;
use log::info;
use macroquad::prelude::*;
use mazecast::{
    config, ColumnRenderer, GridMap, InputHandler, MacroquadDisplay, MazecastResult, Palette,
    Player,
};

/// Command line arguments for the mazecast renderer.
#[derive(Parser, Debug)]
#[command(name = "mazecast")]
#[command(about = "A real-time first-person maze renderer built on grid ray casting")]
#[command(version)]
struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: config::WINDOW_TITLE.to_string(),
        window_width: config::SCREEN_WIDTH as i32,
        window_height: config::SCREEN_HEIGHT as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> MazecastResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("starting mazecast v{}", mazecast::VERSION);

    // Fixed startup configuration: any failure here is fatal and reported
    // before the first frame.
    let map = GridMap::the_maze()?;
    let mut player = Player::spawn()?;
    let palette = Palette::default();

    let input_handler = InputHandler::new();
    let mut display = MacroquadDisplay::new();

    loop {
        let input = input_handler.poll();
        if input.quit {
            info!("quit requested");
            break;
        }

        player.advance(&input, &map);

        // Track the live window size so resizes keep one ray per column.
        let (width, height) = display.screen_size();
        let renderer = ColumnRenderer::new(width, height, palette);
        let slices = renderer.render_frame(&map, &player)?;

        display.clear();
        display.draw_slices(&slices);
        display.draw_fps();

        next_frame().await;
    }

    Ok(())
}

/// Initializes the logging system at the requested level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
