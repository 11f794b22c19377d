use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;

mod app;
mod constants;
mod detail;
mod engine;
mod error;
mod input;
mod layout;
mod lock;
mod manifest;
mod navigator;
mod page;
mod scroll_lock;
mod slide;
mod slider;
mod state;
mod text_page;
mod texture_loader;
mod timeline;

use crate::app::App;
use crate::constants::*;

/// Fullscreen slide gallery for a single artist.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Image directory, or a TOML manifest listing images and titles
    source: PathBuf,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Start in fullscreen mode
    #[arg(long)]
    fullscreen: bool,

    /// Artist credited in the detail viewer (overrides the manifest)
    #[arg(long)]
    artist: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    info!("input path: {:?}", cli.source);

    let mut builder = raylib::init();
    builder
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Slide Gallery")
        .vsync()
        .resizable();
    if cli.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape closes the detail viewer, not the window.
    rl.set_exit_key(None);

    let mut app = App::new(&mut rl, &thread, cli.source.clone(), cli.artist)
        .with_context(|| format!("failed to load gallery from {:?}", cli.source))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.update(&mut rl, &thread, dt);

        let mut d = rl.begin_drawing(&thread);
        app.draw(&mut d);
    }
    Ok(())
}
