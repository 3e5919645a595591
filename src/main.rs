use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod texture_loader;
mod viewer;

use carousel::constants::*;
use carousel::{Carousel, html, view};

use crate::cli::{Cli, Command, SourceArgs};
use crate::viewer::CarouselViewer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Command::View(source) => run_viewer(&source),
        Command::Html { source, output } => {
            let (config, _) = source.load()?;
            let carousel = Carousel::mount(config).context("Invalid carousel configuration")?;
            let markup = html::render(&view::build(&carousel));
            carousel.unmount();
            match output {
                Some(path) => {
                    fs::write(&path, markup).with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "markup written");
                }
                None => print!("{markup}"),
            }
            Ok(())
        }
    }
}

fn run_viewer(source: &SourceArgs) -> Result<()> {
    let (config, base_dir) = source.load()?;
    let carousel = Carousel::mount(config).context("Invalid carousel configuration")?;
    info!(source = %source.source.display(), "starting viewer");

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut viewer = CarouselViewer::new(carousel);
    viewer.initialize(&mut rl, &thread, &base_dir);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        viewer.render_frame(dt, &mut rl, &thread);
    }

    // Textures go before the window does
    viewer.unmount();
    Ok(())
}
