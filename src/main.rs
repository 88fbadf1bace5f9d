mod ops;
mod renderer;
mod types;
mod ui;

use std::path::Path;
use std::process;

use anyhow::{Result, anyhow};
use tracing::info;

use crate::ops::frame_ops::load_frames;
use crate::renderer::driver::SpriteDriver;
use crate::types::config::PreviewConfig;
use crate::ui::app::{AppState, PreviewApp};
use crate::ui::sprite_view::SpriteView;

const CONFIG_FILE: &str = "spriteview.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("spriteview failed: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config_path = Path::new(CONFIG_FILE);
    let config = if config_path.exists() {
        PreviewConfig::load_from_file(config_path)?
    } else {
        PreviewConfig::default()
    };
    config.validate()?;
    info!(
        folder = %config.sprite_folder.display(),
        frames = config.frame_count,
        fps = config.fps,
        "starting sprite preview"
    );

    let frames = load_frames(&config.sprite_folder, config.frame_count)?;
    let driver = SpriteDriver::new(frames, config.fps);

    let app = PreviewApp::new(AppState {
        driver,
        sprite_view: SpriteView::default(),
        status: None,
    });

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([360.0, 380.0])
            .with_title("Sprite Animation Preview"),
        ..Default::default()
    };
    eframe::run_native(
        "Sprite Animation Preview",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("event loop failed: {e}"))?;
    Ok(())
}
