use std::time::Instant;

use eframe::egui;
use tracing::warn;

use crate::ops::frame_ops::{count_frames, load_frames};
use crate::renderer::driver::SpriteDriver;
use crate::types::playback::{FPS_MAX, FPS_MIN};
use crate::ui::sprite_view::SpriteView;

pub struct AppState {
    pub driver: SpriteDriver,
    pub sprite_view: SpriteView,
    pub status: Option<String>,
}

pub struct PreviewApp {
    pub state: AppState,
}

impl PreviewApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Picks a folder and swaps in its frames. A failed open leaves the
    /// current sequence running and surfaces the error as status text.
    fn open_folder(&mut self) {
        let Some(folder) = rfd::FileDialog::new().pick_folder() else {
            return;
        };
        match count_frames(&folder).and_then(|count| load_frames(&folder, count)) {
            Ok(frames) => {
                self.state.driver.replace_frames(frames);
                self.state.sprite_view.clear();
                self.state.status = None;
            }
            Err(e) => {
                warn!(folder = %folder.display(), "failed to open sprite folder: {e:#}");
                self.state.status = Some(format!("{e:#}"));
            }
        }
    }
}

fn fps_label(fps: u32) -> String {
    format!("FPS: {fps}")
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.driver.update(now);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Folder…").clicked() {
                        self.open_folder();
                        ui.close_menu();
                    }
                    if ui.button("Pause").clicked() {
                        self.state.driver.pause();
                        ui.close_menu();
                    }
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let index = self.state.driver.current_frame();
                let AppState {
                    driver,
                    sprite_view,
                    ..
                } = &mut self.state;
                sprite_view.show(ui, ctx, driver.frames(), index);
            });

            ui.horizontal(|ui| {
                ui.label(fps_label(self.state.driver.fps()));
                let mut fps = self.state.driver.fps();
                if ui
                    .add(egui::Slider::new(&mut fps, FPS_MIN..=FPS_MAX))
                    .changed()
                {
                    self.state.driver.set_fps(fps);
                }
                ui.label("Frames per second");
            });

            let button_text = if self.state.driver.is_playing() {
                "Stop"
            } else {
                "Start"
            };
            if ui.button(button_text).clicked() {
                self.state.driver.toggle(now);
            }

            if let Some(status) = &self.state.status {
                ui.label(egui::RichText::new(status).color(egui::Color32::RED));
            }
        });

        // Wake up again when the next frame is due.
        if let Some(delay) = self.state.driver.next_tick_in(now) {
            ctx.request_repaint_after(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_label_shows_current_rate() {
        assert_eq!(fps_label(30), "FPS: 30");
        assert_eq!(fps_label(1), "FPS: 1");
    }
}
