use eframe::egui;

use crate::types::sprite::FrameSequence;

pub const SPRITE_DISPLAY_SIZE: f32 = 200.0;

/// Shows the current sprite frame in a fixed square.
///
/// Each frame's texture is uploaded on first use and reused afterwards;
/// the cache is dropped when the sequence is replaced.
#[derive(Default)]
pub struct SpriteView {
    textures: Vec<Option<egui::TextureHandle>>,
}

impl SpriteView {
    /// Drops cached textures, for when the frame sequence changes.
    pub fn clear(&mut self) {
        self.textures.clear();
    }

    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        frames: &FrameSequence,
        index: usize,
    ) -> Option<egui::TextureHandle> {
        let image = frames.get(index)?;
        if self.textures.len() != frames.len() {
            self.textures = vec![None; frames.len()];
        }
        if self.textures[index].is_none() {
            let (width, height) = image.dimensions();
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [width as usize, height as usize],
                image.as_raw(),
            );
            let texture = ctx.load_texture(
                format!("sprite_frame_{index}"),
                color_image,
                egui::TextureOptions::NEAREST,
            );
            self.textures[index] = Some(texture);
        }
        self.textures[index].clone()
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        frames: &FrameSequence,
        index: usize,
    ) {
        match self.texture_for(ctx, frames, index) {
            Some(texture) => {
                ui.add_sized(
                    [SPRITE_DISPLAY_SIZE, SPRITE_DISPLAY_SIZE],
                    egui::Image::new(&texture)
                        .fit_to_exact_size(egui::vec2(SPRITE_DISPLAY_SIZE, SPRITE_DISPLAY_SIZE)),
                );
            }
            None => {
                ui.add_sized(
                    [SPRITE_DISPLAY_SIZE, SPRITE_DISPLAY_SIZE],
                    egui::Label::new("No sprite loaded"),
                );
            }
        }
    }
}
