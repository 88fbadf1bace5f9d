use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use tracing::{debug, info};

use crate::types::sprite::FrameSequence;

/// Digits used to zero-pad frame indices for a sprite with `count`
/// frames: the smallest `w` with `10^w >= count`. A single-frame sprite
/// yields width 0, which still formats index 0 as a bare `0` because
/// zero-padding never truncates.
pub fn padding_width(count: usize) -> usize {
    let mut width = 0;
    let mut limit: usize = 1;
    while limit < count {
        width += 1;
        limit = limit.saturating_mul(10);
    }
    width
}

/// File name for a single frame, e.g. `sprite_07.png` at width 2.
pub fn frame_file_name(index: usize, width: usize) -> String {
    format!("sprite_{index:0width$}.png")
}

pub fn frame_path(folder: &Path, index: usize, width: usize) -> PathBuf {
    folder.join(frame_file_name(index, width))
}

/// Eagerly loads and decodes every frame of a sprite. Fails on the first
/// missing or undecodable file, naming the path that was expected.
pub fn load_frames(folder: &Path, count: usize) -> Result<FrameSequence> {
    ensure!(count > 0, "frame count must be positive, got {count}");

    let width = padding_width(count);
    let mut frames = Vec::with_capacity(count);
    for index in 0..count {
        let path = frame_path(folder, index, width);
        let image = image::open(&path)
            .with_context(|| format!("failed to load sprite frame {}", path.display()))?
            .to_rgba8();
        debug!(frame = index, path = %path.display(), "loaded sprite frame");
        frames.push(image);
    }
    info!(count, folder = %folder.display(), "sprite frames loaded");
    Ok(FrameSequence::new(frames))
}

/// Counts the `sprite_*.png` files in a folder, for opening a sprite
/// whose frame count is not known up front.
pub fn count_frames(folder: &Path) -> Result<usize> {
    let entries = fs::read_dir(folder)
        .with_context(|| format!("failed to read sprite folder {}", folder.display()))?;

    let mut count = 0;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read sprite folder {}", folder.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with("sprite_") && name.ends_with(".png") {
            count += 1;
        }
    }
    ensure!(count > 0, "no sprite_*.png frames found in {}", folder.display());
    Ok(count)
}
