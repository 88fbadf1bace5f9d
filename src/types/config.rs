use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::types::playback::{FPS_MAX, FPS_MIN};

pub const DEFAULT_SPRITE_FOLDER: &str = "spriteImages";
pub const DEFAULT_FRAME_COUNT: usize = 12;
pub const DEFAULT_FPS: u32 = 10;

/// Startup settings for the previewer. Read once from an optional JSON
/// file next to the executable; never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub sprite_folder: PathBuf,
    pub frame_count: usize,
    pub fps: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            sprite_folder: PathBuf::from(DEFAULT_SPRITE_FOLDER),
            frame_count: DEFAULT_FRAME_COUNT,
            fps: DEFAULT_FPS,
        }
    }
}

impl PreviewConfig {
    /// Load a config from a JSON file at the given path.
    pub fn load_from_file(path: &Path) -> Result<PreviewConfig> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: PreviewConfig = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Rejects values the previewer cannot run with before any file I/O
    /// happens.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.frame_count > 0,
            "frame_count must be positive, got {}",
            self.frame_count
        );
        ensure!(
            (FPS_MIN..=FPS_MAX).contains(&self.fps),
            "fps must be between {FPS_MIN} and {FPS_MAX}, got {}",
            self.fps
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bundled_sprite() {
        let config = PreviewConfig::default();
        assert_eq!(config.sprite_folder, PathBuf::from("spriteImages"));
        assert_eq!(config.frame_count, 12);
        assert_eq!(config.fps, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_frame_count() {
        let config = PreviewConfig {
            frame_count: 0,
            ..PreviewConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_fps_outside_range() {
        let too_low = PreviewConfig {
            fps: 0,
            ..PreviewConfig::default()
        };
        assert!(too_low.validate().is_err());

        let too_high = PreviewConfig {
            fps: 61,
            ..PreviewConfig::default()
        };
        assert!(too_high.validate().is_err());
    }

    #[test]
    fn test_load_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spriteview.json");
        let config = PreviewConfig {
            sprite_folder: PathBuf::from("walk_cycle"),
            frame_count: 8,
            fps: 24,
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = PreviewConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_file_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spriteview.json");
        fs::write(&path, r#"{ "fps": 24 }"#).unwrap();

        let loaded = PreviewConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.fps, 24);
        assert_eq!(loaded.frame_count, DEFAULT_FRAME_COUNT);
        assert_eq!(loaded.sprite_folder, PathBuf::from(DEFAULT_SPRITE_FOLDER));
    }

    #[test]
    fn test_load_from_file_names_missing_path() {
        let err = PreviewConfig::load_from_file(Path::new("/no/such/spriteview.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/spriteview.json"));
    }
}
