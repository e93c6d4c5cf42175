use crate::config::types::CinegridConfig;
use crate::error::{CinegridError, Result};
use crate::paths::settings_path;
use crate::ui::focus::NavConfig;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

pub fn load_cfg() -> CinegridConfig {
    load_cfg_from(&settings_path())
}

/// Default settings if the file doesn't exist or has an error
pub fn load_cfg_from(path: &Path) -> CinegridConfig {
    let Ok(file) = File::open(path) else {
        return CinegridConfig::default();
    };
    match serde_json::from_reader::<_, CinegridConfig>(BufReader::new(file)) {
        Ok(mut config) => {
            // Zero makes every scan empty; huge values stall key handling
            config.nav.max_cols = config.nav.max_cols.clamp(1, NavConfig::MAX_SCAN);
            config.nav.max_rows = config.nav.max_rows.clamp(1, NavConfig::MAX_SCAN);
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
            CinegridConfig::default()
        }
    }
}

pub fn save_cfg(config: &CinegridConfig) -> Result<()> {
    save_cfg_to(config, &settings_path())
}

pub fn save_cfg_to(config: &CinegridConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CinegridError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| CinegridError::io(path, e))?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_cfg_from(&dir.path().join("settings.json")),
            CinegridConfig::default()
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "nav": { "max_cols": 24 }, "fullscreen": true }"#).unwrap();

        let config = load_cfg_from(&path);
        assert_eq!(config.nav.max_cols, 24);
        assert_eq!(config.nav.max_rows, 15);
        assert!(config.fullscreen);
        assert!(config.shuffle_hero);
    }

    #[test]
    fn test_zero_bounds_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "nav": { "max_cols": 0, "max_rows": 0 } }"#).unwrap();

        let config = load_cfg_from(&path);
        assert_eq!((config.nav.max_cols, config.nav.max_rows), (1, 1));
    }

    #[test]
    fn test_huge_bounds_are_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "nav": { "max_cols": 50000000, "max_rows": 18446744073709551615 } }"#,
        )
        .unwrap();

        let config = load_cfg_from(&path);
        assert_eq!(config.nav.max_cols, NavConfig::MAX_SCAN);
        assert_eq!(config.nav.max_rows, NavConfig::MAX_SCAN);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg/settings.json");
        let config = CinegridConfig {
            zoom: 1.5,
            sidebar_open: true,
            ..Default::default()
        };
        save_cfg_to(&config, &path).unwrap();
        assert_eq!(load_cfg_from(&path), config);
    }
}
