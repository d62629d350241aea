//! Countdown configuration resource.
//!
//! Manages the countdown settings loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [countdown]
//! duration = 3.0
//! animate_text_size = true
//! min_size = 150
//! max_size = 300
//! font_size = 150
//! values = [{"text": "GO!", "font_size": 200}]
//!
//! [loop]
//! target_fps = 60
//! ```
//!
//! `values` is a JSON array of override entries, index 0 being the label
//! shown when the countdown reaches zero.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::countdown::{CountdownSettings, CountdownValue};

/// Default safe values for startup
const DEFAULT_FONT_SIZE: f32 = 150.0;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./countdown.ini";

/// Countdown configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct CountdownConfig {
    /// Settings handed to every countdown spawned from this config.
    pub settings: CountdownSettings,
    /// Initial font size of the label.
    pub font_size: f32,
    /// Frames per second of the driving loop.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            settings: CountdownSettings::default(),
            font_size: DEFAULT_FONT_SIZE,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Fixed frame step derived from `target_fps`.
    pub fn frame_time(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing or invalid values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        // `values` holds JSON; override texts may contain '#' or ';'.
        config.set_inline_comment_symbols(Some(&[]));
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [countdown] section
        if let Some(duration) = config.getfloat("countdown", "duration").ok().flatten() {
            if duration > 0.0 {
                self.settings.duration = duration as f32;
            } else {
                warn!("Ignoring non-positive countdown duration {}", duration);
            }
        }
        if let Some(animate) = config.getbool("countdown", "animate_text_size").ok().flatten() {
            self.settings.animate_text_size = animate;
        }
        if let Some(min_size) = config.getfloat("countdown", "min_size").ok().flatten() {
            self.settings.min_size = min_size as f32;
        }
        if let Some(max_size) = config.getfloat("countdown", "max_size").ok().flatten() {
            self.settings.max_size = max_size as f32;
        }
        if let Some(font_size) = config.getfloat("countdown", "font_size").ok().flatten() {
            self.font_size = font_size as f32;
        }
        if let Some(values) = config.get("countdown", "values") {
            match parse_values(&values) {
                Ok(values) => self.settings.values = values,
                Err(e) => warn!("{}", e),
            }
        }

        // [loop] section
        if let Some(fps) = config.getuint("loop", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        info!(
            "Loaded config: duration={}s, {} value overrides, animate={} ({}..{}), fps={}",
            self.settings.duration,
            self.settings.values.len(),
            self.settings.animate_text_size,
            self.settings.min_size,
            self.settings.max_size,
            self.target_fps
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [countdown] section
        let s = &self.settings;
        config.set("countdown", "duration", Some(s.duration.to_string()));
        config.set(
            "countdown",
            "animate_text_size",
            Some(s.animate_text_size.to_string()),
        );
        config.set("countdown", "min_size", Some(s.min_size.to_string()));
        config.set("countdown", "max_size", Some(s.max_size.to_string()));
        config.set("countdown", "font_size", Some(self.font_size.to_string()));
        let values = serde_json::to_string(&s.values)
            .map_err(|e| format!("Failed to serialize countdown values: {}", e))?;
        config.set("countdown", "values", Some(values));

        // [loop] section
        config.set("loop", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

/// Parse the JSON override table of the `values` key.
pub fn parse_values(raw: &str) -> Result<Vec<CountdownValue>, String> {
    serde_json::from_str(raw).map_err(|e| format!("Invalid countdown values '{}': {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "gamecountdown_{}_{}.ini",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn defaults_match_component_defaults() {
        let config = CountdownConfig::new();
        assert_eq!(config.settings, CountdownSettings::default());
        assert_eq!(config.target_fps, 60);
        assert!((config.frame_time() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let mut config = CountdownConfig::with_path(temp_config_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.settings, CountdownSettings::default());
    }

    #[test]
    fn save_then_load_restores_values() {
        let path = temp_config_path("roundtrip");
        let mut config = CountdownConfig::with_path(&path);
        config.settings = CountdownSettings::new(5.0)
            .with_values(vec![CountdownValue::new("GO!", 200.0)])
            .without_size_animation();
        config.target_fps = 30;
        config.save_to_file().unwrap();

        let mut loaded = CountdownConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.settings, config.settings);
        assert_eq!(loaded.target_fps, 30);
    }

    #[test]
    fn comment_symbols_in_value_texts_survive_reload() {
        let path = temp_config_path("commentsymbols");
        let mut config = CountdownConfig::with_path(&path);
        config.settings = CountdownSettings::new(3.0).with_values(vec![
            CountdownValue::new("#1; go", 200.0),
            CountdownValue::text("Ready; Go"),
        ]);
        config.save_to_file().unwrap();

        let mut loaded = CountdownConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.settings.values, config.settings.values);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let path = temp_config_path("badvalues");
        std::fs::write(
            &path,
            "[countdown]\nduration = 2\nvalues = not json\n",
        )
        .unwrap();

        let mut config = CountdownConfig::with_path(&path);
        config.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert!((config.settings.duration - 2.0).abs() < 1e-6);
        assert!(config.settings.values.is_empty());
    }

    #[test]
    fn parse_values_rejects_garbage() {
        assert!(parse_values("[{\"font_size\": 1}]").is_err());
        assert!(parse_values("[]").unwrap().is_empty());
    }
}
