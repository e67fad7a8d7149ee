//! Shared configuration loader for the wepub toolchain.
//!
//! `defaults/wepub.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`WepubConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use wepub_render::Settings;

const DEFAULT_TOML: &str = include_str!("../defaults/wepub.default.toml");

/// Top-level configuration consumed by wepub applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WepubConfig {
    pub render: RenderConfig,
    pub theme: ThemeConfig,
}

/// Mirrors the knobs exposed by the rendering pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub font_size: String,
    pub heading_numbering_style: String,
    pub primary_color: String,
    pub force_line_breaks: bool,
    pub image_domain: String,
    pub enable_reference_links: bool,
}

impl From<RenderConfig> for Settings {
    fn from(config: RenderConfig) -> Self {
        Settings {
            font_size: config.font_size,
            heading_numbering_style: config.heading_numbering_style,
            primary_color: config.primary_color,
            force_line_breaks: config.force_line_breaks,
            image_domain: config.image_domain,
            enable_reference_links: config.enable_reference_links,
        }
    }
}

impl From<&RenderConfig> for Settings {
    fn from(config: &RenderConfig) -> Self {
        Settings {
            font_size: config.font_size.clone(),
            heading_numbering_style: config.heading_numbering_style.clone(),
            primary_color: config.primary_color.clone(),
            force_line_breaks: config.force_line_breaks,
            image_domain: config.image_domain.clone(),
            enable_reference_links: config.enable_reference_links,
        }
    }
}

/// Theme repository selection.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// Directory scanned for `*.css` theme files; empty disables theming.
    pub directory: String,
    /// Selected theme id, the file stem of a discovered theme.
    pub current: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WepubConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WepubConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.font_size, "15px");
        assert!(!config.render.enable_reference_links);
        assert_eq!(config.theme.current, "default");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.heading_numbering_style", "chinese-dot")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.heading_numbering_style, "chinese-dot");
    }

    #[test]
    fn render_config_converts_to_settings() {
        let config = load_defaults().expect("defaults to deserialize");
        let settings: Settings = config.render.into();
        assert_eq!(settings.font_size, "15px");
        assert!(!settings.force_line_breaks);
        assert!(settings.image_domain.is_empty());
    }
}
