use anyhow::Context;
use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::{ColorScheme, Result};

/// Sidebar profile block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Mas".into(),
            role: "Admin".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub log_level: String,
    pub dark_mode: bool,
    pub default_color_scheme: ColorScheme,
    pub profile: Profile,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Admin Dashboard".into(),
            log_level: "info".into(),
            dark_mode: false,
            default_color_scheme: ColorScheme::Default,
            profile: Profile::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .context("failed to parse dashboard config")?
            .try_deserialize()
            .context("invalid dashboard config")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(DashboardConfig::from_toml("").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            title = "Ops"
            dark_mode = true
            default_color_scheme = "ocean"

            [profile]
            name = "Irwan"
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Ops");
        assert!(config.dark_mode);
        assert_eq!(config.default_color_scheme, ColorScheme::Ocean);
        assert_eq!(config.profile.name, "Irwan");
        assert_eq!(config.profile.role, "Admin");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn unknown_color_scheme_is_an_error() {
        let err = DashboardConfig::from_toml(r#"default_color_scheme = "neon""#).unwrap_err();
        assert!(err.message.starts_with("invalid dashboard config"), "{}", err.message);
    }

    #[test]
    fn broken_toml_is_an_error() {
        assert!(DashboardConfig::from_toml("title = ").is_err());
    }
}
