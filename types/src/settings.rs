use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, err};

/// The local boolean preferences. Dark mode is not one of them, it lives in
/// the shared theme flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    Notifications,
    SoundEffects,
    AutoUpdate,
    HighContrast,
    CompactMode,
}

impl Preference {
    pub const ALL: [Preference; 5] = [
        Preference::Notifications,
        Preference::SoundEffects,
        Preference::AutoUpdate,
        Preference::HighContrast,
        Preference::CompactMode,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Preference::Notifications => "Push Notifications",
            Preference::SoundEffects => "Sound Effects",
            Preference::AutoUpdate => "Auto Updates",
            Preference::HighContrast => "High Contrast",
            Preference::CompactMode => "Compact Mode",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preference::Notifications => "Receive notifications for important updates",
            Preference::SoundEffects => "Play sounds for notifications and actions",
            Preference::AutoUpdate => "Automatically install updates when available",
            Preference::HighContrast => "Increase contrast for better visibility",
            Preference::CompactMode => "Reduce spacing between elements",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub notifications: bool,
    pub sound_effects: bool,
    pub auto_update: bool,
    pub high_contrast: bool,
    pub compact_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            sound_effects: true,
            auto_update: false,
            high_contrast: false,
            compact_mode: false,
        }
    }
}

impl Preferences {
    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::Notifications => self.notifications,
            Preference::SoundEffects => self.sound_effects,
            Preference::AutoUpdate => self.auto_update,
            Preference::HighContrast => self.high_contrast,
            Preference::CompactMode => self.compact_mode,
        }
    }

    pub fn set(&mut self, pref: Preference, enabled: bool) {
        let slot = match pref {
            Preference::Notifications => &mut self.notifications,
            Preference::SoundEffects => &mut self.sound_effects,
            Preference::AutoUpdate => &mut self.auto_update,
            Preference::HighContrast => &mut self.high_contrast,
            Preference::CompactMode => &mut self.compact_mode,
        };
        *slot = enabled;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Default,
    Ocean,
    Forest,
    Sunset,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Default,
        ColorScheme::Ocean,
        ColorScheme::Forest,
        ColorScheme::Sunset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Default => "Default",
            ColorScheme::Ocean => "Ocean",
            ColorScheme::Forest => "Forest",
            ColorScheme::Sunset => "Sunset",
        }
    }

    /// Lowercase key, as stored in config.
    pub fn key(&self) -> &'static str {
        match self {
            ColorScheme::Default => "default",
            ColorScheme::Ocean => "ocean",
            ColorScheme::Forest => "forest",
            ColorScheme::Sunset => "sunset",
        }
    }

    pub fn swatches(&self) -> [&'static str; 4] {
        match self {
            ColorScheme::Default => ["#4F46E5", "#22C55E", "#EF4444", "#F59E0B"],
            ColorScheme::Ocean => ["#0EA5E9", "#0D9488", "#6366F1", "#8B5CF6"],
            ColorScheme::Forest => ["#22C55E", "#15803D", "#854D0E", "#92400E"],
            ColorScheme::Sunset => ["#F97316", "#DC2626", "#7C3AED", "#2563EB"],
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorScheme::ALL
            .into_iter()
            .find(|scheme| scheme.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| err!("unknown color scheme: {s}"))
    }
}

/// Everything the settings page owns locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub preferences: Preferences,
    pub color_scheme: ColorScheme,
}

impl Settings {
    pub fn with_color_scheme(color_scheme: ColorScheme) -> Self {
        Self {
            color_scheme,
            ..Default::default()
        }
    }

    pub fn toggle(&mut self, pref: Preference, enabled: bool) {
        self.preferences.set(pref, enabled);
    }

    pub fn select_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let prefs = Preferences::default();
        assert!(prefs.notifications);
        assert!(prefs.sound_effects);
        assert!(!prefs.auto_update);
        assert!(!prefs.high_contrast);
        assert!(!prefs.compact_mode);
        assert_eq!(Settings::default().color_scheme, ColorScheme::Default);
    }

    #[test]
    fn toggles_are_independent() {
        for pref in Preference::ALL {
            let mut settings = Settings::default();
            let before = settings;
            let flipped = !settings.preferences.get(pref);
            settings.toggle(pref, flipped);

            assert_eq!(settings.preferences.get(pref), flipped);
            for other in Preference::ALL.into_iter().filter(|p| *p != pref) {
                assert_eq!(
                    settings.preferences.get(other),
                    before.preferences.get(other),
                    "{other:?} changed when toggling {pref:?}"
                );
            }
            assert_eq!(settings.color_scheme, before.color_scheme);
        }
    }

    #[test]
    fn color_scheme_is_single_select() {
        let mut settings = Settings::default();
        settings.select_color_scheme(ColorScheme::Ocean);
        settings.select_color_scheme(ColorScheme::Sunset);
        assert_eq!(settings.color_scheme, ColorScheme::Sunset);
        assert_eq!(settings.preferences, Preferences::default());
    }

    #[test]
    fn color_scheme_parses_key_ignoring_case() {
        assert_eq!("forest".parse::<ColorScheme>().unwrap(), ColorScheme::Forest);
        assert_eq!("Ocean".parse::<ColorScheme>().unwrap(), ColorScheme::Ocean);
        assert!("neon".parse::<ColorScheme>().is_err());
    }
}
