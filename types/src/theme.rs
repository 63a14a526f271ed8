use serde::{Deserialize, Serialize};

/// The one piece of state shared by every page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub dark_mode: bool,
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Class carried by the root `<html>` element and the app shell.
    pub fn class(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Preference, Settings, UserDirectory};

    #[test]
    fn toggle_flips_once() {
        let mut theme = Theme::default();
        assert!(theme.toggle());
        assert!(theme.dark_mode);
        assert_eq!(theme.class(), "dark");
        assert!(!theme.toggle());
        assert_eq!(theme.class(), "light");
    }

    #[test]
    fn toggle_leaves_other_state_alone() {
        let mut dir = UserDirectory::seeded();
        dir.set_search("irwan");
        let mut settings = Settings::default();
        settings.toggle(Preference::CompactMode, true);

        let dir_before = dir.clone();
        let settings_before = settings;

        let mut theme = Theme::new(false);
        theme.toggle();

        assert!(theme.dark_mode);
        assert_eq!(dir, dir_before);
        assert_eq!(settings, settings_before);
    }
}
