//! The dark-mode flag, owned by `App` and handed down as two capabilities:
//! [`ThemeFlag`] for every reader and [`ThemeSwitch`] for the one toggle
//! that may change it.

use dioxus::prelude::*;
use types::Theme;

#[derive(Clone, Copy)]
pub struct ThemeFlag(Signal<Theme>);

impl ThemeFlag {
    pub fn is_dark(&self) -> bool {
        self.0.read().dark_mode
    }

    pub fn class(&self) -> &'static str {
        self.0.read().class()
    }
}

#[derive(Clone, Copy)]
pub struct ThemeSwitch(Signal<Theme>);

impl ThemeSwitch {
    pub fn toggle(&mut self) {
        let dark_mode = self.0.write().toggle();
        tracing::info!(dark_mode, "theme toggled");
    }
}

/// Create the flag and provide both capabilities to descendants.
pub fn use_theme_provider(dark_mode: bool) -> ThemeFlag {
    let theme = use_signal(|| Theme::new(dark_mode));
    let flag = use_context_provider(|| ThemeFlag(theme));
    use_context_provider(|| ThemeSwitch(theme));

    // Mirror the flag onto <html> so page-level styles follow it
    use_effect(move || {
        let dark_mode = theme.read().dark_mode;
        let js = format!("document.documentElement.classList.toggle('dark', {dark_mode});");
        let _ = document::eval(&js);
    });

    flag
}

pub fn use_theme() -> ThemeFlag {
    use_context::<ThemeFlag>()
}

/// Only the dark mode setting calls this.
pub fn use_theme_switch() -> ThemeSwitch {
    use_context::<ThemeSwitch>()
}
