use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, err};

/// Sidebar sections. Only some of them have a route behind them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Users,
    Widgets,
    Statistics,
    Settings,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Users,
        Page::Widgets,
        Page::Statistics,
        Page::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::Widgets => "widgets",
            Page::Statistics => "statistics",
            Page::Settings => "settings",
        }
    }

    /// Header and sidebar text.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Widgets => "Widgets",
            Page::Statistics => "Statistics",
            Page::Settings => "Settings",
        }
    }

    /// Whether selecting this entry also changes the route. Widgets and
    /// Statistics have no page and only move the highlight.
    pub fn navigates(&self) -> bool {
        !matches!(self, Page::Widgets | Page::Statistics)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Page::ALL
            .into_iter()
            .find(|page| page.label() == s)
            .ok_or_else(|| err!("unknown page: {s}"))
    }
}

/// Layout chrome state: the highlighted section and the sidebar width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    pub page: Page,
    pub sidebar_open: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Page::Dashboard)
    }
}

impl Shell {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            sidebar_open: true,
        }
    }

    /// Highlight `page`. Returns true when the caller should also navigate.
    pub fn select(&mut self, page: Page) -> bool {
        self.page = page;
        page.navigates()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
