//! Domain model and state for the admin dashboard, free of any UI framework.

mod auth;
mod config;
pub mod dashboard;
mod directory;
mod error;
mod settings;
mod shell;
mod theme;
mod user;

pub use auth::{Credentials, LoginGate, OpenGate};
pub use self::config::{DashboardConfig, Profile};
pub use directory::{Modal, Submitted, UserDirectory};
pub use error::{Error, Result};
pub use settings::{ColorScheme, Preference, Preferences, Settings};
pub use shell::{Page, Shell};
pub use theme::Theme;
pub use user::{Role, Status, User, UserDraft, UserId, seed_users};

#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
