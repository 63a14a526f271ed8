//! Presentational components shared by the dashboard pages.

mod components;

pub use components::*;
