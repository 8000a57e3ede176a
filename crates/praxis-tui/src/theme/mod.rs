//! Theme components for the TUI.
//!
//! [`Theme`] holds the light and dark palettes; [`Theme::for_scheme`] picks
//! one from the configured [`ColorScheme`](praxis_engine::ColorScheme).

mod colors;

pub use colors::Theme;
