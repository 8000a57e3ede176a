//! Common styles derived from the active [`Theme`].

use crate::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Frames of the "Thinking" dots animation.
pub const LOADING_DOTS: [&str; 4] = ["", ".", "..", "..."];

/// Dots frame for an animation tick.
pub fn loading_dots(tick: usize) -> &'static str {
    LOADING_DOTS[tick % LOADING_DOTS.len()]
}

/// Common styles used throughout the TUI.
#[derive(Debug, Clone, Copy)]
pub struct Styles<'a> {
    theme: &'a Theme,
}

impl<'a> Styles<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Default text style.
    pub fn base(&self) -> Style {
        Style::default().fg(self.theme.text).bg(self.theme.base)
    }

    /// Dimmed text for secondary information.
    pub fn dim(&self) -> Style {
        Style::default().fg(self.theme.muted).bg(self.theme.base)
    }

    /// Highlighted/selected item.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.theme.primary)
            .bg(self.theme.base)
            .add_modifier(Modifier::BOLD)
    }

    /// Row under the keyboard cursor in a list.
    pub fn selected(&self) -> Style {
        Style::default().fg(self.theme.text).bg(self.theme.surface)
    }

    /// Filled button.
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.theme.on_primary)
            .bg(self.theme.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Success status.
    pub fn success(&self) -> Style {
        Style::default().fg(self.theme.success).bg(self.theme.base)
    }

    /// Error status.
    pub fn error(&self) -> Style {
        Style::default().fg(self.theme.error).bg(self.theme.base)
    }

    /// Title style.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style (for status bar).
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.theme.on_primary)
            .bg(self.theme.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style.
    pub fn key_label(&self) -> Style {
        Style::default().fg(self.theme.text).bg(self.theme.surface)
    }

    /// Status bar background style.
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.theme.text).bg(self.theme.surface)
    }

    /// Border style for inactive elements.
    pub fn border(&self) -> Style {
        Style::default().fg(self.theme.border)
    }

    /// Border style for active/focused elements.
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.theme.border_focused)
    }
}
