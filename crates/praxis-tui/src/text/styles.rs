//! Markdown styling configuration.
//!
//! Provides [`MarkdownStyles`] which maps segment kinds to ratatui styles.

use ratatui::style::{Modifier, Style};

use crate::theme::Theme;

/// Styles for rendering markdown elements.
#[derive(Debug, Clone)]
pub struct MarkdownStyles {
    /// H1 header style.
    pub h1: Style,
    /// H2 header style.
    pub h2: Style,
    /// H3 header style.
    pub h3: Style,
    /// Inline code style.
    pub code: Style,
    /// Code block line style.
    pub code_block: Style,
    /// Strong (bold) style.
    pub strong: Style,
    /// List marker (bullet) style.
    pub list_marker: Style,
    /// Normal text style.
    pub text: Style,
}

impl MarkdownStyles {
    /// Create styles from a theme.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            h1: Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h2: Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
            h3: Style::default()
                .fg(theme.subtext)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(theme.code).bg(theme.surface),
            code_block: Style::default().fg(theme.code).bg(theme.surface),
            strong: Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            list_marker: Style::default().fg(theme.muted),
            text: Style::default().fg(theme.text),
        }
    }

    /// Style for a heading of the given level.
    pub fn heading(&self, level: u8) -> Style {
        match level {
            1 => self.h1,
            2 => self.h2,
            _ => self.h3,
        }
    }
}

impl Default for MarkdownStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}
