//! Screen definitions for the praxis TUI.

pub mod chat;
pub mod home;

use crate::app::App;
use crate::theme::Theme;
use crate::ui::centered_fixed;
use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the help overlay.
pub fn render_help_overlay(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let styles = Styles::new(theme);
    let help_text = r"
  Chat
    Enter             Send message
    Ctrl+J            Newline
    Alt+Up/Down       Previous/next sent message
    Up/Down, PgUp/Dn  Scroll transcript
    Ctrl+Y            Copy last reply
    Ctrl+R            Toggle recording
    Ctrl+O            Chat history
    Ctrl+N            New chat
    Esc               Back to home

  Anywhere
    Ctrl+T            Toggle light/dark
    ? / F1            Toggle this help
    Ctrl+C            Quit

  [Press any key to close]
";

    let width = 52.min(area.width.saturating_sub(4));
    let height = 22.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(styles.title())
        .borders(Borders::ALL)
        .border_style(styles.border_active())
        .style(styles.base());

    Paragraph::new(help_text)
        .block(block)
        .style(styles.base())
        .render(overlay_area, buf);
}

/// Render the "clear chat" confirmation dialog.
pub fn render_confirm_overlay(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let styles = Styles::new(theme);
    let width = 50.min(area.width.saturating_sub(4));
    let height = 7.min(area.height);
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Clear Chat ")
        .title_style(styles.title())
        .borders(Borders::ALL)
        .border_style(styles.border_active())
        .style(styles.base());

    let lines = vec![
        Line::default(),
        Line::from("Are you sure you want to clear all messages?"),
        Line::default(),
        Line::from(vec![
            Span::styled(" Clear ", styles.button()),
            Span::raw("  "),
            Span::styled(" Cancel ", styles.key_label()),
        ]),
        Line::from(Span::styled("Enter to clear, Esc to cancel", styles.dim())),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .style(styles.base())
        .render(overlay_area, buf);
}
