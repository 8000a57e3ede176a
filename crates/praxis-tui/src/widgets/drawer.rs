//! Chat history drawer.
//!
//! Slides over the left edge of the chat screen. Row 0 is the "New Chat"
//! button; rows 1.. are the history entries.

use chrono::{DateTime, Local};
use praxis_engine::{relative_label, ChatSummary};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::Theme;
use crate::ui::theme::Styles;
use crate::ui::left_panel;

/// Width of the drawer in columns.
pub const DRAWER_WIDTH: u16 = 36;

/// Chat history side panel.
pub struct Drawer<'a> {
    history: &'a [ChatSummary],
    /// Row under the keyboard cursor.
    cursor: usize,
    /// Id of the chat that is open.
    active: &'a str,
    now: DateTime<Local>,
    theme: &'a Theme,
}

impl<'a> Drawer<'a> {
    pub fn new(
        history: &'a [ChatSummary],
        cursor: usize,
        active: &'a str,
        now: DateTime<Local>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            history,
            cursor,
            active,
            now,
            theme,
        }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let styles = Styles::new(self.theme);
        let button = if self.cursor == 0 {
            styles.button()
        } else {
            styles.key_label()
        };

        let mut lines = vec![
            Line::from(Span::styled(format!("{:^width$}", "+ New Chat"), button)),
            Line::default(),
            Line::from(Span::styled(" Recent Chats", styles.dim())),
        ];

        for (i, chat) in self.history.iter().enumerate() {
            let under_cursor = self.cursor == i + 1;
            let active = chat.id == self.active;
            let row = if under_cursor {
                styles.selected()
            } else {
                styles.base()
            };
            let marker = if active { "▌" } else { " " };
            let title_style = if active {
                row.fg(self.theme.primary).add_modifier(Modifier::BOLD)
            } else {
                row
            };
            let sub = Style::default().fg(self.theme.muted);

            lines.push(
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(self.theme.primary)),
                    Span::styled(format!("✉ {}", chat.title), title_style),
                ])
                .style(row),
            );
            lines.push(Line::from(Span::styled(format!("   {}", chat.last_message), sub)).style(row));
            lines.push(
                Line::from(Span::styled(
                    format!("   ◷ {}", relative_label(chat.timestamp, self.now)),
                    sub,
                ))
                .style(row),
            );
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for Drawer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let styles = Styles::new(self.theme);
        let panel = left_panel(DRAWER_WIDTH, area);
        Clear.render(panel, buf);

        let block = Block::default()
            .title(" Praxis AI ")
            .title_style(styles.title())
            .borders(Borders::ALL)
            .border_style(styles.border_active())
            .style(styles.base());
        let inner = block.inner(panel);
        block.render(panel, buf);

        Paragraph::new(self.lines(usize::from(inner.width)))
            .style(styles.base())
            .render(inner, buf);
    }
}
