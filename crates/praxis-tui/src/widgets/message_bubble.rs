//! Message bubbles for the chat transcript.
//!
//! User messages sit on the right in a filled block and are shown verbatim.
//! Assistant messages sit on the left in a rounded frame with their
//! Markdown rendered.
//!
//! ```text
//!                                                 How do I navigate?
//!                                                              14:02
//! ╭──────────────────────────────╮
//! │ Here are the key concepts:   │
//! │ • navigate()                 │
//! ╰──────────────────────────────╯
//! 14:03  ^Y copy
//! ```

use praxis_engine::{clock_label, Message};
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::text::{render_markdown, wrap_text};
use crate::theme::Theme;
use crate::ui::theme::{loading_dots, Styles};

/// Share of the transcript width a bubble may use, in percent.
const MAX_BUBBLE_PERCENT: usize = 80;

/// What is shown under a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BubbleFooter {
    /// Just the timestamp.
    #[default]
    Time,
    /// Timestamp plus the copy key hint.
    CopyHint,
    /// Timestamp plus the copy confirmation.
    Copied,
}

/// A single message laid out for the transcript.
pub struct MessageBubble<'a> {
    message: &'a Message,
    theme: &'a Theme,
    footer: BubbleFooter,
    tick: usize,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message, theme: &'a Theme) -> Self {
        Self {
            message,
            theme,
            footer: BubbleFooter::Time,
            tick: 0,
        }
    }

    /// Set the footer variant.
    #[must_use]
    pub fn footer(mut self, footer: BubbleFooter) -> Self {
        self.footer = footer;
        self
    }

    /// Animation tick for the loading bubble.
    #[must_use]
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    /// Lay the bubble out for a transcript `width` columns wide.
    ///
    /// The result ends with a blank separator line.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width);
        let max_bubble = (width * MAX_BUBBLE_PERCENT / 100).clamp(8.min(width), width);

        let mut lines = if self.message.is_user {
            self.user_lines(width, max_bubble)
        } else {
            self.assistant_lines(max_bubble)
        };
        if !self.message.is_loading {
            lines.push(self.footer_line(width));
        }
        lines.push(Line::default());
        lines
    }

    fn user_lines(&self, width: usize, max_bubble: usize) -> Vec<Line<'static>> {
        let style = Styles::new(self.theme).button();
        let rows = wrap_text(&self.message.text, max_bubble.saturating_sub(2).max(1));
        let inner = rows.iter().map(|r| r.width()).max().unwrap_or(0);
        let indent = " ".repeat(width.saturating_sub(inner + 2));

        rows.into_iter()
            .map(|row| {
                let pad = " ".repeat(inner - row.width());
                Line::from(vec![
                    Span::raw(indent.clone()),
                    Span::styled(format!(" {row}{pad} "), style),
                ])
            })
            .collect()
    }

    fn assistant_lines(&self, max_bubble: usize) -> Vec<Line<'static>> {
        let content_width = max_bubble.saturating_sub(4).max(1);
        let content = if self.message.is_loading {
            let dots = loading_dots(self.tick);
            vec![Line::from(Span::styled(
                format!("Thinking{dots:<3}"),
                Style::default().fg(self.theme.muted),
            ))]
        } else {
            render_markdown(&self.message.text, content_width, self.theme)
        };
        let inner = content
            .iter()
            .map(Line::width)
            .max()
            .unwrap_or(0)
            .min(content_width);

        let border = Style::default().fg(self.theme.border_focused);
        let mut lines = Vec::with_capacity(content.len() + 2);
        lines.push(Line::from(Span::styled(
            format!("╭{}╮", "─".repeat(inner + 2)),
            border,
        )));
        for line in content {
            let pad = inner.saturating_sub(line.width());
            let mut spans = vec![Span::styled("│ ", border)];
            spans.extend(line.spans);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(" │", border));
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            format!("╰{}╯", "─".repeat(inner + 2)),
            border,
        )));
        lines
    }

    fn footer_line(&self, width: usize) -> Line<'static> {
        let styles = Styles::new(self.theme);
        let time = clock_label(self.message.timestamp);
        if self.message.is_user {
            let indent = " ".repeat(width.saturating_sub(time.width() + 1));
            return Line::from(vec![Span::raw(indent), Span::styled(time, styles.dim())]);
        }

        let mut spans = vec![Span::styled(time, styles.dim())];
        match self.footer {
            BubbleFooter::Time => {}
            BubbleFooter::CopyHint => spans.push(Span::styled("  ^Y copy", styles.dim())),
            BubbleFooter::Copied => {
                spans.push(Span::styled("  Copied to clipboard!", styles.success()));
            }
        }
        Line::from(spans)
    }
}
