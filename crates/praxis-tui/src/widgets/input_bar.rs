//! Composer at the bottom of the chat screen.
//!
//! Multi-line input (Ctrl+J inserts a newline), a character counter that
//! appears near the length limit, and a recording indicator.

use praxis_engine::CharCounter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Theme;
use crate::ui::theme::{loading_dots, Styles};
use crate::ui::widgets::TextInputState;

/// Placeholder shown while the composer is empty.
pub const PLACEHOLDER: &str = "Type your message...";

/// Most input rows shown before the composer scrolls.
const MAX_VISIBLE_ROWS: usize = 6;

/// Height of the input bar (borders included) for the current content.
#[allow(clippy::cast_possible_truncation)]
pub fn input_height(input: &TextInputState) -> u16 {
    let rows = input.content().split('\n').count().clamp(1, MAX_VISIBLE_ROWS);
    rows as u16 + 2
}

/// Composer widget.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    counter: CharCounter,
    focused: bool,
    loading: bool,
    recording: bool,
    tick: usize,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(input: &'a TextInputState, theme: &'a Theme, max_len: usize) -> Self {
        Self {
            input,
            theme,
            counter: CharCounter::new(input.content(), max_len),
            focused: false,
            loading: false,
            recording: false,
            tick: 0,
        }
    }

    /// Set whether the input bar is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Disable input while a reply is generated.
    #[must_use]
    pub fn loading(mut self, loading: bool, tick: usize) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }

    /// Show the recording indicator.
    #[must_use]
    pub fn recording(mut self, recording: bool) -> Self {
        self.recording = recording;
        self
    }

    /// Build the visible lines and the index of the cursor line.
    fn build_input_lines(&self) -> (Vec<Line<'static>>, usize) {
        let cursor = self.input.cursor();
        let text_style = Style::default().fg(self.theme.text);
        let cursor_style = Style::default().fg(self.theme.primary);

        let mut lines = Vec::new();
        let mut cursor_line = 0;
        let mut offset = 0;
        for (idx, row) in self.input.content().split('\n').enumerate() {
            let prefix = if idx == 0 { "> " } else { "  " };
            let len = row.chars().count();
            let mut spans = vec![Span::styled(prefix, cursor_style)];

            if self.focused && (offset..=offset + len).contains(&cursor) {
                cursor_line = idx;
                let col = cursor - offset;
                let before: String = row.chars().take(col).collect();
                let after: String = row.chars().skip(col).collect();
                spans.push(Span::styled(before, text_style));
                spans.push(Span::styled("█", cursor_style));
                spans.push(Span::styled(after, text_style));
            } else {
                spans.push(Span::styled(row.to_string(), text_style));
            }
            lines.push(Line::from(spans));
            offset += len + 1;
        }
        (lines, cursor_line)
    }

    fn block(&self) -> Block<'static> {
        let styles = Styles::new(self.theme);
        let border_style = if self.focused && !self.loading {
            styles.border_active()
        } else {
            styles.border()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.recording {
            block = block.title_bottom(
                Line::from(Span::styled(" ● Recording... ", styles.error())).left_aligned(),
            );
        }
        if self.counter.near_limit() {
            let style = if self.counter.over_limit() {
                styles.error()
            } else {
                styles.dim()
            };
            block = block.title_bottom(
                Line::from(Span::styled(format!(" {} ", self.counter.label()), style))
                    .right_aligned(),
            );
        }
        block
    }
}

impl Widget for InputBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner_height = usize::from(area.height.saturating_sub(2));
        let muted = Style::default().fg(self.theme.muted);

        let paragraph = if self.loading {
            let dots = loading_dots(self.tick);
            Paragraph::new(format!("● Generating response{dots}")).style(muted)
        } else if self.input.is_empty() {
            let mut spans = vec![Span::styled("> ", Style::default().fg(self.theme.primary))];
            if self.focused {
                spans.push(Span::styled("█", Style::default().fg(self.theme.primary)));
            }
            spans.push(Span::styled(PLACEHOLDER, muted));
            Paragraph::new(Line::from(spans))
        } else {
            let (lines, cursor_line) = self.build_input_lines();
            let scroll = cursor_line.saturating_sub(inner_height.saturating_sub(1));
            Paragraph::new(lines).scroll((scroll as u16, 0))
        };

        paragraph.block(block).render(area, buf);
    }
}
