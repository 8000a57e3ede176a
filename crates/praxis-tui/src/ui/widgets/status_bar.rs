//! Status bar widget.

use crate::theme::Theme;
use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// A key hint for the status bar.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Status bar widget displayed at the bottom of the screen.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    mode: &'a str,
    theme: &'a Theme,
    hints: Vec<KeyHint>,
    right_text: Option<(&'a str, Style)>,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar.
    pub fn new(mode: &'a str, theme: &'a Theme) -> Self {
        Self {
            mode,
            theme,
            hints: Vec::new(),
            right_text: None,
        }
    }

    /// Add key hints.
    #[must_use]
    pub fn hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Set right-aligned text.
    #[must_use]
    pub fn right(mut self, text: &'a str, style: Style) -> Self {
        self.right_text = Some((text, style));
        self
    }
}

impl Widget for StatusBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let styles = Styles::new(self.theme);

        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(styles.status_bar());
        }

        let mut spans = vec![
            Span::styled(format!(" {} ", self.mode), styles.button()),
            Span::styled(" ", styles.status_bar()),
        ];
        for hint in &self.hints {
            spans.push(Span::styled(format!(" {} ", hint.key), styles.key_hint()));
            spans.push(Span::styled(format!(" {} ", hint.label), styles.key_label()));
        }

        let left_line = Line::from(spans);
        buf.set_line(area.x, area.y, &left_line, area.width);

        // Right-aligned text wins over overflowing hints
        if let Some((text, style)) = self.right_text {
            let text_len = text.width() as u16;
            if text_len < area.width {
                let x = area.x + area.width - text_len - 1;
                buf.set_string(x.saturating_sub(1), area.y, " ", styles.status_bar());
                buf.set_string(x, area.y, text, style.bg(self.theme.surface));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_status_bar_renders_hints() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new("Chat", &theme)
            .hints(vec![KeyHint::new("^O", "Chats")])
            .right("Saved", Style::default())
            .render(area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.starts_with(" Chat "));
        assert!(text.contains("^O"));
        assert!(text.ends_with("Saved"));
    }
}
