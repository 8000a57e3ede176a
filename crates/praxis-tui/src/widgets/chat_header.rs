//! Title bar of the chat screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::theme::Theme;
use crate::ui::theme::Styles;

/// Header with the drawer hint, the chat title and the new-chat hint.
pub struct ChatHeader<'a> {
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> ChatHeader<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        Self { title, theme }
    }
}

impl Widget for ChatHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let styles = Styles::new(self.theme);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles.border())
            .style(styles.base());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::styled(" ≡ ", styles.highlight()),
            Span::styled("^O chats", styles.dim()),
        ]);
        let right = Line::from(vec![
            Span::styled("^N new ", styles.dim()),
            Span::styled("+ ", styles.highlight()),
        ]);
        let title = Line::from(Span::styled(
            self.title.to_string(),
            styles.base().add_modifier(Modifier::BOLD),
        ));

        let title_width = u16::try_from(title.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right.width()).unwrap_or(u16::MAX);
        let title_x = inner.x + inner.width.saturating_sub(title_width) / 2;
        let right_x = inner.x + inner.width.saturating_sub(right_width);

        buf.set_line(inner.x, inner.y, &left, inner.width);
        buf.set_line(title_x, inner.y, &title, inner.width.saturating_sub(title_x - inner.x));
        buf.set_line(right_x, inner.y, &right, right_width);
    }
}
