//! Chat screen - transcript, composer and the history drawer.

use crate::app::{App, Overlay};
use crate::screens::{render_confirm_overlay, Screen};
use crate::ui::theme::Styles;
use crate::ui::widgets::{KeyHint, StatusBar};
use crate::ui::{chat_layout, main_layout};
use crate::widgets::{input_height, BubbleFooter, ChatHeader, Drawer, InputBar, MessageBubble};
use chrono::Local;
use praxis_engine::Message;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// The chat screen.
pub struct ChatScreen;

impl Screen for ChatScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let styles = Styles::new(&app.theme);
        let (main_area, status_area) = main_layout(area);
        let (header_area, transcript_area, input_area) =
            chat_layout(main_area, input_height(&app.input_state));

        ChatHeader::new(app.conversation.title(), &app.theme).render(header_area, buf);
        render_transcript(app, transcript_area, buf);
        InputBar::new(&app.input_state, &app.theme, app.config.max_message_length)
            .focused(app.composer_active())
            .loading(app.loading, app.tick)
            .recording(app.recording)
            .render(input_area, buf);

        let hints = vec![
            KeyHint::new("Enter", "Send"),
            KeyHint::new("^O", "Chats"),
            KeyHint::new("^Y", "Copy"),
            KeyHint::new("^R", "Record"),
            KeyHint::new("Esc", "Home"),
            KeyHint::new("?", "Help"),
        ];
        let mut status_bar = StatusBar::new("Chat", &app.theme).hints(hints);
        if let Some(note) = &app.notification {
            let style = if note.is_error {
                styles.error()
            } else {
                styles.success()
            };
            status_bar = status_bar.right(&note.text, style);
        }
        status_bar.render(status_area, buf);

        match app.overlay {
            Some(Overlay::Drawer) => Drawer::new(
                &app.history,
                app.drawer_cursor,
                &app.selected_chat,
                Local::now(),
                &app.theme,
            )
            .render(area, buf),
            Some(Overlay::NewChatConfirm) => render_confirm_overlay(&app.theme, area, buf),
            None => {}
        }
    }
}

/// Lay out every message of the open conversation.
pub fn transcript_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let messages = &app.conversation.messages;
    let last_reply = messages.iter().rposition(|m| !m.is_user && !m.is_loading);

    let mut lines = Vec::new();
    for (i, message) in messages.iter().enumerate() {
        let footer = match last_reply {
            Some(r) if r == i && app.copied_ttl > 0 => BubbleFooter::Copied,
            Some(r) if r == i => BubbleFooter::CopyHint,
            _ => BubbleFooter::Time,
        };
        lines.extend(
            MessageBubble::new(message, &app.theme)
                .footer(footer)
                .lines(width),
        );
    }

    if app.loading {
        let thinking = Message::loading();
        lines.extend(
            MessageBubble::new(&thinking, &app.theme)
                .tick(app.tick)
                .lines(width),
        );
    }
    lines
}

fn render_transcript(app: &App, area: Rect, buf: &mut Buffer) {
    let styles = Styles::new(&app.theme);
    // one column of margin on each side
    let inner = Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    };
    let lines = transcript_lines(app, inner.width);

    let max_scroll = lines.len().saturating_sub(usize::from(area.height));
    app.transcript_max_scroll.set(max_scroll);
    let top = max_scroll - app.scroll_from_bottom.min(max_scroll);

    Block::default().style(styles.base()).render(area, buf);
    Paragraph::new(lines)
        .style(styles.base())
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0))
        .render(inner, buf);
}
