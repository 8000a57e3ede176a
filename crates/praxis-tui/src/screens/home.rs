//! Home screen - landing page with the feature cards and entry buttons.

use crate::app::{App, HomeButton};
use crate::screens::Screen;
use crate::theme::Theme;
use crate::ui::theme::Styles;
use crate::ui::widgets::{KeyHint, StatusBar};
use crate::ui::{centered_fixed, main_layout};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const CONTENT_WIDTH: u16 = 64;
const CONTENT_HEIGHT: u16 = 18;

const FEATURES: [(&str, &str, &str); 2] = [
    (
        "⚡",
        "Lightning Fast",
        "Runs completely offline with no internet required",
    ),
    (
        "◈",
        "Privacy First",
        "Your conversations never leave your device",
    ),
];

/// The home screen.
pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let styles = Styles::new(&app.theme);
        let (main_area, status_area) = main_layout(area);

        Block::default().style(styles.base()).render(main_area, buf);
        render_home_content(app, main_area, buf);

        let hints = vec![
            KeyHint::new("Tab", "Switch"),
            KeyHint::new("Enter", "Select"),
            KeyHint::new("n", "New chat"),
            KeyHint::new("t", "Theme"),
            KeyHint::new("?", "Help"),
            KeyHint::new("q", "Quit"),
        ];
        let mut status_bar = StatusBar::new("Home", &app.theme).hints(hints);
        if let Some(note) = &app.notification {
            let style = if note.is_error {
                styles.error()
            } else {
                styles.success()
            };
            status_bar = status_bar.right(&note.text, style);
        }
        status_bar.render(status_area, buf);
    }
}

fn render_home_content(app: &App, area: Rect, buf: &mut Buffer) {
    let styles = Styles::new(&app.theme);
    let content = centered_fixed(CONTENT_WIDTH, CONTENT_HEIGHT, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // logo + title
            Constraint::Length(6), // cards
            Constraint::Length(1),
            Constraint::Length(3), // buttons
        ])
        .split(content);

    let title = vec![
        Line::from(Span::styled("◆", styles.highlight())),
        Line::default(),
        Line::from(Span::styled("Praxis AI", styles.title())),
        Line::from(Span::styled("Your offline AI assistant", styles.dim())),
    ];
    Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(styles.base())
        .render(chunks[0], buf);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    for ((icon, heading, body), card) in FEATURES.iter().zip(cards.iter()) {
        render_card(&app.theme, icon, heading, body, *card, buf);
    }

    let buttons = [
        (HomeButton::StartChat, "Start New Chat".to_string()),
        (
            HomeButton::ToggleTheme,
            app.config.color_scheme.toggle_label().to_string(),
        ),
    ];
    let lines: Vec<Line> = buttons
        .into_iter()
        .map(|(button, label)| {
            let style = if app.home_selected == button {
                styles.button()
            } else {
                styles.key_label()
            };
            Line::from(Span::styled(format!("{label:^28}"), style))
        })
        .collect();
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(styles.base())
        .render(chunks[3], buf);
}

fn render_card(
    theme: &Theme,
    icon: &str,
    heading: &str,
    body: &str,
    area: Rect,
    buf: &mut Buffer,
) {
    let styles = Styles::new(theme);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.base());

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{icon} "), styles.highlight()),
            Span::styled(heading.to_string(), styles.highlight()),
        ]),
        Line::from(Span::styled(body.to_string(), styles.dim())),
    ];
    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
