//! praxis-tui: Terminal UI for the praxis chat shell
//!
//! This crate provides the TUI layer for praxis, including:
//! - Home screen with the feature overview
//! - Chat screen with Markdown-rendered replies, composer and history drawer
//! - Light and dark palettes
//! - Clipboard integration for copying replies

mod app;
mod clipboard;
mod event;
mod screens;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
mod ui;
mod widgets;

use screens::Screen as ScreenTrait;

pub use app::{App, Screen};
pub use event::{Action, Event, EventHandler};
pub use praxis_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use praxis_engine::{Config, MockResponder, Responder, ResponderError};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// UI tick rate: 4 Hz.
const TICK_RATE_MS: u64 = 250;

/// In-flight reply, tagged with the conversation it was requested for.
type ReplyHandle = (u64, JoinHandle<Result<String, ResponderError>>);

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop with the mock responder, and
/// restores the terminal on exit. Theme changes are saved to `config_path`
/// when one is given.
pub async fn run_tui(
    config: Config,
    config_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let responder: Arc<dyn Responder> = Arc::new(MockResponder::new(config.response_delay()));
    let mut app = App::new(config, config_path);
    let mut events = EventHandler::new(TICK_RATE_MS);

    tracing::info!("tui started");
    let result = run_loop(&mut terminal, &mut app, &mut events, &responder).await;

    terminal.show_cursor()?;
    tracing::info!("tui exited");

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    responder: &Arc<dyn Responder>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reply_handles: Vec<ReplyHandle> = Vec::new();

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            match app.screen {
                Screen::Home => screens::home::HomeScreen.render(app, area, buf),
                Screen::Chat => screens::chat::ChatScreen.render(app, area, buf),
            }

            if app.show_help {
                screens::render_help_overlay(&app.theme, area, buf);
            }
        })?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    // The composer gets first pick of keys on the chat screen
                    if app.composer_active()
                        && handle_chat_key(app, key, responder, &mut reply_handles)
                    {
                        continue;
                    }
                    app.handle_action(event::key_to_action(key));
                }
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollUp => app.handle_action(Action::Up),
                        MouseEventKind::ScrollDown => app.handle_action(Action::Down),
                        _ => {}
                    }
                }
                Event::Tick => app.tick(),
                Event::Resize(_, _) => {}
            }
        }

        collect_replies(app, &mut reply_handles).await;

        if app.should_quit {
            for (_, handle) in reply_handles {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

/// Hand finished replies to the app.
async fn collect_replies(app: &mut App, reply_handles: &mut Vec<ReplyHandle>) {
    let completed: Vec<usize> = reply_handles
        .iter()
        .enumerate()
        .filter(|(_, (_, handle))| handle.is_finished())
        .map(|(i, _)| i)
        .collect();

    for i in completed.into_iter().rev() {
        let (epoch, handle) = reply_handles.remove(i);
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(ResponderError::Failed(e.to_string())),
        };
        app.finish_reply(epoch, result);
    }
}

/// Handle key input for the chat composer.
/// Returns true if the key was handled (should not be processed as action).
fn handle_chat_key(
    app: &mut App,
    key: KeyEvent,
    responder: &Arc<dyn Responder>,
    reply_handles: &mut Vec<ReplyHandle>,
) -> bool {
    // Ctrl+J inserts a newline; plain Enter sends
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('j') {
        app.input_state.insert('\n');
        return true;
    }

    // Let the action handler deal with Ctrl+C, Ctrl+O, Alt+Up, etc.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }

    match key.code {
        KeyCode::Enter => {
            if let Some(pending) = app.submit_input() {
                let reply = responder.respond(&pending.prompt);
                reply_handles.push((pending.epoch, tokio::spawn(reply)));
            }
            true
        }

        // '?' on an empty composer opens help
        KeyCode::Char('?') if app.input_state.is_empty() => false,

        KeyCode::Char(c) => {
            app.input_state.insert(c);
            true
        }
        KeyCode::Backspace => {
            app.input_state.backspace();
            true
        }
        KeyCode::Delete => {
            app.input_state.delete();
            true
        }
        KeyCode::Left => {
            app.input_state.move_left();
            true
        }
        KeyCode::Right => {
            app.input_state.move_right();
            true
        }
        KeyCode::Home => {
            app.input_state.move_home();
            true
        }
        KeyCode::End => {
            app.input_state.move_end();
            true
        }

        _ => false,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_app_in_chat;
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(
        app: &mut App,
        text: &str,
        responder: &Arc<dyn Responder>,
        handles: &mut Vec<ReplyHandle>,
    ) {
        for c in text.chars() {
            assert!(handle_chat_key(app, press(KeyCode::Char(c)), responder, handles));
        }
    }

    fn responder() -> Arc<dyn Responder> {
        Arc::new(MockResponder::with_replies(
            Duration::from_millis(50),
            ["**Sure.**".to_string()],
        ))
    }

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_and_receive_reply() {
        let responder = responder();
        let mut handles = Vec::new();
        let mut app = create_test_app_in_chat("new");

        type_str(&mut app, "hello", &responder, &mut handles);
        assert!(handle_chat_key(&mut app, press(KeyCode::Enter), &responder, &mut handles));
        assert!(app.loading);
        assert_eq!(handles.len(), 1);

        // a second Enter while loading sends nothing
        type_str(&mut app, "more", &responder, &mut handles);
        handle_chat_key(&mut app, press(KeyCode::Enter), &responder, &mut handles);
        assert_eq!(handles.len(), 1);
        assert_eq!(app.input_state.content(), "more");

        tokio::time::sleep(Duration::from_millis(60)).await;
        tokio::task::yield_now().await;
        while handles.iter().any(|(_, h)| !h.is_finished()) {
            tokio::task::yield_now().await;
        }
        collect_replies(&mut app, &mut handles).await;

        assert!(handles.is_empty());
        assert!(!app.loading);
        assert_eq!(
            app.conversation.last().map(|m| m.text.as_str()),
            Some("**Sure.**")
        );
    }

    #[tokio::test]
    async fn test_empty_enter_does_not_spawn() {
        let responder = responder();
        let mut handles = Vec::new();
        let mut app = create_test_app_in_chat("new");

        assert!(handle_chat_key(&mut app, press(KeyCode::Enter), &responder, &mut handles));
        assert!(handles.is_empty());
        assert!(app.notification.as_ref().is_some_and(|n| n.is_error));
    }

    #[test]
    fn test_composer_editing_keys() {
        let responder = responder();
        let mut handles = Vec::new();
        let mut app = create_test_app_in_chat("new");

        type_str(&mut app, "abc", &responder, &mut handles);
        handle_chat_key(&mut app, press(KeyCode::Left), &responder, &mut handles);
        handle_chat_key(&mut app, press(KeyCode::Backspace), &responder, &mut handles);
        assert_eq!(app.input_state.content(), "ac");

        let ctrl_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        handle_chat_key(&mut app, ctrl_j, &responder, &mut handles);
        assert_eq!(app.input_state.content(), "a\nc");
    }

    #[test]
    fn test_question_mark_on_empty_input_is_help() {
        let responder = responder();
        let mut handles = Vec::new();
        let mut app = create_test_app_in_chat("new");

        assert!(!handle_chat_key(
            &mut app,
            press(KeyCode::Char('?')),
            &responder,
            &mut handles
        ));
        type_str(&mut app, "why?", &responder, &mut handles);
        assert_eq!(app.input_state.content(), "why?");
    }

    #[test]
    fn test_shortcuts_fall_through() {
        let responder = responder();
        let mut handles = Vec::new();
        let mut app = create_test_app_in_chat("new");

        let ctrl_o = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL);
        assert!(!handle_chat_key(&mut app, ctrl_o, &responder, &mut handles));
        assert!(!handle_chat_key(&mut app, press(KeyCode::Esc), &responder, &mut handles));
        assert!(!handle_chat_key(&mut app, press(KeyCode::Up), &responder, &mut handles));
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;
    use crate::test_utils::*;
    use insta::assert_snapshot;
    use ratatui::{buffer::Buffer, layout::Rect};

    #[test]
    fn test_home_screen_contents() {
        let app = create_test_app();
        let result = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert!(result.contains("Praxis AI"));
        assert!(result.contains("Your offline AI assistant"));
        assert!(result.contains("Lightning Fast"));
        assert!(result.contains("Privacy First"));
        assert!(result.contains("Start New Chat"));
        assert!(result.contains("Light Mode"));
    }

    #[test]
    fn test_home_screen_light_label() {
        let mut app = create_test_app();
        app.handle_action(Action::ToggleTheme);
        let result = render_screen_to_string(&screens::home::HomeScreen, &app);
        assert!(result.contains("Dark Mode"));
    }

    #[test]
    fn test_chat_screen_new_chat() {
        let app = create_test_app_in_chat("new");
        let result = render_screen_to_string(&screens::chat::ChatScreen, &app);
        assert!(result.contains("New Chat"));
        assert!(result.contains("Hello! I'm your offline AI"));
        assert!(result.contains("Type your message..."));
        assert!(result.contains("^Y copy"));
    }

    #[test]
    fn test_chat_screen_notification() {
        let mut app = create_test_app_in_chat("new");
        app.handle_action(Action::Record);
        let result = render_screen_to_string_sized(&screens::chat::ChatScreen, &app, 140, 24);
        assert!(result.contains("Recording..."));
        assert!(result.contains("Voice recording started."));
    }

    #[test]
    fn test_snapshot_confirm_overlay() {
        let app = create_test_app();
        let area = Rect::new(0, 0, 54, 7);
        let mut buf = Buffer::empty(area);
        screens::render_confirm_overlay(&app.theme, area, &mut buf);
        let text = buffer_to_string(&buf);
        let rows: Vec<&str> = text.lines().map(str::trim).collect();
        assert_snapshot!(rows.join("\n"), @r"
        ┌ Clear Chat ────────────────────────────────────┐
        │                                                │
        │  Are you sure you want to clear all messages?  │
        │                                                │
        │                Clear    Cancel                 │
        │         Enter to clear, Esc to cancel          │
        └────────────────────────────────────────────────┘
        ");
    }
}

/// Navigation tests that exercise event handling and screen transitions.
#[cfg(test)]
mod navigation_tests {
    use crate::app::{HomeButton, Overlay, Screen};
    use crate::event::Action;
    use crate::test_utils::{create_test_app, create_test_app_in_chat};
    use praxis_engine::chat::FRESH_GREETING;

    #[test]
    fn test_home_start_chat() {
        let mut app = create_test_app();
        assert_eq!(app.screen, Screen::Home);

        app.handle_action(Action::Select);
        assert_eq!(app.screen, Screen::Chat);
        assert_eq!(app.conversation.chat_id, "new");
        assert_eq!(app.conversation.messages.len(), 1);
    }

    #[test]
    fn test_home_theme_button() {
        let mut app = create_test_app();
        app.handle_action(Action::NextTab);
        assert_eq!(app.home_selected, HomeButton::ToggleTheme);

        app.handle_action(Action::Select);
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.config.color_scheme, praxis_engine::ColorScheme::Light);
    }

    #[test]
    fn test_back_from_chat_to_home() {
        let mut app = create_test_app_in_chat("2");
        app.handle_action(Action::Back);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_drawer_opens_on_active_chat() {
        let mut app = create_test_app_in_chat("3");
        app.handle_action(Action::ToggleDrawer);
        assert_eq!(app.overlay, Some(Overlay::Drawer));
        assert_eq!(app.drawer_cursor, 3);

        app.handle_action(Action::Back);
        assert_eq!(app.overlay, None);
        assert_eq!(app.screen, Screen::Chat);
    }

    #[test]
    fn test_drawer_select_chat() {
        let mut app = create_test_app_in_chat("new");
        app.handle_action(Action::ToggleDrawer);
        assert_eq!(app.drawer_cursor, 0);

        app.handle_action(Action::Down);
        app.handle_action(Action::Down);
        app.handle_action(Action::Select);
        assert_eq!(app.overlay, None);
        assert_eq!(app.selected_chat, "2");
        assert_eq!(app.conversation.title(), "AI Model Integration");
        assert_eq!(app.conversation.messages.len(), 4);
    }

    #[test]
    fn test_drawer_cursor_is_bounded() {
        let mut app = create_test_app_in_chat("new");
        app.handle_action(Action::ToggleDrawer);
        for _ in 0..10 {
            app.handle_action(Action::Down);
        }
        assert_eq!(app.drawer_cursor, app.history.len());
        app.handle_action(Action::Up);
        assert_eq!(app.drawer_cursor, app.history.len() - 1);
    }

    #[test]
    fn test_drawer_new_chat_row() {
        let mut app = create_test_app_in_chat("1");
        app.handle_action(Action::ToggleDrawer);
        app.handle_action(Action::Up);
        app.handle_action(Action::Select);
        assert_eq!(app.conversation.chat_id, "new");
    }

    #[test]
    fn test_new_chat_confirm_resets() {
        let mut app = create_test_app_in_chat("1");
        app.handle_action(Action::NewChat);
        assert_eq!(app.overlay, Some(Overlay::NewChatConfirm));

        app.handle_action(Action::Select);
        assert_eq!(app.overlay, None);
        assert_eq!(app.conversation.messages.len(), 1);
        assert_eq!(app.conversation.messages[0].text, FRESH_GREETING);
    }

    #[test]
    fn test_new_chat_confirm_cancel() {
        let mut app = create_test_app_in_chat("1");
        app.handle_action(Action::NewChat);
        app.handle_action(Action::Back);
        assert_eq!(app.overlay, None);
        assert_eq!(app.conversation.messages.len(), 4);
    }

    #[test]
    fn test_help_overlay_toggle() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        // any key closes help
        app.handle_action(Action::Back);
        assert!(!app.show_help);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_help_closes_before_quit() {
        let mut app = create_test_app();
        app.show_help = true;

        app.handle_action(Action::Quit);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_action_none_does_nothing() {
        let mut app = create_test_app_in_chat("1");
        app.handle_action(Action::None);
        assert_eq!(app.screen, Screen::Chat);
        assert_eq!(app.overlay, None);
    }

    #[test]
    fn test_composer_inactive_under_overlay() {
        let mut app = create_test_app_in_chat("1");
        assert!(app.composer_active());
        app.handle_action(Action::ToggleDrawer);
        assert!(!app.composer_active());
    }
}
