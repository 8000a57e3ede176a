//! Application state and update logic for the praxis TUI.

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::event::Action;
use crate::theme::Theme;
use crate::ui::widgets::TextInputState;
use chrono::Local;
use praxis_engine::{
    mock_history, validate, ChatSummary, Config, Conversation, Message, ResponderError,
};
use std::cell::Cell;
use std::path::PathBuf;

/// Rows moved by PageUp/PageDown.
const PAGE_SCROLL: usize = 10;

/// How long a notification stays up: ~3 seconds at the 250ms tick rate.
const NOTIFICATION_TICKS: usize = 12;

/// The current screen being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Chat,
}

/// Modal layered over the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Chat history drawer.
    Drawer,
    /// "Start over?" confirmation.
    NewChatConfirm,
}

/// Home screen buttons, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeButton {
    #[default]
    StartChat,
    ToggleTheme,
}

/// Temporary message in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub is_error: bool,
}

/// A message accepted for sending, waiting for a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub prompt: String,
    /// Conversation the reply belongs to.
    pub epoch: u64,
}

/// Application state.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Current screen.
    pub screen: Screen,

    /// Modal over the chat screen, if any.
    pub overlay: Option<Overlay>,

    /// Active configuration.
    pub config: Config,

    /// Palette for the configured color scheme.
    pub theme: Theme,

    /// Focused button on the home screen.
    pub home_selected: HomeButton,

    /// Chat history shown in the drawer.
    pub history: Vec<ChatSummary>,

    /// Drawer row under the cursor (0 = "New Chat").
    pub drawer_cursor: usize,

    /// Id of the open chat.
    pub selected_chat: String,

    /// The open conversation.
    pub conversation: Conversation,

    /// Composer state.
    pub input_state: TextInputState,

    /// Whether a reply is being generated.
    pub loading: bool,

    /// Rows scrolled up from the bottom of the transcript (0 = follow).
    pub scroll_from_bottom: usize,

    /// Largest useful scroll, recorded by the last render.
    pub transcript_max_scroll: Cell<usize>,

    /// Voice recording toggle (indicator only).
    pub recording: bool,

    /// Tick counter for animations.
    pub tick: usize,

    /// Notification message (displayed temporarily, cleared after some ticks).
    pub notification: Option<Notification>,

    /// Ticks remaining until notification is cleared.
    notification_ttl: usize,

    /// Ticks remaining for the "Copied to clipboard!" label.
    pub copied_ttl: u32,

    /// Bumped whenever the conversation is replaced, so stale replies are dropped.
    epoch: u64,

    /// Where the config is saved when the theme changes.
    config_path: Option<PathBuf>,

    clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Create a new app instance.
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self::with_clipboard(config, config_path, Box::new(SystemClipboard))
    }

    /// Create an app that copies into `clipboard`.
    pub fn with_clipboard(
        config: Config,
        config_path: Option<PathBuf>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let now = Local::now();
        Self {
            should_quit: false,
            show_help: false,
            screen: Screen::Home,
            overlay: None,
            theme: Theme::for_scheme(config.color_scheme),
            config,
            home_selected: HomeButton::StartChat,
            history: mock_history(now),
            drawer_cursor: 0,
            selected_chat: "1".to_string(),
            conversation: Conversation::seeded("new", now),
            input_state: TextInputState::new(),
            loading: false,
            scroll_from_bottom: 0,
            transcript_max_scroll: Cell::new(0),
            recording: false,
            tick: 0,
            notification: None,
            notification_ttl: 0,
            copied_ttl: 0,
            epoch: 0,
            config_path,
            clipboard,
        }
    }

    /// Create an app for tests, with an in-memory clipboard.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::with_clipboard(
            Config::default(),
            None,
            Box::new(crate::clipboard::MemoryClipboard::default()),
        )
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        // Global actions
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.overlay {
            Some(Overlay::Drawer) => return self.handle_drawer_action(action),
            Some(Overlay::NewChatConfirm) => return self.handle_confirm_action(action),
            None => {}
        }

        match self.screen {
            Screen::Home => self.handle_home_action(action),
            Screen::Chat => self.handle_chat_action(action),
        }
    }

    fn handle_home_action(&mut self, action: Action) {
        match action {
            Action::Up | Action::Down | Action::NextTab => {
                self.home_selected = match self.home_selected {
                    HomeButton::StartChat => HomeButton::ToggleTheme,
                    HomeButton::ToggleTheme => HomeButton::StartChat,
                };
            }
            Action::Select => match self.home_selected {
                HomeButton::StartChat => self.start_new_chat(),
                HomeButton::ToggleTheme => self.toggle_theme(),
            },
            Action::NewChat => self.start_new_chat(),
            Action::ToggleTheme => self.toggle_theme(),
            _ => {}
        }
    }

    fn handle_chat_action(&mut self, action: Action) {
        match action {
            Action::Back => {
                self.screen = Screen::Home;
                tracing::info!("returned to home screen");
            }
            Action::ToggleDrawer => self.open_drawer(),
            Action::NewChat => self.overlay = Some(Overlay::NewChatConfirm),
            Action::Copy => self.copy_last_reply(),
            Action::Record => self.toggle_recording(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Up => self.scroll_up(1),
            Action::Down => self.scroll_down(1),
            Action::PageUp => self.scroll_up(PAGE_SCROLL),
            Action::PageDown => self.scroll_down(PAGE_SCROLL),
            Action::HistoryPrev => self.input_state.history_prev(),
            Action::HistoryNext => self.input_state.history_next(),
            _ => {}
        }
    }

    fn handle_drawer_action(&mut self, action: Action) {
        let rows = self.history.len() + 1;
        match action {
            Action::Back | Action::ToggleDrawer => self.overlay = None,
            Action::Up => self.drawer_cursor = self.drawer_cursor.saturating_sub(1),
            Action::Down => {
                if self.drawer_cursor + 1 < rows {
                    self.drawer_cursor += 1;
                }
            }
            Action::NewChat => {
                self.overlay = None;
                self.start_new_chat();
            }
            Action::Select => {
                self.overlay = None;
                match self.drawer_cursor.checked_sub(1) {
                    None => self.start_new_chat(),
                    Some(i) => {
                        if let Some(chat) = self.history.get(i) {
                            let id = chat.id.clone();
                            self.open_chat(&id);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_action(&mut self, action: Action) {
        match action {
            Action::Select => {
                self.overlay = None;
                self.conversation.reset();
                self.begin_conversation();
                tracing::info!(chat = %self.conversation.chat_id, "conversation cleared");
            }
            Action::Back => self.overlay = None,
            _ => {}
        }
    }

    fn open_drawer(&mut self) {
        self.drawer_cursor = self
            .history
            .iter()
            .position(|c| c.id == self.selected_chat)
            .map_or(0, |i| i + 1);
        self.overlay = Some(Overlay::Drawer);
    }

    /// Open a chat with its seeded transcript.
    pub fn open_chat(&mut self, chat_id: &str) {
        self.conversation = Conversation::seeded(chat_id, Local::now());
        self.selected_chat = chat_id.to_string();
        self.screen = Screen::Chat;
        self.input_state.clear();
        self.begin_conversation();
        tracing::info!(chat = chat_id, "opened chat");
    }

    /// Open a fresh chat.
    pub fn start_new_chat(&mut self) {
        self.open_chat("new");
    }

    /// Reset per-conversation state after the transcript was replaced.
    fn begin_conversation(&mut self) {
        self.epoch += 1;
        self.loading = false;
        self.scroll_from_bottom = 0;
        self.copied_ttl = 0;
    }

    /// Validate the composer and, if it passes, append the user message.
    ///
    /// Returns the prompt to hand to the responder. On a validation error
    /// a notification is shown and the draft is kept.
    pub fn submit_input(&mut self) -> Option<PendingReply> {
        if self.loading {
            return None;
        }
        match validate(self.input_state.content(), self.config.max_message_length) {
            Err(e) => {
                self.set_notification(format!("{}: {e}", e.title()), true);
                None
            }
            Ok(prompt) => {
                self.input_state.submit();
                self.conversation.push(Message::user(prompt.clone()));
                self.loading = true;
                self.scroll_from_bottom = 0;
                tracing::info!(chars = prompt.chars().count(), "message sent");
                Some(PendingReply {
                    prompt,
                    epoch: self.epoch,
                })
            }
        }
    }

    /// Deliver a reply for the conversation identified by `epoch`.
    pub fn finish_reply(&mut self, epoch: u64, result: Result<String, ResponderError>) {
        if epoch != self.epoch {
            tracing::debug!(epoch, current = self.epoch, "dropping stale reply");
            return;
        }
        self.loading = false;
        match result {
            Ok(text) => {
                self.conversation.push(Message::assistant(text));
                self.scroll_from_bottom = 0;
            }
            Err(e) => {
                tracing::warn!(error = %e, "reply generation failed");
                self.set_notification("Failed to generate response".to_string(), true);
            }
        }
    }

    /// Copy the latest assistant reply to the clipboard.
    pub fn copy_last_reply(&mut self) {
        let Some(text) = self.conversation.last_reply().map(|m| m.text.clone()) else {
            return;
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => self.copied_ttl = self.config.copy_feedback_ticks,
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.set_notification("Failed to copy to clipboard".to_string(), true);
            }
        }
    }

    fn toggle_recording(&mut self) {
        self.recording = !self.recording;
        let text = if self.recording {
            "Voice recording started. (Feature coming soon)"
        } else {
            "Voice recording stopped. (Feature coming soon)"
        };
        self.set_notification(text.to_string(), false);
    }

    /// Switch between the light and dark palettes and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.config.color_scheme = self.config.color_scheme.toggled();
        self.theme = Theme::for_scheme(self.config.color_scheme);
        tracing::info!(scheme = ?self.config.color_scheme, "theme changed");

        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save(path) {
                tracing::warn!(error = %e, "failed to save config");
                self.set_notification(format!("Failed to save config: {e}"), true);
            }
        }
    }

    fn scroll_up(&mut self, rows: usize) {
        self.scroll_from_bottom =
            (self.scroll_from_bottom + rows).min(self.transcript_max_scroll.get());
    }

    fn scroll_down(&mut self, rows: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(rows);
    }

    /// Set a temporary notification message.
    fn set_notification(&mut self, text: String, is_error: bool) {
        self.notification = Some(Notification { text, is_error });
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    /// Whether the chat screen's composer should receive typed keys.
    pub fn composer_active(&self) -> bool {
        self.screen == Screen::Chat && self.overlay.is_none() && !self.show_help
    }

    /// Increment tick counter and update time-based state.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
        self.copied_ttl = self.copied_ttl.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use praxis_engine::ColorScheme;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn chat_app() -> App {
        let mut app = App::new_for_test();
        app.start_new_chat();
        app
    }

    fn type_text(app: &mut App, text: &str) {
        app.input_state.insert_str(text);
    }

    #[test]
    fn test_screen_enum() {
        assert_eq!(Screen::default(), Screen::Home);
        assert_ne!(Screen::Home, Screen::Chat);
    }

    #[test]
    fn test_new_app_defaults() {
        let app = App::new_for_test();
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.selected_chat, "1");
        assert_eq!(app.history.len(), 4);
        assert_eq!(app.theme, Theme::dark());
    }

    #[test]
    fn test_submit_empty_shows_error() {
        let mut app = chat_app();
        type_text(&mut app, "   ");
        assert!(app.submit_input().is_none());
        let note = app.notification.clone().unwrap();
        assert!(note.is_error);
        assert_eq!(note.text, "Empty Message: Please enter a message to send.");
        assert_eq!(app.conversation.messages.len(), 1);
    }

    #[test]
    fn test_submit_too_long_keeps_draft() {
        let mut app = chat_app();
        app.config.max_message_length = 5;
        type_text(&mut app, "too long");
        assert!(app.submit_input().is_none());
        assert_eq!(app.input_state.content(), "too long");
        assert!(app
            .notification
            .as_ref()
            .is_some_and(|n| n.text.contains("under 5 characters")));
    }

    #[test]
    fn test_submit_and_reply() {
        let mut app = chat_app();
        type_text(&mut app, "  hello  ");
        let pending = app.submit_input().unwrap();
        assert_eq!(pending.prompt, "hello");
        assert!(app.loading);
        assert!(app.input_state.is_empty());
        assert!(app.conversation.last().is_some_and(|m| m.is_user));

        // no double send while loading
        type_text(&mut app, "again");
        assert!(app.submit_input().is_none());

        app.finish_reply(pending.epoch, Ok("**hi**".to_string()));
        assert!(!app.loading);
        assert_eq!(
            app.conversation.last_reply().map(|m| m.text.as_str()),
            Some("**hi**")
        );
    }

    #[test]
    fn test_failed_reply_notifies() {
        let mut app = chat_app();
        type_text(&mut app, "hello");
        let pending = app.submit_input().unwrap();
        app.finish_reply(pending.epoch, Err(ResponderError::NoReplies));
        assert!(!app.loading);
        assert_eq!(
            app.notification.as_ref().map(|n| n.text.as_str()),
            Some("Failed to generate response")
        );
    }

    #[test]
    fn test_stale_reply_dropped() {
        let mut app = chat_app();
        type_text(&mut app, "hello");
        let pending = app.submit_input().unwrap();
        app.open_chat("2");
        app.finish_reply(pending.epoch, Ok("late".to_string()));
        assert!(app
            .conversation
            .messages
            .iter()
            .all(|m| m.text != "late"));
    }

    #[test]
    fn test_copy_last_reply() {
        let contents = Rc::new(RefCell::new(None));
        let clipboard = MemoryClipboard {
            contents: Rc::clone(&contents),
            fail: false,
        };
        let mut app = App::with_clipboard(Config::default(), None, Box::new(clipboard));
        app.open_chat("1");
        app.handle_action(Action::Copy);

        assert_eq!(app.copied_ttl, 8);
        assert!(contents
            .borrow()
            .as_deref()
            .is_some_and(|t| t.starts_with("Absolutely!")));

        for _ in 0..8 {
            app.tick();
        }
        assert_eq!(app.copied_ttl, 0);
    }

    #[test]
    fn test_copy_failure_notifies() {
        let clipboard = MemoryClipboard {
            fail: true,
            ..MemoryClipboard::default()
        };
        let mut app = App::with_clipboard(Config::default(), None, Box::new(clipboard));
        app.open_chat("1");
        app.handle_action(Action::Copy);
        assert_eq!(app.copied_ttl, 0);
        assert!(app.notification.as_ref().is_some_and(|n| n.is_error));
    }

    #[test]
    fn test_recording_toggle() {
        let mut app = chat_app();
        app.handle_action(Action::Record);
        assert!(app.recording);
        assert_eq!(
            app.notification.as_ref().map(|n| n.text.as_str()),
            Some("Voice recording started. (Feature coming soon)")
        );
        app.handle_action(Action::Record);
        assert!(!app.recording);
    }

    #[test]
    fn test_notification_expires() {
        let mut app = chat_app();
        app.handle_action(Action::Record);
        for _ in 0..NOTIFICATION_TICKS {
            assert!(app.notification.is_some());
            app.tick();
        }
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_toggle_theme_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut app = App::with_clipboard(
            Config::default(),
            Some(path.clone()),
            Box::new(MemoryClipboard::default()),
        );
        app.handle_action(Action::ToggleTheme);
        assert_eq!(app.theme, Theme::light());

        let saved = Config::load(&path).unwrap();
        assert_eq!(saved.color_scheme, ColorScheme::Light);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = chat_app();
        app.transcript_max_scroll.set(5);
        app.handle_action(Action::PageUp);
        assert_eq!(app.scroll_from_bottom, 5);
        app.handle_action(Action::Down);
        assert_eq!(app.scroll_from_bottom, 4);
        app.handle_action(Action::PageDown);
        assert_eq!(app.scroll_from_bottom, 0);
    }
}
