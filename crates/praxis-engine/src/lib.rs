//! praxis-engine: Headless core of the praxis chat shell
//!
//! This crate holds everything that does not touch the terminal:
//! - The Markdown-subset renderer used for assistant replies
//! - The chat model and fixture history
//! - The mock responder
//! - Composer validation, timestamp labels and configuration

pub mod chat;
pub mod compose;
pub mod config;
pub mod markdown;
pub mod responder;
pub mod time;

// Re-export commonly used types
pub use chat::{chat_title, mock_history, ChatSummary, Conversation, Message};
pub use compose::{validate, CharCounter, ComposeError};
pub use config::{ColorScheme, Config, ConfigError, DEFAULT_CONFIG_PATH};
pub use markdown::{render, tokenize, Segment, Token, TokenKind};
pub use responder::{MockResponder, ReplyFuture, Responder, ResponderError};
pub use time::{clock_label, relative_label};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
