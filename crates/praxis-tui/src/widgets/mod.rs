//! Chat widgets for the TUI.
//!
//! This module provides:
//! - [`MessageBubble`] - One transcript message laid out as Lines
//! - [`InputBar`] - Composer with character counter and recording indicator
//! - [`ChatHeader`] - Title bar of the chat screen
//! - [`Drawer`] - Chat history side panel

mod chat_header;
mod drawer;
mod input_bar;
mod message_bubble;

pub use chat_header::ChatHeader;
pub use drawer::Drawer;
pub use input_bar::{input_height, InputBar};
pub use message_bubble::{BubbleFooter, MessageBubble};
