//! Timestamp labels for messages and the chat history.

use chrono::{DateTime, Local};

/// Coarse "how long ago" label used in the chat history drawer.
pub fn relative_label(then: DateTime<Local>, now: DateTime<Local>) -> String {
    let hours = (now - then).num_hours();
    match hours {
        h if h < 1 => "Just now".to_string(),
        h if h < 24 => format!("{h}h ago"),
        h if h < 48 => "Yesterday".to_string(),
        h => format!("{}d ago", h / 24),
    }
}

/// `HH:MM` label shown under a message bubble.
pub fn clock_label(ts: DateTime<Local>) -> String {
    ts.format("%H:%M").to_string()
}
