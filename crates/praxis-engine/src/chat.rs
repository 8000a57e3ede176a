//! Chat conversation model.
//!
//! Messages, conversations and the drawer's chat history. All content is
//! in-memory fixture data; nothing here is persisted.

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text shown in the placeholder bubble while a reply is pending.
pub const THINKING_TEXT: &str = "Thinking...";

/// Greeting used when the user starts over in the current chat.
pub const FRESH_GREETING: &str =
    "Hello! I'm ready to help you with a new conversation. What would you like to discuss?";

const WELCOME_GREETING: &str = "Hello! I'm your offline AI assistant. I'm here to help you with any questions or tasks you have. What would you like to know?";

const NAVIGATION_QUESTION: &str =
    "Hi! Can you help me understand how React Native navigation works?";

const NAVIGATION_ANSWER: &str = r#"Absolutely! React Native navigation is handled through libraries like **React Navigation** or **Expo Router**. Here are the key concepts:

## Navigation Types

1. **Stack Navigation** - Pages stack on top of each other
2. **Tab Navigation** - Bottom or top tabs
3. **Drawer Navigation** - Side menu that slides out

## Basic Usage

```javascript
import { NavigationContainer } from '@react-navigation/native';
import { createStackNavigator } from '@react-navigation/stack';

const Stack = createStackNavigator();

function App() {
  return (
    <NavigationContainer>
      <Stack.Navigator>
        <Stack.Screen name="Home" component={HomeScreen} />
        <Stack.Screen name="Details" component={DetailsScreen} />
      </Stack.Navigator>
    </NavigationContainer>
  );
}
```

## Navigation Methods

- `navigation.navigate('ScreenName')` - Go to screen
- `navigation.goBack()` - Go back
- `navigation.push('ScreenName')` - Push new instance

Would you like me to explain any specific part in more detail?"#;

const PARAMS_QUESTION: &str =
    "That's really helpful! Can you show me how to pass parameters between screens?";

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: String,
    /// Message body. Assistant text may contain Markdown.
    pub text: String,
    /// Whether the user wrote this message.
    pub is_user: bool,
    /// When the message was created.
    pub timestamp: DateTime<Local>,
    /// Placeholder bubble shown while a reply is generated.
    #[serde(default)]
    pub is_loading: bool,
}

impl Message {
    /// Create a message authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, true, Local::now())
    }

    /// Create an assistant reply.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, false, Local::now())
    }

    /// Create the transient "Thinking..." bubble.
    pub fn loading() -> Self {
        Self {
            id: "loading".to_string(),
            is_loading: true,
            ..Self::new(THINKING_TEXT, false, Local::now())
        }
    }

    fn new(text: impl Into<String>, is_user: bool, timestamp: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            is_user,
            timestamp,
            is_loading: false,
        }
    }
}

/// Title shown in the chat header for a chat id.
pub fn chat_title(chat_id: &str) -> &'static str {
    match chat_id {
        "1" => "React Native Help",
        "2" => "AI Model Integration",
        "3" => "UI Design Questions",
        "4" => "Performance Optimization",
        "new" => "New Chat",
        _ => "Chat",
    }
}

/// An open conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Id of the chat this conversation belongs to (`new` for a fresh one).
    pub chat_id: String,
    /// Messages in display order.
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Open a chat, seeded with its fixture transcript.
    ///
    /// A `new` chat starts with a single greeting; any other id gets the
    /// four-message sample conversation, timestamped relative to `now`.
    pub fn seeded(chat_id: impl Into<String>, now: DateTime<Local>) -> Self {
        let chat_id = chat_id.into();
        let messages = if chat_id == "new" {
            vec![Message::new(WELCOME_GREETING, false, now)]
        } else {
            vec![
                Message::new(WELCOME_GREETING, false, now - Duration::minutes(5)),
                Message::new(NAVIGATION_QUESTION, true, now - Duration::minutes(4)),
                Message::new(NAVIGATION_ANSWER, false, now - Duration::minutes(3)),
                Message::new(PARAMS_QUESTION, true, now - Duration::minutes(2)),
            ]
        };
        Self { chat_id, messages }
    }

    /// Title for the header.
    pub fn title(&self) -> &'static str {
        chat_title(&self.chat_id)
    }

    /// Discard the transcript and start over with the fresh greeting.
    pub fn reset(&mut self) {
        self.messages = vec![Message::assistant(FRESH_GREETING)];
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The most recent assistant reply, if any.
    pub fn last_reply(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| !m.is_user && !m.is_loading)
    }
}

/// Entry in the drawer's chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: String,
    pub title: String,
    pub last_message: String,
    pub timestamp: DateTime<Local>,
}

/// The fixture chat history shown in the drawer.
pub fn mock_history(now: DateTime<Local>) -> Vec<ChatSummary> {
    [
        ("1", "How to create components...", Duration::hours(1)),
        ("2", "Setting up offline models...", Duration::hours(2)),
        ("3", "Best practices for mobile...", Duration::days(1)),
        ("4", "How to improve app speed...", Duration::days(2)),
    ]
    .into_iter()
    .map(|(id, last_message, age)| ChatSummary {
        id: id.to_string(),
        title: chat_title(id).to_string(),
        last_message: last_message.to_string(),
        timestamp: now - age,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{render, Segment};

    #[test]
    fn test_chat_title() {
        assert_eq!(chat_title("1"), "React Native Help");
        assert_eq!(chat_title("4"), "Performance Optimization");
        assert_eq!(chat_title("new"), "New Chat");
        assert_eq!(chat_title("99"), "Chat");
    }

    #[test]
    fn test_seeded_new_chat() {
        let convo = Conversation::seeded("new", Local::now());
        assert_eq!(convo.messages.len(), 1);
        assert!(!convo.messages[0].is_user);
        assert_eq!(convo.title(), "New Chat");
    }

    #[test]
    fn test_seeded_existing_chat() {
        let now = Local::now();
        let convo = Conversation::seeded("1", now);
        assert_eq!(convo.messages.len(), 4);
        assert!(convo.messages[1].is_user);
        assert!(convo.messages[0].timestamp < convo.messages[3].timestamp);
        assert_eq!(convo.messages[3].timestamp, now - Duration::minutes(2));
    }

    #[test]
    fn test_sample_answer_renders_markdown() {
        let convo = Conversation::seeded("1", Local::now());
        let segments = render(&convo.messages[2].text);
        assert!(segments.iter().any(|s| matches!(s, Segment::Heading { level: 2, .. })));
        assert!(segments.iter().any(|s| matches!(s, Segment::CodeBlock { .. })));
        assert!(segments
            .iter()
            .any(|s| matches!(s, Segment::NumberedListItem { text } if text.starts_with("1. "))));
        assert!(segments.iter().any(|s| matches!(s, Segment::ListItem { .. })));
    }

    #[test]
    fn test_reset_and_push() {
        let mut convo = Conversation::seeded("2", Local::now());
        convo.reset();
        assert_eq!(convo.messages.len(), 1);
        assert_eq!(convo.last().map(|m| m.text.as_str()), Some(FRESH_GREETING));

        convo.push(Message::user("hi"));
        assert!(convo.last().is_some_and(|m| m.is_user));
        assert_eq!(
            convo.last_reply().map(|m| m.text.as_str()),
            Some(FRESH_GREETING)
        );
    }

    #[test]
    fn test_loading_message() {
        let msg = Message::loading();
        assert!(msg.is_loading);
        assert!(!msg.is_user);
        assert_eq!(msg.text, THINKING_TEXT);
    }

    #[test]
    fn test_message_ids_unique() {
        let a = Message::user("a");
        let b = Message::user("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_mock_history() {
        let now = Local::now();
        let history = mock_history(now);
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].title, "React Native Help");
        assert_eq!(history[3].timestamp, now - Duration::days(2));
    }
}
