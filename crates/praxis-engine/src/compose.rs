//! Validation for the message composer.

/// Default maximum message length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 2000;

/// Fraction of the limit after which the character counter is shown.
const NEAR_LIMIT_RATIO: f64 = 0.8;

/// Reasons a message cannot be sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// Nothing but whitespace was entered.
    #[error("Please enter a message to send.")]
    Empty,

    /// The trimmed message is longer than the limit.
    #[error("Message must be under {max} characters.")]
    TooLong { max: usize },
}

impl ComposeError {
    /// Short title for the notification.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Empty => "Empty Message",
            Self::TooLong { .. } => "Message Too Long",
        }
    }
}

/// Validate composer text and return the trimmed message to send.
pub fn validate(text: &str, max_len: usize) -> Result<String, ComposeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ComposeError::Empty);
    }
    if trimmed.chars().count() > max_len {
        return Err(ComposeError::TooLong { max: max_len });
    }
    Ok(trimmed.to_string())
}

/// Character counter shown under the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub count: usize,
    pub max: usize,
}

impl CharCounter {
    /// Count the characters in `text` against `max`.
    pub fn new(text: &str, max: usize) -> Self {
        Self {
            count: text.chars().count(),
            max,
        }
    }

    /// Whether the counter should be displayed.
    #[allow(clippy::cast_precision_loss)]
    pub fn near_limit(&self) -> bool {
        self.count as f64 > self.max as f64 * NEAR_LIMIT_RATIO
    }

    /// Whether the text exceeds the limit.
    pub fn over_limit(&self) -> bool {
        self.count > self.max
    }

    /// `count/max` label.
    pub fn label(&self) -> String {
        format!("{}/{}", self.count, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims() {
        assert_eq!(validate("  hello \n", 10), Ok("hello".to_string()));
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate("", 10), Err(ComposeError::Empty));
        assert_eq!(validate(" \n\t ", 10), Err(ComposeError::Empty));
    }

    #[test]
    fn test_validate_too_long() {
        let err = validate("abcdef", 5).unwrap_err();
        assert_eq!(err, ComposeError::TooLong { max: 5 });
        assert_eq!(err.to_string(), "Message must be under 5 characters.");
        assert_eq!(err.title(), "Message Too Long");
    }

    #[test]
    fn test_validate_counts_chars_not_bytes() {
        assert!(validate("héllo", 5).is_ok());
    }

    #[test]
    fn test_char_counter() {
        let counter = CharCounter::new(&"x".repeat(1601), DEFAULT_MAX_LENGTH);
        assert!(counter.near_limit());
        assert!(!counter.over_limit());
        assert_eq!(counter.label(), "1601/2000");

        let at_threshold = CharCounter::new(&"x".repeat(1600), DEFAULT_MAX_LENGTH);
        assert!(!at_threshold.near_limit());

        let over = CharCounter::new(&"x".repeat(2001), DEFAULT_MAX_LENGTH);
        assert!(over.over_limit());
    }
}
