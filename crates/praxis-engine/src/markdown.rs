//! Markdown-subset renderer for assistant messages.
//!
//! Turns message text into an ordered list of [`Segment`]s without a
//! general-purpose Markdown parser. A single combined pattern carves the
//! source into [`Token`]s (matched syntax spans and the gaps between them),
//! and each token is then classified into exactly one segment.
//!
//! Recognised syntax, in priority order:
//! - headings: `#`, `##`, `###` followed by a space, to end of line
//! - bold: `**text**` on one line
//! - fenced code blocks: ```` ```lang ... ``` ````, may span lines
//! - inline code: `` `code` ``, possibly empty
//! - bullet lines: `- item` or `* item`, at line start
//! - numbered lines: `1. item`, at line start
//!
//! Anything else is plain text. Rendering never fails: malformed syntax
//! simply does not match and falls through to [`Segment::PlainText`].

use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

/// Combined pattern for a full message. Group order is the priority order.
const SPAN_PATTERN: &str = concat!(
    r"(?mR)",
    r"(?P<heading>#{1,3}[ \t].*$)",
    r"|(?P<bold>\*\*.*?\*\*)",
    r"|(?P<fence>```[\s\S]*?```)",
    r"|(?P<code>`[^`\r\n]*`)",
    r"|(?P<bullet>^[-*][ \t].*$)",
    r"|(?P<numbered>^[0-9]+\.[ \t].*$)",
);

static SPAN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(SPAN_PATTERN).ok());

/// Capture group names paired with the token kind they produce.
const GROUPS: [(&str, TokenKind); 6] = [
    ("heading", TokenKind::Heading),
    ("bold", TokenKind::Bold),
    ("fence", TokenKind::CodeFence),
    ("code", TokenKind::InlineCode),
    ("bullet", TokenKind::Bullet),
    ("numbered", TokenKind::Numbered),
];

/// One classified, ordered unit of renderable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Heading line with level 1..=3.
    Heading { level: u8, text: String },
    /// Bold run, delimiters stripped.
    Bold { text: String },
    /// Fenced code block interior, line breaks preserved.
    CodeBlock { text: String },
    /// Inline code, backticks stripped.
    InlineCode { text: String },
    /// Bullet list line, marker stripped.
    ListItem { text: String },
    /// Numbered list line, numbering kept verbatim.
    NumberedListItem { text: String },
    /// Ordinary text between recognised spans.
    PlainText { text: String },
    /// Whitespace-only gap; renders nothing.
    Empty,
}

impl Segment {
    /// The visible text of this segment (empty for [`Segment::Empty`]).
    pub fn text(&self) -> &str {
        match self {
            Self::Heading { text, .. }
            | Self::Bold { text }
            | Self::CodeBlock { text }
            | Self::InlineCode { text }
            | Self::ListItem { text }
            | Self::NumberedListItem { text }
            | Self::PlainText { text } => text,
            Self::Empty => "",
        }
    }

    /// Whether the segment occupies its own line(s) when laid out.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Heading { .. }
                | Self::CodeBlock { .. }
                | Self::ListItem { .. }
                | Self::NumberedListItem { .. }
        )
    }

    /// Whether the segment produces any visual output.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading { level, text } => write!(f, "h{level} {text:?}"),
            Self::Bold { text } => write!(f, "bold {text:?}"),
            Self::CodeBlock { text } => write!(f, "code_block {text:?}"),
            Self::InlineCode { text } => write!(f, "inline_code {text:?}"),
            Self::ListItem { text } => write!(f, "list_item {text:?}"),
            Self::NumberedListItem { text } => write!(f, "numbered_item {text:?}"),
            Self::PlainText { text } => write!(f, "text {text:?}"),
            Self::Empty => f.write_str("empty"),
        }
    }
}

/// Which alternative of the combined pattern carved a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Heading,
    Bold,
    CodeFence,
    InlineCode,
    Bullet,
    Numbered,
    /// Text between two matches (or before the first / after the last).
    Gap,
}

/// A contiguous span of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range into the source string.
    pub range: Range<usize>,
}

impl Token {
    fn gap(range: Range<usize>) -> Self {
        Self {
            kind: TokenKind::Gap,
            range,
        }
    }

    /// The source text covered by this token.
    pub fn source<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range.clone()]
    }

    /// Classify this span into a segment, stripping delimiter syntax.
    pub fn segment(&self, text: &str) -> Segment {
        let span = self.source(text);
        match self.kind {
            TokenKind::Heading => {
                let level = if span.starts_with("###") {
                    3
                } else if span.starts_with("##") {
                    2
                } else {
                    1
                };
                Segment::Heading {
                    level,
                    // One separator byte (space or tab) follows the hashes.
                    text: span[usize::from(level) + 1..].to_string(),
                }
            }
            TokenKind::Bold => Segment::Bold {
                text: span.replace("**", ""),
            },
            TokenKind::CodeFence => Segment::CodeBlock {
                text: strip_fences(span).to_string(),
            },
            TokenKind::InlineCode => Segment::InlineCode {
                text: span[1..span.len() - 1].to_string(),
            },
            TokenKind::Bullet => Segment::ListItem {
                text: span[2..].to_string(),
            },
            TokenKind::Numbered => Segment::NumberedListItem {
                text: span.to_string(),
            },
            TokenKind::Gap => {
                if span.trim().is_empty() {
                    Segment::Empty
                } else {
                    Segment::PlainText {
                        text: span.to_string(),
                    }
                }
            }
        }
    }
}

/// Split message text into tokens.
///
/// Token ranges are contiguous, non-overlapping and cover the whole input;
/// zero-length gaps are never emitted.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    if text.is_empty() {
        return tokens;
    }

    let Some(re) = SPAN_RE.as_ref() else {
        tokens.push(Token::gap(0..text.len()));
        return tokens;
    };

    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            tokens.push(Token::gap(last..whole.start()));
        }
        tokens.push(Token {
            kind: matched_kind(&caps),
            range: whole.range(),
        });
        last = whole.end();
    }
    if last < text.len() {
        tokens.push(Token::gap(last..text.len()));
    }
    tokens
}

/// Render message text into display segments.
pub fn render(text: &str) -> Vec<Segment> {
    let segments: Vec<Segment> = tokenize(text)
        .iter()
        .map(|token| token.segment(text))
        .collect();
    tracing::trace!(
        bytes = text.len(),
        segments = segments.len(),
        "rendered markdown"
    );
    segments
}

fn matched_kind(caps: &Captures<'_>) -> TokenKind {
    GROUPS
        .iter()
        .find(|(name, _)| caps.name(name).is_some())
        .map_or(TokenKind::Gap, |(_, kind)| *kind)
}

/// Remove the opening fence (with optional language tag and newline) and the
/// closing fence (with optional preceding newline).
fn strip_fences(span: &str) -> &str {
    let inner = &span[3..span.len() - 3];
    let inner = inner.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_');
    let inner = inner
        .strip_prefix("\r\n")
        .or_else(|| inner.strip_prefix('\n'))
        .unwrap_or(inner);
    inner
        .strip_suffix("\r\n")
        .or_else(|| inner.strip_suffix('\n'))
        .unwrap_or(inner)
}
