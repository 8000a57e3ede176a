//! Layout of rendered message segments into styled ratatui Lines.
//!
//! Block segments (headings, code blocks, list items) always start on a
//! fresh line and end their line. Inline segments (bold, inline code, plain
//! text) flow together, and newlines inside plain text break lines.
//! Heading and list bodies are shown exactly as the segment carries them.

use praxis_engine::markdown::{render, Segment};
use ratatui::text::{Line, Span};

use crate::theme::Theme;

use super::styles::MarkdownStyles;
use super::wrap::wrap_lines;

const BULLET: &str = "• ";

/// Render message Markdown to styled Lines wrapped to `width` columns.
///
/// A `width` of zero disables wrapping.
pub fn render_markdown(input: &str, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let styles = MarkdownStyles::from_theme(theme);
    let lines = segments_to_lines(&render(input), &styles);
    wrap_lines(lines, width)
}

/// Lay out segments as unwrapped Lines.
pub fn segments_to_lines(segments: &[Segment], styles: &MarkdownStyles) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::new(styles);
    for segment in segments {
        builder.push(segment);
    }
    builder.finish()
}

struct LineBuilder<'a> {
    styles: &'a MarkdownStyles,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    /// The last thing emitted was a block, so the next newline only ends it.
    after_block: bool,
}

impl<'a> LineBuilder<'a> {
    fn new(styles: &'a MarkdownStyles) -> Self {
        Self {
            styles,
            lines: Vec::new(),
            current: Vec::new(),
            after_block: false,
        }
    }

    fn push(&mut self, segment: &Segment) {
        let styles = self.styles;
        match segment {
            Segment::Heading { level, text } => {
                self.block(vec![Span::styled(text.clone(), styles.heading(*level))]);
            }
            Segment::CodeBlock { text } => {
                self.flush();
                for line in text.split('\n') {
                    let line = line.trim_end_matches('\r');
                    self.lines.push(Line::from(Span::styled(
                        format!("  {line}  "),
                        styles.code_block,
                    )));
                }
                self.after_block = true;
            }
            Segment::ListItem { text } => {
                self.block(vec![
                    Span::styled(BULLET, styles.list_marker),
                    Span::styled(text.clone(), styles.text),
                ]);
            }
            Segment::NumberedListItem { text } => {
                self.block(vec![Span::styled(text.clone(), styles.text)]);
            }
            Segment::Bold { text } => {
                self.inline(Span::styled(text.clone(), styles.strong));
            }
            Segment::InlineCode { text } => {
                self.inline(Span::styled(format!(" {text} "), styles.code));
            }
            Segment::PlainText { text } => self.plain(text),
            Segment::Empty => {}
        }
    }

    fn plain(&mut self, text: &str) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.newline();
            }
            let part = part.trim_end_matches('\r');
            if !part.is_empty() {
                self.inline(Span::styled(part.to_string(), self.styles.text));
            }
        }
    }

    fn inline(&mut self, span: Span<'static>) {
        self.current.push(span);
        self.after_block = false;
    }

    fn newline(&mut self) {
        if self.current.is_empty() && self.after_block {
            self.after_block = false;
            return;
        }
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
        self.after_block = false;
    }

    fn block(&mut self, spans: Vec<Span<'static>>) {
        self.flush();
        self.lines.push(Line::from(spans));
        self.after_block = true;
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        self.lines
    }
}
