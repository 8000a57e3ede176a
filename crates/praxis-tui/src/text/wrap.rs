//! Text wrapping utilities for ratatui Lines.
//!
//! Widths are measured in terminal columns, so wide characters count
//! double.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Wrap a plain text string to the specified width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Wrap every line to fit within `width` columns, preserving span styles.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let columns: usize = line.spans.iter().map(|s| s.content.width()).sum();
    if columns <= width {
        return vec![line];
    }

    let styled: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |ch| (ch, span.style)))
        .collect();
    let plain: String = styled.iter().map(|(ch, _)| ch).collect();

    let mut result = Vec::new();
    let mut next = 0;
    for row in textwrap::wrap(&plain, width) {
        // textwrap drops the whitespace it breaks on
        while next < styled.len()
            && styled[next].0.is_whitespace()
            && !row.starts_with(styled[next].0)
        {
            next += 1;
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        for expected in row.chars() {
            let Some(&(_, style)) = styled.get(next) else {
                break;
            };
            next += 1;
            match spans.last_mut() {
                Some(last) if last.style == style => last.content.to_mut().push(expected),
                _ => spans.push(Span::styled(expected.to_string(), style)),
            }
        }
        if !spans.is_empty() {
            result.push(Line::from(spans).style(line.style));
        }
    }

    if result.is_empty() {
        result.push(Line::default());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_text_short() {
        assert_eq!(wrap_text("Hello", 10), vec!["Hello"]);
    }

    #[test]
    fn test_wrap_text_long() {
        let lines = wrap_text("Hello world this is a long line", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 10);
        }
    }

    #[test]
    fn test_wrap_line_short_untouched() {
        let wrapped = wrap_line(Line::from("Short"), 20);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(text_of(&wrapped[0]), "Short");
    }

    #[test]
    fn test_wrap_line_preserves_style() {
        let red = Style::default().fg(Color::Red);
        let blue = Style::default().fg(Color::Blue);
        let line = Line::from(vec![
            Span::styled("Hello there ", red),
            Span::styled("wonderful world", blue),
        ]);
        let wrapped = wrap_line(line, 12);
        assert_eq!(wrapped.len(), 3);
        assert_eq!(text_of(&wrapped[0]), "Hello there");
        assert_eq!(wrapped[0].spans[0].style, red);
        assert_eq!(text_of(&wrapped[1]), "wonderful");
        assert_eq!(wrapped[1].spans[0].style, blue);
        assert_eq!(text_of(&wrapped[2]), "world");
    }

    #[test]
    fn test_wrap_lines_multiple() {
        let lines = vec![
            Line::from("Short line"),
            Line::from("This is a very long line that should definitely be wrapped to fit"),
        ];
        let wrapped = wrap_lines(lines, 20);
        assert!(wrapped.len() > 2);
        for line in &wrapped {
            assert!(line.width() <= 20);
        }
    }

    #[test]
    fn test_wrap_line_wide_chars() {
        let line = Line::from(vec![
            Span::styled("Hello 🎉 ", Style::default().fg(Color::Red)),
            Span::styled("你好世界", Style::default().fg(Color::Blue)),
        ]);
        let wrapped = wrap_line(line, 10);
        assert!(wrapped.len() > 1);
        let all: String = wrapped.iter().map(text_of).collect();
        assert!(all.contains("🎉"));
        assert!(all.contains("你好"));
    }

    #[test]
    fn test_zero_width_is_noop() {
        let lines = vec![Line::from("anything at all")];
        assert_eq!(wrap_lines(lines.clone(), 0), lines);
    }
}
