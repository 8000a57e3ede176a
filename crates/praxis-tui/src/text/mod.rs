//! Text rendering utilities.
//!
//! This module provides shared text rendering functionality:
//! - [`render_markdown`] - Lay out message Markdown as styled ratatui Lines
//! - [`segments_to_lines`] - Lay out already rendered segments
//! - [`MarkdownStyles`] - Style configuration for markdown elements
//! - [`wrap_text`], [`wrap_lines`] - Text wrapping utilities

mod markdown;
mod styles;
mod wrap;

pub use markdown::{render_markdown, segments_to_lines};
pub use styles::MarkdownStyles;
pub use wrap::{wrap_lines, wrap_text};
