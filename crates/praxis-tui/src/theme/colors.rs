//! Slate/blue palettes for the TUI, in a light and a dark variant.

use praxis_engine::ColorScheme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,
    pub code: Color,

    // Accents
    pub primary: Color,
    pub on_primary: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Palette for a color scheme.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self::dark(),
            ColorScheme::Light => Self::light(),
        }
    }

    /// Dark palette (default).
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(2, 8, 23),       // #020817
            surface: Color::Rgb(30, 41, 59),  // #1e293b
            overlay: Color::Rgb(51, 65, 85),  // #334155

            // Foregrounds
            text: Color::Rgb(248, 250, 252),    // #f8fafc
            subtext: Color::Rgb(203, 213, 225), // #cbd5e1
            muted: Color::Rgb(148, 163, 184),   // #94a3b8
            code: Color::Rgb(148, 163, 184),    // #94a3b8

            // Accents
            primary: Color::Rgb(59, 130, 246), // #3b82f6
            on_primary: Color::Rgb(2, 8, 23),  // #020817

            // Semantic
            success: Color::Rgb(34, 197, 94), // #22c55e
            warning: Color::Rgb(245, 158, 11), // #f59e0b
            error: Color::Rgb(239, 68, 68),   // #ef4444

            // Borders
            border: Color::Rgb(30, 41, 59),            // #1e293b
            border_focused: Color::Rgb(228, 234, 251), // #e4eafb
        }
    }

    /// Light palette.
    pub fn light() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(255, 255, 255),    // #ffffff
            surface: Color::Rgb(241, 245, 249), // #f1f5f9
            overlay: Color::Rgb(226, 232, 240), // #e2e8f0

            // Foregrounds
            text: Color::Rgb(2, 8, 23),         // #020817
            subtext: Color::Rgb(51, 65, 85),    // #334155
            muted: Color::Rgb(100, 116, 139),   // #64748b
            code: Color::Rgb(100, 116, 139),    // #64748b

            // Accents
            primary: Color::Rgb(37, 99, 235),      // #2563eb
            on_primary: Color::Rgb(248, 250, 252), // #f8fafc

            // Semantic
            success: Color::Rgb(22, 163, 74), // #16a34a
            warning: Color::Rgb(217, 119, 6), // #d97706
            error: Color::Rgb(239, 68, 68),   // #ef4444

            // Borders
            border: Color::Rgb(226, 232, 240),      // #e2e8f0
            border_focused: Color::Rgb(37, 99, 235), // #2563eb
        }
    }
}
