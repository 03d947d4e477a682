//! Theme palettes: terminal colors for the light and dark themes.

use ratatui::style::Color;

use noughts::Theme;

/// Colors used by the view, chosen per theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Default text color.
    pub text: Color,
    /// Screen background.
    pub background: Color,
    /// Grid lines and de-emphasized hints.
    pub grid: Color,
    /// X marks.
    pub x_mark: Color,
    /// O marks.
    pub o_mark: Color,
    /// Title and selected-option emphasis.
    pub accent: Color,
    /// Status line text.
    pub status: Color,
    /// Background of the cursor cell.
    pub cursor: Color,
    /// Cells on the winning line.
    pub winning: Color,
}

impl Palette {
    /// Returns the palette for the given theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                text: Color::Black,
                background: Color::White,
                grid: Color::Gray,
                x_mark: Color::Blue,
                o_mark: Color::Red,
                accent: Color::Blue,
                status: Color::Magenta,
                cursor: Color::LightYellow,
                winning: Color::Green,
            },
            Theme::Dark => Self {
                text: Color::White,
                background: Color::Black,
                grid: Color::DarkGray,
                x_mark: Color::LightBlue,
                o_mark: Color::LightRed,
                accent: Color::Cyan,
                status: Color::Yellow,
                cursor: Color::DarkGray,
                winning: Color::LightGreen,
            },
        }
    }
}
