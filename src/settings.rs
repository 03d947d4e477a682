//! View-facing preferences: color theme and cosmetic difficulty.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::instrument;

/// Color theme for the view.
///
/// Independent of game state; lives only for the process lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Returns the display label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Flips to the other theme.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Difficulty selection offered by the view.
///
/// Cosmetic for now: no AI opponent consults it, and the view says so.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Default selection.
    #[default]
    Easy,
    /// Middle option.
    Medium,
    /// Hardest option.
    Hard,
}

impl Difficulty {
    /// Returns the display label for this difficulty.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Advances to the next difficulty, wrapping from `Hard` to `Easy`.
    #[instrument]
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}
