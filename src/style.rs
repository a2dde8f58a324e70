use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Tone modifier for narration. Affects phrase selection, never segment structure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NarrationStyle {
    #[default]
    Casual,
    Formal,
    Dramatic,
    Comedic,
}

impl NarrationStyle {
    pub const ALL: [NarrationStyle; 4] = [
        Self::Casual,
        Self::Formal,
        Self::Dramatic,
        Self::Comedic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Dramatic => "dramatic",
            Self::Comedic => "comedic",
        }
    }

    /// Prefix read before the post title, if the style uses one.
    pub fn title_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Dramatic => Some("Listen to this:"),
            Self::Comedic => Some("Get this:"),
            Self::Casual | Self::Formal => None,
        }
    }

    /// Background-music moods that suit this style, most fitting first.
    pub fn music_moods(&self) -> &'static [&'static str] {
        match self {
            Self::Casual => &["lofi", "chill", "ambient"],
            Self::Formal => &["corporate", "neutral", "minimal"],
            Self::Dramatic => &["epic", "suspense", "orchestral"],
            Self::Comedic => &["upbeat", "quirky", "playful"],
        }
    }
}

impl fmt::Display for NarrationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NarrationStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidStyle(s.to_owned()))
    }
}
