use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// The supported export formats for a generated script.
///
/// Integration notes:
/// - With the `cli` feature, `ValueEnum` lets this enum be used directly as a CLI flag.
/// - `Json` and `Txt` dump the script itself; `Srt` and `Vtt` write captions derived from it
///   through a `SubtitleEncoder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    /// The full script as pretty-printed JSON.
    Json,

    /// A human-readable plain-text script.
    Txt,

    /// Captions in SubRip format.
    Srt,

    /// Captions in WebVTT format.
    Vtt,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [Self::Json, Self::Txt, Self::Srt, Self::Vtt];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Txt => "txt",
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }

    pub fn is_subtitle(&self) -> bool {
        matches!(self, Self::Srt | Self::Vtt)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|f| f.extension().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnsupportedExportFormat(s.to_owned()))
    }
}
