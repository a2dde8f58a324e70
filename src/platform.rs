//! Duration windows of the platforms scripts are usually cut for.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Platform {
    Tiktok,
    Instagram,
    YoutubeShorts,
    Youtube,
    Facebook,
}

/// Display name, aspect ratio and duration window (seconds) of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformPreset {
    pub name: &'static str,
    pub aspect_ratio: &'static str,
    pub min_duration: f64,
    pub optimal_duration: f64,
    pub max_duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationFit {
    TooShort,
    Fits,
    TooLong,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Self::Tiktok,
        Self::Instagram,
        Self::YoutubeShorts,
        Self::Youtube,
        Self::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiktok => "tiktok",
            Self::Instagram => "instagram",
            Self::YoutubeShorts => "youtube_shorts",
            Self::Youtube => "youtube",
            Self::Facebook => "facebook",
        }
    }

    pub fn preset(&self) -> PlatformPreset {
        let (name, aspect_ratio, min_duration, optimal_duration, max_duration) = match self {
            Self::Tiktok => ("TikTok / YouTube Shorts", "9:16", 15.0, 30.0, 60.0),
            Self::Instagram => ("Instagram Reels", "9:16", 30.0, 60.0, 90.0),
            Self::YoutubeShorts => ("YouTube Shorts", "9:16", 15.0, 45.0, 60.0),
            Self::Youtube => ("YouTube (Standard)", "16:9", 60.0, 180.0, 600.0),
            Self::Facebook => ("Facebook Video", "1:1", 30.0, 90.0, 240.0),
        };
        PlatformPreset {
            name,
            aspect_ratio,
            min_duration,
            optimal_duration,
            max_duration,
        }
    }

    /// Whether a video of `total_duration` seconds falls inside this platform's window.
    pub fn check(&self, total_duration: f64) -> DurationFit {
        let preset = self.preset();
        if total_duration < preset.min_duration {
            DurationFit::TooShort
        } else if total_duration > preset.max_duration {
            DurationFit::TooLong
        } else {
            DurationFit::Fits
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::msg(format!("unknown platform: {s}")))
    }
}
