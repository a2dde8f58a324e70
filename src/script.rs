use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::{DurationFit, Platform};
use crate::style::NarrationStyle;
use crate::template::{ContentType, ScriptFormat};
use crate::visual::VisualCue;

/// One timed unit of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub start_time: f64,
    pub end_time: f64,
    pub duration: f64,
    pub narration: String,
    pub visual: VisualCue,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptMetadata {
    pub post_id: String,
    pub title: String,
    pub subreddit: String,
    pub author: String,
    #[serde(default)]
    pub post_url: String,
    pub format: ScriptFormat,
    pub template: String,
    pub generated_at: DateTime<Utc>,
    pub post_score: i64,
    pub num_comments: u64,
}

/// A finished narration script: what audio synthesis and video composition consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub metadata: ScriptMetadata,
    pub segments: Vec<Segment>,
    /// End time of the last segment, in seconds.
    pub total_duration: f64,
    pub word_count: usize,
    pub narration_style: NarrationStyle,
}

impl Script {
    /// Whether the script's total duration falls inside a platform's window.
    pub fn fits(&self, platform: Platform) -> DurationFit {
        platform.check(self.total_duration)
    }

    /// Human-readable overview with one row per segment.
    pub fn summary(&self) -> String {
        let rule = "=".repeat(60);
        let mut out = String::new();

        // Writing into a String can't fail.
        let _ = writeln!(out, "Video Script Summary");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Title: {}", self.metadata.title);
        let _ = writeln!(out, "Subreddit: r/{}", self.metadata.subreddit);
        let _ = writeln!(out, "Format: {}", self.metadata.format);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Duration: {:.1} seconds ({:.1} minutes)",
            self.total_duration,
            self.total_duration / 60.0
        );
        let _ = writeln!(out, "Word Count: {} words", self.word_count);
        let _ = writeln!(out, "Segments: {}", self.segments.len());
        let _ = writeln!(out);
        let _ = writeln!(out, "Segment Breakdown:");
        for seg in &self.segments {
            let _ = writeln!(
                out,
                "  {:15} | {:6.1}s - {:6.1}s | {:5.1}s",
                seg.name, seg.start_time, seg.end_time, seg.duration
            );
        }

        out
    }
}
