//! `reelscript` turns a fetched social-media post into a timed narration script for a short
//! video.
//!
//! This crate provides:
//! - Script templates per output length class (short, medium, long, story, compilation)
//! - Narration text per segment, with pluggable phrase pools and a seedable random source
//! - Duration estimates and a contiguous segment timeline
//! - Caption entries split from the narration
//! - Exporters (JSON, plain text, SRT, WebVTT)
//!
//! Fetching posts, synthesizing speech, and rendering video are left to other tools; this crate
//! produces the script they consume.

// High-level API (most consumers should start here).
pub mod generator;
pub mod opts;

// Input and output data.
pub mod post;
pub mod script;

// Script building blocks.
pub mod duration;
pub mod narration;
pub mod style;
pub mod template;
pub mod visual;

// Captions.
pub mod subtitles;

// Output selection and encoder interfaces.
pub mod export;
pub mod output_type;
pub mod subtitle_encoder;

// Encoders that serialize scripts and captions into various formats.
pub mod json_encoder;
pub mod srt_encoder;
pub mod text_encoder;
pub mod vtt_encoder;

// Helpers for downstream tools.
pub mod naming;
pub mod platform;

// Logging configuration and control.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

pub use error::{Error, Result};
pub use generator::ScriptGenerator;
pub use opts::{EmptyRequiredPolicy, Opts, PhrasePools};
pub use output_type::ExportFormat;
pub use post::{Award, Comment, Post};
pub use script::{Script, ScriptMetadata, Segment};
pub use style::NarrationStyle;
pub use subtitles::SubtitleEntry;
pub use template::{ContentType, ScriptFormat, SegmentSpec, Template, TemplateCatalog};

#[cfg(feature = "logging")]
pub use logging::init as init_logging;
