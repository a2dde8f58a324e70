//! Script templates: the ordered blueprint of segments for each output length class.
//!
//! A template never changes after construction. The [`TemplateCatalog`] is a plain value
//! owned by the generator, so callers can register their own templates next to the
//! built-in ones without any process-wide registry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// What a segment's narration is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Intro,
    Title,
    Context,
    Body,
    /// The part of the body that didn't fit the first body segment.
    Continuation,
    Comments,
    Engagement,
    Outro,
    Teaser,
    /// Title plus a short body excerpt, used by compilation videos.
    Summary,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Title => "title",
            Self::Context => "context",
            Self::Body => "body",
            Self::Continuation => "continuation",
            Self::Comments => "comments",
            Self::Engagement => "engagement",
            Self::Outro => "outro",
            Self::Teaser => "teaser",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output length class. Each class has a built-in template of the same name and drives the
/// body/comment budgets used by the narration builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ScriptFormat {
    Short,
    #[default]
    Medium,
    Long,
    Story,
    Compilation,
}

impl ScriptFormat {
    pub const ALL: [ScriptFormat; 5] = [
        Self::Short,
        Self::Medium,
        Self::Long,
        Self::Story,
        Self::Compilation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Story => "story",
            Self::Compilation => "compilation",
        }
    }

    /// Maximum number of body words read aloud in one body segment.
    pub fn body_word_budget(&self) -> usize {
        match self {
            Self::Short => 50,
            Self::Medium => 150,
            Self::Long | Self::Story | Self::Compilation => 500,
        }
    }

    /// How many comments to read and the minimum score a comment needs to qualify.
    pub fn comment_selection(&self) -> CommentSelection {
        match self {
            Self::Short => CommentSelection {
                max_comments: 1,
                min_score: 100,
            },
            Self::Medium => CommentSelection {
                max_comments: 3,
                min_score: 50,
            },
            Self::Long => CommentSelection {
                max_comments: 10,
                min_score: 10,
            },
            Self::Story | Self::Compilation => CommentSelection {
                max_comments: 3,
                min_score: 10,
            },
        }
    }

    /// Maximum characters of a single comment body before it is cut with an ellipsis.
    pub fn max_comment_chars(&self) -> usize {
        match self {
            Self::Long => 200,
            _ => 100,
        }
    }
}

impl fmt::Display for ScriptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidFormat(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSelection {
    pub max_comments: usize,
    pub min_score: i64,
}

/// One entry of a template: what to narrate, for how long at minimum, and how to show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub name: String,
    /// Nominal on-screen time in seconds. Narration can only lengthen a segment.
    pub duration: f64,
    pub content_type: ContentType,
    pub required: bool,
    /// Visual-cue kind handed to the video composer (e.g. `title_screen`).
    pub visual: String,
}

impl SegmentSpec {
    pub fn new(
        name: &str,
        duration: f64,
        content_type: ContentType,
        required: bool,
        visual: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            duration,
            content_type,
            required,
            visual: visual.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub format: ScriptFormat,
    pub segments: Vec<SegmentSpec>,
}

/// Summary numbers about a template, used for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub format: ScriptFormat,
    pub total_segments: usize,
    pub required_segments: usize,
    pub estimated_duration: f64,
    pub segment_names: Vec<String>,
}

impl Template {
    pub fn info(&self) -> TemplateInfo {
        TemplateInfo {
            name: self.name.clone(),
            format: self.format,
            total_segments: self.segments.len(),
            required_segments: self.segments.iter().filter(|s| s.required).count(),
            estimated_duration: self.segments.iter().map(|s| s.duration).sum(),
            segment_names: self.segments.iter().map(|s| s.name.clone()).collect(),
        }
    }

    fn short() -> Self {
        use ContentType::*;
        Self {
            name: "short".to_owned(),
            format: ScriptFormat::Short,
            segments: vec![
                SegmentSpec::new("hook", 3.0, Title, true, "title_screen"),
                SegmentSpec::new("body", 15.0, Body, true, "text_overlay"),
                SegmentSpec::new("top_comment", 8.0, Comments, false, "comment_highlight"),
                SegmentSpec::new("outro", 3.0, Outro, true, "cta_screen"),
            ],
        }
    }

    fn medium() -> Self {
        use ContentType::*;
        Self {
            name: "medium".to_owned(),
            format: ScriptFormat::Medium,
            segments: vec![
                SegmentSpec::new("intro", 5.0, Intro, true, "animated_intro"),
                SegmentSpec::new("title", 6.0, Title, true, "title_screen"),
                SegmentSpec::new("context", 3.0, Context, false, "stats_display"),
                SegmentSpec::new("body", 30.0, Body, true, "text_overlay"),
                SegmentSpec::new("comments", 15.0, Comments, true, "comment_section"),
                SegmentSpec::new("engagement", 3.0, Engagement, false, "engagement_prompt"),
                SegmentSpec::new("outro", 5.0, Outro, true, "outro_screen"),
            ],
        }
    }

    fn long() -> Self {
        use ContentType::*;
        Self {
            name: "long".to_owned(),
            format: ScriptFormat::Long,
            segments: vec![
                SegmentSpec::new("cold_open", 8.0, Teaser, false, "dramatic_opener"),
                SegmentSpec::new("intro", 8.0, Intro, true, "branded_intro"),
                SegmentSpec::new("title", 8.0, Title, true, "title_animation"),
                SegmentSpec::new("context", 10.0, Context, true, "context_graphics"),
                SegmentSpec::new("body_part_1", 45.0, Body, true, "scrolling_text"),
                SegmentSpec::new("mid_engagement", 8.0, Engagement, true, "like_button_animation"),
                SegmentSpec::new("body_part_2", 45.0, Continuation, false, "scrolling_text"),
                SegmentSpec::new("comments", 40.0, Comments, true, "comment_thread"),
                SegmentSpec::new("engagement", 8.0, Engagement, true, "poll_or_question"),
                SegmentSpec::new("outro", 10.0, Outro, true, "end_screen"),
            ],
        }
    }

    fn story() -> Self {
        use ContentType::*;
        Self {
            name: "story".to_owned(),
            format: ScriptFormat::Story,
            segments: vec![
                SegmentSpec::new("hook", 5.0, Title, true, "dramatic_text"),
                SegmentSpec::new("setup", 15.0, Context, true, "background_visuals"),
                SegmentSpec::new("story", 60.0, Body, true, "story_visuals"),
                SegmentSpec::new("reactions", 30.0, Comments, true, "comment_reactions"),
                SegmentSpec::new("conclusion", 10.0, Outro, true, "conclusion_screen"),
            ],
        }
    }

    fn compilation() -> Self {
        use ContentType::*;
        Self {
            name: "compilation".to_owned(),
            format: ScriptFormat::Compilation,
            segments: vec![
                SegmentSpec::new("intro", 10.0, Intro, true, "montage"),
                SegmentSpec::new("post_segment", 30.0, Summary, true, "post_display"),
                SegmentSpec::new("outro", 10.0, Outro, true, "end_montage"),
            ],
        }
    }
}

/// Named templates available to a generator.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, Template>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateCatalog {
    /// A catalog holding only the built-in templates (short, medium, long, story, compilation).
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for template in [
            Template::short(),
            Template::medium(),
            Template::long(),
            Template::story(),
            Template::compilation(),
        ] {
            catalog.insert(template);
        }
        catalog
    }

    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Register a template, replacing any existing one with the same name.
    pub fn insert(&mut self, template: Template) -> Option<Template> {
        self.templates.insert(template.name.clone(), template)
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates
            .get(name)
            .ok_or_else(|| Error::TemplateNotFound {
                name: name.to_owned(),
                available: self.names().join(", "),
            })
    }

    /// Template names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn info(&self, name: &str) -> Result<TemplateInfo> {
        Ok(self.get(name)?.info())
    }
}
