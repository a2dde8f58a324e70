//! High-level API for generating narration scripts.
//!
//! We expose a single entry point (`ScriptGenerator`) that wraps the lower-level template,
//! narration, duration, and subtitle logic.
//!
//! The intent is:
//! - We build a generator once from `Opts` (and optionally a custom template catalog).
//! - We reuse it to generate scripts for many posts.
//! - Callers export each script to whichever formats they need.
//!
//! Generation is a linear fold over a template's segment specs; nothing here blocks or spawns.

use std::path::Path;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::Result;
use crate::duration::{count_words, estimate_duration};
use crate::export::export_script;
use crate::narration::NarrationBuilder;
use crate::opts::{EmptyRequiredPolicy, Opts};
use crate::output_type::ExportFormat;
use crate::post::Post;
use crate::script::{Script, ScriptMetadata, Segment};
use crate::style::NarrationStyle;
use crate::subtitles::{SubtitleEntry, build_subtitles};
use crate::template::{ScriptFormat, Template, TemplateCatalog};
use crate::visual::VisualCue;

/// The main script-generation entry point.
///
/// `ScriptGenerator` owns everything a generation call reads:
/// - the `Opts` (speaking pace, display toggles, phrase pools)
/// - the template catalog
/// - the random source used for phrase selection
///
/// `generate` takes `&mut self` only to advance the random source; no other state changes
/// between calls.
pub struct ScriptGenerator<R: Rng = StdRng> {
    opts: Opts,
    catalog: TemplateCatalog,
    rng: R,
}

impl ScriptGenerator<StdRng> {
    /// Create a generator with the built-in templates and an OS-seeded random source.
    pub fn new(opts: Opts) -> Self {
        Self::with_rng(opts, StdRng::from_os_rng())
    }

    /// Create a generator whose phrase selection is fully determined by `seed`.
    pub fn seeded(opts: Opts, seed: u64) -> Self {
        Self::with_rng(opts, StdRng::seed_from_u64(seed))
    }
}

impl Default for ScriptGenerator<StdRng> {
    fn default() -> Self {
        Self::new(Opts::default())
    }
}

impl<R: Rng> ScriptGenerator<R> {
    /// Create a generator using a caller-supplied random source.
    pub fn with_rng(opts: Opts, rng: R) -> Self {
        Self {
            opts,
            catalog: TemplateCatalog::builtin(),
            rng,
        }
    }

    /// Replace the template catalog.
    pub fn with_catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Generate a script using the template named after `format`.
    pub fn generate(
        &mut self,
        post: &Post,
        format: ScriptFormat,
        style: NarrationStyle,
    ) -> Result<Script> {
        self.generate_with_template(post, format, format.as_str(), style)
    }

    /// Generate a script from an explicit template.
    ///
    /// `format` still drives the body and comment budgets; the template only decides which
    /// segments appear and in what order.
    pub fn generate_with_template(
        &mut self,
        post: &Post,
        format: ScriptFormat,
        template_name: &str,
        style: NarrationStyle,
    ) -> Result<Script> {
        // Fail fast: no segment work happens for an unusable post.
        post.validate()?;
        let template = self.catalog.get(template_name)?;

        let segments = assemble(&self.opts, &mut self.rng, template, post, format, style);
        let total_duration = segments.last().map_or(0.0, |s| s.end_time);
        let word_count = segments.iter().map(|s| count_words(&s.narration)).sum();

        let script = Script {
            metadata: ScriptMetadata {
                post_id: post.id_or_unknown().to_owned(),
                title: post.title.clone(),
                subreddit: post.subreddit.clone(),
                author: post.author.clone(),
                post_url: post.url.clone(),
                format,
                template: template.name.clone(),
                generated_at: Utc::now(),
                post_score: post.score,
                num_comments: post.num_comments,
            },
            segments,
            total_duration,
            word_count,
            narration_style: style,
        };

        info!(
            post_id = %script.metadata.post_id,
            template = %script.metadata.template,
            segments = script.segments.len(),
            total_duration = script.total_duration,
            word_count = script.word_count,
            "generated script"
        );

        Ok(script)
    }

    /// Caption entries for a script, wrapped at the configured line width.
    pub fn subtitles(&self, script: &Script) -> Vec<SubtitleEntry> {
        build_subtitles(script, self.opts.max_chars_per_line)
    }

    /// Export a script to `path` in the given format.
    pub fn export(
        &self,
        script: &Script,
        path: impl AsRef<Path>,
        format: ExportFormat,
    ) -> Result<()> {
        export_script(script, path, format, self.opts.max_chars_per_line)
    }

    /// Access the configured options.
    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Access the template catalog.
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Access the catalog mutably, e.g. to register a custom template.
    pub fn catalog_mut(&mut self) -> &mut TemplateCatalog {
        &mut self.catalog
    }
}

/// Walk the template in order, accumulating a contiguous timeline.
fn assemble<R: Rng + ?Sized>(
    opts: &Opts,
    rng: &mut R,
    template: &Template,
    post: &Post,
    format: ScriptFormat,
    style: NarrationStyle,
) -> Vec<Segment> {
    let narrator = NarrationBuilder::new(opts);
    let mut segments = Vec::with_capacity(template.segments.len());
    let mut cumulative_time = 0.0_f64;

    for spec in &template.segments {
        let mut narration = narrator.build(rng, post, spec.content_type, format, style);

        if narration.is_empty() {
            let keep = spec.required && opts.empty_required == EmptyRequiredPolicy::Fallback;
            if !keep {
                debug!(segment = %spec.name, required = spec.required, "dropping empty segment");
                continue;
            }
            narration = narrator.fallback(post, spec.content_type);
            debug!(segment = %spec.name, "using fallback narration for required segment");
        }

        let duration = estimate_duration(
            &narration,
            spec.duration,
            opts.words_per_minute,
            opts.pause_duration,
        );
        let start_time = cumulative_time;
        let end_time = start_time + duration;

        segments.push(Segment {
            name: spec.name.clone(),
            content_type: spec.content_type,
            start_time,
            end_time,
            duration,
            narration,
            visual: VisualCue::for_kind(&spec.visual, post),
            required: spec.required,
        });

        cumulative_time = end_time;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::post::Comment;
    use crate::template::{ContentType, SegmentSpec};

    fn post() -> Post {
        Post {
            id: Some("p1".to_owned()),
            title: "TIL something".to_owned(),
            author: "op".to_owned(),
            subreddit: "todayilearned".to_owned(),
            score: 100,
            body: "A short body.".to_owned(),
            comments: vec![Comment {
                author: "c".to_owned(),
                body: "Nice.".to_owned(),
                score: 500,
                ..Comment::default()
            }],
            ..Post::default()
        }
    }

    #[test]
    fn invalid_post_fails_before_template_lookup() {
        let mut generator = ScriptGenerator::seeded(Opts::default(), 1);
        let mut p = post();
        p.title.clear();
        let err = generator
            .generate_with_template(&p, ScriptFormat::Medium, "missing", NarrationStyle::Casual)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPostData(_)));
    }

    #[test]
    fn unknown_template_is_reported() {
        let mut generator = ScriptGenerator::seeded(Opts::default(), 1);
        let err = generator
            .generate_with_template(&post(), ScriptFormat::Medium, "missing", NarrationStyle::Casual)
            .unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn optional_empty_segments_never_advance_the_timeline() -> anyhow::Result<()> {
        let mut catalog = TemplateCatalog::empty();
        catalog.insert(Template {
            name: "gappy".to_owned(),
            format: ScriptFormat::Medium,
            segments: vec![
                SegmentSpec::new("title", 4.0, ContentType::Title, true, "title_screen"),
                SegmentSpec::new("more", 30.0, ContentType::Continuation, false, "scrolling_text"),
                SegmentSpec::new("outro", 5.0, ContentType::Outro, true, "end_screen"),
            ],
        });
        let mut generator = ScriptGenerator::seeded(Opts::default(), 9).with_catalog(catalog);

        let script =
            generator.generate_with_template(&post(), ScriptFormat::Medium, "gappy", NarrationStyle::Casual)?;
        let names: Vec<&str> = script.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["title", "outro"]);
        assert_eq!(script.segments[1].start_time, script.segments[0].end_time);
        Ok(())
    }

    #[test]
    fn drop_policy_removes_required_empty_segments() -> anyhow::Result<()> {
        let opts = Opts {
            empty_required: EmptyRequiredPolicy::Drop,
            ..Opts::default()
        };
        let mut generator = ScriptGenerator::seeded(opts, 2);
        let mut p = post();
        p.comments.clear();

        let script = generator.generate(&p, ScriptFormat::Medium, NarrationStyle::Casual)?;
        assert!(script.segments.iter().all(|s| s.content_type != ContentType::Comments));
        Ok(())
    }

    #[test]
    fn fallback_policy_keeps_required_segments() -> anyhow::Result<()> {
        let mut generator = ScriptGenerator::seeded(Opts::default(), 2);
        let mut p = post();
        p.comments.clear();

        let script = generator.generate(&p, ScriptFormat::Medium, NarrationStyle::Casual)?;
        let comments = script
            .segments
            .iter()
            .find(|s| s.content_type == ContentType::Comments)
            .expect("comments segment kept");
        assert!(!comments.narration.is_empty());
        assert!(comments.duration >= 15.0);
        Ok(())
    }

    #[test]
    fn metadata_reflects_post_and_template() -> anyhow::Result<()> {
        let mut generator = ScriptGenerator::seeded(Opts::default(), 3);
        let script = generator.generate(&post(), ScriptFormat::Short, NarrationStyle::Formal)?;
        assert_eq!(script.metadata.post_id, "p1");
        assert_eq!(script.metadata.template, "short");
        assert_eq!(script.metadata.format, ScriptFormat::Short);
        assert_eq!(script.narration_style, NarrationStyle::Formal);
        assert_eq!(script.metadata.post_score, 100);
        Ok(())
    }
}
