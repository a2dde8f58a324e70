use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use reelscript::naming::output_stem;
use reelscript::platform::{DurationFit, Platform};
use reelscript::{ExportFormat, NarrationStyle, Opts, Post, ScriptFormat, ScriptGenerator};

fn main() {
    reelscript::init_logging();

    if let Err(err) = run() {
        error!(error = ?err, "reelscript-cli failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let params = Params::parse();
    let opts = params.opts();

    let mut generator = match params.seed {
        Some(seed) => ScriptGenerator::seeded(opts, seed),
        None => ScriptGenerator::new(opts),
    };

    if params.list_templates {
        for name in generator.catalog().names() {
            let info = generator.catalog().info(name)?;
            println!(
                "{:12} {:2} segments ({} required), ~{:.0}s: {}",
                info.name,
                info.total_segments,
                info.required_segments,
                info.estimated_duration,
                info.segment_names.join(", ")
            );
        }
        return Ok(());
    }

    let post_path = params
        .post_path
        .as_ref()
        .context("--post is required unless --list-templates is given")?;
    let raw = fs::read_to_string(post_path)
        .with_context(|| format!("failed to read post from '{}'", post_path.display()))?;
    let post = Post::from_json(&raw)
        .with_context(|| format!("failed to parse post from '{}'", post_path.display()))?;

    let template = params
        .template
        .clone()
        .unwrap_or_else(|| params.format.as_str().to_owned());
    let script = generator.generate_with_template(&post, params.format, &template, params.style)?;

    print!("{}", script.summary());

    if let Some(platform) = params.platform {
        let preset = platform.preset();
        match script.fits(platform) {
            DurationFit::Fits => println!(
                "Fits {} ({:.0}-{:.0}s)",
                preset.name, preset.min_duration, preset.max_duration
            ),
            DurationFit::TooShort => println!(
                "Too short for {}: {:.1}s < {:.0}s",
                preset.name, script.total_duration, preset.min_duration
            ),
            DurationFit::TooLong => println!(
                "Too long for {}: {:.1}s > {:.0}s",
                preset.name, script.total_duration, preset.max_duration
            ),
        }
    }

    if params.exports.is_empty() {
        return Ok(());
    }

    fs::create_dir_all(&params.output_dir).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            params.output_dir.display()
        )
    })?;

    let stem = output_stem(&script.metadata, params.timestamped_names);
    for format in &params.exports {
        let path = params
            .output_dir
            .join(format!("{stem}.{}", format.extension()));
        generator
            .export(&script, &path, *format)
            .with_context(|| format!("failed to export {format} to '{}'", path.display()))?;
        println!("Exported {format}: {}", path.display());
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "reelscript")]
#[command(about = "Generate a timed narration script from a saved post")]
struct Params {
    /// Path to a post record saved as JSON.
    #[arg(short = 'p', long = "post")]
    post_path: Option<PathBuf>,

    #[arg(short = 'f', long = "format", value_enum, default_value_t = ScriptFormat::Medium)]
    format: ScriptFormat,

    /// Template name; defaults to the format's built-in template.
    #[arg(short = 't', long = "template")]
    template: Option<String>,

    #[arg(short = 's', long = "style", value_enum, default_value_t = NarrationStyle::Casual)]
    style: NarrationStyle,

    /// Seed for phrase selection; omit for varied output.
    #[arg(long = "seed")]
    seed: Option<u64>,

    #[arg(long = "words-per-minute", default_value_t = 150.0)]
    words_per_minute: f64,

    #[arg(long = "hide-usernames", default_value_t = false)]
    hide_usernames: bool,

    #[arg(long = "hide-scores", default_value_t = false)]
    hide_scores: bool,

    /// Export formats to write (repeatable).
    #[arg(short = 'e', long = "export", value_enum)]
    exports: Vec<ExportFormat>,

    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Append the generation time to exported file names.
    #[arg(long = "timestamped-names", default_value_t = false)]
    timestamped_names: bool,

    /// Check the script's duration against a platform's window.
    #[arg(long = "platform", value_enum)]
    platform: Option<Platform>,

    #[arg(long = "list-templates", default_value_t = false)]
    list_templates: bool,
}

impl Params {
    fn opts(&self) -> Opts {
        Opts {
            words_per_minute: self.words_per_minute,
            show_usernames: !self.hide_usernames,
            show_scores: !self.hide_scores,
            ..Opts::default()
        }
    }
}
