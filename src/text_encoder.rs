use std::io::Write;

use crate::Result;
use crate::script::Script;

/// Write a human-readable dump: metadata first, then one block per segment.
pub fn write_text<W: Write>(script: &Script, mut w: W) -> Result<()> {
    let rule = "=".repeat(60);
    let thin = "-".repeat(60);
    let meta = &script.metadata;

    writeln!(w, "{rule}")?;
    writeln!(w, "VIDEO SCRIPT")?;
    writeln!(w, "{rule}")?;
    writeln!(w)?;

    writeln!(w, "METADATA:")?;
    writeln!(w, "  post_id: {}", meta.post_id)?;
    writeln!(w, "  title: {}", meta.title)?;
    writeln!(w, "  subreddit: {}", meta.subreddit)?;
    writeln!(w, "  author: {}", meta.author)?;
    writeln!(w, "  post_url: {}", meta.post_url)?;
    writeln!(w, "  format: {}", meta.format)?;
    writeln!(w, "  template: {}", meta.template)?;
    writeln!(w, "  generated_at: {}", meta.generated_at.to_rfc3339())?;
    writeln!(w, "  post_score: {}", meta.post_score)?;
    writeln!(w, "  num_comments: {}", meta.num_comments)?;
    writeln!(w, "  narration_style: {}", script.narration_style)?;
    writeln!(w)?;

    writeln!(w, "Total Duration: {:.1} seconds", script.total_duration)?;
    writeln!(w, "Word Count: {}", script.word_count)?;
    writeln!(w)?;
    writeln!(w, "{rule}")?;
    writeln!(w)?;

    for (i, seg) in script.segments.iter().enumerate() {
        writeln!(w, "SEGMENT {}: {}", i + 1, seg.name.to_uppercase())?;
        writeln!(w, "{thin}")?;
        writeln!(
            w,
            "Time: {:.1}s - {:.1}s ({:.1}s)",
            seg.start_time, seg.end_time, seg.duration
        )?;
        writeln!(w, "Type: {}", seg.content_type)?;
        writeln!(w)?;
        writeln!(w, "Narration:")?;
        writeln!(w, "{}", seg.narration)?;
        writeln!(w)?;
        writeln!(w, "Visual: {}", seg.visual.kind)?;
        writeln!(w)?;
        writeln!(w, "{rule}")?;
        writeln!(w)?;
    }

    w.flush()?;
    Ok(())
}
