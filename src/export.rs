//! Writing scripts to files or arbitrary writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::Result;
use crate::json_encoder::write_json;
use crate::output_type::ExportFormat;
use crate::script::Script;
use crate::srt_encoder::SrtEncoder;
use crate::subtitle_encoder::SubtitleEncoder;
use crate::subtitles::build_subtitles;
use crate::text_encoder::write_text;
use crate::vtt_encoder::VttEncoder;

/// Export a script to `path`, creating or truncating the file.
///
/// I/O failures surface unchanged as [`crate::Error::Io`]. A failed export leaves any
/// earlier exports of the same script untouched.
pub fn export_script(
    script: &Script,
    path: impl AsRef<Path>,
    format: ExportFormat,
    max_chars_per_line: usize,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_script(script, file, format, max_chars_per_line)?;
    info!(path = %path.display(), format = %format, "exported script");
    Ok(())
}

/// Write a script in `format` to any writer.
pub fn write_script<W: Write>(
    script: &Script,
    w: W,
    format: ExportFormat,
    max_chars_per_line: usize,
) -> Result<()> {
    // Buffer output for efficiency (especially important for files and stdout).
    let writer = BufWriter::new(w);

    // We keep this explicit (no trait objects) to avoid lifetime surprises.
    match format {
        ExportFormat::Json => write_json(script, writer),
        ExportFormat::Txt => write_text(script, writer),
        ExportFormat::Srt => {
            let mut encoder = SrtEncoder::new(writer);
            let run_res = write_subtitles(script, max_chars_per_line, &mut encoder);
            merge_run_and_close(run_res, encoder.close())
        }
        ExportFormat::Vtt => {
            let mut encoder = VttEncoder::new(writer);
            let run_res = write_subtitles(script, max_chars_per_line, &mut encoder);
            merge_run_and_close(run_res, encoder.close())
        }
    }
}

fn write_subtitles<E: SubtitleEncoder>(
    script: &Script,
    max_chars_per_line: usize,
    encoder: &mut E,
) -> Result<()> {
    for entry in build_subtitles(script, max_chars_per_line) {
        encoder.write_entry(&entry)?;
    }
    Ok(())
}

/// Prefer the run error; a close error only surfaces when the run itself succeeded.
fn merge_run_and_close(run_res: Result<()>, close_res: Result<()>) -> Result<()> {
    match (run_res, close_res) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(close_err)) => Err(close_err),
        (Err(err), _) => Err(err),
    }
}
