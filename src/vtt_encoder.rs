use std::io::Write;

use crate::Result;
use crate::subtitle_encoder::{SubtitleEncoder, split_timestamp};
use crate::subtitles::SubtitleEntry;

/// A `SubtitleEncoder` that writes caption entries in WebVTT format.
///
/// Design:
/// - We stream output directly to a `Write` implementation.
/// - The `WEBVTT` header is written before the first cue, or on `close` when there were
///   no cues, so every closed encoder leaves a valid (possibly empty) WebVTT file.
pub struct VttEncoder<W: Write> {
    /// The underlying writer we stream VTT into.
    w: W,

    /// Whether we've written the `WEBVTT` header.
    started: bool,

    /// Whether the encoder has been closed.
    closed: bool,
}

impl<W: Write> VttEncoder<W> {
    /// Create a new VTT encoder that writes to the provided writer.
    pub fn new(w: W) -> Self {
        Self {
            w,
            started: false,
            closed: false,
        }
    }

    /// Write the WebVTT header if we haven't written it yet.
    fn start_if_needed(&mut self) -> Result<()> {
        if !self.started {
            // WebVTT files begin with a mandatory header line followed by a blank line.
            self.w.write_all(b"WEBVTT\n\n")?;
            self.started = true;
        }
        Ok(())
    }
}

impl<W: Write> SubtitleEncoder for VttEncoder<W> {
    /// Write a single cue in WebVTT format.
    fn write_entry(&mut self, entry: &SubtitleEntry) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write subtitle: encoder is already closed",
            ));
        }

        self.start_if_needed()?;

        let start = format_timestamp_vtt(entry.start);
        let end = format_timestamp_vtt(entry.end);

        writeln!(&mut self.w, "{start} --> {end}")?;
        writeln!(&mut self.w, "{}", entry.text)?;

        // Blank line separates cues.
        writeln!(&mut self.w)?;

        Ok(())
    }

    /// Write the header if nothing was written yet, then flush. This is idempotent.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.start_if_needed()?;
        self.w.flush()?;
        self.closed = true;

        Ok(())
    }
}

/// Format seconds into a WebVTT timestamp (`HH:MM:SS.mmm`).
pub fn format_timestamp_vtt(seconds: f64) -> String {
    let (h, m, s, ms) = split_timestamp(seconds);
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
