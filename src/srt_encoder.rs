use std::io::Write;

use crate::Result;
use crate::subtitle_encoder::{SubtitleEncoder, split_timestamp};
use crate::subtitles::SubtitleEntry;

/// A `SubtitleEncoder` that writes caption entries as SubRip (`.srt`).
///
/// Each block is a 1-based sequence number, a `start --> end` line, the text, and a blank line.
pub struct SrtEncoder<W: Write> {
    w: W,

    /// Sequence number of the next block.
    next_index: usize,

    closed: bool,
}

impl<W: Write> SrtEncoder<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            next_index: 1,
            closed: false,
        }
    }
}

impl<W: Write> SubtitleEncoder for SrtEncoder<W> {
    fn write_entry(&mut self, entry: &SubtitleEntry) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write subtitle: encoder is already closed",
            ));
        }

        writeln!(&mut self.w, "{}", self.next_index)?;
        writeln!(
            &mut self.w,
            "{} --> {}",
            format_timestamp_srt(entry.start),
            format_timestamp_srt(entry.end)
        )?;
        writeln!(&mut self.w, "{}", entry.text)?;
        writeln!(&mut self.w)?;

        self.next_index += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;
        Ok(())
    }
}

/// Format seconds into an SRT timestamp (`HH:MM:SS,mmm`).
pub fn format_timestamp_srt(seconds: f64) -> String {
    let (h, m, s, ms) = split_timestamp(seconds);
    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}
