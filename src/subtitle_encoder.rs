use crate::Result;
use crate::subtitles::SubtitleEntry;

/// Streams caption entries into a subtitle format.
///
/// Callers write entries in timeline order and call `close` once at the end; `close` is
/// idempotent and writing after it is an error.
pub trait SubtitleEncoder {
    fn write_entry(&mut self, entry: &SubtitleEntry) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

/// Split seconds into `(hours, minutes, seconds, millis)`, rounding to the nearest millisecond.
///
/// Negative inputs clamp to zero.
pub(crate) fn split_timestamp(seconds: f64) -> (u64, u64, u64, u64) {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;

    let s = total_s % 60;
    let total_m = total_s / 60;

    let m = total_m % 60;
    let h = total_m / 60;

    (h, m, s, ms)
}
