use std::io::Write;

use crate::Result;
use crate::script::Script;

/// Write the full script as pretty-printed JSON (2-space indent, UTF-8, non-ASCII kept as-is).
///
/// Example output:
/// ```json
/// {
///   "metadata": { "post_id": "abc", ... },
///   "segments": [ { "name": "intro", "start_time": 0.0, ... } ],
///   "total_duration": 67.5,
///   ...
/// }
/// ```
pub fn write_json<W: Write>(script: &Script, mut w: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, script)?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

/// Parse a script previously written by [`write_json`].
pub fn read_json(json: &str) -> Result<Script> {
    Ok(serde_json::from_str(json)?)
}
