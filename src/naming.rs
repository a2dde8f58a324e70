use chrono::{DateTime, Utc};

use crate::script::ScriptMetadata;

/// File stem for a script's exports: `{subreddit}_{post_id}_{format}[_{timestamp}]`.
///
/// The stem is lowercased and stripped of everything except ASCII alphanumerics, `_` and `-`.
/// The timestamp, when requested, is the script's generation time as `YYYYmmdd_HHMMSS`.
pub fn output_stem(metadata: &ScriptMetadata, use_timestamp: bool) -> String {
    let mut parts = vec![
        sanitize(&metadata.subreddit),
        sanitize(&metadata.post_id),
        sanitize(metadata.format.as_str()),
    ];
    if use_timestamp {
        parts.push(timestamp(&metadata.generated_at));
    }

    parts.retain(|p| !p.is_empty());
    parts.join("_")
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

fn sanitize(part: &str) -> String {
    part.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
