//! Caption entries derived from a finished script.
//!
//! Each segment's narration is split into sentences and the segment's duration is shared
//! equally between them. Long sentences are wrapped onto several lines without breaking words.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::script::Script;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    // A constant pattern; failing to compile it is a programming error.
    Regex::new(r"[.!?]+").expect("sentence pattern is valid")
});

/// One caption: a time range and its (possibly multi-line) text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleEntry {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Build caption entries for every segment with narration.
///
/// The last entry of each segment ends exactly at the segment's `end_time`, so the captions
/// cover the script up to its total duration.
pub fn build_subtitles(script: &Script, max_chars_per_line: usize) -> Vec<SubtitleEntry> {
    let mut entries = Vec::new();

    for segment in &script.segments {
        let sentences = split_sentences(&segment.narration);
        if sentences.is_empty() {
            continue;
        }

        let count = sentences.len();
        let per_sentence = segment.duration / count as f64;
        for (i, sentence) in sentences.into_iter().enumerate() {
            let start = segment.start_time + per_sentence * i as f64;
            let end = if i + 1 == count {
                segment.end_time
            } else {
                segment.start_time + per_sentence * (i + 1) as f64
            };

            entries.push(SubtitleEntry {
                start,
                end,
                text: wrap_lines(sentence, max_chars_per_line).join("\n"),
            });
        }
    }

    entries
}

/// Split on runs of `.`, `!` and `?`, trimming and discarding empty fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Greedily wrap `text` into lines of at most `max_chars` characters.
///
/// Words are never broken; a single word longer than the limit gets a line of its own.
pub fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation_runs() {
        assert_eq!(
            split_sentences("Hello there. Wait... what?! Okay"),
            vec!["Hello there", "Wait", "what", "Okay"]
        );
        assert!(split_sentences("?!...").is_empty());
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_lines("Hello there", 42), vec!["Hello there"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_lines("the quick brown fox jumps over the lazy dog", 15);
        assert_eq!(lines, vec!["the quick brown", "fox jumps over", "the lazy dog"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 15));
    }

    #[test]
    fn oversized_words_get_their_own_line() {
        let lines = wrap_lines("a supercalifragilistic b", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }
}
