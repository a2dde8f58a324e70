//! Spoken-duration estimates for narration text.

/// Count whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate how long a segment stays on screen.
///
/// A segment is never shorter than the time needed to speak its narration at
/// `words_per_minute` plus `pause` seconds, and never shorter than `nominal` either.
/// Empty narration keeps the nominal duration and gets no pause.
pub fn estimate_duration(text: &str, nominal: f64, words_per_minute: f64, pause: f64) -> f64 {
    let words = count_words(text);
    if words == 0 || words_per_minute <= 0.0 {
        return nominal;
    }

    let spoken = words as f64 / words_per_minute * 60.0 + pause;
    nominal.max(spoken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_across_whitespace_runs() {
        assert_eq!(count_words("  one\ttwo\n three  "), 3);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn empty_text_keeps_nominal_duration() {
        assert_eq!(estimate_duration("", 5.0, 150.0, 0.5), 5.0);
        assert_eq!(estimate_duration("   ", 5.0, 150.0, 0.5), 5.0);
    }

    #[test]
    fn short_narration_gets_nominal_screen_time() {
        // 3 words at 150 wpm = 1.2s + 0.5s pause, below the 6s nominal.
        assert_eq!(estimate_duration("a b c", 6.0, 150.0, 0.5), 6.0);
    }

    #[test]
    fn long_narration_extends_the_segment() {
        let text = vec!["word"; 150].join(" ");
        // 150 words at 150 wpm = 60s + 0.5s pause.
        let d = estimate_duration(&text, 30.0, 150.0, 0.5);
        assert!((d - 60.5).abs() < 1e-9);
    }
}
