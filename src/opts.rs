use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::NarrationStyle;

/// Options that control how a script is generated.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (batch jobs, tests) can construct options programmatically
///
/// Every field has a default, so a partial JSON/YAML document deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Opts {
    /// Speaking pace used to estimate how long narration takes to read.
    pub words_per_minute: f64,

    /// Seconds of breathing room added after each spoken segment.
    pub pause_duration: f64,

    /// Mention usernames in context and comment narration.
    pub show_usernames: bool,

    /// Mention upvote counts in context and comment narration.
    pub show_scores: bool,

    /// Mention award counts in context narration.
    pub show_awards: bool,

    /// Longest caption line before a sentence is wrapped.
    pub max_chars_per_line: usize,

    /// What to do with a required segment whose narration came out empty.
    pub empty_required: EmptyRequiredPolicy,

    /// Replace words in `profanity_replacements` before narration is returned.
    pub censor_profanity: bool,

    /// Case-insensitive whole-word replacements applied when `censor_profanity` is on.
    pub profanity_replacements: BTreeMap<String, String>,

    /// Phrase pools the narration builder picks from.
    pub phrases: PhrasePools,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            words_per_minute: 150.0,
            pause_duration: 0.5,
            show_usernames: true,
            show_scores: true,
            show_awards: true,
            max_chars_per_line: 42,
            empty_required: EmptyRequiredPolicy::default(),
            censor_profanity: false,
            profanity_replacements: BTreeMap::new(),
            phrases: PhrasePools::default(),
        }
    }
}

/// Policy for required segments whose narration builder returned nothing
/// (for example a comments segment on a post with no qualifying comments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRequiredPolicy {
    /// Keep the segment and narrate a fallback phrase for its content type.
    #[default]
    Fallback,
    /// Drop the segment like an optional one.
    Drop,
}

/// Pools of phrase templates. One entry is picked at random each time a pool is used.
///
/// `{subreddit}` in an intro phrase is replaced with the post's subreddit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhrasePools {
    pub intro: BTreeMap<NarrationStyle, Vec<String>>,
    pub to_comments: Vec<String>,
    pub engagement: Vec<String>,
    pub outro: Vec<String>,
}

impl PhrasePools {
    pub fn intro_for(&self, style: NarrationStyle) -> &[String] {
        self.intro.get(&style).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| (*p).to_owned()).collect()
}

impl Default for PhrasePools {
    fn default() -> Self {
        let intro = BTreeMap::from([
            (
                NarrationStyle::Casual,
                owned(&[
                    "Check out this post from Reddit",
                    "Here's an interesting story from r/{subreddit}",
                    "You won't believe what happened on Reddit",
                    "This Reddit post is wild",
                    "Let me tell you about this Reddit story",
                ]),
            ),
            (
                NarrationStyle::Formal,
                owned(&[
                    "Today we're looking at a post from r/{subreddit}",
                    "This is a story that was shared on Reddit",
                    "A user on Reddit shared this interesting post",
                ]),
            ),
            (
                NarrationStyle::Dramatic,
                owned(&[
                    "This is the story that shocked Reddit",
                    "What you're about to hear will blow your mind",
                    "The internet went crazy over this post",
                ]),
            ),
            (
                NarrationStyle::Comedic,
                owned(&[
                    "Reddit never disappoints, and this post proves it",
                    "Hold onto your hats for this one folks",
                    "The internet is a weird place, and here's proof",
                ]),
            ),
        ]);

        Self {
            intro,
            to_comments: owned(&[
                "Let's see what people had to say",
                "The comments section did not disappoint",
                "Here's what Redditors thought",
                "The best part is in the comments",
            ]),
            engagement: owned(&[
                "What do you think about this?",
                "Let me know in the comments",
                "Would you do the same thing?",
                "This is crazy, right?",
                "Drop your thoughts below",
            ]),
            outro: owned(&[
                "Thanks for watching! Hit that subscribe button for more Reddit content",
                "Don't forget to like and subscribe",
                "Follow for more stories from Reddit",
                "See you in the next one",
                "That's it for today, catch you later",
            ]),
        }
    }
}
