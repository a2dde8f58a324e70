//! Narration text for each content type.
//!
//! Phrase selection is random on purpose so a batch of videos doesn't open the same way every
//! time. The random source is passed in by the caller; seed it to pin output in tests.

use rand::Rng;
use rand::seq::IndexedRandom;
use regex::{Regex, RegexBuilder};

use crate::opts::Opts;
use crate::post::{Comment, Post};
use crate::style::NarrationStyle;
use crate::template::{ContentType, ScriptFormat};

const DEFAULT_INTRO: &str = "Here's an interesting post from r/{subreddit}";
const DEFAULT_ENGAGEMENT: &str = "What do you think?";
const DEFAULT_OUTRO: &str = "Thanks for watching!";

/// Words of the title used by a teaser when the title has no colon.
const TEASER_WORDS: usize = 10;

/// Comments scoring above this get their upvotes read out.
const READ_SCORE_ABOVE: i64 = 50;

/// Builds narration strings from a post. Holds no state besides a borrow of the options.
pub struct NarrationBuilder<'a> {
    opts: &'a Opts,
}

impl<'a> NarrationBuilder<'a> {
    pub fn new(opts: &'a Opts) -> Self {
        Self { opts }
    }

    /// Narration for one segment. Returns an empty string when the post has nothing to say
    /// for this content type (no body, no qualifying comments, ...).
    pub fn build<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        post: &Post,
        content_type: ContentType,
        format: ScriptFormat,
        style: NarrationStyle,
    ) -> String {
        let text = match content_type {
            ContentType::Intro => self.intro(rng, post, style),
            ContentType::Title => title(post, style),
            ContentType::Context => self.context(post),
            ContentType::Body => body(post, format),
            ContentType::Continuation => continuation(post, format),
            ContentType::Comments => self.comments(rng, post, format),
            ContentType::Engagement => pick(rng, &self.opts.phrases.engagement, DEFAULT_ENGAGEMENT),
            ContentType::Outro => pick(rng, &self.opts.phrases.outro, DEFAULT_OUTRO),
            ContentType::Teaser => teaser(post, style),
            ContentType::Summary => summary(post),
        };

        self.censor(text)
    }

    /// Narration for a required segment whose regular narration came out empty.
    pub fn fallback(&self, post: &Post, content_type: ContentType) -> String {
        let text = match content_type {
            ContentType::Comments => "Nobody had much to say in the comments on this one".to_owned(),
            ContentType::Body | ContentType::Continuation => {
                "There's no text in this post, just the title".to_owned()
            }
            ContentType::Context => format!("Posted in r/{}", post.subreddit),
            ContentType::Intro => DEFAULT_INTRO.replace("{subreddit}", &post.subreddit),
            ContentType::Engagement => DEFAULT_ENGAGEMENT.to_owned(),
            ContentType::Outro => DEFAULT_OUTRO.to_owned(),
            ContentType::Title | ContentType::Teaser | ContentType::Summary => post.title.clone(),
        };

        self.censor(text)
    }

    fn intro<R: Rng + ?Sized>(&self, rng: &mut R, post: &Post, style: NarrationStyle) -> String {
        pick(rng, self.opts.phrases.intro_for(style), DEFAULT_INTRO)
            .replace("{subreddit}", &post.subreddit)
    }

    fn context(&self, post: &Post) -> String {
        let mut parts = Vec::new();

        if self.opts.show_usernames {
            parts.push(format!("Posted by u/{}", post.author));
        }
        if self.opts.show_scores && post.score != 0 {
            parts.push(format!("{} upvotes", group_thousands(post.score)));
        }
        if self.opts.show_awards && !post.awards.is_empty() {
            parts.push(format!("{} awards", post.award_count()));
        }

        join_sentences(&parts)
    }

    fn comments<R: Rng + ?Sized>(&self, rng: &mut R, post: &Post, format: ScriptFormat) -> String {
        let selection = format.comment_selection();
        let selected: Vec<&Comment> = post
            .comments
            .iter()
            .filter(|c| c.score >= selection.min_score)
            .take(selection.max_comments)
            .collect();

        if selected.is_empty() {
            return String::new();
        }

        let mut parts = Vec::with_capacity(selected.len() + 1);
        if let Some(transition) = self.opts.phrases.to_comments.choose(rng) {
            parts.push(transition.clone());
        }

        let max_chars = format.max_comment_chars();
        for comment in selected {
            let body = truncate_chars(comment.body.trim(), max_chars);
            let mut line = if self.opts.show_usernames {
                let author = if comment.author.is_empty() {
                    "someone"
                } else {
                    comment.author.as_str()
                };
                format!("u/{author} said: {body}")
            } else {
                format!("One person said: {body}")
            };

            if self.opts.show_scores && comment.score > READ_SCORE_ABOVE {
                line = format!("{}. This got {} upvotes", strip_period(&line), comment.score);
            }
            parts.push(line);
        }

        join_sentences(&parts)
    }

    fn censor(&self, text: String) -> String {
        if !self.opts.censor_profanity || self.opts.profanity_replacements.is_empty() {
            return text;
        }

        self.opts
            .profanity_replacements
            .iter()
            .filter_map(|(word, replacement)| word_pattern(word).map(|re| (re, replacement)))
            .fold(text, |acc, (re, replacement)| {
                re.replace_all(&acc, regex::NoExpand(replacement.as_str())).into_owned()
            })
    }
}

fn title(post: &Post, style: NarrationStyle) -> String {
    match style.title_prefix() {
        Some(prefix) => format!("{prefix} {}", post.title),
        None => post.title.clone(),
    }
}

fn body(post: &Post, format: ScriptFormat) -> String {
    let words: Vec<&str> = post.body.split_whitespace().collect();
    take_words(&words, 0, format.body_word_budget())
}

fn continuation(post: &Post, format: ScriptFormat) -> String {
    let words: Vec<&str> = post.body.split_whitespace().collect();
    let budget = format.body_word_budget();
    take_words(&words, budget, budget)
}

fn summary(post: &Post) -> String {
    let words: Vec<&str> = post.body.split_whitespace().collect();
    let excerpt = take_words(&words, 0, ScriptFormat::Short.body_word_budget());
    let title = post.title.trim();
    if excerpt.is_empty() {
        title.to_owned()
    } else if title.ends_with(['.', '!', '?']) {
        format!("{title} {excerpt}")
    } else {
        format!("{title}. {excerpt}")
    }
}

fn teaser(post: &Post, style: NarrationStyle) -> String {
    let teaser = match post.title.split_once(':') {
        Some((clause, _)) => clause.trim().to_owned(),
        None => post
            .title
            .split_whitespace()
            .take(TEASER_WORDS)
            .collect::<Vec<_>>()
            .join(" "),
    };

    match style {
        NarrationStyle::Dramatic => format!("You need to hear this story about {teaser}"),
        _ => teaser,
    }
}

/// Words `[skip, skip + budget)`, with an ellipsis when more words follow.
fn take_words(words: &[&str], skip: usize, budget: usize) -> String {
    if skip >= words.len() {
        return String::new();
    }

    let rest = &words[skip..];
    if rest.len() > budget {
        format!("{}...", rest[..budget].join(" "))
    } else {
        rest.join(" ")
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_owned(),
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[String], default: &str) -> String {
    pool.choose(rng)
        .cloned()
        .unwrap_or_else(|| default.to_owned())
}

/// Join parts with `". "` and end with a period, without doubling periods a part already has.
fn join_sentences(parts: &[String]) -> String {
    if parts.is_empty() {
        return String::new();
    }

    let joined = parts
        .iter()
        .map(|p| strip_period(p.trim()))
        .collect::<Vec<_>>()
        .join(". ");
    if joined.ends_with("...") || joined.ends_with(['!', '?']) {
        joined
    } else {
        format!("{joined}.")
    }
}

/// Drop a single trailing period, keeping ellipses intact.
fn strip_period(s: &str) -> &str {
    if s.ends_with("...") {
        s
    } else {
        s.strip_suffix('.').unwrap_or(s)
    }
}

fn word_pattern(word: &str) -> Option<Regex> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Render an integer with comma thousands separators (`15234` → `15,234`).
pub(crate) fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Award;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn post() -> Post {
        Post {
            id: Some("abc".to_owned()),
            title: "TIL octopuses have three hearts: and blue blood".to_owned(),
            author: "op".to_owned(),
            subreddit: "todayilearned".to_owned(),
            score: 15234,
            body: "Two pump blood to the gills. The third pumps it everywhere else.".to_owned(),
            comments: vec![
                Comment {
                    author: "alice".to_owned(),
                    body: "Fascinating!".to_owned(),
                    score: 5000,
                    ..Comment::default()
                },
                Comment {
                    author: "bob".to_owned(),
                    body: "Learned this in class.".to_owned(),
                    score: 20,
                    ..Comment::default()
                },
            ],
            awards: vec![Award {
                name: "Gold".to_owned(),
                count: 2,
            }],
            ..Post::default()
        }
    }

    fn build(opts: &Opts, content_type: ContentType, format: ScriptFormat, style: NarrationStyle) -> String {
        let mut rng = StdRng::seed_from_u64(7);
        NarrationBuilder::new(opts).build(&mut rng, &post(), content_type, format, style)
    }

    #[test]
    fn title_prefix_depends_on_style() {
        let opts = Opts::default();
        let plain = &post().title;
        assert_eq!(&build(&opts, ContentType::Title, ScriptFormat::Medium, NarrationStyle::Casual), plain);
        assert_eq!(&build(&opts, ContentType::Title, ScriptFormat::Medium, NarrationStyle::Formal), plain);
        assert_eq!(
            build(&opts, ContentType::Title, ScriptFormat::Medium, NarrationStyle::Dramatic),
            format!("Listen to this: {plain}")
        );
        assert_eq!(
            build(&opts, ContentType::Title, ScriptFormat::Medium, NarrationStyle::Comedic),
            format!("Get this: {plain}")
        );
    }

    #[test]
    fn intro_substitutes_subreddit() {
        let mut opts = Opts::default();
        opts.phrases
            .intro
            .insert(NarrationStyle::Casual, vec!["Straight from r/{subreddit}".to_owned()]);
        assert_eq!(
            build(&opts, ContentType::Intro, ScriptFormat::Medium, NarrationStyle::Casual),
            "Straight from r/todayilearned"
        );
    }

    #[test]
    fn empty_pools_fall_back_to_defaults() {
        let mut opts = Opts::default();
        opts.phrases.intro.clear();
        opts.phrases.outro.clear();
        assert_eq!(
            build(&opts, ContentType::Intro, ScriptFormat::Medium, NarrationStyle::Formal),
            "Here's an interesting post from r/todayilearned"
        );
        assert_eq!(
            build(&opts, ContentType::Outro, ScriptFormat::Medium, NarrationStyle::Formal),
            "Thanks for watching!"
        );
    }

    #[test]
    fn context_joins_available_parts() {
        let opts = Opts::default();
        assert_eq!(
            build(&opts, ContentType::Context, ScriptFormat::Medium, NarrationStyle::Casual),
            "Posted by u/op. 15,234 upvotes. 2 awards."
        );
    }

    #[test]
    fn context_is_empty_when_everything_is_hidden() {
        let opts = Opts {
            show_usernames: false,
            show_scores: false,
            show_awards: false,
            ..Opts::default()
        };
        assert_eq!(
            build(&opts, ContentType::Context, ScriptFormat::Medium, NarrationStyle::Casual),
            ""
        );
    }

    #[test]
    fn body_is_truncated_to_word_budget() {
        let mut p = post();
        p.body = (0..300).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        let opts = Opts::default();
        let mut rng = StdRng::seed_from_u64(1);
        let b = NarrationBuilder::new(&opts);

        let medium = b.build(&mut rng, &p, ContentType::Body, ScriptFormat::Medium, NarrationStyle::Casual);
        assert!(medium.ends_with("w149..."));
        assert_eq!(medium.split_whitespace().count(), 150);

        let rest = b.build(&mut rng, &p, ContentType::Continuation, ScriptFormat::Medium, NarrationStyle::Casual);
        assert!(rest.starts_with("w150 "));
        assert!(rest.ends_with("w299"));

        let long = b.build(&mut rng, &p, ContentType::Body, ScriptFormat::Long, NarrationStyle::Casual);
        assert!(!long.ends_with("..."));
        let none = b.build(&mut rng, &p, ContentType::Continuation, ScriptFormat::Long, NarrationStyle::Casual);
        assert!(none.is_empty());
    }

    #[test]
    fn comments_respect_format_threshold() {
        let opts = Opts {
            phrases: crate::opts::PhrasePools {
                to_comments: vec!["Here's what people said".to_owned()],
                ..Default::default()
            },
            ..Opts::default()
        };

        let medium = build(&opts, ContentType::Comments, ScriptFormat::Medium, NarrationStyle::Casual);
        assert_eq!(
            medium,
            "Here's what people said. u/alice said: Fascinating!. This got 5000 upvotes."
        );

        let long = build(&opts, ContentType::Comments, ScriptFormat::Long, NarrationStyle::Casual);
        assert!(long.contains("u/bob said: Learned this in class."));
    }

    #[test]
    fn comments_empty_without_qualifying_comments() {
        let opts = Opts::default();
        let mut p = post();
        p.comments.iter_mut().for_each(|c| c.score = 1);
        let mut rng = StdRng::seed_from_u64(3);
        let text = NarrationBuilder::new(&opts).build(
            &mut rng,
            &p,
            ContentType::Comments,
            ScriptFormat::Medium,
            NarrationStyle::Casual,
        );
        assert!(text.is_empty());
    }

    #[test]
    fn long_comments_are_cut_by_chars() {
        assert_eq!(truncate_chars("héllo world", 5), "héllo...");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn teaser_uses_first_clause_or_first_words() {
        let opts = Opts::default();
        assert_eq!(
            build(&opts, ContentType::Teaser, ScriptFormat::Long, NarrationStyle::Casual),
            "TIL octopuses have three hearts"
        );
        assert_eq!(
            build(&opts, ContentType::Teaser, ScriptFormat::Long, NarrationStyle::Dramatic),
            "You need to hear this story about TIL octopuses have three hearts"
        );

        let mut p = post();
        p.title = "one two three four five six seven eight nine ten eleven twelve".to_owned();
        assert_eq!(teaser(&p, NarrationStyle::Formal), "one two three four five six seven eight nine ten");
    }

    #[test]
    fn summary_combines_title_and_excerpt() {
        assert_eq!(
            summary(&post()),
            "TIL octopuses have three hearts: and blue blood. Two pump blood to the gills. The third pumps it everywhere else."
        );
    }

    #[test]
    fn censoring_replaces_whole_words_case_insensitively() {
        let mut opts = Opts {
            censor_profanity: true,
            ..Opts::default()
        };
        opts.profanity_replacements
            .insert("hearts".to_owned(), "****".to_owned());
        assert_eq!(
            build(&opts, ContentType::Title, ScriptFormat::Medium, NarrationStyle::Casual),
            "TIL octopuses have three ****: and blue blood"
        );
    }

    #[test]
    fn fallbacks_are_never_empty() {
        let opts = Opts::default();
        let b = NarrationBuilder::new(&opts);
        for ct in [
            ContentType::Intro,
            ContentType::Title,
            ContentType::Context,
            ContentType::Body,
            ContentType::Continuation,
            ContentType::Comments,
            ContentType::Engagement,
            ContentType::Outro,
            ContentType::Teaser,
            ContentType::Summary,
        ] {
            assert!(!b.fallback(&post(), ct).is_empty(), "{ct} fallback is empty");
        }
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(15234), "15,234");
        assert_eq!(group_thousands(-1234567), "-1,234,567");
    }
}
