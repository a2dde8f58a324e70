//! Visual-cue descriptors handed to the video composer alongside each segment.

use serde::{Deserialize, Serialize};

use crate::post::Post;

/// Comment cards shown by a `comment_section` cue.
const COMMENT_CARDS: usize = 3;

/// What the composer should put on screen for one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualCue {
    /// Visual kind from the template (e.g. `title_screen`, `text_overlay`).
    #[serde(rename = "type")]
    pub kind: String,
    pub elements: Vec<VisualElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VisualElement {
    Text {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<String>,
        #[serde(default)]
        scroll: bool,
    },
    Label {
        content: String,
        position: String,
    },
    Comment {
        author: String,
        content: String,
        score: i64,
    },
    Stat {
        label: String,
        value: i64,
    },
}

impl VisualCue {
    /// Build the cue for a visual kind. Kinds the composer draws without post data get no
    /// elements.
    pub fn for_kind(kind: &str, post: &Post) -> Self {
        let elements = match kind {
            "title_screen" => vec![
                VisualElement::Text {
                    content: post.title.clone(),
                    position: Some("center".to_owned()),
                    scroll: false,
                },
                VisualElement::Label {
                    content: format!("r/{}", post.subreddit),
                    position: "top".to_owned(),
                },
            ],
            "text_overlay" => vec![VisualElement::Text {
                content: post.body.clone(),
                position: None,
                scroll: true,
            }],
            "comment_section" => post
                .comments
                .iter()
                .take(COMMENT_CARDS)
                .map(|c| VisualElement::Comment {
                    author: c.author.clone(),
                    content: c.body.clone(),
                    score: c.score,
                })
                .collect(),
            "stats_display" => vec![
                VisualElement::Stat {
                    label: "Upvotes".to_owned(),
                    value: post.score,
                },
                VisualElement::Stat {
                    label: "Comments".to_owned(),
                    value: i64::try_from(post.num_comments).unwrap_or(i64::MAX),
                },
            ],
            _ => Vec::new(),
        };

        Self {
            kind: kind.to_owned(),
            elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Comment;

    fn post() -> Post {
        Post {
            title: "TIL X".to_owned(),
            subreddit: "todayilearned".to_owned(),
            author: "op".to_owned(),
            body: "Body text.".to_owned(),
            score: 42,
            num_comments: 7,
            comments: (0..5)
                .map(|i| Comment {
                    author: format!("user{i}"),
                    body: format!("comment {i}"),
                    score: 10 * i,
                    ..Comment::default()
                })
                .collect(),
            ..Post::default()
        }
    }

    #[test]
    fn title_screen_shows_title_and_subreddit() {
        let cue = VisualCue::for_kind("title_screen", &post());
        assert_eq!(cue.elements.len(), 2);
        assert_eq!(
            cue.elements[1],
            VisualElement::Label {
                content: "r/todayilearned".to_owned(),
                position: "top".to_owned(),
            }
        );
    }

    #[test]
    fn comment_section_caps_cards() {
        let cue = VisualCue::for_kind("comment_section", &post());
        assert_eq!(cue.elements.len(), 3);
    }

    #[test]
    fn unknown_kinds_have_no_elements() {
        let cue = VisualCue::for_kind("end_screen", &post());
        assert_eq!(cue.kind, "end_screen");
        assert!(cue.elements.is_empty());
    }

    #[test]
    fn serializes_kind_as_type() -> anyhow::Result<()> {
        let cue = VisualCue::for_kind("stats_display", &post());
        let json = serde_json::to_value(&cue)?;
        assert_eq!(json["type"], "stats_display");
        assert_eq!(json["elements"][0]["type"], "stat");
        assert_eq!(json["elements"][1]["value"], 7);
        Ok(())
    }
}
