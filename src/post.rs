//! The post record consumed by the script generator.
//!
//! Posts are produced by an external fetch step and arrive here already saved as JSON.
//! We only deserialize and validate them; nothing in this crate talks to the network.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Keys every post record must carry before we attempt to build a script.
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "body", "subreddit", "author"];

/// A fetched social-media post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub subreddit: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub upvote_ratio: Option<f64>,
    #[serde(default)]
    pub num_comments: u64,
    pub body: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub awards: Vec<Award>,
}

/// A top-level comment on a post, in the order the fetcher returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub is_submitter: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Award {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

impl Post {
    /// Parse a post from a JSON document.
    ///
    /// Missing required keys are reported together as [`Error::InvalidPostData`] rather than
    /// as a serde error, so callers see every absent field at once.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a post from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let Some(obj) = value.as_object() else {
            return Err(Error::InvalidPostData(
                "post data must be a JSON object".to_owned(),
            ));
        };

        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| obj.get(*field).is_none_or(Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(Error::InvalidPostData(format!(
                "post data missing required fields: {}",
                missing.join(", ")
            )));
        }

        let post: Post = serde_json::from_value(value)?;
        Ok(post)
    }

    /// Check that the fields every template reads are present.
    ///
    /// An empty body is allowed (link and image posts have none); a blank title, subreddit,
    /// or author is not.
    pub fn validate(&self) -> Result<()> {
        let blank: Vec<&str> = [
            ("title", &self.title),
            ("subreddit", &self.subreddit),
            ("author", &self.author),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if blank.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidPostData(format!(
                "post data missing required fields: {}",
                blank.join(", ")
            )))
        }
    }

    /// The post id, or `"unknown"` when the fetcher didn't supply one.
    pub fn id_or_unknown(&self) -> &str {
        self.id.as_deref().unwrap_or("unknown")
    }

    /// Total award count, summing per-award counts (an award with count 0 still counts once).
    pub fn award_count(&self) -> u32 {
        self.awards.iter().map(|a| a.count.max(1)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_reports_all_missing_fields() {
        let err = Post::from_json(r#"{"title": "hi", "author": "me"}"#).unwrap_err();
        match err {
            Error::InvalidPostData(msg) => {
                assert!(msg.contains("body"));
                assert!(msg.contains("subreddit"));
                assert!(!msg.contains("title"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_json_rejects_non_objects() {
        let err = Post::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::InvalidPostData(_)));
    }

    #[test]
    fn from_json_fills_optional_fields_with_defaults() -> anyhow::Result<()> {
        let post = Post::from_json(
            r#"{"title": "t", "body": "", "subreddit": "rust", "author": "ferris",
                "comments": [{"author": "a", "body": "nice", "score": 12}]}"#,
        )?;
        assert_eq!(post.id_or_unknown(), "unknown");
        assert_eq!(post.score, 0);
        assert_eq!(post.comments.len(), 1);
        assert!(!post.comments[0].is_submitter);
        assert!(post.awards.is_empty());
        Ok(())
    }

    #[test]
    fn validate_allows_empty_body_but_not_blank_author() {
        let mut post = Post {
            title: "t".to_owned(),
            author: "a".to_owned(),
            subreddit: "s".to_owned(),
            ..Post::default()
        };
        assert!(post.validate().is_ok());

        post.author = "  ".to_owned();
        let err = post.validate().unwrap_err();
        assert!(err.to_string().contains("author"));
    }

    #[test]
    fn award_count_sums_counts() {
        let post = Post {
            awards: vec![
                Award {
                    name: "Gold".to_owned(),
                    count: 5,
                },
                Award {
                    name: "Silver".to_owned(),
                    count: 0,
                },
            ],
            ..Post::default()
        };
        assert_eq!(post.award_count(), 6);
    }
}
