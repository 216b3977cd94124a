use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slug::slugify;

/// Post entity - a blog post as stored in the remote `posts` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub user_id: Uuid,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// First `max_chars` characters of the content, trimmed, with "..."
    /// appended only when something was cut.
    pub fn excerpt(&self, max_chars: usize) -> Cow<'_, str> {
        match self.content.char_indices().nth(max_chars) {
            None => Cow::Borrowed(&self.content),
            Some((cut, _)) => Cow::Owned(format!("{}...", self.content[..cut].trim())),
        }
    }

    /// First `max_chars` characters followed by "..." regardless of length.
    pub fn teaser(&self, max_chars: usize) -> String {
        let head: String = self.content.chars().take(max_chars).collect();
        format!("{head}...")
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        paragraphs(&self.content)
    }
}

/// Content split into paragraphs on blank lines.
pub fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

/// Title and content as submitted by the post form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Build the record body written to the store.
    pub fn into_write(self, image_url: Option<String>, user_id: Uuid) -> PostWrite {
        PostWrite {
            slug: slugify(&self.title),
            title: self.title,
            content: self.content,
            image_url,
            user_id,
        }
    }
}

/// Record body for insert and update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostWrite {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image_url: Option<String>,
    pub user_id: Uuid,
}

/// An image file attached to a post form submission.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Extension taken from the original file name.
    pub fn extension(&self) -> &str {
        match self.file_name.rsplit('.').next() {
            Some(ext) if !ext.is_empty() => ext,
            _ => "bin",
        }
    }

    /// Object name combining the target post and the upload time, so
    /// repeated edits of one post never reuse a name.
    pub fn object_name(&self, post_id: Uuid, at: DateTime<Utc>) -> String {
        format!("{}-{}.{}", post_id, at.timestamp_millis(), self.extension())
    }
}
